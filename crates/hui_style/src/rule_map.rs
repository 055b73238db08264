//! Realized rule sets

use indexmap::IndexMap;

use crate::error::{Result, StyleError};
use crate::key::StyleKey;
use crate::template::ROOT_RULE;

/// A rule after composition: its class token and rendered CSS
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RealizedRule {
    pub class: String,
    pub css: String,
}

/// Rule name to realized rule, in template order
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RuleMap {
    key: StyleKey,
    rules: IndexMap<&'static str, RealizedRule>,
}

impl RuleMap {
    pub(crate) fn new(key: StyleKey, rules: IndexMap<&'static str, RealizedRule>) -> Self {
        Self { key, rules }
    }

    pub fn key(&self) -> &StyleKey {
        &self.key
    }

    pub fn template(&self) -> &'static str {
        self.key.template
    }

    /// Class token of `rule`
    pub fn class(&self, rule: &str) -> Result<&str> {
        self.rules
            .get(rule)
            .map(|realized| realized.class.as_str())
            .ok_or_else(|| StyleError::UnknownRule {
                template: self.key.template.to_string(),
                rule: rule.to_string(),
            })
    }

    pub fn root_class(&self) -> Result<&str> {
        self.class(ROOT_RULE)
    }

    pub fn get(&self, rule: &str) -> Option<&RealizedRule> {
        self.rules.get(rule)
    }

    /// Rendered CSS of `rule`
    pub fn css(&self, rule: &str) -> Result<&str> {
        self.rules
            .get(rule)
            .map(|realized| realized.css.as_str())
            .ok_or_else(|| StyleError::UnknownRule {
                template: self.key.template.to_string(),
                rule: rule.to_string(),
            })
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &RealizedRule)> {
        self.rules.iter().map(|(name, rule)| (*name, rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules' CSS in template order
    pub fn stylesheet(&self) -> String {
        self.rules.values().map(|rule| rule.css.as_str()).collect()
    }
}
