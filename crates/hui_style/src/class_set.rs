//! Unordered class unions

use smallvec::SmallVec;

use crate::error::Result;
use crate::rule_map::RuleMap;

/// A set of class tokens
///
/// Order carries no meaning: two sets are equal when they hold the same
/// tokens. Templates are written so rules applied together never set the
/// same property, which keeps the union order-independent.
#[derive(Clone, Debug, Default)]
pub struct ClassSet {
    classes: SmallVec<[String; 4]>,
}

impl ClassSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a class (empty tokens and duplicates are ignored)
    pub fn with(mut self, class: impl Into<String>) -> Self {
        self.insert(class);
        self
    }

    pub fn with_if(self, condition: bool, class: impl Into<String>) -> Self {
        if condition {
            self.with(class)
        } else {
            self
        }
    }

    /// Add the class of `rule`
    pub fn rule(self, rules: &RuleMap, rule: &str) -> Result<Self> {
        Ok(self.with(rules.class(rule)?))
    }

    /// Add the class of `rule` when `condition` holds
    ///
    /// The rule name is checked either way, so a typo fails on every render
    /// rather than only when the condition is true.
    pub fn rule_if(self, rules: &RuleMap, condition: bool, rule: &str) -> Result<Self> {
        let class = rules.class(rule)?;
        Ok(self.with_if(condition, class))
    }

    /// Returns `true` if the class was not present
    pub fn insert(&mut self, class: impl Into<String>) -> bool {
        let class = class.into();
        if class.is_empty() || self.contains(&class) {
            return false;
        }
        self.classes.push(class);
        true
    }

    pub fn union(mut self, other: ClassSet) -> Self {
        self.extend(other);
        self
    }

    pub fn contains(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.classes.iter().map(String::as_str)
    }
}

impl PartialEq for ClassSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|c| other.contains(c))
    }
}

impl Eq for ClassSet {}

impl<S: Into<String>> Extend<S> for ClassSet {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        for class in iter {
            self.insert(class);
        }
    }
}

impl<S: Into<String>> FromIterator<S> for ClassSet {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut set = ClassSet::new();
        set.extend(iter);
        set
    }
}

impl IntoIterator for ClassSet {
    type Item = String;
    type IntoIter = smallvec::IntoIter<[String; 4]>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.into_iter()
    }
}
