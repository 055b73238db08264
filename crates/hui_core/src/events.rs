//! Focus and change events delivered to interactive components
//!
//! The host owns real event dispatch. It hands components these small
//! payloads, and components forward them to caller callbacks after doing
//! their own bookkeeping.

use std::sync::Arc;

/// Event type identifier
pub type EventType = u32;

/// Event types the component layer reacts to
pub mod event_types {
    use super::EventType;

    pub const FOCUS: EventType = 10;
    pub const BLUR: EventType = 11;
    pub const CHANGE: EventType = 12;
    pub const CLICK: EventType = 13;
}

/// Focus gained or lost
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FocusEvent {
    pub event_type: EventType,
    /// `id` attribute of the element that received the event, if any
    pub target: Option<String>,
}

impl FocusEvent {
    pub fn focus(target: Option<String>) -> Self {
        Self {
            event_type: event_types::FOCUS,
            target,
        }
    }

    pub fn blur(target: Option<String>) -> Self {
        Self {
            event_type: event_types::BLUR,
            target,
        }
    }

    pub fn is_focus(&self) -> bool {
        self.event_type == event_types::FOCUS
    }
}

/// Value change on an input-like element
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChangeEvent {
    pub target: Option<String>,
    pub value: String,
    pub checked: bool,
}

impl ChangeEvent {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            target: None,
            value: value.into(),
            checked: false,
        }
    }

    pub fn checked(mut self, checked: bool) -> Self {
        self.checked = checked;
        self
    }
}

/// Caller-supplied focus/blur callback
pub type FocusHandler = Arc<dyn Fn(&FocusEvent) + Send + Sync>;

/// Caller-supplied change callback
pub type ChangeHandler = Arc<dyn Fn(&ChangeEvent) + Send + Sync>;

/// Caller-supplied click callback without payload (backdrops, close buttons)
pub type ClickHandler = Arc<dyn Fn() + Send + Sync>;
