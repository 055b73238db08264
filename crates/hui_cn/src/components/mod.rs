//! Built-in components
//!
//! Each module owns one [`hui_style::StyleTemplate`] and the component(s)
//! rendering through it.

pub mod anchor;
pub mod drawer;
pub mod form_control;
pub mod label;
pub mod radio;
pub mod shared;
pub mod table_head;
pub mod text_area;
pub mod typography;

pub use anchor::{anchor, Anchor, ANCHOR_STYLES};
pub use drawer::{drawer, Drawer, DRAWER_STYLES};
pub use form_control::{form_control, FormControl, FormControlContext, FORM_CONTROL_STYLES};
pub use label::{label, Label, LabelTone, LABEL_STYLES};
pub use radio::{
    radio, radio_group, Radio, RadioGroup, RadioGroupContext, RadioSize, RADIO_GROUP_STYLES,
    RADIO_STYLES,
};
pub use shared::{StateFlags, StateProps, StyleProps, Styled};
pub use table_head::{table_head, TableHead, TABLE_HEAD_STYLES};
pub use text_area::{text_area, TextArea, TextAreaVariant, TEXT_AREA_STYLES};
pub use typography::{typography, Typography, TYPOGRAPHY_STYLES};

use hui_style::StyleTemplate;

/// Every built-in template, in a stable order
pub const ALL_TEMPLATES: &[&StyleTemplate] = &[
    &ANCHOR_STYLES,
    &DRAWER_STYLES,
    &FORM_CONTROL_STYLES,
    &LABEL_STYLES,
    &RADIO_STYLES,
    &RADIO_GROUP_STYLES,
    &TABLE_HEAD_STYLES,
    &TEXT_AREA_STYLES,
    &TYPOGRAPHY_STYLES,
];
