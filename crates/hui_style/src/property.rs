//! The closed set of CSS properties style rules may declare

use std::fmt;

/// A CSS property
///
/// Rules can only declare properties listed here, so a misspelled property
/// name is a compile error rather than a silently ignored declaration.
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Property {
    // Box
    Display,
    Position,
    Top,
    Right,
    Bottom,
    Left,
    Width,
    Height,
    MaxWidth,
    Margin,
    Padding,
    Flex,
    FlexDirection,
    JustifyContent,
    AlignItems,
    ZIndex,

    // Paint
    Color,
    Background,
    BackgroundColor,
    Border,
    BorderRadius,
    BoxShadow,
    Outline,
    Opacity,
    Fill,

    // Text
    FontSize,
    FontWeight,
    LineHeight,
    TextTransform,
    TextDecoration,

    // Interaction
    Appearance,
    Cursor,
    PointerEvents,
    Transition,
}

impl Property {
    /// The CSS property name
    pub fn name(self) -> &'static str {
        match self {
            Property::Display => "display",
            Property::Position => "position",
            Property::Top => "top",
            Property::Right => "right",
            Property::Bottom => "bottom",
            Property::Left => "left",
            Property::Width => "width",
            Property::Height => "height",
            Property::MaxWidth => "max-width",
            Property::Margin => "margin",
            Property::Padding => "padding",
            Property::Flex => "flex",
            Property::FlexDirection => "flex-direction",
            Property::JustifyContent => "justify-content",
            Property::AlignItems => "align-items",
            Property::ZIndex => "z-index",
            Property::Color => "color",
            Property::Background => "background",
            Property::BackgroundColor => "background-color",
            Property::Border => "border",
            Property::BorderRadius => "border-radius",
            Property::BoxShadow => "box-shadow",
            Property::Outline => "outline",
            Property::Opacity => "opacity",
            Property::Fill => "fill",
            Property::FontSize => "font-size",
            Property::FontWeight => "font-weight",
            Property::LineHeight => "line-height",
            Property::TextTransform => "text-transform",
            Property::TextDecoration => "text-decoration",
            Property::Appearance => "appearance",
            Property::Cursor => "cursor",
            Property::PointerEvents => "pointer-events",
            Property::Transition => "transition",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
