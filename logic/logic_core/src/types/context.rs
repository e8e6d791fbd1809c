//! Context tags attached to resolved rules.
//!
//! An execution context says *when* a rule is evaluated, a template context
//! says *where* (which kind of window or frame). Both have an explicit
//! "none" value that rules fall back to when their context group key does
//! not match any binding.

use bitflags::bitflags;
use std::fmt;

bitflags! {
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    /// The moments at which a rule is evaluated, as a bit set.
    ///
    /// The empty set is the "none" context.
    pub struct ExecutionContext: u32 {
        const VIEW_CHANGING = 1 << 0;
        const OBJECT_CHANGED = 1 << 1;
        const OBJECT_SPACE_RELOADED = 1 << 2;
        const CURRENT_OBJECT_CHANGED = 1 << 3;
        const OBJECT_SPACE_OBJECT_CHANGED = 1 << 4;
        const VIEW_CONTROLS_CREATED = 1 << 5;
        const VIEW_CONTROL_ADDING = 1 << 6;
        const TEMPLATE_VIEW_CHANGED = 1 << 7;
        const CONTROLLER_ACTIVATED = 1 << 8;
        const VIEW_ACTIVATED = 1 << 9;
        const OBJECT_SPACE_COMMITTING = 1 << 10;
        const OBJECT_SPACE_COMMITTED = 1 << 11;
    }
}

impl ExecutionContext {
    /// The "none" execution context.
    pub const NONE: Self = Self::empty();

    /// Whether this is the "none" context.
    pub fn is_none(&self) -> bool {
        self.is_empty()
    }
}

impl Default for ExecutionContext {
    fn default() -> Self {
        Self::NONE
    }
}

/// The kind of frame or window a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TemplateContext {
    /// No template context.
    #[default]
    None,

    /// The main application window.
    ApplicationWindow,

    /// A regular view window.
    View,

    /// A popup window.
    PopupWindow,

    /// A lookup editor's dropdown control.
    LookupControl,

    /// A lookup window.
    LookupWindow,

    /// A frame nested inside another view.
    NestedFrame,
}

impl fmt::Display for TemplateContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "None",
            Self::ApplicationWindow => "ApplicationWindow",
            Self::View => "View",
            Self::PopupWindow => "PopupWindow",
            Self::LookupControl => "LookupControl",
            Self::LookupWindow => "LookupWindow",
            Self::NestedFrame => "NestedFrame",
        };
        f.write_str(name)
    }
}
