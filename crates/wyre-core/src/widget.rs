//! Widget and scope identities.
//!
//! `WidgetId` is an opaque handle to a screen element; the host UI tree
//! assigns it once and never reuses it within a screen. `ScopeId` names a
//! teardown scope (typically one screen) so all of its bindings can be
//! released together.

use std::fmt;

/// Opaque identifier for a UI widget (button, switch, slider, image).
///
/// Immutable once assigned; owned by the host UI tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(u32);

impl WidgetId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

/// Identifier for a binding teardown scope (e.g. one screen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScopeId(u32);

impl ScopeId {
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "scope#{}", self.0)
    }
}
