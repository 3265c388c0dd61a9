//! Core wyre library: widget identities, events, and the event dispatcher.

pub mod dispatch;
pub mod effects;
pub mod events;
pub mod widget;

pub use dispatch::{Callback, Dispatcher};
pub use effects::UiEffect;
pub use events::{EventKind, WidgetEvent};
pub use widget::{ScopeId, WidgetId};
