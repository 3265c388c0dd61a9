//! The event dispatcher (callback registry).
//!
//! Maps `(WidgetId, EventKind)` to a callback and routes incoming events
//! to the matching one. Single-listener semantics: binding the same pair
//! twice silently replaces the earlier callback, matching host toolkits
//! that hold one listener per widget role.
//!
//! ## Threading discipline
//!
//! Bindings are installed during screen setup and read during dispatch,
//! all on the host's single dispatch thread. No locking; the dispatcher
//! is deliberately not shared across threads.

use std::collections::HashMap;

use crate::effects::UiEffect;
use crate::events::{EventKind, WidgetEvent};
use crate::widget::{ScopeId, WidgetId};

/// A bound callback: receives the firing widget and the event payload,
/// returns display effects for the host runtime to execute.
pub type Callback = Box<dyn FnMut(WidgetId, &WidgetEvent) -> Vec<UiEffect>>;

struct Binding {
    scope: ScopeId,
    callback: Callback,
}

/// Registry of `(widget, event kind) -> callback` bindings.
#[derive(Default)]
pub struct Dispatcher {
    bindings: HashMap<(WidgetId, EventKind), Binding>,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for `(widget, kind)` under a teardown scope.
    ///
    /// Silently overwrites any existing binding for the pair; the latest
    /// callback wins.
    pub fn bind(
        &mut self,
        scope: ScopeId,
        widget: WidgetId,
        kind: EventKind,
        callback: impl FnMut(WidgetId, &WidgetEvent) -> Vec<UiEffect> + 'static,
    ) {
        let previous = self.bindings.insert(
            (widget, kind),
            Binding {
                scope,
                callback: Box::new(callback),
            },
        );
        if previous.is_some() {
            tracing::debug!(%widget, ?kind, "rebinding replaced existing callback");
        }
    }

    /// Routes `event` to the callback bound for `(widget, event.kind())`.
    ///
    /// Invokes the callback synchronously and returns its effects. An
    /// unbound pair is silently ignored and yields no effects; it is never
    /// an error, mirroring hosts that only invoke what was bound.
    pub fn dispatch(&mut self, widget: WidgetId, event: &WidgetEvent) -> Vec<UiEffect> {
        match self.bindings.get_mut(&(widget, event.kind())) {
            Some(binding) => (binding.callback)(widget, event),
            None => {
                tracing::trace!(%widget, kind = ?event.kind(), "no binding; event ignored");
                Vec::new()
            }
        }
    }

    /// Removes every binding owned by `scope`, dropping its callbacks.
    ///
    /// Call before the owning screen is discarded so later events cannot
    /// reach dead callbacks.
    pub fn unbind_all(&mut self, scope: ScopeId) {
        let before = self.bindings.len();
        self.bindings.retain(|_, binding| binding.scope != scope);
        tracing::debug!(%scope, removed = before - self.bindings.len(), "unbound scope");
    }

    /// Returns true if a callback is bound for `(widget, kind)`.
    pub fn is_bound(&self, widget: WidgetId, kind: EventKind) -> bool {
        self.bindings.contains_key(&(widget, kind))
    }

    /// Number of live bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}
