//! Listener registry owned by one slider instance.
//!
//! Every listener the core asks the host for is recorded here, tagged with
//! the group that owns it, so it can be released deterministically: a
//! gesture's document-level listeners on release, the readiness listeners
//! once the gate settles, and everything on `destroy()`.

use crate::host::{HostSurface, ListenerId, ListenerKind, ListenerScope};

/// Why a listener was registered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerGroup {
    /// Image load/error notifications awaited by the readiness gate
    Readiness,
    /// Element-level input attached once the pair is ready
    Input,
    /// Window-level resize/orientation
    Layout,
    /// Document-level move/up for the current gesture only
    Gesture,
}

#[derive(Debug, Clone, Copy)]
struct Subscription {
    id: ListenerId,
    group: ListenerGroup,
    scope: ListenerScope,
    kind: ListenerKind,
}

/// Explicit set of live listeners.
#[derive(Debug, Default)]
pub struct Subscriptions {
    entries: Vec<Subscription>,
}

impl Subscriptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener with the host and remember it.
    pub fn add(
        &mut self,
        host: &mut impl HostSurface,
        group: ListenerGroup,
        scope: ListenerScope,
        kind: ListenerKind,
    ) -> ListenerId {
        let id = host.add_listener(scope, kind);
        tracing::trace!(?group, ?scope, %kind, listener = id.0, "Listener added");
        self.entries.push(Subscription {
            id,
            group,
            scope,
            kind,
        });
        id
    }

    /// Remove every listener of `group`. Returns how many were removed.
    pub fn remove_group(&mut self, host: &mut impl HostSurface, group: ListenerGroup) -> usize {
        let mut removed = 0;
        self.entries.retain(|entry| {
            if entry.group == group {
                host.remove_listener(entry.id);
                removed += 1;
                false
            } else {
                true
            }
        });
        if removed > 0 {
            tracing::trace!(?group, removed, "Listener group removed");
        }
        removed
    }

    /// Remove every listener. Safe to call repeatedly.
    pub fn clear(&mut self, host: &mut impl HostSurface) -> usize {
        let removed = self.entries.len();
        for entry in self.entries.drain(..) {
            host.remove_listener(entry.id);
        }
        removed
    }

    pub fn has_group(&self, group: ListenerGroup) -> bool {
        self.entries.iter().any(|e| e.group == group)
    }

    /// True if a listener for `kind` is attached in `scope`
    pub fn is_listening(&self, scope: ListenerScope, kind: ListenerKind) -> bool {
        self.entries.iter().any(|e| e.scope == scope && e.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
