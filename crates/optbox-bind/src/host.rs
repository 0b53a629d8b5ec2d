//! Host capability interface
//!
//! Everything the binder needs from the page: locate nodes, read and write
//! control state, listen for events and synthesize them. Hosts are
//! single-threaded and use interior mutability, so every method takes
//! `&self` and listeners may call back into the host while an event is being
//! dispatched. Listeners receive the host as an argument and must not
//! capture it.

use std::rc::Rc;

use crate::selector::Selector;

/// Opaque reference to a node owned by a host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    Click,
    /// A committed state change (toggle, select commit).
    Change,
    /// A text edit.
    Input,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Change => "change",
            EventKind::Input => "input",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    /// Node the event was dispatched on.
    pub target: NodeHandle,
    /// Node whose listener is running.
    pub current_target: NodeHandle,
}

pub type Listener = Rc<dyn Fn(&dyn Host, &Event)>;

/// Wrap a closure as a [`Listener`].
pub fn listener(f: impl Fn(&dyn Host, &Event) + 'static) -> Listener {
    Rc::new(f)
}

/// Minimal page capability consumed by the binder.
///
/// Programmatic writes (`set_checked`, `set_value`, `set_text`) never fire
/// events; callers that want listeners to observe a change follow the write
/// with [`Host::dispatch`].
pub trait Host {
    /// Locate a mounted element by id.
    fn find(&self, id: &str) -> Option<NodeHandle>;

    /// Elements matching `selector` in document order, searching the
    /// descendants of `scope` or the whole document when `scope` is `None`.
    fn query_all(&self, scope: Option<NodeHandle>, selector: &Selector) -> Vec<NodeHandle>;

    fn query(&self, scope: Option<NodeHandle>, selector: &Selector) -> Option<NodeHandle> {
        self.query_all(scope, selector).into_iter().next()
    }

    fn parent(&self, node: NodeHandle) -> Option<NodeHandle>;

    fn matches(&self, node: NodeHandle, selector: &Selector) -> bool;

    /// Nearest inclusive ancestor matching `selector`.
    fn closest(&self, node: NodeHandle, selector: &Selector) -> Option<NodeHandle> {
        let mut current = Some(node);
        while let Some(n) = current {
            if self.matches(n, selector) {
                return Some(n);
            }
            current = self.parent(n);
        }
        None
    }

    /// Whether `node` is `ancestor` or lies below it.
    fn contains(&self, ancestor: NodeHandle, node: NodeHandle) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == ancestor {
                return true;
            }
            current = self.parent(n);
        }
        false
    }

    fn checked(&self, node: NodeHandle) -> bool;
    fn set_checked(&self, node: NodeHandle, checked: bool);

    /// Current value string of an input, select or textarea.
    fn value(&self, node: NodeHandle) -> String;
    fn set_value(&self, node: NodeHandle, value: &str);

    /// Concatenated descendant text.
    fn text(&self, node: NodeHandle) -> String;
    /// Replace all children with a single text node.
    fn set_text(&self, node: NodeHandle, text: &str);

    fn attribute(&self, node: NodeHandle, name: &str) -> Option<String>;
    fn set_attribute(&self, node: NodeHandle, name: &str, value: &str);

    fn has_class(&self, node: NodeHandle, class: &str) -> bool;
    /// Add `class` when `on`, remove it otherwise.
    fn set_class(&self, node: NodeHandle, class: &str, on: bool);

    fn listen(&self, node: NodeHandle, kind: EventKind, listener: Listener);

    /// Fire `kind` at `node`; it bubbles through every ancestor.
    fn dispatch(&self, node: NodeHandle, kind: EventKind);
}
