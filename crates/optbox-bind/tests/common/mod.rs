//! Helpers shared by the binder integration tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use optbox_bind::{Host, MemoryDom, NodeHandle};
use optbox_core::Node;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Layer;

// ============================================================================
// DOCUMENT HELPERS
// ============================================================================

pub fn mount(tree: &Node) -> MemoryDom {
    let dom = MemoryDom::new();
    dom.mount(tree);
    dom
}

pub fn node(dom: &MemoryDom, id: &str) -> NodeHandle {
    dom.find(id)
        .unwrap_or_else(|| panic!("no element with id {id:?}"))
}

pub fn text_of(dom: &MemoryDom, id: &str) -> String {
    dom.text(node(dom, id))
}

/// Records every value a callback receives.
pub struct Recorder<T> {
    seen: Rc<RefCell<Vec<T>>>,
}

impl<T: Clone + 'static> Recorder<T> {
    pub fn new() -> Self {
        Self {
            seen: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn sink<A: ?Sized + ToOwned<Owned = T> + 'static>(&self) -> impl Fn(&A) + 'static {
        let seen = self.seen.clone();
        move |value: &A| seen.borrow_mut().push(value.to_owned())
    }

    pub fn sink_owned(&self) -> impl Fn(T) + 'static {
        let seen = self.seen.clone();
        move |value: T| seen.borrow_mut().push(value)
    }

    pub fn all(&self) -> Vec<T> {
        self.seen.borrow().clone()
    }

    pub fn last(&self) -> Option<T> {
        self.seen.borrow().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.seen.borrow().len()
    }
}

// ============================================================================
// LOG CAPTURE
// ============================================================================

#[derive(Debug, Clone)]
pub struct CapturedLog {
    pub level: tracing::Level,
    pub message: String,
}

#[derive(Clone, Default)]
pub struct LogCapture {
    logs: Arc<Mutex<Vec<CapturedLog>>>,
}

impl LogCapture {
    pub fn logs(&self) -> Vec<CapturedLog> {
        self.logs.lock().unwrap().clone()
    }

    pub fn contains(&self, level: tracing::Level, needle: &str) -> bool {
        self.logs()
            .iter()
            .any(|l| l.level == level && l.message.contains(needle))
    }
}

struct CaptureLayer {
    capture: LogCapture,
}

impl<S: tracing::Subscriber> Layer<S> for CaptureLayer {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = MessageVisitor::default();
        event.record(&mut visitor);
        self.capture.logs.lock().unwrap().push(CapturedLog {
            level: *event.metadata().level(),
            message: visitor.message,
        });
    }
}

#[derive(Default)]
struct MessageVisitor {
    message: String,
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        }
    }
}

/// Run `f` with a subscriber that records every event on this thread.
pub fn capture_logs<R>(f: impl FnOnce() -> R) -> (R, LogCapture) {
    let capture = LogCapture::default();
    let subscriber = tracing_subscriber::registry()
        .with(CaptureLayer {
            capture: capture.clone(),
        })
        .with(
            tracing_subscriber::fmt::layer()
                .with_test_writer()
                .with_ansi(false)
                .without_time(),
        );
    let result = tracing::subscriber::with_default(subscriber, f);
    (result, capture)
}
