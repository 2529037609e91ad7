//! Collaborator surfaces the core calls out to.
//!
//! The page owns how notifications look and how scrolling animates; the core
//! only says what to show and where to go.

use std::cell::RefCell;

/// Fire-and-forget, auto-dismissing message display.
pub trait Notifier {
    /// Show a transient message.
    fn notify(&self, message: &str);
}

/// Scrolls the page to a named section.
pub trait ScrollSurface {
    /// Bring `section` into view.
    fn scroll_to(&self, section: &str);
}

impl<T: Notifier + ?Sized> Notifier for std::rc::Rc<T> {
    fn notify(&self, message: &str) {
        (**self).notify(message)
    }
}

impl<T: ScrollSurface + ?Sized> ScrollSurface for std::rc::Rc<T> {
    fn scroll_to(&self, section: &str) {
        (**self).scroll_to(section)
    }
}

/// Notifier that writes messages to the log.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "stash::notify", "{}", message);
    }
}

/// Notifier that keeps every message, for inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    messages: RefCell<Vec<String>>,
}

impl RecordingNotifier {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages shown so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    /// Most recent message.
    pub fn last(&self) -> Option<String> {
        self.messages.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

/// Scroll surface that remembers requested sections.
#[derive(Debug, Default)]
pub struct RecordingScroll {
    sections: RefCell<Vec<String>>,
}

impl RecordingScroll {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sections scrolled to so far.
    pub fn sections(&self) -> Vec<String> {
        self.sections.borrow().clone()
    }
}

impl ScrollSurface for RecordingScroll {
    fn scroll_to(&self, section: &str) {
        self.sections.borrow_mut().push(section.to_string());
    }
}
