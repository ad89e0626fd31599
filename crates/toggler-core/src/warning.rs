use std::cell::RefCell;
use std::rc::Rc;

/// Advisory warning channel. Calls are fire-and-forget and never affect
/// control flow.
pub trait WarningSink {
    fn warn(&self, message: &str);
}

/// Discards every warning.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopWarnings;

impl WarningSink for NoopWarnings {
    fn warn(&self, _message: &str) {}
}

/// Forwards warnings to the `log` facade.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogWarnings;

impl WarningSink for LogWarnings {
    fn warn(&self, message: &str) {
        log::warn!(target: "toggler::warning", "Warning: {message}");
    }
}

/// Records warnings in memory. Clones share the same log.
#[derive(Clone, Debug, Default)]
pub struct WarningLog(Rc<RefCell<Vec<String>>>);

impl WarningLog {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn messages(&self) -> Vec<String> {
        self.0.borrow().clone()
    }
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
    pub fn clear(&self) {
        self.0.borrow_mut().clear();
    }
}

impl WarningSink for WarningLog {
    fn warn(&self, message: &str) {
        self.0.borrow_mut().push(message.to_string());
    }
}

/// Emits `message` when `condition` does not hold.
pub fn warning(sink: &dyn WarningSink, condition: bool, message: impl FnOnce() -> String) {
    if !condition {
        sink.warn(&message());
    }
}
