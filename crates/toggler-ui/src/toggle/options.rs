use std::rc::Rc;

use toggler_core::{
    OnChange, Reducer, ToggleAction, ToggleError, ToggleState, WarningSink, toggle_reducer,
};

/// Inputs to a toggle controller.
///
/// Every field distinguishes "not given" from any given value. In particular
/// `on: Some(false)` makes the controller controlled and `on: None` leaves it
/// uncontrolled.
#[derive(Clone, Default)]
pub struct ToggleOptions {
    /// Seed for the internal state, used only while uncontrolled. Defaults to off.
    pub initial_on: Option<bool>,
    /// Defaults to `toggle_reducer`.
    pub reducer: Option<Reducer>,
    pub on_change: Option<OnChange>,
    /// The externally owned value. `Some` means controlled.
    pub on: Option<bool>,
    /// Silences the read-only warning for a controlled toggle without an
    /// `on_change`. Defaults to false.
    pub read_only: Option<bool>,
    /// Defaults to the composition-local sink, then to a no-op.
    pub warnings: Option<Rc<dyn WarningSink>>,
}

impl ToggleOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn initial_on(mut self, on: bool) -> Self {
        self.initial_on = Some(on);
        self
    }

    pub fn reducer(
        mut self,
        f: impl Fn(&ToggleState, &ToggleAction) -> Result<ToggleState, ToggleError> + 'static,
    ) -> Self {
        self.reducer = Some(Rc::new(f));
        self
    }

    pub fn on_change(mut self, f: impl Fn(&ToggleState, &ToggleAction) + 'static) -> Self {
        self.on_change = Some(Rc::new(f));
        self
    }

    /// Sets or clears the controlled value.
    pub fn on(mut self, on: impl Into<Option<bool>>) -> Self {
        self.on = on.into();
        self
    }

    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = Some(read_only);
        self
    }

    pub fn warnings(mut self, sink: Rc<dyn WarningSink>) -> Self {
        self.warnings = Some(sink);
        self
    }

    pub fn is_controlled(&self) -> bool {
        self.on.is_some()
    }

    pub(crate) fn resolved_reducer(&self) -> Reducer {
        self.reducer
            .clone()
            .unwrap_or_else(|| Rc::new(toggle_reducer))
    }

    pub(crate) fn resolved_warnings(&self) -> Rc<dyn WarningSink> {
        self.warnings
            .clone()
            .unwrap_or_else(toggler_core::warning_sink)
    }
}
