use std::rc::Rc;

use toggler_core::Callback;

/// Attributes for a toggle-like presentation primitive.
///
/// Callers build a partial bag, hand it to a prop getter and render the
/// merged result. Fields left `None` fall back to the getter's values or the
/// widget's defaults.
#[derive(Clone, Default)]
pub struct ToggleProps {
    pub on: Option<bool>,
    /// aria-pressed
    pub pressed: Option<bool>,
    pub on_click: Option<Callback>,
    /// aria-label
    pub label: Option<String>,
    pub test_tag: Option<String>,
}

impl ToggleProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on(mut self, on: bool) -> Self {
        self.on = Some(on);
        self
    }

    pub fn pressed(mut self, pressed: bool) -> Self {
        self.pressed = Some(pressed);
        self
    }

    pub fn on_click(mut self, f: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(f));
        self
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn test_tag(mut self, tag: impl Into<String>) -> Self {
        self.test_tag = Some(tag.into());
        self
    }
}

impl std::fmt::Debug for ToggleProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ToggleProps")
            .field("on", &self.on)
            .field("pressed", &self.pressed)
            .field("on_click", &self.on_click.as_ref().map(|_| "<callback>"))
            .field("label", &self.label)
            .field("test_tag", &self.test_tag)
            .finish()
    }
}
