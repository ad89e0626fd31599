use std::borrow::Cow;
use std::rc::Rc;

use crate::ToggleError;

/// State owned by a toggle controller.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToggleState {
    pub on: bool,
}

impl ToggleState {
    pub const OFF: ToggleState = ToggleState { on: false };
    pub const ON: ToggleState = ToggleState { on: true };

    pub fn new(on: bool) -> Self {
        Self { on }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Toggle,
    Reset,
    Custom,
}

/// Actions understood by toggle reducers.
///
/// `Custom` carries a caller-defined action name for reducers that extend
/// the built-in vocabulary; `toggle_reducer` rejects it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "lowercase"))]
pub enum ToggleAction {
    Toggle,
    /// Replaces the whole state with the carried snapshot.
    Reset {
        initial: ToggleState,
    },
    Custom {
        name: Cow<'static, str>,
    },
}

impl ToggleAction {
    pub fn custom(name: impl Into<Cow<'static, str>>) -> Self {
        ToggleAction::Custom { name: name.into() }
    }

    pub fn kind(&self) -> ActionKind {
        match self {
            ToggleAction::Toggle => ActionKind::Toggle,
            ToggleAction::Reset { .. } => ActionKind::Reset,
            ToggleAction::Custom { .. } => ActionKind::Custom,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            ToggleAction::Toggle => "toggle",
            ToggleAction::Reset { .. } => "reset",
            ToggleAction::Custom { name } => name.as_ref(),
        }
    }
}

/// Pure `(state, action) -> state` function.
pub type Reducer = Rc<dyn Fn(&ToggleState, &ToggleAction) -> Result<ToggleState, ToggleError>>;

/// Notified with the state an action would produce, and the action itself.
pub type OnChange = Rc<dyn Fn(&ToggleState, &ToggleAction)>;

/// The built-in reducer.
pub fn toggle_reducer(
    state: &ToggleState,
    action: &ToggleAction,
) -> Result<ToggleState, ToggleError> {
    match action {
        ToggleAction::Toggle => Ok(ToggleState { on: !state.on }),
        ToggleAction::Reset { initial } => Ok(*initial),
        ToggleAction::Custom { name } => Err(ToggleError::UnsupportedAction(name.to_string())),
    }
}
