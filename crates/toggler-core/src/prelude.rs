pub use crate::effects::{KeyedEffect, keyed_effect};
pub use crate::error::ToggleError;
pub use crate::locals::{warning_sink, with_warning_sink};
pub use crate::runtime::{Frame, HitRegion, Scheduler, remember, remember_state, remember_with_key};
pub use crate::semantics::{Role, Semantics};
pub use crate::signal::{Signal, signal};
pub use crate::state::{
    ActionKind, OnChange, Reducer, ToggleAction, ToggleState, toggle_reducer,
};
pub use crate::view::{Callback, Handler, View, ViewId, ViewKind};
pub use crate::warning::{LogWarnings, NoopWarnings, WarningLog, WarningSink};
