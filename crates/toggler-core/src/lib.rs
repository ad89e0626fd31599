//! # State, slots, and warnings
//!
//! Toggler composes UI as plain data: a composable function returns a
//! `View` tree, and any state it needs to keep between passes lives in
//! `remember*` slots owned by a `Scheduler`. There are four main pieces:
//!
//! - `remember*` — lifecycle‑aware storage bound to a composition.
//! - `Signal<T>` — cloneable observable value, usually held in a slot.
//! - `ToggleState` / `ToggleAction` / `toggle_reducer` — the toggle state
//!   model shared by every toggle controller.
//! - `WarningSink` — advisory warning channel, injectable per controller or
//!   provided as a composition local.
//!
//! ## Remembered state
//!
//! ```rust
//! use toggler_core::*;
//!
//! let mut scheduler = Scheduler::new();
//! let build = || {
//!     let count = remember(|| signal(0));
//!     count.update(|c| *c += 1);
//!     View::new(0, ViewKind::Text { text: format!("{}", count.get()) })
//! };
//! scheduler.compose(build);
//! let frame = scheduler.compose(build);
//! assert_eq!(frame.root.texts(), vec!["2".to_string()]);
//! ```
//!
//! - `remember` and `remember_state` are order‑based: the Nth call in a
//!   composition pass always refers to the Nth stored value.
//! - `remember_with_key` is key‑based and stable across conditional
//!   branches.
//!
//! ## Reducing toggle state
//!
//! ```rust
//! use toggler_core::*;
//!
//! let on = toggle_reducer(&ToggleState::OFF, &ToggleAction::Toggle).unwrap();
//! assert!(on.on);
//! let err = toggle_reducer(&on, &ToggleAction::custom("explode")).unwrap_err();
//! assert_eq!(err.to_string(), "Unsupported type: explode");
//! ```

pub mod effects;
pub mod error;
pub mod locals;
pub mod prelude;
pub mod runtime;
pub mod semantics;
pub mod signal;
pub mod state;
pub mod view;
pub mod warning;

pub use effects::*;
pub use error::*;
pub use locals::*;
pub use prelude::*;
pub use runtime::*;
pub use semantics::*;
pub use signal::*;
pub use state::*;
pub use view::*;
pub use warning::*;
