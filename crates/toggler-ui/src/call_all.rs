//! Merging event handlers.
//!
//! A prop getter must not shadow the caller's handler with its own, nor the
//! other way round. These helpers fold several optional handlers for the same
//! event into one that calls each of them in order.

use std::rc::Rc;

use smallvec::SmallVec;
use toggler_core::{Callback, Handler};

/// Folds click handlers into one. `None` entries are skipped.
pub fn call_all(handlers: impl IntoIterator<Item = Option<Callback>>) -> Callback {
    let fns: SmallVec<[Callback; 2]> = handlers.into_iter().flatten().collect();
    Rc::new(move || {
        for f in &fns {
            f();
        }
    })
}

/// Folds handlers that receive a payload. Every handler sees the same `&A`.
pub fn call_all_with<A: ?Sized + 'static>(
    handlers: impl IntoIterator<Item = Option<Handler<A>>>,
) -> Handler<A> {
    let fns: SmallVec<[Handler<A>; 2]> = handlers.into_iter().flatten().collect();
    Rc::new(move |args: &A| {
        for f in &fns {
            f(args);
        }
    })
}
