//! # Composition locals
//!
//! Thread‑local values scoped to a subtree of the composition. A local set
//! with `with_local` is visible to everything composed inside the closure and
//! restored when it returns.
//!
//! The only built-in local is the default warning sink used by controllers
//! that were not handed one explicitly:
//!
//! ```rust
//! use toggler_core::*;
//! use std::rc::Rc;
//!
//! let log = WarningLog::new();
//! with_warning_sink(Rc::new(log.clone()), || {
//!     // controllers built here report into `log`
//!     warning_sink().warn("hello");
//! });
//! assert_eq!(log.messages(), vec!["hello".to_string()]);
//! ```

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::{NoopWarnings, WarningSink};

thread_local! {
    static LOCALS_STACK: RefCell<Vec<HashMap<TypeId, Box<dyn Any>>>> = RefCell::new(Vec::new());
}

struct FrameGuard;

impl Drop for FrameGuard {
    fn drop(&mut self) {
        LOCALS_STACK.with(|st| {
            st.borrow_mut().pop();
        });
    }
}

/// Provides `value` to everything composed inside `f`.
pub fn with_local<T: Clone + 'static, R>(value: T, f: impl FnOnce() -> R) -> R {
    LOCALS_STACK.with(|st| {
        let mut frame: HashMap<TypeId, Box<dyn Any>> = HashMap::new();
        frame.insert(TypeId::of::<T>(), Box::new(value));
        st.borrow_mut().push(frame);
    });
    let _guard = FrameGuard;
    f()
}

/// Innermost provided value of type `T`, if any.
pub fn local<T: Clone + 'static>() -> Option<T> {
    LOCALS_STACK.with(|st| {
        st.borrow()
            .iter()
            .rev()
            .find_map(|frame| frame.get(&TypeId::of::<T>()))
            .and_then(|v| v.downcast_ref::<T>())
            .cloned()
    })
}

#[derive(Clone)]
struct AmbientWarnings(Rc<dyn WarningSink>);

pub fn with_warning_sink<R>(sink: Rc<dyn WarningSink>, f: impl FnOnce() -> R) -> R {
    with_local(AmbientWarnings(sink), f)
}

/// The ambient warning sink, or a no-op sink when none was provided.
pub fn warning_sink() -> Rc<dyn WarningSink> {
    local::<AmbientWarnings>()
        .map(|w| w.0)
        .unwrap_or_else(|| Rc::new(NoopWarnings))
}
