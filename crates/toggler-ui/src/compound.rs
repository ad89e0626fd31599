//! Compound toggles.
//!
//! `Toggle` owns an on/off state and shares it with the children that ask
//! for it. Children are tagged up front: `NeedsToggleProps` children are
//! built from the shared `CompoundProps`, `Plain` children are passed through
//! untouched and never see the state.
//!
//! ```rust
//! use toggler_core::*;
//! use toggler_ui::*;
//!
//! fn app() -> View {
//!     Toggle(vec![
//!         ToggleOn(Text("The button is on")),
//!         ToggleOff(Text("The button is off")),
//!         ToggleButton(),
//!         ToggleChild::Plain(Text("Hello")),
//!     ])
//! }
//!
//! let mut scheduler = Scheduler::new();
//! let frame = scheduler.compose(app);
//! assert_eq!(frame.root.texts(), vec!["The button is off", "Hello"]);
//! ```

use std::rc::Rc;

use toggler_core::*;

use crate::{Box, Column, Switch, ToggleProps};

/// What a recognized child receives from its `Toggle` parent.
#[derive(Clone)]
pub struct CompoundProps {
    pub on: bool,
    pub toggle: Callback,
}

pub enum ToggleChild {
    NeedsToggleProps(Rc<dyn Fn(&CompoundProps) -> View>),
    Plain(View),
}

impl ToggleChild {
    pub fn needs_props(build: impl Fn(&CompoundProps) -> View + 'static) -> Self {
        ToggleChild::NeedsToggleProps(Rc::new(build))
    }

    fn render(self, props: &CompoundProps) -> View {
        match self {
            ToggleChild::NeedsToggleProps(build) => build(props),
            ToggleChild::Plain(view) => view,
        }
    }
}

impl From<View> for ToggleChild {
    fn from(view: View) -> Self {
        ToggleChild::Plain(view)
    }
}

pub fn Toggle(children: Vec<ToggleChild>) -> View {
    let on = remember(|| signal(false));
    let props = CompoundProps {
        on: on.get(),
        toggle: Rc::new({
            let on = on.clone();
            move || on.update(|v| *v = !*v)
        }),
    };
    log::trace!("Toggle: on={} children={}", props.on, children.len());

    Column().with_children(children.into_iter().map(|c| c.render(&props)).collect())
}

/// Shows `content` while on.
pub fn ToggleOn(content: View) -> ToggleChild {
    ToggleChild::needs_props(move |p| if p.on { content.clone() } else { Box() })
}

/// Shows `content` while off.
pub fn ToggleOff(content: View) -> ToggleChild {
    ToggleChild::needs_props(move |p| if p.on { Box() } else { content.clone() })
}

/// A `Switch` bound to the parent's state.
pub fn ToggleButton() -> ToggleChild {
    ToggleChild::needs_props(|p| {
        Switch(ToggleProps {
            on: Some(p.on),
            on_click: Some(p.toggle.clone()),
            ..Default::default()
        })
    })
}
