#![allow(non_snake_case)]
//! Widgets, prop getters and toggles.

pub mod call_all;
pub mod compound;
pub mod toggle;

pub use call_all::{call_all, call_all_with};
pub use compound::{CompoundProps, Toggle, ToggleButton, ToggleChild, ToggleOff, ToggleOn};
pub use toggle::{
    ControlledToggle, ToggleController, ToggleOptions, ToggleProps, Toggler, remember_toggle,
};

use std::fmt::Write as _;
use std::rc::Rc;

use toggler_core::*;

pub fn Column() -> View {
    View::new(0, ViewKind::Column)
}

pub fn Row() -> View {
    View::new(0, ViewKind::Row)
}

pub fn Box() -> View {
    View::new(0, ViewKind::Box)
}

pub fn Text(text: impl Into<String>) -> View {
    View::new(0, ViewKind::Text { text: text.into() }).semantics(Semantics::new(Role::Text))
}

pub fn Button(text: impl Into<String>, on_click: impl Fn() + 'static) -> View {
    View::new(
        0,
        ViewKind::Button {
            text: text.into(),
            on_click: Some(Rc::new(on_click)),
        },
    )
    .semantics(Semantics::new(Role::Button))
}

/// A button driven entirely by a prop bag, typically one returned by
/// `Toggler::toggler_props`.
pub fn ButtonWith(text: impl Into<String>, props: ToggleProps) -> View {
    let mut sem = Semantics::new(Role::Button);
    sem.label = props.label;
    sem.pressed = props.pressed;
    let mut v = View::new(
        0,
        ViewKind::Button {
            text: text.into(),
            on_click: props.on_click,
        },
    )
    .semantics(sem);
    v.test_tag = props.test_tag;
    v
}

/// The on/off presentation primitive. Reads `on` (default off), forwards
/// `on_click`, and carries the remaining props as semantics.
pub fn Switch(props: ToggleProps) -> View {
    let on = props.on.unwrap_or(false);
    let mut sem = Semantics::new(Role::Switch);
    sem.label = props.label;
    sem.pressed = props.pressed;
    let mut v = View::new(
        0,
        ViewKind::Switch {
            on,
            on_click: props.on_click,
        },
    )
    .semantics(sem);
    v.test_tag = props.test_tag;
    v
}

/// Extension trait for child building
pub trait ViewExt: Sized {
    fn child(self, children: impl IntoChildren) -> Self;
}

impl ViewExt for View {
    fn child(self, children: impl IntoChildren) -> Self {
        self.with_children(children.into_children())
    }
}

pub trait IntoChildren {
    fn into_children(self) -> Vec<View>;
}

impl IntoChildren for View {
    fn into_children(self) -> Vec<View> {
        vec![self]
    }
}

impl IntoChildren for Vec<View> {
    fn into_children(self) -> Vec<View> {
        self
    }
}

impl<const N: usize> IntoChildren for [View; N] {
    fn into_children(self) -> Vec<View> {
        self.into()
    }
}

// Tuple implementations
macro_rules! impl_into_children_tuple {
    ($($idx:tt $t:ident),+) => {
        impl<$($t: IntoChildren),+> IntoChildren for ($($t,)+) {
            fn into_children(self) -> Vec<View> {
                let mut v = Vec::new();
                $(v.extend(self.$idx.into_children());)+
                v
            }
        }
    };
}

impl_into_children_tuple!(0 A, 1 B);
impl_into_children_tuple!(0 A, 1 B, 2 C);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E);
impl_into_children_tuple!(0 A, 1 B, 2 C, 3 D, 4 E, 5 F);

/// Indented, deterministic text form of a view tree. Ids and handlers are
/// left out; a clickable node is marked with `[click]`.
pub fn dump_tree(view: &View) -> String {
    let mut out = String::new();
    dump_into(view, 0, &mut out);
    out.trim_end().to_string()
}

fn dump_into(view: &View, depth: usize, out: &mut String) {
    let _ = write!(out, "{:indent$}", "", indent = depth * 2);
    match &view.kind {
        ViewKind::Column => out.push_str("Column"),
        ViewKind::Row => out.push_str("Row"),
        ViewKind::Box => out.push_str("Box"),
        ViewKind::Text { text } => {
            let _ = write!(out, "Text {text:?}");
        }
        ViewKind::Button { text, .. } => {
            let _ = write!(out, "Button {text:?}");
        }
        ViewKind::Switch { on, .. } => {
            let _ = write!(out, "Switch on={on}");
        }
    }
    if let Some(sem) = &view.semantics {
        if let Some(pressed) = sem.pressed {
            let _ = write!(out, " pressed={pressed}");
        }
        if let Some(label) = &sem.label {
            let _ = write!(out, " label={label:?}");
        }
    }
    if let Some(tag) = &view.test_tag {
        let _ = write!(out, " #{tag}");
    }
    if view.kind.on_click().is_some() {
        out.push_str(" [click]");
    }
    out.push('\n');
    for child in &view.children {
        dump_into(child, depth + 1, out);
    }
}
