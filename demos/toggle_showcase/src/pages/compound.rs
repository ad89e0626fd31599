use toggler_core::prelude::*;
use toggler_ui::*;

/// Reads the toggle state if it is ever handed one. Passed as a plain child,
/// it never is.
#[allow(non_snake_case)]
fn DontWantNoProps(on: Option<bool>) -> View {
    Text(match on {
        None => "Nothing to see here",
        Some(_) => "How did this even happen??",
    })
}

pub fn screen() -> View {
    Column().child(Toggle(vec![
        ToggleOn(Text("The button is on")),
        ToggleOff(Text("The button is off")),
        ToggleChild::needs_props(|p| {
            Switch(ToggleProps {
                on: Some(p.on),
                on_click: Some(p.toggle.clone()),
                test_tag: Some("toggle-button".into()),
                ..Default::default()
            })
        }),
        ToggleChild::Plain(DontWantNoProps(None)),
        Text("Hello").into(),
    ]))
}
