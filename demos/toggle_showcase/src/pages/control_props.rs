use std::rc::Rc;

use toggler_core::prelude::*;
use toggler_ui::*;

const CLICK_LIMIT: u32 = 4;

/// Two toggles sharing one owned value, a click limit enforced by refusing
/// change requests, and a third toggle that flips the first one between
/// controlled and uncontrolled.
pub fn screen() -> View {
    let both_on = remember(|| signal(false));
    let uncontrol_first = remember(|| signal(false));
    let times_clicked = remember(|| signal(0u32));

    let handle_toggle_change: OnChange = {
        let both_on = both_on.clone();
        let times_clicked = times_clicked.clone();
        Rc::new(move |state: &ToggleState, action: &ToggleAction| {
            if action.kind() == ActionKind::Toggle && times_clicked.get() > CLICK_LIMIT {
                log::info!("ignoring toggle: clicked too much");
                return;
            }
            both_on.set(state.on);
            times_clicked.update(|c| *c += 1);
        })
    };

    let first_on = if uncontrol_first.get() {
        None
    } else {
        Some(both_on.get())
    };
    let times = times_clicked.get();
    keyed_effect(times > CLICK_LIMIT, |&too_many| {
        if too_many {
            log::info!("click limit of {CLICK_LIMIT} reached");
        }
    });

    Column().child((
        Row().child((
            ControlledToggle(
                ToggleOptions {
                    on: first_on,
                    on_change: Some(handle_toggle_change.clone()),
                    ..ToggleOptions::new()
                },
                ToggleProps::new().test_tag("first"),
            ),
            ControlledToggle(
                ToggleOptions {
                    on: Some(both_on.get()),
                    on_change: Some(handle_toggle_change),
                    ..ToggleOptions::new()
                },
                ToggleProps::new().test_tag("second"),
            ),
        )),
        if times > CLICK_LIMIT {
            Text("Whoa, you clicked too much!").test_tag("notice")
        } else {
            Text(format!("Click count: {times}")).test_tag("click-count")
        },
        Button("Reset", {
            let both_on = both_on.clone();
            let times_clicked = times_clicked.clone();
            move || {
                both_on.set(false);
                times_clicked.set(0);
            }
        })
        .test_tag("reset"),
        Column().child((
            Text("Uncontrolled Toggle:"),
            ControlledToggle(
                ToggleOptions::new()
                    .on(uncontrol_first.get())
                    .on_change(move |_, _| uncontrol_first.update(|v| *v = !*v)),
                ToggleProps::new().test_tag("mode"),
            ),
        )),
    ))
}
