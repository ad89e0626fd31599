use toggler_core::prelude::*;
use toggler_ui::*;

pub fn screen() -> View {
    let toggler = remember_toggle(ToggleOptions::new());
    let on = toggler.on();

    Column().child((
        Switch(toggler.toggler_props(ToggleProps::new().on(on).test_tag("switch"))),
        ButtonWith(
            if on { "on" } else { "off" },
            toggler.toggler_props(
                ToggleProps::new()
                    .label("custom-button")
                    .on_click(|| log::info!("onButtonClick"))
                    .test_tag("custom-button-id"),
            ),
        ),
    ))
}
