use std::rc::Rc;

use anyhow::Context;
use toggler_core::prelude::*;
use toggler_ui::dump_tree;

mod pages {
    pub mod compound;
    pub mod control_props;
    pub mod prop_getters;
}

/// Composes `page`, then delivers each click in `clicks` and recomposes,
/// logging every frame.
fn drive(name: &str, page: fn() -> View, clicks: &[&str]) -> anyhow::Result<Frame> {
    let mut scheduler = Scheduler::new();
    let mut frame = scheduler.compose(page);
    log::info!("[{name}] initial\n{}", dump_tree(&frame.root));

    for tag in clicks {
        let hit = frame.click(tag);
        anyhow::ensure!(hit, "[{name}] nothing clickable tagged {tag:?}");
        frame = scheduler.compose(page);
        log::info!("[{name}] after clicking {tag}\n{}", dump_tree(&frame.root));
    }
    Ok(frame)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    drive("compound", pages::compound::screen, &["toggle-button", "toggle-button"])?;

    drive(
        "prop getters",
        pages::prop_getters::screen,
        &["switch", "custom-button-id"],
    )?;

    // Warnings go through `log` so they show up next to the frames.
    let frame = with_warning_sink(Rc::new(LogWarnings), || {
        drive(
            "control props",
            pages::control_props::screen,
            &[
                "first", "second", "first", "second", "first", "second", "reset", "mode",
                "first",
            ],
        )
    })?;
    let count = frame
        .root
        .find_by_tag("click-count")
        .context("click counter missing after reset")?;
    log::info!("final counter: {:?}", count.kind);

    Ok(())
}
