// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Theme switch.
//!
//! Toggles the color mode and prints the background fade together with the
//! recolored checkbox.
//!
//! Run:
//! - `cargo run -p glide_demos --example theme_switch`

use glide_color::ColorMode;
use glide_demos::{FrameClock, hex, init_tracing};
use glide_task::{ScreenBackground, TaskError, TaskItem, TaskTheme, default_palette, task_channel};

fn main() -> Result<(), TaskError> {
    init_tracing();

    let palette = default_palette();
    let theme = TaskTheme::default();
    theme.validate(&palette)?;

    let mut mode = ColorMode::Light;
    let mut background = ScreenBackground::new(theme, mode, &palette)?;
    let (events, _rx) = task_channel();
    let mut row = TaskItem::new("demo", true, theme.appearance(mode, &palette)?, 400.0, events)?;

    let mut clock = FrameClock::new();
    for _ in 0..2 {
        mode = mode.toggled();
        println!("-- switching to {mode:?} --");
        background.set_mode(clock.now(), mode, &palette)?;
        row.set_appearance(theme.appearance(mode, &palette)?);
        for now in clock.run_for(224) {
            let frame = row.frame(now);
            println!(
                "{now:>5} ms  background={}  fill={}  label={}  settled={}",
                hex(background.sample(now)),
                hex(frame.checkbox.outline.fill),
                hex(frame.label.color),
                background.is_settled(now),
            );
        }
    }
    Ok(())
}
