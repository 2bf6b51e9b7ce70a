// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Checkbox toggle.
//!
//! Checks a checkbox, unchecks it halfway through, and prints every frame's
//! layers.
//!
//! Run:
//! - `cargo run -p glide_demos --example checkbox_toggle`

use glide_checkbox::{CheckboxAnimationCoordinator, CheckboxError, CheckboxGeometry, CheckboxVisualState};
use glide_color::ColorMode;
use glide_demos::{FrameClock, hex, init_tracing};
use glide_stroke::KurboMeasure;
use glide_task::{TaskTheme, default_palette};

fn print_frame(now: u64, frame: &CheckboxVisualState) {
    let reveal = frame.checkmark.reveal();
    println!(
        "{now:>5} ms  p={:.3}  stroke={}  fill={}  dash_offset={:>6.2}  drawn={}",
        frame.progress,
        hex(frame.outline.stroke),
        hex(frame.outline.fill),
        reveal.dash_offset,
        frame.checkmark.is_drawn(),
    );
}

fn main() -> Result<(), CheckboxError> {
    init_tracing();

    let colors = TaskTheme::default()
        .checkbox_tokens(ColorMode::Light)
        .resolve(&default_palette())?;
    let mut checkbox = CheckboxAnimationCoordinator::new(CheckboxGeometry::new()?, colors, false);
    checkbox.on_layout(&KurboMeasure::default());
    println!("checkmark length: {:.2}", checkbox.checkmark_length());

    let mut clock = FrameClock::new();
    checkbox.sync_checked(clock.now(), true);
    for now in clock.run_for(320) {
        print_frame(now, &checkbox.frame(now));
    }

    println!("-- uncheck mid-way through a second check --");
    checkbox.sync_checked(clock.now(), false);
    checkbox.sync_checked(clock.now(), true);
    clock.advance(150);
    checkbox.sync_checked(clock.now(), false);
    for now in clock.run_for(120) {
        print_frame(now, &checkbox.frame(now));
    }
    Ok(())
}
