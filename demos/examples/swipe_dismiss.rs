// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Swipe to dismiss.
//!
//! A tiny task list owner: rows send toggle and remove requests, the owner
//! applies them to its storage and pushes the new `done` flags back in.
//!
//! Run:
//! - `cargo run -p glide_demos --example swipe_dismiss`
//! - `RUST_LOG=trace cargo run -p glide_demos --example swipe_dismiss` to see every drag sample

use glide_color::ColorMode;
use glide_demos::{FrameClock, init_tracing};
use glide_stroke::KurboMeasure;
use glide_swipe::GestureSample;
use glide_task::{TaskError, TaskEvent, TaskItem, TaskTheme, default_palette, task_channel};

struct Task {
    id: u32,
    subject: &'static str,
    done: bool,
}

fn main() -> Result<(), TaskError> {
    init_tracing();

    let viewport_width = 400.0;
    let appearance = TaskTheme::default().appearance(ColorMode::Light, &default_palette())?;
    let (events, mut rx) = task_channel();

    let mut tasks = vec![
        Task { id: 1, subject: "Buy milk", done: false },
        Task { id: 2, subject: "Walk the dog", done: true },
        Task { id: 3, subject: "File taxes", done: false },
    ];
    let mut rows = tasks
        .iter()
        .map(|task| {
            let mut row = TaskItem::new(task.id, task.done, appearance, viewport_width, events.clone())?;
            row.on_layout(&KurboMeasure::default());
            Ok(row)
        })
        .collect::<Result<Vec<_>, TaskError>>()?;

    let mut clock = FrameClock::new();

    // Tap the first checkbox.
    rows[0].press_checkbox();

    // A short drag on the second row springs back.
    let start = clock.tick();
    rows[1].gesture_start(start);
    for dx in [-5.0, -12.0, -20.0] {
        rows[1].gesture_update(clock.tick(), GestureSample::new(dx));
    }
    println!("row 2 released: {:?}", rows[1].gesture_end(clock.now()));

    // A long drag on the third row commits.
    rows[2].gesture_start(clock.tick());
    for dx in [0.0, -30.0, -60.0, -100.0] {
        rows[2].gesture_update(clock.tick(), GestureSample::new(dx));
    }
    println!("row 3 released: {:?}", rows[2].gesture_end(clock.now()));

    // The owner applies requests, then feeds state back into the rows.
    while let Ok(event) = rx.try_recv() {
        tracing::info!(?event, "applying task event");
        match event {
            TaskEvent::Toggle(id) => {
                if let Some(task) = tasks.iter_mut().find(|task| task.id == id) {
                    task.done = !task.done;
                }
            }
            TaskEvent::Remove(id) => tasks.retain(|task| task.id != id),
        }
    }
    for row in &mut rows {
        if let Some(task) = tasks.iter().find(|task| task.id == *row.key()) {
            row.set_done(clock.now(), task.done);
        }
    }

    for now in clock.run_for(320).step_by(4) {
        let offsets: Vec<String> = rows
            .iter()
            .map(|row| {
                let frame = row.frame(now);
                format!("{:>8.2} ({:.2})", frame.offset_x, frame.checkbox.progress)
            })
            .collect();
        println!("{now:>5} ms  {}", offsets.join("  "));
    }

    rows.retain(|row| !row.is_removed());
    for task in &tasks {
        println!("[{}] {}", if task.done { "x" } else { " " }, task.subject);
    }
    println!("{} rows left", rows.len());
    Ok(())
}
