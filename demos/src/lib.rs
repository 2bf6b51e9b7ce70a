// Copyright 2025 the Glide Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Glide demos.

use glide_color::Color;

/// Installs a `fmt` subscriber honoring `RUST_LOG`, defaulting to `debug`.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
        )
        .with_target(false)
        .init();
}

/// Simulated display clock ticking at a fixed frame interval.
#[derive(Copy, Clone, Debug)]
pub struct FrameClock {
    now_ms: u64,
    interval_ms: u64,
}

impl FrameClock {
    /// A 60 Hz clock starting at `0`.
    pub fn new() -> Self {
        Self {
            now_ms: 0,
            interval_ms: 16,
        }
    }

    /// Current frame timestamp.
    pub fn now(&self) -> u64 {
        self.now_ms
    }

    /// Advances one frame and returns the new timestamp.
    pub fn tick(&mut self) -> u64 {
        self.now_ms += self.interval_ms;
        self.now_ms
    }

    /// Frame timestamps covering the next `duration_ms`.
    pub fn run_for(&mut self, duration_ms: u64) -> impl Iterator<Item = u64> + '_ {
        let end = self.now_ms + duration_ms;
        core::iter::from_fn(move || (self.now_ms < end).then(|| self.tick()))
    }

    /// Skips the frames covering the next `duration_ms` without yielding them.
    ///
    /// Lands on the same timestamp as draining [`run_for`](Self::run_for).
    pub fn advance(&mut self, duration_ms: u64) -> u64 {
        self.now_ms += duration_ms.div_ceil(self.interval_ms) * self.interval_ms;
        self.now_ms
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

/// `#rrggbbaa` rendering of a color.
pub fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b, rgba.a)
}
