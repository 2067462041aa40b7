//! Confirmation screen timing and confetti animation state

use chrono::{DateTime, Local};
use std::time::{Duration, Instant};

/// Number of confetti pieces launched when the screen opens
const CONFETTI_PIECES: usize = 80;

/// Glyphs used for confetti pieces
const CONFETTI_GLYPHS: [char; 4] = ['*', '•', '▪', '+'];

/// Animation phase for the confirmation screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationPhase {
    /// Confetti falling, countdown running
    Celebrating,
    /// Delay elapsed; return to the landing screen
    Complete,
}

/// One confetti piece at a point in time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfettiPiece {
    pub x: u16,
    pub y: u16,
    pub glyph: char,
    /// Index into the theme's confetti palette
    pub color_index: usize,
}

/// Confirmation screen state
#[derive(Debug)]
pub struct ConfirmationState {
    /// When the screen was opened
    pub start_time: Instant,
    /// Wall-clock time the registration was accepted
    pub registered_at: DateTime<Local>,
    /// How long to stay before returning to the landing screen
    pub delay: Duration,
    pub phase: ConfirmationPhase,
}

impl ConfirmationState {
    pub fn new(delay: Duration) -> Self {
        Self {
            start_time: Instant::now(),
            registered_at: Local::now(),
            delay,
            phase: ConfirmationPhase::Celebrating,
        }
    }

    /// Update phase based on elapsed time
    pub fn update(&mut self) {
        if self.start_time.elapsed() >= self.delay {
            self.phase = ConfirmationPhase::Complete;
        }
    }

    /// Skip to completion (user pressed a key)
    pub fn skip(&mut self) {
        self.phase = ConfirmationPhase::Complete;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == ConfirmationPhase::Complete
    }

    /// Whole seconds left before the automatic return, rounded up
    pub fn remaining_secs(&self) -> u64 {
        let left = self.delay.saturating_sub(self.start_time.elapsed());
        left.as_millis().div_ceil(1000) as u64
    }

    /// Confetti positions for the current frame
    pub fn confetti(&self, width: u16, height: u16) -> Vec<ConfettiPiece> {
        confetti_at(self.start_time.elapsed(), self.delay, width, height)
    }
}

/// Cheap deterministic scramble so every piece gets its own track
fn scramble(i: usize) -> u32 {
    let mut x = (i as u32).wrapping_mul(0x9E37_79B9) ^ 0x85EB_CA6B;
    x ^= x >> 15;
    x = x.wrapping_mul(0x2C1B_3C6D);
    x ^= x >> 12;
    x
}

/// Confetti positions `elapsed` into the animation. Pieces fall once and
/// are all gone by the time `window` has passed.
pub fn confetti_at(elapsed: Duration, window: Duration, width: u16, height: u16) -> Vec<ConfettiPiece> {
    if width == 0 || height == 0 || elapsed >= window {
        return Vec::new();
    }

    let window = window.as_secs_f32();
    let t = elapsed.as_secs_f32();

    (0..CONFETTI_PIECES)
        .filter_map(|i| {
            let seed = scramble(i);
            // Launches spread over the first 40% of the window, falls take 30-60%
            let launch = (seed % 1000) as f32 / 1000.0 * window * 0.4;
            let fall = window * (0.3 + ((seed >> 10) % 1000) as f32 / 1000.0 * 0.3);
            let progress = (t - launch) / fall;
            if !(0.0..1.0).contains(&progress) {
                return None;
            }

            let eased = simple_easing::quad_in(progress);
            let y = (eased * height as f32) as u16;
            let sway = (progress * std::f32::consts::TAU + (seed % 628) as f32 / 100.0).sin() * 2.0;
            let base_x = ((seed >> 4) % width as u32) as f32;
            let x = (base_x + sway).clamp(0.0, (width - 1) as f32) as u16;

            Some(ConfettiPiece {
                x,
                y: y.min(height - 1),
                glyph: CONFETTI_GLYPHS[(seed >> 20) as usize % CONFETTI_GLYPHS.len()],
                color_index: (seed >> 24) as usize,
            })
        })
        .collect()
}
