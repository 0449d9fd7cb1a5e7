#![allow(dead_code)]

use std::collections::VecDeque;

use witch_shooter::platform::{
    Button, ButtonTracker, Buttons, Clock, FrameBuffer, FrameGate, InputFrame, InputSource,
    RandomSource,
};
use witch_shooter::screen::Bitmap;

/// Replays a fixed list of rolls. Once the list runs dry every roll returns
/// `n - 1`, which never passes a spawn chance.
#[derive(Default)]
pub struct ScriptedRolls {
    rolls: VecDeque<u32>,
}

impl ScriptedRolls {
    pub fn new(rolls: &[u32]) -> Self {
        Self {
            rolls: rolls.iter().copied().collect(),
        }
    }

    pub fn never() -> Self {
        Self::default()
    }

    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl RandomSource for ScriptedRolls {
    fn random(&mut self, n: u32) -> u32 {
        let top = n.saturating_sub(1);
        self.rolls.pop_front().map(|r| r.min(top)).unwrap_or(top)
    }
}

/// What the game asked the frame buffer to do.
#[derive(Clone, Debug, PartialEq)]
pub enum Draw {
    Bitmap { x: i32, y: i32, bitmap: Bitmap },
    Text { x: i32, y: i32, text: String },
}

/// A platform with a hand-driven clock, scripted buttons and rolls, and a
/// frame buffer that records every call.
pub struct MockPlatform {
    pub now: u64,
    pub held: Buttons,
    pub due: bool,
    pub rolls: ScriptedRolls,
    pub draws: Vec<Draw>,
    pub clears: u32,
    pub presented: u32,
    tracker: ButtonTracker,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self {
            now: 0,
            held: Buttons::NONE,
            due: true,
            rolls: ScriptedRolls::never(),
            draws: Vec::new(),
            clears: 0,
            presented: 0,
            tracker: ButtonTracker::new(),
        }
    }

    pub fn hold(&mut self, buttons: &[Button]) {
        self.held = buttons.iter().copied().collect();
    }

    pub fn release_all(&mut self) {
        self.held = Buttons::NONE;
    }

    pub fn texts(&self) -> Vec<String> {
        self.draws
            .iter()
            .filter_map(|d| match d {
                Draw::Text { text, .. } => Some(text.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn bitmaps(&self) -> Vec<(i32, i32, Bitmap)> {
        self.draws
            .iter()
            .filter_map(|d| match d {
                Draw::Bitmap { x, y, bitmap } => Some((*x, *y, *bitmap)),
                _ => None,
            })
            .collect()
    }
}

impl FrameGate for MockPlatform {
    fn next_frame(&mut self) -> bool {
        self.due
    }
}

impl InputSource for MockPlatform {
    fn poll(&mut self) -> InputFrame {
        self.tracker.update(self.held)
    }
}

impl Clock for MockPlatform {
    fn millis(&self) -> u64 {
        self.now
    }
}

impl RandomSource for MockPlatform {
    fn random(&mut self, n: u32) -> u32 {
        self.rolls.random(n)
    }
}

impl FrameBuffer for MockPlatform {
    fn clear(&mut self) {
        self.clears += 1;
        self.draws.clear();
    }

    fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap) {
        self.draws.push(Draw::Bitmap {
            x,
            y,
            bitmap: *bitmap,
        });
    }

    fn draw_text(&mut self, x: i32, y: i32, text: &str) {
        self.draws.push(Draw::Text {
            x,
            y,
            text: text.to_string(),
        });
    }

    fn display(&mut self) -> std::io::Result<()> {
        self.presented += 1;
        Ok(())
    }
}

/// Input for a single frame with the given buttons freshly pressed.
pub fn pressed(buttons: &[Button]) -> InputFrame {
    let mut tracker = ButtonTracker::new();
    tracker.update(buttons.iter().copied().collect())
}

/// Input for a frame where the buttons were already down last frame.
pub fn held(buttons: &[Button]) -> InputFrame {
    let mut tracker = ButtonTracker::new();
    let set: Buttons = buttons.iter().copied().collect();
    tracker.update(set);
    tracker.update(set)
}

pub fn idle() -> InputFrame {
    InputFrame::default()
}
