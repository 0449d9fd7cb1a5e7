/// Collaborator seams — everything the game needs from the device.
///
/// The core never talks to hardware (or a terminal) directly. A platform
/// implements the five small traits below; [`Platform`] is the blanket
/// bundle the frame driver asks for.

use rand::rngs::StdRng;
use rand::Rng;

use crate::screen::Bitmap;

// ── Buttons ───────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    Up,
    Down,
    /// The A button: fires, and starts / restarts the game.
    Fire,
    /// The B button: raises the barrier.
    Guard,
}

impl Button {
    pub const ALL: [Button; 4] = [Button::Up, Button::Down, Button::Fire, Button::Guard];

    fn bit(self) -> u8 {
        match self {
            Button::Up => 1 << 0,
            Button::Down => 1 << 1,
            Button::Fire => 1 << 2,
            Button::Guard => 1 << 3,
        }
    }
}

/// A set of buttons, one bit each.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Buttons(u8);

impl Buttons {
    pub const NONE: Buttons = Buttons(0);

    pub fn with(self, button: Button) -> Buttons {
        Buttons(self.0 | button.bit())
    }

    pub fn insert(&mut self, button: Button) {
        self.0 |= button.bit();
    }

    pub fn contains(self, button: Button) -> bool {
        self.0 & button.bit() != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Button> for Buttons {
    fn from_iter<I: IntoIterator<Item = Button>>(iter: I) -> Self {
        iter.into_iter().fold(Buttons::NONE, Buttons::with)
    }
}

/// Input for one frame: what is held now, and what went down since the
/// previous frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputFrame {
    pub held: Buttons,
    pub just_pressed: Buttons,
}

impl InputFrame {
    pub fn pressed(&self, button: Button) -> bool {
        self.held.contains(button)
    }

    pub fn just_pressed(&self, button: Button) -> bool {
        self.just_pressed.contains(button)
    }
}

/// Turns successive "held" snapshots into edge-triggered input.
#[derive(Clone, Copy, Debug, Default)]
pub struct ButtonTracker {
    previous: Buttons,
}

impl ButtonTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, current: Buttons) -> InputFrame {
        let just_pressed = Buttons(current.0 & !self.previous.0);
        self.previous = current;
        InputFrame {
            held: current,
            just_pressed,
        }
    }
}

// ── Collaborator traits ───────────────────────────────────────────────────────

/// Frame-rate gate. `true` means a new frame is due and should be run now.
pub trait FrameGate {
    fn next_frame(&mut self) -> bool;
}

pub trait InputSource {
    /// Sample the buttons. Called once per frame.
    fn poll(&mut self) -> InputFrame;
}

/// Monotonic millisecond counter.
pub trait Clock {
    fn millis(&self) -> u64;
}

pub trait RandomSource {
    /// Uniform integer in `[0, n)`. `n == 0` yields 0.
    fn random(&mut self, n: u32) -> u32;
}

pub trait FrameBuffer {
    fn clear(&mut self);
    /// Blit the set bits of `bitmap` with its top-left corner at `(x, y)`.
    fn draw_bitmap(&mut self, x: i32, y: i32, bitmap: &Bitmap);
    fn draw_text(&mut self, x: i32, y: i32, text: &str);
    /// Push the finished frame to the screen.
    fn display(&mut self) -> std::io::Result<()>;
}

pub trait Platform: FrameGate + InputSource + Clock + RandomSource + FrameBuffer {}

impl<T: FrameGate + InputSource + Clock + RandomSource + FrameBuffer> Platform for T {}

impl RandomSource for StdRng {
    fn random(&mut self, n: u32) -> u32 {
        if n == 0 {
            0
        } else {
            self.gen_range(0..n)
        }
    }
}

// ── Frame pacing ──────────────────────────────────────────────────────────────

/// Fixed-rate frame gate driven by an external millisecond reading.
///
/// A frame is due once the previous one is at least one period old. Late
/// frames are not made up: the next deadline counts from when the frame
/// actually ran, so a stall never turns into a burst of catch-up frames.
#[derive(Clone, Copy, Debug)]
pub struct FramePacer {
    period_ms: u64,
    next_due: u64,
}

impl FramePacer {
    pub fn new(frame_rate: u32) -> Self {
        Self {
            period_ms: 1000 / u64::from(frame_rate.max(1)),
            next_due: 0,
        }
    }

    pub fn period_ms(&self) -> u64 {
        self.period_ms
    }

    /// `true` (and arms the next deadline) when a frame is due at `now`.
    pub fn poll(&mut self, now: u64) -> bool {
        if now < self.next_due {
            return false;
        }
        self.next_due = now + self.period_ms;
        true
    }

    /// Milliseconds left until the next frame is due.
    pub fn remaining(&self, now: u64) -> u64 {
        self.next_due.saturating_sub(now)
    }
}
