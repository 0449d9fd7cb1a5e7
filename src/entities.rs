/// All game entity types — pure data, plus the fixed-capacity pool they live in.

// ── Screen ────────────────────────────────────────────────────────────────────

pub const WIDTH: i32 = 128;
pub const HEIGHT: i32 = 64;

// ── Player ────────────────────────────────────────────────────────────────────

pub const PLAYER_SIZE: i32 = 16;
pub const PLAYER_START_X: i32 = 10;
pub const PLAYER_START_Y: i32 = HEIGHT / 2 - 8;
pub const START_HEALTH: u8 = 3;
pub const MAX_HEALTH: u8 = 5;
/// Barrier lasts until strictly more than this many ms have passed.
pub const BARRIER_MS: u64 = 3000;

// ── Bullets ───────────────────────────────────────────────────────────────────

pub const MAX_BULLETS: usize = 5;
pub const BULLET_SIZE: i32 = 4;
pub const BULLET_SPEED: i32 = 2;
/// Muzzle position relative to the player's top-left corner.
pub const BULLET_OFFSET_X: i32 = 16;
pub const BULLET_OFFSET_Y: i32 = 6;

// ── Enemies & power-up ────────────────────────────────────────────────────────

pub const MAX_ENEMIES: usize = 3;
pub const ENEMY_SIZE: i32 = 8;
pub const ENEMY_SPEED: i32 = 1;
/// Chance out of 100, rolled once per frame.
pub const ENEMY_SPAWN_CHANCE: u32 = 5;
pub const POWERUP_SIZE: i32 = 8;
/// Chance out of 1000, rolled once per frame while no power-up is on screen.
pub const POWERUP_SPAWN_CHANCE: u32 = 5;

// ── Boss ──────────────────────────────────────────────────────────────────────

pub const BOSS_SIZE: i32 = 16;
pub const BOSS_HEALTH: i32 = 10;
pub const BOSS_THRESHOLD: u32 = 50;
pub const BOSS_THRESHOLD_LATE: u32 = 100;
/// Chance out of 100 that the boss releases an enemy this frame.
pub const BOSS_ATTACK_CHANCE: u32 = 10;
/// The clamped movement rule stops pushing the boss left at this x.
pub const BOSS_STANDOFF_X: i32 = WIDTH - 32;

// ── Scoring & session ─────────────────────────────────────────────────────────

pub const ENEMY_SCORE: u32 = 10;
pub const BOSS_SCORE: u32 = 100;
/// A session ends once strictly more than this many ms have passed.
pub const SESSION_MS: u64 = 60_000;
pub const FRAME_RATE: u32 = 60;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameState {
    Opening,
    Playing,
    Ending,
}

// ── Player ────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Player {
    pub x: i32,
    pub y: i32,
    /// Always within `0..=MAX_HEALTH`.
    pub health: u8,
    pub has_barrier: bool,
    /// Clock reading (ms) when the barrier was last raised.
    pub barrier_time: u64,
}

impl Default for Player {
    fn default() -> Self {
        Self {
            x: PLAYER_START_X,
            y: PLAYER_START_Y,
            health: START_HEALTH,
            has_barrier: false,
            barrier_time: 0,
        }
    }
}

// ── Pooled entities ───────────────────────────────────────────────────────────

/// A slot in a fixed [`Pool`]. The position of an inactive slot is stale.
pub trait Slot {
    fn is_active(&self) -> bool;
    fn activate(&mut self, x: i32, y: i32);
    fn deactivate(&mut self);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Bullet {
    pub x: i32,
    pub y: i32,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Enemy {
    pub x: i32,
    pub y: i32,
    pub active: bool,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PowerUp {
    pub x: i32,
    pub y: i32,
    pub active: bool,
}

impl Slot for Bullet {
    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Slot for Enemy {
    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

impl Slot for PowerUp {
    fn is_active(&self) -> bool {
        self.active
    }

    fn activate(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
        self.active = true;
    }

    fn deactivate(&mut self) {
        self.active = false;
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Boss {
    pub x: i32,
    pub y: i32,
    /// May dip below zero on the killing hit; only `<= 0` matters.
    pub health: i32,
    pub active: bool,
}

// ── Fixed pool ────────────────────────────────────────────────────────────────

/// A fixed-capacity arena. Slots are reused; nothing is ever allocated.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pool<T, const N: usize> {
    slots: [T; N],
}

impl<T: Slot + Copy + Default, const N: usize> Pool<T, N> {
    pub fn new() -> Self {
        Self {
            slots: [T::default(); N],
        }
    }

    pub fn capacity(&self) -> usize {
        N
    }

    /// First inactive slot in index order, if any.
    pub fn free_slot(&mut self) -> Option<&mut T> {
        self.slots.iter_mut().find(|s| !s.is_active())
    }

    /// Activate the first free slot at `(x, y)`. Returns the slot index, or
    /// `None` when the pool is exhausted.
    pub fn spawn(&mut self, x: i32, y: i32) -> Option<usize> {
        let index = self.slots.iter().position(|s| !s.is_active())?;
        self.slots[index].activate(x, y);
        Some(index)
    }

    pub fn active_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_active()).count()
    }

    pub fn active(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter(|s| s.is_active())
    }

    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            slot.deactivate();
        }
    }

    pub fn slots(&self) -> &[T; N] {
        &self.slots
    }

    pub fn slots_mut(&mut self) -> &mut [T; N] {
        &mut self.slots
    }
}

impl<T: Slot + Copy + Default, const N: usize> Default for Pool<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

// ── World ─────────────────────────────────────────────────────────────────────

/// Everything the Playing state simulates, owned in one place.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct World {
    pub player: Player,
    pub bullets: Pool<Bullet, MAX_BULLETS>,
    pub enemies: Pool<Enemy, MAX_ENEMIES>,
    pub powerup: PowerUp,
    pub boss: Boss,
    pub score: u32,
}
