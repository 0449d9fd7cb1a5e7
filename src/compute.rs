/// Game-logic functions.
///
/// Every function works on a `&mut World` owned by the caller. Time arrives
/// as a millisecond reading and randomness through an injected
/// [`RandomSource`], so a test can pin both down.
///
/// [`update_game`] runs the per-frame steps in a fixed order; the individual
/// steps are public so they can be exercised one at a time.

use log::debug;

use crate::entities::{
    Slot, World, BARRIER_MS, BOSS_ATTACK_CHANCE, BOSS_HEALTH, BOSS_SCORE, BOSS_SIZE,
    BOSS_STANDOFF_X, BOSS_THRESHOLD, BOSS_THRESHOLD_LATE, BULLET_OFFSET_X, BULLET_OFFSET_Y,
    BULLET_SIZE, BULLET_SPEED, ENEMY_SCORE, ENEMY_SIZE, ENEMY_SPAWN_CHANCE, ENEMY_SPEED, HEIGHT,
    MAX_HEALTH, PLAYER_SIZE, PLAYER_START_X, PLAYER_START_Y, POWERUP_SIZE, POWERUP_SPAWN_CHANCE,
    SESSION_MS, START_HEALTH, WIDTH,
};
use crate::platform::{Button, InputFrame, RandomSource};

// ── Collision ────────────────────────────────────────────────────────────────

/// Axis-aligned box: top-left corner plus size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }
}

/// Strict overlap: boxes that only share an edge do not collide.
pub fn collide(a: Rect, b: Rect) -> bool {
    a.x < b.x + b.w && a.x + a.w > b.x && a.y < b.y + b.h && a.y + a.h > b.y
}

fn player_box(world: &World) -> Rect {
    Rect::new(world.player.x, world.player.y, PLAYER_SIZE, PLAYER_SIZE)
}

fn boss_box(world: &World) -> Rect {
    Rect::new(world.boss.x, world.boss.y, BOSS_SIZE, BOSS_SIZE)
}

/// One point of damage, unless the barrier soaks it up.
fn hurt_player(world: &mut World) {
    if world.player.has_barrier {
        return;
    }
    world.player.health = world.player.health.saturating_sub(1);
    debug!("player hit, health {}", world.player.health);
}

// ── Reset ────────────────────────────────────────────────────────────────────

/// Back to the start-of-session state. Idempotent.
pub fn reset(world: &mut World) {
    world.player.x = PLAYER_START_X;
    world.player.y = PLAYER_START_Y;
    world.player.health = START_HEALTH;
    world.player.has_barrier = false;
    world.score = 0;
    world.bullets.clear();
    world.enemies.clear();
    world.powerup.deactivate();
    world.boss.active = false;
}

// ── Player input ─────────────────────────────────────────────────────────────

/// Vertical movement only, one pixel per frame, kept on screen.
pub fn move_player(world: &mut World, input: &InputFrame) {
    let player = &mut world.player;
    if input.pressed(Button::Up) && player.y > 0 {
        player.y -= 1;
    }
    if input.pressed(Button::Down) && player.y < HEIGHT - PLAYER_SIZE {
        player.y += 1;
    }
}

/// Fire into the first free bullet slot; silently dropped if none is free.
pub fn fire(world: &mut World, input: &InputFrame) {
    if !input.just_pressed(Button::Fire) {
        return;
    }
    let x = world.player.x + BULLET_OFFSET_X;
    let y = world.player.y + BULLET_OFFSET_Y;
    world.bullets.spawn(x, y);
}

/// Raise the barrier on a fresh Guard press and drop it once it has run out.
pub fn guard(world: &mut World, input: &InputFrame, now: u64) {
    let player = &mut world.player;
    if input.just_pressed(Button::Guard) && !player.has_barrier {
        player.has_barrier = true;
        player.barrier_time = now;
    }
    if player.has_barrier && now.saturating_sub(player.barrier_time) > BARRIER_MS {
        player.has_barrier = false;
    }
}

// ── Movement & spawning ──────────────────────────────────────────────────────

pub fn advance_bullets(world: &mut World) {
    for bullet in world.bullets.slots_mut().iter_mut().filter(|b| b.active) {
        bullet.x += BULLET_SPEED;
        if bullet.x > WIDTH {
            bullet.active = false;
        }
    }
}

/// 5% chance per frame of an enemy entering from the right edge.
pub fn spawn_enemy(world: &mut World, rng: &mut impl RandomSource) {
    if rng.random(100) >= ENEMY_SPAWN_CHANCE {
        return;
    }
    if let Some(enemy) = world.enemies.free_slot() {
        let y = rng.random((HEIGHT - ENEMY_SIZE) as u32) as i32;
        enemy.activate(WIDTH, y);
    }
}

pub fn advance_enemies(world: &mut World) {
    for enemy in world.enemies.slots_mut().iter_mut().filter(|e| e.active) {
        enemy.x -= ENEMY_SPEED;
        if enemy.x < 0 {
            enemy.active = false;
        }
    }
}

fn summon_boss(world: &mut World, y: i32) {
    world.boss.active = true;
    world.boss.x = WIDTH;
    world.boss.y = y;
    world.boss.health = BOSS_HEALTH;
    debug!("boss spawned at score {}", world.score);
}

/// The boss appears once the score reaches the first threshold.
pub fn spawn_boss(world: &mut World) {
    if world.score >= BOSS_THRESHOLD && !world.boss.active {
        summon_boss(world, HEIGHT / 2);
    }
}

/// Boss drifts left, wrapping to the right edge, and may release an enemy
/// from where it stands.
pub fn advance_boss(world: &mut World, rng: &mut impl RandomSource) {
    if !world.boss.active {
        return;
    }
    world.boss.x -= 1;
    if world.boss.x < 0 {
        world.boss.x = WIDTH;
    }
    if rng.random(100) < BOSS_ATTACK_CHANCE {
        let (x, y) = (world.boss.x, world.boss.y);
        world.enemies.spawn(x, y);
    }
}

/// Rare power-up, only while none is on screen.
pub fn spawn_powerup(world: &mut World, rng: &mut impl RandomSource) {
    if world.powerup.active || rng.random(1000) >= POWERUP_SPAWN_CHANCE {
        return;
    }
    let y = rng.random((HEIGHT - POWERUP_SIZE) as u32) as i32;
    world.powerup.activate(WIDTH, y);
}

pub fn advance_powerup(world: &mut World) {
    let powerup = &mut world.powerup;
    if powerup.active {
        powerup.x -= 1;
        if powerup.x < 0 {
            powerup.active = false;
        }
    }
}

// ── Collisions ───────────────────────────────────────────────────────────────

/// Every active bullet against every active enemy.
///
/// A bullet is only checked for liveness before its enemy scan, so a
/// bullet sitting on two overlapping enemies takes out both.
pub fn resolve_bullet_enemy_hits(world: &mut World) {
    let World {
        bullets,
        enemies,
        score,
        ..
    } = world;
    for bullet in bullets.slots_mut().iter_mut().filter(|b| b.active) {
        let shot = Rect::new(bullet.x, bullet.y, BULLET_SIZE, BULLET_SIZE);
        for enemy in enemies.slots_mut().iter_mut().filter(|e| e.active) {
            if collide(shot, Rect::new(enemy.x, enemy.y, ENEMY_SIZE, ENEMY_SIZE)) {
                bullet.active = false;
                enemy.active = false;
                *score += ENEMY_SCORE;
            }
        }
    }
}

/// Enemies that touch the player are destroyed, hurting the player unless
/// the barrier is up.
pub fn resolve_player_enemy_hits(world: &mut World) {
    let hitbox = player_box(world);
    for index in 0..world.enemies.capacity() {
        let enemy = world.enemies.slots()[index];
        if enemy.active && collide(hitbox, Rect::new(enemy.x, enemy.y, ENEMY_SIZE, ENEMY_SIZE)) {
            world.enemies.slots_mut()[index].active = false;
            hurt_player(world);
        }
    }
}

pub fn resolve_powerup_pickup(world: &mut World) {
    let powerup = world.powerup;
    if powerup.active
        && collide(
            player_box(world),
            Rect::new(powerup.x, powerup.y, POWERUP_SIZE, POWERUP_SIZE),
        )
    {
        world.powerup.active = false;
        world.player.health = (world.player.health + 1).min(MAX_HEALTH);
        debug!("power-up collected, health {}", world.player.health);
    }
}

/// Second boss trigger at the late threshold, with its own start height.
///
/// Effectively unreachable and most likely unintentional: [`spawn_boss`]
/// runs earlier in the same frame with the lower threshold, so any score
/// that passes this check has already summoned the boss.
pub fn spawn_boss_late(world: &mut World) {
    if world.score >= BOSS_THRESHOLD_LATE && !world.boss.active {
        summon_boss(world, HEIGHT / 2 - 8);
    }
}

/// The boss's end-of-frame phase: stand-off movement, bullet hits, then
/// player contact. Whether the boss is active is checked once, up front, so
/// a boss killed by a bullet still counts as engaged for the rest of the
/// phase.
pub fn engage_boss(world: &mut World) {
    if !world.boss.active {
        return;
    }
    hold_boss_standoff(world);
    resolve_bullet_boss_hits(world);
    resolve_player_boss_contact(world);
}

/// Second movement rule: push the boss left until it reaches the stand-off
/// column. Runs in the same frame as [`advance_boss`], so the boss moves
/// two pixels per frame while it is right of the stand-off column.
pub fn hold_boss_standoff(world: &mut World) {
    if world.boss.x > BOSS_STANDOFF_X {
        world.boss.x -= 1;
    }
}

/// Bullets chip at the boss. Every overlapping bullet lands, even after the
/// boss has dropped to zero health, and each blow that leaves health at or
/// below zero is worth [`BOSS_SCORE`].
pub fn resolve_bullet_boss_hits(world: &mut World) {
    let target = boss_box(world);
    let World {
        bullets,
        boss,
        score,
        ..
    } = world;
    for bullet in bullets.slots_mut().iter_mut().filter(|b| b.active) {
        if collide(Rect::new(bullet.x, bullet.y, BULLET_SIZE, BULLET_SIZE), target) {
            bullet.active = false;
            boss.health -= 1;
            if boss.health <= 0 {
                boss.active = false;
                *score += BOSS_SCORE;
                debug!("boss defeated, score {}", score);
            }
        }
    }
}

/// Touching the boss hurts every frame; the boss itself is unaffected.
pub fn resolve_player_boss_contact(world: &mut World) {
    if collide(player_box(world), boss_box(world)) {
        hurt_player(world);
    }
}

// ── Per-frame update ─────────────────────────────────────────────────────────

/// Advance the Playing state by one frame. The order of the steps matters:
/// bullets resolve against enemies before enemies reach the player.
pub fn update_game(world: &mut World, input: &InputFrame, now: u64, rng: &mut impl RandomSource) {
    move_player(world, input);
    fire(world, input);
    guard(world, input, now);

    advance_bullets(world);
    spawn_enemy(world, rng);
    advance_enemies(world);

    spawn_boss(world);
    advance_boss(world, rng);

    spawn_powerup(world, rng);
    advance_powerup(world);

    resolve_bullet_enemy_hits(world);
    resolve_player_enemy_hits(world);
    resolve_powerup_pickup(world);

    spawn_boss_late(world);
    engage_boss(world);
}

/// The session ends on death or once the time limit has been exceeded.
pub fn session_over(world: &World, session_start: u64, now: u64) -> bool {
    world.player.health == 0 || now.saturating_sub(session_start) > SESSION_MS
}
