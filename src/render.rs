/// Drawing layer — reads the world, writes to a [`FrameBuffer`].
///
/// No game logic is performed here and nothing is mutated except the frame
/// buffer. The caller clears the buffer before and presents it after.

use crate::entities::World;
use crate::platform::FrameBuffer;
use crate::sprites;

// ── Playing ──────────────────────────────────────────────────────────────────

pub fn draw_game(fb: &mut impl FrameBuffer, world: &World) {
    let player = &world.player;
    fb.draw_bitmap(player.x, player.y, &sprites::WITCH);

    if player.has_barrier {
        fb.draw_bitmap(player.x - 8, player.y - 8, &sprites::BARRIER);
    }

    for bullet in world.bullets.active() {
        fb.draw_bitmap(bullet.x, bullet.y, &sprites::BULLET);
    }
    for enemy in world.enemies.active() {
        fb.draw_bitmap(enemy.x, enemy.y, &sprites::SKELETON);
    }
    if world.powerup.active {
        fb.draw_bitmap(world.powerup.x, world.powerup.y, &sprites::POWERUP);
    }
    if world.boss.active {
        fb.draw_bitmap(world.boss.x, world.boss.y, &sprites::BOSS);
    }

    draw_hud(fb, world);
}

fn draw_hud(fb: &mut impl FrameBuffer, world: &World) {
    fb.draw_text(0, 0, &format!("Score: {}", world.score));
    fb.draw_text(70, 0, &format!("HP: {}", world.player.health));
}

// ── Title & game over ────────────────────────────────────────────────────────

pub fn draw_opening(fb: &mut impl FrameBuffer) {
    fb.draw_text(10, 20, "Witch Shooter");
    fb.draw_text(10, 40, "Press A to start");
}

pub fn draw_ending(fb: &mut impl FrameBuffer, world: &World) {
    fb.draw_text(10, 20, "Game Over");
    fb.draw_text(10, 30, &format!("Score: {}", world.score));
    fb.draw_text(10, 40, "Press A to restart");
}
