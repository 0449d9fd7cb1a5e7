/// The Opening → Playing → Ending state machine and its frame driver.

use log::info;

use crate::compute::{reset, session_over, update_game};
use crate::entities::{GameState, World};
use crate::platform::{Button, Platform};
use crate::render::{draw_ending, draw_game, draw_opening};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Game {
    pub state: GameState,
    pub world: World,
    /// Clock reading (ms) when the current session entered Playing.
    pub session_start: u64,
}

impl Game {
    pub fn new() -> Self {
        let mut world = World::default();
        reset(&mut world);
        Self {
            state: GameState::Opening,
            world,
            session_start: 0,
        }
    }

    /// Run one device frame if the platform's gate says one is due.
    ///
    /// Returns `Ok(false)` when no frame was due; nothing is read, updated or
    /// drawn in that case.
    pub fn frame<P: Platform>(&mut self, platform: &mut P) -> std::io::Result<bool> {
        if !platform.next_frame() {
            return Ok(false);
        }

        let input = platform.poll();
        platform.clear();

        match self.state {
            GameState::Opening => {
                draw_opening(platform);
                if input.just_pressed(Button::Fire) {
                    self.state = GameState::Playing;
                    self.session_start = platform.millis();
                    info!("session started");
                }
            }
            GameState::Playing => {
                let now = platform.millis();
                update_game(&mut self.world, &input, now, platform);
                draw_game(platform, &self.world);
                if session_over(&self.world, self.session_start, now) {
                    self.state = GameState::Ending;
                    info!(
                        "session over: score {}, health {}, {} ms",
                        self.world.score,
                        self.world.player.health,
                        now.saturating_sub(self.session_start)
                    );
                }
            }
            GameState::Ending => {
                draw_ending(platform, &self.world);
                if input.just_pressed(Button::Fire) {
                    reset(&mut self.world);
                    self.state = GameState::Opening;
                    info!("back to title");
                }
            }
        }

        platform.display()?;
        Ok(true)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
