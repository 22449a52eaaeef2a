//! Frame-loop driver connecting the simulation to a host.
//!
//! One `run_frame` call is one rendered frame: queued commands go in, the
//! schedule runs once, UI requests and the frame snapshot come out, and the
//! remainder of the frame budget is slept off to hold 60 FPS.

use std::time::Instant;

use tracing::error;

use crate::constants::LOOP_TIME;
use crate::error::GameResult;
use crate::events::{FinalStats, GameCommand, UiRequest};
use crate::formatter;
use crate::game::Game;
use crate::snapshot::FrameSnapshot;
use crate::world::DoorId;

/// The collaborators surrounding the core: an input source feeding
/// commands in, and a panel/render sink consuming what the core decides
/// should be shown. The core never owns panel content or pixels.
pub trait HostBridge {
    /// Commands captured since the last frame, already mapped from raw key
    /// events (hosts holding raw keys can use `Game::key_down`/`key_up`
    /// instead and return nothing here).
    fn poll_commands(&mut self) -> Vec<GameCommand>;

    fn open_panel(&mut self, door: DoorId);
    fn close_panel(&mut self);
    fn show_death_screen(&mut self, stats: &FinalStats);

    /// Receives the per-frame snapshot; drawing it is entirely the host's
    /// concern.
    fn present(&mut self, frame: &FrameSnapshot);
}

/// Main application wrapper owning the game and its host bridge.
pub struct App<H: HostBridge> {
    pub game: Game,
    pub host: H,
}

impl<H: HostBridge> App<H> {
    pub fn new(game: Game, host: H) -> Self {
        App { game, host }
    }

    /// Executes a single frame: input, tick, UI dispatch, snapshot, sleep.
    ///
    /// Returns `false` once the game requests exit.
    pub fn run_frame(&mut self) -> GameResult<bool> {
        let start = Instant::now();
        formatter::increment_tick();

        for command in self.host.poll_commands() {
            self.game.queue_command(command);
        }

        let exit = self.game.tick();

        for request in self.game.drain_ui_requests() {
            match request {
                UiRequest::OpenPanel(door) => self.host.open_panel(door),
                UiRequest::ClosePanel => self.host.close_panel(),
                UiRequest::ShowDeathScreen(stats) => self.host.show_death_screen(&stats),
            }
        }

        for fault in self.game.drain_errors() {
            error!(%fault, "Recoverable game error");
        }

        let frame = self.game.snapshot()?;
        self.host.present(&frame);

        if exit {
            return Ok(false);
        }

        // Sleep off whatever is left of the frame budget.
        let elapsed = start.elapsed();
        if elapsed < LOOP_TIME {
            spin_sleep::sleep(LOOP_TIME - elapsed);
        }

        Ok(true)
    }

    /// Runs frames until the game requests exit.
    pub fn run(&mut self) -> GameResult<()> {
        while self.run_frame()? {}
        Ok(())
    }
}
