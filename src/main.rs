//! Headless demo runner.
//!
//! Drives the simulation with a scripted input tape (run right, jump on a
//! cadence, close panels, retry on death) and logs what the UI collaborators
//! would be asked to show. Useful for eyeballing the core without a renderer.

use anyhow::Context;
use tracing::info;
use tracing_error::ErrorLayer;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use runfolio::app::{App, HostBridge};
use runfolio::constants::LOOP_TIME;
use runfolio::events::{FinalStats, GameCommand};
use runfolio::formatter::TickFormatter;
use runfolio::game::Game;
use runfolio::snapshot::FrameSnapshot;
use runfolio::world::DoorId;

/// How many frames the demo runs before exiting (30 seconds at 60 FPS).
const DEMO_FRAMES: u64 = 1800;

/// Scripted stand-in for the input and panel collaborators.
#[derive(Default)]
struct DemoHost {
    frame: u64,
    pending: Vec<GameCommand>,
    deaths: u32,
}

impl HostBridge for DemoHost {
    fn poll_commands(&mut self) -> Vec<GameCommand> {
        self.frame += 1;

        let mut commands = std::mem::take(&mut self.pending);
        match self.frame {
            1 => commands.push(GameCommand::StartMoveRight),
            f if f >= DEMO_FRAMES => commands.push(GameCommand::Exit),
            f if f % 40 == 0 => commands.push(GameCommand::Jump),
            _ => {}
        }
        commands
    }

    fn open_panel(&mut self, door: DoorId) {
        info!(%door, "Host would open info panel");
        // Close it again on the next frame so the run keeps moving.
        self.pending.push(GameCommand::Interact);
    }

    fn close_panel(&mut self) {
        info!("Host would close info panel");
    }

    fn show_death_screen(&mut self, stats: &FinalStats) {
        self.deaths += 1;
        info!(
            distance = stats.distance,
            coins = stats.coins,
            score = stats.score,
            message = stats.message.lines().next().unwrap_or(""),
            "Host would show death screen"
        );
        self.pending.push(GameCommand::Respawn);
    }

    fn present(&mut self, frame: &FrameSnapshot) {
        if self.frame % 300 == 0 {
            info!(
                x = frame.player.position.x,
                camera = frame.camera_x,
                distance = frame.stats.distance.floor(),
                coins = frame.stats.coins,
                visible_platforms = frame.platforms.len(),
                deaths = self.deaths,
                "Progress"
            );
        }
    }
}

fn init_tracing() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().event_format(TickFormatter))
        .with(ErrorLayer::default())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug")))
        .try_init()
        .context("installing tracing subscriber")?;
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_tracing()?;

    let mut app = App::new(Game::new(), DemoHost::default());
    app.game.start();

    info!(loop_time = ?LOOP_TIME, frames = DEMO_FRAMES, "Starting game loop");
    app.run().context("game loop failed")?;

    info!("Demo session finished");
    Ok(())
}
