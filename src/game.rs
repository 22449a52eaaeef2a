//! This module contains the main game logic and state.

use bevy_ecs::event::{EventRegistry, Events};
use bevy_ecs::schedule::{IntoScheduleConfigs, Schedule, SystemSet};
use bevy_ecs::system::Res;
use bevy_ecs::world::World;
use glam::Vec2;
use tracing::{debug, info};

use crate::error::{GameError, GameResult};
use crate::events::{GameCommand, GameEvent, UiRequest};
use crate::snapshot::{self, FrameSnapshot};
use crate::systems::{
    self, ActivePanel, Bindings, CameraState, GameStage, GlobalState, InputState, KeyCode, PlayerBundle, RunStats,
    Viewport,
};
use crate::world::{generator, DoorId, Frontier, WorldRng};

/// System sets ordering one tick: fold input, simulate, then respond to
/// state transitions. The simulation set is structurally frozen while the
/// player is dead or the game mode is inactive.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
enum GameplaySet {
    Input,
    Update,
    Respond,
}

/// The whole simulation: a `bevy_ecs` world plus the schedule that advances
/// it one fixed-step tick at a time.
///
/// There is no ambient global: hosts construct a `Game`, feed it commands,
/// tick it once per animation frame, and drain the UI requests and frame
/// snapshot afterwards. All mutation happens inside `tick`; between ticks
/// the world is quiescent and observers may read freely.
pub struct Game {
    pub world: World,
    pub schedule: Schedule,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// A game with an OS-seeded world generator.
    pub fn new() -> Self {
        Self::with_rng(WorldRng::from_os_rng())
    }

    /// A game whose generation and death messages replay exactly; used by
    /// tests and demo recordings.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(WorldRng::seeded(seed))
    }

    fn with_rng(rng: WorldRng) -> Self {
        let mut world = World::default();
        let mut schedule = Schedule::default();

        Self::setup_ecs(&mut world);
        Self::insert_resources(&mut world, rng);
        Self::configure_schedule(&mut schedule);

        world.spawn(PlayerBundle::at_spawn());
        Self::spawn_initial_world(&mut world);

        info!("Game initialization completed");
        Game { world, schedule }
    }

    fn setup_ecs(world: &mut World) {
        EventRegistry::register_event::<GameEvent>(world);
        EventRegistry::register_event::<UiRequest>(world);
        EventRegistry::register_event::<GameError>(world);
    }

    fn insert_resources(world: &mut World, rng: WorldRng) {
        world.insert_resource(GlobalState::default());
        world.insert_resource(GameStage::default());
        world.insert_resource(ActivePanel::default());
        world.insert_resource(RunStats::default());
        world.insert_resource(CameraState::default());
        world.insert_resource(Viewport::default());
        world.insert_resource(InputState::default());
        world.insert_resource(Bindings::default());
        world.insert_resource(Frontier::default());
        world.insert_resource(rng);
    }

    fn configure_schedule(schedule: &mut Schedule) {
        schedule.add_systems((
            systems::input_system.in_set(GameplaySet::Input),
            (
                systems::player_control_system,
                systems::camera_system,
                systems::movement_system,
                systems::item_system,
                systems::interact_system,
                generator::generation_system,
                systems::death_system,
                systems::boundary_system,
            )
                .chain()
                .in_set(GameplaySet::Update),
            systems::respawn_system.in_set(GameplaySet::Respond),
        ));

        schedule.configure_sets(
            (
                GameplaySet::Input,
                GameplaySet::Update.run_if(|stage: Res<GameStage>, state: Res<GlobalState>| {
                    stage.is_running() && state.active
                }),
                GameplaySet::Respond.run_if(|state: Res<GlobalState>| state.active),
            )
                .chain(),
        );
    }

    /// Populates a fresh world directly (the respawn system does the same
    /// through `Commands`).
    fn spawn_initial_world(world: &mut World) {
        let layout = {
            let mut rng = world.resource_mut::<WorldRng>();
            generator::initial_world(&mut rng.0)
        };

        world.resource_mut::<Frontier>().0 = layout.frontier;
        info!(
            platforms = layout.platforms.len(),
            coins = layout.coins.len(),
            clouds = layout.clouds.len(),
            frontier = layout.frontier,
            "Initial world generated"
        );

        for platform in layout.platforms {
            world.spawn(platform);
        }
        for coin in layout.coins {
            world.spawn(coin);
        }
        for cloud in layout.clouds {
            world.spawn(cloud);
        }
    }

    /// Advances the simulation by exactly one frame.
    ///
    /// Ages out the previous frame's events first so every queued command is
    /// seen exactly once, then runs the full system schedule. Returns `true`
    /// when the host should stop scheduling further ticks.
    pub fn tick(&mut self) -> bool {
        self.world.resource_mut::<Events<GameEvent>>().update();
        self.world.resource_mut::<Events<UiRequest>>().update();
        self.world.resource_mut::<Events<GameError>>().update();

        self.schedule.run(&mut self.world);

        self.world.resource::<GlobalState>().exit
    }

    /// Queues a command for the next tick. Commands accumulate between
    /// frames; last-writer-wins within a tick is acceptable at sub-frame
    /// granularity.
    pub fn queue_command(&mut self, command: GameCommand) {
        self.world.resource_mut::<Events<GameEvent>>().send(GameEvent::from(command));
    }

    /// Maps a key press through the bindings and queues the result.
    pub fn key_down(&mut self, key: KeyCode) {
        if let Some(command) = self.world.resource::<Bindings>().command_for(key, true) {
            self.queue_command(command);
        }
    }

    /// Maps a key release through the bindings and queues the result.
    pub fn key_up(&mut self, key: KeyCode) {
        if let Some(command) = self.world.resource::<Bindings>().command_for(key, false) {
            self.queue_command(command);
        }
    }

    /// Activates the simulation (the host hides its page content itself).
    pub fn start(&mut self) {
        self.world.resource_mut::<GlobalState>().active = true;
        info!("Game mode activated");
    }

    /// Deactivates the simulation, releasing held input and closing any open
    /// panel so the page returns to a clean state.
    pub fn stop(&mut self) {
        self.world.resource_mut::<GlobalState>().active = false;
        *self.world.resource_mut::<InputState>() = InputState::default();

        let open = self.world.resource_mut::<ActivePanel>().0.take();
        if open.is_some() {
            self.world.resource_mut::<Events<UiRequest>>().send(UiRequest::ClosePanel);
        }
        info!("Game mode deactivated");
    }

    pub fn is_active(&self) -> bool {
        self.world.resource::<GlobalState>().active
    }

    pub fn stage(&self) -> GameStage {
        *self.world.resource::<GameStage>()
    }

    pub fn active_panel(&self) -> Option<DoorId> {
        self.world.resource::<ActivePanel>().0
    }

    pub fn stats(&self) -> RunStats {
        *self.world.resource::<RunStats>()
    }

    pub fn camera_offset(&self) -> f32 {
        self.world.resource::<CameraState>().offset_x
    }

    /// Resizes the logical viewport (the host forwards canvas resizes here).
    pub fn set_viewport(&mut self, size: Vec2) {
        debug!(width = size.x, height = size.y, "Viewport resized");
        self.world.resource_mut::<Viewport>().size = size;
    }

    /// UI side effects produced since the last drain, in emission order.
    pub fn drain_ui_requests(&mut self) -> Vec<UiRequest> {
        self.world.resource_mut::<Events<UiRequest>>().drain().collect()
    }

    /// Recoverable faults reported by systems since the last drain.
    pub fn drain_errors(&mut self) -> Vec<GameError> {
        self.world.resource_mut::<Events<GameError>>().drain().collect()
    }

    /// Captures the frame snapshot the render collaborator consumes.
    pub fn snapshot(&mut self) -> GameResult<FrameSnapshot> {
        snapshot::capture(&mut self.world)
    }
}
