use std::collections::HashMap;

use bevy_ecs::{event::EventReader, resource::Resource, system::ResMut};
use bitflags::bitflags;

use crate::events::{GameCommand, GameEvent};
use crate::systems::GlobalState;

/// Physical keys the host reports. Deliberately limited to the fixed control
/// bindings; anything else never reaches the core.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    A,
    D,
    E,
    R,
    Space,
    ArrowLeft,
    ArrowRight,
    Escape,
}

/// Maps key transitions to game commands. Presses and releases have
/// separate tables because only the movement keys carry a stop command.
#[derive(Debug, Clone, Resource)]
pub struct Bindings {
    press: HashMap<KeyCode, GameCommand>,
    release: HashMap<KeyCode, GameCommand>,
}

impl Default for Bindings {
    fn default() -> Self {
        let mut press = HashMap::new();
        press.insert(KeyCode::A, GameCommand::StartMoveLeft);
        press.insert(KeyCode::ArrowLeft, GameCommand::StartMoveLeft);
        press.insert(KeyCode::D, GameCommand::StartMoveRight);
        press.insert(KeyCode::ArrowRight, GameCommand::StartMoveRight);
        press.insert(KeyCode::Space, GameCommand::Jump);
        press.insert(KeyCode::E, GameCommand::Interact);
        press.insert(KeyCode::R, GameCommand::Respawn);
        press.insert(KeyCode::Escape, GameCommand::Exit);

        let mut release = HashMap::new();
        release.insert(KeyCode::A, GameCommand::StopMoveLeft);
        release.insert(KeyCode::ArrowLeft, GameCommand::StopMoveLeft);
        release.insert(KeyCode::D, GameCommand::StopMoveRight);
        release.insert(KeyCode::ArrowRight, GameCommand::StopMoveRight);

        Self { press, release }
    }
}

impl Bindings {
    pub fn command_for(&self, key: KeyCode, pressed: bool) -> Option<GameCommand> {
        if pressed {
            self.press.get(&key).copied()
        } else {
            self.release.get(&key).copied()
        }
    }
}

bitflags! {
    /// Movement keys currently held down.
    #[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
    pub struct MoveButtons: u8 {
        const LEFT = 1 << 0;
        const RIGHT = 1 << 1;
    }
}

/// Per-tick snapshot of control intent, rebuilt from the command stream at
/// the top of every tick and consulted synchronously by the gameplay
/// systems. Keys arrive asynchronously; the simulation only ever sees this
/// snapshot.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct InputState {
    pub held: MoveButtons,
    /// One-shot requests; cleared every tick whether or not they were honored.
    pub jump_requested: bool,
    pub interact_requested: bool,
    pub respawn_requested: bool,
}

impl InputState {
    fn clear_requests(&mut self) {
        self.jump_requested = false;
        self.interact_requested = false;
        self.respawn_requested = false;
    }
}

/// Folds queued commands into the input snapshot. Exit is honored even when
/// the game mode is inactive; everything else is dropped until `start()`.
pub fn input_system(mut events: EventReader<GameEvent>, mut input: ResMut<InputState>, mut state: ResMut<GlobalState>) {
    input.clear_requests();

    for event in events.read() {
        let GameEvent::Command(command) = *event;

        match command {
            GameCommand::Exit => {
                state.exit = true;
                continue;
            }
            _ if !state.active => continue,
            GameCommand::StartMoveLeft => input.held.insert(MoveButtons::LEFT),
            GameCommand::StopMoveLeft => input.held.remove(MoveButtons::LEFT),
            GameCommand::StartMoveRight => input.held.insert(MoveButtons::RIGHT),
            GameCommand::StopMoveRight => input.held.remove(MoveButtons::RIGHT),
            GameCommand::Jump => input.jump_requested = true,
            GameCommand::Interact => input.interact_requested = true,
            GameCommand::Respawn => input.respawn_requested = true,
        }
    }
}
