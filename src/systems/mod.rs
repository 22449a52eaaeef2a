//! Per-tick gameplay systems and the components/resources they share.

pub mod camera;
pub mod components;
pub mod input;
pub mod interact;
pub mod item;
pub mod movement;
pub mod player;
pub mod state;

pub use camera::{boundary_system, camera_system};
pub use components::{
    aabb_overlap, BodySize, CameraState, Facing, GlobalState, Grounded, PlayerBundle, PlayerControlled, Position,
    RunStats, Velocity, Viewport,
};
pub use input::{input_system, Bindings, InputState, KeyCode, MoveButtons};
pub use interact::{door_in_reach, interact_system};
pub use item::item_system;
pub use movement::movement_system;
pub use player::player_control_system;
pub use state::{death_system, respawn_system, ActivePanel, GameStage};
