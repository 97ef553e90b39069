//! Character controller
//!
//! Движение, mouse look, crouch (с clearance ray) и фонарик.
//!
//! # Слои
//!
//! - Чистые функции: `movement`, `look`, `crouch`, `flashlight`
//! - `controller` — lifecycle объект поверх collaborator traits (Godot)
//! - `systems` + `CharacterPlugin` — те же функции в Bevy ECS (headless)

use bevy::prelude::*;

pub mod animation;
pub mod collaborators;
pub mod config;
pub mod controller;
pub mod crouch;
pub mod flashlight;
pub mod look;
pub mod movement;
pub mod spawn;
pub mod state;
pub mod systems;


pub use animation::{AnimationClip, AnimationRequested};
pub use collaborators::{
    AnimationPlayback, CameraRig, CharacterBody, InputSource, PointerCapture, RayHit, RayQuery, SpaceQuery,
};
pub use config::{CharacterConfig, PhysicsSettings, CROUCH_SPEED, JUMP_VELOCITY, SPEED};
pub use controller::CharacterController;
pub use crouch::CrouchOutcome;
pub use spawn::spawn_character;
pub use state::{CharacterState, Stance};
pub use systems::{Grounded, HeadlessFloor};

use crate::input::MouseLookEvent;

/// Character Plugin
///
/// Регистрирует events, resources и systems headless контроллера.
/// Physics tick в FixedUpdate, mouse look в Update.
pub struct CharacterPlugin;

impl Plugin for CharacterPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<MouseLookEvent>()
            .add_event::<AnimationRequested>()
            .init_resource::<PhysicsSettings>()
            .init_resource::<HeadlessFloor>();

        app.add_systems(Update, systems::apply_mouse_look_events);

        app.add_systems(
            FixedUpdate,
            (
                systems::character_velocity_step,
                systems::integrate_velocity_to_transform,
                systems::handle_crouch,
                systems::handle_flashlight,
                systems::advance_action_frames,
            )
                .chain(), // Порядок — часть контракта
        );
    }
}
