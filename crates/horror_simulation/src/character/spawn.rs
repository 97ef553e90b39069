//! Spawn helper для headless персонажа

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, RigidBody};

use super::config::CharacterConfig;
use super::state::CharacterState;
use super::systems::Grounded;
use crate::error::ControllerError;
use crate::input::ActionState;

/// Создаёт entity персонажа:
/// - Transform (yaw живёт в rotation)
/// - CharacterState + CharacterConfig + ActionState + Grounded
/// - Rapier: kinematic capsule (чтобы clearance ray себя исключал по rigid body)
///
/// Невалидный конфиг → `Err`, entity не создаётся.
pub fn spawn_character(
    commands: &mut Commands,
    position: Vec3,
    config: CharacterConfig,
) -> Result<Entity, ControllerError> {
    config.validate()?;

    let entity = commands
        .spawn((
            Transform::from_translation(position),
            CharacterState::new(&config),
            config,
            ActionState::default(),
            Grounded::default(),
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.5, 0.4), // Высота 1.8m (0.5 * 2 + 0.4 * 2), радиус 0.4m
        ))
        .id();

    Ok(entity)
}
