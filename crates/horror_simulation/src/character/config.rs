//! Character tuning + physics settings

use bevy::prelude::*;

use crate::error::ControllerError;

/// Скорость ходьбы (m/s)
pub const SPEED: f32 = 5.0;
/// Скорость в приседе (m/s)
pub const CROUCH_SPEED: f32 = 2.0;
/// Вертикальная скорость в момент прыжка (m/s)
pub const JUMP_VELOCITY: f32 = 4.5;
/// Длина clearance ray вверх от позиции тела
pub const CLEARANCE_DISTANCE: f32 = 2.0;
/// Collision mask clearance ray (layer 1 = world geometry)
pub const CLEARANCE_MASK: u32 = 1;
/// 1000 пикселей relative motion = 1 радиан при sensitivity 1
pub const LOOK_SCALE: f32 = 1000.0;
/// Godot `physics/3d/default_gravity`
pub const DEFAULT_GRAVITY: f32 = 9.8;

/// Настройки персонажа (неизменяемы после spawn)
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CharacterConfig {
    /// Mouse sensitivity (целый множитель, Godot `@export`)
    pub sensitivity: i32,
    pub speed: f32,
    pub crouch_speed: f32,
    pub jump_velocity: f32,
    pub clearance_distance: f32,
    pub clearance_mask: u32,
    pub look_scale: f32,
}

impl Default for CharacterConfig {
    fn default() -> Self {
        Self {
            sensitivity: 3,
            speed: SPEED,
            crouch_speed: CROUCH_SPEED,
            jump_velocity: JUMP_VELOCITY,
            clearance_distance: CLEARANCE_DISTANCE,
            clearance_mask: CLEARANCE_MASK,
            look_scale: LOOK_SCALE,
        }
    }
}

impl CharacterConfig {
    pub fn with_sensitivity(sensitivity: i32) -> Self {
        Self {
            sensitivity,
            ..default()
        }
    }

    pub fn validate(&self) -> Result<(), ControllerError> {
        if self.speed <= 0.0 || self.crouch_speed <= 0.0 {
            return Err(ControllerError::InvalidConfig("speeds must be positive"));
        }
        if self.crouch_speed > self.speed {
            return Err(ControllerError::InvalidConfig("crouch speed exceeds walking speed"));
        }
        if self.clearance_distance <= 0.0 {
            return Err(ControllerError::InvalidConfig("clearance distance must be positive"));
        }
        if self.look_scale <= 0.0 {
            return Err(ControllerError::InvalidConfig("look scale must be positive"));
        }
        Ok(())
    }
}

/// Гравитация из настроек проекта (читается один раз при создании)
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct PhysicsSettings {
    /// Модуль ускорения вниз (m/s²), положительный
    pub gravity: f32,
}

impl Default for PhysicsSettings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
        }
    }
}
