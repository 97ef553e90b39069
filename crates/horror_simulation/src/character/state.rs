//! CharacterState — всё, что контроллер мутирует между frame'ами

use bevy::prelude::*;

use super::config::CharacterConfig;

/// Stance персонажа (crouch state machine)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect)]
pub enum Stance {
    #[default]
    Standing,
    Crouched,
}

/// Mutable per-instance state
///
/// # Invariants
/// - `current_feet_speed == config.crouch_speed` ⇔ `stance == Crouched`
/// - `camera_pitch` ∈ [-π/2, π/2]
#[derive(Component, Debug, Clone, Copy, PartialEq, Reflect)]
#[reflect(Component)]
pub struct CharacterState {
    pub velocity: Vec3,
    /// Rotation тела вокруг Y (радианы)
    pub yaw: f32,
    /// Локальный X rotation камеры (радианы)
    pub camera_pitch: f32,
    pub stance: Stance,
    pub current_feet_speed: f32,
    pub is_flashlight_shown: bool,
    /// Кнопку отпустили, но последний clearance ray попал в препятствие
    pub stand_blocked: bool,
}

impl CharacterState {
    pub fn new(config: &CharacterConfig) -> Self {
        Self {
            velocity: Vec3::ZERO,
            yaw: 0.0,
            camera_pitch: 0.0,
            stance: Stance::Standing,
            current_feet_speed: config.speed,
            is_flashlight_shown: false,
            stand_blocked: false,
        }
    }

    pub fn is_crouched(&self) -> bool {
        self.stance == Stance::Crouched
    }

    /// Горизонтальная скорость (длина XZ)
    pub fn horizontal_speed(&self) -> f32 {
        Vec2::new(self.velocity.x, self.velocity.z).length()
    }
}

impl Default for CharacterState {
    fn default() -> Self {
        Self::new(&CharacterConfig::default())
    }
}
