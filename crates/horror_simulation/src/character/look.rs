//! Mouse look (decoupled FPS look)
//!
//! - Horizontal (yaw) → тело вокруг Y
//! - Vertical (pitch) → только камера, clamp [-π/2, π/2]
//!
//! Без acceleration и smoothing: угол линейно зависит от relative motion.

use bevy::prelude::Vec2;
use std::f32::consts::FRAC_PI_2;

use super::config::CharacterConfig;
use super::state::CharacterState;

pub const PITCH_MIN: f32 = -FRAC_PI_2;
pub const PITCH_MAX: f32 = FRAC_PI_2;

/// Радианы поворота для одной оси
pub fn look_delta(relative: f32, config: &CharacterConfig) -> f32 {
    relative / config.look_scale * config.sensitivity as f32
}

/// Применяет relative motion к yaw и pitch
pub fn apply_mouse_look(state: &mut CharacterState, relative: Vec2, config: &CharacterConfig) {
    state.yaw -= look_delta(relative.x, config);
    state.camera_pitch = (state.camera_pitch - look_delta(relative.y, config)).clamp(PITCH_MIN, PITCH_MAX);
}
