//! Per-entity action state (headless аналог Godot `Input` singleton)
//!
//! Хранит strength каждого action за текущий frame и pressed-флаги
//! прошлого frame. `just_pressed` = pressed сейчас && не pressed раньше.
//! `end_frame()` вызывается ОДИН раз в конце physics tick.

use bevy::prelude::{Component, Vec2};

use super::actions::InputAction;
use crate::character::InputSource;

/// Default deadzone Godot action (InputMap `deadzone = 0.5`)
pub const ACTION_DEADZONE: f32 = 0.5;

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct ActionState {
    strength: [f32; InputAction::COUNT],
    previous: [bool; InputAction::COUNT],
}

impl ActionState {
    pub fn press(&mut self, action: InputAction) {
        self.set_strength(action, 1.0);
    }

    pub fn release(&mut self, action: InputAction) {
        self.set_strength(action, 0.0);
    }

    /// Analog strength (stick/trigger), clamp в [0, 1]
    pub fn set_strength(&mut self, action: InputAction, strength: f32) {
        self.strength[action.index()] = strength.clamp(0.0, 1.0);
    }

    pub fn strength(&self, action: InputAction) -> f32 {
        self.strength[action.index()]
    }

    pub fn release_all(&mut self) {
        self.strength = [0.0; InputAction::COUNT];
    }

    /// Закрывает frame: текущие pressed-флаги становятся "предыдущими"
    pub fn end_frame(&mut self) {
        for action in InputAction::ALL {
            self.previous[action.index()] = self.is_action_pressed(action);
        }
    }
}

impl InputSource for ActionState {
    fn is_action_pressed(&self, action: InputAction) -> bool {
        self.strength(action) >= ACTION_DEADZONE
    }

    fn is_action_just_pressed(&self, action: InputAction) -> bool {
        self.is_action_pressed(action) && !self.previous[action.index()]
    }

    fn move_vector(&self) -> Vec2 {
        compose_move_vector(
            self.strength(InputAction::MoveLeft),
            self.strength(InputAction::MoveRight),
            self.strength(InputAction::MoveForward),
            self.strength(InputAction::MoveBackwards),
            ACTION_DEADZONE,
        )
    }
}

/// Собирает 2D вектор из четырёх направленных strength (как `Input.get_vector`)
///
/// - `x`: -1 (left) → +1 (right)
/// - `y`: -1 (forward, Godot -Z) → +1 (backwards, Godot +Z)
///
/// Длина <= deadzone → ноль, длина > 1 → нормализуется, иначе
/// ремапится из [deadzone, 1] в [0, 1].
pub fn compose_move_vector(left: f32, right: f32, forward: f32, backwards: f32, deadzone: f32) -> Vec2 {
    let raw = Vec2::new(right - left, backwards - forward);
    let length = raw.length();

    if length <= deadzone {
        Vec2::ZERO
    } else if length > 1.0 {
        raw / length
    } else {
        let remapped = (length - deadzone) / (1.0 - deadzone);
        raw * (remapped / length)
    }
}
