//! Engine collaborator contracts
//!
//! Контроллер не знает про Godot/Rapier. Всё, что даёт движок
//! (floor check, move-and-slide, raycast, input, анимации), приходит
//! через эти traits. Godot adapter и тестовые fakes реализуют их.

use bevy::prelude::{Mat3, Vec2, Vec3};

use super::animation::AnimationClip;
use crate::input::InputAction;

/// Physics body персонажа (Godot `CharacterBody3D`)
pub trait CharacterBody {
    /// Касается пола (результат последнего move-and-slide)
    fn is_on_floor(&self) -> bool;
    fn velocity(&self) -> Vec3;
    fn set_velocity(&mut self, velocity: Vec3);
    /// Локальный basis тела (yaw), для перевода input в world space
    fn basis(&self) -> Mat3;
    fn position(&self) -> Vec3;
    /// Применяет velocity со slide-on-collision (решает движок)
    fn move_and_slide(&mut self);
    /// Rotation тела вокруг Y
    fn set_yaw(&mut self, yaw: f32);
}

/// Input за текущий physics tick
pub trait InputSource {
    fn is_action_pressed(&self, action: InputAction) -> bool;
    fn is_action_just_pressed(&self, action: InputAction) -> bool;
    /// (left/right, forward/backwards) — см. `compose_move_vector`
    fn move_vector(&self) -> Vec2;
}

/// Параметры ray query
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayQuery {
    pub from: Vec3,
    pub to: Vec3,
    pub collision_mask: u32,
    /// Исключить коллайдер самого персонажа
    pub exclude_self: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayHit {
    pub position: Vec3,
}

/// Direct space state (raycast)
pub trait SpaceQuery {
    fn intersect_ray(&self, query: &RayQuery) -> Option<RayHit>;
}

/// AnimationPlayer
pub trait AnimationPlayback {
    fn play(&mut self, clip: AnimationClip);
}

/// Camera pivot: получает только pitch
pub trait CameraRig {
    fn set_pitch(&mut self, pitch: f32);
}

/// Mouse mode (captured = скрыт + залочен, приходит relative motion)
pub trait PointerCapture {
    fn capture_pointer(&mut self);
}
