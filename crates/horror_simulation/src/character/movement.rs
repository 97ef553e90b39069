//! Velocity step: gravity → jump → horizontal movement
//!
//! Чистые функции, без движка. Controller и ECS system вызывают одно и то же.

use bevy::prelude::*;

/// Сдвигает `from` к `to` не больше чем на `max_delta` (без overshoot)
pub fn move_toward(from: f32, to: f32, max_delta: f32) -> f32 {
    if (to - from).abs() <= max_delta {
        to
    } else {
        from + (to - from).signum() * max_delta
    }
}

/// Гравитация только в воздухе
pub fn apply_gravity(velocity: &mut Vec3, grounded: bool, gravity: f32, delta: f32) {
    if !grounded {
        velocity.y -= gravity * delta;
    }
}

/// Прыжок: just pressed + на полу → vertical = jump_velocity (перезаписывает)
pub fn apply_jump(velocity: &mut Vec3, grounded: bool, jump_just_pressed: bool, jump_velocity: f32) {
    if jump_just_pressed && grounded {
        velocity.y = jump_velocity;
    }
}

/// Переводит 2D input в world-space направление через basis тела
///
/// `(x, 0, y)` — Godot convention: y < 0 = forward (-Z).
/// Нулевой input даёт `Vec3::ZERO`.
pub fn input_direction(basis: Mat3, move_vector: Vec2) -> Vec3 {
    (basis * Vec3::new(move_vector.x, 0.0, move_vector.y)).normalize_or_zero()
}

/// Горизонтальная скорость: есть направление → мгновенно `speed`,
/// нет → затухание к нулю на `speed * delta` за tick
pub fn apply_horizontal(velocity: &mut Vec3, direction: Vec3, speed: f32, delta: f32) {
    if direction != Vec3::ZERO {
        velocity.x = direction.x * speed;
        velocity.z = direction.z * speed;
    } else {
        let max_delta = speed * delta;
        velocity.x = move_toward(velocity.x, 0.0, max_delta);
        velocity.z = move_toward(velocity.z, 0.0, max_delta);
    }
}

/// Вход одного velocity step
#[derive(Debug, Clone, Copy)]
pub struct VelocityStep {
    pub grounded: bool,
    pub jump_just_pressed: bool,
    pub move_vector: Vec2,
    pub basis: Mat3,
    pub gravity: f32,
    pub jump_velocity: f32,
    pub feet_speed: f32,
    pub delta: f32,
}

/// Полный velocity step в фиксированном порядке
pub fn step_velocity(velocity: Vec3, step: &VelocityStep) -> Vec3 {
    let mut velocity = velocity;

    apply_gravity(&mut velocity, step.grounded, step.gravity, step.delta);
    apply_jump(&mut velocity, step.grounded, step.jump_just_pressed, step.jump_velocity);

    let direction = input_direction(step.basis, step.move_vector);
    apply_horizontal(&mut velocity, direction, step.feet_speed, step.delta);

    velocity
}
