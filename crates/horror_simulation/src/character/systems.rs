//! ECS systems (headless режим)
//!
//! Тот же порядок что и у `CharacterController::physics_tick`, только
//! движок заменён на Transform-интеграцию + Rapier clearance ray.
//!
//! FixedUpdate (chain):
//! 1. character_velocity_step — gravity/jump/movement
//! 2. integrate_velocity_to_transform — move + floor resolve (move_and_slide)
//! 3. handle_crouch — crouch state machine + clearance ray
//! 4. handle_flashlight — edge toggle
//! 5. advance_action_frames — закрываем input frame (just_pressed edges)

use bevy::prelude::*;
use bevy_rapier3d::prelude::{CollisionGroups, Group, QueryFilter, ReadRapierContext};

use super::animation::AnimationRequested;
use super::collaborators::RayHit;
use super::config::{CharacterConfig, PhysicsSettings};
use super::controller::clearance_query;
use super::crouch::{update_crouch, CrouchOutcome};
use super::flashlight::update_flashlight;
use super::look::apply_mouse_look;
use super::movement::{step_velocity, VelocityStep};
use super::state::CharacterState;
use crate::character::InputSource;
use crate::input::{ActionState, InputAction, MouseLookEvent};
use crate::logger;

/// Касается ли персонаж пола (результат последней интеграции)
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Grounded(pub bool);

/// Плоский пол headless мира (Godot режим берёт is_on_floor из движка)
#[derive(Resource, Debug, Clone, Copy, Default)]
pub struct HeadlessFloor {
    pub height: f32,
}

pub fn character_velocity_step(
    mut query: Query<(&Transform, &ActionState, &CharacterConfig, &Grounded, &mut CharacterState)>,
    physics: Res<PhysicsSettings>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (transform, actions, config, grounded, mut state) in query.iter_mut() {
        let step = VelocityStep {
            grounded: grounded.0,
            jump_just_pressed: actions.is_action_just_pressed(InputAction::Jump),
            move_vector: actions.move_vector(),
            basis: Mat3::from_quat(transform.rotation),
            gravity: physics.gravity,
            jump_velocity: config.jump_velocity,
            feet_speed: state.current_feet_speed,
            delta,
        };

        state.velocity = step_velocity(state.velocity, &step);
    }
}

/// position += velocity * dt, затем упор в пол
///
/// Упрощённый move_and_slide: единственная коллизия — плоскость пола.
pub fn integrate_velocity_to_transform(
    mut query: Query<(&mut Transform, &mut CharacterState, &mut Grounded)>,
    floor: Res<HeadlessFloor>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (mut transform, mut state, mut grounded) in query.iter_mut() {
        transform.translation += state.velocity * delta;

        if transform.translation.y <= floor.height {
            transform.translation.y = floor.height;
            state.velocity.y = state.velocity.y.max(0.0);
            grounded.0 = true;
        } else {
            grounded.0 = false;
        }
    }
}

/// Crouch sub-step
///
/// Clearance ray через RapierContext. Нет physics контекста (чистый
/// headless без RapierPhysicsPlugin) = нечему загораживать, встаём.
pub fn handle_crouch(
    mut query: Query<(Entity, &Transform, &ActionState, &CharacterConfig, &mut CharacterState)>,
    read_rapier_context: ReadRapierContext,
    mut animation_events: EventWriter<AnimationRequested>,
) {
    let rapier_context = read_rapier_context.single().ok();

    for (entity, transform, actions, config, mut state) in query.iter_mut() {
        let held = actions.is_action_pressed(InputAction::Crouch);

        let outcome = update_crouch(&mut state, held, config, || {
            let context = rapier_context.as_ref()?;

            let ray = clearance_query(transform.translation, config);
            let filter = QueryFilter::new()
                .groups(CollisionGroups::new(
                    Group::ALL,
                    Group::from_bits_truncate(ray.collision_mask),
                ))
                .exclude_rigid_body(entity);

            context
                .cast_ray(ray.from, Vec3::Y, config.clearance_distance, true, filter)
                .map(|(_, toi)| RayHit {
                    position: ray.from + Vec3::Y * toi,
                })
        });

        match outcome {
            CrouchOutcome::Crouched => logger::log(&format!("{:?} crouched", entity)),
            CrouchOutcome::StoodUp => logger::log(&format!("{:?} stood up", entity)),
            CrouchOutcome::Blocked { hit } => logger::log(&format!(
                "{:?} stand blocked by obstruction at y={:.2}",
                entity, hit.position.y
            )),
            CrouchOutcome::StillBlocked | CrouchOutcome::Unchanged => {}
        }

        if let Some(clip) = outcome.clip() {
            animation_events.write(AnimationRequested { entity, clip });
        }
    }
}

pub fn handle_flashlight(
    mut query: Query<(Entity, &ActionState, &mut CharacterState)>,
    mut animation_events: EventWriter<AnimationRequested>,
) {
    for (entity, actions, mut state) in query.iter_mut() {
        let just_pressed = actions.is_action_just_pressed(InputAction::Flashlight);

        if let Some(clip) = update_flashlight(&mut state, just_pressed) {
            animation_events.write(AnimationRequested { entity, clip });
            logger::log(&format!("{:?} flashlight shown: {}", entity, state.is_flashlight_shown));
        }
    }
}

pub fn advance_action_frames(mut query: Query<&mut ActionState>) {
    for mut actions in query.iter_mut() {
        actions.end_frame();
    }
}

/// Mouse look: yaw → Transform тела, pitch → CharacterState (камера)
///
/// Работает в Update: mouse motion приходит чаще physics tick.
pub fn apply_mouse_look_events(
    mut events: EventReader<MouseLookEvent>,
    mut query: Query<(&CharacterConfig, &mut CharacterState, &mut Transform)>,
) {
    for event in events.read() {
        let Ok((config, mut state, mut transform)) = query.get_mut(event.entity) else {
            logger::log_warning(&format!("MouseLookEvent for unknown character {:?}", event.entity));
            continue;
        };

        apply_mouse_look(&mut state, event.relative, config);
        transform.rotation = Quat::from_rotation_y(state.yaw);
    }
}
