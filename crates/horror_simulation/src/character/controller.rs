//! CharacterController — lifecycle объект контроллера
//!
//! Владеет `CharacterState` и вызывается из engine callbacks:
//!
//! ```text
//! ready()          → capture pointer, seed yaw/pitch
//! physics_tick()   → velocity step → move_and_slide → crouch → flashlight
//! handle_input()   → mouse look (yaw тело, pitch камера)
//! ```
//!
//! Порядок внутри tick фиксирован: crouch меняет speed ПОСЛЕ движения,
//! новая скорость действует со следующего tick.

use bevy::prelude::Vec3;

use super::collaborators::{
    AnimationPlayback, CameraRig, CharacterBody, InputSource, PointerCapture, RayQuery, SpaceQuery,
};
use super::config::{CharacterConfig, PhysicsSettings};
use super::crouch::{update_crouch, CrouchOutcome};
use super::flashlight::update_flashlight;
use super::look::apply_mouse_look;
use super::movement::{step_velocity, VelocityStep};
use super::state::CharacterState;
use crate::error::ControllerError;
use crate::input::{InputAction, InputEventKind};
use crate::logger;

#[derive(Debug, Clone)]
pub struct CharacterController {
    config: CharacterConfig,
    physics: PhysicsSettings,
    state: CharacterState,
}

impl CharacterController {
    pub fn new(config: CharacterConfig, physics: PhysicsSettings) -> Result<Self, ControllerError> {
        config.validate()?;

        Ok(Self {
            config,
            physics,
            state: CharacterState::new(&config),
        })
    }

    pub fn config(&self) -> &CharacterConfig {
        &self.config
    }

    pub fn state(&self) -> &CharacterState {
        &self.state
    }

    /// Node вошёл в сцену: берём текущие углы из сцены и захватываем мышь
    pub fn ready(&mut self, yaw: f32, camera_pitch: f32, pointer: &mut impl PointerCapture) {
        self.state.yaw = yaw;
        self.state.camera_pitch = camera_pitch.clamp(super::look::PITCH_MIN, super::look::PITCH_MAX);
        pointer.capture_pointer();

        logger::log(&format!(
            "CharacterController ready (sensitivity: {}, gravity: {})",
            self.config.sensitivity, self.physics.gravity
        ));
    }

    /// Один physics tick
    pub fn physics_tick(
        &mut self,
        delta: f32,
        body: &mut impl CharacterBody,
        input: &impl InputSource,
        space: &impl SpaceQuery,
        animations: &mut impl AnimationPlayback,
    ) {
        let step = VelocityStep {
            grounded: body.is_on_floor(),
            jump_just_pressed: input.is_action_just_pressed(InputAction::Jump),
            move_vector: input.move_vector(),
            basis: body.basis(),
            gravity: self.physics.gravity,
            jump_velocity: self.config.jump_velocity,
            feet_speed: self.state.current_feet_speed,
            delta,
        };

        self.state.velocity = step_velocity(body.velocity(), &step);
        body.set_velocity(self.state.velocity);
        body.move_and_slide();
        // move_and_slide мог срезать velocity о стену/пол
        self.state.velocity = body.velocity();

        self.handle_crouch(body, input, space, animations);
        self.handle_flashlight(input, animations);
    }

    /// Input event вне physics tick
    pub fn handle_input(
        &mut self,
        event: &InputEventKind,
        body: &mut impl CharacterBody,
        camera: &mut impl CameraRig,
    ) {
        let InputEventKind::MouseMotion { relative } = event else {
            return;
        };

        apply_mouse_look(&mut self.state, *relative, &self.config);
        body.set_yaw(self.state.yaw);
        camera.set_pitch(self.state.camera_pitch);
    }

    fn handle_crouch(
        &mut self,
        body: &impl CharacterBody,
        input: &impl InputSource,
        space: &impl SpaceQuery,
        animations: &mut impl AnimationPlayback,
    ) {
        let held = input.is_action_pressed(InputAction::Crouch);
        let config = self.config;

        let outcome = update_crouch(&mut self.state, held, &config, || {
            let query = clearance_query(body.position(), &config);
            space.intersect_ray(&query)
        });

        match outcome {
            CrouchOutcome::Crouched => logger::log("Character crouched"),
            CrouchOutcome::StoodUp => logger::log("Character stood up"),
            CrouchOutcome::Blocked { hit } => {
                logger::log(&format!("Stand blocked by obstruction at y={:.2}", hit.position.y))
            }
            CrouchOutcome::StillBlocked | CrouchOutcome::Unchanged => {}
        }

        if let Some(clip) = outcome.clip() {
            animations.play(clip);
        }
    }

    fn handle_flashlight(&mut self, input: &impl InputSource, animations: &mut impl AnimationPlayback) {
        let just_pressed = input.is_action_just_pressed(InputAction::Flashlight);

        if let Some(clip) = update_flashlight(&mut self.state, just_pressed) {
            animations.play(clip);
            logger::log(&format!("Flashlight shown: {}", self.state.is_flashlight_shown));
        }
    }
}

/// Ray от позиции тела вверх на `clearance_distance`, без своего коллайдера
pub fn clearance_query(position: Vec3, config: &CharacterConfig) -> RayQuery {
    RayQuery {
        from: position,
        to: position + Vec3::Y * config.clearance_distance,
        collision_mask: config.clearance_mask,
        exclude_self: true,
    }
}
