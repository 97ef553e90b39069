//! Godot реализации collaborator traits
//!
//! Каждый adapter держит клон `Gd<T>` (ref-counted handle), поэтому
//! `Character` может отдать их контроллеру не одалживая `self`.

use bevy::prelude::{Mat3, Vec2, Vec3};
use godot::classes::input::MouseMode;
use godot::classes::{AnimationPlayer, Camera3D, CharacterBody3D, Input, PhysicsRayQueryParameters3D};
use godot::prelude::*;
use horror_simulation::character::{
    AnimationPlayback, CameraRig, CharacterBody, InputSource, PointerCapture, RayHit, RayQuery, SpaceQuery,
};
use horror_simulation::{AnimationClip, InputAction};

use crate::convert::{to_mat3, to_vec2, to_vec3, to_vector3};

pub struct GodotBody {
    body: Gd<CharacterBody3D>,
}

impl GodotBody {
    pub fn new(body: Gd<CharacterBody3D>) -> Self {
        Self { body }
    }
}

impl CharacterBody for GodotBody {
    fn is_on_floor(&self) -> bool {
        self.body.is_on_floor()
    }

    fn velocity(&self) -> Vec3 {
        to_vec3(self.body.get_velocity())
    }

    fn set_velocity(&mut self, velocity: Vec3) {
        self.body.set_velocity(to_vector3(velocity));
    }

    fn basis(&self) -> Mat3 {
        to_mat3(self.body.get_transform().basis)
    }

    fn position(&self) -> Vec3 {
        to_vec3(self.body.get_position())
    }

    fn move_and_slide(&mut self) {
        self.body.move_and_slide();
    }

    fn set_yaw(&mut self, yaw: f32) {
        let mut rotation = self.body.get_rotation();
        rotation.y = yaw;
        self.body.set_rotation(rotation);
    }
}

/// Direct space state мира, в котором живёт body
pub struct GodotSpace {
    body: Gd<CharacterBody3D>,
}

impl GodotSpace {
    pub fn new(body: Gd<CharacterBody3D>) -> Self {
        Self { body }
    }
}

impl SpaceQuery for GodotSpace {
    fn intersect_ray(&self, query: &RayQuery) -> Option<RayHit> {
        // Нет World3D / space state = body вне дерева, препятствий нет
        let mut space = self.body.get_world_3d()?.get_direct_space_state()?;

        let mut params = PhysicsRayQueryParameters3D::new_gd();
        params.set_from(to_vector3(query.from));
        params.set_to(to_vector3(query.to));
        params.set_collision_mask(query.collision_mask);

        if query.exclude_self {
            let mut exclude = Array::<Rid>::new();
            exclude.push(self.body.get_rid());
            params.set_exclude(&exclude);
        }

        let result = space.intersect_ray(&params);
        if result.is_empty() {
            return None;
        }

        let position = result
            .get("position")
            .and_then(|value| value.try_to::<Vector3>().ok())
            .map(to_vec3)
            .unwrap_or(query.to);

        Some(RayHit { position })
    }
}

/// `Input` singleton (input map actions + mouse mode)
pub struct GodotInput {
    input: Gd<Input>,
}

impl GodotInput {
    pub fn singleton() -> Self {
        Self {
            input: Input::singleton(),
        }
    }
}

impl InputSource for GodotInput {
    fn is_action_pressed(&self, action: InputAction) -> bool {
        self.input.is_action_pressed(action.action_name())
    }

    fn is_action_just_pressed(&self, action: InputAction) -> bool {
        self.input.is_action_just_pressed(action.action_name())
    }

    fn move_vector(&self) -> Vec2 {
        to_vec2(self.input.get_vector(
            InputAction::MoveLeft.action_name(),
            InputAction::MoveRight.action_name(),
            InputAction::MoveForward.action_name(),
            InputAction::MoveBackwards.action_name(),
        ))
    }
}

impl PointerCapture for GodotInput {
    fn capture_pointer(&mut self) {
        self.input.set_mouse_mode(MouseMode::CAPTURED);
    }
}

pub struct GodotAnimations {
    player: Gd<AnimationPlayer>,
}

impl GodotAnimations {
    pub fn new(player: Gd<AnimationPlayer>) -> Self {
        Self { player }
    }
}

impl AnimationPlayback for GodotAnimations {
    fn play(&mut self, clip: AnimationClip) {
        self.player.play_ex().name(clip.clip_name()).done();
    }
}

pub struct GodotCamera {
    camera: Gd<Camera3D>,
}

impl GodotCamera {
    pub fn new(camera: Gd<Camera3D>) -> Self {
        Self { camera }
    }
}

impl CameraRig for GodotCamera {
    fn set_pitch(&mut self, pitch: f32) {
        let mut rotation = self.camera.get_rotation();
        rotation.x = pitch;
        self.camera.set_rotation(rotation);
    }
}
