//! Character — GDExtension класс first-person персонажа
//!
//! Архитектура:
//! - Godot node (`CharacterBody3D`), дети: `Camera3D`, `AnimationPlayer`
//! - Вся логика в `horror_simulation::CharacterController`
//! - Здесь только adapters: Godot API → collaborator traits
//!
//! Flow:
//! 1. ready() — находим детей, строим controller, захватываем мышь
//! 2. physics_process() — controller.physics_tick(...)
//! 3. input() — mouse motion → controller.handle_input(...)

use godot::classes::{
    AnimationPlayer, Camera3D, CharacterBody3D, ICharacterBody3D, InputEvent, InputEventMouseMotion,
    ProjectSettings,
};
use godot::prelude::*;
use horror_simulation::character::config::DEFAULT_GRAVITY;
use horror_simulation::{
    CharacterConfig, CharacterController, ControllerError, InputEventKind, LogLevel, PhysicsSettings,
};

use crate::adapters::{GodotAnimations, GodotBody, GodotCamera, GodotInput, GodotSpace};
use crate::convert::to_vec2;
use crate::logger::GodotLogger;

const CAMERA_PATH: &str = "Camera3D";
const ANIMATION_PLAYER_PATH: &str = "AnimationPlayer";
const GRAVITY_SETTING: &str = "physics/3d/default_gravity";

#[derive(GodotClass)]
#[class(base=CharacterBody3D)]
pub struct Character {
    /// Mouse sensitivity (1000 px relative motion = sensitivity радиан)
    #[export]
    sensitivity: i32,

    /// Читается один раз в init (синхронно с RigidBody нодами)
    gravity: f32,

    controller: Option<CharacterController>,
    camera: Option<Gd<Camera3D>>,
    animation_player: Option<Gd<AnimationPlayer>>,

    base: Base<CharacterBody3D>,
}

#[godot_api]
impl ICharacterBody3D for Character {
    fn init(base: Base<CharacterBody3D>) -> Self {
        Self {
            sensitivity: CharacterConfig::default().sensitivity,
            gravity: project_gravity(),
            controller: None,
            camera: None,
            animation_player: None,
            base,
        }
    }

    fn ready(&mut self) {
        GodotLogger::clear_log_file();
        horror_simulation::logger::set_logger_if_needed(Box::new(GodotLogger));
        horror_simulation::set_log_level(LogLevel::Debug);

        let mut controller = match self.build_controller() {
            Ok(controller) => controller,
            Err(e) => {
                horror_simulation::log_error(&format!("Character disabled: {}", e));
                return;
            }
        };

        let yaw = self.base().get_rotation().y;
        let pitch = self
            .camera
            .as_ref()
            .map(|camera| camera.get_rotation().x)
            .unwrap_or_default();

        controller.ready(yaw, pitch, &mut GodotInput::singleton());
        self.controller = Some(controller);
    }

    fn physics_process(&mut self, delta: f64) {
        let Some(animation_player) = self.animation_player.clone() else {
            return;
        };

        let body = self.base().clone();
        let mut body_adapter = GodotBody::new(body.clone());
        let space = GodotSpace::new(body);
        let input = GodotInput::singleton();
        let mut animations = GodotAnimations::new(animation_player);

        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        controller.physics_tick(delta as f32, &mut body_adapter, &input, &space, &mut animations);
    }

    fn input(&mut self, event: Gd<InputEvent>) {
        let Ok(motion) = event.try_cast::<InputEventMouseMotion>() else {
            return;
        };
        let Some(camera) = self.camera.clone() else {
            return;
        };

        let kind = InputEventKind::MouseMotion {
            relative: to_vec2(motion.get_relative()),
        };

        let mut body = GodotBody::new(self.base().clone());
        let mut camera = GodotCamera::new(camera);

        let Some(controller) = self.controller.as_mut() else {
            return;
        };

        controller.handle_input(&kind, &mut body, &mut camera);
    }
}

#[godot_api]
impl Character {
    /// Для HUD/скриптов сцены
    #[func]
    fn is_crouched(&self) -> bool {
        self.controller
            .as_ref()
            .is_some_and(|controller| controller.state().is_crouched())
    }

    #[func]
    fn is_flashlight_shown(&self) -> bool {
        self.controller
            .as_ref()
            .is_some_and(|controller| controller.state().is_flashlight_shown)
    }

    #[func]
    fn current_feet_speed(&self) -> f32 {
        self.controller
            .as_ref()
            .map(|controller| controller.state().current_feet_speed)
            .unwrap_or(CharacterConfig::default().speed)
    }
}

impl Character {
    /// Находит детей сцены и собирает controller
    fn build_controller(&mut self) -> Result<CharacterController, ControllerError> {
        let camera = self
            .base()
            .try_get_node_as::<Camera3D>(CAMERA_PATH)
            .ok_or_else(|| ControllerError::MissingNode(CAMERA_PATH.to_string()))?;

        let animation_player = self
            .base()
            .try_get_node_as::<AnimationPlayer>(ANIMATION_PLAYER_PATH)
            .ok_or_else(|| ControllerError::MissingNode(ANIMATION_PLAYER_PATH.to_string()))?;

        let config = CharacterConfig::with_sensitivity(self.sensitivity);
        let controller = CharacterController::new(config, PhysicsSettings { gravity: self.gravity })?;

        self.camera = Some(camera);
        self.animation_player = Some(animation_player);

        Ok(controller)
    }
}

/// `physics/3d/default_gravity` из ProjectSettings
fn project_gravity() -> f32 {
    ProjectSettings::singleton()
        .get_setting(GRAVITY_SETTING)
        .try_to::<f64>()
        .map(|gravity| gravity as f32)
        .unwrap_or(DEFAULT_GRAVITY)
}
