//! HorrorGame Simulation Core
//!
//! First-person character controller без привязки к движку.
//!
//! HYBRID ARCHITECTURE:
//! - Simulation = правила (velocity step, crouch FSM, flashlight, mouse look)
//! - Godot = physics, animation, input map (через collaborator traits)
//!
//! Тот же код крутится headless в Bevy ECS (`CharacterPlugin`) для тестов
//! и scripted прогонов.

use bevy::prelude::*;

pub mod character;
pub mod error;
pub mod input;
pub mod logger;

pub use character::{
    spawn_character, AnimationClip, AnimationRequested, CharacterConfig, CharacterController, CharacterPlugin,
    CharacterState, PhysicsSettings, Stance,
};
pub use error::ControllerError;
pub use input::{ActionState, InputAction, InputEventKind, MouseLookEvent};
pub use logger::{
    init_logger, log, log_error, log_info, log_warning, set_log_level, set_logger, LogLevel, LogPrinter,
};

/// Physics tick rate (Godot `physics/common/physics_ticks_per_second`)
pub const PHYSICS_TICKS_PER_SECOND: f64 = 60.0;

/// Главный plugin симуляции
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(PHYSICS_TICKS_PER_SECOND))
            .add_plugins(CharacterPlugin);
    }
}

/// Создаёт minimal Bevy App для headless симуляции
pub fn create_headless_app() -> App {
    let mut app = App::new();
    init_logger();
    app.add_plugins(MinimalPlugins).add_plugins(SimulationPlugin);

    app
}

/// Прогоняет ровно один physics tick (без привязки к wall clock)
///
/// Детерминированный шаг для тестов и scripted прогонов: `Time<Fixed>`
/// сдвигается на один timestep и FixedUpdate выполняется один раз.
pub fn run_fixed_tick(app: &mut App) {
    let world = app.world_mut();
    let timestep = world.resource::<Time<Fixed>>().timestep();
    world.resource_mut::<Time<Fixed>>().advance_by(timestep);
    world.run_schedule(FixedUpdate);
}

/// Snapshot компонентов для сравнения детерминизма
pub fn world_snapshot<T: Component>(world: &mut World) -> Vec<u8>
where
    T: std::fmt::Debug,
{
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();

    // Сортируем по Entity ID для детерминизма
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}
