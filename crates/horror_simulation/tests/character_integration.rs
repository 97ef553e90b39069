//! Integration тесты headless контроллера (CharacterPlugin)
//!
//! Шагаем FixedUpdate вручную через `run_fixed_tick` — wall clock не участвует.
//! Rapier тесты дополнительно крутят `app.update()`, чтобы physics мир
//! подхватил/удалил коллайдеры.

use bevy::prelude::*;
use bevy_rapier3d::prelude::{Collider, NoUserData, RapierPhysicsPlugin, RigidBody};
use horror_simulation::character::Grounded;
use horror_simulation::{
    run_fixed_tick, spawn_character, ActionState, AnimationClip, AnimationRequested, CharacterConfig,
    CharacterState, ControllerError, InputAction, MouseLookEvent, SimulationPlugin,
};

const DELTA: f32 = 1.0 / 60.0;

fn setup() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(SimulationPlugin);

    let world = app.world_mut();
    let entity = {
        let mut commands = world.commands();
        spawn_character(&mut commands, Vec3::ZERO, CharacterConfig::default())
            .expect("default config is valid")
    };
    world.flush();

    // Первый tick: приземляемся (Grounded стартует false)
    run_fixed_tick(&mut app);

    (app, entity)
}

/// App с настоящим Rapier миром (для clearance ray)
fn setup_with_rapier() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        TransformPlugin,
        RapierPhysicsPlugin::<NoUserData>::default(),
        SimulationPlugin,
    ));

    // Startup: Rapier создаёт default context
    app.update();

    let world = app.world_mut();
    let entity = {
        let mut commands = world.commands();
        spawn_character(&mut commands, Vec3::ZERO, CharacterConfig::default())
            .expect("default config is valid")
    };
    world.flush();

    // Rapier регистрирует capsule персонажа
    app.update();
    app.update();
    run_fixed_tick(&mut app);

    (app, entity)
}

fn spawn_ceiling(app: &mut App, height: f32) -> Entity {
    let ceiling = app
        .world_mut()
        .spawn((
            RigidBody::Fixed,
            Collider::cuboid(5.0, 0.1, 5.0),
            Transform::from_xyz(0.0, height, 0.0),
        ))
        .id();

    app.update();
    app.update();
    ceiling
}

fn actions(app: &mut App, entity: Entity) -> Mut<'_, ActionState> {
    app.world_mut()
        .get_mut::<ActionState>(entity)
        .expect("character has ActionState")
}

fn state(app: &App, entity: Entity) -> CharacterState {
    *app.world()
        .get::<CharacterState>(entity)
        .expect("character has CharacterState")
}

fn drain_clips(app: &mut App) -> Vec<AnimationClip> {
    app.world_mut()
        .resource_mut::<Events<AnimationRequested>>()
        .drain()
        .map(|event| event.clip)
        .collect()
}

#[test]
fn test_spawned_character_lands_on_floor() {
    let (app, entity) = setup();

    assert_eq!(app.world().get::<Grounded>(entity), Some(&Grounded(true)));
    assert_eq!(state(&app, entity).velocity, Vec3::ZERO);
    assert_eq!(app.world().get::<Transform>(entity).map(|t| t.translation.y), Some(0.0));
}

#[test]
fn test_walk_forward_moves_along_negative_z() {
    let (mut app, entity) = setup();
    actions(&mut app, entity).press(InputAction::MoveForward);

    run_fixed_tick(&mut app);

    let velocity = state(&app, entity).velocity;
    assert!((velocity.z + 5.0).abs() < 1e-5);

    let z = app.world().get::<Transform>(entity).map(|t| t.translation.z).unwrap_or_default();
    assert!((z + 5.0 * DELTA).abs() < 1e-5);
}

#[test]
fn test_release_decelerates_to_exact_zero() {
    let (mut app, entity) = setup();
    actions(&mut app, entity).press(InputAction::MoveRight);
    run_fixed_tick(&mut app);
    actions(&mut app, entity).release_all();

    let mut previous = state(&app, entity).horizontal_speed();
    for _ in 0..120 {
        run_fixed_tick(&mut app);
        let current = state(&app, entity);
        assert!(current.velocity.x >= 0.0);
        assert!(current.horizontal_speed() <= previous);
        previous = current.horizontal_speed();
    }

    assert_eq!(state(&app, entity).velocity.x, 0.0);
}

#[test]
fn test_jump_then_fall_by_gravity() {
    let (mut app, entity) = setup();
    actions(&mut app, entity).press(InputAction::Jump);

    run_fixed_tick(&mut app);
    assert_eq!(state(&app, entity).velocity.y, 4.5);
    assert_eq!(app.world().get::<Grounded>(entity), Some(&Grounded(false)));

    // Удержание не прыгает повторно, гравитация тянет вниз
    let before = state(&app, entity).velocity.y;
    run_fixed_tick(&mut app);
    let after = state(&app, entity).velocity.y;
    assert!((before - after - 9.8 * DELTA).abs() < 1e-5);
}

#[test]
fn test_crouch_and_stand_emit_animations() {
    let (mut app, entity) = setup();
    drain_clips(&mut app);

    actions(&mut app, entity).press(InputAction::Crouch);
    run_fixed_tick(&mut app);
    run_fixed_tick(&mut app);

    assert!(state(&app, entity).is_crouched());
    assert_eq!(state(&app, entity).current_feet_speed, 2.0);
    assert_eq!(drain_clips(&mut app), vec![AnimationClip::Crouch]);

    // Без Rapier мира потолка нет — встаём сразу
    actions(&mut app, entity).release(InputAction::Crouch);
    run_fixed_tick(&mut app);

    assert!(!state(&app, entity).is_crouched());
    assert_eq!(state(&app, entity).current_feet_speed, 5.0);
    assert_eq!(drain_clips(&mut app), vec![AnimationClip::UnCrouch]);
}

#[test]
fn test_invalid_config_spawns_nothing() {
    let mut app = App::new();
    app.add_plugins(SimulationPlugin);

    let config = CharacterConfig {
        look_scale: 0.0,
        ..Default::default()
    };

    let world = app.world_mut();
    let result = {
        let mut commands = world.commands();
        spawn_character(&mut commands, Vec3::ZERO, config)
    };
    world.flush();

    assert!(matches!(result, Err(ControllerError::InvalidConfig(_))));

    let world = app.world_mut();
    assert_eq!(world.query::<&CharacterState>().iter(world).count(), 0);
}

#[test]
fn test_stays_crouched_under_rapier_ceiling() {
    let (mut app, entity) = setup_with_rapier();
    let ceiling = spawn_ceiling(&mut app, 1.5);

    actions(&mut app, entity).press(InputAction::Crouch);
    run_fixed_tick(&mut app);
    assert!(state(&app, entity).is_crouched());
    drain_clips(&mut app);

    actions(&mut app, entity).release(InputAction::Crouch);
    for _ in 0..5 {
        run_fixed_tick(&mut app);

        let current = state(&app, entity);
        assert!(current.is_crouched());
        assert!(current.stand_blocked);
        assert_eq!(current.current_feet_speed, 2.0);
    }
    assert!(!drain_clips(&mut app).contains(&AnimationClip::UnCrouch));

    // Потолок убрали — встаём на первом же tick
    app.world_mut().despawn(ceiling);
    app.update();
    app.update();
    run_fixed_tick(&mut app);

    let current = state(&app, entity);
    assert!(!current.is_crouched());
    assert!(!current.stand_blocked);
    assert_eq!(current.current_feet_speed, 5.0);
    assert!(drain_clips(&mut app).contains(&AnimationClip::UnCrouch));
}

#[test]
fn test_stands_under_open_sky_ignoring_own_capsule() {
    let (mut app, entity) = setup_with_rapier();
    drain_clips(&mut app);

    actions(&mut app, entity).press(InputAction::Crouch);
    run_fixed_tick(&mut app);
    assert!(state(&app, entity).is_crouched());

    // Ray стартует внутри своей capsule: self-exclusion обязателен
    actions(&mut app, entity).release(InputAction::Crouch);
    run_fixed_tick(&mut app);

    let current = state(&app, entity);
    assert!(!current.is_crouched());
    assert_eq!(current.current_feet_speed, 5.0);
    assert_eq!(drain_clips(&mut app), vec![AnimationClip::Crouch, AnimationClip::UnCrouch]);
}

#[test]
fn test_flashlight_edge_triggered() {
    let (mut app, entity) = setup();
    drain_clips(&mut app);

    actions(&mut app, entity).press(InputAction::Flashlight);
    for _ in 0..30 {
        run_fixed_tick(&mut app);
    }
    assert!(state(&app, entity).is_flashlight_shown);
    assert_eq!(drain_clips(&mut app), vec![AnimationClip::ShowFlashlight]);

    actions(&mut app, entity).release(InputAction::Flashlight);
    run_fixed_tick(&mut app);
    actions(&mut app, entity).press(InputAction::Flashlight);
    run_fixed_tick(&mut app);

    assert!(!state(&app, entity).is_flashlight_shown);
    assert_eq!(drain_clips(&mut app), vec![AnimationClip::HideFlashlight]);
}

#[test]
fn test_mouse_look_rotates_body_and_movement() {
    let (mut app, entity) = setup();

    app.world_mut().send_event(MouseLookEvent {
        entity,
        relative: Vec2::new(500.0, 0.0),
    });
    app.world_mut().run_schedule(Update);

    assert!((state(&app, entity).yaw + 1.5).abs() < 1e-6);

    actions(&mut app, entity).press(InputAction::MoveForward);
    run_fixed_tick(&mut app);

    // forward = rotation(-1.5 рад вокруг Y) * (0, 0, -1)
    let expected = Quat::from_rotation_y(-1.5) * Vec3::new(0.0, 0.0, -5.0);
    let velocity = state(&app, entity).velocity;
    assert!((velocity.x - expected.x).abs() < 1e-4);
    assert!((velocity.z - expected.z).abs() < 1e-4);
}

#[test]
fn test_mouse_look_pitch_clamped() {
    let (mut app, entity) = setup();

    for _ in 0..10 {
        app.world_mut().send_event(MouseLookEvent {
            entity,
            relative: Vec2::new(0.0, 5_000.0),
        });
    }
    app.world_mut().run_schedule(Update);

    assert_eq!(state(&app, entity).camera_pitch, -std::f32::consts::FRAC_PI_2);
}
