//! Headless прогон контроллера
//!
//! Scripted сессия без Godot: идём вперёд, прыгаем, приседаем,
//! включаем фонарик, крутим мышью. Печатает состояние по ходу.

use bevy::prelude::*;
use horror_simulation::{
    create_headless_app, log_error, log_info, run_fixed_tick, spawn_character, ActionState, AnimationRequested,
    CharacterConfig, CharacterState, InputAction, MouseLookEvent,
};

const SESSION_TICKS: u32 = 240;

fn main() {
    let mut app = create_headless_app();

    let spawned = {
        let world = app.world_mut();
        let spawned = {
            let mut commands = world.commands();
            spawn_character(&mut commands, Vec3::ZERO, CharacterConfig::default())
        };
        world.flush();
        spawned
    };

    let player = match spawned {
        Ok(entity) => entity,
        Err(error) => {
            log_error(&format!("Failed to spawn character: {}", error));
            return;
        }
    };

    log_info(&format!("Starting headless session ({} ticks)", SESSION_TICKS));

    for tick in 0..SESSION_TICKS {
        script_input(&mut app, player, tick);

        if tick == 30 {
            app.world_mut().send_event(MouseLookEvent {
                entity: player,
                relative: Vec2::new(250.0, -100.0),
            });
            app.world_mut().run_schedule(Update);
        }

        run_fixed_tick(&mut app);

        for event in app
            .world_mut()
            .resource_mut::<Events<AnimationRequested>>()
            .drain()
        {
            log_info(&format!("Tick {}: play {}", tick, event.clip.clip_name()));
        }

        if tick % 60 == 0 {
            report(&mut app, player, tick);
        }
    }

    report(&mut app, player, SESSION_TICKS);
    log_info("Session complete!");
}

/// Сценарий input по тикам
fn script_input(app: &mut App, player: Entity, tick: u32) {
    let Some(mut actions) = app.world_mut().get_mut::<ActionState>(player) else {
        return;
    };

    actions.release_all();

    if tick < 120 {
        actions.press(InputAction::MoveForward);
    }
    if tick == 20 {
        actions.press(InputAction::Jump);
    }
    if (90..150).contains(&tick) {
        actions.press(InputAction::Crouch);
    }
    if tick == 100 || tick == 200 {
        actions.press(InputAction::Flashlight);
    }
}

fn report(app: &mut App, player: Entity, tick: u32) {
    let world = app.world();
    let (Some(state), Some(transform)) = (world.get::<CharacterState>(player), world.get::<Transform>(player)) else {
        return;
    };

    log_info(&format!(
        "Tick {}: pos {:.2?}, vel {:.2?}, yaw {:.2}, pitch {:.2}, crouched {}, flashlight {}",
        tick,
        transform.translation,
        state.velocity,
        state.yaw,
        state.camera_pitch,
        state.is_crouched(),
        state.is_flashlight_shown,
    ));
}
