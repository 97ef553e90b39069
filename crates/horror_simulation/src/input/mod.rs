//! Player input module
//!
//! # Компоненты модуля
//!
//! - `actions` - закрытый набор InputAction (имена Godot input map)
//! - `action_state` - ActionState (pressed/just_pressed + move vector)
//! - `events` - MouseLookEvent

pub mod action_state;
pub mod actions;
pub mod events;

pub use action_state::{compose_move_vector, ActionState, ACTION_DEADZONE};
pub use actions::InputAction;
pub use events::{InputEventKind, MouseLookEvent};
