//! Input events
//!
//! Mouse motion приходит отдельно от physics tick (Godot `_input`),
//! поэтому это event, а не поле `ActionState`.

use bevy::prelude::{Entity, Event, Vec2};

/// Relative mouse motion в captured mode
///
/// # Fields
/// - `relative`: пиксели с прошлого event (x вправо, y вниз)
#[derive(Event, Debug, Clone, Copy)]
pub struct MouseLookEvent {
    pub entity: Entity,
    pub relative: Vec2,
}

/// Input event, пришедший вне physics tick (Godot `_input`)
///
/// Контроллер реагирует только на `MouseMotion`, остальное пропускает.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEventKind {
    MouseMotion { relative: Vec2 },
    Other,
}
