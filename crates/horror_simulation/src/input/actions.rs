//! Closed set of input actions
//!
//! Имена совпадают с Godot input map (project.godot), поэтому опечатка в
//! строке ловится компилятором, а не молчаливым `false` в рантайме.

/// Input action персонажа
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    MoveLeft,
    MoveRight,
    MoveForward,
    MoveBackwards,
    /// Прыжок — встроенный Godot action `ui_accept`
    Jump,
    /// Зарезервирован в input map, контроллер его не читает
    Interact,
    Flashlight,
    Crouch,
}

impl InputAction {
    pub const COUNT: usize = 8;

    pub const ALL: [InputAction; Self::COUNT] = [
        InputAction::MoveLeft,
        InputAction::MoveRight,
        InputAction::MoveForward,
        InputAction::MoveBackwards,
        InputAction::Jump,
        InputAction::Interact,
        InputAction::Flashlight,
        InputAction::Crouch,
    ];

    /// Имя action в Godot input map
    pub fn action_name(self) -> &'static str {
        match self {
            InputAction::MoveLeft => "MoveLeft",
            InputAction::MoveRight => "MoveRight",
            InputAction::MoveForward => "MoveForward",
            InputAction::MoveBackwards => "MoveBackwards",
            InputAction::Jump => "ui_accept",
            InputAction::Interact => "Interact",
            InputAction::Flashlight => "Flashlight",
            InputAction::Crouch => "Crouch",
        }
    }

    pub(crate) fn index(self) -> usize {
        self as usize
    }
}
