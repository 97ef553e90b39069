//! Animation clips контроллера
//!
//! AnimationPlayer в сцене содержит ровно эти клипы. Контроллер только
//! запускает клип, completion callback не нужен.

use bevy::prelude::{Entity, Event};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AnimationClip {
    Crouch,
    UnCrouch,
    ShowFlashlight,
    HideFlashlight,
}

impl AnimationClip {
    /// Имя клипа в AnimationPlayer library
    pub fn clip_name(self) -> &'static str {
        match self {
            AnimationClip::Crouch => "Crouch",
            AnimationClip::UnCrouch => "UnCrouch",
            AnimationClip::ShowFlashlight => "ShowFlashlight",
            AnimationClip::HideFlashlight => "HideFlashlight",
        }
    }
}

/// ECS event: entity просит проиграть клип (headless режим пишет только event)
#[derive(Event, Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationRequested {
    pub entity: Entity,
    pub clip: AnimationClip,
}
