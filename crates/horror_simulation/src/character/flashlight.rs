//! Flashlight toggle (edge-triggered)

use super::animation::AnimationClip;
use super::state::CharacterState;

/// Just pressed → клип по текущему состоянию, затем flip флага
pub fn update_flashlight(state: &mut CharacterState, just_pressed: bool) -> Option<AnimationClip> {
    if !just_pressed {
        return None;
    }

    let clip = if state.is_flashlight_shown {
        AnimationClip::HideFlashlight
    } else {
        AnimationClip::ShowFlashlight
    };
    state.is_flashlight_shown = !state.is_flashlight_shown;

    Some(clip)
}
