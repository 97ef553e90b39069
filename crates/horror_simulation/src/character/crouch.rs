//! Crouch state machine
//!
//! ```text
//! Standing --(crouch held)--------------------------> Crouched  [Crouch]
//! Crouched --(released + clearance ray без hit)-----> Standing  [UnCrouch]
//! Crouched --(released + ray попал в потолок)-------> Crouched  (retry next tick)
//! ```
//!
//! Повторный held tick в Crouched ничего не делает (ни анимации, ни speed).

use super::animation::AnimationClip;
use super::collaborators::RayHit;
use super::config::CharacterConfig;
use super::state::{CharacterState, Stance};

/// Результат crouch sub-step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CrouchOutcome {
    /// Ничего не поменялось
    Unchanged,
    Crouched,
    StoodUp,
    /// Кнопку отпустили, сверху препятствие (первый такой tick)
    Blocked { hit: RayHit },
    /// Препятствие всё ещё над головой
    StillBlocked,
}

impl CrouchOutcome {
    pub fn clip(self) -> Option<AnimationClip> {
        match self {
            CrouchOutcome::Crouched => Some(AnimationClip::Crouch),
            CrouchOutcome::StoodUp => Some(AnimationClip::UnCrouch),
            CrouchOutcome::Unchanged | CrouchOutcome::Blocked { .. } | CrouchOutcome::StillBlocked => None,
        }
    }
}

/// Один crouch sub-step
///
/// `cast_clearance` вызывается ТОЛЬКО когда crouched и кнопка отпущена
/// (raycast не бесплатный). `None` = над головой пусто.
pub fn update_crouch(
    state: &mut CharacterState,
    crouch_held: bool,
    config: &CharacterConfig,
    cast_clearance: impl FnOnce() -> Option<RayHit>,
) -> CrouchOutcome {
    match (state.stance, crouch_held) {
        (Stance::Standing, true) => {
            state.stance = Stance::Crouched;
            state.current_feet_speed = config.crouch_speed;
            CrouchOutcome::Crouched
        }
        (Stance::Crouched, false) => {
            if let Some(hit) = cast_clearance() {
                let first = !state.stand_blocked;
                state.stand_blocked = true;
                return if first {
                    CrouchOutcome::Blocked { hit }
                } else {
                    CrouchOutcome::StillBlocked
                };
            }
            state.stance = Stance::Standing;
            state.current_feet_speed = config.speed;
            state.stand_blocked = false;
            CrouchOutcome::StoodUp
        }
        (Stance::Crouched, true) => {
            state.stand_blocked = false;
            CrouchOutcome::Unchanged
        }
        (Stance::Standing, false) => CrouchOutcome::Unchanged,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::prelude::Vec3;
    use std::cell::Cell;

    fn ceiling(y: f32) -> Option<RayHit> {
        Some(RayHit {
            position: Vec3::new(0.0, y, 0.0),
        })
    }

    #[test]
    fn test_held_crouch_sets_crouch_speed_same_step() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::new(&config);

        let outcome = update_crouch(&mut state, true, &config, || None);

        assert_eq!(outcome, CrouchOutcome::Crouched);
        assert!(state.is_crouched());
        assert_eq!(state.current_feet_speed, config.crouch_speed);
    }

    #[test]
    fn test_repeated_hold_is_idempotent() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::new(&config);
        update_crouch(&mut state, true, &config, || None);

        for _ in 0..5 {
            assert_eq!(update_crouch(&mut state, true, &config, || None), CrouchOutcome::Unchanged);
        }
        assert!(state.is_crouched());
    }

    #[test]
    fn test_blocked_until_clearance() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::new(&config);
        update_crouch(&mut state, true, &config, || None);

        assert_eq!(
            update_crouch(&mut state, false, &config, || ceiling(1.5)),
            CrouchOutcome::Blocked { hit: RayHit { position: Vec3::new(0.0, 1.5, 0.0) } }
        );
        assert!(state.is_crouched());
        assert_eq!(state.current_feet_speed, config.crouch_speed);

        assert_eq!(update_crouch(&mut state, false, &config, || None), CrouchOutcome::StoodUp);
        assert!(!state.is_crouched());
        assert!(!state.stand_blocked);
        assert_eq!(state.current_feet_speed, config.speed);
    }

    #[test]
    fn test_blocked_reported_once_per_release() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::new(&config);
        update_crouch(&mut state, true, &config, || None);

        assert!(matches!(
            update_crouch(&mut state, false, &config, || ceiling(1.2)),
            CrouchOutcome::Blocked { .. }
        ));
        for _ in 0..3 {
            assert_eq!(
                update_crouch(&mut state, false, &config, || ceiling(1.2)),
                CrouchOutcome::StillBlocked
            );
        }

        // Снова зажали и отпустили — новый эпизод, снова Blocked
        update_crouch(&mut state, true, &config, || None);
        assert!(matches!(
            update_crouch(&mut state, false, &config, || ceiling(1.2)),
            CrouchOutcome::Blocked { .. }
        ));
    }

    #[test]
    fn test_ray_cast_only_when_crouched_and_released() {
        let config = CharacterConfig::default();
        let mut state = CharacterState::new(&config);
        let casts = Cell::new(0);
        let cast = || {
            casts.set(casts.get() + 1);
            None
        };

        update_crouch(&mut state, false, &config, cast);
        update_crouch(&mut state, true, &config, cast);
        update_crouch(&mut state, true, &config, cast);
        assert_eq!(casts.get(), 0);

        update_crouch(&mut state, false, &config, cast);
        assert_eq!(casts.get(), 1);
    }

    #[test]
    fn test_outcome_clips() {
        assert_eq!(CrouchOutcome::Crouched.clip(), Some(AnimationClip::Crouch));
        assert_eq!(CrouchOutcome::StoodUp.clip(), Some(AnimationClip::UnCrouch));
        assert_eq!(CrouchOutcome::StillBlocked.clip(), None);
    }
}
