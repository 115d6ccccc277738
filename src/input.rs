//! Keyboard to action mapping
//!
//! Browser `KeyboardEvent.code` values are mapped onto the three logical
//! actions the simulation understands. Several keys share an action;
//! releasing any of them clears it.

use crate::sim::InputState;

/// A logical player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Left,
    Right,
    Jump,
}

impl Action {
    /// Map a `KeyboardEvent.code` to an action
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" | "KeyA" => Some(Action::Left),
            "ArrowRight" | "KeyD" => Some(Action::Right),
            "ArrowUp" | "Space" | "KeyW" => Some(Action::Jump),
            _ => None,
        }
    }
}

impl InputState {
    /// Set or clear the flag for `action`
    pub fn set(&mut self, action: Action, held: bool) {
        match action {
            Action::Left => self.left = held,
            Action::Right => self.right = held,
            Action::Jump => self.jump = held,
        }
    }

    /// Apply a key-down event; returns true if the key is mapped
    pub fn key_down(&mut self, code: &str) -> bool {
        self.apply_key(code, true)
    }

    /// Apply a key-up event; returns true if the key is mapped
    pub fn key_up(&mut self, code: &str) -> bool {
        self.apply_key(code, false)
    }

    fn apply_key(&mut self, code: &str, held: bool) -> bool {
        match Action::from_code(code) {
            Some(action) => {
                self.set(action, held);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_codes() {
        assert_eq!(Action::from_code("ArrowLeft"), Some(Action::Left));
        assert_eq!(Action::from_code("KeyA"), Some(Action::Left));
        assert_eq!(Action::from_code("ArrowRight"), Some(Action::Right));
        assert_eq!(Action::from_code("KeyD"), Some(Action::Right));
        assert_eq!(Action::from_code("ArrowUp"), Some(Action::Jump));
        assert_eq!(Action::from_code("Space"), Some(Action::Jump));
        assert_eq!(Action::from_code("KeyW"), Some(Action::Jump));
        assert_eq!(Action::from_code("KeyS"), None);
        assert_eq!(Action::from_code("keya"), None);
    }

    #[test]
    fn test_down_then_up() {
        let mut input = InputState::default();
        assert!(input.key_down("KeyD"));
        assert!(input.right);
        assert!(input.key_up("KeyD"));
        assert!(!input.right);
    }

    #[test]
    fn test_shared_action_keys_coalesce() {
        let mut input = InputState::default();
        input.key_down("ArrowLeft");
        input.key_down("KeyA");
        assert!(input.left);

        // Releasing either key clears the action
        input.key_up("KeyA");
        assert!(!input.left);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let mut input = InputState::default();
        assert!(!input.key_down("Escape"));
        assert_eq!(input, InputState::default());
    }

    #[test]
    fn test_actions_independent() {
        let mut input = InputState::default();
        input.key_down("ArrowLeft");
        input.key_down("Space");
        input.key_down("ArrowRight");
        assert_eq!(
            input,
            InputState {
                left: true,
                right: true,
                jump: true
            }
        );
        input.key_up("ArrowUp");
        assert!(!input.jump);
        assert!(input.left && input.right);
    }
}
