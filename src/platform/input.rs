//! Keyboard boundary: raw key edges in, polled logical input out
//!
//! Host event listeners push key-down/key-up edges into
//! [`KeyboardState`]; the simulation driver polls it once per step.
//! Polling keeps step results independent of the order asynchronous
//! events arrived within a frame.

use crate::sim::TickInput;

/// Directional intent snapshot, as returned by [`InputSource::poll`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Held {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Polled input capability, consumed once per simulation step
pub trait InputSource {
    /// Directions currently held. Non-blocking, no side effects.
    fn poll(&self) -> Held;

    /// True at most once per discrete activate press edge; holding the
    /// key does not retrigger.
    fn consume_activate(&mut self) -> bool;
}

/// Physical key codes the game understands (DOM `code` naming)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCode {
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Enter,
}

/// Logical buttons; several physical keys map onto each
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    Activate,
}

impl KeyCode {
    /// Map a host key code string to a key the game understands
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "ArrowUp" => Some(KeyCode::ArrowUp),
            "ArrowDown" => Some(KeyCode::ArrowDown),
            "ArrowLeft" => Some(KeyCode::ArrowLeft),
            "ArrowRight" => Some(KeyCode::ArrowRight),
            "KeyW" => Some(KeyCode::KeyW),
            "KeyA" => Some(KeyCode::KeyA),
            "KeyS" => Some(KeyCode::KeyS),
            "KeyD" => Some(KeyCode::KeyD),
            "Space" => Some(KeyCode::Space),
            "Enter" => Some(KeyCode::Enter),
            _ => None,
        }
    }

    /// The logical button this key drives
    pub fn button(self) -> Button {
        match self {
            KeyCode::ArrowUp | KeyCode::KeyW => Button::Up,
            KeyCode::ArrowDown | KeyCode::KeyS => Button::Down,
            KeyCode::ArrowLeft | KeyCode::KeyA => Button::Left,
            KeyCode::ArrowRight | KeyCode::KeyD => Button::Right,
            KeyCode::Space | KeyCode::Enter => Button::Activate,
        }
    }
}

/// Mirror of the host's key state plus the pending activate edge
#[derive(Debug, Default)]
pub struct KeyboardState {
    // A handful of keys at most; linear scans are fine
    down: Vec<KeyCode>,
    pending_activate: bool,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key-down edge. Host auto-repeat delivers key-down for a
    /// key that is already held; those neither change direction state
    /// nor re-arm the activate edge.
    pub fn key_down(&mut self, code: KeyCode) {
        if self.down.contains(&code) {
            return;
        }
        self.down.push(code);
        if code.button() == Button::Activate {
            self.pending_activate = true;
        }
    }

    /// Record a key-up edge
    pub fn key_up(&mut self, code: KeyCode) {
        self.down.retain(|&c| c != code);
    }

    /// A pointer click arms the same activate edge as the restart keys
    pub fn click(&mut self) {
        self.pending_activate = true;
    }

    fn button_held(&self, button: Button) -> bool {
        self.down.iter().any(|c| c.button() == button)
    }
}

impl InputSource for KeyboardState {
    fn poll(&self) -> Held {
        Held {
            up: self.button_held(Button::Up),
            down: self.button_held(Button::Down),
            left: self.button_held(Button::Left),
            right: self.button_held(Button::Right),
        }
    }

    fn consume_activate(&mut self) -> bool {
        std::mem::take(&mut self.pending_activate)
    }
}

/// Assemble the per-step input record from any input source
pub fn tick_input(source: &mut impl InputSource) -> TickInput {
    let held = source.poll();
    TickInput {
        up: held.up,
        down: held.down,
        left: held.left,
        right: held.right,
        activate: source.consume_activate(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_maps_known_codes() {
        assert_eq!(KeyCode::parse("ArrowUp"), Some(KeyCode::ArrowUp));
        assert_eq!(KeyCode::parse("KeyW"), Some(KeyCode::KeyW));
        assert_eq!(KeyCode::parse("Space"), Some(KeyCode::Space));
        assert_eq!(KeyCode::parse("F13"), None);
    }

    #[test]
    fn test_two_keys_one_direction() {
        let mut kb = KeyboardState::new();
        kb.key_down(KeyCode::ArrowUp);
        kb.key_down(KeyCode::KeyW);
        assert!(kb.poll().up);

        // Releasing one of the two keeps the direction held
        kb.key_up(KeyCode::ArrowUp);
        assert!(kb.poll().up);
        kb.key_up(KeyCode::KeyW);
        assert!(!kb.poll().up);
    }

    #[test]
    fn test_poll_reflects_held_directions() {
        let mut kb = KeyboardState::new();
        kb.key_down(KeyCode::KeyA);
        kb.key_down(KeyCode::ArrowDown);
        assert_eq!(
            kb.poll(),
            Held {
                down: true,
                left: true,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_activate_edge_consumed_once() {
        let mut kb = KeyboardState::new();
        kb.key_down(KeyCode::Space);
        assert!(kb.consume_activate());
        assert!(!kb.consume_activate());
    }

    #[test]
    fn test_auto_repeat_does_not_rearm() {
        let mut kb = KeyboardState::new();
        kb.key_down(KeyCode::Enter);
        assert!(kb.consume_activate());

        // Host auto-repeat while the key is held
        kb.key_down(KeyCode::Enter);
        assert!(!kb.consume_activate());

        // A real release and press re-arms
        kb.key_up(KeyCode::Enter);
        kb.key_down(KeyCode::Enter);
        assert!(kb.consume_activate());
    }

    #[test]
    fn test_click_arms_activate() {
        let mut kb = KeyboardState::new();
        kb.click();
        assert!(kb.consume_activate());
        assert!(!kb.consume_activate());
    }

    #[test]
    fn test_tick_input_snapshot() {
        let mut kb = KeyboardState::new();
        kb.key_down(KeyCode::ArrowRight);
        kb.key_down(KeyCode::Space);

        let input = tick_input(&mut kb);
        assert!(input.right && input.activate);
        assert!(!input.left && !input.up && !input.down);

        // Next step: direction still held, edge already consumed
        let input = tick_input(&mut kb);
        assert!(input.right && !input.activate);
    }
}
