//! Held-input state merged from keyboard and touch.
//!
//! The simulation polls this once per tick rather than reacting to
//! individual key events.

use serde::{Deserialize, Serialize};

use crate::enums::{Key, TouchButton};

/// Which inputs are currently held down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputState {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub a: bool,
    pub d: bool,
    pub w: bool,
    pub s: bool,
    pub space: bool,
    pub enter: bool,
    pub touch_left: bool,
    pub touch_right: bool,
    pub touch_jump: bool,
}

/// What the player wants to do this tick, after merging input sources.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlIntent {
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
}

impl InputState {
    pub fn set_key(&mut self, key: Key, down: bool) {
        let slot = match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
            Key::Up => &mut self.up,
            Key::Down => &mut self.down,
            Key::A => &mut self.a,
            Key::D => &mut self.d,
            Key::W => &mut self.w,
            Key::S => &mut self.s,
            Key::Space => &mut self.space,
            Key::Enter => &mut self.enter,
        };
        *slot = down;
    }

    pub fn set_touch(&mut self, button: TouchButton, down: bool) {
        let slot = match button {
            TouchButton::Left => &mut self.touch_left,
            TouchButton::Right => &mut self.touch_right,
            TouchButton::Jump => &mut self.touch_jump,
        };
        *slot = down;
    }

    /// Release everything, e.g. when a new scene starts.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn intent(&self) -> ControlIntent {
        ControlIntent {
            move_left: self.left || self.a || self.touch_left,
            move_right: self.right || self.d || self.touch_right,
            jump: self.up || self.w || self.space || self.touch_jump,
        }
    }
}
