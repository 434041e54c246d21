use bitflags::bitflags;

bitflags! {
    /// Keyboard modifier mask.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        const CTRL = 1 << 0;
        const SHIFT = 1 << 1;
        const ALT = 1 << 2;
        const GUI = 1 << 3;
    }
}

impl Modifiers {
    /// Ctrl held, Shift and Alt released. Gui is not considered.
    pub fn ctrl_only(self) -> bool {
        self.contains(Self::CTRL) && !self.intersects(Self::SHIFT | Self::ALT)
    }

    pub fn shift_only(self) -> bool {
        self.contains(Self::SHIFT) && !self.intersects(Self::CTRL | Self::ALT)
    }

    pub fn alt_only(self) -> bool {
        self.contains(Self::ALT) && !self.intersects(Self::CTRL | Self::SHIFT)
    }

    /// None of Ctrl, Shift, Alt or Gui.
    pub fn none(self) -> bool {
        self.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Middle,
    Right,
    Other(u16),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeypadKey {
    Digit(u8),
    Plus,
    Minus,
    Multiply,
    Divide,
}

/// Device-independent key identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Lowercase ASCII letter.
    Letter(char),
    /// Top-row digit.
    Digit(u8),
    Keypad(KeypadKey),
    Escape,
    Ctrl,
    Shift,
    Alt,
    Gui,
    Other,
}

/// A discrete event from any input device, in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Relative pointer motion in pixels.
    MouseMotion { xrel: f32, yrel: f32 },
    MouseButton { button: MouseButton, pressed: bool },
    /// Positive `y` scrolls up.
    MouseWheel { x: f32, y: f32 },
    /// `modifiers` is the modifier state reported with the key event.
    Key {
        key: Key,
        pressed: bool,
        modifiers: Modifiers,
    },
    /// The window lost keyboard focus; held keys and buttons are stale.
    FocusLost,
    JoystickAdded,
    JoystickRemoved,
    JoystickAxis { axis: u8, value: i16 },
    /// Hat bits: up=1, right=2, down=4, left=8.
    JoystickHat { value: u8 },
    JoystickButton { button: u8, pressed: bool },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn modifier_layers() {
        assert!(Modifiers::CTRL.ctrl_only());
        assert!((Modifiers::CTRL | Modifiers::GUI).ctrl_only());
        assert!(!(Modifiers::CTRL | Modifiers::SHIFT).ctrl_only());
        assert!(Modifiers::SHIFT.shift_only());
        assert!(!(Modifiers::SHIFT | Modifiers::ALT).shift_only());
        assert!(Modifiers::ALT.alt_only());
        assert!(Modifiers::empty().none());
        assert!(!Modifiers::GUI.none());
    }
}
