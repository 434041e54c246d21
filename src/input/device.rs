use bitflags::bitflags;

bitflags! {
    /// Input device kinds a command can originate from.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Device: u8 {
        const MOUSE = 1 << 0;
        const KEYBOARD = 1 << 1;
        const JOYSTICK = 1 << 2;
    }
}

impl Device {
    /// Row index into the sensitivity table; `None` for empty or mixed sets.
    pub fn index(self) -> Option<usize> {
        if self == Device::MOUSE {
            Some(0)
        } else if self == Device::KEYBOARD {
            Some(1)
        } else if self == Device::JOYSTICK {
            Some(2)
        } else {
            None
        }
    }

    pub fn from_index(index: usize) -> Option<Device> {
        match index {
            0 => Some(Device::MOUSE),
            1 => Some(Device::KEYBOARD),
            2 => Some(Device::JOYSTICK),
            _ => None,
        }
    }
}

/// The three continuous camera actions that carry a sensitivity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Move,
    Rotate,
    Zoom,
}

impl ActionKind {
    pub const ALL: [ActionKind; 3] = [ActionKind::Move, ActionKind::Rotate, ActionKind::Zoom];

    pub fn index(self) -> usize {
        match self {
            ActionKind::Move => 0,
            ActionKind::Rotate => 1,
            ActionKind::Zoom => 2,
        }
    }
}
