use bitflags::bitflags;

use crate::camera::Direction;

/// Analog values within `±JOYSTICK_DEAD_ZONE` count as centred.
pub const JOYSTICK_DEAD_ZONE: i16 = 8000;

bitflags! {
    /// One bit per logical stick direction. The low nibble is the move stick,
    /// the high nibble the rotate stick, each in [`Direction`] bit order.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct AxisMask: u8 {
        const MOVE_NORTH = 1 << 0;
        const MOVE_EAST = 1 << 1;
        const MOVE_SOUTH = 1 << 2;
        const MOVE_WEST = 1 << 3;
        const ROTATE_NORTH = 1 << 4;
        const ROTATE_EAST = 1 << 5;
        const ROTATE_SOUTH = 1 << 6;
        const ROTATE_WEST = 1 << 7;
    }
}

/// Logical role of each analog axis, indexed by axis number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AxisRole {
    /// `negative` bit, `positive` bit
    Stick(AxisMask, AxisMask),
    ZoomOutTrigger,
    ZoomInTrigger,
}

const AXIS_ROLES: [AxisRole; 6] = [
    AxisRole::Stick(AxisMask::MOVE_WEST, AxisMask::MOVE_EAST),
    AxisRole::Stick(AxisMask::MOVE_NORTH, AxisMask::MOVE_SOUTH),
    AxisRole::ZoomOutTrigger,
    AxisRole::Stick(AxisMask::ROTATE_WEST, AxisMask::ROTATE_EAST),
    AxisRole::Stick(AxisMask::ROTATE_NORTH, AxisMask::ROTATE_SOUTH),
    AxisRole::ZoomInTrigger,
];

/// Level-triggered joystick state.
///
/// Bits stay set from the event that crosses the dead zone until the event
/// that returns inside it, and are read (not cleared) once per frame.
#[derive(Debug, Clone, Default)]
pub struct JoystickState {
    axes: AxisMask,
    hat: Direction,
    zoom_out_trigger: bool,
    zoom_in_trigger: bool,
}

impl JoystickState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `false` for axes without a role.
    pub fn on_axis(&mut self, axis: u8, value: i16) -> bool {
        let Some(role) = AXIS_ROLES.get(axis as usize) else {
            return false;
        };
        match *role {
            AxisRole::Stick(negative, positive) => {
                self.axes.remove(negative | positive);
                if value < -JOYSTICK_DEAD_ZONE {
                    self.axes.insert(negative);
                } else if value > JOYSTICK_DEAD_ZONE {
                    self.axes.insert(positive);
                }
            }
            AxisRole::ZoomOutTrigger => self.zoom_out_trigger = value > JOYSTICK_DEAD_ZONE,
            AxisRole::ZoomInTrigger => self.zoom_in_trigger = value > JOYSTICK_DEAD_ZONE,
        }
        true
    }

    pub fn on_hat(&mut self, value: u8) {
        self.hat = Direction::from_bits_truncate(value).without_conflicts();
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn move_direction(&self) -> Direction {
        Direction::from_bits_truncate(self.axes.bits() & 0x0f)
    }

    pub fn rotate_direction(&self) -> Direction {
        Direction::from_bits_truncate(self.axes.bits() >> 4)
    }

    pub fn hat_direction(&self) -> Direction {
        self.hat
    }

    pub fn zoom_out_trigger(&self) -> bool {
        self.zoom_out_trigger
    }

    pub fn zoom_in_trigger(&self) -> bool {
        self.zoom_in_trigger
    }
}
