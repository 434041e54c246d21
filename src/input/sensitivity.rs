use super::device::{ActionKind, Device};

/// Floor shared by every sensitivity.
pub const SENSITIVITY_MIN: f32 = 1.0;

/// Default, ceiling and step for one `(device, action)` pair.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensitivityBand {
    pub default: f32,
    pub max: f32,
    pub step: f32,
}

const MOVE_MOUSE: SensitivityBand = SensitivityBand {
    default: 10.0,
    max: 100.0,
    step: 5.0,
};

const MOVE: SensitivityBand = SensitivityBand {
    default: 5.0,
    max: 50.0,
    step: 5.0,
};

const TURN: SensitivityBand = SensitivityBand {
    default: 1.0,
    max: 10.0,
    step: 1.0,
};

/// Rows are mouse, keyboard, joystick; columns are move, rotate, zoom.
const BANDS: [[SensitivityBand; 3]; 3] = [
    [MOVE_MOUSE, TURN, TURN],
    [MOVE, TURN, TURN],
    [MOVE, TURN, TURN],
];

/// Per-device, per-action sensitivity scalars.
///
/// Values always stay inside `[SENSITIVITY_MIN, band.max]`. Nothing here is
/// persisted; every run starts from the band defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Sensitivities {
    values: [[f32; 3]; 3],
}

impl Sensitivities {
    pub fn new() -> Self {
        let mut values = [[0.0; 3]; 3];
        for (row, bands) in BANDS.iter().enumerate() {
            for (col, band) in bands.iter().enumerate() {
                values[row][col] = band.default;
            }
        }
        Self { values }
    }

    /// Current value, or `0.0` for a device set that isn't a single device.
    pub fn get(&self, device: Device, action: ActionKind) -> f32 {
        device
            .index()
            .map(|row| self.values[row][action.index()])
            .unwrap_or(0.0)
    }

    pub fn increase(&mut self, device: Device, action: ActionKind) -> Option<f32> {
        self.nudge(device, action, 1.0)
    }

    pub fn decrease(&mut self, device: Device, action: ActionKind) -> Option<f32> {
        self.nudge(device, action, -1.0)
    }

    fn nudge(&mut self, device: Device, action: ActionKind, sign: f32) -> Option<f32> {
        let row = device.index()?;
        let band = BANDS[row][action.index()];
        let value = &mut self.values[row][action.index()];
        *value = (*value + sign * band.step).clamp(SENSITIVITY_MIN, band.max);
        Some(*value)
    }

    /// Restore the defaults of every action for `device`.
    pub fn reset_device(&mut self, device: Device) {
        if let Some(row) = device.index() {
            for action in ActionKind::ALL {
                self.values[row][action.index()] = BANDS[row][action.index()].default;
            }
        }
    }

    /// Restore the defaults of `action` on every device.
    pub fn reset_action(&mut self, action: ActionKind) {
        for (row, bands) in BANDS.iter().enumerate() {
            self.values[row][action.index()] = bands[action.index()].default;
        }
    }

    pub fn reset_all(&mut self) {
        *self = Self::new();
    }
}

impl Default for Sensitivities {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn increase_stops_at_max() {
        let mut s = Sensitivities::new();
        for _ in 0..100 {
            s.increase(Device::MOUSE, ActionKind::Move);
        }
        assert_eq!(s.get(Device::MOUSE, ActionKind::Move), 100.0);

        for _ in 0..100 {
            s.increase(Device::JOYSTICK, ActionKind::Zoom);
        }
        assert_eq!(s.get(Device::JOYSTICK, ActionKind::Zoom), 10.0);
    }

    #[test]
    fn decrease_stops_at_floor() {
        let mut s = Sensitivities::new();
        for _ in 0..100 {
            s.decrease(Device::KEYBOARD, ActionKind::Move);
        }
        assert_eq!(s.get(Device::KEYBOARD, ActionKind::Move), SENSITIVITY_MIN);
    }

    #[test]
    fn edits_are_isolated() {
        let mut s = Sensitivities::new();
        let before = s.clone();
        s.increase(Device::KEYBOARD, ActionKind::Rotate);
        for device in [Device::MOUSE, Device::KEYBOARD, Device::JOYSTICK] {
            for action in ActionKind::ALL {
                if device == Device::KEYBOARD && action == ActionKind::Rotate {
                    assert_eq!(s.get(device, action), 2.0);
                } else {
                    assert_eq!(s.get(device, action), before.get(device, action));
                }
            }
        }
    }

    #[test]
    fn reset_device_only_touches_that_row() {
        let mut s = Sensitivities::new();
        s.increase(Device::MOUSE, ActionKind::Zoom);
        s.increase(Device::JOYSTICK, ActionKind::Zoom);
        s.reset_device(Device::MOUSE);
        assert_eq!(s.get(Device::MOUSE, ActionKind::Zoom), 1.0);
        assert_eq!(s.get(Device::JOYSTICK, ActionKind::Zoom), 2.0);
        s.reset_all();
        assert_eq!(s, Sensitivities::new());
    }

    #[test]
    fn reset_action_only_touches_that_column() {
        let mut s = Sensitivities::new();
        s.increase(Device::MOUSE, ActionKind::Move);
        s.increase(Device::JOYSTICK, ActionKind::Move);
        s.increase(Device::KEYBOARD, ActionKind::Zoom);
        s.reset_action(ActionKind::Move);
        assert_eq!(s.get(Device::MOUSE, ActionKind::Move), 10.0);
        assert_eq!(s.get(Device::JOYSTICK, ActionKind::Move), 5.0);
        assert_eq!(s.get(Device::KEYBOARD, ActionKind::Zoom), 2.0);
    }

    #[test]
    fn mixed_device_set_resolves_to_zero() {
        let mut s = Sensitivities::new();
        assert_eq!(s.get(Device::MOUSE | Device::KEYBOARD, ActionKind::Move), 0.0);
        assert_eq!(s.increase(Device::empty(), ActionKind::Move), None);
    }
}
