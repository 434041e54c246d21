use std::collections::HashSet;

use log::{debug, info};

use super::command::Command;
use super::device::{ActionKind, Device};
use super::event::{InputEvent, Key, KeypadKey, Modifiers, MouseButton};
use super::joystick::JoystickState;
use super::sensitivity::Sensitivities;
use crate::camera::{CameraCommand, Direction, SnapView};

/// Extra divisor applied to move magnitudes only. Tuned by feel; rotate and
/// zoom are not scaled by it.
pub const MOVE_MAGNITUDE_DIVISOR: f32 = 1000.0;

const ARROWS: [(Key, Direction); 4] = [
    (Key::Up, Direction::NORTH),
    (Key::Down, Direction::SOUTH),
    (Key::Left, Direction::WEST),
    (Key::Right, Direction::EAST),
];

const WASD: [(char, Direction); 4] = [
    ('w', Direction::NORTH),
    ('s', Direction::SOUTH),
    ('a', Direction::WEST),
    ('d', Direction::EAST),
];

/// Translates raw device events into camera and application commands.
///
/// Discrete events go through [`InputMapper::handle_event`] in arrival
/// order; held keys and joystick levels are sampled once per frame by
/// [`InputMapper::update`]. Every continuous command is scaled by the
/// sensitivity of its `(action, device)` pair and by the frame time.
/// Events that match no rule are dropped.
#[derive(Debug)]
pub struct InputMapper {
    sensitivity: Sensitivities,
    active_devices: Device,
    left_mouse_pressed: bool,
    middle_mouse_pressed: bool,
    right_mouse_pressed: bool,
    modifiers: Modifiers,
    keys_down: HashSet<Key>,
    joystick: JoystickState,
    /// Milliseconds since the previous frame
    delta_time: f32,
}

impl InputMapper {
    pub fn new() -> Self {
        Self {
            sensitivity: Sensitivities::new(),
            active_devices: Device::MOUSE | Device::KEYBOARD,
            left_mouse_pressed: false,
            middle_mouse_pressed: false,
            right_mouse_pressed: false,
            modifiers: Modifiers::empty(),
            keys_down: HashSet::new(),
            joystick: JoystickState::new(),
            delta_time: 0.0,
        }
    }

    pub fn set_delta_time(&mut self, delta_ms: f32) {
        self.delta_time = delta_ms.max(0.0);
    }

    /// Poll pass: one discrete event.
    pub fn handle_event(&mut self, event: &InputEvent) -> Vec<Command> {
        let mut out = Vec::new();
        match *event {
            InputEvent::MouseMotion { xrel, yrel } => self.on_mouse_motion(xrel, yrel, &mut out),
            InputEvent::MouseButton { button, pressed } => self.on_mouse_button(button, pressed),
            InputEvent::MouseWheel { y, .. } => {
                // horizontal scrolling is not bound
                if let Some(direction) = Direction::from_vertical(-y) {
                    self.push_scaled(ActionKind::Zoom, Device::MOUSE, direction, &mut out);
                }
            }
            InputEvent::Key {
                key,
                pressed,
                modifiers,
            } => {
                self.modifiers = modifiers;
                if pressed {
                    self.keys_down.insert(key);
                    self.on_key_down(key, &mut out);
                } else {
                    self.keys_down.remove(&key);
                }
            }
            InputEvent::FocusLost => self.release_all(),
            InputEvent::JoystickAdded => {
                info!("Joystick connected");
                self.active_devices.insert(Device::JOYSTICK);
            }
            InputEvent::JoystickRemoved => {
                info!("Joystick disconnected");
                self.active_devices.remove(Device::JOYSTICK);
                self.joystick.clear();
            }
            InputEvent::JoystickAxis { axis, value } => {
                self.joystick.on_axis(axis, value);
            }
            InputEvent::JoystickHat { value } => self.joystick.on_hat(value),
            InputEvent::JoystickButton { button, pressed } => {
                if pressed && self.active_devices.contains(Device::JOYSTICK) {
                    if let Some(view) = joystick_button_snap(button) {
                        out.push(CameraCommand::Snap(view).into());
                    }
                }
            }
        }
        out
    }

    /// Pump pass: sample held keys and joystick levels once for this frame.
    pub fn update(&self) -> Vec<Command> {
        let mut out = Vec::new();

        let arrow_action = if self.modifiers.none() {
            Some(ActionKind::Rotate)
        } else if self.modifiers.shift_only() {
            Some(ActionKind::Move)
        } else if self.modifiers.ctrl_only() {
            Some(ActionKind::Zoom)
        } else {
            None
        };
        if let Some(action) = arrow_action {
            for (key, direction) in ARROWS {
                if self.keys_down.contains(&key) {
                    self.push_scaled(action, Device::KEYBOARD, direction, &mut out);
                }
            }
        }

        for (letter, direction) in WASD {
            if self.keys_down.contains(&Key::Letter(letter)) {
                self.push_scaled(ActionKind::Move, Device::KEYBOARD, direction, &mut out);
            }
        }

        let joy = &self.joystick;
        let levels = [
            (ActionKind::Move, joy.move_direction()),
            (ActionKind::Rotate, joy.rotate_direction()),
            (ActionKind::Move, joy.hat_direction()),
        ];
        for (action, directions) in levels {
            for direction in directions.cardinals() {
                self.push_scaled(action, Device::JOYSTICK, direction, &mut out);
            }
        }
        if joy.zoom_out_trigger() {
            self.push_scaled(ActionKind::Zoom, Device::JOYSTICK, Direction::SOUTH, &mut out);
        }
        if joy.zoom_in_trigger() {
            self.push_scaled(ActionKind::Zoom, Device::JOYSTICK, Direction::NORTH, &mut out);
        }

        out
    }

    fn on_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        match button {
            MouseButton::Left => self.left_mouse_pressed = pressed,
            MouseButton::Middle => self.middle_mouse_pressed = pressed,
            MouseButton::Right => self.right_mouse_pressed = pressed,
            MouseButton::Other(_) => {}
        }
    }

    fn on_mouse_motion(&self, xrel: f32, yrel: f32, out: &mut Vec<Command>) {
        let m = self.modifiers;
        let action = if self.left_mouse_pressed {
            if m.ctrl_only() {
                ActionKind::Zoom
            } else if m.shift_only() {
                ActionKind::Move
            } else if m.none() {
                ActionKind::Rotate
            } else {
                return;
            }
        } else if self.middle_mouse_pressed {
            if !m.none() {
                return;
            }
            ActionKind::Move
        } else if self.right_mouse_pressed {
            if !m.alt_only() {
                return;
            }
            ActionKind::Zoom
        } else {
            return;
        };

        // one command per axis, never a combined diagonal
        let passes = [Direction::from_vertical(yrel), Direction::from_horizontal(xrel)];
        for direction in passes.into_iter().flatten() {
            self.push_scaled(action, Device::MOUSE, direction, out);
        }
    }

    fn on_key_down(&mut self, key: Key, out: &mut Vec<Command>) {
        if let Key::Keypad(pad) = key {
            if let Some(view) = keypad_snap(pad) {
                out.push(CameraCommand::Snap(view).into());
            }
            return;
        }

        let m = self.modifiers;
        if m.ctrl_only() {
            if let Key::Letter(letter) = key {
                self.on_ctrl_letter(letter, out);
            }
        } else if let Key::Digit(digit) = key {
            let Some((device, action)) = digit_target(digit) else {
                return;
            };
            let value = if m.shift_only() {
                self.sensitivity.increase(device, action)
            } else if m.alt_only() {
                self.sensitivity.decrease(device, action)
            } else {
                None
            };
            if let Some(value) = value {
                debug!("{action:?} sensitivity for {device:?} is now {value}");
            }
        }
    }

    fn on_ctrl_letter(&mut self, letter: char, out: &mut Vec<Command>) {
        match letter {
            'k' => out.push(CameraCommand::Snap(None).into()),
            'm' => out.push(Command::NextViewMode),
            't' => out.push(Command::NextTheme),
            'f' => out.push(Command::ToggleFreeLook),
            'h' => out.push(Command::ResetCamera),
            'r' => {
                self.sensitivity.reset_all();
                debug!("All sensitivities reset");
            }
            'z' => self.reset_device(Device::MOUSE),
            'x' => self.reset_device(Device::KEYBOARD),
            'c' => self.reset_device(Device::JOYSTICK),
            'v' => self.reset_action(ActionKind::Move),
            'o' => self.reset_action(ActionKind::Rotate),
            'i' => self.reset_action(ActionKind::Zoom),
            _ => {}
        }
    }

    fn reset_device(&mut self, device: Device) {
        self.sensitivity.reset_device(device);
        debug!("{device:?} sensitivities reset");
    }

    fn reset_action(&mut self, action: ActionKind) {
        self.sensitivity.reset_action(action);
        debug!("{action:?} sensitivities reset on every device");
    }

    /// Forget everything held; the window no longer receives the releases.
    fn release_all(&mut self) {
        self.keys_down.clear();
        self.modifiers = Modifiers::empty();
        self.left_mouse_pressed = false;
        self.middle_mouse_pressed = false;
        self.right_mouse_pressed = false;
        debug!("Focus lost, held input released");
    }

    /// Resolve the sensitivity for `(action, device)` and emit the scaled
    /// command, unless the device is inactive or the sensitivity is zero.
    fn push_scaled(
        &self,
        action: ActionKind,
        device: Device,
        direction: Direction,
        out: &mut Vec<Command>,
    ) {
        if !self.active_devices.contains(device) {
            return;
        }
        let sensitivity = self.sensitivity.get(device, action);
        if sensitivity == 0.0 {
            return;
        }

        let mut magnitude = sensitivity * self.delta_time;
        let command = match action {
            ActionKind::Move => {
                magnitude /= MOVE_MAGNITUDE_DIVISOR;
                CameraCommand::Move {
                    direction,
                    magnitude,
                }
            }
            ActionKind::Rotate => CameraCommand::Rotate {
                direction,
                magnitude,
            },
            ActionKind::Zoom => CameraCommand::Zoom {
                direction,
                magnitude,
            },
        };
        out.push(command.into());
    }
}

impl Default for InputMapper {
    fn default() -> Self {
        Self::new()
    }
}

/// Digits 1..=9 address the sensitivity grid row-major: mouse, keyboard,
/// joystick by move, rotate, zoom.
fn digit_target(digit: u8) -> Option<(Device, ActionKind)> {
    if !(1..=9).contains(&digit) {
        return None;
    }
    let index = (digit - 1) as usize;
    let device = Device::from_index(index / 3)?;
    Some((device, ActionKind::ALL[index % 3]))
}

fn keypad_snap(key: KeypadKey) -> Option<Option<SnapView>> {
    let view = match key {
        KeypadKey::Digit(8) => Some(SnapView::Top),
        KeypadKey::Digit(2) => Some(SnapView::Bottom),
        KeypadKey::Digit(4) => Some(SnapView::Left),
        KeypadKey::Digit(6) => Some(SnapView::Right),
        KeypadKey::Plus => Some(SnapView::Front),
        KeypadKey::Minus => Some(SnapView::Back),
        KeypadKey::Multiply => Some(SnapView::Diagonal),
        KeypadKey::Divide => None,
        KeypadKey::Digit(_) => return None,
    };
    Some(view)
}

fn joystick_button_snap(button: u8) -> Option<Option<SnapView>> {
    let view = match button {
        0 => Some(SnapView::Front),
        1 => Some(SnapView::Right),
        2 => Some(SnapView::Left),
        3 => Some(SnapView::Top),
        4 => Some(SnapView::Back),
        5 => Some(SnapView::Bottom),
        6 => Some(SnapView::Diagonal),
        7 => None,
        _ => return None,
    };
    Some(view)
}
