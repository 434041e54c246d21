use std::collections::HashSet;

use winit::event::{DeviceEvent, ElementState, MouseScrollDelta, WindowEvent};
use winit::keyboard::{KeyCode, PhysicalKey};

use super::event::{InputEvent, Key, KeypadKey, Modifiers, MouseButton};

/// Left and right physical keys behind each modifier flag.
static MODIFIER_KEYS: [(Modifiers, [KeyCode; 2]); 4] = [
    (Modifiers::CTRL, [KeyCode::ControlLeft, KeyCode::ControlRight]),
    (Modifiers::SHIFT, [KeyCode::ShiftLeft, KeyCode::ShiftRight]),
    (Modifiers::ALT, [KeyCode::AltLeft, KeyCode::AltRight]),
    (Modifiers::GUI, [KeyCode::SuperLeft, KeyCode::SuperRight]),
];

/// Converts winit window/device events into [`InputEvent`]s.
///
/// Keeps its own modifier snapshot so each key event carries the modifier
/// state as of that key, including the modifier key being pressed itself.
/// A flag stays set while either side of its modifier is held.
#[derive(Debug, Default)]
pub struct WinitAdapter {
    modifiers: Modifiers,
    held_modifier_keys: HashSet<KeyCode>,
}

impl WinitAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn window_event(&mut self, event: &WindowEvent) -> Option<InputEvent> {
        match event {
            WindowEvent::ModifiersChanged(modifiers) => {
                let state = modifiers.state();
                self.sync_modifier(Modifiers::CTRL, state.control_key());
                self.sync_modifier(Modifiers::SHIFT, state.shift_key());
                self.sync_modifier(Modifiers::ALT, state.alt_key());
                self.sync_modifier(Modifiers::GUI, state.super_key());
                None
            }
            WindowEvent::Focused(false) => {
                self.modifiers = Modifiers::empty();
                self.held_modifier_keys.clear();
                Some(InputEvent::FocusLost)
            }
            WindowEvent::KeyboardInput { event, .. } => {
                // held state is unchanged by auto-repeat
                if event.repeat {
                    return None;
                }
                Some(self.key_input(event.physical_key, event.state.is_pressed()))
            }
            WindowEvent::MouseInput { state, button, .. } => {
                let button = match button {
                    winit::event::MouseButton::Left => MouseButton::Left,
                    winit::event::MouseButton::Middle => MouseButton::Middle,
                    winit::event::MouseButton::Right => MouseButton::Right,
                    winit::event::MouseButton::Back => MouseButton::Other(3),
                    winit::event::MouseButton::Forward => MouseButton::Other(4),
                    winit::event::MouseButton::Other(id) => MouseButton::Other(*id),
                };
                Some(InputEvent::MouseButton {
                    button,
                    pressed: *state == ElementState::Pressed,
                })
            }
            WindowEvent::MouseWheel { delta, .. } => {
                let (x, y) = match delta {
                    MouseScrollDelta::LineDelta(x, y) => (*x, *y),
                    MouseScrollDelta::PixelDelta(pos) => (pos.x as f32, pos.y as f32),
                };
                Some(InputEvent::MouseWheel { x, y })
            }
            _ => None,
        }
    }

    /// Raw pointer motion; window cursor positions are not used.
    pub fn device_event(&mut self, event: &DeviceEvent) -> Option<InputEvent> {
        match event {
            DeviceEvent::MouseMotion { delta } => Some(InputEvent::MouseMotion {
                xrel: delta.0 as f32,
                yrel: delta.1 as f32,
            }),
            _ => None,
        }
    }

    fn key_input(&mut self, physical: PhysicalKey, pressed: bool) -> InputEvent {
        let key = match physical {
            PhysicalKey::Code(code) => {
                self.track_modifier_key(code, pressed);
                key_from_code(code)
            }
            PhysicalKey::Unidentified(_) => Key::Other,
        };
        InputEvent::Key {
            key,
            pressed,
            modifiers: self.modifiers,
        }
    }

    fn track_modifier_key(&mut self, code: KeyCode, pressed: bool) {
        let Some((flag, sides)) = MODIFIER_KEYS.iter().find(|(_, sides)| sides.contains(&code))
        else {
            return;
        };
        if pressed {
            self.held_modifier_keys.insert(code);
        } else {
            self.held_modifier_keys.remove(&code);
        }
        let held = sides.iter().any(|side| self.held_modifier_keys.contains(side));
        self.modifiers.set(*flag, held);
    }

    /// The platform's modifier state wins; a released flag forgets both sides.
    fn sync_modifier(&mut self, flag: Modifiers, active: bool) {
        self.modifiers.set(flag, active);
        if !active {
            if let Some((_, sides)) = MODIFIER_KEYS.iter().find(|(f, _)| *f == flag) {
                for side in sides {
                    self.held_modifier_keys.remove(side);
                }
            }
        }
    }
}

pub fn key_from_code(code: KeyCode) -> Key {
    match code {
        KeyCode::ArrowUp => Key::Up,
        KeyCode::ArrowDown => Key::Down,
        KeyCode::ArrowLeft => Key::Left,
        KeyCode::ArrowRight => Key::Right,
        KeyCode::Escape => Key::Escape,
        KeyCode::ControlLeft | KeyCode::ControlRight => Key::Ctrl,
        KeyCode::ShiftLeft | KeyCode::ShiftRight => Key::Shift,
        KeyCode::AltLeft | KeyCode::AltRight => Key::Alt,
        KeyCode::SuperLeft | KeyCode::SuperRight => Key::Gui,

        KeyCode::NumpadAdd => Key::Keypad(KeypadKey::Plus),
        KeyCode::NumpadSubtract => Key::Keypad(KeypadKey::Minus),
        KeyCode::NumpadMultiply => Key::Keypad(KeypadKey::Multiply),
        KeyCode::NumpadDivide => Key::Keypad(KeypadKey::Divide),
        KeyCode::Numpad0 => Key::Keypad(KeypadKey::Digit(0)),
        KeyCode::Numpad1 => Key::Keypad(KeypadKey::Digit(1)),
        KeyCode::Numpad2 => Key::Keypad(KeypadKey::Digit(2)),
        KeyCode::Numpad3 => Key::Keypad(KeypadKey::Digit(3)),
        KeyCode::Numpad4 => Key::Keypad(KeypadKey::Digit(4)),
        KeyCode::Numpad5 => Key::Keypad(KeypadKey::Digit(5)),
        KeyCode::Numpad6 => Key::Keypad(KeypadKey::Digit(6)),
        KeyCode::Numpad7 => Key::Keypad(KeypadKey::Digit(7)),
        KeyCode::Numpad8 => Key::Keypad(KeypadKey::Digit(8)),
        KeyCode::Numpad9 => Key::Keypad(KeypadKey::Digit(9)),

        KeyCode::Digit0 => Key::Digit(0),
        KeyCode::Digit1 => Key::Digit(1),
        KeyCode::Digit2 => Key::Digit(2),
        KeyCode::Digit3 => Key::Digit(3),
        KeyCode::Digit4 => Key::Digit(4),
        KeyCode::Digit5 => Key::Digit(5),
        KeyCode::Digit6 => Key::Digit(6),
        KeyCode::Digit7 => Key::Digit(7),
        KeyCode::Digit8 => Key::Digit(8),
        KeyCode::Digit9 => Key::Digit(9),

        KeyCode::KeyA => Key::Letter('a'),
        KeyCode::KeyB => Key::Letter('b'),
        KeyCode::KeyC => Key::Letter('c'),
        KeyCode::KeyD => Key::Letter('d'),
        KeyCode::KeyE => Key::Letter('e'),
        KeyCode::KeyF => Key::Letter('f'),
        KeyCode::KeyG => Key::Letter('g'),
        KeyCode::KeyH => Key::Letter('h'),
        KeyCode::KeyI => Key::Letter('i'),
        KeyCode::KeyJ => Key::Letter('j'),
        KeyCode::KeyK => Key::Letter('k'),
        KeyCode::KeyL => Key::Letter('l'),
        KeyCode::KeyM => Key::Letter('m'),
        KeyCode::KeyN => Key::Letter('n'),
        KeyCode::KeyO => Key::Letter('o'),
        KeyCode::KeyP => Key::Letter('p'),
        KeyCode::KeyQ => Key::Letter('q'),
        KeyCode::KeyR => Key::Letter('r'),
        KeyCode::KeyS => Key::Letter('s'),
        KeyCode::KeyT => Key::Letter('t'),
        KeyCode::KeyU => Key::Letter('u'),
        KeyCode::KeyV => Key::Letter('v'),
        KeyCode::KeyW => Key::Letter('w'),
        KeyCode::KeyX => Key::Letter('x'),
        KeyCode::KeyY => Key::Letter('y'),
        KeyCode::KeyZ => Key::Letter('z'),

        _ => Key::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_codes() {
        assert_eq!(key_from_code(KeyCode::ArrowLeft), Key::Left);
        assert_eq!(key_from_code(KeyCode::KeyW), Key::Letter('w'));
        assert_eq!(key_from_code(KeyCode::Digit7), Key::Digit(7));
        assert_eq!(key_from_code(KeyCode::Numpad8), Key::Keypad(KeypadKey::Digit(8)));
        assert_eq!(key_from_code(KeyCode::NumpadMultiply), Key::Keypad(KeypadKey::Multiply));
        assert_eq!(key_from_code(KeyCode::ControlRight), Key::Ctrl);
        assert_eq!(key_from_code(KeyCode::F5), Key::Other);
    }

    #[test]
    fn modifier_stays_while_other_side_is_held() {
        let mut adapter = WinitAdapter::new();
        let left = PhysicalKey::Code(KeyCode::ControlLeft);
        let right = PhysicalKey::Code(KeyCode::ControlRight);

        adapter.key_input(left, true);
        adapter.key_input(right, true);
        let event = adapter.key_input(right, false);
        assert_eq!(
            event,
            InputEvent::Key {
                key: Key::Ctrl,
                pressed: false,
                modifiers: Modifiers::CTRL
            }
        );
        let event = adapter.key_input(PhysicalKey::Code(KeyCode::KeyK), true);
        assert_eq!(
            event,
            InputEvent::Key {
                key: Key::Letter('k'),
                pressed: true,
                modifiers: Modifiers::CTRL
            }
        );

        let event = adapter.key_input(left, false);
        assert!(matches!(event, InputEvent::Key { modifiers, .. } if modifiers.is_empty()));
    }

    #[test]
    fn focus_loss_drops_modifiers() {
        let mut adapter = WinitAdapter::new();
        adapter.key_input(PhysicalKey::Code(KeyCode::ShiftLeft), true);
        assert_eq!(
            adapter.window_event(&WindowEvent::Focused(false)),
            Some(InputEvent::FocusLost)
        );
        assert_eq!(adapter.window_event(&WindowEvent::Focused(true)), None);
        let event = adapter.key_input(PhysicalKey::Code(KeyCode::Digit1), true);
        assert!(matches!(event, InputEvent::Key { modifiers, .. } if modifiers.is_empty()));
    }

    #[test]
    fn mouse_motion_is_relative() {
        let mut adapter = WinitAdapter::new();
        let event = adapter.device_event(&DeviceEvent::MouseMotion { delta: (-5.0, 3.0) });
        assert_eq!(
            event,
            Some(InputEvent::MouseMotion {
                xrel: -5.0,
                yrel: 3.0
            })
        );
    }
}
