pub mod command;
pub mod device;
pub mod event;
pub mod joystick;
pub mod mapper;
pub mod sensitivity;
pub mod winit_adapter;

pub use command::Command;
pub use device::{ActionKind, Device};
pub use event::{InputEvent, Key, KeypadKey, Modifiers, MouseButton};
pub use mapper::InputMapper;
pub use winit_adapter::WinitAdapter;
