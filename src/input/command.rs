use crate::camera::CameraCommand;

/// Everything the input mapper can ask of the application.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    Camera(CameraCommand),
    /// Return the camera to its start-up placement.
    ResetCamera,
    NextViewMode,
    NextTheme,
    /// Switch between constrained pitch and free look.
    ToggleFreeLook,
}

impl From<CameraCommand> for Command {
    fn from(command: CameraCommand) -> Self {
        Command::Camera(command)
    }
}
