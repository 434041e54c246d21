use std::collections::VecDeque;

use log::{debug, info, trace};
use nalgebra_glm as glm;

use crate::camera::{CameraCommand, CameraController};
use crate::display::{Theme, ViewMode};
use crate::input::{Command, InputEvent, InputMapper};
use crate::settings::Settings;

pub const NEAR_PLANE: f32 = 0.1;
pub const FAR_PLANE: f32 = 100.0;

/// What a frame changed beyond the camera itself.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct FrameChanges {
    /// Title-visible state moved (snap view, free look, mode or theme)
    pub status: bool,
    /// Theme or view mode moved and should be persisted
    pub appearance: bool,
}

/// Window-independent viewer state: the active camera, the input mapper
/// feeding it, and the display toggles the mapper can cycle.
pub struct Viewer {
    camera: CameraController,
    mapper: InputMapper,
    pending: VecDeque<InputEvent>,
    constrain_pitch: bool,
    snap_distance: f32,
    theme: Theme,
    view_mode: ViewMode,
}

impl Viewer {
    pub fn new(settings: &Settings) -> Self {
        Self {
            camera: CameraController::new(settings.camera.initial_state()),
            mapper: InputMapper::new(),
            pending: VecDeque::new(),
            constrain_pitch: settings.camera.constrain_pitch,
            snap_distance: settings.camera.snap_distance,
            theme: settings.appearance.theme,
            view_mode: settings.appearance.view_mode,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    /// Queue a discrete event for the next frame.
    pub fn queue(&mut self, event: InputEvent) {
        self.pending.push_back(event);
    }

    pub fn snap_to_start(&mut self, command: CameraCommand) -> FrameChanges {
        self.apply(command.into())
    }

    /// Runs one frame: drain queued events in order, then sample held input.
    pub fn run_frame(&mut self, delta_ms: f32) -> FrameChanges {
        self.mapper.set_delta_time(delta_ms);
        let mut changes = FrameChanges::default();

        while let Some(event) = self.pending.pop_front() {
            for command in self.mapper.handle_event(&event) {
                changes = changes.merge(self.apply(command));
            }
        }
        for command in self.mapper.update() {
            changes = changes.merge(self.apply(command));
        }

        let s = self.camera.state();
        trace!(
            "camera at {:?} yaw/pitch {:?} zoom {} {:?}, front {:?} up {:?} right {:?} world up {:?}",
            s.position(),
            s.get_orientation(),
            s.zoom(),
            s.roll(),
            s.front(),
            s.up(),
            s.right(),
            s.world_up()
        );
        trace!("view matrix: {:?}", self.camera.view_matrix());
        changes
    }

    /// Projection × view for a viewport of the given aspect ratio.
    pub fn view_projection(&self, aspect: f32) -> glm::Mat4 {
        self.camera.projection_matrix(aspect, NEAR_PLANE, FAR_PLANE) * self.camera.view_matrix()
    }

    pub fn status_line(&self) -> String {
        let look = if self.constrain_pitch { "orbit" } else { "free look" };
        format!(
            "{} view, {look}, {:?}, {:?} theme",
            self.camera.state().last_snap_view(),
            self.view_mode,
            self.theme
        )
    }

    fn apply(&mut self, command: Command) -> FrameChanges {
        match command {
            Command::Camera(camera) => {
                self.camera
                    .apply(camera, self.constrain_pitch, self.snap_distance);
                FrameChanges {
                    status: matches!(camera, CameraCommand::Snap(_)),
                    appearance: false,
                }
            }
            Command::NextViewMode => {
                self.view_mode = self.view_mode.next();
                debug!("View mode: {:?}", self.view_mode);
                FrameChanges {
                    status: true,
                    appearance: true,
                }
            }
            Command::NextTheme => {
                self.theme = self.theme.next();
                debug!("Theme: {:?}", self.theme);
                FrameChanges {
                    status: true,
                    appearance: true,
                }
            }
            Command::ResetCamera => {
                self.camera.reset();
                FrameChanges::default()
            }
            Command::ToggleFreeLook => {
                self.constrain_pitch = !self.constrain_pitch;
                if self.constrain_pitch {
                    self.camera.level_roll();
                }
                info!(
                    "Pitch {}",
                    if self.constrain_pitch { "constrained" } else { "unconstrained" }
                );
                FrameChanges {
                    status: true,
                    appearance: false,
                }
            }
        }
    }
}

impl FrameChanges {
    fn merge(self, other: FrameChanges) -> FrameChanges {
        FrameChanges {
            status: self.status || other.status,
            appearance: self.appearance || other.appearance,
        }
    }
}
