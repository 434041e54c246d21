use nalgebra_glm as glm;

use super::roll::RollState;
use super::snap::SnapView;

pub const DEFAULT_YAW: f32 = 270.0;
pub const DEFAULT_PITCH: f32 = 0.0;
pub const DEFAULT_ZOOM: f32 = 45.0;

pub const ZOOM_MIN: f32 = 1.0;
pub const ZOOM_MAX: f32 = 45.0;

/// Margin kept from the poles when pitch is constrained.
pub const PITCH_EPSILON: f32 = 0.1;
pub const PITCH_CONSTRAINT_TOP: f32 = 90.0 - PITCH_EPSILON;
pub const PITCH_CONSTRAINT_BOTTOM: f32 = 270.0 + PITCH_EPSILON;

/// Wraps an angle in degrees into `[0, 360)`.
///
/// Negative angles round towards zero before being lifted (`360 + ceil`), so
/// rotating 1.5° west from 0 lands on 359, not 358.5.
pub fn wrap_degrees(angle: f32) -> f32 {
    let wrapped = if angle < 0.0 {
        360.0 + (angle % 360.0).ceil()
    } else if angle > 360.0 {
        angle % 360.0
    } else {
        angle
    };
    if wrapped >= 360.0 { wrapped - 360.0 } else { wrapped }
}

/// Camera position and orientation.
///
/// `front`, `up` and `right` are derived from yaw, pitch and `world_up` and
/// are recomputed by [`CameraState::update_basis`] after every change to
/// those three.
#[derive(Debug, Clone)]
pub struct CameraState {
    pub(super) position: glm::Vec3,
    pub(super) yaw: f32,
    pub(super) pitch: f32,
    pub(super) front: glm::Vec3,
    pub(super) up: glm::Vec3,
    pub(super) right: glm::Vec3,
    pub(super) world_up: glm::Vec3,
    pub(super) zoom: f32,
    pub(super) roll: RollState,
    pub(super) last_snap_view: SnapView,
    default_position: glm::Vec3,
    default_yaw: f32,
    default_pitch: f32,
    default_zoom: f32,
}

impl CameraState {
    pub fn new(position: glm::Vec3, yaw: f32, pitch: f32, zoom: f32) -> Self {
        let yaw = wrap_degrees(yaw);
        let pitch = wrap_degrees(pitch);
        let zoom = zoom.clamp(ZOOM_MIN, ZOOM_MAX);
        let mut state = Self {
            position,
            yaw,
            pitch,
            front: glm::vec3(0.0, 0.0, -1.0),
            up: glm::vec3(0.0, 1.0, 0.0),
            right: glm::vec3(1.0, 0.0, 0.0),
            world_up: glm::vec3(0.0, 1.0, 0.0),
            zoom,
            roll: RollState::Upright,
            last_snap_view: SnapView::Front,
            default_position: position,
            default_yaw: yaw,
            default_pitch: pitch,
            default_zoom: zoom,
        };
        state.update_basis();
        state
    }

    pub fn reset(&mut self) {
        self.position = self.default_position;
        self.yaw = self.default_yaw;
        self.pitch = self.default_pitch;
        self.zoom = self.default_zoom;
        self.world_up = glm::vec3(0.0, 1.0, 0.0);
        self.roll = RollState::Upright;
        self.update_basis();
    }

    /// Recomputes `front`, `right` and `up` from yaw, pitch and `world_up`.
    pub(super) fn update_basis(&mut self) {
        let (yaw, pitch) = (self.yaw.to_radians(), self.pitch.to_radians());
        self.front = glm::normalize(&glm::vec3(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        ));

        let side = glm::cross(&self.front, &self.world_up);
        self.right = if glm::length(&side) > 1e-6 {
            glm::normalize(&side)
        } else {
            // front is parallel to world_up; take the horizontal right of the yaw
            glm::vec3(-yaw.sin(), 0.0, yaw.cos()) * self.world_up.y.signum()
        };

        self.up = glm::normalize(&glm::cross(&self.right, &self.front));
    }

    pub fn position(&self) -> glm::Vec3 {
        self.position
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    pub fn front(&self) -> glm::Vec3 {
        self.front
    }

    pub fn up(&self) -> glm::Vec3 {
        self.up
    }

    pub fn right(&self) -> glm::Vec3 {
        self.right
    }

    pub fn world_up(&self) -> glm::Vec3 {
        self.world_up
    }

    pub fn zoom(&self) -> f32 {
        self.zoom
    }

    pub fn roll(&self) -> RollState {
        self.roll
    }

    pub fn last_snap_view(&self) -> SnapView {
        self.last_snap_view
    }

    pub fn get_orientation(&self) -> (f32, f32) {
        (self.yaw, self.pitch)
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(glm::vec3(0.0, 0.0, 10.0), DEFAULT_YAW, DEFAULT_PITCH, DEFAULT_ZOOM)
    }
}
