use log::debug;
use nalgebra_glm as glm;

use super::direction::Direction;
use super::snap::SnapView;
use super::state::{
    CameraState, PITCH_CONSTRAINT_BOTTOM, PITCH_CONSTRAINT_TOP, ZOOM_MAX, ZOOM_MIN, wrap_degrees,
};

/// A single request against the camera, produced by the input mapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraCommand {
    Move { direction: Direction, magnitude: f32 },
    Rotate { direction: Direction, magnitude: f32 },
    Zoom { direction: Direction, magnitude: f32 },
    /// `None` cycles to the view after the last one snapped to.
    Snap(Option<SnapView>),
}

/// Owns the active camera and applies movement, rotation, zoom and snaps
pub struct CameraController {
    state: CameraState,
}

impl CameraController {
    pub fn new(state: CameraState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &CameraState {
        &self.state
    }

    /// Dispatches a mapper command to the matching operation.
    pub fn apply(&mut self, command: CameraCommand, constrain_pitch: bool, snap_distance: f32) {
        match command {
            CameraCommand::Move {
                direction,
                magnitude,
            } => self.move_by(direction, magnitude),
            CameraCommand::Rotate {
                direction,
                magnitude,
            } => self.rotate(direction, magnitude, constrain_pitch),
            CameraCommand::Zoom {
                direction,
                magnitude,
            } => self.zoom(direction, magnitude),
            CameraCommand::Snap(view) => self.snap_to(view, snap_distance),
        }
    }

    /// Translate along `front` (north/south) and `right` (east/west).
    pub fn move_by(&mut self, direction: Direction, magnitude: f32) {
        let s = &mut self.state;
        if direction.contains(Direction::NORTH) {
            s.position += s.front * magnitude;
        }
        if direction.contains(Direction::EAST) {
            s.position += s.right * magnitude;
        }
        if direction.contains(Direction::SOUTH) {
            s.position -= s.front * magnitude;
        }
        if direction.contains(Direction::WEST) {
            s.position -= s.right * magnitude;
        }
    }

    /// Accumulate `magnitude` degrees into pitch (north/south) and yaw
    /// (west/east), wrap both into `[0, 360)` and rebuild the basis.
    ///
    /// With `constrain_pitch` the camera stops just short of either pole.
    /// Without it, crossing into or out of `[90, 270]` flips `world_up` and
    /// `right` once per crossing so free look never renders upside down.
    pub fn rotate(&mut self, direction: Direction, magnitude: f32, constrain_pitch: bool) {
        let s = &mut self.state;

        if direction.contains(Direction::NORTH) {
            s.pitch += magnitude;
        } else if direction.contains(Direction::SOUTH) {
            s.pitch -= magnitude;
        }

        if direction.contains(Direction::WEST) {
            s.yaw -= magnitude;
        } else if direction.contains(Direction::EAST) {
            s.yaw += magnitude;
        }

        s.yaw = wrap_degrees(s.yaw);
        s.pitch = wrap_degrees(s.pitch);

        if constrain_pitch {
            if s.pitch > PITCH_CONSTRAINT_TOP
                && s.pitch < 270.0
                && direction.contains(Direction::NORTH)
            {
                s.pitch = PITCH_CONSTRAINT_TOP;
            } else if s.pitch < PITCH_CONSTRAINT_BOTTOM
                && s.pitch > 90.0
                && direction.contains(Direction::SOUTH)
            {
                s.pitch = PITCH_CONSTRAINT_BOTTOM;
            }
        } else {
            let (roll, flip) = s.roll.transition(s.pitch);
            s.roll = roll;
            if flip {
                s.world_up = -s.world_up;
                s.right = -s.right;
            }
        }

        s.update_basis();
    }

    /// North/east zooms in, south/west zooms out, clamped to `[1, 45]`.
    pub fn zoom(&mut self, direction: Direction, magnitude: f32) {
        let s = &mut self.state;
        if direction.intersects(Direction::NORTH | Direction::EAST) {
            s.zoom -= magnitude;
        }
        if direction.intersects(Direction::SOUTH | Direction::WEST) {
            s.zoom += magnitude;
        }
        s.zoom = s.zoom.clamp(ZOOM_MIN, ZOOM_MAX);
    }

    /// Jump to a canonical view `distance` away from the origin.
    pub fn snap_to(&mut self, view: Option<SnapView>, distance: f32) {
        let s = &mut self.state;
        let view = view.unwrap_or_else(|| s.last_snap_view.next());
        let placement = view.placement(distance);

        s.position = placement.position;
        s.yaw = placement.yaw;
        s.pitch = placement.pitch;
        s.world_up = glm::vec3(0.0, 1.0, 0.0);
        s.roll = Default::default();
        s.last_snap_view = view;
        s.update_basis();

        debug!("Camera snapped to {view} view at distance {distance}");
    }

    /// Back to the start-up position, orientation and zoom.
    pub fn reset(&mut self) {
        self.state.reset();
        debug!("Camera reset");
    }

    /// Turns an inverted free-look camera upright without changing where it
    /// looks: pitch `p` over the top becomes `180 - p` with yaw swung half a
    /// turn, then pitch is pinned inside the constrained band.
    ///
    /// Called when pitch becomes constrained again, since constrained
    /// rotation never runs the roll state machine.
    pub fn level_roll(&mut self) {
        let s = &mut self.state;
        if !s.roll.is_inverted() {
            return;
        }

        s.yaw = wrap_degrees(s.yaw + 180.0);
        s.pitch = wrap_degrees(180.0 - s.pitch);
        if s.pitch > PITCH_CONSTRAINT_TOP && s.pitch <= 180.0 {
            s.pitch = PITCH_CONSTRAINT_TOP;
        } else if s.pitch < PITCH_CONSTRAINT_BOTTOM && s.pitch > 180.0 {
            s.pitch = PITCH_CONSTRAINT_BOTTOM;
        }
        s.world_up = glm::vec3(0.0, 1.0, 0.0);
        s.roll = Default::default();
        s.update_basis();

        debug!("Camera levelled at yaw {} pitch {}", s.yaw, s.pitch);
    }

    /// Look-at matrix from the eye along `front`.
    pub fn view_matrix(&self) -> glm::Mat4 {
        let s = &self.state;
        glm::look_at(&s.position, &(s.position + s.front), &s.world_up)
    }

    /// Perspective projection using the zoom as vertical field of view.
    pub fn projection_matrix(&self, aspect: f32, near: f32, far: f32) -> glm::Mat4 {
        glm::perspective(aspect, self.state.zoom.to_radians(), near, far)
    }
}

impl Default for CameraController {
    fn default() -> Self {
        Self::new(CameraState::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::RollState;

    const EPS: f32 = 1e-4;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < EPS
    }

    fn approx_vec(a: glm::Vec3, b: glm::Vec3) -> bool {
        approx(a.x, b.x) && approx(a.y, b.y) && approx(a.z, b.z)
    }

    fn assert_orthonormal(state: &CameraState) {
        let (f, r, u) = (state.front(), state.right(), state.up());
        for v in [f, r, u] {
            assert!(approx(glm::length(&v), 1.0), "not unit: {v:?}");
        }
        assert!(glm::dot(&f, &r).abs() < EPS);
        assert!(glm::dot(&f, &u).abs() < EPS);
        assert!(glm::dot(&r, &u).abs() < EPS);
        // right-handed: right x up == -front
        assert!(approx_vec(glm::cross(&r, &u), -f));
    }

    #[test]
    fn move_follows_basis() {
        let mut cam = CameraController::default();
        cam.move_by(Direction::NORTH, 2.0);
        assert!(approx_vec(cam.state().position(), glm::vec3(0.0, 0.0, 8.0)));
        cam.move_by(Direction::EAST, 1.0);
        assert!(approx_vec(cam.state().position(), glm::vec3(1.0, 0.0, 8.0)));
        cam.move_by(Direction::SOUTH_WEST, 1.0);
        assert!(approx_vec(cam.state().position(), glm::vec3(0.0, 0.0, 9.0)));
    }

    #[test]
    fn angles_stay_in_range() {
        let mut cam = CameraController::default();
        let steps = [
            (Direction::EAST, 725.0),
            (Direction::WEST, 1000.0),
            (Direction::NORTH, 361.0),
            (Direction::SOUTH, 4000.5),
            (Direction::NORTH_WEST, 359.99),
            (Direction::SOUTH_EAST, 0.001),
        ];
        for constrain in [true, false] {
            for (dir, mag) in steps {
                cam.rotate(dir, mag, constrain);
                let (yaw, pitch) = cam.state().get_orientation();
                assert!((0.0..360.0).contains(&yaw), "yaw {yaw}");
                assert!((0.0..360.0).contains(&pitch), "pitch {pitch}");
                assert_orthonormal(cam.state());
            }
        }
    }

    #[test]
    fn negative_wrap_uses_ceil() {
        let mut cam = CameraController::default();
        cam.snap_to(Some(SnapView::Left), 5.0);
        cam.rotate(Direction::WEST, 1.5, true);
        assert_eq!(cam.state().yaw(), 359.0);
    }

    #[test]
    fn constrained_pitch_pins_at_poles() {
        let mut cam = CameraController::default();
        for _ in 0..50 {
            cam.rotate(Direction::NORTH, 7.0, true);
            assert!(cam.state().pitch() <= PITCH_CONSTRAINT_TOP);
        }
        assert_eq!(cam.state().pitch(), PITCH_CONSTRAINT_TOP);

        cam.rotate(Direction::SOUTH, 89.9, true);
        assert!(approx(cam.state().pitch(), 0.0));

        for _ in 0..50 {
            cam.rotate(Direction::SOUTH, 7.0, true);
            let pitch = cam.state().pitch();
            assert!(pitch == 0.0 || pitch >= PITCH_CONSTRAINT_BOTTOM, "pitch {pitch}");
        }
        assert_eq!(cam.state().pitch(), PITCH_CONSTRAINT_BOTTOM);
        assert_orthonormal(cam.state());
    }

    #[test]
    fn free_look_flips_once_per_crossing() {
        let mut cam = CameraController::default();
        let up = cam.state().world_up();

        cam.rotate(Direction::NORTH, 80.0, false);
        assert_eq!(cam.state().roll(), RollState::Upright);
        assert!(approx_vec(cam.state().world_up(), up));

        cam.rotate(Direction::NORTH, 20.0, false);
        assert_eq!(cam.state().roll(), RollState::Inverted);
        assert!(approx_vec(cam.state().world_up(), -up));

        // staying inside the band must not flip again
        for _ in 0..5 {
            cam.rotate(Direction::NORTH, 10.0, false);
            assert!(approx_vec(cam.state().world_up(), -up));
        }

        // back below 90 restores the original up
        cam.rotate(Direction::SOUTH, 70.0, false);
        assert_eq!(cam.state().roll(), RollState::Upright);
        assert!(approx_vec(cam.state().world_up(), up));

        for _ in 0..10 {
            cam.rotate(Direction::NORTH, 20.0, false);
            cam.rotate(Direction::SOUTH, 20.0, false);
        }
        assert!(approx_vec(cam.state().world_up(), up));
        assert_orthonormal(cam.state());
    }

    #[test]
    fn zoom_clamps() {
        let mut cam = CameraController::default();
        cam.zoom(Direction::SOUTH, 100.0);
        assert_eq!(cam.state().zoom(), ZOOM_MAX);
        cam.zoom(Direction::NORTH, 10.0);
        assert_eq!(cam.state().zoom(), 35.0);
        cam.zoom(Direction::WEST, 5.0);
        assert_eq!(cam.state().zoom(), 40.0);
        cam.zoom(Direction::EAST, 1000.0);
        assert_eq!(cam.state().zoom(), ZOOM_MIN);
    }

    #[test]
    fn snap_front_literal() {
        let mut cam = CameraController::default();
        cam.rotate(Direction::NORTH_EAST, 33.0, true);
        cam.snap_to(Some(SnapView::Front), 10.0);
        let s = cam.state();
        assert!(approx_vec(s.position(), glm::vec3(0.0, 0.0, 10.0)));
        assert_eq!(s.yaw(), 270.0);
        assert_eq!(s.pitch(), 0.0);
        assert!(approx_vec(s.front(), glm::vec3(0.0, 0.0, -1.0)));
        assert_eq!(s.last_snap_view(), SnapView::Front);
    }

    #[test]
    fn every_snap_aims_at_origin() {
        let mut cam = CameraController::default();
        for view in SnapView::ALL {
            cam.snap_to(Some(view), 10.0);
            let s = cam.state();
            let to_origin = glm::normalize(&-s.position());
            assert!(glm::dot(&s.front(), &to_origin) > 0.999, "{view} misses the origin");
            assert!(approx(glm::length(&s.position()), 10.0));
            assert_orthonormal(s);
        }
    }

    #[test]
    fn snap_none_cycles() {
        let mut cam = CameraController::default();
        cam.snap_to(Some(SnapView::Front), 10.0);
        cam.snap_to(None, 10.0);
        assert_eq!(cam.state().last_snap_view(), SnapView::Right);
        assert!(approx_vec(cam.state().position(), glm::vec3(10.0, 0.0, 0.0)));

        cam.snap_to(Some(SnapView::Diagonal), 10.0);
        cam.snap_to(None, 10.0);
        assert_eq!(cam.state().last_snap_view(), SnapView::Front);
    }

    #[test]
    fn snap_clears_inversion() {
        let mut cam = CameraController::default();
        cam.rotate(Direction::NORTH, 120.0, false);
        assert!(cam.state().roll().is_inverted());
        cam.snap_to(Some(SnapView::Back), 4.0);
        assert_eq!(cam.state().roll(), RollState::Upright);
        assert!(approx_vec(cam.state().world_up(), glm::vec3(0.0, 1.0, 0.0)));
    }

    #[test]
    fn level_roll_keeps_the_view_upright() {
        let mut cam = CameraController::default();
        cam.rotate(Direction::NORTH, 100.0, false);
        assert!(cam.state().roll().is_inverted());
        let front = cam.state().front();

        cam.level_roll();
        let s = cam.state();
        assert_eq!(s.roll(), RollState::Upright);
        assert_eq!(s.get_orientation(), (90.0, 80.0));
        assert!(approx_vec(s.world_up(), glm::vec3(0.0, 1.0, 0.0)));
        assert!(approx_vec(s.front(), front));
        assert!(s.up().y > 0.0);
        assert_orthonormal(s);

        // straight over the pole lands on the top pin
        let mut cam = CameraController::default();
        cam.rotate(Direction::NORTH, 90.0, false);
        cam.level_roll();
        assert_eq!(cam.state().pitch(), PITCH_CONSTRAINT_TOP);

        // upright cameras are left alone
        let mut cam = CameraController::default();
        cam.rotate(Direction::NORTH_EAST, 30.0, false);
        cam.level_roll();
        assert_eq!(cam.state().get_orientation(), (300.0, 30.0));
    }

    #[test]
    fn view_matrix_is_pure() {
        let cam = CameraController::default();
        let a = cam.view_matrix();
        let b = cam.view_matrix();
        assert_eq!(a, b);
        // the eye maps to the view-space origin
        let eye = cam.state().position();
        let p = a * glm::vec4(eye.x, eye.y, eye.z, 1.0);
        assert!(approx(p.x, 0.0) && approx(p.y, 0.0) && approx(p.z, 0.0));
    }

    #[test]
    fn apply_dispatches() {
        let mut cam = CameraController::default();
        cam.apply(
            CameraCommand::Zoom {
                direction: Direction::NORTH,
                magnitude: 5.0,
            },
            true,
            10.0,
        );
        assert_eq!(cam.state().zoom(), 40.0);
        cam.apply(CameraCommand::Snap(Some(SnapView::Top)), true, 3.0);
        assert!(approx_vec(cam.state().position(), glm::vec3(0.0, 3.0, 0.0)));
    }

    #[test]
    fn reset_restores_start() {
        let mut cam = CameraController::default();
        cam.move_by(Direction::NORTH, 4.0);
        cam.rotate(Direction::NORTH, 150.0, false);
        cam.zoom(Direction::NORTH, 20.0);
        cam.reset();
        let s = cam.state();
        assert!(approx_vec(s.position(), glm::vec3(0.0, 0.0, 10.0)));
        assert_eq!(s.get_orientation(), (270.0, 0.0));
        assert_eq!(s.zoom(), 45.0);
        assert_eq!(s.roll(), RollState::Upright);
    }
}
