use std::fmt;
use std::str::FromStr;

use nalgebra_glm as glm;

use super::state::{PITCH_CONSTRAINT_BOTTOM, PITCH_CONSTRAINT_TOP};

/// Pitch (degrees, wrapped) that aims along `-(1, 1, 1)`.
const DIAGONAL_PITCH: f32 = 324.735_6;

/// Fixed camera placements framing the origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapView {
    /// On +Z looking at the origin
    Front,
    /// On +X
    Right,
    /// On -Z
    Back,
    /// On -X
    Left,
    /// On +Y looking down
    Top,
    /// On -Y looking up
    Bottom,
    /// Between +X, +Y and +Z
    Diagonal,
}

/// Where a canonical view puts the camera.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub position: glm::Vec3,
    pub yaw: f32,
    pub pitch: f32,
}

impl SnapView {
    /// Cycle order.
    pub const ALL: [SnapView; 7] = [
        SnapView::Front,
        SnapView::Right,
        SnapView::Back,
        SnapView::Left,
        SnapView::Top,
        SnapView::Bottom,
        SnapView::Diagonal,
    ];

    pub fn index(self) -> usize {
        match self {
            SnapView::Front => 0,
            SnapView::Right => 1,
            SnapView::Back => 2,
            SnapView::Left => 3,
            SnapView::Top => 4,
            SnapView::Bottom => 5,
            SnapView::Diagonal => 6,
        }
    }

    pub fn next(self) -> SnapView {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            SnapView::Front => "front",
            SnapView::Right => "right",
            SnapView::Back => "back",
            SnapView::Left => "left",
            SnapView::Top => "top",
            SnapView::Bottom => "bottom",
            SnapView::Diagonal => "diagonal",
        }
    }

    /// Position and angles for this view at `distance` from the origin.
    pub fn placement(self, distance: f32) -> Placement {
        let d = distance;
        let (position, yaw, pitch) = match self {
            SnapView::Front => (glm::vec3(0.0, 0.0, d), 270.0, 0.0),
            SnapView::Right => (glm::vec3(d, 0.0, 0.0), 180.0, 0.0),
            SnapView::Back => (glm::vec3(0.0, 0.0, -d), 90.0, 0.0),
            SnapView::Left => (glm::vec3(-d, 0.0, 0.0), 0.0, 0.0),
            SnapView::Top => (glm::vec3(0.0, d, 0.0), 270.0, PITCH_CONSTRAINT_BOTTOM),
            SnapView::Bottom => (glm::vec3(0.0, -d, 0.0), 270.0, PITCH_CONSTRAINT_TOP),
            SnapView::Diagonal => {
                let c = d / 3.0_f32.sqrt();
                (glm::vec3(c, c, c), 225.0, DIAGONAL_PITCH)
            }
        };
        Placement {
            position,
            yaw,
            pitch,
        }
    }
}

impl fmt::Display for SnapView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SnapView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|v| v.name() == lower)
            .ok_or_else(|| format!("unknown view '{s}'"))
    }
}
