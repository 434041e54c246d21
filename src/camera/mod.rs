pub mod controller;
pub mod direction;
pub mod roll;
pub mod snap;
pub mod state;

pub use controller::{CameraCommand, CameraController};
pub use direction::Direction;
pub use roll::RollState;
pub use snap::SnapView;
pub use state::CameraState;
