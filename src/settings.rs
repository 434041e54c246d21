use crate::CONFY_APP_NAME;
use crate::camera::CameraState;
use crate::camera::state::{DEFAULT_PITCH, DEFAULT_YAW, DEFAULT_ZOOM};
use crate::display::{Theme, ViewMode};
use crate::error::ViewerError;

use log::warn;
use nalgebra_glm as glm;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

fn load<T>(section: &'static str) -> Result<T, ViewerError>
where
    T: Serialize + DeserializeOwned + Default,
{
    confy::load(CONFY_APP_NAME, section)
        .map_err(|e| ViewerError::from(e).with_arg("load", section))
}

fn load_or_default<T>(section: &'static str) -> T
where
    T: Serialize + DeserializeOwned + Default,
{
    load(section).unwrap_or_else(|e| {
        warn!("Using default '{section}' settings: {e}");
        T::default()
    })
}

fn store<T: Serialize>(section: &'static str, value: &T) -> Result<(), ViewerError> {
    confy::store(CONFY_APP_NAME, section, value)
        .map_err(|e| ViewerError::from(e).with_arg("store", section))
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowSettings {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            title: "ObjVis-RS - 3D Model Viewer".to_string(),
            width: 640,
            height: 480,
        }
    }
}

impl WindowSettings {
    pub fn load() -> Self {
        load_or_default("window")
    }
}

/// Start-up camera and navigation options. Input sensitivities are not
/// part of this; they reset on every run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraSettings {
    pub position: [f32; 3],
    pub yaw: f32,
    pub pitch: f32,
    pub zoom: f32,
    /// Stop pitch short of the poles instead of allowing free look.
    pub constrain_pitch: bool,
    /// Distance from the origin used by canonical view snaps.
    pub snap_distance: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            position: [0.0, 0.0, 10.0],
            yaw: DEFAULT_YAW,
            pitch: DEFAULT_PITCH,
            zoom: DEFAULT_ZOOM,
            constrain_pitch: true,
            snap_distance: 10.0,
        }
    }
}

impl CameraSettings {
    pub fn load() -> Self {
        load_or_default("camera")
    }

    pub fn initial_state(&self) -> CameraState {
        let [x, y, z] = self.position;
        CameraState::new(glm::vec3(x, y, z), self.yaw, self.pitch, self.zoom)
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppearanceSettings {
    pub theme: Theme,
    pub view_mode: ViewMode,
}

impl AppearanceSettings {
    pub fn load() -> Self {
        load_or_default("appearance")
    }

    pub fn save(&self) -> Result<(), ViewerError> {
        store("appearance", self)
    }
}

// Aggregate struct for convenience
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub window: WindowSettings,
    pub camera: CameraSettings,
    pub appearance: AppearanceSettings,
}

impl Settings {
    pub fn load() -> Self {
        Self {
            window: WindowSettings::load(),
            camera: CameraSettings::load(),
            appearance: AppearanceSettings::load(),
        }
    }
}
