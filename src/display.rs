use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn next(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// RGBA clear colour for the viewport.
    pub fn clear_color(self) -> [f32; 4] {
        match self {
            Theme::Light => [0.7, 0.7, 0.7, 1.0],
            Theme::Dark => [0.117_187_5, 0.117_187_5, 0.117_187_5, 1.0],
        }
    }
}

/// How the model surface is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    Texture,
    FlatShade,
    Wireframe,
}

impl ViewMode {
    pub fn next(self) -> Self {
        match self {
            ViewMode::Texture => ViewMode::FlatShade,
            ViewMode::FlatShade => ViewMode::Wireframe,
            ViewMode::Wireframe => ViewMode::Texture,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycles() {
        assert_eq!(Theme::default().next(), Theme::Light);
        assert_eq!(Theme::Light.next(), Theme::Dark);
        let mut mode = ViewMode::default();
        for _ in 0..3 {
            mode = mode.next();
        }
        assert_eq!(mode, ViewMode::Texture);
        assert_eq!(ViewMode::Texture.next(), ViewMode::FlatShade);
    }
}
