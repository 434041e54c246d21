use std::sync::Arc;

use log::{info, trace, warn};
use winit::event::{DeviceEvent, WindowEvent};
use winit::window::Window;

use super::viewer::Viewer;
use crate::camera::{CameraCommand, SnapView};
use crate::input::{InputEvent, Key, Modifiers, WinitAdapter};
use crate::settings::{AppearanceSettings, Settings};
use crate::time::FrameClock;

pub struct EventResponse {
    pub repaint: bool,
    pub exit: bool,
}

pub struct App {
    pub window: Arc<Window>,
    viewer: Viewer,
    adapter: WinitAdapter,
    clock: FrameClock,
    settings: Settings,
}

impl App {
    pub fn new(window: Arc<Window>, settings: Settings, initial_view: Option<SnapView>) -> Self {
        let mut viewer = Viewer::new(&settings);
        if let Some(view) = initial_view {
            viewer.snap_to_start(CameraCommand::Snap(Some(view)));
        }

        let app = Self {
            window,
            viewer,
            adapter: WinitAdapter::new(),
            clock: FrameClock::new(),
            settings,
        };
        app.refresh_title();
        app
    }

    pub fn handle_event(&mut self, event: &WindowEvent) -> EventResponse {
        if let WindowEvent::CloseRequested = event {
            return EventResponse {
                repaint: false,
                exit: true,
            };
        }

        let Some(input) = self.adapter.window_event(event) else {
            return EventResponse {
                repaint: false,
                exit: false,
            };
        };

        // Escape and Ctrl+W quit before the mapper ever sees them
        if let InputEvent::Key {
            key,
            pressed: true,
            modifiers,
        } = input
        {
            let ctrl_w = modifiers.contains(Modifiers::CTRL) && key == Key::Letter('w');
            if key == Key::Escape || ctrl_w {
                info!("Quitting application...");
                return EventResponse {
                    repaint: false,
                    exit: true,
                };
            }
        }

        self.viewer.queue(input);
        EventResponse {
            repaint: true,
            exit: false,
        }
    }

    pub fn handle_device_event(&mut self, event: &DeviceEvent) {
        if let Some(input) = self.adapter.device_event(event) {
            self.viewer.queue(input);
        }
    }

    /// One frame: tick the clock, run queued and held input, publish state.
    pub fn frame(&mut self) {
        let delta_ms = self.clock.tick();
        let changes = self.viewer.run_frame(delta_ms);

        if changes.status {
            self.refresh_title();
        }
        if changes.appearance {
            self.settings.appearance = AppearanceSettings {
                theme: self.viewer.theme(),
                view_mode: self.viewer.view_mode(),
            };
            if let Err(e) = self.settings.appearance.save() {
                warn!("Failed to save appearance settings: {e}");
            }
        }

        let size = self.window.inner_size();
        if size.width > 0 && size.height > 0 {
            let aspect = size.width as f32 / size.height as f32;
            trace!(
                "frame {}: dt={delta_ms:.2}ms clear={:?} view_proj={:?}",
                self.clock.frame_count(),
                self.viewer.theme().clear_color(),
                self.viewer.view_projection(aspect)
            );
        }
    }

    fn refresh_title(&self) {
        self.window.set_title(&format!(
            "{} - {}",
            self.settings.window.title,
            self.viewer.status_line()
        ));
    }
}
