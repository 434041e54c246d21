use std::sync::Arc;
use std::time::{Duration, Instant};

use log::{error, info};
use winit::application::ApplicationHandler;
use winit::event::{DeviceEvent, DeviceId, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow};
use winit::window::{Window, WindowId};

use crate::app::app::App;
use crate::camera::SnapView;
use crate::error::ViewerError;
use crate::settings::Settings;

const FRAME_INTERVAL: Duration = Duration::from_millis(16);

pub struct AppHandler {
    pub app: Option<App>,
    pub settings: Settings,
    pub initial_view: Option<SnapView>,
    /// Set when start-up fails inside the event loop
    pub error: Option<ViewerError>,
}

impl AppHandler {
    pub fn new(settings: Settings, initial_view: Option<SnapView>) -> Self {
        Self {
            app: None,
            settings,
            initial_view,
            error: None,
        }
    }
}

impl ApplicationHandler for AppHandler {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.app.is_none() {
            let window_attrs = Window::default_attributes()
                .with_title(self.settings.window.title.clone())
                .with_inner_size(winit::dpi::LogicalSize::new(
                    self.settings.window.width as f64,
                    self.settings.window.height as f64,
                ));

            match event_loop.create_window(window_attrs) {
                Ok(window) => {
                    info!("Window created");
                    self.app = Some(App::new(
                        Arc::new(window),
                        self.settings.clone(),
                        self.initial_view,
                    ));
                }
                Err(e) => {
                    error!("Failed to create window: {e}");
                    self.error = Some(e.into());
                    event_loop.exit();
                }
            }
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let Some(app) = &mut self.app {
            let response = app.handle_event(&event);
            if response.repaint {
                app.window.request_redraw();
            }
            if response.exit {
                event_loop.exit();
            }
        }
    }

    fn device_event(
        &mut self,
        _event_loop: &ActiveEventLoop,
        _device_id: DeviceId,
        event: DeviceEvent,
    ) {
        if let Some(app) = &mut self.app {
            app.handle_device_event(&event);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if let Some(app) = &mut self.app {
            app.frame();
        }
        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + FRAME_INTERVAL));
    }
}
