use log::{info, warn};
use winit::event_loop::EventLoop;

mod app;
mod camera;
mod display;
mod error;
mod input;
mod settings;
mod time;

use app::handler::AppHandler;
use camera::SnapView;
use error::ViewerError;
use settings::Settings;

pub const CONFY_APP_NAME: &str = "objvis-rs";

fn main() -> Result<(), ViewerError> {
    env_logger::init();

    // Optional first argument: canonical view to start from
    let args: Vec<String> = std::env::args().collect();
    let initial_view = match args.get(1).map(|a| a.parse::<SnapView>()) {
        Some(Ok(view)) => Some(view),
        Some(Err(e)) => {
            warn!("{e}, starting from the configured camera");
            None
        }
        None => None,
    };

    let settings = Settings::load();
    info!("Settings loaded");

    let event_loop = EventLoop::new()?;
    let mut handler = AppHandler::new(settings, initial_view);
    event_loop.run_app(&mut handler)?;

    match handler.error.take() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}
