pub mod app;
pub mod error;
pub mod palette;
pub mod pie_view;
pub mod plot_view;
pub mod renderer;
pub mod ui;

use app::App;
use launch_core::Dashboard;
use winit::event_loop::EventLoop;

pub use error::RenderError;

/// Open the dashboard window and block until it is closed.
pub fn run(dashboard: Dashboard) -> Result<(), RenderError> {
    let event_loop = EventLoop::new()?;
    let mut app = App::new(dashboard);
    event_loop.run_app(&mut app)?;
    app.finish()
}
