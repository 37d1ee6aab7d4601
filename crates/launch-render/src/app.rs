// ApplicationHandler, event loop, dashboard orchestration.

use egui_winit_vulkano::{Gui, GuiConfig};
use launch_core::Dashboard;
use tracing::{debug, error, info};
use vulkano::sync::GpuFuture;
use winit::{
    application::ApplicationHandler, event::WindowEvent, event_loop::ActiveEventLoop,
    window::WindowId,
};

use crate::{
    error::RenderError,
    pie_view, plot_view,
    renderer::Renderer,
    ui::{self, UiState, DASHBOARD_TITLE},
};

const WINDOW_SIZE: [u32; 2] = [1400, 860];

pub struct App {
    renderer: Option<Renderer>,
    gui: Option<Gui>,
    dashboard: Dashboard,
    ui_state: UiState,
    /// Startup failure that ended the event loop, reported by [`App::finish`].
    fatal: Option<RenderError>,
}

impl App {
    pub fn new(dashboard: Dashboard) -> Self {
        let ui_state = UiState::new(&dashboard);
        Self {
            renderer: None,
            gui: None,
            dashboard,
            ui_state,
            fatal: None,
        }
    }

    /// Consume the app after the event loop returns.
    pub fn finish(self) -> Result<(), RenderError> {
        match self.fatal {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.renderer.is_some() {
            return;
        }

        let renderer = match Renderer::new(event_loop, DASHBOARD_TITLE, WINDOW_SIZE) {
            Ok(r) => r,
            Err(err) => {
                error!("{err}");
                self.fatal = Some(err);
                event_loop.exit();
                return;
            }
        };

        let gui = Gui::new(
            event_loop,
            renderer.surface.clone(),
            renderer.queue.clone(),
            renderer.swapchain_format(),
            GuiConfig {
                is_overlay: false,
                ..Default::default()
            },
        );
        gui.context().set_visuals(egui::Visuals::light());

        // Request the very first frame.
        renderer.window.request_redraw();
        info!(sites = self.dashboard.sites().len(), "dashboard window ready");

        self.renderer = Some(renderer);
        self.gui = Some(gui);
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, event: WindowEvent) {
        // Let egui process the event first.
        if let Some(gui) = self.gui.as_mut() {
            gui.update(&event);
        }

        match event {
            WindowEvent::CloseRequested => {
                info!("dashboard window closed");
                event_loop.exit();
            }
            WindowEvent::Resized(_) => {
                if let Some(renderer) = self.renderer.as_mut() {
                    renderer.recreate_swapchain = true;
                }
            }
            WindowEvent::RedrawRequested => {
                self.render_frame();
                return;
            }
            _ => {}
        }

        // Any input / resize event may change egui state, so repaint.
        if let Some(renderer) = self.renderer.as_ref() {
            renderer.window.request_redraw();
        }
    }
}

impl App {
    fn render_frame(&mut self) {
        let Some(renderer) = self.renderer.as_mut() else {
            return;
        };
        let Some((image_index, acquire_future)) = renderer.begin_frame() else {
            return;
        };
        let before_future = renderer.take_previous_frame_end().join(acquire_future);

        // Run the egui immediate-mode UI. Controls are laid out first so the
        // charts below them already show the recomputed figures.
        let Some(gui) = self.gui.as_mut() else {
            return;
        };
        let dashboard = &mut self.dashboard;
        let ui_state = &mut self.ui_state;
        let mut changed = false;
        gui.immediate_ui(|gui| {
            let ctx = gui.context();
            ui::draw_header(&ctx);
            changed = ui::draw_controls(&ctx, dashboard, ui_state);
            if let Some(pie) = dashboard.pie() {
                pie_view::draw_pie(&ctx, pie);
            }
            if let Some(scatter) = dashboard.scatter() {
                plot_view::draw_scatter(&ctx, scatter);
            }
        });

        if changed {
            debug!(site = self.dashboard.state().site.value(), "controls changed");
            // Closing popups and hover state settle on the next frame.
            renderer.window.request_redraw();
        }

        let image_view = renderer.image_views[image_index as usize].clone();
        let after_future = gui.draw_on_image(before_future, image_view);
        let final_future = renderer.present(after_future, image_index);
        renderer.end_frame(final_future);
    }
}
