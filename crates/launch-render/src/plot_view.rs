// Payload vs. outcome scatter chart via egui_plot.

use egui_plot::{Legend, Plot, PlotBounds, Points};
use launch_core::{OutputId, PayloadRange, ScatterInput};

use crate::palette;

/// Vertical padding around the 0/1 outcome rows.
const Y_MARGIN: f64 = 0.25;

/// Plot bounds for the scatter chart: x pinned to the payload range,
/// y spanning both outcome classes. A zero-width range is widened so the
/// plot stays drawable.
pub fn scatter_bounds(x: PayloadRange) -> PlotBounds {
    let (low, high) = if x.width() > 0.0 {
        (x.low, x.high)
    } else {
        (x.low - 0.5, x.high + 0.5)
    };
    PlotBounds::from_min_max([low, -Y_MARGIN], [high, 1.0 + Y_MARGIN])
}

/// Draw the scatter chart in the central panel.
pub fn draw_scatter(ctx: &egui::Context, scatter: &ScatterInput) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading(scatter.title.as_str());

        // One series per color group so the legend lists booster versions.
        let series: Vec<Points> = scatter
            .groups()
            .into_iter()
            .enumerate()
            .map(|(i, group)| {
                let points: Vec<[f64; 2]> = scatter
                    .group_points(group)
                    .map(|p| [p.payload_mass_kg, p.outcome.class() as f64])
                    .collect();
                Points::new(points)
                    .name(group)
                    .color(palette::color(i))
                    .radius(4.0)
            })
            .collect();

        let bounds = scatter_bounds(scatter.x_bounds);

        Plot::new(OutputId::PayloadScatter.id())
            .x_axis_label("Payload Mass (kg)")
            .y_axis_label("class")
            .legend(Legend::default())
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .label_formatter(|name, value| {
                if name.is_empty() {
                    String::new()
                } else {
                    format!("{name}\npayload: {:.0} kg\nclass: {:.0}", value.x, value.y)
                }
            })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(bounds);
                for points in series {
                    plot_ui.points(points);
                }
            });
    });
}
