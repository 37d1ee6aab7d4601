// Success pie chart drawn with the egui painter.

use std::f32::consts::{FRAC_PI_2, TAU};

use launch_core::{OutputId, PieInput};

use crate::palette;

/// Largest arc drawn as one convex polygon.
const MAX_CHUNK: f32 = FRAC_PI_2;
/// Angular resolution of the wedge outlines.
const ARC_STEP: f32 = 0.04;

/// Start and end angle of every slice, clockwise from 12 o'clock.
///
/// Angles are in screen space (y grows downwards), so increasing angles run
/// clockwise. Slices of an empty pie get zero-width wedges.
pub fn wedge_angles(pie: &PieInput) -> Vec<(f32, f32)> {
    let mut start = -FRAC_PI_2;
    (0..pie.slices.len())
        .map(|i| {
            let sweep = pie.fraction(i) as f32 * TAU;
            let wedge = (start, start + sweep);
            start += sweep;
            wedge
        })
        .collect()
}

/// Index of the slice under `angle` (same convention as [`wedge_angles`]).
pub fn slice_at_angle(pie: &PieInput, angle: f32) -> Option<usize> {
    // Normalise into [-π/2, 3π/2).
    let angle = (angle + FRAC_PI_2).rem_euclid(TAU) - FRAC_PI_2;
    wedge_angles(pie)
        .iter()
        .position(|&(a0, a1)| a1 > a0 && angle >= a0 && angle < a1)
}

fn arc_point(center: egui::Pos2, radius: f32, angle: f32) -> egui::Pos2 {
    center + radius * egui::vec2(angle.cos(), angle.sin())
}

fn paint_wedge(
    painter: &egui::Painter,
    center: egui::Pos2,
    radius: f32,
    (a0, a1): (f32, f32),
    color: egui::Color32,
) {
    // Split into chunks of at most 90 degrees so each polygon stays convex.
    let mut chunk_start = a0;
    while chunk_start < a1 {
        let chunk_end = (chunk_start + MAX_CHUNK).min(a1);
        let steps = ((chunk_end - chunk_start) / ARC_STEP).ceil().max(1.0) as usize;
        let mut points = Vec::with_capacity(steps + 2);
        points.push(center);
        for s in 0..=steps {
            let t = chunk_start + (chunk_end - chunk_start) * s as f32 / steps as f32;
            points.push(arc_point(center, radius, t));
        }
        painter.add(egui::Shape::convex_polygon(points, color, egui::Stroke::NONE));
        chunk_start = chunk_end;
    }
}

/// Draw the pie chart and its legend in a left-side panel.
pub fn draw_pie(ctx: &egui::Context, pie: &PieInput) {
    egui::SidePanel::left(OutputId::SuccessPie.id())
        .min_width(380.0)
        .show(ctx, |ui| {
            ui.heading(pie.title.as_str());
            ui.separator();

            let side = ui.available_width().min(360.0);
            let (response, painter) =
                ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
            let rect = response.rect;
            let center = rect.center();
            let radius = side / 2.0 - 10.0;

            let total = pie.total();
            if total == 0 {
                painter.circle_stroke(
                    center,
                    radius,
                    egui::Stroke::new(1.0, ui.visuals().weak_text_color()),
                );
                painter.text(
                    center,
                    egui::Align2::CENTER_CENTER,
                    "No data",
                    egui::FontId::proportional(16.0),
                    ui.visuals().weak_text_color(),
                );
                return;
            }

            let wedges = wedge_angles(pie);
            for (i, &wedge) in wedges.iter().enumerate() {
                paint_wedge(&painter, center, radius, wedge, palette::color(i));
            }

            // Separators between wedges.
            let nonzero = pie.slices.iter().filter(|s| s.count > 0).count();
            if nonzero > 1 {
                let stroke = egui::Stroke::new(1.5, ui.visuals().panel_fill);
                for &(a0, a1) in &wedges {
                    if a1 > a0 {
                        painter.line_segment([center, arc_point(center, radius, a0)], stroke);
                    }
                }
            }

            if let Some(pointer) = response.hover_pos() {
                let offset = pointer - center;
                if offset.length() <= radius {
                    if let Some(i) = slice_at_angle(pie, offset.y.atan2(offset.x)) {
                        let slice = &pie.slices[i];
                        response.on_hover_text_at_pointer(format!(
                            "{}: {} ({:.1}%)",
                            slice.category.label(),
                            slice.count,
                            pie.fraction(i) * 100.0
                        ));
                    }
                }
            }

            ui.add_space(8.0);
            for (i, slice) in pie.slices.iter().enumerate() {
                ui.horizontal(|ui| {
                    let (swatch, _) =
                        ui.allocate_exact_size(egui::vec2(12.0, 12.0), egui::Sense::hover());
                    ui.painter().rect_filled(swatch, 2.0, palette::color(i));
                    ui.label(format!(
                        "{}  {}  ({:.1}%)",
                        slice.category.label(),
                        slice.count,
                        pie.fraction(i) * 100.0
                    ));
                });
            }
        });
}
