// Page heading and the control panel: site dropdown and payload range.

use launch_core::catalog::{self, DropdownOption};
use launch_core::{Control, Dashboard, PayloadRange, SiteSelection};

/// Heading shown across the top of the window.
pub const DASHBOARD_TITLE: &str = "SpaceX Launch Records Dashboard";

/// UI-only state that doesn't belong in the dashboard.
pub struct UiState {
    /// Dropdown entries, derived once from the site catalog.
    pub options: Vec<DropdownOption>,
    /// Text typed into the dropdown's search box.
    pub site_search: String,
}

impl UiState {
    pub fn new(dashboard: &Dashboard) -> Self {
        Self {
            options: catalog::dropdown_options(dashboard.sites()),
            site_search: String::new(),
        }
    }

    /// Dropdown entries matching the search box. The "All Sites" entry is
    /// always listed.
    pub fn visible_options(&self) -> impl Iterator<Item = &DropdownOption> {
        let query = self.site_search.trim().to_lowercase();
        self.options.iter().filter(move |option| {
            option.value == SiteSelection::All
                || query.is_empty()
                || option.label.to_lowercase().contains(&query)
        })
    }
}

/// Order the slider endpoints after a drag so the handle being moved pushes
/// the other one instead of crossing it.
pub fn resolve_range(mut low: f64, mut high: f64, low_moved: bool) -> PayloadRange {
    if low > high {
        if low_moved {
            high = low;
        } else {
            low = high;
        }
    }
    PayloadRange::new(low, high)
}

/// Whether a slider response comes from the user moving it.
///
/// `Slider` re-applies its range clamp and step rounding to the bound value
/// every frame and reports that as `changed`, so an initial value off the
/// step grid would otherwise be committed without any input.
fn user_edited(response: &egui::Response) -> bool {
    response.changed()
        && (response.dragged()
            || response.drag_stopped()
            || response.clicked()
            || response.is_pointer_button_down_on()
            || response.has_focus())
}

pub fn draw_header(ctx: &egui::Context) {
    egui::TopBottomPanel::top("header").show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.label(
                egui::RichText::new(DASHBOARD_TITLE)
                    .size(40.0)
                    .color(egui::Color32::from_rgb(0x50, 0x3D, 0x36)),
            );
        });
    });
}

/// Draw the right-side control panel. Returns `true` if any output was
/// recomputed.
pub fn draw_controls(ctx: &egui::Context, dashboard: &mut Dashboard, ui_state: &mut UiState) -> bool {
    let mut changed = false;

    egui::SidePanel::right("controls")
        .min_width(260.0)
        .show(ctx, |ui| {
            ui.heading("Filters");
            ui.separator();

            // --- Launch site ---
            ui.label("Launch Site");
            let mut site = dashboard.state().site.clone();
            egui::ComboBox::from_id_salt(Control::SiteDropdown.id())
                .selected_text(site.label().to_string())
                .width(240.0)
                .show_ui(ui, |ui| {
                    ui.add(
                        egui::TextEdit::singleline(&mut ui_state.site_search)
                            .hint_text("Search sites"),
                    );
                    for option in ui_state.visible_options() {
                        ui.selectable_value(&mut site, option.value.clone(), option.label.as_str());
                    }
                });
            if !dashboard.set_site(site).is_empty() {
                changed = true;
            }

            ui.separator();

            // --- Payload ---
            ui.label("Payload range (Kg):");
            let slider = dashboard.config().slider;
            let current = dashboard.state().payload;
            let (mut low, mut high) = (current.low, current.high);
            let low_moved = user_edited(&ui.add(
                egui::Slider::new(&mut low, slider.min..=slider.max)
                    .step_by(slider.step)
                    .text("min"),
            ));
            let high_moved = user_edited(&ui.add(
                egui::Slider::new(&mut high, slider.min..=slider.max)
                    .step_by(slider.step)
                    .text("max"),
            ));
            ui.horizontal_wrapped(|ui| {
                for mark in slider.marks() {
                    ui.small(format!("{mark:.0}"));
                }
            });
            if low_moved || high_moved {
                // The handle left alone keeps its committed value, not the
                // slider's rounded copy.
                let low = if low_moved { low } else { current.low };
                let high = if high_moved { high } else { current.high };
                let range = resolve_range(low, high, low_moved).clamp_to(&slider);
                if !dashboard.set_payload(range).is_empty() {
                    changed = true;
                }
            }

            ui.separator();

            // --- Readouts ---
            if let Some(scatter) = dashboard.scatter() {
                let successes = scatter
                    .points
                    .iter()
                    .filter(|p| p.outcome.is_success())
                    .count();
                let in_view = scatter
                    .points
                    .iter()
                    .filter(|p| scatter.x_bounds.contains(p.payload_mass_kg))
                    .count();
                ui.label(format!("Launches: {}", scatter.points.len()));
                ui.label(format!("Successes: {successes}"));
                ui.label(format!("Inside payload range: {in_view}"));
            }
        });

    changed
}
