use eframe::egui::{ComboBox, RichText, Slider, Ui};

use crate::data::filter::SiteSelection;
use crate::state::{AppState, PAYLOAD_SLIDER_MAX, PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_STEP};

// ---------------------------------------------------------------------------
// Top bar – title and dataset summary
// ---------------------------------------------------------------------------

pub fn top_bar(ui: &mut Ui, state: &AppState) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new("Launch Records Dashboard").size(28.0));
    });
    ui.horizontal(|ui: &mut Ui| {
        ui.label(format!(
            "{} launches across {} sites",
            state.table.len(),
            state.table.sites.len()
        ));
        if let Some((lo, hi)) = state.table.payload_bounds() {
            ui.separator();
            ui.label(format!("payload {lo:.0} to {hi:.0} kg"));
        }
    });
}

// ---------------------------------------------------------------------------
// Controls – site dropdown and payload range sliders
// ---------------------------------------------------------------------------

/// Render the launch-site dropdown. Options are the "All Sites" sentinel
/// plus the distinct sites derived from the table at load time.
pub fn site_selector(ui: &mut Ui, state: &mut AppState) {
    // Clone so we can mutate the selection inside the loop.
    let sites = state.table.sites.clone();

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Launch site:");
        ComboBox::from_id_salt("site_select")
            .selected_text(state.selection.label().to_owned())
            .width(240.0)
            .show_ui(ui, |ui: &mut Ui| {
                let all_selected = state.selection == SiteSelection::All;
                if ui
                    .selectable_label(all_selected, SiteSelection::All.label())
                    .clicked()
                {
                    state.selection = SiteSelection::All;
                }
                for site in &sites {
                    let is_selected =
                        matches!(&state.selection, SiteSelection::Site(s) if s == site);
                    if ui.selectable_label(is_selected, site).clicked() {
                        state.selection = SiteSelection::Site(site.clone());
                    }
                }
            });
    });
}

/// Render the payload range sliders (inclusive interval, 1000 kg steps).
pub fn payload_sliders(ui: &mut Ui, state: &mut AppState) {
    ui.label("Payload range (kg):");
    ui.add(
        Slider::new(&mut state.payload_low, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("min"),
    );
    ui.add(
        Slider::new(&mut state.payload_high, PAYLOAD_SLIDER_MIN..=PAYLOAD_SLIDER_MAX)
            .step_by(PAYLOAD_SLIDER_STEP)
            .text("max"),
    );
}
