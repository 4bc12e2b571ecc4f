use eframe::egui;

use crate::charts::{pie, scatter};
use crate::data::model::LaunchTable;
use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct LaunchDashApp {
    pub state: AppState,
}

impl LaunchDashApp {
    pub fn new(table: LaunchTable) -> Self {
        Self {
            state: AppState::new(table),
        }
    }
}

impl eframe::App for LaunchDashApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: title and dataset summary ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &self.state);
        });

        // ---- Central panel: controls and the two charts ----
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    panels::site_selector(ui, &mut self.state);
                    ui.add_space(8.0);

                    let pie_spec = pie::success_pie(&self.state.table, &self.state.selection);
                    plot::pie_chart(ui, &pie_spec);

                    ui.add_space(12.0);
                    panels::payload_sliders(ui, &mut self.state);
                    ui.add_space(8.0);

                    let scatter_spec = scatter::payload_scatter(
                        &self.state.table,
                        &self.state.selection,
                        self.state.payload_low,
                        self.state.payload_high,
                    );
                    plot::scatter_chart(ui, &scatter_spec);
                });
        });
    }
}
