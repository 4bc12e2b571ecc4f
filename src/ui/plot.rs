use std::f64::consts::TAU;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points, Polygon};

use crate::charts::{PieChartSpec, ScatterChartSpec};
use crate::color::ColorMap;

/// Arc segments per full revolution when tessellating pie wedges.
const ARC_STEPS: usize = 128;

// ---------------------------------------------------------------------------
// Pie chart renderer
// ---------------------------------------------------------------------------

/// Render a [`PieChartSpec`] as filled polygon wedges on a unit circle.
pub fn pie_chart(ui: &mut Ui, spec: &PieChartSpec) {
    ui.strong(&spec.title);

    let total = spec.total();
    if spec.slices.is_empty() || total <= 0.0 {
        ui.weak("No launches match the current selection.");
        return;
    }

    let colors = ColorMap::new(spec.slices.iter().map(|s| s.label.as_str()));

    Plot::new("success_pie")
        .data_aspect(1.0)
        .height(320.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            let mut start = 0.0_f64;
            for slice in &spec.slices {
                let sweep = slice.value / total * TAU;
                if sweep <= 0.0 {
                    continue;
                }
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(wedge(start, start + sweep)))
                        .name(format!("{} ({})", slice.label, slice.value))
                        .fill_color(colors.color_for(&slice.label))
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );
                start += sweep;
            }
        });
}

/// Vertex fan for one wedge: circle centre, then the arc from `from` to `to`.
fn wedge(from: f64, to: f64) -> Vec<[f64; 2]> {
    let steps = (((to - from) / TAU * ARC_STEPS as f64).ceil() as usize).max(2);
    let mut points = Vec::with_capacity(steps + 2);
    points.push([0.0, 0.0]);
    for i in 0..=steps {
        let angle = from + (to - from) * i as f64 / steps as f64;
        points.push([angle.cos(), angle.sin()]);
    }
    points
}

// ---------------------------------------------------------------------------
// Scatter chart renderer
// ---------------------------------------------------------------------------

/// Render a [`ScatterChartSpec`]: one point series per booster category,
/// payload mass on x, outcome class (0/1) on y.
pub fn scatter_chart(ui: &mut Ui, spec: &ScatterChartSpec) {
    ui.strong(&spec.title);

    let colors = ColorMap::new(spec.series.iter().map(|s| s.label.as_str()));

    Plot::new("payload_scatter")
        .height(320.0)
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Outcome class")
        .include_y(-0.25)
        .include_y(1.25)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&series.label)
                        .color(colors.color_for(&series.label))
                        .radius(4.0),
                );
            }
        });
}
