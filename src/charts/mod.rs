/// Chart handlers: pure functions from control values over the read-only
/// table to chart specifications. Rendering lives in [`crate::ui::plot`];
/// nothing here touches egui, so the handlers are directly unit-testable.

pub mod pie;
pub mod scatter;

// ---------------------------------------------------------------------------
// Chart specifications
// ---------------------------------------------------------------------------

/// One wedge of a pie chart.
#[derive(Debug, Clone, PartialEq)]
pub struct PieSlice {
    pub label: String,
    /// Non-negative slice weight (a count or a sum of counts).
    pub value: f64,
}

/// Description of a pie chart, consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct PieChartSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChartSpec {
    /// Sum of all slice values.
    pub fn total(&self) -> f64 {
        self.slices.iter().map(|s| s.value).sum()
    }
}

/// One colored point series of a scatter chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterSeries {
    pub label: String,
    /// `[x, y]` pairs: payload mass against outcome class.
    pub points: Vec<[f64; 2]>,
}

/// Description of a scatter chart, consumed by the renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChartSpec {
    pub title: String,
    pub series: Vec<ScatterSeries>,
}

impl ScatterChartSpec {
    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }
}
