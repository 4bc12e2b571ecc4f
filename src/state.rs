use crate::data::filter::SiteSelection;
use crate::data::model::LaunchTable;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Fixed bounds of the payload sliders; a dashboard design choice, not
/// derived from the data.
pub const PAYLOAD_SLIDER_MIN: f64 = 0.0;
pub const PAYLOAD_SLIDER_MAX: f64 = 10_000.0;
pub const PAYLOAD_SLIDER_STEP: f64 = 1_000.0;

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset, immutable for the lifetime of the process.
    pub table: LaunchTable,

    /// Current site dropdown value.
    pub selection: SiteSelection,

    /// Payload interval held by the range sliders, inclusive on both ends.
    /// The user may drag the sliders past each other; an inverted interval
    /// simply matches no rows.
    pub payload_low: f64,
    pub payload_high: f64,
}

impl AppState {
    /// Initialise from a freshly loaded table: all sites selected, payload
    /// interval set to the observed bounds.
    pub fn new(table: LaunchTable) -> Self {
        let (low, high) = table
            .payload_bounds()
            .unwrap_or((PAYLOAD_SLIDER_MIN, PAYLOAD_SLIDER_MAX));
        Self {
            table,
            selection: SiteSelection::All,
            payload_low: low,
            payload_high: high,
        }
    }
}
