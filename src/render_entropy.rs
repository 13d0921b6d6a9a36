use crate::axes::{Axes, AxisSide, decimal_ticks};
use crate::guide_table::GuideTable;
use crate::regression::least_squares;

const SCATTER_RADIUS: f32 = 3.0;
const SCATTER_COLOR: &str = "#000000";
const FIT_LINE_WIDTH: f32 = 1.5;
const AXIS_LABEL_SIZE: f32 = 16.0;
const X_AXIS_LABEL: &str = "Entropy (bits)";
const Y_AXIS_LABEL: &str = "Predicted percent cleaved";

const ENTROPY_MAX: f64 = 8.0;

// Fixed zone of interest: variable target sites that still cleave poorly.
const HIGHLIGHT_ENTROPY_MIN: f64 = 0.5;
const HIGHLIGHT_ENTROPY_MAX: f64 = 5.0;
const HIGHLIGHT_CLEAVED_MIN: f64 = -1.0;
const HIGHLIGHT_CLEAVED_MAX: f64 = 9.0;
const HIGHLIGHT_COLOR: &str = "#cc1f1f";
const HIGHLIGHT_STROKE_WIDTH: f32 = 2.0;

/// Percent cleaved against target-site entropy, with a least-squares
/// trend line and the fixed low-cleavage highlight box.
pub fn render_entropy_plot(ax: &mut Axes, table: &GuideTable) {
    ax.set_x_range(0.0, ENTROPY_MAX);
    ax.set_y_range(0.0, 100.0);

    let points = table.entropy_points();
    ax.scatter(&points, SCATTER_RADIUS, SCATTER_COLOR);

    // Trend line across the observed entropy extent; degenerate input
    // (fewer than two distinct x values) draws none.
    if let Some(fit) = least_squares(&points) {
        let x_min = points.iter().map(|(x, _)| *x).fold(f64::INFINITY, f64::min);
        let x_max = points
            .iter()
            .map(|(x, _)| *x)
            .fold(f64::NEG_INFINITY, f64::max);
        ax.line_data(
            (x_min, fit.y_at(x_min)),
            (x_max, fit.y_at(x_max)),
            SCATTER_COLOR,
            FIT_LINE_WIDTH,
        );
    }

    ax.outline_rect(
        HIGHLIGHT_ENTROPY_MIN,
        HIGHLIGHT_CLEAVED_MIN,
        HIGHLIGHT_ENTROPY_MAX - HIGHLIGHT_ENTROPY_MIN,
        HIGHLIGHT_CLEAVED_MAX - HIGHLIGHT_CLEAVED_MIN,
        HIGHLIGHT_COLOR,
        HIGHLIGHT_STROKE_WIDTH,
    );

    ax.draw_left_spine();
    ax.draw_bottom_spine();
    ax.x_ticks(&decimal_ticks(0.0, ENTROPY_MAX), AxisSide::Bottom);
    ax.y_ticks(&decimal_ticks(0.0, 100.0));
    ax.x_label(X_AXIS_LABEL, AXIS_LABEL_SIZE, AxisSide::Bottom);
    ax.y_label(Y_AXIS_LABEL, AXIS_LABEL_SIZE);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide_table::GuideRecord;

    #[test]
    fn test_draws_scatter_fit_and_highlight() {
        let table = GuideTable::new(vec![
            GuideRecord::new(790, 80.0, 1.0),
            GuideRecord::new(2085, 60.0, 3.0),
            GuideRecord::new(5041, 20.0, 7.0),
        ]);
        let mut ax = Axes::new(60.0, 40.0, 500.0, 300.0);
        render_entropy_plot(&mut ax, &table);
        let svg = ax.into_group().to_string();
        assert_eq!(svg.matches("<circle").count(), 3);
        assert!(svg.contains(HIGHLIGHT_COLOR));
        assert!(svg.contains(X_AXIS_LABEL));
        // One fit line on top of the spines and ticks.
        assert!(svg.matches("<line").count() > 2);
    }

    #[test]
    fn test_no_fit_line_without_x_variance() {
        let table = GuideTable::new(vec![
            GuideRecord::new(790, 80.0, 2.0),
            GuideRecord::new(2085, 60.0, 2.0),
        ]);
        let mut ax = Axes::new(0.0, 0.0, 100.0, 100.0);
        render_entropy_plot(&mut ax, &table);
        let with_fit = ax.into_group().to_string().matches("<line").count();

        let mut ax = Axes::new(0.0, 0.0, 100.0, 100.0);
        render_entropy_plot(&mut ax, &GuideTable::default());
        let without_points = ax.into_group().to_string().matches("<line").count();

        // Same line count as an empty table: spines and ticks only.
        assert_eq!(with_fit, without_points);
    }
}
