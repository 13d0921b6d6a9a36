use crate::axes::{Axes, AxisSide, decimal_ticks};
use crate::guide_table::GuideTable;
use crate::hxb2;

const SCATTER_RADIUS: f32 = 3.0;
const SCATTER_COLOR: &str = "#000000";
const AXIS_LABEL_SIZE: f32 = 16.0;
const X_AXIS_LABEL: &str = "Position in HXB2";
const Y_AXIS_LABEL: &str = "Predicted percent cleaved";

#[derive(Clone, Copy, Debug)]
pub struct GenomePlotOptions {
    /// Genome coordinate range of the x axis.
    pub xlims: (f64, f64),
    /// Mirror the position axis to the top of the panel instead of
    /// labeling the bottom edge.
    pub top_axis: bool,
}

impl Default for GenomePlotOptions {
    fn default() -> Self {
        GenomePlotOptions {
            xlims: (0.0, hxb2::GENOME_LENGTH as f64),
            top_axis: false,
        }
    }
}

/// Percent cleaved against HXB2 start position for each gRNA. Positions
/// outside `xlims` are not validated, just clipped by the panel range.
pub fn render_genome_plot(ax: &mut Axes, table: &GuideTable, options: &GenomePlotOptions) {
    ax.set_x_range(options.xlims.0, options.xlims.1);
    ax.set_y_range(0.0, 100.0);

    ax.scatter(&table.genome_points(), SCATTER_RADIUS, SCATTER_COLOR);

    ax.draw_left_spine();
    ax.draw_bottom_spine();
    ax.y_ticks(&decimal_ticks(0.0, 100.0));
    ax.y_label(Y_AXIS_LABEL, AXIS_LABEL_SIZE);

    // The bottom edge never carries position ticks; with a top axis the
    // tick labels move up there along with the axis label.
    if options.top_axis {
        ax.x_ticks(&decimal_ticks(options.xlims.0, options.xlims.1), AxisSide::Top);
        ax.x_label(X_AXIS_LABEL, AXIS_LABEL_SIZE, AxisSide::Top);
    } else {
        ax.x_label(X_AXIS_LABEL, AXIS_LABEL_SIZE, AxisSide::Bottom);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guide_table::GuideRecord;

    fn table() -> GuideTable {
        GuideTable::new(vec![
            GuideRecord::new(790, 62.5, 3.1),
            GuideRecord::new(9800, 50.0, 4.0), // past the genome end
        ])
    }

    #[test]
    fn test_clips_out_of_range_points() {
        let mut ax = Axes::new(60.0, 40.0, 500.0, 300.0);
        render_genome_plot(&mut ax, &table(), &GenomePlotOptions::default());
        let svg = ax.into_group().to_string();
        assert_eq!(svg.matches("<circle").count(), 1);
        assert!(svg.contains(Y_AXIS_LABEL));
        assert!(svg.contains(X_AXIS_LABEL));
    }

    #[test]
    fn test_top_axis_carries_position_ticks() {
        let mut ax = Axes::new(60.0, 40.0, 500.0, 300.0);
        let options = GenomePlotOptions {
            top_axis: true,
            ..Default::default()
        };
        render_genome_plot(&mut ax, &table(), &options);
        let svg = ax.into_group().to_string();
        assert!(svg.contains(">9000<"));

        let mut ax = Axes::new(60.0, 40.0, 500.0, 300.0);
        render_genome_plot(&mut ax, &table(), &GenomePlotOptions::default());
        let svg = ax.into_group().to_string();
        assert!(!svg.contains(">9000<"));
    }
}
