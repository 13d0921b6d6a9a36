use itertools::izip;

use crate::alignment::{AlignmentSymbol, FrequencyMatrix, parse_target};
use crate::axes::{Axes, copper_reversed_color};
use crate::error::FigureError;
use crate::penalty_profile::{Strand, axis_labels};

const COLORBAR_LABEL: &str = "-log(Frequency)";
const ROW_LABEL_SIZE: f32 = 12.0;
const COLUMN_LABEL_SIZE: f32 = 12.0;
const PENALTY_LABEL_SIZE: f32 = 10.0;
const TARGET_BOX_COLOR: &str = "#cc1f1f";
const TARGET_BOX_STROKE_WIDTH: f32 = 2.0;

#[derive(Clone, Copy, Debug)]
pub struct HeatmapOptions {
    pub strand: Strand,
    /// Color scale range for the -log10 frequencies.
    pub vmin: f64,
    pub vmax: f64,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        HeatmapOptions {
            strand: Strand::Forward,
            vmin: 0.0,
            vmax: 12.0,
        }
    }
}

/// Frequency heatmap of the alignment around one target site. Cells show
/// `-log10(frequency)` on a fixed color scale; each column is labeled
/// with its target letter and genome position (`offset` + column) and
/// gets a highlight box on the row matching that letter. The mirrored
/// top axis carries the 23 penalty tick labels for `options.strand`.
///
/// Fails without drawing anything if the target contains an unrecognized
/// symbol, the matrix shape does not match, or any frequency is not a
/// positive finite number.
pub fn render_alignment_heatmap(
    ax: &mut Axes,
    freqs: &FrequencyMatrix,
    target: &str,
    offset: i64,
    options: &HeatmapOptions,
) -> Result<(), FigureError> {
    let symbols = parse_target(target)?;
    let expected_rows = AlignmentSymbol::ROW_ORDER.len();
    if freqs.row_count() != expected_rows {
        return Err(format!(
            "frequency matrix has {} rows, expected one per symbol ({expected_rows})",
            freqs.row_count()
        )
        .into());
    }
    if freqs.column_count() != symbols.len() {
        return Err(format!(
            "frequency matrix has {} columns for a {}-symbol target",
            freqs.column_count(),
            symbols.len()
        )
        .into());
    }
    let cells = freqs.neg_log10()?;

    let columns = symbols.len();
    ax.set_x_range(0.0, columns as f64);
    ax.set_y_range(0.0, expected_rows as f64);
    ax.invert_y();

    let scale = options.vmax - options.vmin;
    for (row, values) in cells.iter().enumerate() {
        for (column, value) in values.iter().enumerate() {
            let t = ((value - options.vmin) / scale).clamp(0.0, 1.0);
            ax.fill_rect(
                column as f64,
                row as f64,
                1.0,
                1.0,
                &copper_reversed_color(t),
            );
        }
    }

    for (row, symbol) in AlignmentSymbol::ROW_ORDER.iter().enumerate() {
        ax.text_px(
            ax.left() - 8.0,
            ax.y_to_px(row as f64 + 0.5),
            &symbol.as_char().to_string(),
            "end",
            ROW_LABEL_SIZE,
            "#000000",
        );
    }

    // Column labels: target letter over its HXB2 position, and the
    // highlight box on the letter's row.
    let positions = (0..columns).map(|i| offset + i as i64);
    for (column, symbol, position) in izip!(0..columns, &symbols, positions) {
        let x = ax.x_to_px(column as f64 + 0.5);
        let below = ax.top() + ax.height();
        ax.text_px(
            x,
            below + 12.0,
            &symbol.as_char().to_string(),
            "middle",
            COLUMN_LABEL_SIZE,
            "#000000",
        );
        ax.text_px(
            x,
            below + 26.0,
            &position.to_string(),
            "middle",
            COLUMN_LABEL_SIZE,
            "#000000",
        );
        ax.outline_rect(
            column as f64,
            symbol.row_index() as f64,
            1.0,
            1.0,
            TARGET_BOX_COLOR,
            TARGET_BOX_STROKE_WIDTH,
        );
    }

    ax.top_axis_slot_labels(&axis_labels(options.strand), PENALTY_LABEL_SIZE);
    ax.colorbar(
        options.vmin,
        options.vmax,
        COLORBAR_LABEL,
        copper_reversed_color,
    );

    Ok(())
}
