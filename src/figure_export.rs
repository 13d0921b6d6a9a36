use std::collections::HashMap;

use crate::HXB2_ORFS;
use crate::alignment::FrequencyMatrix;
use crate::axes::{Axes, new_document};
use crate::error::FigureError;
use crate::guide_table::GuideTable;
use crate::hxb2::Hxb2Orfs;
use crate::render_entropy::render_entropy_plot;
use crate::render_genome::{GenomePlotOptions, render_genome_plot};
use crate::render_heatmap::{HeatmapOptions, render_alignment_heatmap};
use crate::render_orfs::render_orf_diagram;

const W: f32 = 640.0;
const H: f32 = 480.0;
const PANEL_LEFT: f32 = 80.0;
const PANEL_TOP: f32 = 70.0;
const PANEL_RIGHT_MARGIN: f32 = 90.0;
const PANEL_BOTTOM_MARGIN: f32 = 60.0;
const ORF_PANEL_H: f32 = 220.0;

fn panel() -> Axes {
    Axes::new(
        PANEL_LEFT,
        PANEL_TOP,
        W - PANEL_LEFT - PANEL_RIGHT_MARGIN,
        H - PANEL_TOP - PANEL_BOTTOM_MARGIN,
    )
}

pub fn export_genome_svg(table: &GuideTable, options: &GenomePlotOptions) -> String {
    let mut ax = panel();
    render_genome_plot(&mut ax, table, options);
    new_document(W, H).add(ax.into_group()).to_string()
}

pub fn export_entropy_svg(table: &GuideTable) -> String {
    let mut ax = panel();
    render_entropy_plot(&mut ax, table);
    new_document(W, H).add(ax.into_group()).to_string()
}

pub fn export_heatmap_svg(
    freqs: &FrequencyMatrix,
    target: &str,
    offset: i64,
    options: &HeatmapOptions,
) -> Result<String, FigureError> {
    let mut ax = panel();
    render_alignment_heatmap(&mut ax, freqs, target, offset, options)?;
    Ok(new_document(W, H).add(ax.into_group()).to_string())
}

pub fn export_orf_diagram_svg(orfs: &Hxb2Orfs) -> String {
    let mut ax = Axes::new(
        PANEL_LEFT,
        PANEL_TOP,
        W - PANEL_LEFT - PANEL_RIGHT_MARGIN,
        ORF_PANEL_H,
    );
    render_orf_diagram(&mut ax, orfs);
    new_document(W, H).add(ax.into_group()).to_string()
}

/// All four figures of a screen report, keyed by name, each a standalone
/// SVG document. The ORF diagram uses the built-in HXB2 coordinates.
pub fn export_figure_set(
    table: &GuideTable,
    freqs: &FrequencyMatrix,
    target: &str,
    offset: i64,
    heatmap_options: &HeatmapOptions,
) -> Result<HashMap<&'static str, String>, FigureError> {
    let mut out = HashMap::new();
    out.insert(
        "genome",
        export_genome_svg(table, &GenomePlotOptions::default()),
    );
    out.insert("entropy", export_entropy_svg(table));
    out.insert(
        "heatmap",
        export_heatmap_svg(freqs, target, offset, heatmap_options)?,
    );
    out.insert("orfs", export_orf_diagram_svg(&HXB2_ORFS));
    Ok(out)
}
