use crate::axes::Axes;
use crate::hxb2::Hxb2Orfs;

const BAR_COLOR: &str = "#000000";
const BAR_VERTICAL_PAD: f64 = 0.1;
const BAR_HEIGHT: f64 = 0.8;
const LABEL_FONT_SIZE: f32 = 14.0;
const INLINE_LABEL_COLOR: &str = "#ffffff";
const OUTSIDE_LABEL_COLOR: &str = "#000000";
const CONNECTOR_COLOR: &str = "#000000";
const CONNECTOR_WIDTH: f32 = 2.0;
const CONNECTOR_OPACITY: f32 = 0.5;
const FRAME_ROWS: f64 = 3.0;

/// Label anchored between the exons of a spliced gene, with a connector
/// curve to each exon.
struct SplicedGeneLabel {
    name: &'static str,
    label_at: (f64, f64),
    exon_anchors: [(f64, f64); 2],
}

const SPLICED_GENE_LABELS: [SplicedGeneLabel; 2] = [
    SplicedGeneLabel {
        name: "Tat",
        label_at: (7000.0, 1.5),
        exon_anchors: [(5900.0, 2.5), (8379.0, 1.5)],
    },
    SplicedGeneLabel {
        name: "Rev",
        label_at: (7000.0, 2.5),
        exon_anchors: [(6000.0, 3.5), (8379.0, 2.5)],
    },
];

/// External label for a gene too short to label inline.
struct OutsideLabel {
    name: &'static str,
    at: (f64, f64),
    anchor: &'static str,
}

const OUTSIDE_LABELS: [OutsideLabel; 2] = [
    OutsideLabel {
        name: "Vpr",
        at: (5559.0, 3.5),
        anchor: "end",
    },
    OutsideLabel {
        name: "Vpu",
        at: (6200.0, 2.0),
        anchor: "middle",
    },
];

/// Diagram of the HXB2 ORFs: one bar per record at its reading frame,
/// frame 1 on top. Genes spanning more than 500 bases carry their name
/// inside the bar; the rest are labeled outside, the spliced Tat and Rev
/// through connector curves joining their exons. No axes are drawn.
pub fn render_orf_diagram(ax: &mut Axes, orfs: &Hxb2Orfs) {
    ax.set_x_range(0.0, orfs.max_stop() as f64);
    ax.set_y_range(1.0 - BAR_VERTICAL_PAD, 1.0 + FRAME_ROWS + BAR_VERTICAL_PAD);
    ax.invert_y();

    for orf in orfs.iter() {
        let row = orf.frame() as f64;
        ax.fill_rect(
            orf.start() as f64,
            row + BAR_VERTICAL_PAD,
            orf.span() as f64,
            BAR_HEIGHT,
            BAR_COLOR,
        );
        if orf.has_inline_label() {
            ax.text_data(
                orf.midpoint(),
                row + 0.5,
                orf.name(),
                "middle",
                LABEL_FONT_SIZE,
                INLINE_LABEL_COLOR,
            );
        }
    }

    for spliced in &SPLICED_GENE_LABELS {
        for anchor in &spliced.exon_anchors {
            ax.connector(
                spliced.label_at,
                *anchor,
                CONNECTOR_COLOR,
                CONNECTOR_WIDTH,
                CONNECTOR_OPACITY,
            );
        }
        ax.text_data(
            spliced.label_at.0,
            spliced.label_at.1,
            spliced.name,
            "middle",
            LABEL_FONT_SIZE,
            OUTSIDE_LABEL_COLOR,
        );
    }

    for label in &OUTSIDE_LABELS {
        ax.text_data(
            label.at.0,
            label.at.1,
            label.name,
            label.anchor,
            LABEL_FONT_SIZE,
            OUTSIDE_LABEL_COLOR,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hxb2::Orf;

    #[test]
    fn test_one_bar_per_orf() {
        let orfs = Hxb2Orfs::default();
        let mut ax = Axes::new(20.0, 20.0, 600.0, 160.0);
        render_orf_diagram(&mut ax, &orfs);
        let svg = ax.into_group().to_string();
        assert_eq!(svg.matches("<rect").count(), orfs.len());
        // Two connector curves per spliced gene.
        assert_eq!(svg.matches("<path").count(), 4);
    }

    #[test]
    fn test_inline_labels_only_for_long_genes() {
        let orfs = Hxb2Orfs::default();
        let mut ax = Axes::new(20.0, 20.0, 600.0, 160.0);
        render_orf_diagram(&mut ax, &orfs);
        let svg = ax.into_group().to_string();

        let inline = orfs.iter().filter(|orf| orf.has_inline_label()).count();
        let expected_texts = inline + SPLICED_GENE_LABELS.len() + OUTSIDE_LABELS.len();
        assert_eq!(svg.matches("<text").count(), expected_texts);
        for name in ["Gag", "Pol", "Env", "Nef", "Tat", "Rev", "Vpr", "Vpu"] {
            assert!(svg.contains(&format!(">{name}<")), "missing label {name}");
        }
        // Short exons are never labeled inline.
        assert!(!svg.contains(">Tat1<"));
        assert!(!svg.contains(">Rev2<"));
    }

    #[test]
    fn test_gag_label_centered_on_span() {
        let gag = Orf::new("Gag", 790, 2292, 1);
        let orfs = Hxb2Orfs::default();
        assert_eq!(orfs.get("Gag"), Some(&gag));
        assert_eq!(gag.midpoint(), 1541.0);

        let mut ax = Axes::new(0.0, 0.0, 600.0, 100.0);
        render_orf_diagram(&mut ax, &orfs);
        let expected_x = ax.x_to_px(1541.0);
        let svg = ax.into_group().to_string();
        assert!(svg.contains(">Gag</text>"));
        assert!(svg.contains(&format!(r#"x="{expected_x}""#)));
    }
}
