/// Which strand of the reference the alignment was made against. Only
/// affects the ordering of the penalty axis labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strand {
    Forward,
    Reverse,
}

/// Per-position mismatch penalties over the 20 nt protospacer, 5' to 3'.
pub const POSITION_PENALTIES: [f64; 20] = [
    0.0, 0.0, 0.014, 0.0, 0.0, 0.395, 0.317, 0.0, 0.389, 0.079, 0.445, 0.508, 0.613, 0.851, 0.732,
    0.828, 0.615, 0.804, 0.685, 0.583,
];

/// Placeholder slots covering the PAM-side overhang of the penalty axis.
pub const PLACEHOLDER_SLOTS: usize = 3;

/// Total tick slots of the penalty axis, independent of strand.
pub const AXIS_SLOTS: usize = POSITION_PENALTIES.len() + PLACEHOLDER_SLOTS;

const PLACEHOLDER: &str = "*";

/// Tick labels of the penalty axis. The forward strand reads the profile
/// left to right with the placeholders trailing; the reverse strand leads
/// with the placeholders and reads the profile backwards.
pub fn axis_labels(strand: Strand) -> Vec<String> {
    let placeholders = std::iter::repeat_n(PLACEHOLDER.to_string(), PLACEHOLDER_SLOTS);
    match strand {
        Strand::Forward => POSITION_PENALTIES
            .iter()
            .map(|p| format_penalty(*p))
            .chain(placeholders)
            .collect(),
        Strand::Reverse => placeholders
            .chain(POSITION_PENALTIES.iter().rev().map(|p| format_penalty(*p)))
            .collect(),
    }
}

fn format_penalty(penalty: f64) -> String {
    format!("{penalty}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_count_is_strand_independent() {
        assert_eq!(axis_labels(Strand::Forward).len(), AXIS_SLOTS);
        assert_eq!(axis_labels(Strand::Reverse).len(), AXIS_SLOTS);
        assert_eq!(AXIS_SLOTS, 23);
    }

    #[test]
    fn test_forward_labels() {
        let labels = axis_labels(Strand::Forward);
        assert_eq!(&labels[..3], &["0", "0", "0.014"]);
        assert_eq!(&labels[20..], &["*", "*", "*"]);
    }

    #[test]
    fn test_reverse_labels_lead_with_placeholders_and_flip() {
        let forward = axis_labels(Strand::Forward);
        let reverse = axis_labels(Strand::Reverse);
        assert_eq!(&reverse[..3], &["*", "*", "*"]);

        let mut flipped = forward[..20].to_vec();
        flipped.reverse();
        assert_eq!(&reverse[3..], &flipped[..]);
    }
}
