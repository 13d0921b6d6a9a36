use crate::error::FigureError;

/// Symbols that may appear in an alignment column, in heatmap display
/// row order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AlignmentSymbol {
    T,
    G,
    C,
    A,
    Gap,
    N,
}

impl AlignmentSymbol {
    /// Fixed top-to-bottom row order of the frequency heatmap.
    pub const ROW_ORDER: [AlignmentSymbol; 6] = [
        AlignmentSymbol::T,
        AlignmentSymbol::G,
        AlignmentSymbol::C,
        AlignmentSymbol::A,
        AlignmentSymbol::Gap,
        AlignmentSymbol::N,
    ];

    pub fn from_char(c: char) -> Result<Self, FigureError> {
        match c {
            'T' => Ok(AlignmentSymbol::T),
            'G' => Ok(AlignmentSymbol::G),
            'C' => Ok(AlignmentSymbol::C),
            'A' => Ok(AlignmentSymbol::A),
            '.' => Ok(AlignmentSymbol::Gap),
            'N' => Ok(AlignmentSymbol::N),
            other => Err(FigureError::UnrecognizedSymbol(other)),
        }
    }

    pub fn as_char(&self) -> char {
        match self {
            AlignmentSymbol::T => 'T',
            AlignmentSymbol::G => 'G',
            AlignmentSymbol::C => 'C',
            AlignmentSymbol::A => 'A',
            AlignmentSymbol::Gap => '.',
            AlignmentSymbol::N => 'N',
        }
    }

    /// Display row of this symbol in the heatmap, counted from the top.
    pub fn row_index(&self) -> usize {
        match self {
            AlignmentSymbol::T => 0,
            AlignmentSymbol::G => 1,
            AlignmentSymbol::C => 2,
            AlignmentSymbol::A => 3,
            AlignmentSymbol::Gap => 4,
            AlignmentSymbol::N => 5,
        }
    }
}

/// Parse a target sequence into symbols, failing on the first character
/// outside the recognized set.
pub fn parse_target(target: &str) -> Result<Vec<AlignmentSymbol>, FigureError> {
    target.chars().map(AlignmentSymbol::from_char).collect()
}

/// Per-column symbol frequencies of an alignment, one row per
/// [`AlignmentSymbol::ROW_ORDER`] entry.
#[derive(Clone, Debug, PartialEq)]
pub struct FrequencyMatrix {
    rows: Vec<Vec<f64>>,
}

impl FrequencyMatrix {
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, FigureError> {
        let Some(first) = rows.first() else {
            return Err("frequency matrix has no rows".to_string().into());
        };
        if first.is_empty() {
            return Err("frequency matrix has no columns".to_string().into());
        }
        let columns = first.len();
        if rows.iter().any(|row| row.len() != columns) {
            return Err(format!("frequency matrix is ragged: expected {columns} columns").into());
        }
        Ok(FrequencyMatrix { rows })
    }

    #[inline(always)]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.rows[0].len()
    }

    /// The display transform of the heatmap. Every entry must be a
    /// strictly positive finite frequency; anything else would render as
    /// NaN or infinity and is rejected instead.
    pub fn neg_log10(&self) -> Result<Vec<Vec<f64>>, FigureError> {
        self.rows
            .iter()
            .enumerate()
            .map(|(row, values)| {
                values
                    .iter()
                    .enumerate()
                    .map(|(column, &value)| {
                        if value > 0.0 && value.is_finite() {
                            Ok(-value.log10())
                        } else {
                            Err(FigureError::InvalidFrequency { row, column, value })
                        }
                    })
                    .collect()
            })
            .collect()
    }
}
