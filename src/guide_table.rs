use serde::{Deserialize, Serialize};

/// One gRNA target site from the screen results table. The serde names
/// match the column headers of the results table, so rows deserialize
/// straight out of a caller's CSV reader.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GuideRecord {
    #[serde(rename = "Start")]
    start: i64,
    #[serde(rename = "Percent cleaved")]
    percent_cleaved: f64,
    #[serde(rename = "Entropy (bits)")]
    entropy_bits: f64,
}

impl GuideRecord {
    pub fn new(start: i64, percent_cleaved: f64, entropy_bits: f64) -> Self {
        GuideRecord {
            start,
            percent_cleaved,
            entropy_bits,
        }
    }

    #[inline(always)]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline(always)]
    pub fn percent_cleaved(&self) -> f64 {
        self.percent_cleaved
    }

    #[inline(always)]
    pub fn entropy_bits(&self) -> f64 {
        self.entropy_bits
    }
}

#[derive(Clone, Debug, Default)]
pub struct GuideTable {
    records: Vec<GuideRecord>,
}

impl GuideTable {
    pub fn new(records: Vec<GuideRecord>) -> Self {
        GuideTable { records }
    }

    #[inline(always)]
    pub fn records(&self) -> &[GuideRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// (HXB2 start, percent cleaved) pairs for the genome-position plot.
    pub fn genome_points(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|r| (r.start as f64, r.percent_cleaved))
            .collect()
    }

    /// (entropy, percent cleaved) pairs for the entropy plot.
    pub fn entropy_points(&self) -> Vec<(f64, f64)> {
        self.records
            .iter()
            .map(|r| (r.entropy_bits, r.percent_cleaved))
            .collect()
    }
}

impl From<Vec<GuideRecord>> for GuideTable {
    fn from(records: Vec<GuideRecord>) -> Self {
        GuideTable::new(records)
    }
}
