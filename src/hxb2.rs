use serde::Deserialize;

/// Length of the HXB2 reference genome used for coordinate numbering.
pub const GENOME_LENGTH: i64 = 9717;

/// Genes at least this long get their name drawn inside their bar in the
/// ORF diagram; shorter ones are labeled outside with a connector.
pub const INLINE_LABEL_MIN_SPAN: i64 = 500;

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Orf {
    name: String,
    start: i64,
    stop: i64,
    frame: u8,
}

impl Orf {
    pub fn new(name: &str, start: i64, stop: i64, frame: u8) -> Self {
        Orf {
            name: name.to_owned(),
            start,
            stop,
            frame,
        }
    }

    #[inline(always)]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline(always)]
    pub fn start(&self) -> i64 {
        self.start
    }

    #[inline(always)]
    pub fn stop(&self) -> i64 {
        self.stop
    }

    /// Reading frame, 1-3.
    #[inline(always)]
    pub fn frame(&self) -> u8 {
        self.frame
    }

    pub fn span(&self) -> i64 {
        self.stop - self.start
    }

    pub fn midpoint(&self) -> f64 {
        self.start as f64 + self.span() as f64 / 2.0
    }

    pub fn has_inline_label(&self) -> bool {
        self.span() > INLINE_LABEL_MIN_SPAN
    }
}

/// The HXB2 ORF reference coordinates, from
/// <https://www.hiv.lanl.gov/components/sequence/HIV/search/help.html#region>.
/// Spliced genes are listed per exon (Tat1/Tat2, Rev1/Rev2).
#[derive(Clone, Debug)]
pub struct Hxb2Orfs(Vec<Orf>);

impl Hxb2Orfs {
    pub fn get(&self, name: &str) -> Option<&Orf> {
        self.0.iter().find(|orf| orf.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Orf> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Last covered genome position, for sizing the diagram's x axis.
    pub fn max_stop(&self) -> i64 {
        self.0.iter().map(|orf| orf.stop).max().unwrap_or(0)
    }
}

impl Default for Hxb2Orfs {
    fn default() -> Self {
        let data = include_str!("../assets/hxb2_orfs.json");
        let orfs: Vec<Orf> = serde_json::from_str(data).expect("Invalid ORF JSON");
        Self(orfs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_orfs() {
        let orfs = Hxb2Orfs::default();
        assert_eq!(orfs.len(), 13);
        assert_eq!(orfs.get("Gag"), Some(&Orf::new("Gag", 790, 2292, 1)));
        assert_eq!(orfs.get("3' LTR"), Some(&Orf::new("3' LTR", 9086, 9719, 2)));
        assert_eq!(orfs.max_stop(), 9719);
        assert!(orfs.iter().all(|orf| (1..=3).contains(&orf.frame())));
    }

    #[test]
    fn test_inline_label_rule() {
        let orfs = Hxb2Orfs::default();
        let gag = orfs.get("Gag").unwrap();
        assert_eq!(gag.span(), 1502);
        assert!(gag.has_inline_label());
        assert_eq!(gag.midpoint(), 1541.0);

        let vpr = orfs.get("Vpr").unwrap();
        assert_eq!(vpr.span(), 291);
        assert!(!vpr.has_inline_label());

        // Tat and Rev exons are all short, so none is labeled inline.
        for name in ["Tat1", "Tat2", "Rev1", "Rev2", "Vpu"] {
            assert!(!orfs.get(name).unwrap().has_inline_label());
        }
    }
}
