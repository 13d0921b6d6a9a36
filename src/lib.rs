use hxb2::Hxb2Orfs;
use lazy_static::lazy_static;

pub mod alignment;
pub mod axes;
pub mod error;
pub mod figure_export;
pub mod guide_table;
pub mod hxb2;
pub mod penalty_profile;
pub mod regression;
pub mod render_entropy;
pub mod render_genome;
pub mod render_heatmap;
pub mod render_orfs;

lazy_static! {
    // HXB2 ORF reference coordinates
    pub static ref HXB2_ORFS: Hxb2Orfs = Hxb2Orfs::default();
}
