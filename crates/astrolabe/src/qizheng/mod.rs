//! Label tables for the seven-governors (qizheng) wheel.

pub mod mansions;
pub mod palaces;

pub use mansions::{locate_mansion, Mansion, MansionBoundary, MansionPlacement, Quarter};
pub use palaces::{branch_of, Palace, BRANCHES};
