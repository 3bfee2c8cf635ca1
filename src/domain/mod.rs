//! Domain layer: NAICS hierarchy logic
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod codes;
pub mod error;
pub mod levels;
pub mod reconcile;
pub mod status;
pub mod tree;

pub use codes::{group_codes, CodeGroup, CodeLevel, CodeRow};
pub use error::{DomainError, DomainResult};
pub use levels::{assign_levels, GroupLevels, LabeledValue};
pub use reconcile::reconcile_group;
pub use tree::{TreeNode, TreeNodeConvert, ROOT_NAME, SUPPRESSED};
