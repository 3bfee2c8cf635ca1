//! qwi-sunburst: suppression-reconciled NAICS hierarchies from Census QWI data
//!
//! Transforms a flat NAICS label table plus per-group QWI indicator tables
//! into one nested tree rooted at "naics", synthesizing "suppressed"
//! placeholder leaves so child totals always reconcile with parent totals.
//! The serialized tree feeds a d3 sunburst renderer unchanged.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;

pub use application::HierarchyAssembler;
pub use config::Settings;
pub use domain::{group_codes, reconcile_group, TreeNode};
pub use infrastructure::{CensusClient, IndicatorFetcher, QwiQuery};
