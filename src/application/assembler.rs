//! Hierarchy assembly service
//!
//! Orchestrates grouping, per-group fetch, level assignment and suppression
//! reconciliation into the single "naics" root tree.

use std::sync::Arc;

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::codes::{group_codes, CodeGroup};
use crate::domain::levels::assign_levels;
use crate::domain::reconcile::reconcile_group;
use crate::domain::tree::{self, TreeNode};
use crate::infrastructure::traits::{IndicatorFetcher, QwiQuery};

/// Service building the reconciled hierarchy from label rows.
pub struct HierarchyAssembler {
    fetcher: Arc<dyn IndicatorFetcher>,
    query: QwiQuery,
}

impl HierarchyAssembler {
    pub fn new(fetcher: Arc<dyn IndicatorFetcher>, query: QwiQuery) -> Self {
        Self { fetcher, query }
    }

    /// Build the full tree from raw `[code, label]` rows.
    ///
    /// Each group's fetch-and-reconcile pipeline owns its data exclusively
    /// and runs in parallel; the ordered `collect` is the join barrier, so
    /// the root's children keep the label file's group order. A group that
    /// fails (fetch error, malformed table, nothing disclosed) is dropped
    /// with a warning and the remaining groups still render.
    pub fn assemble<I>(&self, rows: I) -> ApplicationResult<TreeNode>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let groups = group_codes(rows);
        if groups.is_empty() {
            return Err(ApplicationError::NoGroups);
        }
        debug!(groups = groups.len(), indicator = %self.query.indicator, "assembling hierarchy");

        let nodes: Vec<Option<TreeNode>> = groups
            .par_iter()
            .map(|group| self.build_group(group))
            .collect();

        Ok(tree::root(nodes.into_iter().flatten().collect()))
    }

    fn build_group(&self, group: &CodeGroup) -> Option<TreeNode> {
        match self.try_build_group(group) {
            Ok(node) => node,
            Err(e) => {
                warn!(group = %group.lead().code, error = %e, "dropping group");
                None
            }
        }
    }

    fn try_build_group(&self, group: &CodeGroup) -> ApplicationResult<Option<TreeNode>> {
        let table = self.fetcher.fetch_group(&self.query, &group.codes())?;
        let levels = assign_levels(&table, &self.query.indicator, group)?;
        Ok(reconcile_group(&levels, group.lead()))
    }
}
