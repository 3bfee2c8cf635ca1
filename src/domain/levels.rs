//! Level assignment for one group's API response
//!
//! Classifies the flat indicator table into a parent row (2/5-digit code),
//! child rows (3-digit) and grandchild rows (4-digit), resolving each cell
//! through its status flag.

use serde_json::Value;
use tracing::debug;

use crate::domain::codes::{CodeGroup, CodeLevel};
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::status;

/// Column carrying the industry code in a QWI response.
pub const INDUSTRY_COLUMN: &str = "industry";

/// Column name carrying the status flag for an indicator.
pub fn status_column(indicator: &str) -> String {
    format!("s{indicator}")
}

/// A classified row: code, display label, resolved indicator value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabeledValue {
    pub code: String,
    pub label: String,
    /// `None` when the cell was suppressed
    pub value: Option<u64>,
}

/// One group's rows split by hierarchy level.
///
/// `parent` is `None` when the response contains no 2/5-digit row; the
/// reconciler then has no anchor total to check against. Children and
/// grandchildren with suppressed values are already dropped, so their
/// `value` is always present.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupLevels {
    pub parent: Option<LabeledValue>,
    pub children: Vec<LabeledValue>,
    pub grandchildren: Vec<LabeledValue>,
}

/// Split an API table (header row + data rows) into hierarchy levels.
///
/// Labels come from the group's label rows; codes the CSV does not know fall
/// back to the code itself.
pub fn assign_levels(
    table: &[Vec<Value>],
    indicator: &str,
    group: &CodeGroup,
) -> DomainResult<GroupLevels> {
    let (header, rows) = table.split_first().ok_or(DomainError::EmptyTable)?;

    let industry_idx = column_index(header, INDUSTRY_COLUMN)?;
    let indicator_idx = column_index(header, indicator)?;
    let status_idx = column_index(header, &status_column(indicator))?;

    let mut levels = GroupLevels::default();

    for row in rows {
        let Some(code) = row.get(industry_idx).and_then(Value::as_str) else {
            continue;
        };

        let value = match (row.get(indicator_idx), row.get(status_idx)) {
            (Some(ind), Some(flag)) => status::resolve(ind, flag),
            _ => None,
        };

        let entry = LabeledValue {
            code: code.to_string(),
            label: group.label_for(code).unwrap_or(code).to_string(),
            value,
        };

        match CodeLevel::of(code) {
            // the parent anchors reconciliation, so it is kept even when
            // its own value is suppressed
            Some(CodeLevel::Parent) => levels.parent = Some(entry),
            Some(CodeLevel::Child) if value.is_some() => levels.children.push(entry),
            Some(CodeLevel::Grandchild) if value.is_some() => levels.grandchildren.push(entry),
            _ => {}
        }
    }

    debug!(
        parent = ?levels.parent.as_ref().map(|p| p.code.as_str()),
        children = levels.children.len(),
        grandchildren = levels.grandchildren.len(),
        "assigned levels"
    );
    Ok(levels)
}

fn column_index(header: &[Value], name: &str) -> DomainResult<usize> {
    header
        .iter()
        .position(|cell| cell.as_str() == Some(name))
        .ok_or_else(|| DomainError::MissingColumn(name.to_string()))
}
