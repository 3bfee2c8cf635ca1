//! NAICS code classification and top-level grouping
//!
//! The label CSV lists one row per NAICS code, interleaving header rows,
//! "all industries" aggregates and hyphenated range codes (e.g. `31-33`)
//! with the actual data codes. Grouping partitions the surviving codes into
//! runs anchored at each top-level code.

use regex::Regex;

/// Hierarchy level implied by the length of a NAICS code.
///
/// The QWI dataset mixes two encodings for the top grouping level: plain
/// 2-digit sector codes and 5-digit codes. Both anchor a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodeLevel {
    /// 2- or 5-digit top-level code
    Parent,
    /// 3-digit subsector code
    Child,
    /// 4-digit industry group code
    Grandchild,
}

impl CodeLevel {
    /// Classify a code by length. Codes of other lengths carry no level.
    pub fn of(code: &str) -> Option<CodeLevel> {
        match code.len() {
            2 | 5 => Some(CodeLevel::Parent),
            3 => Some(CodeLevel::Child),
            4 => Some(CodeLevel::Grandchild),
            _ => None,
        }
    }
}

/// One NAICS code with its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRow {
    pub code: String,
    pub label: String,
}

/// All label rows belonging to one top-level code, in input order.
///
/// Invariant: non-empty, and the first row is the group's anchor (the
/// 2/5-digit code that started the group, or the earliest surviving row when
/// the CSV leads with finer-grained codes).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGroup {
    rows: Vec<CodeRow>,
}

impl CodeGroup {
    /// The row anchoring this group.
    pub fn lead(&self) -> &CodeRow {
        &self.rows[0]
    }

    pub fn rows(&self) -> &[CodeRow] {
        &self.rows
    }

    /// Codes in input order, for the fetch request.
    pub fn codes(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.code.clone()).collect()
    }

    /// Look up the label for a code within this group.
    pub fn label_for(&self, code: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|r| r.code == code)
            .map(|r| r.label.as_str())
    }
}

/// Partition raw `[code, label]` rows into top-level groups.
///
/// Rows whose code fails validation (non-numeric, zero aggregate, range
/// code) are skipped silently. A code of length 2 or 5 flushes the current
/// group and starts a new one; the trailing group is flushed at end of input.
pub fn group_codes<I>(rows: I) -> Vec<CodeGroup>
where
    I: IntoIterator<Item = (String, String)>,
{
    // shape of a data code; anything else is a header or layout row
    let data_code = Regex::new(r"^[0-9]+(-[0-9]+)?$").unwrap();

    let mut groups: Vec<CodeGroup> = Vec::new();
    let mut current: Vec<CodeRow> = Vec::new();

    for (code, label) in rows {
        if !is_data_code(&data_code, &code) {
            continue;
        }

        if CodeLevel::of(&code) == Some(CodeLevel::Parent) && !current.is_empty() {
            groups.push(CodeGroup {
                rows: std::mem::take(&mut current),
            });
        }

        current.push(CodeRow { code, label });
    }

    if !current.is_empty() {
        groups.push(CodeGroup { rows: current });
    }

    groups
}

/// A usable data code is a single positive all-digit code. Range codes like
/// `11-12` span several sectors and duplicate the per-sector totals, so they
/// are excluded together with the `00`/`000` aggregates and header rows.
fn is_data_code(shape: &Regex, code: &str) -> bool {
    if !shape.is_match(code) || code.contains('-') {
        return false;
    }
    code.parse::<u32>().map(|n| n > 0).unwrap_or(false)
}
