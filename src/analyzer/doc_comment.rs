//! Leading doc-comment detection for languages without docstrings.

/// How many lines above a declaration are inspected.
pub const DOC_LOOKBACK_LINES: usize = 10;

/// How far above a closing `*/` the opening `/**` may sit.
pub const DOC_BLOCK_MAX_LINES: usize = 20;

/// Check whether the declaration on `decl_line` (1-indexed) is preceded by a
/// `/** ... */` block or a `///` comment run.
///
/// Blank lines and plain comment lines are skipped; the scan stops at the
/// first line of code.
#[must_use]
pub fn has_leading_doc_comment(lines: &[&str], decl_line: usize) -> bool {
    let decl_idx = decl_line.saturating_sub(1).min(lines.len());
    let floor = decl_idx.saturating_sub(DOC_LOOKBACK_LINES);

    for idx in (floor..decl_idx).rev() {
        let line = lines[idx].trim();

        if line.is_empty() {
            continue;
        }
        if line.starts_with("///") {
            return true;
        }
        if line.ends_with("*/") {
            return block_opens_as_doc(lines, idx);
        }
        if line.starts_with("//") || line.starts_with('*') {
            continue;
        }
        return false;
    }

    false
}

/// Walk up from the line holding `*/` to the line that opened the block.
fn block_opens_as_doc(lines: &[&str], close_idx: usize) -> bool {
    let floor = close_idx.saturating_sub(DOC_BLOCK_MAX_LINES);
    for idx in (floor..=close_idx).rev() {
        let line = lines[idx];
        if line.contains("/**") {
            return true;
        }
        if line.contains("/*") {
            return false;
        }
    }
    false
}

#[cfg(test)]
#[path = "doc_comment_tests.rs"]
mod tests;
