//! The [`ChangeSetView`] trait read by the tree model.

use difftree_types::{contains_path, DeltaStatus};

/// Read-only access to an ordered change-set.
///
/// Implementations wrap whatever produced the change-set (a status diff, a
/// commit diff, a test fixture). Indices run from `0` to `count() - 1`;
/// out-of-range indices yield `None`.
pub trait ChangeSetView {
    /// Whether the change-set is usable at all.
    fn is_valid(&self) -> bool;

    /// Whether the change-set compares the working tree against the index,
    /// i.e. whether its entries can be staged.
    fn is_status_diff(&self) -> bool;

    /// Number of entries.
    fn count(&self) -> usize;

    /// Relative path of the entry at `index`.
    fn name(&self, index: usize) -> Option<&str>;

    /// Delta status of the entry at `index`.
    fn status(&self, index: usize) -> Option<DeltaStatus>;

    /// Paths of all entries at or beneath `prefix`, in change-set order.
    ///
    /// Matching is per segment: `"ab"` does not match `"abc/x"`. The empty
    /// prefix matches every entry.
    fn paths_under(&self, prefix: &str) -> Vec<String> {
        (0..self.count())
            .filter_map(|i| self.name(i))
            .filter(|name| contains_path(name, prefix))
            .map(str::to_string)
            .collect()
    }

    /// Distinct status codes of the entries beneath `prefix`, first-seen order.
    ///
    /// Empty for an invalid change-set.
    fn status_summary(&self, prefix: &str) -> String {
        let mut summary = String::new();
        if !self.is_valid() {
            return summary;
        }
        for i in 0..self.count() {
            let (Some(name), Some(status)) = (self.name(i), self.status(i)) else {
                continue;
            };
            if !contains_path(name, prefix) {
                continue;
            }
            let ch = status.status_char();
            if !summary.contains(ch) {
                summary.push(ch);
            }
        }
        summary
    }
}
