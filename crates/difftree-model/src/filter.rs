//! Staged / unstaged row filtering.
//!
//! A split staging view shows the same model twice: once keeping rows with
//! something staged, once keeping rows with something left unstaged.
//! Partially checked folders appear on both sides.

use difftree_tree::NodeId;
use difftree_types::CheckState;

use crate::model::DiffTreeModel;

/// Which half of a split staging view to keep.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StagedSide {
    Staged,
    Unstaged,
}

/// Row predicate over a [`DiffTreeModel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StagedFilter {
    side: StagedSide,
}

impl StagedFilter {
    pub fn new(side: StagedSide) -> Self {
        Self { side }
    }

    pub fn staged() -> Self {
        Self::new(StagedSide::Staged)
    }

    pub fn unstaged() -> Self {
        Self::new(StagedSide::Unstaged)
    }

    pub fn side(&self) -> StagedSide {
        self.side
    }

    /// Whether `node` belongs on this side. Undetermined rows are kept.
    pub fn accepts(&self, model: &DiffTreeModel, node: NodeId) -> bool {
        match (self.side, model.check_state(node)) {
            (_, None) => true,
            (_, Some(CheckState::PartiallyChecked)) => true,
            (StagedSide::Staged, Some(state)) => state == CheckState::Checked,
            (StagedSide::Unstaged, Some(state)) => state == CheckState::Unchecked,
        }
    }

    /// Accepted rows beneath `parent` (`None` for the root), in row order.
    pub fn visible_children(&self, model: &DiffTreeModel, parent: Option<NodeId>) -> Vec<NodeId> {
        (0..model.row_count(parent))
            .filter_map(|row| model.index(row, parent))
            .filter(|node| self.accepts(model, *node))
            .collect()
    }
}
