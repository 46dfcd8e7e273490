//! Text and JSON rendering of a [`DiffTreeModel`].

use colored::Colorize;
use difftree_model::{DiffTreeModel, StagedFilter};
use difftree_tree::NodeId;
use difftree_types::CheckState;
use serde::Serialize;

/// Checkbox glyph for an inclusion state.
pub fn glyph(state: Option<CheckState>) -> &'static str {
    match state {
        Some(CheckState::Checked) => "[x]",
        Some(CheckState::PartiallyChecked) => "[~]",
        Some(CheckState::Unchecked) => "[ ]",
        None => "[?]",
    }
}

/// One visible line of the tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Row {
    pub depth: usize,
    pub name: String,
    pub state: Option<CheckState>,
    pub status: String,
}

impl Row {
    pub fn format(&self, color: bool) -> String {
        let mark = glyph(self.state);
        let mark = if !color {
            mark.normal()
        } else {
            match self.state {
                Some(CheckState::Checked) => mark.green(),
                Some(CheckState::PartiallyChecked) => mark.yellow(),
                Some(CheckState::Unchecked) => mark.normal(),
                None => mark.dimmed(),
            }
        };
        let mut line = format!("{}{} {}", "  ".repeat(self.depth), mark, self.name);
        if !self.status.is_empty() {
            line.push_str("  ");
            if color {
                line.push_str(&self.status.cyan().to_string());
            } else {
                line.push_str(&self.status);
            }
        }
        line
    }
}

fn children(model: &DiffTreeModel, parent: Option<NodeId>, filter: Option<StagedFilter>) -> Vec<NodeId> {
    match filter {
        Some(filter) => filter.visible_children(model, parent),
        None => (0..model.row_count(parent))
            .filter_map(|row| model.index(row, parent))
            .collect(),
    }
}

/// Visible rows in pre-order, top-level rows at depth 0.
pub fn rows(model: &DiffTreeModel, filter: Option<StagedFilter>) -> Vec<Row> {
    let mut out = Vec::new();
    let mut stack: Vec<(NodeId, usize)> = children(model, None, filter)
        .into_iter()
        .rev()
        .map(|id| (id, 0))
        .collect();
    while let Some((id, depth)) = stack.pop() {
        out.push(Row {
            depth,
            name: model.name(id).unwrap_or_default().to_string(),
            state: model.check_state(id),
            status: model.status(id),
        });
        stack.extend(
            children(model, Some(id), filter)
                .into_iter()
                .rev()
                .map(|child| (child, depth + 1)),
        );
    }
    out
}

/// JSON shape of one node and its visible subtree.
#[derive(Debug, Serialize)]
pub struct NodeView {
    pub name: String,
    pub path: String,
    pub state: Option<CheckState>,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NodeView>,
}

/// Build the JSON view of `node`.
pub fn node_view(model: &DiffTreeModel, node: NodeId, filter: Option<StagedFilter>) -> NodeView {
    let parent = (!node.is_root()).then_some(node);
    NodeView {
        name: model.name(node).unwrap_or_default().to_string(),
        path: model.path(node, true).unwrap_or_default(),
        state: model.check_state(node),
        status: model.status(node),
        kind: model.kind(node),
        children: children(model, parent, filter)
            .into_iter()
            .map(|child| node_view(model, child, filter))
            .collect(),
    }
}
