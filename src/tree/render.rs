//! Plain-text tree rendering
//!
//! Renders a display tree as indented ASCII lines, honoring the expanded-node
//! set. The one-shot `tree` command prints this directly; the TUI renders the
//! same lines through ratatui with status coloring.

use crate::tree::builder::DisplayTreeNode;
use crate::tree::expand::ExpandedNodes;

/// One renderable line of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeLine {
    pub depth: usize,
    pub name: String,
    pub status: String,
    pub has_children: bool,
    pub expanded: bool,
}

impl TreeLine {
    fn marker(&self) -> &'static str {
        if !self.has_children {
            "  "
        } else if self.expanded {
            "- "
        } else {
            "+ "
        }
    }
}

fn flatten_into(
    nodes: &[DisplayTreeNode],
    depth: usize,
    expanded: &ExpandedNodes,
    expand_all: bool,
    out: &mut Vec<TreeLine>,
) {
    for node in nodes {
        let is_open = expand_all || expanded.is_expanded(&node.name);
        out.push(TreeLine {
            depth,
            name: node.name.clone(),
            status: node.status.clone(),
            has_children: !node.child_nodes.is_empty(),
            expanded: is_open && !node.child_nodes.is_empty(),
        });
        if is_open {
            flatten_into(&node.child_nodes, depth + 1, expanded, expand_all, out);
        }
    }
}

/// Flatten the tree to the lines currently visible
///
/// A node's children appear only when the node itself is expanded (or
/// `expand_all` is set); collapsed branches contribute a single line.
pub fn visible_lines(
    tree: &[DisplayTreeNode],
    expanded: &ExpandedNodes,
    expand_all: bool,
) -> Vec<TreeLine> {
    let mut out = Vec::new();
    flatten_into(tree, 0, expanded, expand_all, &mut out);
    out
}

/// Render the visible tree as indented text, one node per line
pub fn render_ascii(tree: &[DisplayTreeNode], expanded: &ExpandedNodes, expand_all: bool) -> String {
    let mut out = String::new();
    for line in visible_lines(tree, expanded, expand_all) {
        out.push_str(&"  ".repeat(line.depth));
        out.push_str(line.marker());
        out.push_str(&line.name);
        if !line.status.is_empty() {
            out.push_str(&format!(" ({})", line.status));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(name: &str, status: &str) -> DisplayTreeNode {
        DisplayTreeNode {
            name: name.to_string(),
            status: status.to_string(),
            is_selected: false,
            child_nodes: Vec::new(),
        }
    }

    fn branch(name: &str, children: Vec<DisplayTreeNode>) -> DisplayTreeNode {
        DisplayTreeNode {
            name: name.to_string(),
            status: String::new(),
            is_selected: false,
            child_nodes: children,
        }
    }

    #[test]
    fn test_collapsed_tree_shows_top_level_only() {
        let tree = vec![branch("Workloads", vec![leaf("Deployment", "healthy")])];
        let rendered = render_ascii(&tree, &ExpandedNodes::new(), false);
        assert_eq!(rendered, "+ Workloads\n");
    }

    #[test]
    fn test_expanded_branch_shows_children_indented() {
        let tree = vec![branch(
            "Workloads",
            vec![leaf("Deployment", "healthy"), leaf("Pod", "")],
        )];
        let mut expanded = ExpandedNodes::new();
        expanded.expand("Workloads", &[]);

        let rendered = render_ascii(&tree, &expanded, false);
        assert_eq!(
            rendered,
            "- Workloads\n    Deployment (healthy)\n    Pod\n"
        );
    }

    #[test]
    fn test_expand_all_ignores_the_expanded_set() {
        let tree = vec![branch(
            "Workloads",
            vec![branch("Pod", vec![leaf("web", "degraded")])],
        )];
        let rendered = render_ascii(&tree, &ExpandedNodes::new(), true);
        assert_eq!(rendered, "- Workloads\n  - Pod\n      web (degraded)\n");
    }

    #[test]
    fn test_visible_lines_depth_tracks_nesting() {
        let tree = vec![branch(
            "Workloads",
            vec![branch("Pod", vec![leaf("web", "")])],
        )];
        let lines = visible_lines(&tree, &ExpandedNodes::new(), true);
        let depths: Vec<usize> = lines.iter().map(|l| l.depth).collect();
        assert_eq!(depths, vec![0, 1, 2]);
    }
}
