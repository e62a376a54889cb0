//! Application state for the tree browser
//!
//! Holds everything the render pass needs: the latest display tree, the
//! expansion set, cursor position, status filter cycling, and search input.
//! Key handling mutates this state synchronously; asynchronous work (store
//! reads, refreshes) is requested through [`AppAction`] and executed by the
//! event loop in `tui::run_tui`.

use crossterm::event::{KeyCode, KeyEvent};

use crate::tree::render::{visible_lines, TreeLine};
use crate::tree::{DisplayTreeNode, ExpandedNodes, StatusSummary};
use crate::tui::theme::Theme;

/// Label for the unfiltered position in the status filter cycle
const FILTER_ALL: &str = "ALL";

/// Work the event loop must perform on the store
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    /// Re-fetch the snapshot from the source now
    Refresh,
    /// Apply a status filter and rebuild the tree
    SetStatusFilter(String),
    /// Apply a name search and rebuild the tree
    SetSearch(String),
}

/// TUI application state
pub struct App {
    pub context: String,
    pub namespace: String,
    pub theme: Theme,

    tree: Vec<DisplayTreeNode>,
    summary: StatusSummary,
    app_status: Option<String>,

    expanded: ExpandedNodes,
    expand_all: bool,
    cursor: usize,

    status_filters: Vec<String>,
    filter_index: usize,

    search_mode: bool,
    search_buffer: String,
    active_search: String,

    status_message: Option<(String, bool)>,
    pending_action: Option<AppAction>,
    should_quit: bool,
}

impl App {
    pub fn new(context: String, namespace: String, theme: Theme) -> Self {
        let mut status_filters = vec![FILTER_ALL.to_string()];
        status_filters.extend(
            crate::tree::HealthStatus::all()
                .iter()
                .map(|status| status.as_str().to_string()),
        );

        Self {
            context,
            namespace,
            theme,
            tree: Vec::new(),
            summary: StatusSummary::default(),
            app_status: None,
            expanded: ExpandedNodes::new(),
            expand_all: false,
            cursor: 0,
            status_filters,
            filter_index: 0,
            search_mode: false,
            search_buffer: String::new(),
            active_search: String::new(),
            status_message: None,
            pending_action: None,
            should_quit: false,
        }
    }

    /// Replace the rendered snapshot data
    ///
    /// Called by the event loop after every store read; the cursor is clamped
    /// to the new visible row count.
    pub fn set_snapshot(
        &mut self,
        tree: Vec<DisplayTreeNode>,
        summary: StatusSummary,
        app_status: Option<String>,
    ) {
        self.tree = tree;
        self.summary = summary;
        self.app_status = app_status;
        self.clamp_cursor();
    }

    /// Rows currently visible given the expansion state
    pub fn visible(&self) -> Vec<TreeLine> {
        visible_lines(&self.tree, &self.expanded, self.expand_all)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn summary(&self) -> &StatusSummary {
        &self.summary
    }

    pub fn app_status(&self) -> Option<&str> {
        self.app_status.as_deref()
    }

    pub fn expanded(&self) -> &ExpandedNodes {
        &self.expanded
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn search_mode(&self) -> bool {
        self.search_mode
    }

    pub fn search_buffer(&self) -> &str {
        &self.search_buffer
    }

    pub fn active_search(&self) -> &str {
        &self.active_search
    }

    pub fn filter_label(&self) -> &str {
        &self.status_filters[self.filter_index]
    }

    pub fn status_message(&self) -> Option<&(String, bool)> {
        self.status_message.as_ref()
    }

    pub fn set_status_message(&mut self, message: String, is_error: bool) {
        self.status_message = Some((message, is_error));
    }

    pub fn clear_status_message(&mut self) {
        self.status_message = None;
    }

    /// Take the pending store action, if any
    pub fn take_action(&mut self) -> Option<AppAction> {
        self.pending_action.take()
    }

    fn clamp_cursor(&mut self) {
        let rows = self.visible().len();
        if rows == 0 {
            self.cursor = 0;
        } else if self.cursor >= rows {
            self.cursor = rows - 1;
        }
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        let rows = self.visible().len();
        if rows > 0 && self.cursor + 1 < rows {
            self.cursor += 1;
        }
    }

    /// Names of the ancestors of the visible row at `index`
    ///
    /// Walks upward through the flattened rows collecting the nearest row of
    /// each shallower depth.
    fn ancestors_at(&self, rows: &[TreeLine], index: usize) -> Vec<String> {
        let mut ancestors = Vec::new();
        let Some(row) = rows.get(index) else {
            return ancestors;
        };
        let mut depth = row.depth;
        for candidate in rows[..index].iter().rev() {
            if depth == 0 {
                break;
            }
            if candidate.depth < depth {
                ancestors.push(candidate.name.clone());
                depth = candidate.depth;
            }
        }
        ancestors
    }

    /// Expand or collapse the branch under the cursor
    pub fn toggle_selected(&mut self) {
        let rows = self.visible();
        let Some(row) = rows.get(self.cursor) else {
            return;
        };
        if !row.has_children {
            return;
        }
        if self.expanded.is_expanded(&row.name) {
            self.expanded.collapse(&row.name);
            self.clamp_cursor();
        } else {
            let ancestors = self.ancestors_at(&rows, self.cursor);
            self.expanded.expand(&row.name, &ancestors);
        }
    }

    pub fn toggle_expand_all(&mut self) {
        self.expand_all = !self.expand_all;
        self.clamp_cursor();
    }

    /// Drop all expansion state (switching the viewed application)
    pub fn reset_expansion(&mut self) {
        self.expanded.reset(&[]);
        self.cursor = 0;
    }

    fn cycle_filter(&mut self) {
        self.filter_index = (self.filter_index + 1) % self.status_filters.len();
        let status = if self.filter_index == 0 {
            String::new()
        } else {
            self.status_filters[self.filter_index].clone()
        };
        self.pending_action = Some(AppAction::SetStatusFilter(status));
    }

    /// Handle one key press; returns true when the app should exit
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if self.search_mode {
            self.handle_search_key(key);
            return false;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_up(),
            KeyCode::Down | KeyCode::Char('j') => self.move_down(),
            KeyCode::Enter | KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('e') => self.toggle_expand_all(),
            KeyCode::Char('f') => self.cycle_filter(),
            KeyCode::Char('r') => self.pending_action = Some(AppAction::Refresh),
            KeyCode::Char('/') => {
                self.search_mode = true;
                self.search_buffer = self.active_search.clone();
            }
            _ => {}
        }
        self.should_quit
    }

    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                self.search_mode = false;
                self.active_search = self.search_buffer.clone();
                self.pending_action = Some(AppAction::SetSearch(self.active_search.clone()));
            }
            KeyCode::Esc => {
                self.search_mode = false;
                self.search_buffer = self.active_search.clone();
            }
            KeyCode::Backspace => {
                self.search_buffer.pop();
            }
            KeyCode::Char(c) => self.search_buffer.push(c),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

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

    fn app_with_tree() -> App {
        let mut app = App::new("ctx".to_string(), "demo".to_string(), Theme::default());
        app.set_snapshot(
            vec![
                branch(
                    "Workloads",
                    vec![branch("Pod", vec![leaf("web", "healthy")])],
                ),
                branch("Networking", vec![leaf("Service", "healthy")]),
            ],
            StatusSummary::default(),
            None,
        );
        app
    }

    #[test]
    fn test_toggle_expands_with_ancestors() {
        let mut app = app_with_tree();
        assert_eq!(app.visible().len(), 2);

        app.toggle_selected();
        assert!(app.expanded().is_expanded("workloads"));
        assert_eq!(app.visible().len(), 3);

        // Move to Pod and expand it; its ancestor chain comes along
        app.move_down();
        app.toggle_selected();
        assert!(app.expanded().is_expanded("pod"));
        assert!(app.expanded().is_expanded("workloads"));
        assert_eq!(app.visible().len(), 4);
    }

    #[test]
    fn test_toggle_on_leaf_is_a_no_op() {
        let mut app = app_with_tree();
        app.toggle_selected();
        app.move_down();
        app.toggle_selected();
        // Cursor on the "web" leaf
        app.move_down();
        let before = app.visible();

        app.toggle_selected();
        assert_eq!(app.visible(), before);
        assert!(!app.expanded().is_expanded("web"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app_with_tree();
        assert!(app.handle_key(key(KeyCode::Char('q'))));
        let mut app = app_with_tree();
        assert!(app.handle_key(key(KeyCode::Esc)));
    }

    #[test]
    fn test_filter_cycle_emits_action() {
        let mut app = app_with_tree();
        assert_eq!(app.filter_label(), "ALL");

        app.handle_key(key(KeyCode::Char('f')));
        assert_eq!(app.filter_label(), "healthy");
        assert_eq!(
            app.take_action(),
            Some(AppAction::SetStatusFilter("healthy".to_string()))
        );
        assert_eq!(app.take_action(), None);
    }

    #[test]
    fn test_filter_cycle_wraps_to_all() {
        let mut app = app_with_tree();
        let cycle_len = 1 + crate::tree::HealthStatus::all().len();
        for _ in 0..cycle_len {
            app.handle_key(key(KeyCode::Char('f')));
        }
        assert_eq!(app.filter_label(), "ALL");
        // Wrapping back to ALL clears the filter
        assert_eq!(
            app.take_action(),
            Some(AppAction::SetStatusFilter(String::new()))
        );
    }

    #[test]
    fn test_search_mode_flow() {
        let mut app = app_with_tree();
        app.handle_key(key(KeyCode::Char('/')));
        assert!(app.search_mode());

        for c in "web".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.search_mode());
        assert_eq!(app.active_search(), "web");
        assert_eq!(
            app.take_action(),
            Some(AppAction::SetSearch("web".to_string()))
        );
    }

    #[test]
    fn test_search_escape_restores_previous() {
        let mut app = app_with_tree();
        app.handle_key(key(KeyCode::Char('/')));
        app.handle_key(key(KeyCode::Char('x')));
        app.handle_key(key(KeyCode::Esc));

        assert!(!app.search_mode());
        assert_eq!(app.active_search(), "");
        assert_eq!(app.take_action(), None);
    }

    #[test]
    fn test_refresh_key_emits_action() {
        let mut app = app_with_tree();
        app.handle_key(key(KeyCode::Char('r')));
        assert_eq!(app.take_action(), Some(AppAction::Refresh));
    }

    #[test]
    fn test_snapshot_replacement_clamps_cursor() {
        let mut app = app_with_tree();
        app.toggle_expand_all();
        app.cursor = app.visible().len() - 1;

        app.set_snapshot(
            vec![branch("Workloads", vec![leaf("Deployment", "healthy")])],
            StatusSummary::default(),
            None,
        );
        assert!(app.cursor < app.visible().len());
    }
}
