//! View rendering functions
//!
//! Each view renders into a ratatui frame region from the shared `App`
//! state. Views are pure render passes; they never mutate the app.

mod footer;
mod header;
mod tree;

pub use footer::render_footer;
pub use header::render_header;
pub use tree::render_tree;
