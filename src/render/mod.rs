//! HTML rendering for the search page

pub mod options;
pub mod page;

pub use options::{ScoreOption, score_options};
pub use page::{DEFAULT_TITLE, PageView, Renderer, ResultPanel};
