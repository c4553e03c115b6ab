//! Tool adapters exposed to the research agent
//!
//! Each tool validates typed arguments, makes its provider call(s), caps list
//! results and reports through an [`Envelope`](crate::envelope::Envelope).

pub mod args;
pub mod registry;
pub mod research;
pub mod reviews;
pub mod search;
pub mod traits;
pub mod venues;

pub use registry::ToolRegistry;
pub use research::{ResearchReport, ResearchTool};
pub use reviews::{ReviewDigestTool, ReviewsTool};
pub use search::{SearchTool, Selection};
pub use traits::Tool;
pub use venues::VenueTool;

/// First `limit` items in provider order
pub(crate) fn top<T>(mut items: Vec<T>, limit: usize) -> Vec<T> {
    items.truncate(limit);
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0)]
    #[case(1, 1)]
    #[case(10, 10)]
    #[case(11, 10)]
    #[case(100, 10)]
    fn test_top_caps_length_and_keeps_order(#[case] upstream: usize, #[case] expected: usize) {
        let items: Vec<usize> = (0..upstream).collect();
        let kept = top(items, 10);
        assert_eq!(kept.len(), expected);
        assert!(kept.iter().enumerate().all(|(i, v)| i == *v));
    }
}
