//! Strategy comparison: break-even location, canonical and exhaustive
//! comparison, and caller-boundary memoization

mod breakeven;
mod cache;
mod comparator;

pub use breakeven::find_break_even;
pub use cache::ComparisonCache;
pub use comparator::{search_score, GridCell, StrategyComparator, StrategyComparisonResult};
