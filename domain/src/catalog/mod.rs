//! Client-side catalog filtering.
//!
//! - [`query::FilterQuery`] - (search text, category) pair
//! - [`filter::filter`] - stable conjunctive filter over a batch
//! - [`filter::category_options`] - category choices for the unfiltered batch

pub mod filter;
pub mod query;
