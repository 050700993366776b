//! Grid plan assembly, ranking, and substitution.
//!
//! - [`types`]: the [`GridPlan`] and [`Placement`] value types
//! - [`builder`]: candidate plan generation from a space and a catalog
//! - [`rank`]: total-order ranking, truncated to the top 3
//! - [`substitute`]: rebuild a plan after swapping one box

pub mod builder;
pub mod rank;
pub mod substitute;
pub mod types;

pub use builder::build_plans;
pub use rank::rank_plans;
pub use substitute::substitute_box;
pub use types::{GridPlan, Placement};
