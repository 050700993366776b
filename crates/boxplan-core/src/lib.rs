//! Core planning and sharing logic for boxplan.
//!
//! Given the dimensions of a rectangular storage space and a catalog of
//! storage containers, this crate computes ranked grid tiling plans and
//! serializes a chosen plan into a compact URL-safe share token.
//!
//! - [`catalog`] -- catalog model, loading, and grouping
//! - [`combo`] -- 1-D covering search along one axis
//! - [`plan`] -- grid plan assembly, ranking, and box substitution
//! - [`share`] -- share-token codec with legacy-format fallback
//!
//! Everything here is synchronous and stateless: the same inputs always
//! produce the same outputs (decoded plans get a fresh id, nothing else
//! varies).

pub mod catalog;
pub mod combo;
pub mod plan;
pub mod share;

pub use catalog::{BoxSpec, CatalogError, Dimensions};
pub use plan::{GridPlan, Placement, build_plans, rank_plans, substitute_box};
pub use share::{ShareError, SharedPlan, decode_token, encode_token};
