//! Optimal transport abstractions.
//!
//! These traits describe a transport problem independently of how it is
//! solved, so the greedy heuristic and the exact simplex can be driven and
//! compared through one interface.
//!
//! - [`Support`] — the bins mass lives on
//! - [`Density`] — a weighted distribution over a support
//! - [`Measure`] — ground cost between a source bin and a sink bin
//! - [`Coupling`] — a transport plan between two densities
mod coupling;
mod density;
mod measure;
mod support;

pub use coupling::*;
pub use density::*;
pub use measure::*;
pub use support::*;
