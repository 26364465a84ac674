//! Earth Mover's Distance between weighted signatures.
//!
//! Given two non-negative weight vectors and a row-major cost matrix,
//! [`emd`] finds a minimum-cost flow with the transportation simplex and
//! returns the transport cost normalized by the mass moved.
//!
//! ```
//! let distance = earthmover::emd(&[1., 0.], &[0., 1.], &[0., 1., 1., 0.]).unwrap();
//! assert_eq!(distance, 1.);
//! ```
pub mod emd;
pub mod transport;

#[cfg(feature = "cli")]
pub mod cli;

pub use emd::Error;
pub use emd::emd;
pub use emd::emd_with_flow;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Transport costs, reduced costs, dual potentials, and distances.
pub type Energy = f64;
/// Signature weights and flow amounts.
pub type Mass = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TRANSPORTATION SIMPLEX
// Exact EMD via pivoting on a spanning-tree basis.
// ============================================================================
/// Reduced-cost tolerance, relative to the largest entry of the cost matrix.
pub const EMD_TOLERANCE: Energy = 1e-9;
/// Pivot budget per source-sink cell before declaring numerical failure.
pub const EMD_PIVOT_FACTOR: usize = 4;
/// Minimum pivot budget regardless of problem size.
pub const EMD_PIVOT_FLOOR: usize = 64;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize terminal logging at the given level.
#[cfg(feature = "cli")]
pub fn log(level: log::LevelFilter) {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    simplelog::TermLogger::init(
        level,
        config,
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    )
    .expect("initialize logger");
}
