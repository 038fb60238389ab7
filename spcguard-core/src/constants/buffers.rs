//! Window Sizes
//!
//! The sampling window is a const generic, so these sizes are the values
//! callers are expected to plug in.

/// Default number of readings kept in the window.
///
/// 60 readings at the bench rig's one-second poll is one minute of history:
/// - 60 × 16 bytes of readings + 60 × 8 bytes of moving ranges ≈ 1.5KB
/// - Enough points for a stable moving-range average
/// - Matches the chart width of the dashboard
pub const DEFAULT_WINDOW: usize = 60;

/// Smallest window that can ever establish control limits.
///
/// Sigma-hat is estimated from at least one moving range, which needs two
/// readings.
pub const MIN_WINDOW: usize = 2;

/// Window for memory-starved targets.
///
/// 20 readings is one pass over the bench-test dataset.
pub const SMALL_WINDOW: usize = 20;
