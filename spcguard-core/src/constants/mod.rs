//! Constants for SpcGuard Core
//!
//! Every numeric value the engine relies on lives here with its source, so
//! the statistics modules never carry magic numbers.
//!
//! ## Organization
//!
//! - **Spc**: control chart and capability constants
//! - **Buffers**: window sizes for the sampling buffer
//!
//! ## Usage Guidelines
//!
//! 1. Always use these constants instead of magic numbers
//! 2. Reference the table or standard a constant comes from
//! 3. Use descriptive names

/// Control chart, capability and normal-approximation constants.
pub mod spc;

/// Window sizes for the sampling buffer.
pub mod buffers;

pub use spc::{
    D2_SUBGROUP_OF_TWO, CONTROL_LIMIT_SIGMAS, WARNING_LIMIT_SIGMAS,
    DEFAULT_BATCH_SIZE, DEFAULT_SPEC_MIN, DEFAULT_SPEC_MAX,
};

pub use buffers::{DEFAULT_WINDOW, MIN_WINDOW, SMALL_WINDOW};
