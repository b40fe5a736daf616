// Constants for the sort stepper and its front ends

/// Smallest value a generated dataset contains
pub const VALUE_MIN: f64 = 5.0;

/// Largest value a generated dataset contains; also the top of the tone scale
pub const VALUE_MAX: f64 = 100.0;

/// Number of distinct values in the low-cardinality preset
pub const LOW_CARDINALITY_LEVELS: u32 = 5;

/// Default delay between steps, in milliseconds
pub const DEFAULT_SPEED_MS: u64 = 30;

/// Delay bounds the interactive speed controls clamp to
pub const MIN_SPEED_MS: u64 = 1;
pub const MAX_SPEED_MS: u64 = 150;

/// Default and interactive bounds for the buffer length
pub const DEFAULT_SIZE: usize = 60;
pub const MIN_SIZE: usize = 10;
pub const MAX_SIZE: usize = 200;

/// Lower bound on the delay between reveal-sweep steps
pub const REVEAL_FLOOR_MS: u64 = 5;

/// Total time the reveal sweep is spread across
pub const REVEAL_BUDGET_MS: u64 = 200;

/// Cadence of the elapsed-time clock
pub const TICK_INTERVAL_MS: u64 = 100;
