//! Scenario data from the reference demonstration.

/// Source buffer for raw-pointer construction.
pub static RAW_SOURCE: [i32; 9] = [9, 8, 7, 6, 5, 4, 3, 2, 1];

/// List-constructed array used by the erase and reserve scenarios.
pub static ERASE_SOURCE: [i32; 11] = [11, 20, 40, 100, 135, 341, 900, 1000, 9000, -1, -432];

/// `ERASE_SOURCE` after `erase(3, 3)`.
pub static ERASE_RESULT: [i32; 8] = [11, 20, 40, 900, 1000, 9000, -1, -432];

/// Length and value for fill construction.
pub const FILL_LEN: usize = 10;
pub const FILL_VALUE: i32 = 10;

/// Value appended by the push-back scenario.
pub const PUSH_MARKER: i32 = 1337;

/// Element count for a 10 GiB request of `i32`.
pub const TEN_GIB_OF_I32: usize = 2_684_354_560;
