//! Academic policy constants
//!
//! Defines the GPA thresholds and credit tiers used by the grade calculator.

/// Lowest GPA on the 4.0 scale
pub const MIN_GPA: f64 = 0.0;

/// Highest GPA on the 4.0 scale
pub const MAX_GPA: f64 = 4.0;

/// Last semester of the lenient early stage (no suspension)
pub const EARLY_STAGE_LAST_SEMESTER: u32 = 2;

/// Last semester of the intermediate stage
pub const MID_STAGE_LAST_SEMESTER: u32 = 4;

/// GPA needed for ACTIVE standing in semesters 1-2
pub const EARLY_ACTIVE_GPA: f64 = 2.00;

/// GPA needed for ACTIVE standing in semesters 3-4
pub const MID_ACTIVE_GPA: f64 = 2.25;

/// GPA needed for ACTIVE standing from semester 5 on
pub const LATE_ACTIVE_GPA: f64 = 2.50;

/// Below this GPA a student past the early stage is suspended
pub const PROBATION_FLOOR_GPA: f64 = 2.00;

/// GPA needed for the top credit tier
pub const HIGH_CREDIT_GPA: f64 = 3.00;

/// GPA needed for the upper-middle credit tier
pub const UPPER_CREDIT_GPA: f64 = 2.50;

/// GPA needed for the lower-middle credit tier
pub const LOWER_CREDIT_GPA: f64 = 2.00;

/// Credit load for GPA >= 3.00
pub const MAX_CREDITS_HIGH: u32 = 24;

/// Credit load for 2.50 <= GPA < 3.00
pub const MAX_CREDITS_UPPER: u32 = 21;

/// Credit load for 2.00 <= GPA < 2.50
pub const MAX_CREDITS_LOWER: u32 = 18;

/// Credit load for GPA < 2.00
pub const MAX_CREDITS_MIN: u32 = 15;

/// Decimal places GPA values are rounded to
pub const GPA_DECIMALS: i32 = 2;
