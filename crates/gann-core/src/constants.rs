//! Constants for the GANN wheel, reference angle sets, and default parameters.

/// Degrees in a full turn of the wheel.
pub const FULL_CIRCLE: f64 = 360.0;

/// Width of one zodiac band in degrees.
pub const SIGN_SPAN: f64 = 30.0;

/// Number of zodiac bands on the wheel.
pub const SIGN_COUNT: usize = 12;

/// Decimal places kept for degrees and zodiac sub-degrees.
pub const DEGREE_DECIMALS: i32 = 2;

/// Cardinal angles. 360 also catches degrees near 0.
pub const CARDINAL_ANGLES: [f64; 4] = [90.0, 180.0, 270.0, 360.0];

/// Ordinal angles.
pub const ORDINAL_ANGLES: [f64; 4] = [45.0, 135.0, 225.0, 315.0];

/// Special angles.
pub const SPECIAL_ANGLES: [f64; 3] = [120.0, 275.0, 325.0];

/// Default base price.
pub const DEFAULT_BASE_VALUE: f64 = 3338.0;

/// Default step added to the base square root per level.
pub const DEFAULT_FACTOR: f64 = 0.11;

/// Default number of up/down levels.
pub const DEFAULT_LEVEL_COUNT: u32 = 10;

/// Default classification tolerance in degrees.
pub const DEFAULT_TOLERANCE: f64 = 5.0;

/// Largest level count accepted by the command-line front end.
///
/// The engine itself accepts any positive count.
pub const MAX_CLI_LEVELS: u32 = 50;

/// Process exit codes.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// Numeric domain failure while deriving a degree.
    pub const ERROR_DOMAIN: i32 = 3;
    /// Invalid input parameters.
    pub const ERROR_CONFIG: i32 = 4;
}
