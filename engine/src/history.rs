//! Compiled-in price history.
//!
//! The series is baked into the binary rather than taken from the
//! caller: a computation identity must map one input price to exactly
//! one journal, so every bit of non-input data has to ship with the
//! build.

/// Thirty days of (day index, USD price per ETH).
pub const PRICE_HISTORY: [(u64, u64); 30] = [
    (1, 3200),
    (2, 3215),
    (3, 3189),
    (4, 3221),
    (5, 3254),
    (6, 3278),
    (7, 3242),
    (8, 3291),
    (9, 3315),
    (10, 3287),
    (11, 3324),
    (12, 3352),
    (13, 3389),
    (14, 3412),
    (15, 3398),
    (16, 3436),
    (17, 3462),
    (18, 3489),
    (19, 3453),
    (20, 3507),
    (21, 3534),
    (22, 3561),
    (23, 3528),
    (24, 3582),
    (25, 3615),
    (26, 3648),
    (27, 3621),
    (28, 3674),
    (29, 3702),
    (30, 3735),
];

/// USD price anchoring the conversion between the USD regression space
/// and wei-denominated inputs.
pub const BASE_USD_PRICE: u64 = 3200;

/// Day index the engine projects to (one past the series).
pub const PROJECTION_DAY: u64 = 31;
