// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Priority boost.
//!
//! Admins give restaurants a display priority where 1 means "show first". The
//! boost inverts it so that bigger is better:
//!
//! | Priority | Boost |
//! |----------|-------|
//! | 1        | 100.0 |
//! | 2        | 50.0  |
//! | 4        | 25.0  |
//! | none / 0 | 0.0   |
//!
//! Dishes are never boosted.

/// Numerator of the inverse-priority boost.
pub const PRIORITY_BOOST: f64 = 100.0;

/// Boost for a restaurant with the given display priority.
///
/// Missing, zero, and NaN priorities all yield 0.
pub fn match_score(priority: Option<f64>) -> f64 {
    match priority {
        Some(priority) if priority != 0.0 && !priority.is_nan() => PRIORITY_BOOST / priority,
        _ => 0.0,
    }
}
