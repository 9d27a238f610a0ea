// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get ordered.
//!
//! There is exactly one number per result, the priority boost, fixed when the
//! index is built. Text-match quality plays no part in the ordering: once a
//! result matches every query token it is in, and only the boost, the result
//! type, and the title decide where it lands.

mod core;
pub mod ranking;

pub use self::core::*;
pub use ranking::compare_results;
