// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Text helpers shared by indexing and querying.
//!
//! Index time and query time must agree on normalization byte for byte, or
//! prefix matching silently finds nothing. Both sides go through `tokenize`.

pub mod tokenize;

pub use tokenize::*;
