// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command implementations for the dod CLI.

pub mod categorize;
pub mod generate;
