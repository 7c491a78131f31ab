// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::contracterror;

/// Failure kinds returned by every mutating entry point.
///
/// Codes are stable: clients match on the numeric value
/// (`Error(Contract, #103)` and so on).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// `initialize` was already called
    AlreadyInitialized = 100,
    /// Referenced profile, course, enrollment or post does not exist
    NotFound = 101,
    /// Unique key already taken
    AlreadyExists = 102,
    /// Caller lacks the required role or relationship, or a privileged
    /// numeric bound was violated
    Unauthorized = 103,
    /// Structural precondition failed (unmet prerequisites, bad range, empty field)
    InvalidInput = 104,
    /// Payment token or admin has not been configured
    NotInitialized = 105,
    /// Requested amount exceeds the available balance
    InsufficientBalance = 106,
}
