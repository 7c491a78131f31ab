// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::Error;
use crate::schema::{DataKey, InstructorProfile};

const CREATE_INSTRUCTOR_EVENT: Symbol = symbol_short!("crtInstr");

/// Register the caller as an instructor.
///
/// A second registration from the same address is rejected rather than
/// overwriting, which would otherwise reset rating and escrowed earnings.
pub fn create_instructor(
    env: &Env,
    caller: Address,
    name: String,
    qualifications: String,
    bio: String,
) -> Result<(), Error> {
    caller.require_auth();

    let key = DataKey::Instructor(caller.clone());
    if env.storage().persistent().has(&key) {
        return Err(Error::AlreadyExists);
    }

    if name.is_empty() {
        return Err(Error::InvalidInput);
    }

    let profile = InstructorProfile {
        instructor: caller.clone(),
        name: name.clone(),
        qualifications,
        bio,
        rating: 0,
        total_reviews: 0,
        total_earnings: 0,
        joined_at: env.ledger().timestamp(),
    };
    env.storage().persistent().set(&key, &profile);

    env.events().publish((CREATE_INSTRUCTOR_EVENT,), (caller, name));

    Ok(())
}
