// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

//! Authorization predicates shared by every entry point.
//!
//! None of these write state; each answers whether `caller` may act and
//! hands back the record it had to load to decide.

use soroban_sdk::{Address, Env};

use crate::error::Error;
use crate::schema::{DataKey, Enrollment, InstructorProfile};

/// Caller must be the privileged identity recorded at initialization.
pub fn require_admin(env: &Env, caller: &Address) -> Result<Address, Error> {
    match env.storage().instance().get::<DataKey, Address>(&DataKey::Admin) {
        Some(admin) if admin == *caller => Ok(admin),
        _ => Err(Error::Unauthorized),
    }
}

/// Caller must hold an instructor profile.
pub fn require_instructor(env: &Env, caller: &Address) -> Result<InstructorProfile, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Instructor(caller.clone()))
        .ok_or(Error::Unauthorized)
}

/// Caller must hold an enrollment (completed or not) in the course.
pub fn require_enrollment(env: &Env, caller: &Address, course_id: u64) -> Result<Enrollment, Error> {
    env.storage()
        .persistent()
        .get(&DataKey::Enrollment(caller.clone(), course_id))
        .ok_or(Error::Unauthorized)
}

/// Caller must have completed the course.
pub fn require_completed_enrollment(
    env: &Env,
    caller: &Address,
    course_id: u64,
) -> Result<Enrollment, Error> {
    let enrollment = require_enrollment(env, caller, course_id)?;
    if !enrollment.completed {
        return Err(Error::Unauthorized);
    }
    Ok(enrollment)
}
