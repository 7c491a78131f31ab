// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::error::Error;
use crate::schema::{DataKey, Enrollment, MAX_PROGRESS};

const PROGRESS_EVENT: Symbol = symbol_short!("progress");

/// Record the caller's progress in a course.
///
/// The value is stored as given; lowering it is allowed.
pub fn update_progress(env: &Env, caller: Address, course_id: u64, progress: u32) -> Result<(), Error> {
    caller.require_auth();

    let key = DataKey::Enrollment(caller.clone(), course_id);
    let mut enrollment: Enrollment = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;

    if progress > MAX_PROGRESS {
        return Err(Error::InvalidInput);
    }

    enrollment.progress = progress;
    enrollment.last_accessed = env.ledger().timestamp();
    env.storage().persistent().set(&key, &enrollment);

    env.events()
        .publish((PROGRESS_EVENT, course_id), (caller, progress));

    Ok(())
}
