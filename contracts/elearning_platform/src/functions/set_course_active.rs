// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::error::Error;
use crate::schema::{Course, DataKey};

const SET_ACTIVE_EVENT: Symbol = symbol_short!("setActive");

/// Open or close a course for new enrollments. Owning instructor only.
///
/// Existing enrollments keep working either way.
pub fn set_course_active(
    env: &Env,
    caller: Address,
    course_id: u64,
    active: bool,
) -> Result<(), Error> {
    caller.require_auth();

    let key = DataKey::Course(course_id);
    let mut course: Course = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;

    if course.instructor != caller {
        return Err(Error::Unauthorized);
    }

    course.is_active = active;
    env.storage().persistent().set(&key, &course);

    env.events()
        .publish((SET_ACTIVE_EVENT, course_id), active);

    Ok(())
}
