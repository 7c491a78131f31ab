// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::error::Error;
use crate::schema::{DataKey, Enrollment, StudentProfile};

const COMPLETE_EVENT: Symbol = symbol_short!("complete");

/// Mark the caller's enrollment completed and record the course on the
/// student profile.
///
/// Completing an already completed course is a no-op.
pub fn complete_course(env: &Env, caller: Address, course_id: u64) -> Result<(), Error> {
    caller.require_auth();

    let enrollment_key = DataKey::Enrollment(caller.clone(), course_id);
    let mut enrollment: Enrollment = env
        .storage()
        .persistent()
        .get(&enrollment_key)
        .ok_or(Error::NotFound)?;

    if enrollment.completed {
        return Ok(());
    }

    let student_key = DataKey::Student(caller.clone());
    let mut student: StudentProfile = env
        .storage()
        .persistent()
        .get(&student_key)
        .ok_or(Error::NotFound)?;

    enrollment.completed = true;
    enrollment.last_accessed = env.ledger().timestamp();
    if !student.completed_courses.contains(course_id) {
        student.completed_courses.push_back(course_id);
    }

    env.storage().persistent().set(&enrollment_key, &enrollment);
    env.storage().persistent().set(&student_key, &student);

    env.events().publish((COMPLETE_EVENT, course_id), caller);

    Ok(())
}
