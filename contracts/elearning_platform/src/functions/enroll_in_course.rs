// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, Symbol, Vec};

use crate::error::Error;
use crate::functions::escrow::{apply_settlement, prepare_settlement};
use crate::schema::{Course, DataKey, Enrollment, StudentProfile};

const ENROLL_EVENT: Symbol = symbol_short!("enroll");

/// Enroll the caller in a course and settle its price.
///
/// Every check runs before the first write, so a rejected enrollment can be
/// resubmitted safely.
pub fn enroll_in_course(env: &Env, caller: Address, course_id: u64) -> Result<(), Error> {
    caller.require_auth();

    let course_key = DataKey::Course(course_id);
    let mut course: Course = env
        .storage()
        .persistent()
        .get(&course_key)
        .ok_or(Error::NotFound)?;

    let student_key = DataKey::Student(caller.clone());
    let mut student: StudentProfile = env
        .storage()
        .persistent()
        .get(&student_key)
        .ok_or(Error::NotFound)?;

    let enrollment_key = DataKey::Enrollment(caller.clone(), course_id);
    if env.storage().persistent().has(&enrollment_key) {
        return Err(Error::AlreadyExists);
    }

    if !course.is_active {
        return Err(Error::InvalidInput);
    }
    check_prerequisites(env, &caller, &course.prerequisites)?;

    let settlement = prepare_settlement(env, &caller, &course)?;

    student.total_spent = student
        .total_spent
        .checked_add(course.price)
        .ok_or(Error::InvalidInput)?;
    course.total_students = course
        .total_students
        .checked_add(1)
        .ok_or(Error::InvalidInput)?;

    let now: u64 = env.ledger().timestamp();
    let enrollment = Enrollment {
        student: caller.clone(),
        course_id,
        enrolled_at: now,
        completed: false,
        progress: 0,
        last_accessed: now,
        completion_certificate: None,
    };

    apply_settlement(env, settlement);
    env.storage().persistent().set(&enrollment_key, &enrollment);
    env.storage().persistent().set(&course_key, &course);
    env.storage().persistent().set(&student_key, &student);

    env.events()
        .publish((ENROLL_EVENT, course_id), (caller, course.price));

    Ok(())
}

/// Every prerequisite must have a completed enrollment for `student`.
fn check_prerequisites(env: &Env, student: &Address, prerequisites: &Vec<u64>) -> Result<(), Error> {
    for prerequisite in prerequisites.iter() {
        let completed: bool = env
            .storage()
            .persistent()
            .get::<DataKey, Enrollment>(&DataKey::Enrollment(student.clone(), prerequisite))
            .is_some_and(|enrollment| enrollment.completed);

        if !completed {
            return Err(Error::InvalidInput);
        }
    }
    Ok(())
}
