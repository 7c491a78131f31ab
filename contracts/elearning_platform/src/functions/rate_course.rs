// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::error::Error;
use crate::functions::access_control::require_completed_enrollment;
use crate::schema::{Course, DataKey, InstructorProfile, MAX_RATING, MIN_RATING};

const RATE_EVENT: Symbol = symbol_short!("rate");

/// Integer running average: `floor((average * count + sample) / (count + 1))`.
///
/// Widened to u64 so the product cannot overflow for any u32 inputs.
pub fn floor_average(average: u32, count: u32, sample: u32) -> u32 {
    let total: u64 = average as u64 * count as u64 + sample as u64;
    (total / (count as u64 + 1)) as u32
}

/// Rate a completed course and fold the stars into both the course and the
/// instructor aggregates.
pub fn rate_course(env: &Env, caller: Address, course_id: u64, stars: u32) -> Result<(), Error> {
    caller.require_auth();
    require_completed_enrollment(env, &caller, course_id)?;

    if !(MIN_RATING..=MAX_RATING).contains(&stars) {
        return Err(Error::InvalidInput);
    }

    let course_key = DataKey::Course(course_id);
    let mut course: Course = env
        .storage()
        .persistent()
        .get(&course_key)
        .ok_or(Error::NotFound)?;

    let instructor_key = DataKey::Instructor(course.instructor.clone());
    let mut instructor: InstructorProfile = env
        .storage()
        .persistent()
        .get(&instructor_key)
        .ok_or(Error::NotFound)?;

    course.total_ratings = course.total_ratings.checked_add(1).ok_or(Error::InvalidInput)?;
    instructor.total_reviews = instructor
        .total_reviews
        .checked_add(1)
        .ok_or(Error::InvalidInput)?;
    course.average_rating = floor_average(course.average_rating, course.total_ratings - 1, stars);
    instructor.rating = floor_average(instructor.rating, instructor.total_reviews - 1, stars);

    env.storage().persistent().set(&course_key, &course);
    env.storage().persistent().set(&instructor_key, &instructor);

    env.events().publish(
        (RATE_EVENT, course_id),
        (caller, stars, course.average_rating),
    );

    Ok(())
}
