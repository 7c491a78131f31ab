// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, String, Symbol, Vec};

use crate::error::Error;
use crate::functions::access_control::require_instructor;
use crate::schema::{Course, DataKey};

const CREATE_COURSE_EVENT: Symbol = symbol_short!("crtCourse");

/// Create a course owned by the calling instructor and return its id.
///
/// Prerequisite ids are stored as given; ids that never existed simply
/// can never be completed.
pub fn create_course(
    env: &Env,
    caller: Address,
    title: String,
    price: i128,
    content_hash: String,
    category: String,
    description: String,
    prerequisites: Vec<u64>,
) -> Result<u64, Error> {
    caller.require_auth();
    require_instructor(env, &caller)?;

    if price < 0 {
        return Err(Error::InvalidInput);
    }
    if content_hash.is_empty() {
        return Err(Error::InvalidInput);
    }

    // allocated only once every check has passed
    let id: u64 = generate_course_id(env);

    let course = Course {
        id,
        instructor: caller.clone(),
        title,
        price,
        content_hash: content_hash.clone(),
        category,
        description,
        prerequisites,
        total_students: 0,
        average_rating: 0,
        total_ratings: 0,
        is_active: true,
        created_at: env.ledger().timestamp(),
    };
    env.storage().persistent().set(&DataKey::Course(id), &course);

    env.events()
        .publish((CREATE_COURSE_EVENT,), (id, caller, price, content_hash));

    Ok(id)
}

pub fn generate_course_id(env: &Env) -> u64 {
    let current_id: u64 = get_course_count(env);
    let new_id: u64 = current_id + 1;
    env.storage().persistent().set(&DataKey::CourseCount, &new_id);
    new_id
}

/// Number of courses created so far, which is also the last allocated id.
pub fn get_course_count(env: &Env) -> u64 {
    env.storage()
        .persistent()
        .get(&DataKey::CourseCount)
        .unwrap_or(0)
}
