// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{Address, Env, Vec};

use crate::functions::create_course::get_course_count;
use crate::schema::{Course, DataKey, MAX_LOOP_GUARD};

pub fn get_course(env: &Env, course_id: u64) -> Option<Course> {
    env.storage().persistent().get(&DataKey::Course(course_id))
}

/// All courses owned by `instructor`, in id order. Inactive courses are included.
///
/// Only ids up to `MAX_LOOP_GUARD` are scanned.
pub fn get_courses_by_instructor(env: &Env, instructor: Address) -> Vec<Course> {
    let mut results: Vec<Course> = Vec::new(env);
    let last_id: u64 = get_course_count(env).min(MAX_LOOP_GUARD);

    for id in 1..=last_id {
        if let Some(course) = get_course(env, id) {
            if course.instructor == instructor {
                results.push_back(course);
            }
        }
    }

    results
}
