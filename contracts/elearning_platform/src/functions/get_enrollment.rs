// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{Address, Env};

use crate::schema::{DataKey, Enrollment};

pub fn get_enrollment(env: &Env, student: Address, course_id: u64) -> Option<Enrollment> {
    env.storage()
        .persistent()
        .get(&DataKey::Enrollment(student, course_id))
}
