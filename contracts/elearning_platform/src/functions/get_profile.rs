// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{Address, Env};

use crate::schema::{DataKey, InstructorProfile, StudentProfile};

pub fn get_student_profile(env: &Env, student: Address) -> Option<StudentProfile> {
    env.storage().persistent().get(&DataKey::Student(student))
}

pub fn get_instructor(env: &Env, instructor: Address) -> Option<InstructorProfile> {
    env.storage().persistent().get(&DataKey::Instructor(instructor))
}
