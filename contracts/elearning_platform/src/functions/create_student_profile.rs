// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, String, Symbol, Vec};

use crate::error::Error;
use crate::schema::{DataKey, StudentProfile};

const CREATE_STUDENT_EVENT: Symbol = symbol_short!("crtStdnt");

pub fn create_student_profile(env: &Env, caller: Address, name: String) -> Result<(), Error> {
    caller.require_auth();

    let key = DataKey::Student(caller.clone());
    if env.storage().persistent().has(&key) {
        return Err(Error::AlreadyExists);
    }

    if name.is_empty() {
        return Err(Error::InvalidInput);
    }

    let profile = StudentProfile {
        student: caller.clone(),
        name: name.clone(),
        preferences: Vec::new(env),
        completed_courses: Vec::new(env),
        total_spent: 0,
        joined_at: env.ledger().timestamp(),
        achievements: Vec::new(env),
    };
    env.storage().persistent().set(&key, &profile);

    env.events().publish((CREATE_STUDENT_EVENT,), (caller, name));

    Ok(())
}
