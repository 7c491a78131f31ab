// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::Error;
use crate::functions::access_control::require_admin;
use crate::schema::{DataKey, StudentProfile};

const AWARD_EVENT: Symbol = symbol_short!("award");

/// Append an achievement tag to a student's profile. Admin only.
///
/// Tags are not de-duplicated.
pub fn award_achievement(
    env: &Env,
    caller: Address,
    student: Address,
    achievement: String,
) -> Result<(), Error> {
    caller.require_auth();
    require_admin(env, &caller)?;

    let key = DataKey::Student(student.clone());
    let mut profile: StudentProfile = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;

    profile.achievements.push_back(achievement.clone());
    env.storage().persistent().set(&key, &profile);

    env.events().publish((AWARD_EVENT, student), achievement);

    Ok(())
}
