// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::Error;
use crate::functions::access_control::require_enrollment;
use crate::schema::{DataKey, DiscussionPost};

const CREATE_POST_EVENT: Symbol = symbol_short!("crtPost");

/// Post to a course forum and return the new per-course post id.
///
/// Any enrollment in the course, completed or not, grants posting rights.
pub fn create_discussion_post(
    env: &Env,
    caller: Address,
    course_id: u64,
    content: String,
) -> Result<u64, Error> {
    caller.require_auth();
    require_enrollment(env, &caller, course_id)?;

    if content.is_empty() {
        return Err(Error::InvalidInput);
    }

    let post_id: u64 = generate_post_id(env, course_id);

    let post = DiscussionPost {
        course_id,
        post_id,
        author: caller.clone(),
        content,
        upvotes: 0,
        created_at: env.ledger().timestamp(),
    };
    env.storage()
        .persistent()
        .set(&DataKey::Post(course_id, post_id), &post);

    env.events()
        .publish((CREATE_POST_EVENT, course_id), (post_id, caller));

    Ok(post_id)
}

fn generate_post_id(env: &Env, course_id: u64) -> u64 {
    let key = DataKey::PostCount(course_id);
    let current_id: u64 = env.storage().persistent().get(&key).unwrap_or(0);
    let new_id: u64 = current_id + 1;
    env.storage().persistent().set(&key, &new_id);
    new_id
}
