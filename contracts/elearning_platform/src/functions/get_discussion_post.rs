// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::Env;

use crate::schema::{DataKey, DiscussionPost};

pub fn get_discussion_post(env: &Env, course_id: u64, post_id: u64) -> Option<DiscussionPost> {
    env.storage()
        .persistent()
        .get(&DataKey::Post(course_id, post_id))
}
