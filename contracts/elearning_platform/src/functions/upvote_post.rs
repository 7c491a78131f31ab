// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::error::Error;
use crate::schema::{DataKey, DiscussionPost};

const UPVOTE_EVENT: Symbol = symbol_short!("upvote");

/// Upvote a forum post. Each address may upvote a given post once.
pub fn upvote_post(env: &Env, caller: Address, course_id: u64, post_id: u64) -> Result<(), Error> {
    caller.require_auth();

    let post_key = DataKey::Post(course_id, post_id);
    let mut post: DiscussionPost = env
        .storage()
        .persistent()
        .get(&post_key)
        .ok_or(Error::NotFound)?;

    let vote_key = DataKey::PostVote(course_id, post_id, caller.clone());
    if env.storage().persistent().has(&vote_key) {
        return Err(Error::AlreadyExists);
    }

    post.upvotes = post.upvotes.checked_add(1).ok_or(Error::InvalidInput)?;

    env.storage().persistent().set(&vote_key, &true);
    env.storage().persistent().set(&post_key, &post);

    env.events()
        .publish((UPVOTE_EVENT, course_id, post_id), (caller, post.upvotes));

    Ok(())
}
