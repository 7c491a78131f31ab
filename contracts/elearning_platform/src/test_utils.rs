// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

//! Shared fixtures for the inline contract tests.

use soroban_sdk::{testutils::Address as _, token, Address, Env, String, Vec};

use crate::{ElearningPlatform, ElearningPlatformClient};

/// Register the contract, a payment token and an admin, then initialize.
///
/// Returns `(client, admin, payment_token)`.
pub fn setup(env: &Env) -> (ElearningPlatformClient<'_>, Address, Address) {
    env.mock_all_auths();

    let contract_id: Address = env.register(ElearningPlatform, ());
    let client = ElearningPlatformClient::new(env, &contract_id);

    let admin: Address = Address::generate(env);
    let payment_token: Address = env
        .register_stellar_asset_contract_v2(admin.clone())
        .address();

    client.initialize(&admin, &payment_token);

    (client, admin, payment_token)
}

pub fn mint(env: &Env, payment_token: &Address, to: &Address, amount: i128) {
    token::StellarAssetClient::new(env, payment_token).mint(to, &amount);
}

pub fn balance(env: &Env, payment_token: &Address, who: &Address) -> i128 {
    token::Client::new(env, payment_token).balance(who)
}

pub fn create_student(client: &ElearningPlatformClient<'_>, name: &str) -> Address {
    let student: Address = Address::generate(&client.env);
    client.create_student_profile(&student, &String::from_str(&client.env, name));
    student
}

pub fn create_instructor(client: &ElearningPlatformClient<'_>, name: &str) -> Address {
    let instructor: Address = Address::generate(&client.env);
    client.create_instructor(
        &instructor,
        &String::from_str(&client.env, name),
        &String::from_str(&client.env, "PhD in Computer Science"),
        &String::from_str(&client.env, "Teaching for ten years"),
    );
    instructor
}

pub fn create_course(
    client: &ElearningPlatformClient<'_>,
    instructor: &Address,
    price: i128,
    prerequisites: &Vec<u64>,
) -> u64 {
    client.create_course(
        instructor,
        &String::from_str(&client.env, "Blockchain Fundamentals"),
        &price,
        &String::from_str(&client.env, "QmCourseContentHash"),
        &String::from_str(&client.env, "Blockchain"),
        &String::from_str(&client.env, "Learn the basics of distributed ledgers"),
        prerequisites,
    )
}

/// Mint exactly the course price to the student, then enroll.
pub fn enroll_funded(
    client: &ElearningPlatformClient<'_>,
    payment_token: &Address,
    student: &Address,
    course_id: u64,
) {
    let price: i128 = client.get_course(&course_id).map_or(0, |course| course.price);
    if price > 0 {
        mint(&client.env, payment_token, student, price);
    }
    client.enroll_in_course(student, &course_id);
}

/// Drive an enrollment to 100% and mark it completed.
pub fn finish_course(client: &ElearningPlatformClient<'_>, student: &Address, course_id: u64) {
    client.update_progress(student, &course_id, &100);
    client.complete_course(student, &course_id);
}
