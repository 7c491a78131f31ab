// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

//! End-to-end scenarios spanning several components.

use soroban_sdk::{vec, Env, String, Vec};

use crate::error::Error;
use crate::test_utils::{
    balance, create_course, create_instructor, create_student, enroll_funded, finish_course, mint,
    setup,
};

#[test]
fn test_default_fee_split_on_enrollment() {
    let env = Env::default();
    let (client, admin, token) = setup(&env);
    let instructor = create_instructor(&client, "Prof. Garcia");
    let student = create_student(&client, "Sophia Lee");
    let course_id = create_course(&client, &instructor, 100_000_000, &Vec::new(&env));

    enroll_funded(&client, &token, &student, course_id);

    assert_eq!(client.get_instructor(&instructor).unwrap().total_earnings, 95_000_000);
    assert_eq!(balance(&env, &token, &admin), 5_000_000);
    assert_eq!(balance(&env, &token, &client.address), 95_000_000);
    assert_eq!(balance(&env, &token, &student), 0);
    assert_eq!(client.get_student_profile(&student).unwrap().total_spent, 100_000_000);
}

#[test]
fn test_fee_change_applies_to_later_enrollments_only() {
    let env = Env::default();
    let (client, admin, token) = setup(&env);
    let instructor = create_instructor(&client, "Prof. Garcia");
    let course_id = create_course(&client, &instructor, 1_000, &Vec::new(&env));

    let early = create_student(&client, "Early Bird");
    enroll_funded(&client, &token, &early, course_id);
    assert_eq!(client.get_instructor(&instructor).unwrap().total_earnings, 950);

    client.set_platform_fee(&admin, &10);

    let late = create_student(&client, "Late Comer");
    enroll_funded(&client, &token, &late, course_id);

    // 950 from the first sale plus 900 from the second
    assert_eq!(client.get_instructor(&instructor).unwrap().total_earnings, 1_850);
    assert_eq!(balance(&env, &token, &admin), 150);
    assert_eq!(client.get_course(&course_id).unwrap().total_students, 2);
}

#[test]
fn test_zero_fee_credits_full_price() {
    let env = Env::default();
    let (client, admin, token) = setup(&env);
    client.set_platform_fee(&admin, &0);

    let instructor = create_instructor(&client, "Prof. Garcia");
    let student = create_student(&client, "Sophia Lee");
    let course_id = create_course(&client, &instructor, 777, &Vec::new(&env));
    enroll_funded(&client, &token, &student, course_id);

    assert_eq!(client.get_instructor(&instructor).unwrap().total_earnings, 777);
    assert_eq!(balance(&env, &token, &admin), 0);
}

#[test]
fn test_prerequisite_chain() {
    let env = Env::default();
    let (client, _, token) = setup(&env);
    let instructor = create_instructor(&client, "Dr. Wilson");
    let student = create_student(&client, "Jane Doe");

    let intro = create_course(&client, &instructor, 10, &Vec::new(&env));
    let intermediate = create_course(&client, &instructor, 20, &vec![&env, intro]);
    let capstone = create_course(&client, &instructor, 30, &vec![&env, intro, intermediate]);

    mint(&env, &token, &student, 30);
    assert_eq!(
        client.try_enroll_in_course(&student, &capstone),
        Err(Ok(Error::InvalidInput))
    );

    enroll_funded(&client, &token, &student, intro);
    finish_course(&client, &student, intro);
    assert_eq!(
        client.try_enroll_in_course(&student, &capstone),
        Err(Ok(Error::InvalidInput))
    );

    enroll_funded(&client, &token, &student, intermediate);
    finish_course(&client, &student, intermediate);
    client.enroll_in_course(&student, &capstone);

    let profile = client.get_student_profile(&student).unwrap();
    assert_eq!(profile.completed_courses, vec![&env, intro, intermediate]);
    assert_eq!(profile.total_spent, 60);
}

#[test]
fn test_instructor_rating_spans_courses() {
    let env = Env::default();
    let (client, _, _) = setup(&env);
    let instructor = create_instructor(&client, "Dr. Johnson");
    let course1 = create_course(&client, &instructor, 0, &Vec::new(&env));
    let course2 = create_course(&client, &instructor, 0, &Vec::new(&env));

    let student = create_student(&client, "Emma Wilson");
    for course_id in [course1, course2] {
        client.enroll_in_course(&student, &course_id);
        finish_course(&client, &student, course_id);
    }

    client.rate_course(&student, &course1, &5);
    client.rate_course(&student, &course2, &2);

    assert_eq!(client.get_course(&course1).unwrap().average_rating, 5);
    assert_eq!(client.get_course(&course2).unwrap().average_rating, 2);

    // floor((5 * 1 + 2) / 2) = 3
    let profile = client.get_instructor(&instructor).unwrap();
    assert_eq!(profile.rating, 3);
    assert_eq!(profile.total_reviews, 2);
}

#[test]
fn test_learning_journey() {
    let env = Env::default();
    let (client, admin, token) = setup(&env);
    let instructor = create_instructor(&client, "Prof. Thompson");
    let student = create_student(&client, "Noah Brown");
    let course_id = create_course(&client, &instructor, 50_000_000, &Vec::new(&env));

    enroll_funded(&client, &token, &student, course_id);
    client.create_discussion_post(
        &student,
        &course_id,
        &String::from_str(&env, "Excited to start!"),
    );
    client.update_progress(&student, &course_id, &60);
    finish_course(&client, &student, course_id);
    client.generate_certificate(&student, &course_id, &String::from_str(&env, "QmCert"));
    client.rate_course(&student, &course_id, &5);
    client.award_achievement(&admin, &student, &String::from_str(&env, "First Course"));

    let enrollment = client.get_enrollment(&student, &course_id).unwrap();
    assert!(enrollment.completed);
    assert_eq!(enrollment.progress, 100);
    assert_eq!(enrollment.completion_certificate, Some(String::from_str(&env, "QmCert")));

    let profile = client.get_student_profile(&student).unwrap();
    assert_eq!(profile.completed_courses.len(), 1);
    assert_eq!(profile.achievements.len(), 1);

    client.withdraw_earnings(&instructor, &47_500_000);
    assert_eq!(balance(&env, &token, &instructor), 47_500_000);
    assert_eq!(client.get_instructor(&instructor).unwrap().total_earnings, 0);
}

#[test]
fn test_priced_enrollment_needs_initialized_token() {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(crate::ElearningPlatform, ());
    let client = crate::ElearningPlatformClient::new(&env, &contract_id);

    let instructor = create_instructor(&client, "Prof. Smith");
    let student = create_student(&client, "Jane Doe");
    let paid = create_course(&client, &instructor, 1_000, &Vec::new(&env));
    let free = create_course(&client, &instructor, 0, &Vec::new(&env));

    assert_eq!(
        client.try_enroll_in_course(&student, &paid),
        Err(Ok(Error::NotInitialized))
    );
    client.enroll_in_course(&student, &free);
    assert_eq!(client.get_course(&free).unwrap().total_students, 1);
    assert_eq!(client.get_course(&paid).unwrap().total_students, 0);
}

#[test]
fn test_contract_version() {
    let env = Env::default();
    let (client, _, _) = setup(&env);

    assert_eq!(
        client.get_contract_version(),
        String::from_str(&env, crate::VERSION)
    );
}
