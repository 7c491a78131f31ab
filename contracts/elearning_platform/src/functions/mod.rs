// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

pub mod access_control;
pub mod award_achievement;
pub mod complete_course;
pub mod config;
pub mod create_course;
pub mod create_discussion_post;
pub mod create_instructor;
pub mod create_student_profile;
pub mod enroll_in_course;
pub mod escrow;
pub mod generate_certificate;
pub mod get_course;
pub mod get_discussion_post;
pub mod get_enrollment;
pub mod get_profile;
pub mod rate_course;
pub mod set_course_active;
pub mod update_progress;
pub mod update_student_preferences;
pub mod upvote_post;
pub mod withdraw_earnings;
