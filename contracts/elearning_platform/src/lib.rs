// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert
#![allow(clippy::too_many_arguments)]
#![no_std]

/// Contract version for tracking deployments and upgrades
pub const VERSION: &str = "1.0.0";

pub mod error;
pub mod functions;
pub mod schema;

#[cfg(test)]
mod test;
#[cfg(test)]
mod test_utils;

use crate::error::Error;
use crate::schema::{Course, DiscussionPost, Enrollment, InstructorProfile, StudentProfile};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

/// E-Learning Platform Contract
///
/// This contract is the marketplace core: learner and instructor profiles,
/// the course catalog with its prerequisite graph, enrollment and progress,
/// ratings, escrowed instructor earnings, per-course forums and
/// achievements. Course material and certificates live off-chain and are
/// referenced by content hash only.
///
/// Every mutating call takes the acting address first and requires its
/// authorization. Failures return an [`Error`] and leave state untouched.
#[contract]
pub struct ElearningPlatform;

#[contractimpl]
impl ElearningPlatform {
    /// One-time setup of the privileged admin and the payment token.
    ///
    /// The admin is the only address allowed to change the platform fee and
    /// award achievements, and it receives the platform cut of every sale.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `admin` - The privileged platform address
    /// * `payment_token` - Token contract used for course payments
    ///
    /// # Errors
    ///
    /// * `AlreadyInitialized` if called a second time
    pub fn initialize(env: Env, admin: Address, payment_token: Address) -> Result<(), Error> {
        functions::config::initialize(&env, admin, payment_token)
    }

    // ---------------------------------------------------------------------
    // Identity registry
    // ---------------------------------------------------------------------

    /// Create the caller's student profile.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `caller` - The student's address
    /// * `name` - Display name
    ///
    /// # Errors
    ///
    /// * `AlreadyExists` if the caller already has a profile
    /// * `InvalidInput` if `name` is empty
    pub fn create_student_profile(env: Env, caller: Address, name: String) -> Result<(), Error> {
        functions::create_student_profile::create_student_profile(&env, caller, name)
    }

    /// Replace the caller's preference tags.
    ///
    /// # Errors
    ///
    /// * `NotFound` if the caller has no student profile
    pub fn update_student_preferences(
        env: Env,
        caller: Address,
        preferences: Vec<String>,
    ) -> Result<(), Error> {
        functions::update_student_preferences::update_student_preferences(&env, caller, preferences)
    }

    /// Register the caller as an instructor.
    ///
    /// # Errors
    ///
    /// * `AlreadyExists` if the caller is already registered
    /// * `InvalidInput` if `name` is empty
    pub fn create_instructor(
        env: Env,
        caller: Address,
        name: String,
        qualifications: String,
        bio: String,
    ) -> Result<(), Error> {
        functions::create_instructor::create_instructor(&env, caller, name, qualifications, bio)
    }

    /// Append an achievement tag to a student's profile (admin only).
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `caller` - Must be the admin
    /// * `student` - The student receiving the achievement
    /// * `achievement` - Free-form tag; duplicates are kept
    ///
    /// # Errors
    ///
    /// * `Unauthorized` if the caller is not the admin
    /// * `NotFound` if the student has no profile
    pub fn award_achievement(
        env: Env,
        caller: Address,
        student: Address,
        achievement: String,
    ) -> Result<(), Error> {
        functions::award_achievement::award_achievement(&env, caller, student, achievement)
    }

    /// Get a student profile by address, if one exists.
    pub fn get_student_profile(env: Env, student: Address) -> Option<StudentProfile> {
        functions::get_profile::get_student_profile(&env, student)
    }

    /// Get an instructor profile by address, if one exists.
    pub fn get_instructor(env: Env, instructor: Address) -> Option<InstructorProfile> {
        functions::get_profile::get_instructor(&env, instructor)
    }

    // ---------------------------------------------------------------------
    // Course catalog
    // ---------------------------------------------------------------------

    /// Create a new course owned by the calling instructor.
    ///
    /// Ids are allocated sequentially from 1 and only consumed by a
    /// successful creation. Prerequisite ids are stored as given.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `caller` - The instructor creating the course
    /// * `title` - Course title
    /// * `price` - Price in payment token units
    /// * `content_hash` - Hash of the off-chain course material
    /// * `category` - Free-form category
    /// * `description` - Short description
    /// * `prerequisites` - Ids of courses a student must complete first
    ///
    /// # Returns
    ///
    /// Returns the id of the new course.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` if the caller has no instructor profile
    /// * `InvalidInput` for a negative price or an empty content hash
    pub fn create_course(
        env: Env,
        caller: Address,
        title: String,
        price: i128,
        content_hash: String,
        category: String,
        description: String,
        prerequisites: Vec<u64>,
    ) -> Result<u64, Error> {
        functions::create_course::create_course(
            &env,
            caller,
            title,
            price,
            content_hash,
            category,
            description,
            prerequisites,
        )
    }

    /// Open or close a course for new enrollments (owning instructor only).
    ///
    /// # Errors
    ///
    /// * `NotFound` if the course does not exist
    /// * `Unauthorized` if the caller does not own the course
    pub fn set_course_active(
        env: Env,
        caller: Address,
        course_id: u64,
        active: bool,
    ) -> Result<(), Error> {
        functions::set_course_active::set_course_active(&env, caller, course_id, active)
    }

    /// Retrieve a course by its id, if it exists.
    pub fn get_course(env: Env, course_id: u64) -> Option<Course> {
        functions::get_course::get_course(&env, course_id)
    }

    /// Number of courses created so far.
    pub fn get_course_count(env: Env) -> u64 {
        functions::create_course::get_course_count(&env)
    }

    /// Get all courses created by a specific instructor, in id order.
    pub fn get_courses_by_instructor(env: Env, instructor: Address) -> Vec<Course> {
        functions::get_course::get_courses_by_instructor(&env, instructor)
    }

    // ---------------------------------------------------------------------
    // Enrollment and progress
    // ---------------------------------------------------------------------

    /// Enroll the caller in a course, paying its price.
    ///
    /// The platform cut goes to the admin; the instructor share is held by
    /// this contract and credited to the instructor's earnings.
    ///
    /// # Arguments
    ///
    /// * `env` - The Soroban environment
    /// * `caller` - The enrolling student
    /// * `course_id` - The course to enroll in
    ///
    /// # Errors
    ///
    /// * `NotFound` if the course or the caller's student profile is missing
    /// * `InvalidInput` if the course is inactive or a prerequisite is not completed
    /// * `AlreadyExists` if the caller is already enrolled
    /// * `NotInitialized` if the course is priced and no payment token is configured
    /// * `InsufficientBalance` if the caller cannot pay the price
    pub fn enroll_in_course(env: Env, caller: Address, course_id: u64) -> Result<(), Error> {
        functions::enroll_in_course::enroll_in_course(&env, caller, course_id)
    }

    /// Record progress (0 to 100) on one of the caller's enrollments.
    ///
    /// # Errors
    ///
    /// * `NotFound` if the caller is not enrolled
    /// * `InvalidInput` if `progress` is above 100
    pub fn update_progress(
        env: Env,
        caller: Address,
        course_id: u64,
        progress: u32,
    ) -> Result<(), Error> {
        functions::update_progress::update_progress(&env, caller, course_id, progress)
    }

    /// Mark one of the caller's enrollments completed. Repeat calls are no-ops.
    ///
    /// # Errors
    ///
    /// * `NotFound` if the caller is not enrolled
    pub fn complete_course(env: Env, caller: Address, course_id: u64) -> Result<(), Error> {
        functions::complete_course::complete_course(&env, caller, course_id)
    }

    /// Attach a completion certificate hash to a completed enrollment.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` unless the caller has completed the course
    /// * `InvalidInput` if the hash is empty
    /// * `AlreadyExists` if a certificate was already recorded
    pub fn generate_certificate(
        env: Env,
        caller: Address,
        course_id: u64,
        certificate_hash: String,
    ) -> Result<(), Error> {
        functions::generate_certificate::generate_certificate(&env, caller, course_id, certificate_hash)
    }

    /// Get a student's enrollment in a course, if any.
    pub fn get_enrollment(env: Env, student: Address, course_id: u64) -> Option<Enrollment> {
        functions::get_enrollment::get_enrollment(&env, student, course_id)
    }

    // ---------------------------------------------------------------------
    // Ratings
    // ---------------------------------------------------------------------

    /// Rate a completed course from 1 to 5 stars.
    ///
    /// Updates the course average and the instructor's rating with the same
    /// integer floor-average rule.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` unless the caller has completed the course
    /// * `InvalidInput` if `stars` is outside 1..=5
    pub fn rate_course(env: Env, caller: Address, course_id: u64, stars: u32) -> Result<(), Error> {
        functions::rate_course::rate_course(&env, caller, course_id, stars)
    }

    // ---------------------------------------------------------------------
    // Payments and platform configuration
    // ---------------------------------------------------------------------

    /// Withdraw escrowed earnings to the calling instructor.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` if the caller has no instructor profile
    /// * `InvalidInput` if `amount` is not positive
    /// * `InsufficientBalance` if `amount` exceeds the available earnings
    /// * `NotInitialized` if no payment token is configured
    pub fn withdraw_earnings(env: Env, caller: Address, amount: i128) -> Result<(), Error> {
        functions::withdraw_earnings::withdraw_earnings(&env, caller, amount)
    }

    /// Set the platform fee percentage (admin only).
    ///
    /// # Errors
    ///
    /// * `Unauthorized` if the caller is not the admin or `percent` exceeds 100
    pub fn set_platform_fee(env: Env, caller: Address, percent: u32) -> Result<(), Error> {
        functions::config::set_platform_fee(&env, caller, percent)
    }

    /// Current platform fee percentage (5 unless changed).
    pub fn get_platform_fee(env: Env) -> u32 {
        functions::config::get_platform_fee(&env)
    }

    /// The privileged admin address, once initialized.
    pub fn get_admin(env: Env) -> Option<Address> {
        functions::config::get_admin(&env)
    }

    /// The payment token contract, once initialized.
    pub fn get_payment_token(env: Env) -> Option<Address> {
        functions::config::get_payment_token(&env)
    }

    // ---------------------------------------------------------------------
    // Discussion forum
    // ---------------------------------------------------------------------

    /// Post to a course's forum.
    ///
    /// # Returns
    ///
    /// Returns the post id, sequential per course starting at 1.
    ///
    /// # Errors
    ///
    /// * `Unauthorized` if the caller is not enrolled in the course
    /// * `InvalidInput` if `content` is empty
    pub fn create_discussion_post(
        env: Env,
        caller: Address,
        course_id: u64,
        content: String,
    ) -> Result<u64, Error> {
        functions::create_discussion_post::create_discussion_post(&env, caller, course_id, content)
    }

    /// Upvote a forum post, once per caller.
    ///
    /// # Errors
    ///
    /// * `NotFound` if the post does not exist
    /// * `AlreadyExists` if the caller already upvoted it
    pub fn upvote_post(env: Env, caller: Address, course_id: u64, post_id: u64) -> Result<(), Error> {
        functions::upvote_post::upvote_post(&env, caller, course_id, post_id)
    }

    /// Retrieve a forum post by course and post id, if it exists.
    pub fn get_discussion_post(env: Env, course_id: u64, post_id: u64) -> Option<DiscussionPost> {
        functions::get_discussion_post::get_discussion_post(&env, course_id, post_id)
    }

    /// Get the current contract version
    ///
    /// # Returns
    /// * `String` - The current contract version
    pub fn get_contract_version(env: Env) -> String {
        String::from_str(&env, VERSION)
    }
}
