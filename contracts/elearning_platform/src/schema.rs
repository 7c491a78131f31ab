// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{contracttype, Address, String, Vec};

/// Platform fee applied when nothing else has been configured.
pub const DEFAULT_PLATFORM_FEE: u32 = 5;
pub const MAX_PLATFORM_FEE: u32 = 100;

pub const MAX_PROGRESS: u32 = 100;

/// Upper bound on course ids visited by catalog scans.
pub const MAX_LOOP_GUARD: u64 = 1000;

pub const MIN_RATING: u32 = 1;
pub const MAX_RATING: u32 = 5;

/// Learner profile.
///
/// One record per address, created once and never deleted.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StudentProfile {
    /// Owner of the profile
    pub student: Address,
    pub name: String,
    /// Preference tags, replaced wholesale on update
    pub preferences: Vec<String>,
    /// Ids of completed courses, each recorded once
    pub completed_courses: Vec<u64>,
    /// Sum of every course price paid (never decreases)
    pub total_spent: i128,
    pub joined_at: u64,
    /// Awarded achievement tags in award order (duplicates kept)
    pub achievements: Vec<String>,
}

/// Instructor profile with reputation and escrowed earnings.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InstructorProfile {
    pub instructor: Address,
    pub name: String,
    pub qualifications: String,
    pub bio: String,
    /// Floor-averaged rating across every review of the instructor's courses
    pub rating: u32,
    pub total_reviews: u32,
    /// Withdrawable balance held in escrow by the contract
    pub total_earnings: i128,
    pub joined_at: u64,
}

/// Course catalog entry.
///
/// Material lives off-chain and is referenced by `content_hash` only.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Course {
    /// Sequential id, starting at 1
    pub id: u64,
    pub instructor: Address,
    pub title: String,
    pub price: i128,
    pub content_hash: String,
    pub category: String,
    pub description: String,
    /// Courses that must be completed before enrolling, stored verbatim
    pub prerequisites: Vec<u64>,
    pub total_students: u32,
    /// Floor-averaged star rating
    pub average_rating: u32,
    pub total_ratings: u32,
    pub is_active: bool,
    pub created_at: u64,
}

/// A student's enrollment in one course.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Enrollment {
    pub student: Address,
    pub course_id: u64,
    pub enrolled_at: u64,
    /// One-way flag: false -> true
    pub completed: bool,
    /// Percentage in 0..=100
    pub progress: u32,
    pub last_accessed: u64,
    /// Certificate content hash, set at most once after completion
    pub completion_certificate: Option<String>,
}

/// Forum post scoped to a course.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DiscussionPost {
    pub course_id: u64,
    /// Per-course sequential id, starting at 1
    pub post_id: u64,
    pub author: Address,
    pub content: String,
    pub upvotes: u32,
    pub created_at: u64,
}

/// Storage keys for different data types in the contract.
///
/// Configuration keys live in instance storage, everything else in
/// persistent storage.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    /// Privileged deploying identity
    Admin,
    /// Token contract used for course payments and withdrawals
    PaymentToken,
    /// Platform fee percentage (0..=100)
    PlatformFee,
    /// Last allocated course id
    CourseCount,
    /// student -> StudentProfile
    Student(Address),
    /// instructor -> InstructorProfile
    Instructor(Address),
    /// course_id -> Course
    Course(u64),
    /// (student, course_id) -> Enrollment
    Enrollment(Address, u64),
    /// course_id -> last allocated post id
    PostCount(u64),
    /// (course_id, post_id) -> DiscussionPost
    Post(u64, u64),
    /// (course_id, post_id, voter) -> ()
    PostVote(u64, u64, Address),
}
