// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

//! Fee split and escrow accounting for course payments.
//!
//! On enrollment the student pays the platform cut straight to the admin
//! treasury and the instructor share into this contract, where it stays
//! until the instructor withdraws it.

use soroban_sdk::{symbol_short, token, Address, Env, Symbol};

use crate::error::Error;
use crate::functions::config::{get_admin, get_payment_token, get_platform_fee};
use crate::schema::{Course, DataKey, InstructorProfile};

const SETTLE_EVENT: Symbol = symbol_short!("settle");

/// Split `price` into `(platform_cut, instructor_share)`.
///
/// `platform_cut` is `floor(price * fee_percent / 100)`, computed per
/// hundred so the product cannot overflow. `price` must be non-negative and
/// `fee_percent` at most 100.
pub fn split_price(price: i128, fee_percent: u32) -> (i128, i128) {
    let fee: i128 = fee_percent as i128;
    let platform_cut: i128 = price / 100 * fee + price % 100 * fee / 100;
    (platform_cut, price - platform_cut)
}

/// A validated payment, ready to apply.
pub struct Settlement {
    pub student: Address,
    pub course_id: u64,
    pub platform_cut: i128,
    pub instructor_share: i128,
    /// Instructor profile with the share already credited
    pub instructor: InstructorProfile,
    /// `(payment_token, treasury)`; `None` for free courses
    pub payment: Option<(Address, Address)>,
}

/// Compute the split for `course` and check that `student` can pay it.
///
/// Nothing is written or transferred here.
pub fn prepare_settlement(env: &Env, student: &Address, course: &Course) -> Result<Settlement, Error> {
    let (platform_cut, instructor_share) = split_price(course.price, get_platform_fee(env));

    let mut instructor: InstructorProfile = env
        .storage()
        .persistent()
        .get(&DataKey::Instructor(course.instructor.clone()))
        .ok_or(Error::NotFound)?;
    instructor.total_earnings = instructor
        .total_earnings
        .checked_add(instructor_share)
        .ok_or(Error::InvalidInput)?;

    let payment = if course.price > 0 {
        let payment_token: Address = get_payment_token(env).ok_or(Error::NotInitialized)?;
        let treasury: Address = get_admin(env).ok_or(Error::NotInitialized)?;

        if token::Client::new(env, &payment_token).balance(student) < course.price {
            return Err(Error::InsufficientBalance);
        }
        Some((payment_token, treasury))
    } else {
        None
    };

    Ok(Settlement {
        student: student.clone(),
        course_id: course.id,
        platform_cut,
        instructor_share,
        instructor,
        payment,
    })
}

/// Move the funds and credit the instructor's escrowed earnings.
pub fn apply_settlement(env: &Env, settlement: Settlement) {
    if let Some((payment_token, treasury)) = &settlement.payment {
        let client = token::Client::new(env, payment_token);
        if settlement.platform_cut > 0 {
            client.transfer(&settlement.student, treasury, &settlement.platform_cut);
        }
        if settlement.instructor_share > 0 {
            client.transfer(
                &settlement.student,
                &env.current_contract_address(),
                &settlement.instructor_share,
            );
        }
    }

    env.storage().persistent().set(
        &DataKey::Instructor(settlement.instructor.instructor.clone()),
        &settlement.instructor,
    );

    env.events().publish(
        (SETTLE_EVENT, settlement.course_id),
        (
            settlement.student,
            settlement.instructor.instructor,
            settlement.platform_cut,
            settlement.instructor_share,
        ),
    );
}
