// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

use crate::error::Error;
use crate::functions::access_control::require_completed_enrollment;
use crate::schema::DataKey;

const CERTIFICATE_EVENT: Symbol = symbol_short!("certify");

/// Attach a certificate hash to a completed enrollment. Set once.
pub fn generate_certificate(
    env: &Env,
    caller: Address,
    course_id: u64,
    certificate_hash: String,
) -> Result<(), Error> {
    caller.require_auth();

    let mut enrollment = require_completed_enrollment(env, &caller, course_id)?;

    if certificate_hash.is_empty() {
        return Err(Error::InvalidInput);
    }
    if enrollment.completion_certificate.is_some() {
        return Err(Error::AlreadyExists);
    }

    enrollment.completion_certificate = Some(certificate_hash.clone());
    env.storage()
        .persistent()
        .set(&DataKey::Enrollment(caller.clone(), course_id), &enrollment);

    env.events()
        .publish((CERTIFICATE_EVENT, course_id), (caller, certificate_hash));

    Ok(())
}
