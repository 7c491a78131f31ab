// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, token, Address, Env, Symbol};

use crate::error::Error;
use crate::functions::access_control::require_instructor;
use crate::functions::config::get_payment_token;
use crate::schema::DataKey;

const WITHDRAW_EVENT: Symbol = symbol_short!("withdraw");

/// Pay out part of the caller's escrowed earnings.
pub fn withdraw_earnings(env: &Env, caller: Address, amount: i128) -> Result<(), Error> {
    caller.require_auth();
    let mut instructor = require_instructor(env, &caller)?;

    if amount <= 0 {
        return Err(Error::InvalidInput);
    }
    if amount > instructor.total_earnings {
        return Err(Error::InsufficientBalance);
    }
    let payment_token: Address = get_payment_token(env).ok_or(Error::NotInitialized)?;

    instructor.total_earnings -= amount;
    env.storage()
        .persistent()
        .set(&DataKey::Instructor(caller.clone()), &instructor);

    token::Client::new(env, &payment_token).transfer(
        &env.current_contract_address(),
        &caller,
        &amount,
    );

    env.events()
        .publish((WITHDRAW_EVENT,), (caller, amount, instructor.total_earnings));

    Ok(())
}
