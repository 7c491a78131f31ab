// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::error::Error;
use crate::functions::access_control::require_admin;
use crate::schema::{DataKey, DEFAULT_PLATFORM_FEE, MAX_PLATFORM_FEE};

const INIT_EVENT: Symbol = symbol_short!("init");
const SET_FEE_EVENT: Symbol = symbol_short!("setFee");

/// One-time setup of the privileged identity and the payment token.
pub fn initialize(env: &Env, admin: Address, payment_token: Address) -> Result<(), Error> {
    admin.require_auth();

    let storage = env.storage().instance();
    if storage.has(&DataKey::Admin) {
        return Err(Error::AlreadyInitialized);
    }

    storage.set(&DataKey::Admin, &admin);
    storage.set(&DataKey::PaymentToken, &payment_token);
    storage.set(&DataKey::PlatformFee, &DEFAULT_PLATFORM_FEE);

    env.events()
        .publish((INIT_EVENT,), (admin, payment_token, DEFAULT_PLATFORM_FEE));

    Ok(())
}

/// Change the platform fee percentage.
///
/// A non-admin caller and a percentage above 100 both fail with
/// `Unauthorized`; the stored fee is left untouched.
pub fn set_platform_fee(env: &Env, caller: Address, percent: u32) -> Result<(), Error> {
    caller.require_auth();
    require_admin(env, &caller)?;

    if percent > MAX_PLATFORM_FEE {
        return Err(Error::Unauthorized);
    }

    env.storage().instance().set(&DataKey::PlatformFee, &percent);

    env.events().publish((SET_FEE_EVENT,), (caller, percent));

    Ok(())
}

pub fn get_platform_fee(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::PlatformFee)
        .unwrap_or(DEFAULT_PLATFORM_FEE)
}

pub fn get_admin(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::Admin)
}

pub fn get_payment_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&DataKey::PaymentToken)
}
