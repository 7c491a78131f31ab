// SPDX-License-Identifier: MIT
// Copyright (c) 2025 SkillCert

use soroban_sdk::{symbol_short, Address, Env, String, Symbol, Vec};

use crate::error::Error;
use crate::schema::{DataKey, StudentProfile};

const UPDATE_PREFERENCES_EVENT: Symbol = symbol_short!("updPrefs");

/// Replace the caller's preference tags wholesale.
pub fn update_student_preferences(
    env: &Env,
    caller: Address,
    preferences: Vec<String>,
) -> Result<(), Error> {
    caller.require_auth();

    let key = DataKey::Student(caller.clone());
    let mut profile: StudentProfile = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(Error::NotFound)?;

    let count: u32 = preferences.len();
    profile.preferences = preferences;
    env.storage().persistent().set(&key, &profile);

    env.events()
        .publish((UPDATE_PREFERENCES_EVENT,), (caller, count));

    Ok(())
}

#[cfg(test)]
mod test {
    use crate::error::Error;
    use crate::test_utils::{create_student, setup};
    use soroban_sdk::{testutils::Address as _, vec, Address, Env, String};

    #[test]
    fn test_update_preferences_success() {
        let env = Env::default();
        let (client, _, _) = setup(&env);
        let student = create_student(&client, "Caroline Davis");

        let preferences = vec![
            &env,
            String::from_str(&env, "Programming"),
            String::from_str(&env, "Data Science"),
            String::from_str(&env, "Machine Learning"),
            String::from_str(&env, "Web Development"),
            String::from_str(&env, "Blockchain"),
        ];
        client.update_student_preferences(&student, &preferences);

        let profile = client.get_student_profile(&student).unwrap();
        assert_eq!(profile.preferences, preferences);
    }

    #[test]
    fn test_update_preferences_replaces_list() {
        let env = Env::default();
        let (client, _, _) = setup(&env);
        let student = create_student(&client, "Caroline Davis");

        client.update_student_preferences(
            &student,
            &vec![
                &env,
                String::from_str(&env, "Programming"),
                String::from_str(&env, "Design"),
            ],
        );
        let replacement = vec![&env, String::from_str(&env, "Blockchain")];
        client.update_student_preferences(&student, &replacement);

        let profile = client.get_student_profile(&student).unwrap();
        assert_eq!(profile.preferences, replacement);
    }

    #[test]
    fn test_update_preferences_without_profile() {
        let env = Env::default();
        let (client, _, _) = setup(&env);

        let result = client.try_update_student_preferences(
            &Address::generate(&env),
            &vec![&env, String::from_str(&env, "Programming")],
        );
        assert_eq!(result, Err(Ok(Error::NotFound)));
    }
}
