use harbor::{
    error::{ ErrorCode, HarborResult },
    types::{ Validator, ValidatorStatus },
    utils::validate_validator_ref,
    validate,
};
use soroban_sdk::{ Env, String };

use crate::storage::{ get_validator, get_validator_ids, save_validator, save_validator_ids };

pub fn load(env: &Env, id: &String) -> HarborResult<Validator> {
    get_validator(env, id).ok_or(ErrorCode::UnknownValidator)
}

pub fn add(env: &Env, id: String) -> HarborResult<Validator> {
    validate_validator_ref(env, &id)?;
    validate!(env, get_validator(env, &id).is_none(), ErrorCode::ValidatorAlreadyExists)?;

    let validator = Validator {
        id: id.clone(),
        status: ValidatorStatus::Enabled,
        total_delegated: 0,
        depositor_count: 0,
    };
    save_validator(env, &validator);

    let mut ids = get_validator_ids(env);
    ids.push_back(id);
    save_validator_ids(env, &ids);

    Ok(validator)
}

pub fn set_status(env: &Env, id: &String, status: ValidatorStatus) -> HarborResult<Validator> {
    let mut validator = load(env, id)?;
    validate!(
        env,
        validator.status != status,
        ErrorCode::InvalidStatus,
        "Validator already has status {}",
        status as u32
    )?;

    validator.status = status;
    save_validator(env, &validator);

    Ok(validator)
}
