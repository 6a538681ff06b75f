use harbor::{
    error::{ ErrorCode, HarborResult },
    math::safe_math::SafeMath,
    request_id::{ self, RequestId, StructuredRequestId },
    types::{ RequestStatus, RequestType },
    validate,
};
use soroban_sdk::{ Address, Env, String };

use crate::storage::{
    get_indexed_sequence,
    get_record,
    get_state,
    save_index,
    save_record,
    save_state,
    CorrelationRecord,
};

/// Issues the next id and stores its Pending correlation record under both lookup paths
pub fn open_request(
    env: &Env,
    request_type: RequestType,
    requester: &Address,
    amount: i128,
    validator: Option<String>
) -> HarborResult<u128> {
    let id = next_request_id(env, request_type, requester, amount, &validator)?;
    record_request(env, id, request_type, requester, amount, validator)?;

    Ok(id)
}

/// Issues the next id without recording it, for calls whose outcome decides whether a
/// record is kept
pub fn next_request_id(
    env: &Env,
    request_type: RequestType,
    requester: &Address,
    amount: i128,
    validator: &Option<String>
) -> HarborResult<u128> {
    let mut state = get_state(env);
    state.sequence = state.sequence.safe_add(1, env)?;
    save_state(env, &state);

    Ok(
        StructuredRequestId::new(
            env,
            request_type,
            requester,
            amount,
            validator,
            state.sequence
        ).encode()
    )
}

pub fn record_request(
    env: &Env,
    id: u128,
    request_type: RequestType,
    requester: &Address,
    amount: i128,
    validator: Option<String>
) -> HarborResult {
    let sequence = request_id
        ::decode(id)
        .map(|decoded| decoded.sequence())
        .ok_or(ErrorCode::InvalidParameter)?;
    validate!(env, get_record(env, sequence).is_none(), ErrorCode::DuplicateRequest)?;

    let now = env.ledger().timestamp();
    let record = CorrelationRecord {
        id,
        requester: requester.clone(),
        amount,
        validator,
        created_at: now,
        updated_at: now,
        request_type,
        status: RequestStatus::Pending,
        reason: String::from_str(env, ""),
    };

    save_record(env, sequence, &record);
    save_index(env, id, sequence);

    Ok(())
}

/// Finds the record behind an external id.
///
/// The id itself carries the sequence, which is tried first; the secondary index covers
/// ids whose layout no longer decodes.
pub fn lookup_request(env: &Env, id: u128) -> Option<(u64, CorrelationRecord)> {
    if let Some(decoded) = request_id::decode(id) {
        let sequence = decoded.sequence();
        if let Some(record) = get_record(env, sequence) {
            let legacy = matches!(decoded, RequestId::Legacy(_));
            if record.id == id || legacy {
                return Some((sequence, record));
            }
        }
    }

    let sequence = get_indexed_sequence(env, id)?;
    get_record(env, sequence).map(|record| (sequence, record))
}

pub fn fulfill(
    env: &Env,
    id: u128,
    status: RequestStatus,
    reason: String
) -> HarborResult<CorrelationRecord> {
    validate!(
        env,
        status != RequestStatus::Pending,
        ErrorCode::InvalidStatus,
        "A request can only be fulfilled or failed"
    )?;

    let (sequence, mut record) = lookup_request(env, id).ok_or(ErrorCode::UnknownRequest)?;
    validate!(
        env,
        record.status == RequestStatus::Pending,
        ErrorCode::RequestNotPending,
        "Request already settled with status {}",
        record.status as u32
    )?;

    record.status = status;
    record.reason = reason;
    record.updated_at = env.ledger().timestamp();
    save_record(env, sequence, &record);

    Ok(record)
}
