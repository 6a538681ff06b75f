//! Opaque request identifiers.
//!
//! Internally a request id is a tagged [`RequestId`]. At the contract boundary it is one
//! `u128` with the layout below, so ids are unique, sortable by creation time and carry
//! enough metadata to be located without an index:
//!
//! | bits     | field                                                  |
//! |----------|--------------------------------------------------------|
//! | 127..88  | ledger timestamp, low 40 bits                          |
//! | 87..80   | request type tag                                       |
//! | 79..48   | first 4 bytes of sha256(caller, amount, validator)     |
//! | 47..0    | router sequence number, low 48 bits                    |
//!
//! Any value below `2^48` is a legacy bare sequence number.

use soroban_sdk::{ contracttype, xdr::ToXdr, Address, Bytes, Env, String };

use crate::types::RequestType;

const TIMESTAMP_SHIFT: u32 = 88;
const TYPE_SHIFT: u32 = 80;
const HASH_SHIFT: u32 = 48;

const TIMESTAMP_MASK: u128 = (1 << 40) - 1;
const TYPE_MASK: u128 = 0xff;
const HASH_MASK: u128 = 0xffff_ffff;
const SEQUENCE_MASK: u128 = (1 << 48) - 1;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StructuredRequestId {
    pub request_type: RequestType,
    pub timestamp: u64,
    pub hash: u32,
    pub sequence: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum RequestId {
    Structured(StructuredRequestId),
    /// ids issued as a plain counter value
    Legacy(u64),
}

impl RequestId {
    pub fn sequence(&self) -> u64 {
        match self {
            RequestId::Structured(id) => id.sequence,
            RequestId::Legacy(sequence) => *sequence,
        }
    }

    pub fn request_type(&self) -> Option<RequestType> {
        match self {
            RequestId::Structured(id) => Some(id.request_type),
            RequestId::Legacy(_) => None,
        }
    }
}

impl StructuredRequestId {
    pub fn new(
        env: &Env,
        request_type: RequestType,
        caller: &Address,
        amount: i128,
        validator: &Option<String>,
        sequence: u64
    ) -> Self {
        StructuredRequestId {
            request_type,
            timestamp: env.ledger().timestamp(),
            hash: fingerprint(env, caller, amount, validator),
            sequence,
        }
    }

    pub fn encode(&self) -> u128 {
        (((self.timestamp as u128) & TIMESTAMP_MASK) << TIMESTAMP_SHIFT) |
            ((self.request_type.tag() as u128) << TYPE_SHIFT) |
            ((self.hash as u128) << HASH_SHIFT) |
            ((self.sequence as u128) & SEQUENCE_MASK)
    }
}

/// Decodes an external id. Returns `None` when the type tag is unknown.
pub fn decode(raw: u128) -> Option<RequestId> {
    if raw >> HASH_SHIFT == 0 {
        return Some(RequestId::Legacy(raw as u64));
    }

    let request_type = RequestType::from_tag(((raw >> TYPE_SHIFT) & TYPE_MASK) as u8)?;

    Some(
        RequestId::Structured(StructuredRequestId {
            request_type,
            timestamp: ((raw >> TIMESTAMP_SHIFT) & TIMESTAMP_MASK) as u64,
            hash: ((raw >> HASH_SHIFT) & HASH_MASK) as u32,
            sequence: (raw & SEQUENCE_MASK) as u64,
        })
    )
}

pub fn encode_legacy(sequence: u64) -> u128 {
    (sequence as u128) & SEQUENCE_MASK
}

/// Truncated sha256 over the xdr of the caller, the big-endian amount and the validator.
pub fn fingerprint(env: &Env, caller: &Address, amount: i128, validator: &Option<String>) -> u32 {
    let mut payload = Bytes::new(env);
    payload.append(&caller.clone().to_xdr(env));
    payload.extend_from_array(&amount.to_be_bytes());
    if let Some(validator) = validator {
        payload.append(&validator.clone().to_xdr(env));
    }

    let bytes = env.crypto().sha256(&payload).to_array();
    u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}
