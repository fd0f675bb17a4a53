use soroban_sdk::{Address, BytesN, Env};

use crate::error::SportsAcademyError;
use crate::types::DataKey;

/// Persistent entry TTL in ledgers (~30 days at 5s/ledger).
pub const PERSISTENT_BUMP_LEDGERS: u32 = 518_400;
/// Extend once the remaining TTL drops below this.
pub const PERSISTENT_THRESHOLD_LEDGERS: u32 = PERSISTENT_BUMP_LEDGERS - 17_280;

pub const INSTANCE_BUMP_LEDGERS: u32 = 518_400;
pub const INSTANCE_THRESHOLD_LEDGERS: u32 = INSTANCE_BUMP_LEDGERS - 17_280;

/// Longest string that still fits a fixed identifier with its NUL terminator.
pub const MAX_IDENTIFIER_LEN: usize = 31;

pub fn read_admin(env: &Env) -> Result<Address, SportsAcademyError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(SportsAcademyError::NotInitialized)
}

pub fn read_token(env: &Env) -> Result<Address, SportsAcademyError> {
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(SportsAcademyError::NotInitialized)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_THRESHOLD_LEDGERS, INSTANCE_BUMP_LEDGERS);
}

pub fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_THRESHOLD_LEDGERS, PERSISTENT_BUMP_LEDGERS);
}

/// All-zero identifier, the value of every identifier field in a default record.
pub fn empty_identifier(env: &Env) -> BytesN<32> {
    BytesN::from_array(env, &[0u8; 32])
}

/// Encode `value` as a 32-byte, NUL-padded UTF-8 identifier.
///
/// Byte-compatible with ethers' `formatBytes32String`: at most 31 bytes of
/// payload so the last byte is always a terminator.
pub fn fixed_identifier(env: &Env, value: &str) -> Result<BytesN<32>, SportsAcademyError> {
    let bytes = value.as_bytes();
    if bytes.len() > MAX_IDENTIFIER_LEN {
        return Err(SportsAcademyError::IdentifierTooLong);
    }

    let mut data = [0u8; 32];
    data[..bytes.len()].copy_from_slice(bytes);
    Ok(BytesN::from_array(env, &data))
}
