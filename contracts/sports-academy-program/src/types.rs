use soroban_sdk::{contracttype, Address, BytesN, Env};

use crate::utils::empty_identifier;

/// Storage keys.
///
/// `Admin`, `Token`, `Company` and `VaultBalance` live in instance storage.
/// `Player` and `Purchase` are persistent entries, one ledger entry per key.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Token,
    Company,
    VaultBalance,
    Player(Address),
    Purchase(BytesN<32>),
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Player {
    pub registered: bool,
    pub birth_certificate_number: BytesN<32>,
    pub date_of_birth: BytesN<32>,
    pub sold: bool,
}

impl Player {
    /// Record returned for an address that never registered.
    pub fn unregistered(env: &Env) -> Self {
        Self {
            registered: false,
            birth_certificate_number: empty_identifier(env),
            date_of_birth: empty_identifier(env),
            sold: false,
        }
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CompanyData {
    pub registered: bool,
    pub business_name: BytesN<32>,
    pub business_identification_number: BytesN<32>,
}

impl CompanyData {
    pub fn unregistered(env: &Env) -> Self {
        Self {
            registered: false,
            business_name: empty_identifier(env),
            business_identification_number: empty_identifier(env),
        }
    }
}

/// Agent or club taking part in a transfer. Only ever stored inside a
/// [`PlayerPurchase`].
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PartyData {
    pub business_name: BytesN<32>,
    pub business_identification_number: BytesN<32>,
    pub country: BytesN<32>,
}

impl PartyData {
    pub fn empty(env: &Env) -> Self {
        Self {
            business_name: empty_identifier(env),
            business_identification_number: empty_identifier(env),
            country: empty_identifier(env),
        }
    }
}

/// Escrowed transfer of one player, keyed by its reference number.
///
/// Lifecycle: `initialised` on creation, `approved` once a deposit equal to
/// `purchase_amount` has landed in the vault. There is no way back.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlayerPurchase {
    pub initialised: bool,
    pub approved: bool,
    /// `None` only in the default record for an unknown reference.
    pub player_address: Option<Address>,
    pub agent: PartyData,
    pub club: PartyData,
    pub purchase_amount: i128,
}

impl PlayerPurchase {
    pub fn uninitialised(env: &Env) -> Self {
        Self {
            initialised: false,
            approved: false,
            player_address: None,
            agent: PartyData::empty(env),
            club: PartyData::empty(env),
            purchase_amount: 0,
        }
    }
}
