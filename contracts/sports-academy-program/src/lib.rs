#![no_std]

use soroban_sdk::{contract, contractimpl, Address, BytesN, Env};

mod error;
mod escrow;
mod events;
mod registry;
mod types;
pub mod utils;

pub use error::SportsAcademyError;
pub use types::{CompanyData, DataKey, PartyData, Player, PlayerPurchase};

#[cfg(test)]
mod tests;

#[contract]
pub struct SportsAcademyProgram;

#[contractimpl]
impl SportsAcademyProgram {
    /// Fix the admin and the settlement token. Runs once, at deployment.
    pub fn __constructor(env: Env, admin: Address, token: Address) {
        env.storage().instance().set(&DataKey::Admin, &admin);
        env.storage().instance().set(&DataKey::Token, &token);
        utils::bump_instance(&env);

        events::contract_initialized(&env, &admin, &token);
    }

    /// Register the calling player
    pub fn register_new_player(
        env: Env,
        player: Address,
        birth_certificate_number: BytesN<32>,
        date_of_birth: BytesN<32>,
    ) {
        player.require_auth();
        utils::bump_instance(&env);

        registry::register_new_player(&env, player, birth_certificate_number, date_of_birth);
    }

    /// Register the academy's company
    pub fn register_new_company(
        env: Env,
        caller: Address,
        business_name: BytesN<32>,
        business_identification_number: BytesN<32>,
    ) {
        caller.require_auth();
        utils::bump_instance(&env);

        registry::register_new_company(&env, caller, business_name, business_identification_number);
    }

    /// Open an escrowed purchase of a registered player
    pub fn buy_new_player(
        env: Env,
        buyer: Address,
        reference_number: BytesN<32>,
        player_address: Address,
        agent: PartyData,
        club: PartyData,
        purchase_amount: i128,
    ) -> Result<(), SportsAcademyError> {
        buyer.require_auth();
        utils::bump_instance(&env);

        escrow::buy_new_player(
            &env,
            &buyer,
            reference_number,
            player_address,
            agent,
            club,
            purchase_amount,
        )
    }

    /// Pay the purchase amount into the vault, approving the purchase and
    /// marking the player sold
    pub fn deposit_funds(
        env: Env,
        depositor: Address,
        player_address: Address,
        reference_number: BytesN<32>,
        amount: i128,
    ) -> Result<(), SportsAcademyError> {
        depositor.require_auth();
        utils::bump_instance(&env);

        escrow::deposit_funds(&env, &depositor, player_address, reference_number, amount)
    }

    /// Withdraw from the vault to the admin (admin only)
    pub fn withdraw(env: Env, caller: Address, amount: i128) -> Result<(), SportsAcademyError> {
        caller.require_auth();
        utils::bump_instance(&env);

        escrow::withdraw(&env, &caller, amount)
    }

    pub fn get_vault_balance(env: Env) -> i128 {
        escrow::get_vault_balance(&env)
    }

    /// Player record, or an unregistered default if `player` never registered
    pub fn get_player_data(env: Env, player: Address) -> Player {
        registry::get_player_data(&env, player)
    }

    pub fn is_player_registered(env: Env, player: Address) -> bool {
        registry::is_player_registered(&env, player)
    }

    /// Company record, or an unregistered default
    pub fn get_company_data(env: Env) -> CompanyData {
        registry::get_company_data(&env)
    }

    /// Purchase record, or an uninitialised default for an unknown reference
    pub fn get_player_purchase_data(env: Env, reference_number: BytesN<32>) -> PlayerPurchase {
        escrow::get_player_purchase_data(&env, reference_number)
    }

    pub fn get_admin(env: Env) -> Result<Address, SportsAcademyError> {
        utils::read_admin(&env)
    }

    pub fn get_token(env: Env) -> Result<Address, SportsAcademyError> {
        utils::read_token(&env)
    }
}
