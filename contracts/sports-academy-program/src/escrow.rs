use soroban_sdk::{log, token, Address, BytesN, Env, String};

use crate::error::SportsAcademyError;
use crate::events;
use crate::registry;
use crate::types::{DataKey, PartyData, PlayerPurchase};
use crate::utils::{bump_persistent, read_admin, read_token};

/// Record the intent to buy a registered player. No funds move here.
pub fn buy_new_player(
    env: &Env,
    buyer: &Address,
    reference_number: BytesN<32>,
    player_address: Address,
    agent: PartyData,
    club: PartyData,
    purchase_amount: i128,
) -> Result<(), SportsAcademyError> {
    if purchase_amount <= 0 {
        return Err(SportsAcademyError::InvalidAmount);
    }

    let player = registry::read_player(env, &player_address)
        .filter(|p| p.registered)
        .ok_or(SportsAcademyError::PlayerNotRegistered)?;
    if player.sold {
        return Err(SportsAcademyError::PlayerAlreadySold);
    }

    if read_purchase(env, &reference_number).is_some() {
        return Err(SportsAcademyError::DuplicateReference);
    }

    let purchase = PlayerPurchase {
        initialised: true,
        approved: false,
        player_address: Some(player_address.clone()),
        agent,
        club,
        purchase_amount,
    };
    write_purchase(env, &reference_number, &purchase);

    log!(env, "purchase created", buyer.clone(), purchase_amount);
    events::purchase_created(env, buyer, &reference_number, &player_address, purchase_amount);

    Ok(())
}

/// Pay `amount` into the vault for the purchase under `reference_number`.
///
/// The token transfer, the vault credit, the purchase approval and the
/// player's `sold` flag are committed together; every check runs before the
/// first write.
pub fn deposit_funds(
    env: &Env,
    depositor: &Address,
    player_address: Address,
    reference_number: BytesN<32>,
    amount: i128,
) -> Result<(), SportsAcademyError> {
    if amount <= 0 {
        return Err(SportsAcademyError::InvalidAmount);
    }

    let mut purchase =
        read_purchase(env, &reference_number).ok_or(SportsAcademyError::PurchaseNotFound)?;
    if purchase.approved {
        return Err(SportsAcademyError::PurchaseAlreadyApproved);
    }
    if purchase.player_address.as_ref() != Some(&player_address) {
        return Err(SportsAcademyError::PlayerMismatch);
    }
    if amount != purchase.purchase_amount {
        return Err(SportsAcademyError::AmountMismatch);
    }

    let mut player = registry::read_player(env, &player_address)
        .ok_or(SportsAcademyError::PlayerNotRegistered)?;

    let vault_balance = get_vault_balance(env)
        .checked_add(amount)
        .ok_or(SportsAcademyError::Overflow)?;

    let token = read_token(env)?;
    token::Client::new(env, &token).transfer(
        depositor,
        &env.current_contract_address(),
        &amount,
    );

    write_vault_balance(env, vault_balance);

    purchase.approved = true;
    write_purchase(env, &reference_number, &purchase);

    player.sold = true;
    registry::write_player(env, &player_address, &player);

    log!(env, "funds deposited", depositor.clone(), amount, vault_balance);
    events::funds_deposited(env, depositor, &reference_number, amount, vault_balance);

    Ok(())
}

/// Pay `amount` out of the vault to the admin.
pub fn withdraw(env: &Env, caller: &Address, amount: i128) -> Result<(), SportsAcademyError> {
    let admin = read_admin(env)?;
    if *caller != admin {
        let reason = String::from_str(env, SportsAcademyError::NotAdmin.message());
        log!(env, "withdraw rejected", caller.clone(), reason);
        return Err(SportsAcademyError::NotAdmin);
    }

    if amount <= 0 {
        return Err(SportsAcademyError::InvalidAmount);
    }

    let vault_balance = get_vault_balance(env);
    if amount > vault_balance {
        return Err(SportsAcademyError::InsufficientVaultBalance);
    }
    let remaining = vault_balance - amount;

    let token = read_token(env)?;
    write_vault_balance(env, remaining);
    token::Client::new(env, &token).transfer(&env.current_contract_address(), &admin, &amount);

    log!(env, "vault withdrawn", admin, amount, remaining);
    events::vault_withdrawn(env, &admin, amount, remaining);

    Ok(())
}

pub fn get_vault_balance(env: &Env) -> i128 {
    env.storage()
        .instance()
        .get(&DataKey::VaultBalance)
        .unwrap_or(0)
}

fn write_vault_balance(env: &Env, balance: i128) {
    env.storage()
        .instance()
        .set(&DataKey::VaultBalance, &balance);
}

pub fn get_player_purchase_data(env: &Env, reference_number: BytesN<32>) -> PlayerPurchase {
    read_purchase(env, &reference_number).unwrap_or_else(|| PlayerPurchase::uninitialised(env))
}

fn read_purchase(env: &Env, reference_number: &BytesN<32>) -> Option<PlayerPurchase> {
    env.storage()
        .persistent()
        .get(&DataKey::Purchase(reference_number.clone()))
}

fn write_purchase(env: &Env, reference_number: &BytesN<32>, purchase: &PlayerPurchase) {
    let key = DataKey::Purchase(reference_number.clone());
    env.storage().persistent().set(&key, purchase);
    bump_persistent(env, &key);
}
