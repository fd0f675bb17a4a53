use soroban_sdk::{log, Address, BytesN, Env};

use crate::events;
use crate::types::{CompanyData, DataKey, Player};
use crate::utils::bump_persistent;

/// Register (or re-register) `player`. An existing record is overwritten,
/// except that a sold player stays sold.
pub fn register_new_player(
    env: &Env,
    player: Address,
    birth_certificate_number: BytesN<32>,
    date_of_birth: BytesN<32>,
) {
    let sold = read_player(env, &player).is_some_and(|p| p.sold);
    let record = Player {
        registered: true,
        birth_certificate_number: birth_certificate_number.clone(),
        date_of_birth,
        sold,
    };
    write_player(env, &player, &record);

    log!(env, "player registered", player);
    events::player_registered(env, &player, &birth_certificate_number);
}

pub fn register_new_company(
    env: &Env,
    caller: Address,
    business_name: BytesN<32>,
    business_identification_number: BytesN<32>,
) {
    let company = CompanyData {
        registered: true,
        business_name: business_name.clone(),
        business_identification_number,
    };
    env.storage().instance().set(&DataKey::Company, &company);

    log!(env, "company registered", caller);
    events::company_registered(env, &caller, &business_name);
}

pub fn read_player(env: &Env, player: &Address) -> Option<Player> {
    env.storage()
        .persistent()
        .get(&DataKey::Player(player.clone()))
}

pub fn write_player(env: &Env, player: &Address, record: &Player) {
    let key = DataKey::Player(player.clone());
    env.storage().persistent().set(&key, record);
    bump_persistent(env, &key);
}

pub fn get_player_data(env: &Env, player: Address) -> Player {
    read_player(env, &player).unwrap_or_else(|| Player::unregistered(env))
}

pub fn is_player_registered(env: &Env, player: Address) -> bool {
    read_player(env, &player).is_some_and(|p| p.registered)
}

pub fn get_company_data(env: &Env) -> CompanyData {
    env.storage()
        .instance()
        .get(&DataKey::Company)
        .unwrap_or_else(|| CompanyData::unregistered(env))
}
