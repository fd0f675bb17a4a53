use soroban_sdk::{symbol_short, Address, BytesN, Env};

pub fn contract_initialized(env: &Env, admin: &Address, token: &Address) {
    env.events()
        .publish((symbol_short!("init"), admin.clone()), token.clone());
}

pub fn player_registered(env: &Env, player: &Address, birth_certificate_number: &BytesN<32>) {
    env.events().publish(
        (symbol_short!("ply_reg"), player.clone()),
        birth_certificate_number.clone(),
    );
}

pub fn company_registered(env: &Env, caller: &Address, business_name: &BytesN<32>) {
    env.events().publish(
        (symbol_short!("cmp_reg"), caller.clone()),
        business_name.clone(),
    );
}

pub fn purchase_created(
    env: &Env,
    buyer: &Address,
    reference_number: &BytesN<32>,
    player: &Address,
    purchase_amount: i128,
) {
    env.events().publish(
        (symbol_short!("purchase"), buyer.clone()),
        (reference_number.clone(), player.clone(), purchase_amount),
    );
}

pub fn funds_deposited(
    env: &Env,
    depositor: &Address,
    reference_number: &BytesN<32>,
    amount: i128,
    vault_balance: i128,
) {
    env.events().publish(
        (symbol_short!("deposit"), depositor.clone()),
        (reference_number.clone(), amount, vault_balance),
    );
}

pub fn vault_withdrawn(env: &Env, admin: &Address, amount: i128, vault_balance: i128) {
    env.events().publish(
        (symbol_short!("withdraw"), admin.clone()),
        (amount, vault_balance),
    );
}
