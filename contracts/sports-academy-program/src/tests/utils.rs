#![cfg(test)]

use crate::{utils::fixed_identifier, PartyData, SportsAcademyProgram, SportsAcademyProgramClient};
use soroban_sdk::{testutils::Address as _, token, Address, BytesN, Env};

/// One whole token in stroops.
pub const ONE_UNIT: i128 = 10_000_000;

pub struct TestSetup {
    pub env: Env,
    pub client: SportsAcademyProgramClient<'static>,
    pub admin: Address,
    pub token: Address,
    pub player: Address,
    pub non_owner: Address,
    pub depositor: Address,
}

impl TestSetup {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();

        let admin = Address::generate(&env);
        let player = Address::generate(&env);
        let non_owner = Address::generate(&env);
        let depositor = Address::generate(&env);

        let token_admin = Address::generate(&env);
        let token = create_test_token(&env, &token_admin);

        let contract_id = env.register(SportsAcademyProgram, (admin.clone(), token.clone()));
        let client = SportsAcademyProgramClient::new(&env, &contract_id);

        mint_tokens(&env, &token, &depositor, 10 * ONE_UNIT);

        Self {
            env,
            client,
            admin,
            token,
            player,
            non_owner,
            depositor,
        }
    }

    pub fn id(&self, value: &str) -> BytesN<32> {
        identifier(&self.env, value)
    }

    pub fn register_player(&self) {
        self.client.register_new_player(
            &self.player,
            &self.id("12345"),
            &self.id("2000-01-01"),
        );
    }

    pub fn agent(&self) -> PartyData {
        party(&self.env, "USA")
    }

    pub fn club(&self) -> PartyData {
        party(&self.env, "UK")
    }

    /// Registers the player and opens a purchase of `amount` under `reference`.
    pub fn open_purchase(&self, reference: &str, amount: i128) -> BytesN<32> {
        self.register_player();
        let reference_number = self.id(reference);
        self.client.buy_new_player(
            &self.admin,
            &reference_number,
            &self.player,
            &self.agent(),
            &self.club(),
            &amount,
        );
        reference_number
    }

    pub fn balance_of(&self, account: &Address) -> i128 {
        get_token_balance(&self.env, &self.token, account)
    }
}

pub fn identifier(env: &Env, value: &str) -> BytesN<32> {
    fixed_identifier(env, value).unwrap()
}

/// Length of the payload, i.e. the bytes before the first NUL.
pub fn identifier_len(identifier: &BytesN<32>) -> u32 {
    identifier
        .to_array()
        .iter()
        .position(|b| *b == 0)
        .unwrap_or(32) as u32
}

pub fn party(env: &Env, country: &str) -> PartyData {
    PartyData {
        business_name: identifier(env, "SportsCo"),
        business_identification_number: identifier(env, "54321"),
        country: identifier(env, country),
    }
}

pub fn create_test_token(env: &Env, admin: &Address) -> Address {
    env.register_stellar_asset_contract_v2(admin.clone())
        .address()
}

pub fn mint_tokens(env: &Env, token_address: &Address, to: &Address, amount: i128) {
    let token = token::StellarAssetClient::new(env, token_address);
    token.mint(to, &amount);
}

pub fn get_token_balance(env: &Env, token_address: &Address, account: &Address) -> i128 {
    let token = token::Client::new(env, token_address);
    token.balance(account)
}
