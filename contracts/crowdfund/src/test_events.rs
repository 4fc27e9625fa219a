extern crate std;

use soroban_sdk::{
    symbol_short,
    testutils::{Address as _, Events},
    token, vec, Address, Env, IntoVal, String, Symbol, TryIntoVal, Val, Vec,
};

use crate::events::{CampaignCreated, Contributed, Refunded, Terminated, Withdrawn};
use crate::{CrowdfundContract, CrowdfundContractClient};

const UNIT: i128 = 10_000_000;

fn setup() -> (Env, CrowdfundContractClient<'static>, Address, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(CrowdfundContract, ());
    let client = CrowdfundContractClient::new(&env, &contract_id);

    let token_admin = Address::generate(&env);
    let token_address = env
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    client.initialize(&token_admin, &token_address);

    let owner = Address::generate(&env);
    (env, client, token_address, owner)
}

/// Topics and data of the last event published by the crowdfund contract.
fn last_campaign_event(env: &Env, client: &CrowdfundContractClient) -> (Vec<Val>, Val) {
    let (_, event_topics, data) = env
        .events()
        .all()
        .iter()
        .filter(|event| event.0 == client.address)
        .last()
        .expect("No events found");
    (event_topics, data)
}

fn topics(env: &Env, action: Symbol, campaign_id: u32) -> Vec<Val> {
    vec![env, action.into_val(env), campaign_id.into_val(env)]
}

fn create(env: &Env, client: &CrowdfundContractClient, owner: &Address, goal: i128) -> u32 {
    client.create_campaign(
        owner,
        &goal,
        &String::from_str(env, "Campaign 1"),
        &String::from_str(env, "CMP1"),
    )
}

#[test]
fn test_campaign_created_event() {
    let (env, client, _token, owner) = setup();
    let id = create(&env, &client, &owner, 5 * UNIT);

    let (event_topics, data) = last_campaign_event(&env, &client);
    assert_eq!(event_topics, topics(&env, symbol_short!("created"), id));

    let event_data: CampaignCreated = data.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        CampaignCreated {
            campaign_id: id,
            owner,
            goal: 5 * UNIT,
            deadline: client.deadline(&id),
            name: String::from_str(&env, "Campaign 1"),
            symbol: String::from_str(&env, "CMP1"),
        }
    );
}

#[test]
fn test_contributed_event() {
    let (env, client, token, owner) = setup();
    let id = create(&env, &client, &owner, 5 * UNIT);
    let contributor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&contributor, &(2 * UNIT));

    client.contribute(&id, &contributor, &UNIT);
    client.contribute(&id, &contributor, &(UNIT / 2));

    let (event_topics, data) = last_campaign_event(&env, &client);
    assert_eq!(event_topics, topics(&env, symbol_short!("contrib"), id));

    let event_data: Contributed = data.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Contributed {
            campaign_id: id,
            contributor,
            amount: UNIT / 2,
            total_raised: UNIT + UNIT / 2,
        }
    );
}

#[test]
fn test_terminated_and_refunded_events() {
    let (env, client, token, owner) = setup();
    let id = create(&env, &client, &owner, 5 * UNIT);
    let contributor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&contributor, &UNIT);
    client.contribute(&id, &contributor, &UNIT);

    client.terminate(&id, &owner);

    let (event_topics, data) = last_campaign_event(&env, &client);
    assert_eq!(event_topics, topics(&env, symbol_short!("terminate"), id));
    let event_data: Terminated = data.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Terminated {
            campaign_id: id,
            owner,
            deadline: env.ledger().timestamp(),
        }
    );

    client.contributor_withdraw(&id, &contributor);

    let (event_topics, data) = last_campaign_event(&env, &client);
    assert_eq!(event_topics, topics(&env, symbol_short!("refund"), id));
    let event_data: Refunded = data.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Refunded {
            campaign_id: id,
            contributor,
            amount: UNIT,
        }
    );
}

#[test]
fn test_withdrawn_event() {
    let (env, client, token, owner) = setup();
    let id = create(&env, &client, &owner, UNIT);
    let contributor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token).mint(&contributor, &UNIT);
    client.contribute(&id, &contributor, &UNIT);

    client.withdraw(&id, &owner, &(UNIT / 4));

    let (event_topics, data) = last_campaign_event(&env, &client);
    assert_eq!(event_topics, topics(&env, symbol_short!("withdraw"), id));
    let event_data: Withdrawn = data.try_into_val(&env).unwrap();
    assert_eq!(
        event_data,
        Withdrawn {
            campaign_id: id,
            owner,
            amount: UNIT / 4,
        }
    );
}
