#![cfg(test)]

use soroban_sdk::{
    testutils::{Address as _, Ledger},
    token, Address, Env, String,
};

use crate::factory::FUNDING_PERIOD;
use crate::{CampaignStatus, ContractError, CrowdfundContract, CrowdfundContractClient};

const UNIT: i128 = 10_000_000;

fn setup_env() -> (Env, CrowdfundContractClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(CrowdfundContract, ());
    let client = CrowdfundContractClient::new(&env, &contract_id);

    let token_admin = Address::generate(&env);
    let token_address = env
        .register_stellar_asset_contract_v2(token_admin.clone())
        .address();
    client.initialize(&token_admin, &token_address);

    (env, client, token_address)
}

#[test]
fn test_create_single_campaign() {
    let (env, client, _token_address) = setup_env();
    env.ledger().set_timestamp(1_000);

    let creator = Address::generate(&env);
    let id = client.create_campaign(
        &creator,
        &UNIT,
        &String::from_str(&env, "Campaign 1"),
        &String::from_str(&env, "CMP1"),
    );

    // Verify campaign was added to registry.
    assert_eq!(client.campaign_count(), 1);
    assert_eq!(client.campaigns(&0), id);

    assert_eq!(client.owner(&id), creator);
    assert_eq!(client.goal(&id), UNIT);
    assert_eq!(client.total_raised(&id), 0);
    assert_eq!(client.deadline(&id), 1_000 + FUNDING_PERIOD);
    assert_eq!(client.name(&id), String::from_str(&env, "Campaign 1"));
    assert_eq!(client.symbol(&id), String::from_str(&env, "CMP1"));
    assert_eq!(client.status(&id), CampaignStatus::Active);
}

#[test]
fn test_create_multiple_campaigns() {
    let (env, client, token_address) = setup_env();

    let creator1 = Address::generate(&env);
    let creator2 = Address::generate(&env);
    let creator3 = Address::generate(&env);

    let campaign1 = client.create_campaign(
        &creator1,
        &(5 * UNIT),
        &String::from_str(&env, "Campaign 1"),
        &String::from_str(&env, "CMP1"),
    );
    let campaign2 = client.create_campaign(
        &creator2,
        &(5 * UNIT),
        &String::from_str(&env, "Campaign 2"),
        &String::from_str(&env, "CMP2"),
    );
    let campaign3 = client.create_campaign(
        &creator3,
        &(7 * UNIT),
        &String::from_str(&env, "Campaign 3"),
        &String::from_str(&env, "CMP3"),
    );

    // Verify all campaigns are in registry, in creation order.
    assert_eq!(client.campaign_count(), 3);
    assert_eq!(client.campaigns(&0), campaign1);
    assert_eq!(client.campaigns(&1), campaign2);
    assert_eq!(client.campaigns(&2), campaign3);

    let all = client.all_campaigns();
    assert_eq!(all.len(), 3);
    assert_eq!(all.get(2).unwrap(), campaign3);

    assert_eq!(client.owner(&campaign2), creator2);
    assert_eq!(client.goal(&campaign3), 7 * UNIT);

    // Ledgers are independent.
    let contributor = Address::generate(&env);
    token::StellarAssetClient::new(&env, &token_address).mint(&contributor, &(3 * UNIT));
    client.contribute(&campaign1, &contributor, &(2 * UNIT));
    client.contribute(&campaign2, &contributor, &UNIT);

    assert_eq!(client.total_raised(&campaign1), 2 * UNIT);
    assert_eq!(client.total_raised(&campaign2), UNIT);
    assert_eq!(client.total_raised(&campaign3), 0);
}

#[test]
fn test_empty_registry() {
    let (_env, client, _token_address) = setup_env();

    assert_eq!(client.all_campaigns().len(), 0);
    assert_eq!(client.campaign_count(), 0);

    let result = client.try_campaigns(&0);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::IndexOutOfRange);
}

#[test]
fn test_campaign_index_out_of_range() {
    let (env, client, _token_address) = setup_env();
    let creator = Address::generate(&env);
    client.create_campaign(
        &creator,
        &UNIT,
        &String::from_str(&env, "Campaign 1"),
        &String::from_str(&env, "CMP1"),
    );

    let result = client.try_campaigns(&1);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::IndexOutOfRange);

    let result = client.try_goal(&1);
    assert_eq!(result.unwrap_err().unwrap(), ContractError::CampaignNotFound);
}

#[test]
fn test_create_campaign_with_invalid_goal() {
    let (env, client, _token_address) = setup_env();
    let creator = Address::generate(&env);

    for goal in [0i128, -UNIT] {
        let result = client.try_create_campaign(
            &creator,
            &goal,
            &String::from_str(&env, "Campaign 1"),
            &String::from_str(&env, "CMP1"),
        );
        assert_eq!(result.unwrap_err().unwrap(), ContractError::InvalidGoal);
    }
    assert_eq!(client.campaign_count(), 0);
}

#[test]
fn test_create_campaign_requires_owner_auth() {
    let (env, client, _token_address) = setup_env();
    let creator = Address::generate(&env);

    client.create_campaign(
        &creator,
        &UNIT,
        &String::from_str(&env, "Campaign 1"),
        &String::from_str(&env, "CMP1"),
    );

    let auths = env.auths();
    assert_eq!(auths.len(), 1);
    assert_eq!(auths[0].0, creator);
}
