//! Campaign registry. Mints campaign records and exposes them by creation
//! order. The registry only ever hands out ids; all ledger mutation goes
//! through [`crate::campaign`].

use soroban_sdk::{log, Address, Env, String, Vec};

use crate::error::ContractError;
use crate::events::{self, CampaignCreated};
use crate::storage;
use crate::types::{CampaignConfig, CampaignState};

/// How long a new campaign accepts contributions: 30 days, in seconds.
pub const FUNDING_PERIOD: u64 = 30 * 24 * 60 * 60;

pub fn create_campaign(
    env: &Env,
    owner: Address,
    goal: i128,
    name: String,
    symbol: String,
) -> Result<u32, ContractError> {
    if !storage::is_initialized(env) {
        return Err(ContractError::NotInitialized);
    }
    if goal <= 0 {
        log!(env, "rejecting campaign with non-positive goal", goal);
        return Err(ContractError::InvalidGoal);
    }

    let now = env.ledger().timestamp();
    let deadline = now
        .checked_add(FUNDING_PERIOD)
        .ok_or(ContractError::Overflow)?;

    let id = storage::next_campaign_id(env)?;
    let config = CampaignConfig {
        id,
        owner: owner.clone(),
        goal,
        name: name.clone(),
        symbol: symbol.clone(),
        created_at: now,
    };
    let state = CampaignState {
        deadline,
        total_raised: 0,
        paid_out: 0,
        terminated: false,
        reward_supply: 0,
    };
    storage::save_config(env, &config);
    storage::save_state(env, id, &state);

    events::emit_campaign_created(
        env,
        CampaignCreated {
            campaign_id: id,
            owner,
            goal,
            deadline,
            name,
            symbol,
        },
    );

    Ok(id)
}

/// Id of the campaign created `index`-th.
pub fn campaign_at(env: &Env, index: u32) -> Result<u32, ContractError> {
    if index >= storage::campaign_count(env) {
        return Err(ContractError::IndexOutOfRange);
    }
    Ok(index)
}

pub fn all_campaigns(env: &Env) -> Vec<u32> {
    let mut ids = Vec::new(env);
    for id in 0..storage::campaign_count(env) {
        ids.push_back(id);
    }
    ids
}
