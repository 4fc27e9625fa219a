//! # Storage
//!
//! Typed helpers over the two storage tiers.
//!
//! ## Instance storage
//!
//! | Key             | Type      | Description                              |
//! |-----------------|-----------|------------------------------------------|
//! | `Admin`         | `Address` | Account that configured the contract     |
//! | `Token`         | `Address` | Funding token every campaign accepts     |
//! | `Unit`          | `i128`    | One whole token (`10^decimals`)          |
//! | `CampaignCount` | `u32`     | Next campaign id / registry length       |
//!
//! ## Persistent storage
//!
//! | Key                      | Type              |
//! |--------------------------|-------------------|
//! | `Config(id)`             | `CampaignConfig`  |
//! | `State(id)`              | `CampaignState`   |
//! | `Contribution(id, addr)` | `i128`            |
//! | `Credits(id, addr)`      | `i128`            |
//! | `Contributor(id, n)`     | `Address`         |
//! | `ContributorCount(id)`   | `u32`             |
//!
//! Campaign ids are handed out sequentially, so the registry is the range
//! `0..CampaignCount` and id `n` is the `n`th campaign ever created.
//! Contributors are indexed the same way, one entry per address, so the
//! cost of a pledge does not grow with the number of backers.

use soroban_sdk::{contracttype, Address, Env, Vec};

use crate::error::ContractError;
use crate::types::{CampaignConfig, CampaignState};

// ── TTL Constants ────────────────────────────────────────────────────

/// Approximate ledgers per day (~5 seconds per ledger).
const DAY_IN_LEDGERS: u32 = 17_280;

const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
const INSTANCE_LIFETIME_THRESHOLD: u32 = DAY_IN_LEDGERS;

const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const PERSISTENT_LIFETIME_THRESHOLD: u32 = 7 * DAY_IN_LEDGERS;

// ── Storage Keys ─────────────────────────────────────────────────────

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Account that ran `initialize`.
    Admin,
    /// The token used for contributions (e.g. USDC).
    Token,
    /// One whole token in its smallest unit.
    Unit,
    /// Number of campaigns created so far.
    CampaignCount,
    /// Immutable campaign configuration.
    Config(u32),
    /// Mutable campaign ledger.
    State(u32),
    /// Live stake of a contributor in a campaign.
    Contribution(u32, Address),
    /// Reward credits a contributor holds in a campaign.
    Credits(u32, Address),
    /// `n`th distinct contributor of a campaign, first-seen order.
    Contributor(u32, u32),
    /// Number of distinct contributors of a campaign.
    ContributorCount(u32),
}

fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

fn bump_persistent(env: &Env, key: &DataKey) {
    env.storage()
        .persistent()
        .extend_ttl(key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

fn set_persistent<V>(env: &Env, key: &DataKey, value: &V)
where
    V: soroban_sdk::IntoVal<Env, soroban_sdk::Val>,
{
    env.storage().persistent().set(key, value);
    bump_persistent(env, key);
}

// ── Contract configuration ───────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Token)
}

pub fn set_funding_token(env: &Env, admin: &Address, token: &Address, unit: i128) {
    env.storage().instance().set(&DataKey::Admin, admin);
    env.storage().instance().set(&DataKey::Token, token);
    env.storage().instance().set(&DataKey::Unit, &unit);
    env.storage().instance().set(&DataKey::CampaignCount, &0u32);
    bump_instance(env);
}

pub fn funding_token(env: &Env) -> Result<Address, ContractError> {
    bump_instance(env);
    env.storage()
        .instance()
        .get(&DataKey::Token)
        .ok_or(ContractError::NotInitialized)
}

pub fn admin(env: &Env) -> Result<Address, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

pub fn unit(env: &Env) -> Result<i128, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Unit)
        .ok_or(ContractError::NotInitialized)
}

// ── Registry ─────────────────────────────────────────────────────────

pub fn campaign_count(env: &Env) -> u32 {
    env.storage()
        .instance()
        .get(&DataKey::CampaignCount)
        .unwrap_or(0)
}

/// Reserve the next campaign id.
pub fn next_campaign_id(env: &Env) -> Result<u32, ContractError> {
    bump_instance(env);
    let id = campaign_count(env);
    let next = id.checked_add(1).ok_or(ContractError::Overflow)?;
    env.storage().instance().set(&DataKey::CampaignCount, &next);
    Ok(id)
}

// ── Campaign records ─────────────────────────────────────────────────

pub fn save_config(env: &Env, config: &CampaignConfig) {
    set_persistent(env, &DataKey::Config(config.id), config);
}

pub fn load_config(env: &Env, id: u32) -> Result<CampaignConfig, ContractError> {
    let key = DataKey::Config(id);
    let config = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(config)
}

pub fn save_state(env: &Env, id: u32, state: &CampaignState) {
    set_persistent(env, &DataKey::State(id), state);
}

pub fn load_state(env: &Env, id: u32) -> Result<CampaignState, ContractError> {
    let key = DataKey::State(id);
    let state = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or(ContractError::CampaignNotFound)?;
    bump_persistent(env, &key);
    Ok(state)
}

/// Load config and state of one campaign in a single call.
pub fn load_campaign(env: &Env, id: u32) -> Result<(CampaignConfig, CampaignState), ContractError> {
    Ok((load_config(env, id)?, load_state(env, id)?))
}

// ── Per-contributor ledgers ──────────────────────────────────────────

fn get_amount(env: &Env, key: &DataKey) -> i128 {
    match env.storage().persistent().get(key) {
        Some(amount) => {
            bump_persistent(env, key);
            amount
        }
        None => 0,
    }
}

pub fn contribution(env: &Env, id: u32, contributor: &Address) -> i128 {
    get_amount(env, &DataKey::Contribution(id, contributor.clone()))
}

pub fn set_contribution(env: &Env, id: u32, contributor: &Address, amount: i128) {
    set_persistent(env, &DataKey::Contribution(id, contributor.clone()), &amount);
}

pub fn credits(env: &Env, id: u32, holder: &Address) -> i128 {
    get_amount(env, &DataKey::Credits(id, holder.clone()))
}

pub fn set_credits(env: &Env, id: u32, holder: &Address, credits: i128) {
    set_persistent(env, &DataKey::Credits(id, holder.clone()), &credits);
}

/// True once `contributor` has pledged to campaign `id`, even if the
/// stake was later refunded.
pub fn has_contributed(env: &Env, id: u32, contributor: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Contribution(id, contributor.clone()))
}

pub fn contributor_count(env: &Env, id: u32) -> u32 {
    let key = DataKey::ContributorCount(id);
    match env.storage().persistent().get(&key) {
        Some(count) => {
            bump_persistent(env, &key);
            count
        }
        None => 0,
    }
}

pub fn contributor_at(env: &Env, id: u32, index: u32) -> Option<Address> {
    let key = DataKey::Contributor(id, index);
    let contributor = env.storage().persistent().get(&key)?;
    bump_persistent(env, &key);
    Some(contributor)
}

/// Append `contributor` to the campaign's contributor index.
pub fn push_contributor(env: &Env, id: u32, contributor: &Address) -> Result<(), ContractError> {
    let index = contributor_count(env, id);
    let next = index.checked_add(1).ok_or(ContractError::Overflow)?;
    set_persistent(env, &DataKey::Contributor(id, index), contributor);
    set_persistent(env, &DataKey::ContributorCount(id), &next);
    Ok(())
}

/// Up to `limit` contributors starting at position `start`.
pub fn contributors(env: &Env, id: u32, start: u32, limit: u32) -> Vec<Address> {
    let end = start
        .saturating_add(limit)
        .min(contributor_count(env, id));
    let mut page = Vec::new(env);
    for index in start..end {
        if let Some(contributor) = contributor_at(env, id, index) {
            page.push_back(contributor);
        }
    }
    page
}
