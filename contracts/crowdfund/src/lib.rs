//! # Crowdfund
//!
//! A campaign factory and the campaigns it mints, in one Soroban contract.
//!
//! | Phase        | Entry point(s)                                     |
//! |--------------|----------------------------------------------------|
//! | Bootstrap    | [`CrowdfundContract::initialize`]                  |
//! | Factory      | `create_campaign`, `campaigns`, `campaign_count`   |
//! | Funding      | `contribute`, `terminate`                          |
//! | Withdrawals  | `contributor_withdraw`, `withdraw`                 |
//! | Queries      | `owner`, `goal`, `deadline`, `total_raised`, `balance_of`, ... |
//!
//! Every campaign is a record keyed by its id; the factory only allocates
//! ids and lists them. Ledger rules live in [`campaign`], storage layout in
//! [`storage`]. This file holds the entry points only.

#![no_std]

use soroban_sdk::{contract, contractimpl, token, Address, Env, String, Vec};

mod campaign;
mod error;
pub mod events;
mod factory;
mod storage;
mod types;

#[cfg(test)]
mod test_events;
#[cfg(test)]
mod test_factory;

pub use error::ContractError;
pub use types::{Campaign, CampaignStatus};

/// Reward credits are whole units only.
pub const REWARD_DECIMALS: u32 = 0;

#[contract]
pub struct CrowdfundContract;

#[contractimpl]
impl CrowdfundContract {
    /// Set the funding token shared by every campaign.
    ///
    /// The token's decimals fix the size of one whole unit, which drives
    /// both the 0.01 minimum pledge and the reward-credit rate.
    ///
    /// # Arguments
    /// * `admin` – The deploying account; must authorize the call.
    /// * `token` – The token contract address used for contributions.
    pub fn initialize(env: Env, admin: Address, token: Address) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        admin.require_auth();

        let decimals = token::Client::new(&env, &token).decimals();
        let unit = 10i128
            .checked_pow(decimals)
            .ok_or(ContractError::Overflow)?;
        storage::set_funding_token(&env, &admin, &token, unit);
        Ok(())
    }

    // ── Factory ─────────────────────────────────────────────────────────

    /// Create a campaign owned by `owner` that accepts contributions for
    /// the next 30 days.
    ///
    /// # Arguments
    /// * `owner`  – Creator and sole beneficiary of the campaign.
    /// * `goal`   – Funding goal in the token's smallest unit; must be positive.
    /// * `name`   – Display name of the campaign's reward credits.
    /// * `symbol` – Ticker of the campaign's reward credits.
    ///
    /// # Returns
    /// The new campaign's id, equal to its creation index.
    pub fn create_campaign(
        env: Env,
        owner: Address,
        goal: i128,
        name: String,
        symbol: String,
    ) -> Result<u32, ContractError> {
        owner.require_auth();
        factory::create_campaign(&env, owner, goal, name, symbol)
    }

    /// Returns the id of the campaign created at position `index`.
    pub fn campaigns(env: Env, index: u32) -> Result<u32, ContractError> {
        factory::campaign_at(&env, index)
    }

    /// Returns the ids of all campaigns, in creation order.
    pub fn all_campaigns(env: Env) -> Vec<u32> {
        factory::all_campaigns(&env)
    }

    /// Returns the total number of campaigns created.
    pub fn campaign_count(env: Env) -> u32 {
        storage::campaign_count(&env)
    }

    // ── Campaign ────────────────────────────────────────────────────────

    /// Pledge `amount` to a running campaign.
    ///
    /// Every whole token the contributor has pledged in total earns one
    /// reward credit.
    pub fn contribute(
        env: Env,
        campaign_id: u32,
        contributor: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        contributor.require_auth();
        campaign::contribute(&env, campaign_id, &contributor, amount)
    }

    /// End a campaign below its goal. Only the owner may call this, and
    /// only while the deadline is still ahead.
    pub fn terminate(env: Env, campaign_id: u32, caller: Address) -> Result<(), ContractError> {
        caller.require_auth();
        campaign::terminate(&env, campaign_id, &caller)
    }

    /// Reclaim the caller's whole stake once a campaign has ended below
    /// its goal. Returns the refunded amount.
    pub fn contributor_withdraw(
        env: Env,
        campaign_id: u32,
        contributor: Address,
    ) -> Result<i128, ContractError> {
        contributor.require_auth();
        campaign::contributor_withdraw(&env, campaign_id, &contributor)
    }

    /// Collect `amount` of the raised funds. Owner only, and only once the
    /// goal has been met.
    pub fn withdraw(
        env: Env,
        campaign_id: u32,
        caller: Address,
        amount: i128,
    ) -> Result<(), ContractError> {
        caller.require_auth();
        campaign::withdraw(&env, campaign_id, &caller, amount)
    }

    // ── View helpers ────────────────────────────────────────────────────

    pub fn get_campaign(env: Env, campaign_id: u32) -> Result<Campaign, ContractError> {
        let (config, state) = storage::load_campaign(&env, campaign_id)?;
        Ok(Campaign::from_parts(config, &state, env.ledger().timestamp()))
    }

    pub fn status(env: Env, campaign_id: u32) -> Result<CampaignStatus, ContractError> {
        campaign::status(&env, campaign_id)
    }

    pub fn owner(env: Env, campaign_id: u32) -> Result<Address, ContractError> {
        Ok(storage::load_config(&env, campaign_id)?.owner)
    }

    /// Returns the funding goal.
    pub fn goal(env: Env, campaign_id: u32) -> Result<i128, ContractError> {
        Ok(storage::load_config(&env, campaign_id)?.goal)
    }

    /// Returns the campaign deadline.
    pub fn deadline(env: Env, campaign_id: u32) -> Result<u64, ContractError> {
        Ok(storage::load_state(&env, campaign_id)?.deadline)
    }

    pub fn total_raised(env: Env, campaign_id: u32) -> Result<i128, ContractError> {
        Ok(storage::load_state(&env, campaign_id)?.total_raised)
    }

    /// Returns how much of the raised funds the owner has already collected.
    pub fn paid_out(env: Env, campaign_id: u32) -> Result<i128, ContractError> {
        Ok(storage::load_state(&env, campaign_id)?.paid_out)
    }

    /// Returns the live stake of `contributor`.
    pub fn contribution(
        env: Env,
        campaign_id: u32,
        contributor: Address,
    ) -> Result<i128, ContractError> {
        storage::load_config(&env, campaign_id)?;
        Ok(storage::contribution(&env, campaign_id, &contributor))
    }

    /// Returns up to `limit` contributors in first-pledge order, starting
    /// at position `start`.
    pub fn contributors(
        env: Env,
        campaign_id: u32,
        start: u32,
        limit: u32,
    ) -> Result<Vec<Address>, ContractError> {
        storage::load_config(&env, campaign_id)?;
        Ok(storage::contributors(&env, campaign_id, start, limit))
    }

    pub fn contributor_count(env: Env, campaign_id: u32) -> Result<u32, ContractError> {
        storage::load_config(&env, campaign_id)?;
        Ok(storage::contributor_count(&env, campaign_id))
    }

    // ── Reward credits ──────────────────────────────────────────────────

    /// Returns the reward credits `holder` earned in the campaign.
    pub fn balance_of(env: Env, campaign_id: u32, holder: Address) -> Result<i128, ContractError> {
        storage::load_config(&env, campaign_id)?;
        Ok(storage::credits(&env, campaign_id, &holder))
    }

    pub fn total_supply(env: Env, campaign_id: u32) -> Result<i128, ContractError> {
        Ok(storage::load_state(&env, campaign_id)?.reward_supply)
    }

    pub fn name(env: Env, campaign_id: u32) -> Result<String, ContractError> {
        Ok(storage::load_config(&env, campaign_id)?.name)
    }

    pub fn symbol(env: Env, campaign_id: u32) -> Result<String, ContractError> {
        Ok(storage::load_config(&env, campaign_id)?.symbol)
    }

    pub fn decimals(_env: Env) -> u32 {
        REWARD_DECIMALS
    }

    // ── Configuration ───────────────────────────────────────────────────

    pub fn admin(env: Env) -> Result<Address, ContractError> {
        storage::admin(&env)
    }

    pub fn token(env: Env) -> Result<Address, ContractError> {
        storage::funding_token(&env)
    }

    /// Returns the minimum contribution amount.
    pub fn min_contribution(env: Env) -> Result<i128, ContractError> {
        Ok(campaign::min_contribution(storage::unit(&env)?))
    }
}
