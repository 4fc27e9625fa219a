//! # Campaign state machine
//!
//! Contributions, early termination, and the two mutually exclusive
//! withdrawal paths: contributor refunds for a campaign that ended below
//! goal, and owner payouts for one that reached it.
//!
//! Payouts and refunds write the ledger first and move tokens last. A
//! failing transfer aborts the invocation, and the host discards the
//! ledger write with it.

use soroban_sdk::{log, token, Address, Env};

use crate::error::ContractError;
use crate::events;
use crate::storage;
use crate::types::CampaignStatus;

/// Smallest accepted pledge: 0.01 of a whole token.
pub fn min_contribution(unit: i128) -> i128 {
    (unit / 100).max(1)
}

/// One credit per whole token contributed, remainders never round up.
pub fn reward_credits_for(contribution: i128, unit: i128) -> i128 {
    contribution / unit
}

fn token_client(env: &Env) -> Result<token::Client<'_>, ContractError> {
    let token_address = storage::funding_token(env)?;
    Ok(token::Client::new(env, &token_address))
}

pub fn status(env: &Env, id: u32) -> Result<CampaignStatus, ContractError> {
    let (config, state) = storage::load_campaign(env, id)?;
    Ok(state.status(config.goal, env.ledger().timestamp()))
}

pub fn contribute(
    env: &Env,
    id: u32,
    contributor: &Address,
    amount: i128,
) -> Result<(), ContractError> {
    let unit = storage::unit(env)?;
    if amount < min_contribution(unit) {
        log!(env, "contribution below minimum", amount);
        return Err(ContractError::BelowMinimumContribution);
    }

    let (config, mut state) = storage::load_campaign(env, id)?;
    let now = env.ledger().timestamp();
    if now >= state.deadline {
        return Err(ContractError::DeadlinePassed);
    }
    if state.status(config.goal, now) == CampaignStatus::Succeeded {
        return Err(ContractError::GoalAlreadyReached);
    }

    token_client(env)?.transfer(contributor, &env.current_contract_address(), &amount);

    let first_pledge = !storage::has_contributed(env, id, contributor);
    let stake = storage::contribution(env, id, contributor)
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    storage::set_contribution(env, id, contributor, stake);

    let previous_credits = storage::credits(env, id, contributor);
    let credits = reward_credits_for(stake, unit);
    if credits != previous_credits {
        storage::set_credits(env, id, contributor, credits);
        state.reward_supply = state
            .reward_supply
            .checked_add(credits - previous_credits)
            .ok_or(ContractError::Overflow)?;
    }

    state.total_raised = state
        .total_raised
        .checked_add(amount)
        .ok_or(ContractError::Overflow)?;
    storage::save_state(env, id, &state);
    if first_pledge {
        storage::push_contributor(env, id, contributor)?;
    }

    events::emit_contributed(env, id, contributor.clone(), amount, state.total_raised);
    Ok(())
}

/// Owner ends a campaign that has not reached its goal by pulling the
/// deadline to the current ledger time.
pub fn terminate(env: &Env, id: u32, caller: &Address) -> Result<(), ContractError> {
    let (config, mut state) = storage::load_campaign(env, id)?;
    if *caller != config.owner {
        return Err(ContractError::NotOwner);
    }
    if state.total_raised >= config.goal {
        return Err(ContractError::GoalAlreadyReached);
    }

    // The deadline may only move earlier, and only while it is still ahead.
    let now = env.ledger().timestamp();
    if now >= state.deadline {
        return Err(ContractError::DeadlinePassed);
    }

    state.deadline = now;
    state.terminated = true;
    storage::save_state(env, id, &state);

    events::emit_terminated(env, id, config.owner, now);
    Ok(())
}

/// Refund the caller's full stake from a campaign that ended below goal.
pub fn contributor_withdraw(
    env: &Env,
    id: u32,
    contributor: &Address,
) -> Result<i128, ContractError> {
    let (config, mut state) = storage::load_campaign(env, id)?;
    if env.ledger().timestamp() < state.deadline {
        return Err(ContractError::CampaignStillRunning);
    }
    if state.total_raised >= config.goal {
        return Err(ContractError::CampaignFullyFunded);
    }

    let first_pledge = !storage::has_contributed(env, id, contributor);
    let stake = storage::contribution(env, id, contributor);
    if stake <= 0 {
        return Err(ContractError::NothingToRefund);
    }
    let credits = storage::credits(env, id, contributor);

    storage::set_contribution(env, id, contributor, 0);
    storage::set_credits(env, id, contributor, 0);
    state.total_raised -= stake;
    state.reward_supply -= credits;
    storage::save_state(env, id, &state);

    token_client(env)?.transfer(&env.current_contract_address(), contributor, &stake);

    events::emit_refunded(env, id, contributor.clone(), stake);
    Ok(stake)
}

/// Pay `amount` of the raised funds to the owner of a successful campaign.
pub fn withdraw(env: &Env, id: u32, caller: &Address, amount: i128) -> Result<(), ContractError> {
    let (config, mut state) = storage::load_campaign(env, id)?;
    if *caller != config.owner {
        return Err(ContractError::NotOwner);
    }
    if state.total_raised < config.goal {
        return Err(ContractError::GoalNotReached);
    }
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    if amount > state.remaining() {
        log!(env, "payout exceeds remaining funds", amount, state.remaining());
        return Err(ContractError::InsufficientFunds);
    }

    state.paid_out += amount;
    storage::save_state(env, id, &state);

    token_client(env)?.transfer(&env.current_contract_address(), &config.owner, &amount);

    events::emit_withdrawn(env, id, config.owner, amount);
    Ok(())
}

