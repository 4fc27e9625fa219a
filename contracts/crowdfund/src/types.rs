//! # Types
//!
//! A campaign lives in two ledger entries:
//!
//! - [`CampaignConfig`]: written once by the factory, never mutated.
//! - [`CampaignState`]: rewritten by contributions, refunds, payouts and
//!   early termination.
//!
//! [`Campaign`] is the read model handed back to callers, rebuilt from both
//! entries together with the derived [`CampaignStatus`].
//!
//! ```text
//! Active ──► Succeeded        (total_raised >= goal, permanent)
//!    ├─────► Failed           (deadline passed below goal)
//!    └─────► TerminatedEarly  (owner pulled the deadline to "now")
//! ```

use soroban_sdk::{contracttype, Address, String};

/// Lifecycle state of a campaign, derived from its ledger and the clock.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CampaignStatus {
    /// Accepting contributions.
    Active,
    /// Goal reached. The owner may collect; refunds are closed.
    Succeeded,
    /// Deadline passed below goal. Contributors may reclaim their stake.
    Failed,
    /// Owner ended the campaign below goal. Same withdrawal rules as `Failed`.
    TerminatedEarly,
}

/// Immutable campaign configuration.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    pub id: u32,
    pub owner: Address,
    /// Target in the funding token's smallest unit.
    pub goal: i128,
    /// Display name of the campaign's reward credits.
    pub name: String,
    pub symbol: String,
    pub created_at: u64,
}

/// Mutable campaign ledger.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignState {
    /// Contributions are accepted while `now < deadline`.
    pub deadline: u64,
    /// Sum of every contributor's live stake.
    pub total_raised: i128,
    /// Amount already paid out to the owner. Never exceeds `total_raised`.
    pub paid_out: i128,
    pub terminated: bool,
    /// Sum of every contributor's reward credits.
    pub reward_supply: i128,
}

impl CampaignState {
    pub fn status(&self, goal: i128, now: u64) -> CampaignStatus {
        if self.total_raised >= goal {
            CampaignStatus::Succeeded
        } else if self.terminated {
            CampaignStatus::TerminatedEarly
        } else if now >= self.deadline {
            CampaignStatus::Failed
        } else {
            CampaignStatus::Active
        }
    }

    /// Raised funds the owner has not collected yet.
    pub fn remaining(&self) -> i128 {
        self.total_raised - self.paid_out
    }
}

/// Full view of one campaign, returned by `get_campaign`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Campaign {
    pub id: u32,
    pub owner: Address,
    pub goal: i128,
    pub name: String,
    pub symbol: String,
    pub created_at: u64,
    pub deadline: u64,
    pub total_raised: i128,
    pub paid_out: i128,
    pub reward_supply: i128,
    pub status: CampaignStatus,
}

impl Campaign {
    pub fn from_parts(config: CampaignConfig, state: &CampaignState, now: u64) -> Self {
        Campaign {
            id: config.id,
            status: state.status(config.goal, now),
            owner: config.owner,
            goal: config.goal,
            name: config.name,
            symbol: config.symbol,
            created_at: config.created_at,
            deadline: state.deadline,
            total_raised: state.total_raised,
            paid_out: state.paid_out,
            reward_supply: state.reward_supply,
        }
    }
}
