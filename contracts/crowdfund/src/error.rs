use soroban_sdk::contracterror;

/// Every rejection the contract can return. Any `Err` aborts the whole
/// invocation, so no ledger write or token transfer from a failed call
/// survives.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    /// Pledge is smaller than 0.01 of a whole token unit.
    BelowMinimumContribution = 1,
    /// The campaign deadline has been reached or moved to the past.
    DeadlinePassed = 2,
    /// Caller is not the campaign owner.
    NotOwner = 3,
    /// The goal has been reached; the campaign can no longer be ended early.
    GoalAlreadyReached = 4,
    /// Refunds open only once the deadline has passed.
    CampaignStillRunning = 5,
    /// The goal was met, so contributors cannot reclaim their stake.
    CampaignFullyFunded = 6,
    /// The owner may only collect funds from a successful campaign.
    GoalNotReached = 7,
    /// Registry lookup past the last created campaign.
    IndexOutOfRange = 8,
    AlreadyInitialized = 9,
    NotInitialized = 10,
    CampaignNotFound = 11,
    InvalidGoal = 12,
    InvalidAmount = 13,
    /// Owner payout larger than what is left of the raised funds.
    InsufficientFunds = 14,
    /// The caller has no recorded stake in this campaign.
    NothingToRefund = 15,
    Overflow = 16,
}
