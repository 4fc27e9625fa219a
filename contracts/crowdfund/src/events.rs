use soroban_sdk::{contracttype, symbol_short, Address, Env, String};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCreated {
    pub campaign_id: u32,
    pub owner: Address,
    pub goal: i128,
    pub deadline: u64,
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Contributed {
    pub campaign_id: u32,
    pub contributor: Address,
    pub amount: i128,
    pub total_raised: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Terminated {
    pub campaign_id: u32,
    pub owner: Address,
    pub deadline: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Refunded {
    pub campaign_id: u32,
    pub contributor: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Withdrawn {
    pub campaign_id: u32,
    pub owner: Address,
    pub amount: i128,
}

pub fn emit_campaign_created(env: &Env, data: CampaignCreated) {
    let topics = (symbol_short!("created"), data.campaign_id);
    env.events().publish(topics, data);
}

pub fn emit_contributed(
    env: &Env,
    campaign_id: u32,
    contributor: Address,
    amount: i128,
    total_raised: i128,
) {
    let topics = (symbol_short!("contrib"), campaign_id);
    let data = Contributed {
        campaign_id,
        contributor,
        amount,
        total_raised,
    };
    env.events().publish(topics, data);
}

pub fn emit_terminated(env: &Env, campaign_id: u32, owner: Address, deadline: u64) {
    let topics = (symbol_short!("terminate"), campaign_id);
    let data = Terminated {
        campaign_id,
        owner,
        deadline,
    };
    env.events().publish(topics, data);
}

pub fn emit_refunded(env: &Env, campaign_id: u32, contributor: Address, amount: i128) {
    let topics = (symbol_short!("refund"), campaign_id);
    let data = Refunded {
        campaign_id,
        contributor,
        amount,
    };
    env.events().publish(topics, data);
}

pub fn emit_withdrawn(env: &Env, campaign_id: u32, owner: Address, amount: i128) {
    let topics = (symbol_short!("withdraw"), campaign_id);
    let data = Withdrawn {
        campaign_id,
        owner,
        amount,
    };
    env.events().publish(topics, data);
}
