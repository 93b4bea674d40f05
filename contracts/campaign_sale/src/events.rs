use soroban_sdk::{contractevent, Address};

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignLaunchedEvent {
    #[topic]
    pub creator: Address,
    #[topic]
    pub campaign_id: u64,
    pub goal: i128,
    pub start_time: u64,
    pub end_time: u64,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignCanceledEvent {
    #[topic]
    pub campaign_id: u64,
    pub creator: Address,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributedEvent {
    #[topic]
    pub contributor: Address,
    #[topic]
    pub campaign_id: u64,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PledgeWithdrawnEvent {
    #[topic]
    pub contributor: Address,
    #[topic]
    pub campaign_id: u64,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignClaimedEvent {
    #[topic]
    pub creator: Address,
    #[topic]
    pub campaign_id: u64,
    pub amount: i128,
}

#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionRefundedEvent {
    #[topic]
    pub contributor: Address,
    #[topic]
    pub campaign_id: u64,
    pub amount: i128,
}
