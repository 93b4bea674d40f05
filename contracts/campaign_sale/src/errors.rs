use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CampaignError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    CampaignNotFound = 3,
    CampaignInPast = 4,
    NegativeDuration = 5,
    DurationTooLong = 6,
    ZeroGoal = 7,
    OnlyCreatorCanCancel = 8,
    AlreadyStarted = 9,
    NotStarted = 10,
    AlreadyFinished = 11,
    ZeroAmount = 12,
    CannotWithdrawAmount = 13,
    NotCreator = 14,
    NotFinished = 15,
    AlreadyClaimed = 16,
    GoalReached = 17,
    NothingToRefund = 18,
    Overflow = 19,
}

impl CampaignError {
    /// Stable human-readable reason, kept identical across releases so that
    /// off-chain clients can match on it.
    pub fn message(&self) -> &'static str {
        match self {
            CampaignError::NotInitialized => "Contract is not initialized.",
            CampaignError::AlreadyInitialized => "Contract is already initialized.",
            CampaignError::CampaignNotFound => "Campaign does not exist.",
            CampaignError::CampaignInPast => "You can not create a campaign in the past.",
            CampaignError::NegativeDuration => "Campaign duration can not be negative.",
            CampaignError::DurationTooLong => "Campaign should last at max 90 days.",
            CampaignError::ZeroGoal => "Campaign goal has to be greater than zero.",
            CampaignError::OnlyCreatorCanCancel => "Only the creator can cancel a campaign.",
            CampaignError::AlreadyStarted => "Can not cancel an already started campaign.",
            CampaignError::NotStarted => "The campaign has not started yet.",
            CampaignError::AlreadyFinished => "The campaign has already finished.",
            CampaignError::ZeroAmount => "amount can not be zero.",
            CampaignError::CannotWithdrawAmount => "You can not withdraw that amount.",
            CampaignError::NotCreator => "You are not the creator of this campaing.",
            CampaignError::NotFinished => "The campaign has not finished yet.",
            CampaignError::AlreadyClaimed => "The campaign has already been claimed.",
            CampaignError::GoalReached => "The campaign reach its goal.",
            CampaignError::NothingToRefund => "Nothing to refund.",
            CampaignError::Overflow => "Arithmetic overflow.",
        }
    }
}
