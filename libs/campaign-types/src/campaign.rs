use soroban_sdk::{contracttype, Address};

/// Campaign configuration - immutable after creation
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignConfig {
    /// Factory that deployed this campaign
    pub factory: Address,
    /// Sole authority for creating and finalizing requests
    pub manager: Address,
    /// Token contributions and payouts are denominated in
    pub token: Address,
    /// Floor for a single contribution, in the token's smallest unit
    pub minimum_contribution: i128,
}

/// Mutable campaign accounting - stored in Instance storage
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct CampaignState {
    /// Contributions received minus finalized payouts
    pub balance: i128,
    /// Number of distinct contributors
    pub approvers_count: u32,
    /// Number of requests ever created; also the next request index
    pub request_count: u32,
}

impl CampaignState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Read-only snapshot for front ends
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CampaignSummary {
    pub minimum_contribution: i128,
    pub balance: i128,
    pub request_count: u32,
    pub approvers_count: u32,
    pub manager: Address,
}

impl CampaignSummary {
    pub fn from_parts(config: &CampaignConfig, state: &CampaignState) -> Self {
        Self {
            minimum_contribution: config.minimum_contribution,
            balance: state.balance,
            request_count: state.request_count,
            approvers_count: state.approvers_count,
            manager: config.manager.clone(),
        }
    }
}
