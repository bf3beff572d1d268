use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ContributionEvent {
    pub contributor: Address,
    pub amount: i128,
    /// True when this contribution added the contributor to the approver set
    pub new_approver: bool,
    pub balance: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestCreatedEvent {
    pub index: u32,
    pub value: i128,
    pub recipient: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestApprovedEvent {
    pub index: u32,
    pub approver: Address,
    pub approval_count: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RequestFinalizedEvent {
    pub index: u32,
    pub recipient: Address,
    pub value: i128,
    pub balance: i128,
}

pub fn contribution(env: &Env, event: ContributionEvent) {
    env.events()
        .publish((Symbol::new(env, "contribution"),), event);
}

pub fn request_created(env: &Env, event: RequestCreatedEvent) {
    env.events()
        .publish((Symbol::new(env, "request_created"), event.index), event);
}

pub fn request_approved(env: &Env, event: RequestApprovedEvent) {
    env.events()
        .publish((Symbol::new(env, "request_approved"), event.index), event);
}

pub fn request_finalized(env: &Env, event: RequestFinalizedEvent) {
    env.events()
        .publish((Symbol::new(env, "request_finalized"), event.index), event);
}
