use crate::events::{self, RequestApprovedEvent, RequestCreatedEvent, RequestFinalizedEvent};
use crate::storage::{
    get_config, get_request, get_state, has_approved, is_approver, set_approved, set_request,
    set_state,
};
use campaign_types::{quorum_reached, CampaignError, Request, RequestStatus};
use soroban_sdk::{log, token, Address, Env, String};

/// Append a new spending request.
///
/// Affordability is not checked here; a request may exceed the current
/// balance and only becomes payable once enough has been contributed.
pub fn create(
    env: &Env,
    caller: Address,
    description: String,
    value: i128,
    recipient: Address,
) -> Result<u32, CampaignError> {
    let config = get_config(env)?;
    if caller != config.manager {
        return Err(CampaignError::Unauthorized);
    }
    if value <= 0 {
        return Err(CampaignError::InvalidAmount);
    }
    // A payout to ourselves would debit the ledger while the tokens stay put
    if recipient == env.current_contract_address() {
        return Err(CampaignError::InvalidRecipient);
    }

    let mut state = get_state(env)?;
    let index = state.request_count;

    set_request(env, index, &Request::new(description, value, recipient.clone()));
    state.request_count += 1;
    set_state(env, &state);

    events::request_created(
        env,
        RequestCreatedEvent {
            index,
            value,
            recipient,
        },
    );

    Ok(index)
}

/// Record `approver`'s vote for request `index`.
pub fn approve(env: &Env, approver: Address, index: u32) -> Result<(), CampaignError> {
    let mut request = get_request(env, index)?;

    if !is_approver(env, &approver) {
        return Err(CampaignError::Unauthorized);
    }
    if request.is_complete() {
        return Err(CampaignError::RequestClosed);
    }
    if has_approved(env, index, &approver) {
        return Err(CampaignError::AlreadyApproved);
    }

    set_approved(env, index, &approver);
    request.approval_count += 1;
    set_request(env, index, &request);

    events::request_approved(
        env,
        RequestApprovedEvent {
            index,
            approver,
            approval_count: request.approval_count,
        },
    );

    Ok(())
}

/// Pay out request `index` and lock it.
///
/// Quorum is measured against the approver set as it stands now, so
/// contributors who joined after the request was created count toward
/// the denominator.
pub fn finalize(env: &Env, caller: Address, index: u32) -> Result<(), CampaignError> {
    let config = get_config(env)?;
    if caller != config.manager {
        return Err(CampaignError::Unauthorized);
    }

    let mut request = get_request(env, index)?;
    match request.status {
        RequestStatus::Complete => return Err(CampaignError::RequestClosed),
        RequestStatus::Proposed => {}
    }

    let mut state = get_state(env)?;

    if !quorum_reached(request.approval_count, state.approvers_count) {
        log!(
            env,
            "finalize rejected: quorum not met",
            index,
            request.approval_count,
            state.approvers_count
        );
        return Err(CampaignError::QuorumNotMet);
    }
    if state.balance < request.value {
        log!(
            env,
            "finalize rejected: insufficient funds",
            index,
            request.value,
            state.balance
        );
        return Err(CampaignError::InsufficientFunds);
    }

    // Debit, lock and pay within one invocation. If the token transfer
    // fails the host rolls back both writes, leaving the request payable.
    state.balance -= request.value;
    request.status = RequestStatus::Complete;
    set_state(env, &state);
    set_request(env, index, &request);

    let token_client = token::Client::new(env, &config.token);
    token_client.transfer(
        &env.current_contract_address(),
        &request.recipient,
        &request.value,
    );

    events::request_finalized(
        env,
        RequestFinalizedEvent {
            index,
            recipient: request.recipient,
            value: request.value,
            balance: state.balance,
        },
    );

    Ok(())
}
