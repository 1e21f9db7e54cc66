//! Dispute log between principal pairs.
//!
//! One dispute per (filer, respondent). A resolved dispute can be replaced by
//! filing again; an open one cannot.

use soroban_sdk::{contracttype, Address, Env, String};

use crate::{events, identity, storage, DataKey, Error};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DisputeStatus {
    Open,
    Resolved,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dispute {
    pub filer: Address,
    pub respondent: Address,
    pub reason: String,
    pub status: DisputeStatus,
    pub filed_at: u64,
    /// 0 while open.
    pub resolved_at: u64,
}

fn key(filer: &Address, respondent: &Address) -> DataKey {
    DataKey::Dispute(filer.clone(), respondent.clone())
}

pub fn file(e: &Env, filer: &Address, respondent: &Address, reason: String) -> Result<(), Error> {
    identity::require_verified(e, filer)?;
    if let Some(existing) = get(e, filer, respondent) {
        if existing.status == DisputeStatus::Open {
            return Err(Error::DisputeAlreadyOpen);
        }
    }

    let dispute = Dispute {
        filer: filer.clone(),
        respondent: respondent.clone(),
        reason,
        status: DisputeStatus::Open,
        filed_at: e.ledger().timestamp(),
        resolved_at: 0,
    };
    storage::set(e, &key(filer, respondent), &dispute);

    events::dispute_filed(e, filer, respondent, &dispute.reason);
    Ok(())
}

pub fn resolve(e: &Env, filer: &Address, respondent: &Address) -> Result<(), Error> {
    let mut dispute = get(e, filer, respondent).ok_or(Error::DisputeNotFound)?;
    if dispute.status != DisputeStatus::Open {
        return Err(Error::DisputeNotOpen);
    }

    dispute.status = DisputeStatus::Resolved;
    dispute.resolved_at = e.ledger().timestamp();
    storage::set(e, &key(filer, respondent), &dispute);

    events::dispute_resolved(e, filer, respondent, dispute.resolved_at);
    Ok(())
}

pub fn get(e: &Env, filer: &Address, respondent: &Address) -> Option<Dispute> {
    storage::get(e, &key(filer, respondent))
}
