//! Attestation ledger: verified principals vouching for other principals.
//!
//! Keyed by the ordered pair (attester, subject). Revoking keeps the record with
//! `valid = false`; attesting again afterwards makes it valid again.

use soroban_sdk::{contracttype, Address, Env};

use crate::{config, events, identity, storage, DataKey, Error};

/// Attestation record.
///
/// # Fields
/// * `attester` - Verified principal that made the attestation.
/// * `subject` - Principal being vouched for. Need not be registered.
/// * `valid` - False once the attester revokes it.
/// * `attested_at` - Ledger timestamp of the latest attestation.
/// * `revoked_at` - Ledger timestamp of the latest revocation (0 if never).
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Attestation {
    pub attester: Address,
    pub subject: Address,
    pub valid: bool,
    pub attested_at: u64,
    pub revoked_at: u64,
}

fn key(attester: &Address, subject: &Address) -> DataKey {
    DataKey::Attestation(attester.clone(), subject.clone())
}

pub fn make(e: &Env, attester: &Address, subject: &Address) -> Result<(), Error> {
    identity::require_verified(e, attester)?;
    if attester == subject && !config::get(e).allow_self_attestation {
        return Err(Error::SelfAttestation);
    }

    let now = e.ledger().timestamp();
    let revoked_at = get(e, attester, subject).map_or(0, |a| a.revoked_at);
    let attestation = Attestation {
        attester: attester.clone(),
        subject: subject.clone(),
        valid: true,
        attested_at: now,
        revoked_at,
    };
    storage::set(e, &key(attester, subject), &attestation);

    events::attestation_made(e, attester, subject, now);
    Ok(())
}

pub fn revoke(e: &Env, attester: &Address, subject: &Address) -> Result<(), Error> {
    identity::require_verified(e, attester)?;
    let mut attestation = get(e, attester, subject)
        .filter(|a| a.valid)
        .ok_or(Error::AttestationNotFound)?;

    let now = e.ledger().timestamp();
    attestation.valid = false;
    attestation.revoked_at = now;
    storage::set(e, &key(attester, subject), &attestation);

    events::attestation_revoked(e, attester, subject, now);
    Ok(())
}

pub fn get(e: &Env, attester: &Address, subject: &Address) -> Option<Attestation> {
    storage::get(e, &key(attester, subject))
}

pub fn is_valid(e: &Env, attester: &Address, subject: &Address) -> bool {
    get(e, attester, subject).map_or(false, |a| a.valid)
}
