//! Contract events. One event per successful state change; failed calls emit nothing.

use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

const INITIALIZED: Symbol = symbol_short!("init");
const IDENTITY_REGISTERED: Symbol = symbol_short!("id_reg");
const IDENTITY_VERIFIED: Symbol = symbol_short!("id_ver");
const IDENTITY_REVOKED: Symbol = symbol_short!("id_rev");
const VERIFICATION_RENEWED: Symbol = symbol_short!("id_renew");
const EMAIL_UPDATED: Symbol = symbol_short!("email_upd");
const ATTRIBUTE_SET: Symbol = symbol_short!("attr_set");
const REPUTATION_UPDATED: Symbol = symbol_short!("rep_upd");
const ATTESTATION_MADE: Symbol = symbol_short!("att_make");
const ATTESTATION_REVOKED: Symbol = symbol_short!("att_revk");
const DISPUTE_FILED: Symbol = symbol_short!("disp_file");
const DISPUTE_RESOLVED: Symbol = symbol_short!("disp_res");
const GOVERNANCE_SET: Symbol = symbol_short!("gov_set");
const PROPOSAL_SUBMITTED: Symbol = symbol_short!("gov_prop");

pub fn initialized(e: &Env, admin: &Address) {
    e.events().publish((INITIALIZED,), admin.clone());
}

pub fn identity_registered(e: &Env, principal: &Address, name: &String, email: &String) {
    e.events().publish(
        (IDENTITY_REGISTERED, principal.clone()),
        (name.clone(), email.clone()),
    );
}

pub fn identity_verified(e: &Env, target: &Address, tier: u32, expires_at: u64) {
    e.events()
        .publish((IDENTITY_VERIFIED, target.clone()), (tier, expires_at));
}

pub fn identity_revoked(e: &Env, target: &Address) {
    e.events().publish((IDENTITY_REVOKED, target.clone()), ());
}

pub fn verification_renewed(e: &Env, principal: &Address, expires_at: u64) {
    e.events()
        .publish((VERIFICATION_RENEWED, principal.clone()), expires_at);
}

pub fn email_updated(e: &Env, principal: &Address, email: &String) {
    e.events()
        .publish((EMAIL_UPDATED, principal.clone()), email.clone());
}

pub fn attribute_set(e: &Env, principal: &Address, key: &String, value: &String) {
    e.events().publish(
        (ATTRIBUTE_SET, principal.clone()),
        (key.clone(), value.clone()),
    );
}

pub fn reputation_updated(e: &Env, target: &Address, delta: i64, reputation: u64) {
    e.events()
        .publish((REPUTATION_UPDATED, target.clone()), (delta, reputation));
}

pub fn attestation_made(e: &Env, attester: &Address, subject: &Address, attested_at: u64) {
    e.events().publish(
        (ATTESTATION_MADE, attester.clone(), subject.clone()),
        attested_at,
    );
}

pub fn attestation_revoked(e: &Env, attester: &Address, subject: &Address, revoked_at: u64) {
    e.events().publish(
        (ATTESTATION_REVOKED, attester.clone(), subject.clone()),
        revoked_at,
    );
}

pub fn dispute_filed(e: &Env, filer: &Address, respondent: &Address, reason: &String) {
    e.events().publish(
        (DISPUTE_FILED, filer.clone(), respondent.clone()),
        reason.clone(),
    );
}

pub fn dispute_resolved(e: &Env, filer: &Address, respondent: &Address, resolved_at: u64) {
    e.events().publish(
        (DISPUTE_RESOLVED, filer.clone(), respondent.clone()),
        resolved_at,
    );
}

pub fn governance_set(e: &Env, enabled: bool) {
    e.events().publish((GOVERNANCE_SET,), enabled);
}

pub fn proposal_submitted(e: &Env, id: u64, proposer: &Address, text: &String) {
    e.events()
        .publish((PROPOSAL_SUBMITTED, id), (proposer.clone(), text.clone()));
}
