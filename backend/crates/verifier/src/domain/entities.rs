//! Domain Entities
//!
//! Core entities for the attestation verifier domain.

use crate::domain::value_objects::{ConnId, Nonce};
use std::collections::BTreeMap;

/// Session entity - one issued challenge waiting for (or past) verification
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub id: ConnId,
    pub nonce: Nonce,
}

impl Session {
    pub fn new(id: ConnId, nonce: Nonce) -> Self {
        Self { id, nonce }
    }
}

/// Attestation evidence submitted by a client.
///
/// Shaped after the TPM attestation message: an attestation key, one quote
/// per PCR bank, and the boot event logs. Nothing here is parsed by the
/// default verifier.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attestation {
    pub ak_pub: Vec<u8>,
    pub quotes: Vec<Quote>,
    pub event_log: Vec<u8>,
    pub canonical_event_log: Vec<u8>,
    pub ak_cert: Vec<u8>,
    pub intermediate_certs: Vec<Vec<u8>>,
}

impl Attestation {
    /// True when the payload carries no evidence at all
    pub fn is_empty(&self) -> bool {
        self.ak_pub.is_empty()
            && self.quotes.iter().all(Quote::is_empty)
            && self.event_log.is_empty()
            && self.canonical_event_log.is_empty()
            && self.ak_cert.is_empty()
            && self.intermediate_certs.iter().all(Vec::is_empty)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Quote {
    /// Marshalled TPMS_ATTEST
    pub quote: Vec<u8>,
    /// Marshalled TPMT_SIGNATURE over `quote`
    pub raw_sig: Vec<u8>,
    pub pcrs: Option<PcrBank>,
}

impl Quote {
    pub fn is_empty(&self) -> bool {
        self.quote.is_empty()
            && self.raw_sig.is_empty()
            && self.pcrs.as_ref().is_none_or(|bank| bank.pcrs.is_empty())
    }
}

/// PCR values for a single hash algorithm
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PcrBank {
    /// TPM_ALG_ID of the bank
    pub hash: u32,
    pub pcrs: BTreeMap<u32, Vec<u8>>,
}
