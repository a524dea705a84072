//! API DTOs (Data Transfer Objects)
//!
//! Field names follow the protobuf JSON mapping of the AttestationVerifier
//! gRPC service, so JSON clients of either see the same shapes:
//! lowerCamelCase names, bytes as standard base64. Like protobuf JSON
//! parsers, requests also accept the proto field names (`conn_id`, `ak_pub`)
//! and enums written either by name or by number.

use crate::domain::entities::{Attestation, PcrBank, Quote};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// Response for /v0/params
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetParamsResponse {
    pub conn_id: String,
    pub nonce: String,
    pub audience: String,
}

/// Request for POST /v0/verify
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest {
    #[serde(default, alias = "conn_id")]
    pub conn_id: String,
    #[serde(default)]
    pub attestation: Option<AttestationDto>,
}

/// Response for POST /v0/verify
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyResponse {
    pub claims_token: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttestationDto {
    #[serde(alias = "ak_pub", deserialize_with = "base64_bytes")]
    pub ak_pub: Vec<u8>,
    #[serde(deserialize_with = "null_as_default")]
    pub quotes: Vec<QuoteDto>,
    #[serde(alias = "event_log", deserialize_with = "base64_bytes")]
    pub event_log: Vec<u8>,
    #[serde(alias = "canonical_event_log", deserialize_with = "base64_bytes")]
    pub canonical_event_log: Vec<u8>,
    #[serde(alias = "ak_cert", deserialize_with = "base64_bytes")]
    pub ak_cert: Vec<u8>,
    #[serde(alias = "intermediate_certs", deserialize_with = "base64_list")]
    pub intermediate_certs: Vec<Vec<u8>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct QuoteDto {
    #[serde(deserialize_with = "base64_bytes")]
    pub quote: Vec<u8>,
    #[serde(alias = "raw_sig", deserialize_with = "base64_bytes")]
    pub raw_sig: Vec<u8>,
    pub pcrs: Option<PcrsDto>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PcrsDto {
    #[serde(deserialize_with = "hash_algo")]
    pub hash: u32,
    #[serde(deserialize_with = "base64_map")]
    pub pcrs: BTreeMap<u32, Vec<u8>>,
}

impl From<AttestationDto> for Attestation {
    fn from(dto: AttestationDto) -> Self {
        Self {
            ak_pub: dto.ak_pub,
            quotes: dto.quotes.into_iter().map(Quote::from).collect(),
            event_log: dto.event_log,
            canonical_event_log: dto.canonical_event_log,
            ak_cert: dto.ak_cert,
            intermediate_certs: dto.intermediate_certs,
        }
    }
}

impl From<QuoteDto> for Quote {
    fn from(dto: QuoteDto) -> Self {
        Self {
            quote: dto.quote,
            raw_sig: dto.raw_sig,
            pcrs: dto.pcrs.map(|p| PcrBank {
                hash: p.hash,
                pcrs: p.pcrs,
            }),
        }
    }
}

fn decode<E: serde::de::Error>(encoded: &str) -> Result<Vec<u8>, E> {
    platform::crypto::from_base64(encoded).map_err(E::custom)
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// TPM `HashAlgo` enum values by protobuf name
const HASH_ALGOS: [(&str, u32); 5] = [
    ("HASH_INVALID", 0),
    ("SHA1", 4),
    ("SHA256", 11),
    ("SHA384", 12),
    ("SHA512", 13),
];

#[derive(Deserialize)]
#[serde(untagged)]
enum EnumValue {
    Number(u32),
    Name(String),
}

fn hash_algo<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<EnumValue>::deserialize(deserializer)? {
        None => Ok(0),
        Some(EnumValue::Number(value)) => Ok(value),
        Some(EnumValue::Name(name)) => HASH_ALGOS
            .iter()
            .find(|(known, _)| *known == name)
            .map(|&(_, value)| value)
            .ok_or_else(|| D::Error::custom(format!("unknown hash algorithm `{name}`"))),
    }
}

fn base64_bytes<'de, D>(deserializer: D) -> Result<Vec<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<String>::deserialize(deserializer)? {
        Some(encoded) => decode(&encoded),
        None => Ok(Vec::new()),
    }
}

fn base64_list<'de, D>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer)?
        .unwrap_or_default()
        .iter()
        .map(|encoded| decode(encoded))
        .collect()
}

fn base64_map<'de, D>(deserializer: D) -> Result<BTreeMap<u32, Vec<u8>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<BTreeMap<u32, String>>::deserialize(deserializer)?
        .unwrap_or_default()
        .into_iter()
        .map(|(index, encoded)| decode(&encoded).map(|digest| (index, digest)))
        .collect()
}
