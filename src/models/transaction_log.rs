use super::lenient::{null_default, opt_scalar, opt_text, opt_u64};
use crate::utils::date::timestamp_from_value;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Smart-contract transaction log entry.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct TransactionLog {
    #[serde(default, deserialize_with = "opt_text")]
    pub transaction_hash: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub contract_address: Option<String>,
    #[serde(default, deserialize_with = "opt_text")]
    pub function_name: Option<String>,
    /// Caller, when the backend attributes the transaction to an employee.
    #[serde(default, deserialize_with = "opt_text")]
    pub employee_did: Option<String>,
    #[serde(default)]
    pub status: Option<TxStatus>,
    #[serde(default, deserialize_with = "opt_u64")]
    pub gas_used: Option<u64>,
    #[serde(default, deserialize_with = "opt_u64")]
    pub block_number: Option<u64>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub timestamp: Option<Value>,
    #[serde(rename = "createdAt", default, deserialize_with = "opt_scalar")]
    pub created_at: Option<Value>,
    #[serde(rename = "updatedAt", default, deserialize_with = "opt_scalar")]
    pub updated_at: Option<Value>,
    #[serde(default, deserialize_with = "opt_scalar")]
    pub block_timestamp: Option<Value>,
    #[serde(default, deserialize_with = "null_default")]
    pub event_logs: Vec<EventLog>,
}

impl TransactionLog {
    /// First present value of `timestamp` → `createdAt` → `updatedAt` →
    /// `block_timestamp`, parsed.
    pub fn canonical_timestamp(&self) -> Option<NaiveDateTime> {
        [
            &self.timestamp,
            &self.created_at,
            &self.updated_at,
            &self.block_timestamp,
        ]
        .into_iter()
        .find_map(Option::as_ref)
        .and_then(timestamp_from_value)
    }
}

/// Event emitted by the transaction. The payload is opaque.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct EventLog {
    #[serde(alias = "name", default, deserialize_with = "opt_text")]
    pub event: Option<String>,
    #[serde(default)]
    pub data: Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TxStatus {
    Success,
    Failed,
    Pending,
    Other(String),
}

impl TxStatus {
    pub fn label(&self) -> &str {
        match self {
            TxStatus::Success => "Success",
            TxStatus::Failed => "Failed",
            TxStatus::Pending => "Pending",
            TxStatus::Other(s) => s,
        }
    }
}

impl From<String> for TxStatus {
    fn from(s: String) -> Self {
        let t = s.trim();
        match t.to_lowercase().as_str() {
            "success" => TxStatus::Success,
            "failed" => TxStatus::Failed,
            "pending" => TxStatus::Pending,
            _ => TxStatus::Other(t.to_string()),
        }
    }
}

impl From<&str> for TxStatus {
    fn from(s: &str) -> Self {
        TxStatus::from(s.to_string())
    }
}

impl From<TxStatus> for String {
    fn from(s: TxStatus) -> Self {
        s.label().to_string()
    }
}

impl fmt::Display for TxStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    #[test]
    fn timestamp_chain_takes_first_present_field() {
        let log: TransactionLog = serde_json::from_value(json!({
            "transaction_hash": "0xabc",
            "timestamp": null,
            "createdAt": "2025-09-03T10:00:00Z",
            "block_timestamp": 1_000
        }))
        .unwrap();

        let ts = log.canonical_timestamp().unwrap();
        assert_eq!(ts.date(), NaiveDate::from_ymd_opt(2025, 9, 3).unwrap());
    }

    #[test]
    fn numbers_as_strings_and_null_events() {
        let log: TransactionLog = serde_json::from_value(json!({
            "status": "Success",
            "gas_used": "21000",
            "block_number": 123456,
            "event_logs": null
        }))
        .unwrap();

        assert_eq!(log.status, Some(TxStatus::Success));
        assert_eq!(log.gas_used, Some(21_000));
        assert_eq!(log.block_number, Some(123_456));
        assert!(log.event_logs.is_empty());
        assert_eq!(log.canonical_timestamp(), None);
    }

    #[test]
    fn absurd_numeric_timestamp_is_unparseable() {
        let log: TransactionLog =
            serde_json::from_value(json!({ "transaction_hash": "0x1", "timestamp": -1e30 }))
                .unwrap();
        assert_eq!(log.canonical_timestamp(), None);
    }

    #[test]
    fn event_name_alias() {
        let ev: EventLog =
            serde_json::from_value(json!({ "name": "PayrollPaid", "data": { "amount": 5 } }))
                .unwrap();
        assert_eq!(ev.event.as_deref(), Some("PayrollPaid"));
        assert_eq!(ev.data["amount"], 5);
    }
}
