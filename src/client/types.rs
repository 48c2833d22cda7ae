use serde::{Deserialize, Serialize};

/// One scored transaction as returned by the prediction backend.
/// Field order and record order are whatever the backend sent; this layer
/// never reorders or rescores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub amount: f64,
    /// Estimated likelihood of fraud, in [0, 1].
    pub fraud_probability: f64,
    pub is_fraud: bool,
}
