//! Pure view derivations over a result set. Nothing here is stored on the
//! state; every value is recomputed from `results` at render time.

use super::types::Transaction;

/// Presentation tiers for the per-row risk treatment. Thresholds are
/// display policy, not scoring logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    Low,
    Medium,
    High,
}

impl RiskTier {
    pub fn from_probability(probability: f64) -> Self {
        if probability > 0.7 {
            RiskTier::High
        } else if probability > 0.4 {
            RiskTier::Medium
        } else {
            RiskTier::Low
        }
    }
}

pub fn fraud_count(results: &[Transaction]) -> usize {
    results.iter().filter(|t| t.is_fraud).count()
}

pub fn legitimate_count(results: &[Transaction]) -> usize {
    results.len() - fraud_count(results)
}

/// Whether the results table shows a Transaction ID column. Decided once
/// per result set from the first row; rows lacking an id render an empty
/// cell rather than shifting the columns.
pub fn has_transaction_id(results: &[Transaction]) -> bool {
    results
        .first()
        .is_some_and(|t| t.transaction_id.as_deref().is_some_and(|id| !id.is_empty()))
}

/// en-US style currency: dollar sign, thousands separators, two decimals.
pub fn format_currency(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let dollars = total_cents / 100;
    let cents = total_cents % 100;
    format!("{}${}.{:02}", sign, group_thousands(dollars), cents)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Probability as a percentage with one decimal, e.g. `82.3%`.
pub fn format_probability(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tx(id: Option<&str>, amount: f64, probability: f64, is_fraud: bool) -> Transaction {
        Transaction {
            transaction_id: id.map(str::to_string),
            amount,
            fraud_probability: probability,
            is_fraud,
        }
    }

    #[test]
    fn counts_partition_the_result_set() {
        let results = vec![
            tx(Some("a"), 120.5, 0.82, true),
            tx(Some("b"), 40.0, 0.1, false),
            tx(Some("c"), 7.25, 0.55, false),
        ];
        assert_eq!(fraud_count(&results), 1);
        assert_eq!(legitimate_count(&results), 2);
        assert_eq!(fraud_count(&results) + legitimate_count(&results), results.len());
    }

    #[test]
    fn counts_on_empty_results_are_zero() {
        assert_eq!(fraud_count(&[]), 0);
        assert_eq!(legitimate_count(&[]), 0);
    }

    #[test]
    fn risk_tier_boundaries() {
        assert_eq!(RiskTier::from_probability(0.82), RiskTier::High);
        assert_eq!(RiskTier::from_probability(0.71), RiskTier::High);
        assert_eq!(RiskTier::from_probability(0.7), RiskTier::Medium);
        assert_eq!(RiskTier::from_probability(0.41), RiskTier::Medium);
        assert_eq!(RiskTier::from_probability(0.4), RiskTier::Low);
        assert_eq!(RiskTier::from_probability(0.0), RiskTier::Low);
    }

    #[test]
    fn id_column_decided_by_first_row_only() {
        assert!(!has_transaction_id(&[]));

        let with_id = vec![tx(Some("t-1"), 1.0, 0.1, false), tx(None, 2.0, 0.2, false)];
        assert!(has_transaction_id(&with_id));

        let without_id = vec![tx(None, 1.0, 0.1, false), tx(Some("t-2"), 2.0, 0.2, false)];
        assert!(!has_transaction_id(&without_id));

        let empty_id = vec![tx(Some(""), 1.0, 0.1, false)];
        assert!(!has_transaction_id(&empty_id));
    }

    #[test]
    fn currency_formatting() {
        assert_eq!(format_currency(120.5), "$120.50");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-40.0), "-$40.00");
        assert_eq!(format_currency(999.999), "$1,000.00");
    }

    #[test]
    fn probability_formatting() {
        assert_eq!(format_probability(0.82), "82.0%");
        assert_eq!(format_probability(0.823), "82.3%");
        assert_eq!(format_probability(0.1), "10.0%");
        assert_eq!(format_probability(1.0), "100.0%");
    }
}
