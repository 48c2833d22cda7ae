use colored::Colorize;

use super::state::UploadState;
use super::types::Transaction;
use super::view::{
    format_currency, format_probability, fraud_count, has_transaction_id, legitimate_count,
    RiskTier,
};

/// Print the settled state of one submission: an error, or the summary
/// counts followed by the result table.
pub fn render(state: &UploadState) {
    if let Some(error) = &state.error {
        println!("{}", format!("❌ {}", error).red().bold());
        return;
    }

    if state.results.is_empty() {
        println!("{}", "No transactions in response.".yellow());
        return;
    }

    render_summary(&state.results);
    println!();
    render_table(&state.results);
}

fn render_summary(results: &[Transaction]) {
    let fraud = fraud_count(results);
    let legitimate = legitimate_count(results);

    println!("\n{}", "Analysis Results".cyan().bold());
    println!("Legitimate:     {}", legitimate.to_string().green().bold());
    println!("Fraudulent:     {}", fraud.to_string().red().bold());
    println!("Total Analyzed: {}", results.len().to_string().blue().bold());
}

fn render_table(results: &[Transaction]) {
    let show_id = has_transaction_id(results);

    if show_id {
        println!(
            "{:<20} {:>14} {:>8}  {}",
            "Transaction ID".bold(),
            "Amount".bold(),
            "Risk".bold(),
            "Status".bold()
        );
    } else {
        println!("{:>14} {:>8}  {}", "Amount".bold(), "Risk".bold(), "Status".bold());
    }

    for transaction in results {
        let probability = format_probability(transaction.fraud_probability);
        let risk = match RiskTier::from_probability(transaction.fraud_probability) {
            RiskTier::High => probability.red(),
            RiskTier::Medium => probability.yellow(),
            RiskTier::Low => probability.green(),
        };
        let status = if transaction.is_fraud {
            "Fraud".red().bold()
        } else {
            "Legitimate".green()
        };

        if show_id {
            println!(
                "{:<20} {:>14} {:>8}  {}",
                transaction.transaction_id.as_deref().unwrap_or(""),
                format_currency(transaction.amount),
                risk,
                status
            );
        } else {
            println!(
                "{:>14} {:>8}  {}",
                format_currency(transaction.amount),
                risk,
                status
            );
        }
    }
}
