//! Field extraction from utility bills and statements.

use instrument_text::NormalizedText;
use serde::{Deserialize, Serialize};

use crate::patterns::{BILL_NUMBER, CURRENCY, CUSTOMER_NAME, REMITTANCE_COUPON, TOTAL_AMOUNT};

/// Lines captured for a remittance coupon, starting at the keyword line.
const COUPON_BLOCK_LINES: usize = 10;

const DEFAULT_CUSTOMER: &str = "Valued Customer";

/// Key fields of a bill. Values keep their original casing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillFields {
    pub bill_number: Option<String>,
    pub total_amount: Option<String>,
    /// ISO code where the symbol is known (`$` is USD), `N/A` when absent.
    pub currency: String,
    pub customer_name: String,
    pub remittance_coupon: Option<String>,
}

impl BillFields {
    pub fn extract(text: &NormalizedText) -> Self {
        let lines = text.source_lines();
        let body = lines.join("\n");

        let capture = |re: &regex::Regex| {
            re.captures(&body)
                .and_then(|caps| caps.get(1))
                .map(|m| m.as_str().trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let currency = capture(&CURRENCY)
            .map(|symbol| currency_code(&symbol))
            .unwrap_or_else(|| "N/A".to_string());

        Self {
            bill_number: capture(&BILL_NUMBER),
            total_amount: capture(&TOTAL_AMOUNT),
            currency,
            customer_name: capture(&CUSTOMER_NAME).unwrap_or_else(|| DEFAULT_CUSTOMER.to_string()),
            remittance_coupon: remittance_coupon(lines),
        }
    }
}

fn currency_code(symbol: &str) -> String {
    match symbol {
        "$" => "USD",
        "€" => "EUR",
        "£" => "GBP",
        "¥" => "JPY",
        other => other,
    }
    .to_string()
}

fn remittance_coupon(lines: &[String]) -> Option<String> {
    let start = lines.iter().position(|line| REMITTANCE_COUPON.is_match(line))?;
    Some(
        lines[start..]
            .iter()
            .take(COUPON_BLOCK_LINES)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join("\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const BILL: &str = "\
City Power & Light
Customer Name: Jane Q. Public
Account Number: 8812-0045
Amount Due: $142.17
Due by 03/15/2025

Please detach and return with payment
Account: 8812-0045
Amount enclosed: ______";

    #[test]
    fn extracts_bill_fields() {
        let fields = BillFields::extract(&NormalizedText::from_text(BILL));
        assert_eq!(fields.bill_number.as_deref(), Some("8812-0045"));
        assert_eq!(fields.total_amount.as_deref(), Some("142.17"));
        assert_eq!(fields.currency, "USD");
        assert_eq!(fields.customer_name, "Jane Q. Public");
        assert_eq!(
            fields.remittance_coupon.as_deref(),
            Some("Please detach and return with payment\nAccount: 8812-0045\nAmount enclosed: ______")
        );
    }

    #[test]
    fn defaults_when_fields_missing() {
        let fields = BillFields::extract(&NormalizedText::from_text("Thank you for your business"));
        assert_eq!(fields.bill_number, None);
        assert_eq!(fields.currency, "N/A");
        assert_eq!(fields.customer_name, "Valued Customer");
        assert_eq!(fields.remittance_coupon, None);
    }

    #[test]
    fn euro_balance() {
        let fields = BillFields::extract(&NormalizedText::from_text("Balance Due: €80,00"));
        assert_eq!(fields.currency, "EUR");
        assert_eq!(fields.total_amount.as_deref(), Some("80,00"));
    }
}
