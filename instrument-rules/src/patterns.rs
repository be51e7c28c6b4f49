//! Compiled regexes shared by rule predicates and field extraction.
//!
//! All patterns run against normalized (lowercase, whitespace-collapsed)
//! text unless the name says otherwise.

use once_cell::sync::Lazy;
use regex::Regex;

macro_rules! pattern {
    ($name:ident, $re:expr) => {
        pub(crate) static $name: Lazy<Regex> =
            Lazy::new(|| Regex::new($re).expect(concat!("Invalid ", stringify!($name), " regex")));
    };
}

pattern!(NEGOTIABLE, r"\b(non-|non |not )?negotiable\b");
pattern!(PROMISE_OR_ORDER, r"\b(?:promise[sd]?|order)\b");
pattern!(CONDITIONAL, r"\b(?:subject to|governed by)\b");
pattern!(DEMAND_OR_SIGHT, r"\b(?:on demand|at sight|on presentation)\b");
pattern!(BEARER_OR_ORDER, r"\bto (?:bearer|order)\b|\bpay to the order of\b");
pattern!(
    NAMED_PAYEE,
    r"\bpay to the order of ([a-z][a-z.'-]*) ([a-z][a-z.'-]*)"
);
pattern!(
    STREET_ADDRESS,
    r"\b\d{1,5} [a-z]+(?: [a-z]+)? (?:street|road|avenue|lane|drive|blvd|place|court|cir|ave|rd|st|dr|ln|pl|ct)\.? ?, ?[a-z]+(?: [a-z]+)? ?, ?[a-z]{2} ?\d{5}\b"
);
pattern!(INTEREST, r"\binterest\b|\b\d{1,2}(?:\.\d{1,2})? ?%");
pattern!(SLASH_DATE, r"\b(\d{1,2})/(\d{1,2})/(\d{4})\b");
pattern!(
    PRECEDENCE_CLAUSE,
    r"words prevail over numbers|handwritten terms prevail over printed terms|typewritten terms prevail over printed terms"
);
pattern!(INCOMPLETE, r"_{3,}|\bblank\b|\bmissing\b");
pattern!(
    JOINT_SIGNERS,
    r"\b(?:makers?|acceptors?|drawers?|indorsers?|endorsers?)(?: ?(?:and|,) ?(?:makers?|acceptors?|drawers?|indorsers?|endorsers?))+\b|\bjointly and severally\b"
);
pattern!(OTHER_AGREEMENT, r"\b(?:separate|other) agreements?\b");
pattern!(YEAR, r"\b(1[89]\d{2}|2\d{3})\b");
pattern!(RIGHT_TO_DEFEND, r"\bnotice of (?:the )?right to defend\b|\bvouch(?:ed)? in\b");

// Bill field extraction runs over case-preserved source lines.
pattern!(
    BILL_NUMBER,
    r"(?i)(?:account number|account no|invoice number|bill no|reference no)\.?[:\s#]*([\w-]+)"
);
pattern!(
    TOTAL_AMOUNT,
    r"(?i)(?:total amount|amount due|balance due)[:\s]*[$€£¥]?\s*([\d.,]+)"
);
pattern!(
    CURRENCY,
    r"(?i)(?:total amount|amount due|balance due)[:\s]*([$€£¥])"
);
pattern!(CUSTOMER_NAME, r"(?i)(?:customer name|client name|name)[:\s]*(.+)");
pattern!(
    REMITTANCE_COUPON,
    r"(?i)remittance coupon|payment stub|please detach|return with payment|please return bottom portion with your payment"
);

// Coupon detection.
pattern!(
    COUPON_KEYWORD,
    r"\b(?:coupon|voucher|discount|promo code|rebate|certificate|interest payment|dividend)\b"
);
pattern!(
    FINANCIAL_CONTEXT,
    r"\b(?:bond|note|security|interest|dividend|payable|bearer|order|amount)\b"
);
pattern!(BENEFIT_CONTEXT, r"\b(?:food|benefit|assistance)");
pattern!(
    BENEFIT_PROGRAM,
    r"\b(?:food stamps?|ebt|government benefits?|assistance programs?)\b"
);
pattern!(PROMOTIONAL, r"\b(?:discount|promo code|rebate)\b");
