//! Coupon detection and classification.

use instrument_text::{context_window, MatchSpan, NormalizedText};
use serde::{Deserialize, Serialize};

use crate::patterns::{
    BENEFIT_CONTEXT, BENEFIT_PROGRAM, COUPON_KEYWORD, FINANCIAL_CONTEXT, PROMOTIONAL,
};

/// Characters of context kept on each side of a coupon keyword.
const SNIPPET_RADIUS: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CouponType {
    Financial,
    Benefit,
    General,
}

/// A coupon-like passage found in a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Coupon {
    pub keyword: String,
    pub coupon_type: CouponType,
    pub snippet: String,
    pub span: MatchSpan,
}

/// A classification rule for coupons. Same shape as [`crate::Rule`], but the
/// predicate looks at one coupon instead of a whole document.
#[derive(Debug, Clone, Copy)]
pub struct CouponRule {
    pub id: &'static str,
    pub label: &'static str,
    pub citation: &'static str,
    pub remedy_hint: &'static str,
    pub test: fn(&Coupon) -> bool,
}

/// A coupon rule that matched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CouponFinding {
    pub rule_id: String,
    pub label: String,
    pub citation: String,
    pub remedy_hint: String,
}

pub static COUPON_RULES: &[CouponRule] = &[
    CouponRule {
        id: "UCCNegotiableCoupon",
        label: "UCC Negotiable Coupon",
        citation: "UCC Article 3",
        remedy_hint: "This coupon may be a negotiable instrument under UCC Article 3. Ensure proper handling and endorsement.",
        test: is_negotiable_coupon,
    },
    CouponRule {
        id: "USCFoodBenefitCoupon",
        label: "USC/CFR Food/Benefit Coupon",
        citation: "42 U.S.C. § 1786(m)(10)(A), 7 CFR § 271.5",
        remedy_hint: "This coupon may be subject to federal regulations regarding benefit transfers. Verify compliance with relevant laws (e.g., anti-counterfeiting, misuse).",
        test: is_benefit_coupon,
    },
    CouponRule {
        id: "GeneralPromotionalCoupon",
        label: "General Promotional Coupon",
        citation: "N/A",
        remedy_hint: "This is a general promotional coupon. Review terms and conditions for validity and usage.",
        test: is_promotional_coupon,
    },
];

/// Every coupon keyword occurrence, typed by the words around it.
pub fn identify_coupons(text: &NormalizedText) -> Vec<Coupon> {
    let body = text.as_str();

    COUPON_KEYWORD
        .find_iter(body)
        .map(|m| {
            let span = MatchSpan::new(m.start(), m.end());
            let anchor = MatchSpan::new(m.start(), m.start());
            let snippet = context_window(body, anchor, SNIPPET_RADIUS, 2 * SNIPPET_RADIUS);
            let coupon_type = if FINANCIAL_CONTEXT.is_match(&snippet) {
                CouponType::Financial
            } else if BENEFIT_CONTEXT.is_match(&snippet) {
                CouponType::Benefit
            } else {
                CouponType::General
            };

            Coupon {
                keyword: m.as_str().to_string(),
                coupon_type,
                snippet,
                span,
            }
        })
        .collect()
}

/// Coupon rules that apply to `coupon`, in table order.
pub fn classify_coupon(coupon: &Coupon) -> Vec<CouponFinding> {
    COUPON_RULES
        .iter()
        .filter(|rule| (rule.test)(coupon))
        .map(|rule| CouponFinding {
            rule_id: rule.id.to_string(),
            label: rule.label.to_string(),
            citation: rule.citation.to_string(),
            remedy_hint: rule.remedy_hint.to_string(),
        })
        .collect()
}

fn is_negotiable_coupon(coupon: &Coupon) -> bool {
    let s = coupon.snippet.as_str();
    coupon.coupon_type == CouponType::Financial
        && (s.contains("unconditional promise") || s.contains("order"))
        && s.contains("fixed amount")
        && s.contains("money")
        && (s.contains("to bearer") || s.contains("to order"))
        && (s.contains("on demand") || s.contains("definite time"))
}

fn is_benefit_coupon(coupon: &Coupon) -> bool {
    coupon.coupon_type == CouponType::Benefit && BENEFIT_PROGRAM.is_match(&coupon.snippet)
}

fn is_promotional_coupon(coupon: &Coupon) -> bool {
    PROMOTIONAL.is_match(&coupon.snippet)
}
