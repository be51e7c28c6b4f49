//! Negotiability analysis for instrument-text.
//!
//! ## Rule Evaluation
//!
//! - [`Rule`] - a named, independent predicate over normalized text with a
//!   citation and remedy hint
//! - [`UCC_ARTICLE_3`] - the canonical rule table, in evaluation order
//! - [`NegotiabilityEvaluator`] - runs any rule table and fails closed on
//!   rules that cannot decide
//!
//! ## Instrument Annotation
//!
//! - [`InstrumentAnnotator`] - contradiction keywords (VOID, FRAUD, ...) and
//!   structured bill headers (TO / FROM / AMOUNT DUE)
//! - [`BillFields`] - account number, amount, currency, customer name and
//!   remittance coupon block
//! - [`identify_coupons`] / [`COUPON_RULES`] - coupon detection and
//!   classification
//!
//! ## Example
//!
//! ```
//! use instrument_rules::NegotiabilityEvaluator;
//!
//! let evaluation = NegotiabilityEvaluator::new()
//!     .evaluate("I promise to pay to the order of John Smith on demand.");
//! assert_eq!(evaluation.results.len(), instrument_rules::UCC_ARTICLE_3.len());
//! assert!(!evaluation.is_fully_negotiable());
//! ```

mod annotator;
mod bill_fields;
mod coupon;
mod evaluator;
mod patterns;
mod rule;
mod ucc;

pub use annotator::{
    Annotation, BillHeader, ContradictionCheck, InstrumentAnnotator, CONTRADICTION_KEYWORDS,
};
pub use bill_fields::BillFields;
pub use coupon::{
    classify_coupon, identify_coupons, Coupon, CouponFinding, CouponRule, CouponType,
    COUPON_RULES,
};
pub use evaluator::{Evaluation, EvaluatorConfig, NegotiabilityEvaluator};
pub use rule::{
    EvaluationResult, Predicate, Rule, RuleEvaluationError, RuleInput, UNDETERMINED_REMEDY,
};
pub use ucc::UCC_ARTICLE_3;
