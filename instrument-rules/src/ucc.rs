//! UCC Article 3 negotiability checklist.
//!
//! Each predicate is a keyword heuristic, not legal analysis: it answers
//! whether the text *shows* the formal element, which is what an annotator
//! needs to flag for review.

use crate::annotator::find_contradictions;
use crate::patterns::*;
use crate::rule::{Rule, RuleEvaluationError, RuleInput};

type RuleOutcome = Result<bool, RuleEvaluationError>;

/// The canonical rule table, in evaluation order.
pub static UCC_ARTICLE_3: &[Rule] = &[
    Rule {
        id: "IsNegotiable",
        label: "Is Negotiable Instrument",
        citation: "UCC § 3-104",
        remedy_hint: "The instrument must be negotiable.",
        predicate: is_negotiable,
    },
    Rule {
        id: "PromiseOrOrder",
        label: "Contains a Promise or Order",
        citation: "UCC § 3-104(a)",
        remedy_hint: "The instrument must contain an unconditional promise or order to pay.",
        predicate: promise_or_order,
    },
    Rule {
        id: "UnconditionalPromiseOrOrder",
        label: "Unconditional Promise or Order",
        citation: "UCC § 3-106",
        remedy_hint: "The promise or order must be unconditional.",
        predicate: unconditional,
    },
    Rule {
        id: "PayableOnDemandOrAtDefiniteTime",
        label: "Payable on Demand or at Definite Time",
        citation: "UCC § 3-108",
        remedy_hint: "The instrument must be payable on demand or at a definite time.",
        predicate: payable_on_demand_or_definite_time,
    },
    Rule {
        id: "PayableToBearerOrToOrder",
        label: "Payable to Bearer or to Order",
        citation: "UCC § 3-109",
        remedy_hint: "The instrument must be payable to bearer or to order.",
        predicate: payable_to_bearer_or_order,
    },
    Rule {
        id: "IdentificationOfPersonToWhomInstrumentIsPayable",
        label: "Identification of Person to Whom Instrument is Payable",
        citation: "UCC § 3-110",
        remedy_hint: "The person to whom the instrument is payable must be identified with reasonable certainty.",
        predicate: payee_identified,
    },
    Rule {
        id: "PlaceOfPayment",
        label: "Place of Payment",
        citation: "UCC § 3-111",
        remedy_hint: "The instrument may indicate a place of payment.",
        predicate: place_of_payment,
    },
    Rule {
        id: "Interest",
        label: "Interest",
        citation: "UCC § 3-112",
        remedy_hint: "The instrument may provide for interest.",
        predicate: interest,
    },
    Rule {
        id: "DateOfInstrument",
        label: "Date of Instrument",
        citation: "UCC § 3-113",
        remedy_hint: "The instrument may be antedated or postdated.",
        predicate: date_of_instrument,
    },
    Rule {
        id: "ContradictoryTermsOfInstrument",
        label: "Contradictory Terms of Instrument",
        citation: "UCC § 3-114",
        remedy_hint: "If an instrument contains contradictory terms, words prevail over numbers, handwritten terms prevail over printed terms, and typewritten terms prevail over both.",
        predicate: no_contradictory_terms,
    },
    Rule {
        id: "IncompleteInstrument",
        label: "Incomplete Instrument",
        citation: "UCC § 3-115",
        remedy_hint: "An incomplete instrument that is later completed in an unauthorized manner is enforceable as completed.",
        predicate: complete_instrument,
    },
    Rule {
        id: "JointAndSeveralLiability",
        label: "Joint and Several Liability",
        citation: "UCC § 3-116",
        remedy_hint: "Two or more persons who sign an instrument as maker, acceptor, or drawer, or indorser are jointly and severally liable.",
        predicate: joint_and_several,
    },
    Rule {
        id: "OtherAgreementsAffectingInstrument",
        label: "Other Agreements Affecting Instrument",
        citation: "UCC § 3-117",
        remedy_hint: "The obligation of a party to an instrument may be modified, supplemented, or nullified by a separate agreement.",
        predicate: other_agreements,
    },
    Rule {
        id: "StatuteOfLimitations",
        label: "Statute of Limitations",
        citation: "UCC § 3-118",
        remedy_hint: "An action to enforce the obligation of a party to a note payable at a definite time must be commenced within 6 years after the due date or dates stated in the note or, if a due date is not stated, within 6 years after the date of the instrument.",
        predicate: within_limitations,
    },
    Rule {
        id: "NoticeOfRightToDefendAction",
        label: "Notice of Right to Defend Action",
        citation: "UCC § 3-119",
        remedy_hint: "A person who is sued for an obligation for which another party is answerable over may give notice of the litigation to the other party.",
        predicate: notice_of_right_to_defend,
    },
];

/// "negotiable" that is not negated ("non-negotiable", "not negotiable").
fn is_negotiable(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(NEGOTIABLE
        .captures_iter(input.text.as_str())
        .any(|caps| caps.get(1).is_none()))
}

fn promise_or_order(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(PROMISE_OR_ORDER.is_match(input.text.as_str()))
}

fn unconditional(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(!CONDITIONAL.is_match(input.text.as_str()))
}

fn payable_on_demand_or_definite_time(input: &RuleInput<'_>) -> RuleOutcome {
    let text = input.text.as_str();
    Ok(DEMAND_OR_SIGHT.is_match(text) || SLASH_DATE.is_match(text))
}

fn payable_to_bearer_or_order(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(BEARER_OR_ORDER.is_match(input.text.as_str()))
}

/// A two-word payee after "pay to the order of", other than bearer/cash.
fn payee_identified(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(NAMED_PAYEE
        .captures_iter(input.text.as_str())
        .any(|caps| !matches!(&caps[1], "bearer" | "cash")))
}

fn place_of_payment(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(STREET_ADDRESS.is_match(input.text.as_str()))
}

fn interest(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(INTEREST.is_match(input.text.as_str()))
}

/// Passes when at least one `mm/dd/yyyy` date is a real calendar date. A
/// document whose only date-shaped tokens are impossible dates cannot be
/// decided.
fn date_of_instrument(input: &RuleInput<'_>) -> RuleOutcome {
    let mut malformed = None;

    for caps in SLASH_DATE.captures_iter(input.text.as_str()) {
        let month: u32 = caps[1].parse().unwrap_or(0);
        let day: u32 = caps[2].parse().unwrap_or(0);
        let year: i32 = caps[3].parse().unwrap_or(0);
        if is_calendar_date(year, month, day) {
            return Ok(true);
        }
        if malformed.is_none() {
            malformed = Some(caps[0].to_string());
        }
    }

    match malformed {
        Some(token) => Err(RuleEvaluationError::MalformedDate(token)),
        None => Ok(false),
    }
}

/// Fails on explicit contradiction markers (VOID, FRAUD, ...) and on
/// precedence language that only appears when terms conflict.
fn no_contradictory_terms(input: &RuleInput<'_>) -> RuleOutcome {
    if !find_contradictions(input.text, &crate::CONTRADICTION_KEYWORDS).is_empty() {
        return Ok(false);
    }
    Ok(!PRECEDENCE_CLAUSE.is_match(input.text.as_str()))
}

fn complete_instrument(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(!INCOMPLETE.is_match(input.text.as_str()))
}

fn joint_and_several(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(JOINT_SIGNERS.is_match(input.text.as_str()))
}

fn other_agreements(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(OTHER_AGREEMENT.is_match(input.text.as_str()))
}

/// Uses the most recent year mentioned. No year at all is treated as within
/// limits; a year without a reference year to compare against is undecidable.
fn within_limitations(input: &RuleInput<'_>) -> RuleOutcome {
    let latest = YEAR
        .captures_iter(input.text.as_str())
        .filter_map(|caps| caps[1].parse::<i32>().ok())
        .max();

    let Some(latest) = latest else {
        return Ok(true);
    };
    let reference = input
        .reference_year
        .ok_or(RuleEvaluationError::MissingReference("reference year"))?;

    let elapsed = reference.checked_sub(latest).ok_or_else(|| {
        RuleEvaluationError::Undetermined(format!("reference year {reference} out of range"))
    })?;
    Ok(elapsed <= input.limitation_years)
}

fn notice_of_right_to_defend(input: &RuleInput<'_>) -> RuleOutcome {
    Ok(RIGHT_TO_DEFEND.is_match(input.text.as_str()))
}

fn is_calendar_date(year: i32, month: u32, day: u32) -> bool {
    let days_in_month = match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if (year % 4 == 0 && year % 100 != 0) || year % 400 == 0 => 29,
        2 => 28,
        _ => return false,
    };
    (1..=days_in_month).contains(&day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use instrument_text::NormalizedText;

    fn run(predicate: crate::Predicate, text: &str, reference_year: Option<i32>) -> RuleOutcome {
        let text = NormalizedText::from_text(text);
        predicate(&RuleInput {
            text: &text,
            reference_year,
            limitation_years: 6,
        })
    }

    #[test]
    fn rule_ids_are_unique() {
        let mut ids: Vec<_> = UCC_ARTICLE_3.iter().map(|r| r.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), UCC_ARTICLE_3.len());
        assert_eq!(UCC_ARTICLE_3.len(), 15);
    }

    #[test]
    fn negated_negotiable_does_not_count() {
        assert_eq!(run(is_negotiable, "This is a negotiable note", None), Ok(true));
        assert_eq!(run(is_negotiable, "NON-NEGOTIABLE copy", None), Ok(false));
        assert_eq!(run(is_negotiable, "this bill is not negotiable", None), Ok(false));
    }

    #[test]
    fn conditional_language_fails_unconditional() {
        assert_eq!(run(unconditional, "Payable subject to the loan agreement", None), Ok(false));
        assert_eq!(run(unconditional, "I promise to pay", None), Ok(true));
    }

    #[test]
    fn payee_excludes_bearer() {
        assert_eq!(run(payee_identified, "Pay to the order of Jane Doe", None), Ok(true));
        assert_eq!(run(payee_identified, "Pay to the order of bearer on demand", None), Ok(false));
    }

    #[test]
    fn street_address_detected() {
        let text = "Payable at 123 Main Street, Springfield, IL 62701";
        assert_eq!(run(place_of_payment, text, None), Ok(true));
        assert_eq!(run(place_of_payment, "Payable at the bank", None), Ok(false));
    }

    #[test]
    fn interest_by_word_or_rate() {
        assert_eq!(run(interest, "with interest", None), Ok(true));
        assert_eq!(run(interest, "at 5.25% per annum", None), Ok(true));
        assert_eq!(run(interest, "no charges", None), Ok(false));
    }

    #[test]
    fn malformed_date_is_undecidable() {
        assert_eq!(run(date_of_instrument, "Dated 02/29/2024", None), Ok(true));
        assert_eq!(
            run(date_of_instrument, "Dated 13/45/2020", None),
            Err(RuleEvaluationError::MalformedDate("13/45/2020".into()))
        );
        assert_eq!(run(date_of_instrument, "Dated 13/45/2020 or 01/02/2020", None), Ok(true));
        assert_eq!(run(date_of_instrument, "undated", None), Ok(false));
    }

    #[test]
    fn limitations_uses_reference_year() {
        assert_eq!(run(within_limitations, "Issued 2021", Some(2025)), Ok(true));
        assert_eq!(run(within_limitations, "Issued 2010", Some(2025)), Ok(false));
        assert_eq!(run(within_limitations, "Issued 2010, renewed 2022", Some(2025)), Ok(true));
        assert_eq!(run(within_limitations, "no year here", None), Ok(true));
        assert_eq!(
            run(within_limitations, "Issued 2010", None),
            Err(RuleEvaluationError::MissingReference("reference year"))
        );
    }

    #[test]
    fn joint_signers() {
        assert_eq!(run(joint_and_several, "signed by maker and drawer", None), Ok(true));
        assert_eq!(run(joint_and_several, "Makers jointly and severally promise", None), Ok(true));
        assert_eq!(run(joint_and_several, "signed by maker", None), Ok(false));
    }

    #[test]
    fn contradiction_keywords_fail_contradictory_terms() {
        assert_eq!(run(no_contradictory_terms, "THIS CHECK IS VOID", None), Ok(false));
        assert_eq!(run(no_contradictory_terms, "Words prevail over numbers", None), Ok(false));
        assert_eq!(run(no_contradictory_terms, "Pay to bearer", None), Ok(true));
    }
}
