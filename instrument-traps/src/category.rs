//! Trap categories and the reference catalogue describing them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TrapClass;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrapCategory {
    IdentityFraming,
    InstitutionalAuthority,
    ObligationImposition,
    JurisdictionPresumption,
    ConsentPresumption,
    RightsWaiver,
}

impl TrapCategory {
    pub const ALL: [TrapCategory; 6] = [
        TrapCategory::IdentityFraming,
        TrapCategory::InstitutionalAuthority,
        TrapCategory::ObligationImposition,
        TrapCategory::JurisdictionPresumption,
        TrapCategory::ConsentPresumption,
        TrapCategory::RightsWaiver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TrapCategory::IdentityFraming => "identity_framing",
            TrapCategory::InstitutionalAuthority => "institutional_authority",
            TrapCategory::ObligationImposition => "obligation_imposition",
            TrapCategory::JurisdictionPresumption => "jurisdiction_presumption",
            TrapCategory::ConsentPresumption => "consent_presumption",
            TrapCategory::RightsWaiver => "rights_waiver",
        }
    }

    pub fn class(&self) -> TrapClass {
        match self {
            TrapCategory::IdentityFraming | TrapCategory::InstitutionalAuthority => {
                TrapClass::Framing
            }
            _ => TrapClass::Trap,
        }
    }

    /// Heading used for the rebuttal section of this category.
    pub fn title(&self) -> &'static str {
        match self {
            TrapCategory::IdentityFraming => "Rebuttal of Identity Framing",
            TrapCategory::InstitutionalAuthority => "Rebuttal of Asserted Authority",
            TrapCategory::ObligationImposition => "Rebuttal of Imposed Obligations",
            TrapCategory::JurisdictionPresumption => "Rebuttal of Jurisdictional Presumptions",
            TrapCategory::ConsentPresumption => "Rebuttal of Implied Consent",
            TrapCategory::RightsWaiver => "Rebuttal of Rights Waivers",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            TrapCategory::IdentityFraming => {
                "Institutional constructs that create legal fiction identity"
            }
            TrapCategory::InstitutionalAuthority => {
                "Assertions of institutional authority presented as settled fact"
            }
            TrapCategory::ObligationImposition => {
                "Language that imposes obligations without consent"
            }
            TrapCategory::JurisdictionPresumption => {
                "Presumption of government jurisdiction over sovereign individuals"
            }
            TrapCategory::ConsentPresumption => "Implied consent through adhesion contracts",
            TrapCategory::RightsWaiver => "Clauses that surrender rights or remedies in advance",
        }
    }

    /// Section body template. `{terms}` is replaced by the distinct matched
    /// terms and `{count}` by the number of hits.
    pub fn rebuttal_template(&self) -> &'static str {
        match self {
            TrapCategory::IdentityFraming => {
                "The document applies {count} identity construct(s): {terms}. Each is rebutted; no presumption of status attaches without express agreement."
            }
            TrapCategory::InstitutionalAuthority => {
                "The document asserts authority {count} time(s): {terms}. The authority claimed must be shown, not presumed."
            }
            TrapCategory::ObligationImposition => {
                "The document imposes {count} obligation(s) without consent: {terms}. Proof of a knowing agreement to each obligation is required."
            }
            TrapCategory::JurisdictionPresumption => {
                "The document presumes jurisdiction {count} time(s): {terms}. Jurisdiction is challenged and must be proven on the record."
            }
            TrapCategory::ConsentPresumption => {
                "The document implies consent {count} time(s): {terms}. All implied consent and adhesion terms are expressly rebutted."
            }
            TrapCategory::RightsWaiver => {
                "The document seeks {count} waiver(s) of rights: {terms}. No right or remedy is waived; all are reserved."
            }
        }
    }

    /// Reference entry for this category.
    pub fn profile(&self) -> CategoryProfile {
        let (example_terms, common_contexts, rebuttal_strategy): (&[&str], &[&str], &str) =
            match self {
                TrapCategory::IdentityFraming => (
                    &["person", "citizen", "resident", "taxpayer"],
                    &["government forms", "legal documents", "financial applications"],
                    "Declare living man/woman status and state national jurisdiction",
                ),
                TrapCategory::InstitutionalAuthority => (
                    &["by the authority of", "pursuant to", "official notice"],
                    &["agency letters", "collection notices", "administrative orders"],
                    "Demand the source and scope of the authority asserted",
                ),
                TrapCategory::ObligationImposition => (
                    &["liable", "responsible", "must", "required"],
                    &["tax notices", "regulatory compliance", "legal demands"],
                    "Rebut presumptions and require proof of consent",
                ),
                TrapCategory::JurisdictionPresumption => (
                    &["subject to", "jurisdiction"],
                    &["court documents", "administrative notices", "legal proceedings"],
                    "Declare proper jurisdiction and challenge authority",
                ),
                TrapCategory::ConsentPresumption => (
                    &["by using", "you agree", "acceptance of", "deemed to have consented"],
                    &["terms of service", "software agreements", "regulatory filings"],
                    "Explicitly rebut all implied consent and adhesion contracts",
                ),
                TrapCategory::RightsWaiver => (
                    &["waiver of rights", "binding arbitration"],
                    &["consumer contracts", "account agreements", "enrollment forms"],
                    "Reserve all rights and refuse any waiver not separately negotiated",
                ),
            };

        CategoryProfile {
            category: *self,
            description: self.description().to_string(),
            example_terms: example_terms.iter().map(|s| s.to_string()).collect(),
            common_contexts: common_contexts.iter().map(|s| s.to_string()).collect(),
            rebuttal_strategy: rebuttal_strategy.to_string(),
        }
    }
}

impl fmt::Display for TrapCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reference description of a trap category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryProfile {
    pub category: TrapCategory,
    pub description: String,
    pub example_terms: Vec<String>,
    pub common_contexts: Vec<String>,
    pub rebuttal_strategy: String,
}

/// Catalogue of every category, in [`TrapCategory::ALL`] order.
pub fn common_trap_patterns() -> Vec<CategoryProfile> {
    TrapCategory::ALL.iter().map(TrapCategory::profile).collect()
}
