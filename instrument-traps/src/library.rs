//! Trap pattern library.
//!
//! A library is an ordered list of compiled patterns. The built-in library is
//! compiled once per process; custom libraries are loaded from RON lists of
//! [`TrapPatternSpec`] and may sit alongside it. Patterns that fail to compile
//! are dropped with a warning so a single bad entry never disables a scan.

use std::path::Path;

use instrument_text::MatchSpan;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::{ConfigError, ConfigResult, PatternMatchError};
use crate::{Severity, TrapCategory};

/// Serializable description of a pattern, as stored in RON libraries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapPatternSpec {
    pub category: TrapCategory,
    pub trap_type: String,
    pub severity: Severity,
    /// Regex matched case-insensitively against normalized text.
    pub pattern: String,
    pub description: String,
    /// Rebuttal sentence; `{term}` is replaced by the matched text.
    pub rebuttal_template: String,
}

/// A compiled pattern.
#[derive(Debug, Clone)]
pub struct TrapPattern {
    pub category: TrapCategory,
    pub trap_type: String,
    pub severity: Severity,
    pub description: String,
    pub rebuttal_template: String,
    matcher: Regex,
}

impl TrapPattern {
    pub fn compile(spec: TrapPatternSpec) -> Result<Self, PatternMatchError> {
        if spec.pattern.trim().is_empty() {
            return Err(PatternMatchError::EmptyPattern {
                trap_type: spec.trap_type,
            });
        }

        let matcher = match RegexBuilder::new(&spec.pattern).case_insensitive(true).build() {
            Ok(matcher) => matcher,
            Err(source) => {
                return Err(PatternMatchError::InvalidRegex {
                    trap_type: spec.trap_type,
                    source,
                })
            }
        };

        Ok(Self {
            category: spec.category,
            trap_type: spec.trap_type,
            severity: spec.severity,
            description: spec.description,
            rebuttal_template: spec.rebuttal_template,
            matcher,
        })
    }

    /// Every non-empty occurrence in `text`, in order.
    pub fn find(&self, text: &str) -> Vec<MatchSpan> {
        self.matcher
            .find_iter(text)
            .filter(|m| !m.as_str().is_empty())
            .map(|m| MatchSpan::new(m.start(), m.end()))
            .collect()
    }

    /// Description followed by the template filled with `term`.
    pub fn rebuttal_for(&self, term: &str) -> String {
        format!(
            "{} {}",
            self.description,
            self.rebuttal_template.replace("{term}", term)
        )
    }

    pub fn pattern(&self) -> &str {
        self.matcher.as_str()
    }
}

/// An ordered set of compiled patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternLibrary {
    patterns: Vec<TrapPattern>,
}

static BUILTIN: Lazy<PatternLibrary> = Lazy::new(|| PatternLibrary::from_specs(builtin_specs()));

impl PatternLibrary {
    /// The library shipped with the crate.
    pub fn builtin() -> &'static PatternLibrary {
        &BUILTIN
    }

    /// Compile `specs`, skipping (and logging) any that are malformed.
    pub fn from_specs(specs: impl IntoIterator<Item = TrapPatternSpec>) -> Self {
        let patterns = specs
            .into_iter()
            .filter_map(|spec| match TrapPattern::compile(spec) {
                Ok(pattern) => Some(pattern),
                Err(error) => {
                    warn!(%error, "skipping malformed trap pattern");
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    /// Parse a RON list of [`TrapPatternSpec`].
    pub fn from_ron_str(s: &str) -> ConfigResult<Self> {
        let specs: Vec<TrapPatternSpec> = ron::from_str(s)?;
        Ok(Self::from_specs(specs))
    }

    pub fn from_path(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&contents)
    }

    /// This library followed by the patterns of `other`.
    pub fn merged_with(&self, other: &PatternLibrary) -> Self {
        let mut patterns = self.patterns.clone();
        patterns.extend(other.patterns.iter().cloned());
        Self { patterns }
    }

    pub fn patterns(&self) -> &[TrapPattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

struct Builtin {
    category: TrapCategory,
    trap_type: &'static str,
    severity: Severity,
    pattern: &'static str,
    description: &'static str,
    rebuttal_template: &'static str,
}

const BUILTIN_PATTERNS: &[Builtin] = &[
    // identity framing
    Builtin {
        category: TrapCategory::IdentityFraming,
        trap_type: "person",
        severity: Severity::Medium,
        pattern: r"\bpersons?\b",
        description: "Frames the reader as a 'person', a statutory legal construct.",
        rebuttal_template: "I rebut the presumption that I am the '{term}' described.",
    },
    Builtin {
        category: TrapCategory::IdentityFraming,
        trap_type: "citizen",
        severity: Severity::High,
        pattern: r"\bcitizens?\b",
        description: "Presumes a citizenship status that carries statutory obligations.",
        rebuttal_template: "I do not accept the status of '{term}' as assigned.",
    },
    Builtin {
        category: TrapCategory::IdentityFraming,
        trap_type: "resident",
        severity: Severity::Medium,
        pattern: r"\bresidents?\b",
        description: "Presumes residency within a taxing or regulatory territory.",
        rebuttal_template: "I rebut the presumption of being a '{term}'.",
    },
    Builtin {
        category: TrapCategory::IdentityFraming,
        trap_type: "taxpayer",
        severity: Severity::Medium,
        pattern: r"\btax ?payers?\b",
        description: "Assigns a taxpayer role before any liability is shown.",
        rebuttal_template: "The label '{term}' is rejected until liability is proven.",
    },
    // institutional authority
    Builtin {
        category: TrapCategory::InstitutionalAuthority,
        trap_type: "by_authority_of",
        severity: Severity::Medium,
        pattern: r"\bby (?:the )?authority of\b",
        description: "Invokes institutional authority without showing its source.",
        rebuttal_template: "The authority claimed by '{term}' is not conceded.",
    },
    Builtin {
        category: TrapCategory::InstitutionalAuthority,
        trap_type: "pursuant_to",
        severity: Severity::Low,
        pattern: r"\bpursuant to\b",
        description: "Cites a statute or rule as if it already binds the reader.",
        rebuttal_template: "Applicability of anything '{term}' is disputed.",
    },
    Builtin {
        category: TrapCategory::InstitutionalAuthority,
        trap_type: "official_notice",
        severity: Severity::Low,
        pattern: r"\bofficial notice\b",
        description: "Presents a private communication as an official act.",
        rebuttal_template: "The designation '{term}' confers no authority.",
    },
    // obligation imposition
    Builtin {
        category: TrapCategory::ObligationImposition,
        trap_type: "liable",
        severity: Severity::Medium,
        pattern: r"\bliable\b",
        description: "Asserts liability without establishing consent.",
        rebuttal_template: "I am not '{term}' absent proof of a knowing agreement.",
    },
    Builtin {
        category: TrapCategory::ObligationImposition,
        trap_type: "responsible",
        severity: Severity::Medium,
        pattern: r"\bresponsible\b",
        description: "Assigns responsibility without establishing consent.",
        rebuttal_template: "I rebut the claim that I am '{term}'.",
    },
    Builtin {
        category: TrapCategory::ObligationImposition,
        trap_type: "must",
        severity: Severity::Low,
        pattern: r"\bmust\b",
        description: "Commands performance as though an obligation already exists.",
        rebuttal_template: "No duty expressed by '{term}' is accepted.",
    },
    Builtin {
        category: TrapCategory::ObligationImposition,
        trap_type: "required",
        severity: Severity::Low,
        pattern: r"\brequired\b",
        description: "States a requirement without identifying its source.",
        rebuttal_template: "What is '{term}' must be shown to apply.",
    },
    // jurisdiction presumption
    Builtin {
        category: TrapCategory::JurisdictionPresumption,
        trap_type: "subject_to",
        severity: Severity::High,
        pattern: r"\bsubject to\b",
        description: "Presumes the reader is subject to an external authority.",
        rebuttal_template: "I am not '{term}' any jurisdiction I have not accepted.",
    },
    Builtin {
        category: TrapCategory::JurisdictionPresumption,
        trap_type: "jurisdiction",
        severity: Severity::Medium,
        pattern: r"\bjurisdictions?\b",
        description: "Asserts jurisdiction without proof on the record.",
        rebuttal_template: "The '{term}' asserted is challenged.",
    },
    // consent presumption
    Builtin {
        category: TrapCategory::ConsentPresumption,
        trap_type: "by_using",
        severity: Severity::High,
        pattern: r"\bby using\b",
        description: "Infers consent from conduct.",
        rebuttal_template: "Conduct described as '{term}' is not consent.",
    },
    Builtin {
        category: TrapCategory::ConsentPresumption,
        trap_type: "you_agree",
        severity: Severity::High,
        pattern: r"\byou (?:hereby )?agree\b",
        description: "Declares agreement on the reader's behalf.",
        rebuttal_template: "The statement '{term}' is rebutted; no agreement was given.",
    },
    Builtin {
        category: TrapCategory::ConsentPresumption,
        trap_type: "acceptance_of",
        severity: Severity::Medium,
        pattern: r"\bacceptance of\b",
        description: "Treats receipt or use as acceptance of terms.",
        rebuttal_template: "There is no '{term}' the terms offered.",
    },
    Builtin {
        category: TrapCategory::ConsentPresumption,
        trap_type: "deemed_consent",
        severity: Severity::High,
        pattern: r"\bdeemed to have (?:consented|accepted|agreed)\b",
        description: "Deems consent by fiction rather than by act.",
        rebuttal_template: "Being '{term}' is not consent and is rebutted.",
    },
    // rights waiver
    Builtin {
        category: TrapCategory::RightsWaiver,
        trap_type: "waiver_of_rights",
        severity: Severity::High,
        pattern: r"\bwaiv(?:e|es|ed|er) (?:of )?(?:any |all |your )?(?:rights?|claims?)\b",
        description: "Seeks a waiver of rights in advance.",
        rebuttal_template: "No '{term}' is given; all rights are reserved.",
    },
    Builtin {
        category: TrapCategory::RightsWaiver,
        trap_type: "mandatory_arbitration",
        severity: Severity::High,
        pattern: r"\b(?:binding|mandatory) arbitration\b",
        description: "Removes disputes from the courts by pre-agreement.",
        rebuttal_template: "'{term}' is not agreed; access to the courts is reserved.",
    },
];

/// Specs of the built-in library, e.g. as a starting point for a custom
/// RON library.
pub fn builtin_specs() -> Vec<TrapPatternSpec> {
    BUILTIN_PATTERNS
        .iter()
        .map(|b| TrapPatternSpec {
            category: b.category,
            trap_type: b.trap_type.to_string(),
            severity: b.severity,
            pattern: b.pattern.to_string(),
            description: b.description.to_string(),
            rebuttal_template: b.rebuttal_template.to_string(),
        })
        .collect()
}
