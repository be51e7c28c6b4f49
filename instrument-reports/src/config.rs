use serde::{Deserialize, Serialize};

/// Fixed wording used by generated rebuttals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RebuttalConfig {
    /// Lineage author when no signatory is named.
    pub default_author: String,
    pub capacity: String,
    /// Used when the caller names no jurisdiction.
    pub default_jurisdiction: String,
    pub reservation: String,
    pub rights_reserved: String,
    /// Authority recorded in the semantic lineage.
    pub authority: String,
}

impl Default for RebuttalConfig {
    fn default() -> Self {
        Self {
            default_author: "Principal Author".to_string(),
            capacity: "Principal Author".to_string(),
            default_jurisdiction: "Common Law".to_string(),
            reservation: "WITHOUT PREJUDICE UCC 1-207".to_string(),
            rights_reserved: "All Rights Reserved".to_string(),
            authority: "UCC 1-207; UCC 1-308".to_string(),
        }
    }
}

impl RebuttalConfig {
    pub fn with_authority(mut self, authority: impl Into<String>) -> Self {
        self.authority = authority.into();
        self
    }

    pub fn with_reservation(mut self, reservation: impl Into<String>) -> Self {
        self.reservation = reservation.into();
        self
    }
}
