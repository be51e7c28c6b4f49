use std::fmt;

use serde::{Deserialize, Serialize};

use crate::RebuttalConfig;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatoryBlock {
    pub signatory_name: String,
    pub capacity: String,
    pub jurisdiction: String,
    pub reservation: String,
    pub rights_reserved: String,
}

impl SignatoryBlock {
    pub fn new(name: &str, jurisdiction: Option<&str>, config: &RebuttalConfig) -> Self {
        Self {
            signatory_name: name.to_string(),
            capacity: config.capacity.clone(),
            jurisdiction: jurisdiction.unwrap_or(config.default_jurisdiction.as_str()).to_string(),
            reservation: config.reservation.clone(),
            rights_reserved: config.rights_reserved.clone(),
        }
    }
}

impl fmt::Display for SignatoryBlock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Signed: {}", self.signatory_name)?;
        writeln!(f, "Capacity: {}", self.capacity)?;
        writeln!(f, "Jurisdiction: {}", self.jurisdiction)?;
        writeln!(f, "{}", self.reservation)?;
        write!(f, "{}", self.rights_reserved)
    }
}
