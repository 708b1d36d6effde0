//! Principal kind: the role discriminator carried in session tokens.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which login surface and token namespace a principal belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "principal_kind", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum PrincipalKind {
    /// Company administrator.
    Admin,
    /// Contractor (foreman is a capability, not a separate kind).
    Contractor,
}

impl PrincipalKind {
    /// Return the kind as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Contractor => "contractor",
        }
    }
}

impl fmt::Display for PrincipalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PrincipalKind {
    type Err = jobsite_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "contractor" => Ok(Self::Contractor),
            _ => Err(jobsite_core::AppError::validation(format!(
                "Invalid auth type: '{s}'. Expected one of: admin, contractor"
            ))),
        }
    }
}
