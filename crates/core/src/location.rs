//! Administrative-location value objects.
//!
//! Every account is scoped to a sector inside the province → district →
//! sector → cell → village hierarchy. Tokens carry the scope as a dotted
//! string (`"kigali.gasabo.remera"`); properties carry the finer-grained
//! [`Address`]. The geographic dataset itself is out of scope; these types
//! only hold and validate the strings.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// The sector scope of an account, as encoded in token claims.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AccountPath {
    pub province: String,
    pub district: String,
    pub sector: String,
}

impl AccountPath {
    pub fn new(
        province: impl Into<String>,
        district: impl Into<String>,
        sector: impl Into<String>,
    ) -> DomainResult<Self> {
        let path = Self {
            province: province.into(),
            district: district.into(),
            sector: sector.into(),
        };
        path.validate()?;
        Ok(path)
    }

    fn validate(&self) -> DomainResult<()> {
        if self.province.is_empty() || self.district.is_empty() || self.sector.is_empty() {
            return Err(DomainError::validation("account path segment is empty"));
        }
        Ok(())
    }
}

impl FromStr for AccountPath {
    type Err = DomainError;

    /// Parse the `province.district.sector` form.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut segments = s.split('.');
        let (Some(province), Some(district), Some(sector), None) = (
            segments.next(),
            segments.next(),
            segments.next(),
            segments.next(),
        ) else {
            return Err(DomainError::validation(format!(
                "account path '{s}' is not of the form province.district.sector"
            )));
        };
        Self::new(province, district, sector)
    }
}

impl TryFrom<String> for AccountPath {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<AccountPath> for String {
    fn from(value: AccountPath) -> Self {
        value.to_string()
    }
}

impl core::fmt::Display for AccountPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{}.{}", self.province, self.district, self.sector)
    }
}

/// A property's location within a sector.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
    pub sector: String,
    pub cell: String,
    pub village: String,
}

impl Address {
    pub fn new(
        sector: impl Into<String>,
        cell: impl Into<String>,
        village: impl Into<String>,
    ) -> Self {
        Self {
            sector: sector.into(),
            cell: cell.into(),
            village: village.into(),
        }
    }

    /// All three levels must be present.
    pub fn validate(&self) -> DomainResult<()> {
        if self.sector.is_empty() || self.cell.is_empty() || self.village.is_empty() {
            return Err(DomainError::validation("address is incomplete"));
        }
        Ok(())
    }
}

impl core::fmt::Display for Address {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}, {}, {}", self.sector, self.cell, self.village)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn account_path_parses_dotted_string() {
        let path: AccountPath = "kigali.gasabo.remera".parse().unwrap();
        assert_eq!(path.province, "kigali");
        assert_eq!(path.district, "gasabo");
        assert_eq!(path.sector, "remera");
        assert_eq!(path.to_string(), "kigali.gasabo.remera");
    }

    #[test]
    fn account_path_rejects_wrong_arity() {
        assert!("kigali.gasabo".parse::<AccountPath>().is_err());
        assert!("a.b.c.d".parse::<AccountPath>().is_err());
        assert!("".parse::<AccountPath>().is_err());
    }

    #[test]
    fn account_path_rejects_empty_segment() {
        assert!("kigali..remera".parse::<AccountPath>().is_err());
    }

    #[test]
    fn address_requires_all_levels() {
        let addr = Address::new("remera", "rukiri I", "amajyambere");
        assert!(addr.validate().is_ok());

        let missing = Address::new("remera", "", "amajyambere");
        assert!(missing.validate().is_err());
    }
}
