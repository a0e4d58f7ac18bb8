//! Product name value type.
//!
//! The bookkeeping domain keys stock by the product name the user typed,
//! not by a catalog id, so the name itself is the identity and must be
//! normalized once at the boundary.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// A trimmed, non-empty product name.
///
/// Compared and hashed by exact (trimmed) value; two entries for
/// `"Kopi "` and `"Kopi"` hit the same accumulator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductName(String);

impl ProductName {
    pub fn new(raw: impl AsRef<str>) -> DomainResult<Self> {
        let trimmed = raw.as_ref().trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("product name cannot be empty"));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ProductName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
