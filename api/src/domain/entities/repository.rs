use std::fmt;

use crate::error::DomainError;

/// Owner/name pair naming one upstream repository.
///
/// Both parts must be non-empty. Nothing else is checked: no character-set
/// rules, no case folding, no existence lookup before the upstream call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentifier {
    owner: String,
    name: String,
}

impl RepositoryIdentifier {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Result<Self, DomainError> {
        let owner = owner.into();
        let name = name.into();

        if owner.is_empty() {
            return Err(DomainError::Validation(
                "owner must not be empty".to_string(),
            ));
        }
        if name.is_empty() {
            return Err(DomainError::Validation(
                "repository name must not be empty".to_string(),
            ));
        }

        Ok(Self { owner, name })
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepositoryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
