//! Check registry
//!
//! An explicit, ordered list of check instances. There is no discovery:
//! the checks a run can execute are exactly the ones registered here, in
//! registration order. Keys are unique; registering a duplicate fails.

use thiserror::Error;

use crate::core::check::Check;
use crate::core::models::CheckDescriptor;

/// Errors raised while assembling a registry
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// A check with this key is already registered
    #[error("duplicate check key: {0}")]
    DuplicateKey(String),
}

/// Ordered set of checks with unique keys
#[derive(Default)]
pub struct Registry {
    checks: Vec<Box<dyn Check>>,
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.checks.iter().map(|c| c.key()))
            .finish()
    }
}

impl Registry {
    /// Empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a check; fails if its key is already taken
    pub fn register(&mut self, check: Box<dyn Check>) -> Result<(), RegistryError> {
        if self.contains(check.key()) {
            return Err(RegistryError::DuplicateKey(check.key().to_string()));
        }
        self.checks.push(check);
        Ok(())
    }

    /// Builder-style [`register`](Self::register)
    pub fn with(mut self, check: impl Check + 'static) -> Result<Self, RegistryError> {
        self.register(Box::new(check))?;
        Ok(self)
    }

    /// Whether a check with `key` is registered
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.checks.iter().any(|c| c.key() == key)
    }

    /// Checks in registration order
    pub fn iter(&self) -> impl Iterator<Item = &dyn Check> {
        self.checks.iter().map(|check| &**check)
    }

    /// Keys and descriptions in registration order
    #[must_use]
    pub fn descriptors(&self) -> Vec<CheckDescriptor> {
        self.iter().map(Check::descriptor).collect()
    }

    /// Number of registered checks
    #[must_use]
    pub fn len(&self) -> usize {
        self.checks.len()
    }

    /// Whether no checks are registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }
}
