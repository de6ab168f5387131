//! One shared [`PAdicIntegers`] per prime.
//!
//! Lookups take a read lock; only the first request for a prime takes the
//! write lock, and it re-checks the map under that lock, so concurrent first
//! requests all receive the same `Arc`.

use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use tracing::debug;

use crate::error::{PAdicError, Result};
use crate::integers::PAdicIntegers;
use crate::primes::is_supported_base;

/// Cache of p-adic integer contexts keyed by prime.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use padic::BaseRegistry;
///
/// let registry = BaseRegistry::new();
/// let a = registry.get_or_create(7).unwrap();
/// let b = registry.get_or_create(7).unwrap();
/// assert!(Arc::ptr_eq(&a, &b));
/// assert!(registry.get_or_create(8).is_err());
/// assert_eq!(registry.bases(), vec![7]);
/// ```
#[derive(Debug, Default)]
pub struct BaseRegistry {
    contexts: RwLock<HashMap<u8, Arc<PAdicIntegers>>>,
}

impl BaseRegistry {
    /// An empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry. Created on first use and never dropped.
    #[must_use]
    pub fn global() -> &'static BaseRegistry {
        static REGISTRY: OnceLock<BaseRegistry> = OnceLock::new();
        REGISTRY.get_or_init(BaseRegistry::new)
    }

    /// The context for `base`, created on first request.
    ///
    /// # Errors
    ///
    /// [`PAdicError::InvalidBase`] unless `base` is a prime no larger than 36.
    /// Nothing is cached for a rejected base.
    pub fn get_or_create(&self, base: u32) -> Result<Arc<PAdicIntegers>> {
        if !is_supported_base(base) {
            return Err(PAdicError::InvalidBase { base });
        }
        let key = base as u8;
        if let Some(found) = self.contexts.read().get(&key) {
            return Ok(Arc::clone(found));
        }
        let mut contexts = self.contexts.write();
        let integers = contexts.entry(key).or_insert_with(|| {
            debug!(base, "publishing p-adic integers");
            Arc::new(PAdicIntegers::new(key))
        });
        Ok(Arc::clone(integers))
    }

    /// The primes with a published context, ascending.
    #[must_use]
    pub fn bases(&self) -> Vec<u8> {
        let mut bases: Vec<u8> = self.contexts.read().keys().copied().collect();
        bases.sort_unstable();
        bases
    }

    /// Number of published contexts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.contexts.read().len()
    }

    /// Whether no context has been published yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contexts.read().is_empty()
    }
}
