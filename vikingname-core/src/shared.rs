//! Thread-safe handle to a single allocator
//!
//! Check-then-insert must not interleave between callers, so every
//! operation runs under one mutex.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::allocator::{FullName, NameAllocator};
use crate::error::NamingError;

/// Cloneable handle; all clones share one allocator and one record
#[derive(Clone, Debug)]
pub struct SharedAllocator {
    inner: Arc<Mutex<NameAllocator>>,
}

impl SharedAllocator {
    pub fn new(allocator: NameAllocator) -> Self {
        Self {
            inner: Arc::new(Mutex::new(allocator)),
        }
    }

    fn lock(&self) -> MutexGuard<'_, NameAllocator> {
        // The record stays consistent even if a holder panicked
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn full_name(&self, is_male: bool, is_child: bool) -> Result<FullName, NamingError> {
        self.lock().full_name(is_male, is_child)
    }

    pub fn record_full_name(
        &self,
        is_male: bool,
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> Result<FullName, NamingError> {
        self.lock().record_full_name(is_male, first, last)
    }

    pub fn choose_first_name(&self, is_male: bool) -> Result<String, NamingError> {
        self.lock().choose_first_name(is_male)
    }

    pub fn choose_title(&self) -> Result<String, NamingError> {
        self.lock().choose_title()
    }

    /// Number of full names issued so far
    pub fn recorded(&self) -> usize {
        self.lock().record().len()
    }

    /// Run `f` with exclusive access to the allocator
    pub fn with<T>(&self, f: impl FnOnce(&mut NameAllocator) -> T) -> T {
        f(&mut self.lock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NamingConfig;
    use crate::pools::NamePools;
    use std::collections::HashSet;
    use std::thread;

    #[test]
    fn test_concurrent_allocations_stay_unique() {
        let shared = SharedAllocator::new(NameAllocator::new(
            NamePools::defaults(),
            NamingConfig::default().with_seed(7),
        ));

        let names: Vec<FullName> = thread::scope(|s| {
            let handles: Vec<_> = (0..4)
                .map(|t| {
                    let shared = shared.clone();
                    s.spawn(move || {
                        (0..25)
                            .map(|_| shared.full_name(t % 2 == 0, false).unwrap())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            handles
                .into_iter()
                .flat_map(|h| h.join().unwrap())
                .collect()
        });

        let unique: HashSet<&FullName> = names.iter().collect();
        assert_eq!(unique.len(), 100);
        assert_eq!(shared.recorded(), 100);
    }

    #[test]
    fn test_clones_share_record() {
        let shared = SharedAllocator::new(NameAllocator::new(
            NamePools::new(["John"], ["Jane"], ["the Bold"]),
            NamingConfig::default().with_seed(1).with_max_attempts(5),
        ));
        let other = shared.clone();

        shared.record_full_name(true, "John", "Doe").unwrap();
        let err = other.record_full_name(true, "John", "Doe").unwrap_err();
        assert!(err.is_exhausted());
        assert_eq!(other.with(|a| a.max_attempts()), 5);
    }
}
