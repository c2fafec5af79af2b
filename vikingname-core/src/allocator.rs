//! Name allocator - draws names and guarantees unique full names
//!
//! ## Allocation loop
//!
//! A candidate (first, last) is checked against the dedupe record:
//! - unseen first name: commit
//! - same full name already issued: redraw the first name, keep the last
//! - first name issued with another last name: commit or redraw,
//!   depending on the `CollisionPolicy`
//!
//! The loop checks at most `max_attempts` candidates, then fails with
//! `NamingError::NameSpaceExhausted`.

use std::fmt;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::config::{CollisionPolicy, NamingConfig};
use crate::error::NamingError;
use crate::pools::NamePools;
use crate::record::DedupeRecord;
use crate::surname::SurnameStrategy;
use crate::word_lists::FileWordLists;

/// A first and last name pair
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FullName {
    pub first: String,
    pub last: String,
}

impl FullName {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Self {
        Self {
            first: first.into(),
            last: last.into(),
        }
    }
}

impl fmt::Display for FullName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.first, self.last)
    }
}

/// Result of checking a candidate against the record
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Check {
    Free,
    Duplicate,
    DistinctCollision,
}

/// One step of the duplicate-name self-test
#[derive(Clone, Debug)]
pub struct SelfTestOutcome {
    pub requested: FullName,
    pub recorded: Result<FullName, String>,
}

/// Outcomes of `NameAllocator::self_test`
#[derive(Clone, Debug, Default)]
pub struct SelfTestReport {
    pub outcomes: Vec<SelfTestOutcome>,
}

/// Owns the name pools and the session's dedupe record
pub struct NameAllocator {
    pools: NamePools,
    record: DedupeRecord,
    surname: Box<dyn SurnameStrategy>,
    policy: CollisionPolicy,
    max_attempts: usize,
    rng: ChaCha8Rng,
}

impl fmt::Debug for NameAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NameAllocator")
            .field("pools", &self.pools)
            .field("recorded", &self.record.len())
            .field("policy", &self.policy)
            .field("max_attempts", &self.max_attempts)
            .finish()
    }
}

impl NameAllocator {
    /// Create an allocator over already-loaded pools
    pub fn new(pools: NamePools, config: NamingConfig) -> Self {
        Self {
            pools,
            record: DedupeRecord::new(),
            surname: config.surname_style.strategy(),
            policy: config.collision_policy,
            max_attempts: config.attempt_budget(),
            rng: create_rng(config.seed),
        }
    }

    /// Create an allocator backed by the word-list files in
    /// `config.word_list_dir`, writing default files where missing
    pub fn from_config(config: NamingConfig) -> Result<Self, NamingError> {
        let lists = FileWordLists::new(&config.word_list_dir);
        lists.verify()?;
        let pools = NamePools::load(&lists)?;
        Ok(Self::new(pools, config))
    }

    /// Replace the surname derivation strategy
    pub fn with_surname_strategy(mut self, strategy: Box<dyn SurnameStrategy>) -> Self {
        self.surname = strategy;
        self
    }

    pub fn pools(&self) -> &NamePools {
        &self.pools
    }

    pub fn record(&self) -> &DedupeRecord {
        &self.record
    }

    pub fn policy(&self) -> CollisionPolicy {
        self.policy
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    // ========================================================================
    // SELECTION
    // ========================================================================

    /// Draw a first name from the male or female pool
    pub fn choose_first_name(&mut self, is_male: bool) -> Result<String, NamingError> {
        let name = self.pools.first_names(is_male).choose(&mut self.rng)?;
        Ok(name.to_string())
    }

    /// Draw a surname.
    ///
    /// Adults get a drawn first name as-is. Children get it passed
    /// through the surname strategy.
    pub fn choose_last_name(&mut self, is_male: bool, is_child: bool) -> Result<String, NamingError> {
        let base = self.choose_first_name(is_male)?;
        if is_child {
            Ok(self.surname.derive(&base, is_male))
        } else {
            Ok(base)
        }
    }

    /// Draw a title from the title pool
    pub fn choose_title(&mut self) -> Result<String, NamingError> {
        let title = self.pools.titles.choose(&mut self.rng)?;
        Ok(title.to_string())
    }

    /// Hook for attaching a title to a character. Titles are not
    /// stored yet, so this only logs.
    pub fn assign_title(&self, title: &str) {
        tracing::debug!("Title assignment requested: {}", title);
    }

    // ========================================================================
    // ALLOCATION
    // ========================================================================

    /// Draw and record a unique full name
    pub fn full_name(&mut self, is_male: bool, is_child: bool) -> Result<FullName, NamingError> {
        let first = self.choose_first_name(is_male)?;
        let last = self.choose_last_name(is_male, is_child)?;
        let name = self.record_full_name(is_male, first, last)?;
        tracing::debug!("Full name: {}", name);
        Ok(name)
    }

    /// Record a caller-chosen candidate, redrawing the first name from
    /// the `is_male` pool while it collides
    pub fn record_full_name(
        &mut self,
        is_male: bool,
        first: impl Into<String>,
        last: impl Into<String>,
    ) -> Result<FullName, NamingError> {
        let mut first = first.into();
        let last = last.into();
        if first.trim().is_empty() || last.trim().is_empty() {
            return Err(NamingError::EmptyName { first_name: first, last_name: last });
        }

        for attempt in 1..=self.max_attempts {
            if attempt > 1 {
                first = self.choose_first_name(is_male)?;
            }

            let commit = match self.check(&first, &last) {
                Check::Free => true,
                Check::Duplicate => false,
                Check::DistinctCollision => self.policy == CollisionPolicy::AcceptAndRecord,
            };

            if commit {
                self.record.record(&first, &last);
                let name = FullName { first, last };
                tracing::info!("Full name recorded: {}", name);
                return Ok(name);
            }
            tracing::debug!("Attempt {}: '{} {}' collides, redrawing", attempt, first, last);
        }

        tracing::error!(
            "Unable to record full name after {} attempts; name pool too small or names exhausted",
            self.max_attempts
        );
        Err(NamingError::NameSpaceExhausted {
            first_name: first,
            last_name: last,
            attempts: self.max_attempts,
        })
    }

    fn check(&self, first: &str, last: &str) -> Check {
        if self.record.contains(first, last) {
            Check::Duplicate
        } else if self.record.contains_first(first) {
            Check::DistinctCollision
        } else {
            Check::Free
        }
    }

    /// Replay the duplicate-name scenario (John Doe twice, then Jane Doe).
    ///
    /// Runs against a scratch record and a copy of the RNG; the session's
    /// record and draw sequence are restored afterwards.
    pub fn self_test(&mut self) -> SelfTestReport {
        let requests = [("John", "Doe"), ("John", "Doe"), ("Jane", "Doe")];
        let saved_record = std::mem::take(&mut self.record);
        let saved_rng = self.rng.clone();

        let mut report = SelfTestReport::default();
        for (first, last) in requests {
            let recorded = self
                .record_full_name(true, first, last)
                .map_err(|e| e.to_string());
            tracing::info!("Self-test {} {}: {:?}", first, last, recorded);
            report.outcomes.push(SelfTestOutcome {
                requested: FullName::new(first, last),
                recorded,
            });
        }

        // The scratch record is dropped here
        self.record = saved_record;
        self.rng = saved_rng;
        tracing::info!("Self-test records discarded, session record restored");
        report
    }
}

/// Create RNG from seed or random
fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
