//! Name pools - ordered word lists that names are drawn from

use std::fmt;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::NamingError;
use crate::word_lists::WordListSource;

// Compiled-in fallbacks used when a word list is missing or empty
const DEFAULT_MALE_NAMES: [&str; 20] = [
    "Bjorn", "Erik", "Leif", "Ragnar", "Olaf", "Harald", "Sigurd", "Ivar",
    "Gunnar", "Thorstein", "Ulf", "Arne", "Halfdan", "Knut", "Sven", "Torvald",
    "Egil", "Helgi", "Ketil", "Rollo",
];

const DEFAULT_FEMALE_NAMES: [&str; 20] = [
    "Astrid", "Freydis", "Gudrun", "Ingrid", "Helga", "Sigrid", "Thyra", "Ragnhild",
    "Solveig", "Gunnhild", "Aslaug", "Brynhild", "Dagny", "Hild", "Estrid", "Ylva",
    "Runa", "Thora", "Signy", "Eir",
];

const DEFAULT_TITLES: [&str; 12] = [
    "the Bold", "the Boneless", "Ironside", "Fairhair", "the Red", "Bluetooth",
    "Forkbeard", "the Wise", "the Stout", "Skullsplitter", "the Lucky", "the Far-Travelled",
];

/// Which word list a pool holds
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolKind {
    Male,
    Female,
    Title,
}

impl PoolKind {
    pub const ALL: [PoolKind; 3] = [PoolKind::Male, PoolKind::Female, PoolKind::Title];

    /// First-name pool for the given gender
    pub fn first_names(is_male: bool) -> Self {
        if is_male {
            PoolKind::Male
        } else {
            PoolKind::Female
        }
    }

    /// File name of the backing word list
    pub fn file_name(self) -> &'static str {
        match self {
            PoolKind::Male => "MaleNames.txt",
            PoolKind::Female => "FemaleNames.txt",
            PoolKind::Title => "Titles.txt",
        }
    }

    /// Compiled-in default entries
    pub fn defaults(self) -> &'static [&'static str] {
        match self {
            PoolKind::Male => &DEFAULT_MALE_NAMES,
            PoolKind::Female => &DEFAULT_FEMALE_NAMES,
            PoolKind::Title => &DEFAULT_TITLES,
        }
    }
}

impl fmt::Display for PoolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PoolKind::Male => "male name",
            PoolKind::Female => "female name",
            PoolKind::Title => "title",
        };
        f.write_str(label)
    }
}

/// An ordered, immutable list of names or titles
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamePool {
    kind: PoolKind,
    entries: Vec<String>,
}

impl NamePool {
    pub fn new(kind: PoolKind, entries: Vec<String>) -> Self {
        Self { kind, entries }
    }

    /// Pool filled with the compiled-in defaults for `kind`
    pub fn defaults(kind: PoolKind) -> Self {
        Self::new(kind, kind.defaults().iter().map(|s| s.to_string()).collect())
    }

    pub fn kind(&self) -> PoolKind {
        self.kind
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.iter().any(|e| e == name)
    }

    /// Draw one entry uniformly at random
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<&str, NamingError> {
        self.entries
            .choose(rng)
            .map(String::as_str)
            .ok_or(NamingError::EmptyPool { kind: self.kind })
    }
}

/// The three pools an allocator draws from
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamePools {
    pub male: NamePool,
    pub female: NamePool,
    pub titles: NamePool,
}

impl NamePools {
    /// Build pools directly from in-memory lists. Entries are trimmed and
    /// blank ones dropped, as when reading word-list files.
    pub fn new<S: Into<String>>(
        male: impl IntoIterator<Item = S>,
        female: impl IntoIterator<Item = S>,
        titles: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            male: NamePool::new(PoolKind::Male, clean_entries(male)),
            female: NamePool::new(PoolKind::Female, clean_entries(female)),
            titles: NamePool::new(PoolKind::Title, clean_entries(titles)),
        }
    }

    /// Pools holding only the compiled-in defaults
    pub fn defaults() -> Self {
        Self {
            male: NamePool::defaults(PoolKind::Male),
            female: NamePool::defaults(PoolKind::Female),
            titles: NamePool::defaults(PoolKind::Title),
        }
    }

    /// Load every pool from a word-list source.
    ///
    /// A source that yields no entries for a pool is replaced by that
    /// pool's defaults, so loaded pools are never empty.
    pub fn load<S: WordListSource + ?Sized>(source: &S) -> Result<Self, NamingError> {
        let male = Self::load_one(source, PoolKind::Male)?;
        let female = Self::load_one(source, PoolKind::Female)?;
        let titles = Self::load_one(source, PoolKind::Title)?;
        tracing::info!(
            "Loaded name pools: {} male, {} female, {} titles",
            male.len(),
            female.len(),
            titles.len()
        );
        Ok(Self { male, female, titles })
    }

    fn load_one<S: WordListSource + ?Sized>(source: &S, kind: PoolKind) -> Result<NamePool, NamingError> {
        let entries = source.load(kind)?;
        if entries.is_empty() {
            tracing::warn!("Word list for {} pool is empty, using defaults", kind);
            return Ok(NamePool::defaults(kind));
        }
        Ok(NamePool::new(kind, entries))
    }

    pub fn get(&self, kind: PoolKind) -> &NamePool {
        match kind {
            PoolKind::Male => &self.male,
            PoolKind::Female => &self.female,
            PoolKind::Title => &self.titles,
        }
    }

    /// First-name pool for the given gender
    pub fn first_names(&self, is_male: bool) -> &NamePool {
        self.get(PoolKind::first_names(is_male))
    }
}

fn clean_entries<S: Into<String>>(entries: impl IntoIterator<Item = S>) -> Vec<String> {
    entries
        .into_iter()
        .map(Into::into)
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .collect()
}

impl Default for NamePools {
    fn default() -> Self {
        Self::defaults()
    }
}
