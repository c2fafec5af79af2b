//! Configuration for name allocation

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::surname::{PatronymicSurname, PlainSurname, SurnameStrategy};

/// What to do when a drawn first name was already issued with a
/// different last name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// The full name is still new, so record it and succeed
    #[default]
    AcceptAndRecord,
    /// Treat any reuse of a first name as a collision and redraw
    RejectAndRetry,
}

/// How child surnames are derived from the drawn base name
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SurnameStyle {
    /// Base name unchanged
    #[default]
    Plain,
    /// Genitive plus `son` / `dottir`
    Patronymic,
}

impl SurnameStyle {
    pub fn strategy(self) -> Box<dyn SurnameStrategy> {
        match self {
            SurnameStyle::Plain => Box::new(PlainSurname),
            SurnameStyle::Patronymic => Box::new(PatronymicSurname),
        }
    }
}

/// Allocator configuration
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    /// Maximum candidates checked per allocation (including the first)
    pub max_attempts: usize,
    /// Handling of a first name already issued with another last name
    pub collision_policy: CollisionPolicy,
    /// Child surname derivation
    pub surname_style: SurnameStyle,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
    /// Directory holding the word-list files
    pub word_list_dir: PathBuf,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            max_attempts: 100,
            collision_policy: CollisionPolicy::AcceptAndRecord,
            surname_style: SurnameStyle::Plain,
            seed: None,
            word_list_dir: PathBuf::from("TextFiles"),
        }
    }
}

impl NamingConfig {
    /// Load from JSON file. Missing fields take their defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(config)
    }

    /// Save to JSON file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Attempt budget, never below one
    pub fn attempt_budget(&self) -> usize {
        self.max_attempts.max(1)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn with_policy(mut self, policy: CollisionPolicy) -> Self {
        self.collision_policy = policy;
        self
    }

    pub fn with_surname_style(mut self, style: SurnameStyle) -> Self {
        self.surname_style = style;
        self
    }

    pub fn with_word_list_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.word_list_dir = dir.into();
        self
    }
}
