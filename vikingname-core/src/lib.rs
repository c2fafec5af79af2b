//! Vikingname Core - Unique name allocation for generated vikings
//!
//! This crate provides the naming logic used when creating characters:
//! - Name pools (male, female, titles) loaded from word-list files
//! - Name selection (first names, surnames, titles)
//! - Pluggable surname derivation (plain or patronymic)
//! - A deduplicating full-name allocator with a bounded retry loop
//!
//! ## Example
//!
//! ```
//! use vikingname_core::{NameAllocator, NamePools, NamingConfig};
//!
//! let pools = NamePools::defaults();
//! let mut allocator = NameAllocator::new(pools, NamingConfig::default().with_seed(7));
//! let name = allocator.full_name(true, false).unwrap();
//! assert!(!name.first.is_empty());
//! ```

pub mod allocator;
pub mod config;
pub mod error;
pub mod pools;
pub mod record;
pub mod shared;
pub mod surname;
pub mod word_lists;

// Re-exports for convenient access
pub use allocator::{FullName, NameAllocator, SelfTestReport};
pub use config::{CollisionPolicy, NamingConfig, SurnameStyle};
pub use error::NamingError;
pub use pools::{NamePool, NamePools, PoolKind};
pub use record::DedupeRecord;
pub use shared::SharedAllocator;
pub use surname::{PatronymicSurname, PlainSurname, SurnameStrategy};
pub use word_lists::{DefaultWordLists, FileWordLists, WordListSource};
