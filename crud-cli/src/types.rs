//! Common types used across CLI modules

use clap::ValueEnum;

/// Ordering applied to `list` output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SortOrder {
    #[default]
    NameAsc,
    NameDesc,
    AgeAsc,
    AgeDesc,
}
