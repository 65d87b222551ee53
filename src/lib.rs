pub mod config;
pub mod core;
pub mod options;

pub use crate::core::slugify::{slugify, slugify_resolved, Slugifier};
pub use crate::core::table::ReplacementTable;
pub use options::{Ignore, OptionsError, ResolvedOptions, Separator, SlugOptions};
