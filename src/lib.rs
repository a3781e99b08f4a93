// Export modules for library usage
pub mod classify;
pub mod cli;
pub mod commands;
pub mod config;
pub mod errors;
pub mod io;
pub mod observability;
pub mod registry;
pub mod render;

// Re-export commonly used types
pub use crate::classify::{
    classify, Classification, ConsumedSet, RenderMode, Section, SectionGroup, SectionPlan,
    SectionRule,
};
pub use crate::config::{GeneratorConfig, Layout};
pub use crate::errors::{GenError, Result};
pub use crate::registry::{FilterValue, NumericEntry, Registry};
pub use crate::render::{render, RenderOptions};
