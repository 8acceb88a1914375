//! CLI subcommands

pub mod apply;
pub mod features;
pub mod list;
pub mod regenerate;
