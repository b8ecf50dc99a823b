//! Record and selection types shared across crates.

pub mod launch;
pub mod selection;
