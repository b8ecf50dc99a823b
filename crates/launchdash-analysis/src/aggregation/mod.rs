//! Filtering and grouping over the launch dataset.

pub mod outcomes;
pub mod scatter;
