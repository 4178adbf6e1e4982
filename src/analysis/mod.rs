//! Analysis of generated grids

/// Fallback and seam statistics for a finished or partial run
pub mod report;
