// src/models.rs
mod conversion_stats;

pub use conversion_stats::ConversionStats;
