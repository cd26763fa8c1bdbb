// src/core.rs
pub mod converter;
pub mod ignore;
pub mod rewrite;
