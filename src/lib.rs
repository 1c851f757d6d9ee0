// Merek: similarity scoring for brand protection
//
// This is the library root. Scoring is pure and synchronous; extraction is an
// async seam that callers inject. Everything else (HTTP, uploads, storage,
// language models) lives outside this crate.

pub mod config;
pub mod extraction;
pub mod models;
pub mod output;
pub mod pipeline;
pub mod scoring;
