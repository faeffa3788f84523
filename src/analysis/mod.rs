//! Edge summaries of shreds and how well two of them fit together

/// Dissimilarity score between edge signatures
pub mod scoring;
/// Stripe averaging into edge signatures
pub mod signature;
