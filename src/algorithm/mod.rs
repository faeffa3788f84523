/// Greedy assembly state machine and its result
pub mod assembler;
/// Candidate scoring and deterministic best-match selection
pub mod selection;
