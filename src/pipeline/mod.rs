// Pipeline: orchestrates extraction, scoring, and recommendation for a pair
// of inputs.

pub mod image;
