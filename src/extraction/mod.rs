// Feature extraction: the seam between raw image content and the scorers.
//
// The FeatureExtractor trait is passed explicitly to whatever needs it, so a
// real vision model, a remote service, or a deterministic stub can be swapped
// in without touching the scoring pipeline.

pub mod digest_features;
pub mod source;
pub mod traits;
