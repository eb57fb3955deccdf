use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalyticsError {
    #[error("Not enough data for '{metric}': requires {required} observations, got {actual}")]
    InsufficientData {
        metric: &'static str,
        required: usize,
        actual: usize,
    },

    #[error(
        "Asset and reference series are misaligned: {asset} vs {reference} periods, or differing dates"
    )]
    LengthMismatch { asset: usize, reference: usize },
}
