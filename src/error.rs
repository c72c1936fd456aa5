#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when a sample passed to the rank-sum test has no values.
    #[error("sample must contain at least one value")]
    EmptySample,

    /// Returned when the rank distribution has zero variance, e.g. when
    /// every pooled value is identical. The normal approximation is
    /// undefined in that case and no significance can be established.
    #[error("insufficient variance: all pooled values are tied, p-value is undefined")]
    InsufficientVariance,
}

pub type Result<T> = core::result::Result<T, Error>;
