use crate::errors::ForecastResult;
use crate::models::Prediction;
use crate::outcome::Outcome;

/// Produces a forecast from a read-only, chronological history snapshot.
///
/// Implementations must be pure with respect to `history`: same input,
/// same prediction.
pub trait IForecaster {
    fn forecast(&self, history: &[Outcome]) -> ForecastResult<Prediction>;

    /// Outcomes required before `forecast` can succeed.
    fn min_history(&self) -> usize;
}
