use chrono::NaiveDate;

#[derive(Debug, thiserror::Error)]
pub enum CalculationError {
    #[error("at least two meter readings on distinct days are required, got {n_readings}")]
    InsufficientData { n_readings: usize },

    #[error("calendar overflow after {date}")]
    DateOutOfRange { date: NaiveDate },
}

pub type Result<T, E = CalculationError> = std::result::Result<T, E>;
