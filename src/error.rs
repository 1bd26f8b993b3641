use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error(
        "not enough suitable foods for a full day plan: only {found} candidate(s) survive the \
         profile's allergen/dietary/prep/budget filters, need at least 4"
    )]
    InsufficientCandidates { found: usize },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, PlanError>;
