//! Error types for the consultation domain.

use thiserror::Error;

/// Failures raised while validating a consultation intake.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntakeError {
    /// One or more required fields were absent or blank. Lists every
    /// missing field name in the declared field order.
    #[error("campos obrigatórios ausentes: {}", .missing.join(", "))]
    IncompleteData { missing: Vec<String> },

    /// The birth date string did not parse as a `YYYY-MM-DD` calendar date.
    #[error("data de nascimento inválida")]
    InvalidBirthDate,

    /// Policy gate: the requester is younger than the minimum age.
    #[error("consulta permitida somente para maiores de idade")]
    ConsultationNotAllowed,
}
