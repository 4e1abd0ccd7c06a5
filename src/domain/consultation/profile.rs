//! Validated consultation data.
//!
//! These types only exist after [`ConsultationIntake`](super::ConsultationIntake)
//! validation has succeeded: required strings are trimmed and non-empty, the
//! birth date is a real calendar date, and the age is the server-side
//! computation, never a client-supplied value.

use chrono::NaiveDate;

/// Structured description of the requester used to personalize the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub nome: String,
    pub data_nascimento: NaiveDate,
    /// Whole years, recomputed from `data_nascimento` during validation.
    pub idade: Option<i32>,
    pub genero: String,
    pub arquetipo: Option<String>,
    pub emocao: Option<String>,
    pub apoio_desejado: Option<String>,
    pub foco_pessoal: Option<String>,
}

/// Contact details. Flagged as private in the prompt, never echoed back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub email: String,
    pub telefone: String,
}

/// What the requester wants out of the consultation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationRequest {
    pub tema: String,
    pub desafio: String,
    pub objetivo: Option<String>,
}

/// A fully validated consultation, ready for prompt assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Consultation {
    pub profile: Profile,
    pub contact: Contact,
    pub request: ConsultationRequest,
}
