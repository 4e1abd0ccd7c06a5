//! Intake validation for consultation requests.
//!
//! The intake carries the raw, untrusted strings exactly as the HTTP layer
//! received them. Validation runs in a fixed order: presence of every
//! required field first (collecting all missing names), then the birth date
//! parse, then the age policy gate.

use chrono::{Local, NaiveDate};

use super::age::compute_age_at;
use super::errors::IntakeError;
use super::profile::{Consultation, Contact, ConsultationRequest, Profile};

/// Minimum age to receive a consultation.
pub const MINIMUM_AGE: i32 = 18;

/// Raw, untrusted consultation payload before validation.
///
/// There is deliberately no `idade` field here: the age is always recomputed
/// from the birth date, regardless of anything the client sent.
#[derive(Debug, Clone, Default)]
pub struct ConsultationIntake {
    pub perfil: ProfileIntake,
    pub contato: ContactIntake,
    pub tema: Option<String>,
    pub desafio: Option<String>,
    pub objetivo: Option<String>,
}

/// Raw profile fields.
#[derive(Debug, Clone, Default)]
pub struct ProfileIntake {
    pub nome: Option<String>,
    pub data_nascimento: Option<String>,
    pub genero: Option<String>,
    pub arquetipo: Option<String>,
    pub emocao: Option<String>,
    pub apoio_desejado: Option<String>,
    pub foco_pessoal: Option<String>,
}

/// Raw contact fields.
#[derive(Debug, Clone, Default)]
pub struct ContactIntake {
    pub email: Option<String>,
    pub telefone: Option<String>,
}

impl ConsultationIntake {
    /// Validates the intake against the system's current date.
    pub fn validate(self) -> Result<Consultation, IntakeError> {
        self.validate_at(Local::now().date_naive())
    }

    /// Validates the intake against an explicit reference date.
    pub fn validate_at(self, today: NaiveDate) -> Result<Consultation, IntakeError> {
        let nome = trimmed(&self.perfil.nome);
        let nascimento_raw = trimmed(&self.perfil.data_nascimento);
        let genero = trimmed(&self.perfil.genero);
        let tema = trimmed(&self.tema);
        let desafio = trimmed(&self.desafio);
        let email = trimmed(&self.contato.email);
        let telefone = trimmed(&self.contato.telefone);

        // Declared field order; error details must list missing fields in
        // exactly this order.
        let required = [
            ("nome", &nome),
            ("data_nascimento", &nascimento_raw),
            ("genero", &genero),
            ("tema", &tema),
            ("desafio", &desafio),
            ("email", &email),
            ("telefone", &telefone),
        ];
        let missing: Vec<String> = required
            .iter()
            .filter(|(_, value)| value.is_empty())
            .map(|(name, _)| (*name).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(IntakeError::IncompleteData { missing });
        }

        let (data_nascimento, idade) =
            compute_age_at(&nascimento_raw, today).ok_or(IntakeError::InvalidBirthDate)?;
        if idade < MINIMUM_AGE {
            return Err(IntakeError::ConsultationNotAllowed);
        }

        let objetivo = optional(self.objetivo);
        // The personal focus falls back to the stated goal when absent.
        let foco_pessoal = optional(self.perfil.foco_pessoal).or_else(|| objetivo.clone());

        Ok(Consultation {
            profile: Profile {
                nome,
                data_nascimento,
                idade: Some(idade),
                genero,
                arquetipo: optional(self.perfil.arquetipo),
                emocao: optional(self.perfil.emocao),
                apoio_desejado: optional(self.perfil.apoio_desejado),
                foco_pessoal,
            },
            contact: Contact { email, telefone },
            request: ConsultationRequest {
                tema,
                desafio,
                objetivo,
            },
        })
    }
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().trim().to_string()
}

fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
