//! HTTP DTOs for the consultation endpoint.
//!
//! These types mirror the wire format exactly; validation happens in the
//! domain after conversion into a [`ConsultationIntake`].

use serde::{Deserialize, Serialize};

use crate::domain::consultation::{ConsultationIntake, ContactIntake, ProfileIntake};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/consulta request body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConsultaRequest {
    #[serde(default)]
    pub perfil: Option<PerfilPayload>,
    #[serde(default)]
    pub contato: Option<ContatoPayload>,
    #[serde(default)]
    pub tema: Option<String>,
    #[serde(default)]
    pub desafio: Option<String>,
    #[serde(default)]
    pub objetivo: Option<String>,
}

/// Requester profile as supplied by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PerfilPayload {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub data_nascimento: Option<String>,
    #[serde(default)]
    pub genero: Option<String>,
    #[serde(default)]
    pub arquetipo: Option<String>,
    #[serde(default)]
    pub emocao: Option<String>,
    #[serde(default)]
    pub apoio_desejado: Option<String>,
    #[serde(default)]
    pub foco_pessoal: Option<String>,
}

/// Contact details as supplied by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContatoPayload {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub telefone: Option<String>,
}

impl From<ConsultaRequest> for ConsultationIntake {
    fn from(req: ConsultaRequest) -> Self {
        let perfil = req.perfil.unwrap_or_default();
        let contato = req.contato.unwrap_or_default();

        ConsultationIntake {
            perfil: ProfileIntake {
                nome: perfil.nome,
                data_nascimento: perfil.data_nascimento,
                genero: perfil.genero,
                arquetipo: perfil.arquetipo,
                emocao: perfil.emocao,
                apoio_desejado: perfil.apoio_desejado,
                foco_pessoal: perfil.foco_pessoal,
            },
            contato: ContactIntake {
                email: contato.email,
                telefone: contato.telefone,
            },
            tema: req.tema,
            desafio: req.desafio,
            objetivo: req.objetivo,
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Successful consultation response.
#[derive(Debug, Clone, Serialize)]
pub struct ConsultaResponse {
    pub mensagem: String,
}

/// Standard error response body.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub erro: String,
    pub detalhes: String,
}

impl ErrorResponse {
    pub fn new(erro: impl Into<String>, detalhes: impl Into<String>) -> Self {
        Self {
            erro: erro.into(),
            detalhes: detalhes.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consulta_request_deserializes_full_payload() {
        let json = r#"{
            "perfil": {"nome": "Maria", "data_nascimento": "1990-05-15", "genero": "feminino"},
            "contato": {"email": "maria@example.com", "telefone": "+55 11 99999-0000"},
            "tema": "carreira",
            "desafio": "mudança de área",
            "objetivo": "clareza"
        }"#;
        let req: ConsultaRequest = serde_json::from_str(json).unwrap();

        let perfil = req.perfil.as_ref().unwrap();
        assert_eq!(perfil.nome.as_deref(), Some("Maria"));
        assert_eq!(req.tema.as_deref(), Some("carreira"));
    }

    #[test]
    fn consulta_request_tolerates_missing_sections() {
        let req: ConsultaRequest = serde_json::from_str("{}").unwrap();
        assert!(req.perfil.is_none());
        assert!(req.contato.is_none());

        let req: ConsultaRequest =
            serde_json::from_str(r#"{"perfil": null, "contato": null}"#).unwrap();
        assert!(req.perfil.is_none());
    }

    #[test]
    fn consulta_request_ignores_client_supplied_age() {
        // An `idade` key in the profile has no matching field; the server
        // recomputes the age from the birth date during validation.
        let json = r#"{"perfil": {"nome": "Maria", "idade": 99}}"#;
        let req: ConsultaRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.perfil.unwrap().nome.as_deref(), Some("Maria"));
    }

    #[test]
    fn conversion_into_intake_preserves_fields() {
        let req = ConsultaRequest {
            perfil: Some(PerfilPayload {
                nome: Some("Maria".to_string()),
                ..Default::default()
            }),
            contato: None,
            tema: Some("carreira".to_string()),
            desafio: None,
            objetivo: None,
        };

        let intake: ConsultationIntake = req.into();
        assert_eq!(intake.perfil.nome.as_deref(), Some("Maria"));
        assert_eq!(intake.tema.as_deref(), Some("carreira"));
        assert!(intake.contato.email.is_none());
    }

    #[test]
    fn consulta_response_serializes_mensagem() {
        let response = ConsultaResponse {
            mensagem: "olá".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["mensagem"], "olá");
    }

    #[test]
    fn error_response_serializes_title_and_details() {
        let error = ErrorResponse::new("Dados incompletos.", "Campos obrigatórios ausentes: nome.");
        let json = serde_json::to_value(&error).unwrap();
        assert_eq!(json["erro"], "Dados incompletos.");
        assert_eq!(json["detalhes"], "Campos obrigatórios ausentes: nome.");
    }
}
