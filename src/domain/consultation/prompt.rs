//! Deterministic prompt assembly.
//!
//! The sentence order is a contract: downstream instructions change meaning
//! if the lines are reordered. Every sentence is declarative Brazilian
//! Portuguese, with literal fallbacks for optional fields.

use super::profile::{Contact, ConsultationRequest, Profile};

/// Fixed system-role instruction delivered with every completion request.
pub const SYSTEM_PROMPT: &str = r#"Você é uma terapeuta holística especializada em Tarologia simbólica. Você oferece acolhimento, metáforas e reflexões profundas, sempre deixando claro que não fornece previsões absolutas, diagnósticos nem conselhos legais. Sua linguagem é empática, humana e em português do Brasil. Incentive o autocuidado e evite gerar dependência emocional.

Regras obrigatórias:
- Conteúdo apenas para reflexão e entretenimento.
- Não substitua terapia, medicina ou aconselhamento jurídico.
- Utilize o tarô como metáfora simbólica e inspiradora.
- Mantenha tom acolhedor, esperançoso e realista.
- Nunca prometa certezas ou resultados garantidos.

Formato fixo da resposta:
1. Abertura acolhedora com 1 a 2 frases.
2. Tiragem simbólica de 3 cartas. Para cada carta informar: nome, significado simbólico e conexão com o caso do usuário.
3. Três perguntas de reflexão numeradas.
4. Duas ações práticas simples para os próximos 7 dias.
5. Encerramento curto com o lembrete: "Use isso como reflexão, não como certeza."
"#;

const NOT_PROVIDED: &str = "Não informado";

/// Builds the user-role prompt from a validated consultation.
///
/// Pure and deterministic: identical inputs always produce the identical
/// string.
pub fn build_prompt(profile: &Profile, contact: &Contact, request: &ConsultationRequest) -> String {
    let idade = match profile.idade {
        Some(idade) => format!("Idade declarada: {} anos.", idade),
        None => "Idade não informada.".to_string(),
    };

    let partes = [
        format!("Nome preferido da pessoa: {}.", profile.nome),
        idade,
        format!("Data de nascimento: {}.", profile.data_nascimento),
        format!(
            "Modo de tratamento de gênero preferido: {}.",
            profile.genero
        ),
        format!(
            "Arquétipo ou personalidade predominante: {}.",
            profile.arquetipo.as_deref().unwrap_or(NOT_PROVIDED)
        ),
        format!(
            "Estado emocional atual: {}.",
            profile.emocao.as_deref().unwrap_or(NOT_PROVIDED)
        ),
        format!(
            "Tipo de apoio esperado na leitura: {}.",
            profile.apoio_desejado.as_deref().unwrap_or(NOT_PROVIDED)
        ),
        format!(
            "Foco pessoal descrito: {}.",
            profile.foco_pessoal.as_deref().unwrap_or(NOT_PROVIDED)
        ),
        format!("Tema escolhido para a consulta: {}.", request.tema),
        format!("Dificuldade principal relatada: {}.", request.desafio),
        format!(
            "Objetivo para os próximos dias: {}.",
            request.objetivo.as_deref().unwrap_or("Objetivo não informado")
        ),
        format!(
            "Contato fornecido (não mencione o email ou telefone na resposta, \
             apenas considere que o retorno será enviado de forma privada). \
             Email registrado: {}. Telefone registrado: {}.",
            contact.email, contact.telefone
        ),
        "Produza a resposta seguindo estritamente o formato combinado.".to_string(),
    ];

    partes.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn profile() -> Profile {
        Profile {
            nome: "Maria".to_string(),
            data_nascimento: NaiveDate::from_ymd_opt(1990, 5, 15).unwrap(),
            idade: Some(34),
            genero: "feminino".to_string(),
            arquetipo: Some("A Sacerdotisa".to_string()),
            emocao: Some("ansiosa".to_string()),
            apoio_desejado: None,
            foco_pessoal: Some("clareza".to_string()),
        }
    }

    fn contact() -> Contact {
        Contact {
            email: "maria@example.com".to_string(),
            telefone: "+55 11 99999-0000".to_string(),
        }
    }

    fn request() -> ConsultationRequest {
        ConsultationRequest {
            tema: "carreira".to_string(),
            desafio: "mudança de área".to_string(),
            objetivo: Some("clareza".to_string()),
        }
    }

    #[test]
    fn prompt_is_deterministic() {
        let first = build_prompt(&profile(), &contact(), &request());
        let second = build_prompt(&profile(), &contact(), &request());
        assert_eq!(first, second);
    }

    #[test]
    fn sentences_appear_in_fixed_order() {
        let prompt = build_prompt(&profile(), &contact(), &request());
        let lines: Vec<&str> = prompt.lines().collect();

        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Nome preferido da pessoa: Maria.");
        assert_eq!(lines[1], "Idade declarada: 34 anos.");
        assert_eq!(lines[2], "Data de nascimento: 1990-05-15.");
        assert_eq!(lines[8], "Tema escolhido para a consulta: carreira.");
        assert_eq!(
            lines[12],
            "Produza a resposta seguindo estritamente o formato combinado."
        );
    }

    #[test]
    fn absent_optional_fields_use_fallback_text() {
        let mut profile = profile();
        profile.arquetipo = None;
        profile.emocao = None;
        let mut request = request();
        request.objetivo = None;

        let prompt = build_prompt(&profile, &contact(), &request);
        assert!(prompt.contains("Arquétipo ou personalidade predominante: Não informado."));
        assert!(prompt.contains("Estado emocional atual: Não informado."));
        assert!(prompt.contains("Objetivo para os próximos dias: Objetivo não informado."));
    }

    #[test]
    fn missing_age_uses_dedicated_sentence() {
        let mut profile = profile();
        profile.idade = None;

        let prompt = build_prompt(&profile, &contact(), &request());
        assert!(prompt.contains("Idade não informada."));
        assert!(!prompt.contains("Idade declarada"));
    }

    #[test]
    fn contact_block_flags_private_delivery() {
        let prompt = build_prompt(&profile(), &contact(), &request());
        assert!(prompt.contains("não mencione o email ou telefone na resposta"));
        assert!(prompt.contains("Email registrado: maria@example.com."));
        assert!(prompt.contains("Telefone registrado: +55 11 99999-0000."));
    }

    #[test]
    fn system_prompt_carries_the_fixed_reminder() {
        assert!(SYSTEM_PROMPT.contains("Use isso como reflexão, não como certeza."));
        assert!(SYSTEM_PROMPT.contains("Tiragem simbólica de 3 cartas"));
    }
}
