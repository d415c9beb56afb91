//! Prompt construction for plan generation.
//!
//! Pure logic (no I/O): validates the user-supplied parameters and assembles
//! the natural-language instruction prompt, including the JSON shape the
//! endpoint is asked to honor. The shape is a textual contract only; the
//! response is still treated as untrusted free text.

use thiserror::Error;

/// User-supplied parameters for a new study route.
#[derive(Debug, Clone)]
pub struct PlanRequest {
    /// What to study (free text).
    pub subject: String,
    /// Daily time budget label (e.g. "1 hora").
    pub daily_time: String,
    /// Dedication level label (e.g. "alto").
    pub dedication: String,
}

/// Errors from validating a [`PlanRequest`].
///
/// Validation failures are reported before any network call is made.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("subject must not be empty")]
    MissingSubject,
    #[error("daily time must not be empty")]
    MissingDailyTime,
    #[error("dedication level must not be empty")]
    MissingDedication,
}

impl PlanRequest {
    pub fn new(
        subject: impl Into<String>,
        daily_time: impl Into<String>,
        dedication: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            daily_time: daily_time.into(),
            dedication: dedication.into(),
        }
    }

    /// All three fields must be non-blank.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.subject.trim().is_empty() {
            return Err(ValidationError::MissingSubject);
        }
        if self.daily_time.trim().is_empty() {
            return Err(ValidationError::MissingDailyTime);
        }
        if self.dedication.trim().is_empty() {
            return Err(ValidationError::MissingDedication);
        }
        Ok(())
    }
}

/// System message sent alongside every generation prompt.
pub const SYSTEM_MESSAGE: &str = "Você é um especialista em educação e criação de planos de \
     estudo personalizados. Sempre responda apenas com JSON válido conforme solicitado.";

/// JSON shape reference included in the prompt.
const SHAPE_REFERENCE: &str = r#"{
  "title": "Nome específico do plano de estudos",
  "description": "Descrição motivacional e clara do que será aprendido",
  "activities": [
    {
      "id": 1,
      "title": "Título específico da atividade",
      "description": "Descrição detalhada do que será feito",
      "technique": "Técnica Pomodoro|Revisão Espaçada|Aprendizagem Ativa|Mapa Mental",
      "duration": "Tempo estimado (ex: 45 minutos)",
      "difficulty": "Fácil|Médio|Difícil",
      "content": "Conteúdo específico e detalhado para estudar, incluindo tópicos, conceitos chave, exercícios sugeridos e materiais de apoio.",
      "exercises": "Lista de 3-5 exercícios práticos específicos relacionados ao conteúdo"
    }
  ]
}"#;

/// Build the full instruction prompt for a validated request.
pub fn build_prompt(request: &PlanRequest) -> String {
    let mut prompt = String::with_capacity(2048);

    prompt.push_str(&format!(
        "Crie um plano de estudos detalhado e estruturado para: {:?}.\n\n",
        request.subject
    ));

    prompt.push_str("INFORMAÇÕES DO USUÁRIO:\n");
    prompt.push_str(&format!(
        "- Tempo disponível por dia: {}\n",
        request.daily_time
    ));
    prompt.push_str(&format!("- Nível de dedicação: {}\n\n", request.dedication));

    prompt.push_str("INSTRUÇÕES PARA O PLANO:\n");
    prompt.push_str("1. Crie um título descritivo para o plano\n");
    prompt.push_str("2. Faça uma descrição motivacional do plano\n");
    prompt.push_str("3. Gere entre 8-12 atividades progressivas e específicas\n");
    prompt.push_str("4. Cada atividade deve ter conteúdo real e prático\n");
    prompt.push_str("5. Distribua técnicas de estudo cientificamente comprovadas\n");
    prompt.push_str("6. Adapte a dificuldade ao nível de dedicação informado\n\n");

    prompt.push_str("RESPONDA APENAS COM UM JSON VÁLIDO NO SEGUINTE FORMATO:\n");
    prompt.push_str(SHAPE_REFERENCE);
    prompt.push_str("\n\nIMPORTANTE: Seja muito específico sobre ");
    prompt.push_str(&request.subject);
    prompt.push_str(". O conteúdo deve ser útil, prático e realmente ensinar sobre o tema solicitado.");

    prompt
}
