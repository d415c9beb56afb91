//! Deterministic fallback plan, used when the generation service cannot be
//! reached or its output cannot be parsed.

use quanttun_store::models::{Activity, Difficulty, StudyPlan};

use super::prompt::PlanRequest;

/// Build the 3-activity template plan for a request, interpolating the
/// subject into titles and content. Every activity starts not completed.
pub fn fallback_plan(request: &PlanRequest) -> StudyPlan {
    let subject = request.subject.trim();

    StudyPlan {
        title: format!("Plano de Estudos: {subject}"),
        description: format!(
            "Plano personalizado para dominar {subject} com {} diários",
            request.daily_time
        ),
        activities: vec![
            Activity {
                id: 1,
                title: format!("Fundamentos de {subject}"),
                description: "Estabelecer base sólida nos conceitos fundamentais".to_string(),
                technique: "Aprendizagem Ativa".to_string(),
                duration: "45 minutos".to_string(),
                difficulty: Difficulty::Facil,
                content: format!(
                    "Estudar os conceitos básicos e fundamentais de {subject}. Foque em \
                     compreender definições, princípios básicos e como eles se aplicam na \
                     prática. Faça resumos e mapas mentais dos principais tópicos."
                ),
                exercises: format!(
                    "1. Defina os 5 conceitos mais importantes de {subject}\n\
                     2. Crie um glossário com os termos técnicos\n\
                     3. Explique com suas palavras cada conceito\n\
                     4. Desenhe um mapa mental conectando os conceitos\n\
                     5. Faça 10 questões sobre os fundamentos"
                ),
                completed: false,
            },
            Activity {
                id: 2,
                title: format!("Prática Dirigida em {subject}"),
                description: "Aplicar conhecimentos através de exercícios práticos".to_string(),
                technique: "Técnica Pomodoro".to_string(),
                duration: "60 minutos".to_string(),
                difficulty: Difficulty::Medio,
                content: format!(
                    "Resolver exercícios práticos e problemas reais relacionados a {subject}. \
                     Use a técnica Pomodoro: 25 min de estudo focado + 5 min de pausa. \
                     Concentre-se em aplicar os conceitos aprendidos."
                ),
                exercises: "1. Resolva 10 exercícios básicos sobre o tema\n\
                            2. Explique o raciocínio de cada resolução\n\
                            3. Identifique padrões nas soluções\n\
                            4. Crie 3 exercícios similares\n\
                            5. Teste seus exercícios"
                    .to_string(),
                completed: false,
            },
            Activity {
                id: 3,
                title: "Revisão e Aprofundamento".to_string(),
                description: "Consolidar conhecimento e explorar tópicos avançados".to_string(),
                technique: "Revisão Espaçada".to_string(),
                duration: "40 minutos".to_string(),
                difficulty: Difficulty::Medio,
                content: format!(
                    "Revisar todo o conteúdo estudado anteriormente e explorar aspectos mais \
                     avançados de {subject}. Use técnicas de revisão espaçada para fixar o \
                     conhecimento a longo prazo."
                ),
                exercises: "1. Faça um resumo completo do que aprendeu\n\
                            2. Identifique suas principais dificuldades\n\
                            3. Busque materiais complementares sobre os pontos difíceis\n\
                            4. Explique o conteúdo para alguém ou grave um vídeo\n\
                            5. Faça um teste simulado"
                    .to_string(),
                completed: false,
            },
        ],
    }
}
