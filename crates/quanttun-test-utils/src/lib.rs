//! Shared fixtures for quanttun integration tests: sample routes, canned
//! endpoint responses, and pre-seeded in-memory stores.

use chrono::Utc;

use quanttun_store::models::{Activity, Difficulty, StudyPlan, StudyRoute, User};
use quanttun_store::queries::{routes, users};
use quanttun_store::storage::MemoryStorage;

/// A plausible endpoint response: prose around a valid plan JSON object.
pub const PLAN_RESPONSE: &str = r#"Claro! Aqui está seu plano de estudos:

{
  "title": "Plano de Estudos: Rust",
  "description": "Do zero ao ownership em duas semanas",
  "activities": [
    {
      "id": 1,
      "title": "Fundamentos de Rust",
      "description": "Sintaxe básica e ferramentas",
      "technique": "Aprendizagem Ativa",
      "duration": "45 minutos",
      "difficulty": "Fácil",
      "content": "Instale o toolchain e percorra os capítulos iniciais do livro.",
      "exercises": "1. Escreva um hello world\n2. Use cargo new"
    },
    {
      "id": 2,
      "title": "Ownership e Borrowing",
      "description": "O modelo de memória de Rust",
      "technique": "Técnica Pomodoro",
      "duration": "60 minutos",
      "difficulty": "Médio",
      "content": "Estude moves, borrows e lifetimes com exemplos.",
      "exercises": "1. Corrija 5 erros de borrow checker"
    },
    {
      "id": 3,
      "title": "Traits e Generics",
      "description": "Abstração em Rust",
      "technique": "Revisão Espaçada",
      "duration": "60 minutos",
      "difficulty": "Difícil",
      "content": "Implemente traits padrão para um tipo próprio."
    }
  ]
}

Bons estudos!"#;

/// Build an activity with the given id, title, and difficulty.
pub fn activity(id: u32, title: &str, difficulty: Difficulty) -> Activity {
    Activity {
        id,
        title: title.to_string(),
        description: format!("Descrição de {title}"),
        technique: "Aprendizagem Ativa".to_string(),
        duration: "45 minutos".to_string(),
        difficulty,
        content: format!("Conteúdo de {title}"),
        exercises: format!("Exercícios de {title}"),
        completed: false,
    }
}

/// Build a route with three activities covering every difficulty tier.
pub fn sample_route(id: &str, subject: &str) -> StudyRoute {
    let activities = vec![
        activity(1, &format!("Fundamentos de {subject}"), Difficulty::Facil),
        activity(2, &format!("Prática em {subject}"), Difficulty::Medio),
        activity(3, "Revisão e Aprofundamento", Difficulty::Dificil),
    ];
    StudyRoute {
        id: id.to_string(),
        title: format!("Plano de Estudos: {subject}"),
        subject: subject.to_string(),
        daily_time: "1 hora".to_string(),
        dedication: "alto".to_string(),
        activities: activities.len() as u32,
        completed_activities: 0,
        created_at: Utc::now(),
        study_plan: StudyPlan {
            title: format!("Plano de Estudos: {subject}"),
            description: format!("Plano personalizado de {subject}"),
            activities,
        },
    }
}

/// A fresh user with zero points.
pub fn sample_user() -> User {
    User {
        id: "1".to_string(),
        name: "Estudante".to_string(),
        email: "estudante@example.com".to_string(),
        points: 0,
    }
}

/// In-memory store pre-seeded with the given routes and a fresh user.
pub fn seeded_storage(seed_routes: &[StudyRoute]) -> MemoryStorage {
    let storage = MemoryStorage::new();
    routes::save_routes(&storage, seed_routes).expect("seeding routes");
    users::save_user(&storage, &sample_user()).expect("seeding user");
    storage
}
