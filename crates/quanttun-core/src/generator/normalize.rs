//! Post-generation normalization, applied to extracted and fallback plans
//! alike.

use quanttun_store::models::StudyPlan;

/// Normalize a plan in place:
/// - reassign every activity id to its 1-based sequence position,
/// - force `completed = false`,
/// - default a blank `exercises` field to a generated placeholder.
pub fn normalize_plan(plan: &mut StudyPlan) {
    for (index, activity) in plan.activities.iter_mut().enumerate() {
        activity.id = index as u32 + 1;
        activity.completed = false;
        if activity.exercises.trim().is_empty() {
            activity.exercises = format!("Exercícios práticos relacionados a {}", activity.title);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quanttun_store::models::Activity;

    fn activity(id: u32, title: &str) -> Activity {
        Activity {
            id,
            title: title.to_string(),
            description: String::new(),
            technique: String::new(),
            duration: String::new(),
            difficulty: Default::default(),
            content: String::new(),
            exercises: String::new(),
            completed: true,
        }
    }

    fn plan(activities: Vec<Activity>) -> StudyPlan {
        StudyPlan {
            title: "Plano".to_string(),
            description: String::new(),
            activities,
        }
    }

    #[test]
    fn ids_become_contiguous_from_one() {
        let mut p = plan(vec![
            activity(7, "a"),
            activity(7, "b"),
            activity(0, "c"),
        ]);
        normalize_plan(&mut p);
        let ids: Vec<u32> = p.activities.iter().map(|a| a.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn completed_is_forced_false() {
        let mut p = plan(vec![activity(1, "a")]);
        normalize_plan(&mut p);
        assert!(!p.activities[0].completed);
    }

    #[test]
    fn blank_exercises_get_placeholder() {
        let mut p = plan(vec![activity(1, "Fundamentos")]);
        normalize_plan(&mut p);
        assert_eq!(
            p.activities[0].exercises,
            "Exercícios práticos relacionados a Fundamentos"
        );
    }

    #[test]
    fn present_exercises_are_kept() {
        let mut p = plan(vec![activity(1, "a")]);
        p.activities[0].exercises = "1. Resolva".to_string();
        normalize_plan(&mut p);
        assert_eq!(p.activities[0].exercises, "1. Resolva");
    }

    #[test]
    fn empty_plan_is_a_no_op() {
        let mut p = plan(vec![]);
        normalize_plan(&mut p);
        assert!(p.activities.is_empty());
    }
}
