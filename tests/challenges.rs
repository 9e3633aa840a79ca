#[cfg(test)]
mod tests {
    use cboard::libs::challenge::{get_random_challenge, random_challenge_with, CHALLENGES};
    use cboard::libs::task::Column;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_draws_only_catalog_titles() {
        let titles: HashSet<&str> = CHALLENGES.iter().map(|c| c.title).collect();
        for _ in 0..100 {
            assert!(titles.contains(get_random_challenge().title));
        }
    }

    #[test]
    fn test_seeded_draws_cover_catalog() {
        let mut rng = StdRng::seed_from_u64(42);
        let seen: HashSet<&str> = (0..2000).map(|_| random_challenge_with(&mut rng).title).collect();
        assert_eq!(seen.len(), CHALLENGES.len());
    }

    #[test]
    fn test_catalog_is_well_formed() {
        assert!(!CHALLENGES.is_empty());
        let titles: HashSet<&str> = CHALLENGES.iter().map(|c| c.title).collect();
        assert_eq!(titles.len(), CHALLENGES.len());
        for challenge in CHALLENGES {
            assert!(!challenge.title.is_empty());
            assert!(!challenge.description.is_empty());
            assert!(challenge.xp > 0);
        }
    }

    #[test]
    fn test_challenge_task_carries_template() {
        let challenge = &CHALLENGES[0];
        let task = challenge.to_task();

        assert_eq!(task.text, challenge.title);
        assert_eq!(task.column, Column::Todo);
        assert!(task.is_challenge);
        assert_eq!(task.xp, Some(challenge.xp));
        assert_eq!(task.difficulty, Some(challenge.difficulty));
        assert_eq!(task.category.as_deref(), Some(challenge.category));
        assert_eq!(task.time.as_deref(), Some(challenge.time));
        assert_eq!(task.description.as_deref(), Some(challenge.description));
        assert_ne!(task.id, challenge.to_task().id);
    }
}
