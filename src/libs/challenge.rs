//! Canned challenge templates and random selection.
//!
//! The catalog is static and non-empty, so selection never fails.
//!
//! ```rust
//! use cboard::libs::challenge::{get_random_challenge, CHALLENGES};
//!
//! let challenge = get_random_challenge();
//! assert!(CHALLENGES.iter().any(|c| c.title == challenge.title));
//! ```

use super::task::{generate_id, Column, Difficulty, Task};
use chrono::Utc;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Challenge {
    pub title: &'static str,
    pub description: &'static str,
    pub difficulty: Difficulty,
    pub category: &'static str,
    /// Rough time estimate as shown to the user.
    pub time: &'static str,
    pub xp: u32,
}

impl Challenge {
    /// Builds a fresh `todo` task carrying this template's fields.
    pub fn to_task(&self) -> Task {
        Task {
            id: generate_id(),
            text: self.title.to_string(),
            column: Column::Todo,
            created_at: Utc::now().timestamp_millis(),
            description: Some(self.description.to_string()),
            difficulty: Some(self.difficulty),
            category: Some(self.category.to_string()),
            time: Some(self.time.to_string()),
            xp: Some(self.xp),
            is_challenge: true,
        }
    }
}

pub const CHALLENGES: &[Challenge] = &[
    Challenge {
        title: "Read for 30 minutes",
        description: "Pick up a book you have been meaning to finish and read without distractions.",
        difficulty: Difficulty::Easy,
        category: "Learning",
        time: "30 min",
        xp: 15,
    },
    Challenge {
        title: "Take a 20 minute walk",
        description: "Step outside and walk at a brisk pace. Leave the phone in your pocket.",
        difficulty: Difficulty::Easy,
        category: "Health",
        time: "20 min",
        xp: 10,
    },
    Challenge {
        title: "Drink 8 glasses of water",
        description: "Keep a bottle nearby and track every glass through the day.",
        difficulty: Difficulty::Easy,
        category: "Health",
        time: "All day",
        xp: 10,
    },
    Challenge {
        title: "Write a journal entry",
        description: "Write one page about what went well today and what you would change.",
        difficulty: Difficulty::Easy,
        category: "Mindfulness",
        time: "15 min",
        xp: 10,
    },
    Challenge {
        title: "Meditate for 10 minutes",
        description: "Sit comfortably, focus on your breath and let thoughts pass.",
        difficulty: Difficulty::Easy,
        category: "Mindfulness",
        time: "10 min",
        xp: 10,
    },
    Challenge {
        title: "Declutter one drawer",
        description: "Empty a drawer, throw away what you do not need and put the rest back neatly.",
        difficulty: Difficulty::Easy,
        category: "Home",
        time: "15 min",
        xp: 10,
    },
    Challenge {
        title: "Cook a new recipe",
        description: "Choose a dish you have never made and cook it from scratch.",
        difficulty: Difficulty::Medium,
        category: "Creativity",
        time: "1 hour",
        xp: 25,
    },
    Challenge {
        title: "Learn 10 words in a new language",
        description: "Pick a language and memorize ten useful words with their pronunciation.",
        difficulty: Difficulty::Medium,
        category: "Learning",
        time: "30 min",
        xp: 20,
    },
    Challenge {
        title: "Do a 30 minute workout",
        description: "Bodyweight circuit: squats, push-ups, lunges and planks.",
        difficulty: Difficulty::Medium,
        category: "Health",
        time: "30 min",
        xp: 25,
    },
    Challenge {
        title: "Reach out to an old friend",
        description: "Call or message someone you have not talked to in a while.",
        difficulty: Difficulty::Medium,
        category: "Social",
        time: "20 min",
        xp: 20,
    },
    Challenge {
        title: "Spend a day without social media",
        description: "Log out of every feed for a full day and notice how you use the time.",
        difficulty: Difficulty::Medium,
        category: "Mindfulness",
        time: "All day",
        xp: 30,
    },
    Challenge {
        title: "Sketch something around you",
        description: "Draw an object in your room. Accuracy does not matter, attention does.",
        difficulty: Difficulty::Medium,
        category: "Creativity",
        time: "30 min",
        xp: 20,
    },
    Challenge {
        title: "Write a short story",
        description: "Write a complete story of at least 500 words with a beginning, middle and end.",
        difficulty: Difficulty::Hard,
        category: "Creativity",
        time: "2 hours",
        xp: 50,
    },
    Challenge {
        title: "Run 5 kilometers",
        description: "Run or jog 5 km at your own pace without stopping.",
        difficulty: Difficulty::Hard,
        category: "Health",
        time: "45 min",
        xp: 50,
    },
    Challenge {
        title: "Build a small side project",
        description: "Ship something tiny end to end: a script, a web page or a tool you will use.",
        difficulty: Difficulty::Hard,
        category: "Learning",
        time: "3 hours",
        xp: 60,
    },
    Challenge {
        title: "Wake up at 6 AM for a week",
        description: "Set one alarm, get up on the first ring and keep it up for seven days.",
        difficulty: Difficulty::Hard,
        category: "Productivity",
        time: "1 week",
        xp: 75,
    },
];

/// Picks a catalog entry uniformly at random.
pub fn get_random_challenge() -> &'static Challenge {
    random_challenge_with(&mut rand::thread_rng())
}

/// Same as [`get_random_challenge`] with a caller-supplied random source.
pub fn random_challenge_with<R: Rng + ?Sized>(rng: &mut R) -> &'static Challenge {
    &CHALLENGES[rng.gen_range(0..CHALLENGES.len())]
}
