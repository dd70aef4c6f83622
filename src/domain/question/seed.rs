//! Default questions inserted on first launch.

use crate::domain::foundation::{DomainError, QuestionId, Rating, Timestamp};

use super::{Question, Role};

/// First id used for mentor seed questions.
pub const MENTOR_SEED_BASE_ID: i64 = 1000;

/// First id used for learner seed questions.
pub const LEARNER_SEED_BASE_ID: i64 = 2000;

/// Starting rating given to every seed question.
pub const SEED_RATING: f64 = 3.0;

/// Questions a mentor can open a conversation with.
pub const MENTOR_SEEDS: [&str; 15] = [
    "What are you hoping to get out of our time together?",
    "What did you learn this week that surprised you?",
    "Which part of your current project feels hardest right now?",
    "When do you feel most productive during the day?",
    "What is one skill you want to be noticeably better at in three months?",
    "Tell me about a recent mistake and what it taught you.",
    "Who do you ask for help when you are stuck?",
    "What does a good day of work look like for you?",
    "Which feedback have you received recently that stuck with you?",
    "What would you build if you had a free week?",
    "How do you decide what to work on first?",
    "What is something you explained to someone else recently?",
    "Which topic do you avoid because it feels intimidating?",
    "How do you know when something you made is finished?",
    "What should we talk about next time?",
];

/// Questions a learner can bring to a mentor.
pub const LEARNER_SEEDS: [&str; 15] = [
    "How did you get started in this field?",
    "What do you wish someone had told you in your first year?",
    "How do you keep learning while working full time?",
    "What was the hardest problem you ever solved?",
    "How do you handle disagreement with a teammate?",
    "Which habits made the biggest difference in your career?",
    "How do you decide which new tools are worth learning?",
    "What does your review process look like for your own work?",
    "How do you recover from a project that went badly?",
    "What is a book or talk that changed how you work?",
    "How do you plan your week?",
    "When did you last feel like a beginner again?",
    "How do you give feedback without discouraging people?",
    "What would you do differently if you started over today?",
    "What should I focus on before our next session?",
];

/// Builds the full default catalogue: mentor seeds then learner seeds.
///
/// Seed dates are spaced one second apart, ending at `now`, so that date
/// sorting over a fresh deck is deterministic.
pub fn default_questions(now: Timestamp) -> Result<Vec<Question>, DomainError> {
    let rating = Rating::new(SEED_RATING)?;
    let total = (MENTOR_SEEDS.len() + LEARNER_SEEDS.len()) as i64;

    let mentor = MENTOR_SEEDS
        .iter()
        .enumerate()
        .map(|(i, content)| (Role::Mentor, MENTOR_SEED_BASE_ID + i as i64, *content));
    let learner = LEARNER_SEEDS
        .iter()
        .enumerate()
        .map(|(i, content)| (Role::Learner, LEARNER_SEED_BASE_ID + i as i64, *content));

    mentor
        .chain(learner)
        .enumerate()
        .map(|(position, (role, id, content))| {
            Question::seeded(
                QuestionId::new(id),
                role,
                content,
                vec![rating],
                now.plus_secs(position as i64 + 1 - total),
            )
        })
        .collect()
}
