use std::collections::HashSet;

use rand::{Rng, seq::IndexedRandom};
use tracing::debug;

use crate::{
    category::models::CategorySelector,
    question::models::Question,
    quiz::models::QuizTurn,
    store::{CategoryRegistry, QuestionStore, StoreError},
};

/// Picks the next unseen question of a quiz session.
///
/// The engine holds no session state. A session is fully described by the
/// ids the caller has already been served, so every call rebuilds it from
/// its inputs: it is over once `max_turns` ids have been served or no
/// unseen question is left in the selected category.
#[derive(Debug, Clone)]
pub struct QuizEngine {
    max_turns: usize,
}

impl QuizEngine {
    pub fn new(max_turns: usize) -> Self {
        Self { max_turns }
    }

    pub fn max_turns(&self) -> usize {
        self.max_turns
    }

    /// Reads candidates from the stores and draws one of them with the
    /// thread local rng. Never writes to either store.
    pub async fn next_question(
        &self,
        questions: &dyn QuestionStore,
        categories: &dyn CategoryRegistry,
        previous_questions: &[i32],
        selector: CategorySelector,
    ) -> Result<QuizTurn, StoreError> {
        let turn_count = previous_questions.len();
        if turn_count >= self.max_turns {
            debug!("Quiz session reached {} turns", turn_count);
            return Ok(QuizTurn::SessionEnd);
        }

        // Unknown categories end the session instead of failing the request
        if let CategorySelector::Category(category_id) = selector {
            if categories.get(category_id).await?.is_none() {
                debug!("Quiz requested for unknown category {}", category_id);
                return Ok(QuizTurn::SessionEnd);
            }
        }

        let candidates = questions.list_by_category(selector).await?;
        let mut rng = rand::rng();

        Ok(self.select(candidates, previous_questions, selector, &mut rng))
    }

    /// Draws uniformly from `candidates` minus `previous_questions`,
    /// restricted to `selector`.
    ///
    /// Usable on its own with any candidate list and rng, so it applies the
    /// turn cap and the category filter itself instead of trusting the
    /// caller. The rng is sampled once when the pool is non-empty and not
    /// at all when the session has ended.
    pub fn select<R>(
        &self,
        candidates: Vec<Question>,
        previous_questions: &[i32],
        selector: CategorySelector,
        rng: &mut R,
    ) -> QuizTurn
    where
        R: Rng + ?Sized,
    {
        if previous_questions.len() >= self.max_turns {
            return QuizTurn::SessionEnd;
        }

        let excluded: HashSet<i32> = previous_questions.iter().copied().collect();
        let pool: Vec<Question> = candidates
            .into_iter()
            .filter(|q| selector.matches(q.category) && !excluded.contains(&q.id))
            .collect();

        match pool.choose(rng) {
            Some(question) => {
                debug!(
                    "Serving question {} from a pool of {}",
                    question.id,
                    pool.len()
                );
                QuizTurn::Question(question.clone())
            }
            None => {
                debug!("Quiz pool exhausted after {} turns", previous_questions.len());
                QuizTurn::SessionEnd
            }
        }
    }
}
