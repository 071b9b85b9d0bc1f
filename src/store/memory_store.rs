use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex, MutexGuard},
};

use async_trait::async_trait;

use crate::{
    category::models::{Category, CategorySelector},
    question::models::{NewQuestion, Question},
    store::{CategoryRegistry, QuestionStore, StoreError},
};

#[derive(Debug, Default)]
struct Tables {
    categories: BTreeMap<i32, Category>,
    questions: BTreeMap<i32, Question>,
    next_question_id: i32,
}

/// Store kept in process memory, ordered by id like the Postgres queries.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_categories<'a, I>(labels: I) -> Self
    where
        I: IntoIterator<Item = (i32, &'a str)>,
    {
        let store = Self::new();
        {
            let mut tables = store.tables.lock().unwrap_or_else(|e| e.into_inner());
            for (id, label) in labels {
                tables.categories.insert(
                    id,
                    Category {
                        id,
                        label: label.to_string(),
                    },
                );
            }
        }

        store
    }

    fn lock(&self) -> Result<MutexGuard<'_, Tables>, StoreError> {
        self.tables
            .lock()
            .map_err(|e| StoreError::Poisoned(e.to_string()))
    }
}

#[async_trait]
impl QuestionStore for InMemoryStore {
    async fn list_by_category(
        &self,
        selector: CategorySelector,
    ) -> Result<Vec<Question>, StoreError> {
        let tables = self.lock()?;
        let questions = tables
            .questions
            .values()
            .filter(|q| selector.matches(q.category))
            .cloned()
            .collect();

        Ok(questions)
    }

    async fn get(&self, question_id: i32) -> Result<Option<Question>, StoreError> {
        let tables = self.lock()?;
        Ok(tables.questions.get(&question_id).cloned())
    }

    async fn delete(&self, question_id: i32) -> Result<(), StoreError> {
        let mut tables = self.lock()?;
        tables
            .questions
            .remove(&question_id)
            .map(|_| ())
            .ok_or_else(|| {
                StoreError::NotFound(format!("Question with id {} does not exist", question_id))
            })
    }

    async fn insert(&self, new_question: NewQuestion) -> Result<Question, StoreError> {
        let mut tables = self.lock()?;
        if !tables.categories.contains_key(&new_question.category) {
            return Err(StoreError::NotFound(format!(
                "Category with id {} does not exist",
                new_question.category
            )));
        }

        tables.next_question_id += 1;
        let question = Question {
            id: tables.next_question_id,
            question: new_question.question,
            answer: new_question.answer,
            category: new_question.category,
            difficulty: new_question.difficulty,
        };
        tables.questions.insert(question.id, question.clone());

        Ok(question)
    }

    async fn page(&self, offset: i64, limit: i64) -> Result<(Vec<Question>, i64), StoreError> {
        let tables = self.lock()?;
        let total = tables.questions.len() as i64;
        let questions = tables
            .questions
            .values()
            .skip(offset.max(0) as usize)
            .take(limit.max(0) as usize)
            .cloned()
            .collect();

        Ok((questions, total))
    }

    async fn count(&self) -> Result<i64, StoreError> {
        let tables = self.lock()?;
        Ok(tables.questions.len() as i64)
    }

    async fn search(&self, term: &str) -> Result<Vec<Question>, StoreError> {
        let needle = term.to_lowercase();
        let tables = self.lock()?;
        let questions = tables
            .questions
            .values()
            .filter(|q| q.question.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        Ok(questions)
    }

    async fn ping(&self) -> Result<(), StoreError> {
        self.lock().map(|_| ())
    }
}

#[async_trait]
impl CategoryRegistry for InMemoryStore {
    async fn get(&self, category_id: i32) -> Result<Option<Category>, StoreError> {
        let tables = self.lock()?;
        Ok(tables.categories.get(&category_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Category>, StoreError> {
        let tables = self.lock()?;
        Ok(tables.categories.values().cloned().collect())
    }
}
