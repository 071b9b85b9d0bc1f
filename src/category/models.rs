use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Category {
    pub id: i32,
    #[sqlx(rename = "type")]
    #[serde(rename = "type")]
    pub label: String,
}

/// Category filter of a quiz request. Clients send id `0` for "all categories".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CategorySelector {
    Any,
    Category(i32),
}

impl CategorySelector {
    pub const ANY_ID: i32 = 0;

    pub fn from_id(id: i32) -> Self {
        match id {
            Self::ANY_ID => CategorySelector::Any,
            id => CategorySelector::Category(id),
        }
    }

    pub fn matches(&self, category_id: i32) -> bool {
        match self {
            CategorySelector::Any => true,
            CategorySelector::Category(id) => *id == category_id,
        }
    }
}
