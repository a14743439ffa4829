use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "difficulty_enum")]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[sea_orm(string_value = "easy")]
    Easy,
    #[sea_orm(string_value = "medium")]
    Medium,
    #[sea_orm(string_value = "hard")]
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Easy
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", s)
    }
}

/// One literal input/expected-output pair of a problem.
///
/// Both fields are textual literal expressions: `input` is a comma-separated
/// argument list (e.g. `"[2,7,11,15], 9"`), `output` a single expected value
/// (e.g. `"[0,1]"`). Parsing happens at grading time so a corrupt definition
/// is reported instead of silently defaulted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    pub input: String,
    pub output: String,
}

/// Coding problem model representing the `problems` table.
///
/// Immutable reference data: rows are created by the seeder and only read
/// during grading.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "problems")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub title: String,
    /// URL-safe unique identifier used by the problem provider.
    pub slug: String,
    pub difficulty: Difficulty,
    /// Problem statement, markdown.
    pub description: String,
    /// JSON-encoded ordered list of [`TestCase`] definitions.
    pub test_cases: String,
    /// Skeleton shown to the candidate before they start typing.
    pub starter_code: String,
    /// JSON-encoded list of hint strings.
    pub hints: Option<String>,
    /// Reference solution, shown after an accepted submission.
    pub solution: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::submission::Entity")]
    Submission,
}

impl Related<super::submission::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Submission.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Create a new problem. `test_cases` and `hints` are stored JSON-encoded.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DatabaseConnection,
        title: &str,
        slug: &str,
        difficulty: Difficulty,
        description: &str,
        test_cases: &[TestCase],
        starter_code: &str,
        hints: &[String],
        solution: Option<&str>,
    ) -> Result<Self, DbErr> {
        let encoded_cases = serde_json::to_string(test_cases)
            .map_err(|e| DbErr::Custom(format!("Failed to encode test cases: {e}")))?;
        let encoded_hints = if hints.is_empty() {
            None
        } else {
            Some(
                serde_json::to_string(hints)
                    .map_err(|e| DbErr::Custom(format!("Failed to encode hints: {e}")))?,
            )
        };

        let active = ActiveModel {
            title: Set(title.to_string()),
            slug: Set(slug.to_string()),
            difficulty: Set(difficulty),
            description: Set(description.to_string()),
            test_cases: Set(encoded_cases),
            starter_code: Set(starter_code.to_string()),
            hints: Set(encoded_hints),
            solution: Set(solution.map(|s| s.to_string())),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        active.insert(db).await
    }

    /// Get a problem by its ID.
    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// The problem provider's lookup: get a problem by slug.
    pub async fn get_by_slug(db: &DatabaseConnection, slug: &str) -> Result<Option<Self>, DbErr> {
        Entity::find().filter(Column::Slug.eq(slug)).one(db).await
    }

    /// Decode the stored test-case definitions.
    ///
    /// A malformed column is a data-integrity error for any grading run that
    /// depends on this problem, so the error is surfaced rather than mapped
    /// to an empty list.
    pub fn test_cases(&self) -> Result<Vec<TestCase>, serde_json::Error> {
        serde_json::from_str(&self.test_cases)
    }

    /// Decode the stored hints; hints are advisory, so a missing or
    /// malformed column just reads as no hints.
    pub fn hints(&self) -> Vec<String> {
        self.hints
            .as_deref()
            .and_then(|s| serde_json::from_str(s).ok())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::setup_test_db;

    fn sample_cases() -> Vec<TestCase> {
        vec![
            TestCase {
                input: "[2,7,11,15], 9".into(),
                output: "[0,1]".into(),
            },
            TestCase {
                input: "[3,3], 6".into(),
                output: "[0,1]".into(),
            },
        ]
    }

    #[tokio::test]
    async fn test_create_and_get_by_slug() {
        let db = setup_test_db().await;

        let created = Model::create(
            &db,
            "Two Sum",
            "two-sum",
            Difficulty::Easy,
            "Find two numbers adding to target.",
            &sample_cases(),
            "const twoSum = (nums, target) => {\n};\n",
            &["Try a hash map.".to_string()],
            None,
        )
        .await
        .expect("create should succeed");

        let fetched = Model::get_by_slug(&db, "two-sum")
            .await
            .expect("query should succeed")
            .expect("problem should exist");

        assert_eq!(fetched.id, created.id);
        assert_eq!(fetched.difficulty, Difficulty::Easy);
        assert_eq!(fetched.test_cases().unwrap(), sample_cases());
        assert_eq!(fetched.hints(), vec!["Try a hash map.".to_string()]);
    }

    #[tokio::test]
    async fn test_corrupt_test_cases_column_is_an_error() {
        let model = Model {
            id: 1,
            title: "Broken".into(),
            slug: "broken".into(),
            difficulty: Difficulty::Easy,
            description: String::new(),
            test_cases: "not json".into(),
            starter_code: String::new(),
            hints: None,
            solution: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        assert!(model.test_cases().is_err());
        assert!(model.hints().is_empty());
    }

    #[tokio::test]
    async fn test_get_by_slug_missing() {
        let db = setup_test_db().await;
        let fetched = Model::get_by_slug(&db, "does-not-exist").await.unwrap();
        assert!(fetched.is_none());
    }
}
