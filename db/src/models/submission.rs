use crate::models::{problem, user};
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
    Set,
};

/// Final status of a grading run. There is no partial-accept state: a
/// submission is accepted iff every test case of its problem passed.
#[derive(Clone, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum)]
#[sea_orm(
    rs_type = "String",
    db_type = "Enum",
    enum_name = "submission_status_enum"
)]
pub enum SubmissionStatus {
    #[sea_orm(string_value = "accepted")]
    Accepted,
    #[sea_orm(string_value = "failed")]
    Failed,
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status_str = match self {
            SubmissionStatus::Accepted => "accepted",
            SubmissionStatus::Failed => "failed",
        };
        write!(f, "{}", status_str)
    }
}

/// Represents a user's submission for a specific problem.
///
/// Rows are written once by the grader after an accepted run and never
/// mutated. `execution_time_ms` and `score` are caller-supplied metadata; the
/// grader does not measure or compute them.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    /// Primary key of the submission.
    #[sea_orm(primary_key)]
    pub id: i64,
    /// ID of the user who submitted the code.
    pub user_id: i64,
    /// ID of the problem the code was graded against.
    pub problem_id: i64,
    /// The submitted source text.
    pub code: String,
    /// Language identifier (e.g. "javascript").
    pub language: String,
    /// Final verdict of the grading run.
    pub status: SubmissionStatus,
    /// Opaque execution-time metadata from the caller.
    pub execution_time_ms: Option<i64>,
    /// Opaque score metadata from the caller.
    pub score: Option<i64>,
    /// Timestamp when the submission was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp when the submission was last updated.
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,

    #[sea_orm(
        belongs_to = "super::problem::Entity",
        from = "Column::ProblemId",
        to = "super::problem::Column::Id"
    )]
    Problem,
}

impl Related<user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<problem::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Problem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// The persistence collaborator's single operation: insert one
    /// submission row.
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        db: &DatabaseConnection,
        user_id: i64,
        problem_id: i64,
        code: &str,
        language: &str,
        status: SubmissionStatus,
        execution_time_ms: Option<i64>,
        score: Option<i64>,
    ) -> Result<Self, DbErr> {
        let active = ActiveModel {
            user_id: Set(user_id),
            problem_id: Set(problem_id),
            code: Set(code.to_string()),
            language: Set(language.to_string()),
            status: Set(status),
            execution_time_ms: Set(execution_time_ms),
            score: Set(score),
            created_at: Set(Utc::now()),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        active.insert(db).await
    }

    /// Get a submission by its ID.
    pub async fn get_by_id(db: &DatabaseConnection, id: i64) -> Result<Option<Self>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// All submissions one user made for one problem, newest first.
    pub async fn get_by_user_and_problem(
        db: &DatabaseConnection,
        user_id: i64,
        problem_id: i64,
    ) -> Result<Vec<Self>, DbErr> {
        Entity::find()
            .filter(Column::UserId.eq(user_id))
            .filter(Column::ProblemId.eq(problem_id))
            .order_by_desc(Column::CreatedAt)
            .all(db)
            .await
    }
}
