//! 测验实体（与作业 1:1）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "quizzes")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(unique)]
    pub assignment_id: i64,
    pub time_limit_minutes: Option<i32>,
    pub allowed_attempts: i32,
    pub shuffle_answers: bool,
    pub quiz_type: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(has_many = "super::questions::Entity")]
    Questions,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Questions.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_quiz(self) -> crate::models::quizzes::entities::Quiz {
        use crate::models::quizzes::entities::{Quiz, QuizType};

        Quiz {
            id: self.id,
            assignment_id: self.assignment_id,
            time_limit_minutes: self.time_limit_minutes,
            allowed_attempts: self.allowed_attempts,
            shuffle_answers: self.shuffle_answers,
            quiz_type: self
                .quiz_type
                .parse::<QuizType>()
                .unwrap_or(QuizType::GradedQuiz),
        }
    }
}
