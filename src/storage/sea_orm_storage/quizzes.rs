//! 测验存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::choices::{
    ActiveModel as ChoiceActiveModel, Column as ChoiceColumn, Entity as Choices,
};
use crate::entity::questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as Questions,
};
use crate::entity::quiz_attempts::{
    ActiveModel as QuizAttemptActiveModel, Column as QuizAttemptColumn, Entity as QuizAttempts,
};
use crate::entity::quizzes::{ActiveModel, Column, Entity as Quizzes};
use crate::entity::student_answers::{
    ActiveModel as StudentAnswerActiveModel, Column as StudentAnswerColumn,
    Entity as StudentAnswers,
};
use crate::errors::{LmsError, Result};
use crate::models::quizzes::{
    entities::{Choice, Question, QuestionType, Quiz, QuizAttempt, QuizType, StudentAnswer},
    requests::{
        CreateChoiceRequest, CreateQuestionRequest, CreateQuizRequest, SaveAnswerRequest,
        UpdateQuizRequest,
    },
    responses::QuestionWithChoices,
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建测验配置；一个作业只允许一份配置
    pub async fn create_quiz_impl(&self, quiz: CreateQuizRequest) -> Result<Quiz> {
        if self
            .get_quiz_by_assignment_id_impl(quiz.assignment_id)
            .await?
            .is_some()
        {
            return Err(LmsError::conflict("该作业已配置测验"));
        }

        let model = ActiveModel {
            assignment_id: Set(quiz.assignment_id),
            time_limit_minutes: Set(quiz.time_limit_minutes),
            allowed_attempts: Set(quiz.allowed_attempts),
            shuffle_answers: Set(quiz.shuffle_answers),
            quiz_type: Set(quiz.quiz_type.unwrap_or(QuizType::GradedQuiz).to_string()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建测验失败: {e}")))?;

        Ok(result.into_quiz())
    }

    /// 通过 ID 获取测验
    pub async fn get_quiz_by_id_impl(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        let result = Quizzes::find_by_id(quiz_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz()))
    }

    /// 通过作业 ID 获取测验
    pub async fn get_quiz_by_assignment_id_impl(&self, assignment_id: i64) -> Result<Option<Quiz>> {
        let result = Quizzes::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz()))
    }

    /// 更新测验配置
    pub async fn update_quiz_impl(
        &self,
        quiz_id: i64,
        update: UpdateQuizRequest,
    ) -> Result<Option<Quiz>> {
        let existing = Quizzes::find_by_id(quiz_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询测验失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(quiz_id),
            ..Default::default()
        };

        if let Some(time_limit_minutes) = update.time_limit_minutes {
            model.time_limit_minutes = Set(Some(time_limit_minutes));
        }
        if let Some(allowed_attempts) = update.allowed_attempts {
            model.allowed_attempts = Set(allowed_attempts);
        }
        if let Some(shuffle_answers) = update.shuffle_answers {
            model.shuffle_answers = Set(shuffle_answers);
        }
        if let Some(quiz_type) = update.quiz_type {
            model.quiz_type = Set(quiz_type.to_string());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新测验失败: {e}")))?;

        Ok(Some(result.into_quiz()))
    }

    /// 删除测验（题目与选项级联删除）
    pub async fn delete_quiz_impl(&self, quiz_id: i64) -> Result<bool> {
        let result = Quizzes::delete_by_id(quiz_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除测验失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建题目
    pub async fn create_question_impl(
        &self,
        quiz_id: i64,
        question: CreateQuestionRequest,
    ) -> Result<Question> {
        let model = QuestionActiveModel {
            quiz_id: Set(quiz_id),
            question_text: Set(question.question_text),
            question_type: Set(question
                .question_type
                .unwrap_or(QuestionType::MultipleChoice)
                .to_string()),
            points: Set(question.points),
            position: Set(question.position),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建题目失败: {e}")))?;

        Ok(result.into_question())
    }

    /// 通过 ID 获取题目
    pub async fn get_question_by_id_impl(&self, question_id: i64) -> Result<Option<Question>> {
        let result = Questions::find_by_id(question_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询题目失败: {e}")))?;

        Ok(result.map(|m| m.into_question()))
    }

    /// 测验的全部题目（含选项），按 (position, id) 排序
    pub async fn list_questions_with_choices_impl(
        &self,
        quiz_id: i64,
    ) -> Result<Vec<QuestionWithChoices>> {
        let questions = Questions::find()
            .filter(QuestionColumn::QuizId.eq(quiz_id))
            .order_by_asc(QuestionColumn::Position)
            .order_by_asc(QuestionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询题目列表失败: {e}")))?;

        if questions.is_empty() {
            return Ok(vec![]);
        }

        let question_ids: Vec<i64> = questions.iter().map(|q| q.id).collect();

        let choices = Choices::find()
            .filter(ChoiceColumn::QuestionId.is_in(question_ids))
            .order_by_asc(ChoiceColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选项列表失败: {e}")))?;

        let mut choices_by_question: HashMap<i64, Vec<Choice>> = HashMap::new();
        for choice in choices {
            choices_by_question
                .entry(choice.question_id)
                .or_default()
                .push(choice.into_choice());
        }

        Ok(questions
            .into_iter()
            .map(|q| {
                let question_id = q.id;
                QuestionWithChoices {
                    question: q.into_question(),
                    choices: choices_by_question.remove(&question_id).unwrap_or_default(),
                }
            })
            .collect())
    }

    /// 删除题目
    pub async fn delete_question_impl(&self, question_id: i64) -> Result<bool> {
        let result = Questions::delete_by_id(question_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除题目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建选项
    pub async fn create_choice_impl(
        &self,
        question_id: i64,
        choice: CreateChoiceRequest,
    ) -> Result<Choice> {
        let model = ChoiceActiveModel {
            question_id: Set(question_id),
            text: Set(choice.text),
            is_correct: Set(choice.is_correct),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建选项失败: {e}")))?;

        Ok(result.into_choice())
    }

    /// 删除选项
    pub async fn delete_choice_impl(&self, choice_id: i64) -> Result<bool> {
        let result = Choices::delete_by_id(choice_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除选项失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 为提交创建作答记录；一个提交只能对应一次作答
    pub async fn create_quiz_attempt_impl(&self, submission_id: i64) -> Result<QuizAttempt> {
        let existing = QuizAttempts::find()
            .filter(QuizAttemptColumn::SubmissionId.eq(submission_id))
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作答记录失败: {e}")))?;

        if existing > 0 {
            return Err(LmsError::conflict("该提交已有作答记录"));
        }

        let model = QuizAttemptActiveModel {
            submission_id: Set(submission_id),
            started_at: Set(Some(chrono::Utc::now().timestamp())),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建作答记录失败: {e}")))?;

        Ok(result.into_quiz_attempt())
    }

    /// 通过 ID 获取作答记录
    pub async fn get_quiz_attempt_by_id_impl(&self, attempt_id: i64) -> Result<Option<QuizAttempt>> {
        let result = QuizAttempts::find_by_id(attempt_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作答记录失败: {e}")))?;

        Ok(result.map(|m| m.into_quiz_attempt()))
    }

    /// 结束作答：写入完成时间
    pub async fn finish_quiz_attempt_impl(&self, attempt_id: i64) -> Result<Option<QuizAttempt>> {
        let existing = QuizAttempts::find_by_id(attempt_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作答记录失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = QuizAttemptActiveModel {
            id: Set(attempt_id),
            finished_at: Set(Some(chrono::Utc::now().timestamp())),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新作答记录失败: {e}")))?;

        Ok(Some(result.into_quiz_attempt()))
    }

    /// 保存单题答案；同一题重复保存时覆盖旧答案
    pub async fn save_student_answer_impl(
        &self,
        attempt_id: i64,
        answer: SaveAnswerRequest,
    ) -> Result<StudentAnswer> {
        let existing = StudentAnswers::find()
            .filter(
                Condition::all()
                    .add(StudentAnswerColumn::AttemptId.eq(attempt_id))
                    .add(StudentAnswerColumn::QuestionId.eq(answer.question_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询答案失败: {e}")))?;

        let result = match existing {
            Some(row) => {
                let model = StudentAnswerActiveModel {
                    id: Set(row.id),
                    selected_choice_id: Set(answer.selected_choice_id),
                    text_response: Set(answer.text_response),
                    ..Default::default()
                };
                model
                    .update(&self.db)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("更新答案失败: {e}")))?
            }
            None => {
                let model = StudentAnswerActiveModel {
                    attempt_id: Set(attempt_id),
                    question_id: Set(answer.question_id),
                    selected_choice_id: Set(answer.selected_choice_id),
                    text_response: Set(answer.text_response),
                    ..Default::default()
                };
                model
                    .insert(&self.db)
                    .await
                    .map_err(|e| LmsError::database_operation(format!("保存答案失败: {e}")))?
            }
        };

        Ok(result.into_student_answer())
    }

    /// 作答记录的全部答案，按题目顺序
    pub async fn list_answers_by_attempt_impl(&self, attempt_id: i64) -> Result<Vec<StudentAnswer>> {
        let results = StudentAnswers::find()
            .filter(StudentAnswerColumn::AttemptId.eq(attempt_id))
            .order_by_asc(StudentAnswerColumn::QuestionId)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询答案列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_student_answer()).collect())
    }
}
