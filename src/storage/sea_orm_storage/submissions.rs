//! 提交与评分存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::entity::users::{Column as UserColumn, Entity as Users};
use crate::errors::{LmsError, Result};
use crate::models::submissions::{
    entities::{Submission, SubmissionWorkflowState},
    requests::{CreateSubmissionRequest, GradeSubmissionRequest},
    responses::{SubmissionCreator, SubmissionListItem},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect,
    RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 创建提交（attempt 取该用户在该作业下的最大值加一）
    ///
    /// (assignment, user, attempt) 唯一索引兜底：并发提交撞号时
    /// 后到的插入失败，而不是悄悄覆盖。
    pub async fn create_submission_impl(
        &self,
        assignment_id: i64,
        user_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        // 查询当前最大 attempt
        let max_attempt = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::UserId.eq(user_id))
            .select_only()
            .column_as(Column::Attempt.max(), "max_attempt")
            .into_tuple::<Option<i32>>()
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询最大尝试次数失败: {e}")))?
            .flatten()
            .unwrap_or(0);

        let model = ActiveModel {
            assignment_id: Set(assignment_id),
            user_id: Set(user_id),
            attempt: Set(max_attempt + 1),
            body: Set(submission.body),
            url: Set(submission.url),
            attachment: Set(submission.attachment),
            submitted_at: Set(Some(now)),
            workflow_state: Set(SubmissionWorkflowState::SUBMITTED.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建提交失败: {e}")))?;

        Ok(result.into_submission())
    }

    /// 通过 ID 获取提交
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 获取用户对某作业的最新提交
    pub async fn get_latest_submission_impl(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::UserId.eq(user_id))
            .order_by_desc(Column::Attempt)
            .order_by_desc(Column::SubmittedAt)
            .order_by_desc(Column::Id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询最新提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    /// 作业的全部提交（教师视图），按 (用户名, attempt) 排序
    pub async fn list_submissions_for_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<SubmissionListItem>> {
        let rows = Submissions::find()
            .find_also_related(Users)
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(UserColumn::Username)
            .order_by_asc(Column::Attempt)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(rows
            .into_iter()
            .map(|(submission, user)| {
                let user_id = submission.user_id;
                SubmissionListItem {
                    submission: submission.into_submission(),
                    creator: match user {
                        Some(u) => SubmissionCreator {
                            id: u.id,
                            username: u.username,
                            full_name: u.full_name,
                        },
                        None => SubmissionCreator {
                            id: user_id,
                            username: "unknown".to_string(),
                            full_name: None,
                        },
                    },
                }
            })
            .collect())
    }

    /// 评分导航序：按 (用户名, 提交 id) 的全量提交
    pub async fn list_submissions_for_grading_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let rows = Submissions::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::submissions::Relation::User.def(),
            )
            .filter(Column::AssignmentId.eq(assignment_id))
            .order_by_asc(UserColumn::Username)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询评分序列失败: {e}")))?;

        Ok(rows.into_iter().map(|m| m.into_submission()).collect())
    }

    /// 写入评分并置为 graded
    pub async fn grade_submission_impl(
        &self,
        submission_id: i64,
        grade: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        let existing = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询提交失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let model = ActiveModel {
            id: Set(submission_id),
            score: Set(grade.score),
            grade: Set(grade.grade),
            feedback: Set(grade.feedback),
            workflow_state: Set(SubmissionWorkflowState::GRADED.to_string()),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("写入评分失败: {e}")))?;

        Ok(Some(result.into_submission()))
    }
}
