//! 作业存储操作

use super::SeaOrmStorage;
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::{LmsError, Result};
use crate::models::assignments::{
    entities::{Assignment, GradingType},
    requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

fn encode_submission_types(types: &[String]) -> Result<Option<String>> {
    if types.is_empty() {
        return Ok(None);
    }
    let raw = serde_json::to_string(types)
        .map_err(|e| LmsError::serialization(format!("序列化提交方式失败: {e}")))?;
    Ok(Some(raw))
}

impl SeaOrmStorage {
    /// 创建作业
    pub async fn create_assignment_impl(
        &self,
        course_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            course_id: Set(course_id),
            title: Set(assignment.title),
            description: Set(assignment.description),
            points_possible: Set(assignment.points_possible),
            due_at: Set(assignment.due_at.map(|dt| dt.timestamp())),
            unlock_at: Set(assignment.unlock_at.map(|dt| dt.timestamp())),
            lock_at: Set(assignment.lock_at.map(|dt| dt.timestamp())),
            submission_types: Set(encode_submission_types(&assignment.submission_types)?),
            grading_type: Set(assignment
                .grading_type
                .unwrap_or(GradingType::Points)
                .to_string()),
            published: Set(assignment.published),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建作业失败: {e}")))?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业
    pub async fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业失败: {e}")))?;

        Ok(result.map(|m| m.into_assignment()))
    }

    /// 列出课程下的作业，按 (截止时间, id) 排序
    pub async fn list_assignments_by_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<Assignment>> {
        let results = Assignments::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::DueAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_assignment()).collect())
    }

    /// 更新作业
    pub async fn update_assignment_impl(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        let existing = Assignments::find_by_id(assignment_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询作业失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(assignment_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(description) = update.description {
            model.description = Set(description);
        }
        if let Some(points_possible) = update.points_possible {
            model.points_possible = Set(points_possible);
        }
        if let Some(due_at) = update.due_at {
            model.due_at = Set(Some(due_at.timestamp()));
        }
        if let Some(unlock_at) = update.unlock_at {
            model.unlock_at = Set(Some(unlock_at.timestamp()));
        }
        if let Some(lock_at) = update.lock_at {
            model.lock_at = Set(Some(lock_at.timestamp()));
        }
        if let Some(ref submission_types) = update.submission_types {
            model.submission_types = Set(encode_submission_types(submission_types)?);
        }
        if let Some(grading_type) = update.grading_type {
            model.grading_type = Set(grading_type.to_string());
        }
        if let Some(published) = update.published {
            model.published = Set(published);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新作业失败: {e}")))?;

        Ok(Some(result.into_assignment()))
    }

    /// 删除作业（提交随外键级联删除）
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        let result = Assignments::delete_by_id(assignment_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除作业失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
