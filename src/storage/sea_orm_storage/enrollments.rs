//! 选课存储操作

use super::SeaOrmStorage;
use crate::entity::enrollments::{ActiveModel, Column, Entity as Enrollments};
use crate::entity::sections::Column as SectionColumn;
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    enrollments::{
        entities::{Enrollment, EnrollmentRole, EnrollmentState},
        requests::EnrollmentListQuery,
        responses::EnrollmentListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 创建选课记录
    ///
    /// (user, section) 的唯一索引是并发重复选课的冲突屏障：
    /// 两个并发插入只有一个成功，另一个落在这里的错误分支。
    pub async fn create_enrollment_impl(
        &self,
        user_id: i64,
        section_id: i64,
        role: EnrollmentRole,
        state: EnrollmentState,
    ) -> Result<Enrollment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            section_id: Set(section_id),
            role: Set(role.to_string()),
            enrollment_state: Set(state.to_string()),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建选课记录失败: {e}")))?;

        Ok(result.into_enrollment())
    }

    /// 获取某用户在某分班的选课记录
    pub async fn get_enrollment_by_user_and_section_impl(
        &self,
        user_id: i64,
        section_id: i64,
    ) -> Result<Option<Enrollment>> {
        let result = Enrollments::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::SectionId.eq(section_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课记录失败: {e}")))?;

        Ok(result.map(|m| m.into_enrollment()))
    }

    /// 分页列出选课记录
    pub async fn list_enrollments_with_pagination_impl(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Enrollments::find();

        if let Some(user_id) = query.user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }
        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }
        if let Some(ref role) = query.role {
            select = select.filter(Column::Role.eq(role.to_string()));
        }

        // 最近创建的在前
        select = select.order_by_desc(Column::CreatedAt);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课页数失败: {e}")))?;

        let enrollments = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询选课列表失败: {e}")))?;

        Ok(EnrollmentListResponse {
            items: enrollments.into_iter().map(|m| m.into_enrollment()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 删除选课记录
    pub async fn delete_enrollment_impl(&self, id: i64) -> Result<bool> {
        let result = Enrollments::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除选课记录失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 某用户已选课程的 ID 集合
    pub async fn list_enrolled_course_ids_impl(&self, user_id: i64) -> Result<Vec<i64>> {
        let course_ids: Vec<i64> = Enrollments::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::enrollments::Relation::Section.def(),
            )
            .filter(Column::UserId.eq(user_id))
            .select_only()
            .column(SectionColumn::CourseId)
            .distinct()
            .into_tuple()
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询已选课程失败: {e}")))?;

        Ok(course_ids)
    }

    /// 教师判定：在课程任一分班持有 role=teacher 且 state=active 的选课记录
    pub async fn is_teacher_for_course_impl(&self, user_id: i64, course_id: i64) -> Result<bool> {
        let count = Enrollments::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::enrollments::Relation::Section.def(),
            )
            .filter(SectionColumn::CourseId.eq(course_id))
            .filter(Column::UserId.eq(user_id))
            .filter(Column::Role.eq(EnrollmentRole::TEACHER))
            .filter(Column::EnrollmentState.eq(EnrollmentState::Active.to_string()))
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师身份失败: {e}")))?;

        Ok(count > 0)
    }
}
