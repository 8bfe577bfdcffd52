//! 课程与分班存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{ActiveModel, Column, Entity as Courses};
use crate::entity::enrollments::{Column as EnrollmentColumn, Entity as Enrollments};
use crate::entity::sections::{
    ActiveModel as SectionActiveModel, Column as SectionColumn, Entity as Sections,
};
use crate::entity::users::Entity as Users;
use crate::errors::{LmsError, Result};
use crate::models::{
    PaginationInfo,
    courses::{
        entities::{Course, Section},
        requests::{CourseListQuery, CreateCourseRequest, CreateSectionRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::entities::EnrollmentRole,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, JoinType, PaginatorTrait, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 创建课程
    pub async fn create_course_impl(&self, course: CreateCourseRequest) -> Result<Course> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            account_id: Set(course.account_id),
            term_id: Set(course.term_id),
            name: Set(course.name),
            course_code: Set(course.course_code),
            is_public: Set(course.is_public),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建课程失败: {e}")))?;

        Ok(result.into_course())
    }

    /// 通过 ID 获取课程
    pub async fn get_course_by_id_impl(&self, course_id: i64) -> Result<Option<Course>> {
        let result = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程失败: {e}")))?;

        Ok(result.map(|m| m.into_course()))
    }

    /// 分页列出课程
    pub async fn list_courses_with_pagination_impl(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Courses::find();

        if let Some(account_id) = query.account_id {
            select = select.filter(Column::AccountId.eq(account_id));
        }

        if let Some(term_id) = query.term_id {
            select = select.filter(Column::TermId.eq(term_id));
        }

        // 搜索条件：课程名或课程代码
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                sea_orm::Condition::any()
                    .add(Column::Name.contains(&escaped))
                    .add(Column::CourseCode.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_asc(Column::Id);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程页数失败: {e}")))?;

        let courses = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(CourseListResponse {
            items: courses.into_iter().map(|m| m.into_course()).collect(),
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 全部课程（选课目录用）
    pub async fn list_all_courses_impl(&self) -> Result<Vec<Course>> {
        let results = Courses::find()
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_course()).collect())
    }

    /// 更新课程
    pub async fn update_course_impl(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        let existing = Courses::find_by_id(course_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询课程失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(course_id),
            updated_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        if let Some(account_id) = update.account_id {
            model.account_id = Set(account_id);
        }
        if let Some(term_id) = update.term_id {
            model.term_id = Set(term_id);
        }
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(course_code) = update.course_code {
            model.course_code = Set(course_code);
        }
        if let Some(is_public) = update.is_public {
            model.is_public = Set(is_public);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新课程失败: {e}")))?;

        Ok(Some(result.into_course()))
    }

    /// 删除课程（分班、模块、页面、作业、视频随外键级联删除）
    pub async fn delete_course_impl(&self, course_id: i64) -> Result<bool> {
        let result = Courses::delete_by_id(course_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除课程失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 创建分班
    pub async fn create_section_impl(
        &self,
        course_id: i64,
        section: CreateSectionRequest,
    ) -> Result<Section> {
        let model = SectionActiveModel {
            course_id: Set(course_id),
            name: Set(section.name),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建分班失败: {e}")))?;

        Ok(result.into_section())
    }

    /// 通过 ID 获取分班
    pub async fn get_section_by_id_impl(&self, section_id: i64) -> Result<Option<Section>> {
        let result = Sections::find_by_id(section_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询分班失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    /// 列出课程下的分班
    pub async fn list_sections_by_course_impl(&self, course_id: i64) -> Result<Vec<Section>> {
        let results = Sections::find()
            .filter(SectionColumn::CourseId.eq(course_id))
            .order_by_asc(SectionColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询分班列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_section()).collect())
    }

    /// 删除分班
    pub async fn delete_section_impl(&self, section_id: i64) -> Result<bool> {
        let result = Sections::delete_by_id(section_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除分班失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 课程下 id 最小的分班（自助选课的落位目标）
    pub async fn get_first_section_of_course_impl(
        &self,
        course_id: i64,
    ) -> Result<Option<Section>> {
        let result = Sections::find()
            .filter(SectionColumn::CourseId.eq(course_id))
            .order_by_asc(SectionColumn::Id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询分班失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    /// 查找课程的任课教师姓名（目录卡片展示用，取第一条教师选课记录）
    pub async fn find_course_teacher_name_impl(&self, course_id: i64) -> Result<Option<String>> {
        let teacher_enrollment = Enrollments::find()
            .join(
                JoinType::InnerJoin,
                crate::entity::enrollments::Relation::Section.def(),
            )
            .filter(SectionColumn::CourseId.eq(course_id))
            .filter(EnrollmentColumn::Role.eq(EnrollmentRole::TEACHER))
            .order_by_asc(EnrollmentColumn::Id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询任课教师失败: {e}")))?;

        let Some(enrollment) = teacher_enrollment else {
            return Ok(None);
        };

        let teacher = Users::find_by_id(enrollment.user_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询教师信息失败: {e}")))?;

        Ok(teacher.map(|u| u.full_name.unwrap_or(u.username)))
    }
}
