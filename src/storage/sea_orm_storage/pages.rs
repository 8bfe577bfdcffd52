//! 页面存储操作

use super::SeaOrmStorage;
use crate::entity::pages::{ActiveModel, Column, Entity as Pages};
use crate::errors::{LmsError, Result};
use crate::models::pages::{
    entities::Page,
    requests::{CreatePageRequest, UpdatePageRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set,
};

impl SeaOrmStorage {
    /// 创建页面；front page 在课程内唯一
    pub async fn create_page_impl(&self, course_id: i64, page: CreatePageRequest) -> Result<Page> {
        if page.is_front_page {
            self.ensure_no_front_page_impl(course_id, None).await?;
        }

        let model = ActiveModel {
            course_id: Set(course_id),
            title: Set(page.title),
            body: Set(page.body),
            is_published: Set(page.is_published),
            is_front_page: Set(page.is_front_page),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建页面失败: {e}")))?;

        Ok(result.into_page())
    }

    /// 通过 ID 获取页面
    pub async fn get_page_by_id_impl(&self, page_id: i64) -> Result<Option<Page>> {
        let result = Pages::find_by_id(page_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询页面失败: {e}")))?;

        Ok(result.map(|m| m.into_page()))
    }

    /// 列出课程下的页面
    pub async fn list_pages_by_course_impl(&self, course_id: i64) -> Result<Vec<Page>> {
        let results = Pages::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询页面列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_page()).collect())
    }

    /// 更新页面；置为 front page 前检查课程内唯一性
    pub async fn update_page_impl(
        &self,
        page_id: i64,
        update: UpdatePageRequest,
    ) -> Result<Option<Page>> {
        let existing = Pages::find_by_id(page_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询页面失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        if update.is_front_page == Some(true) && !existing.is_front_page {
            self.ensure_no_front_page_impl(existing.course_id, Some(page_id))
                .await?;
        }

        let mut model = ActiveModel {
            id: Set(page_id),
            ..Default::default()
        };

        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(body) = update.body {
            model.body = Set(body);
        }
        if let Some(is_published) = update.is_published {
            model.is_published = Set(is_published);
        }
        if let Some(is_front_page) = update.is_front_page {
            model.is_front_page = Set(is_front_page);
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新页面失败: {e}")))?;

        Ok(Some(result.into_page()))
    }

    /// 删除页面
    pub async fn delete_page_impl(&self, page_id: i64) -> Result<bool> {
        let result = Pages::delete_by_id(page_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除页面失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// front page 唯一性检查，exclude_id 用于更新自身的场景
    async fn ensure_no_front_page_impl(
        &self,
        course_id: i64,
        exclude_id: Option<i64>,
    ) -> Result<()> {
        let mut condition = Condition::all()
            .add(Column::CourseId.eq(course_id))
            .add(Column::IsFrontPage.eq(true));

        if let Some(id) = exclude_id {
            condition = condition.add(Column::Id.ne(id));
        }

        let count = Pages::find()
            .filter(condition)
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询 front page 失败: {e}")))?;

        if count > 0 {
            return Err(LmsError::conflict("该课程已存在 front page"));
        }

        Ok(())
    }
}
