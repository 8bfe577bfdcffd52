//! 学期存储操作

use super::SeaOrmStorage;
use crate::entity::courses::{Column as CourseColumn, Entity as Courses};
use crate::entity::terms::{ActiveModel, Column, Entity as Terms};
use crate::errors::{LmsError, Result};
use crate::models::terms::{
    entities::Term,
    requests::{CreateTermRequest, UpdateTermRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 创建学期
    pub async fn create_term_impl(&self, term: CreateTermRequest) -> Result<Term> {
        let model = ActiveModel {
            name: Set(term.name),
            start_date: Set(term.start_date.timestamp()),
            end_date: Set(term.end_date.timestamp()),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建学期失败: {e}")))?;

        Ok(result.into_term())
    }

    /// 通过 ID 获取学期
    pub async fn get_term_by_id_impl(&self, id: i64) -> Result<Option<Term>> {
        let result = Terms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学期失败: {e}")))?;

        Ok(result.map(|m| m.into_term()))
    }

    /// 列出全部学期，按起止日期排序
    pub async fn list_terms_impl(&self) -> Result<Vec<Term>> {
        let results = Terms::find()
            .order_by_asc(Column::StartDate)
            .order_by_asc(Column::EndDate)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学期列表失败: {e}")))?;

        Ok(results.into_iter().map(|m| m.into_term()).collect())
    }

    /// 更新学期
    pub async fn update_term_impl(
        &self,
        id: i64,
        update: UpdateTermRequest,
    ) -> Result<Option<Term>> {
        let existing = Terms::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学期失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date.timestamp());
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date.timestamp());
        }

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新学期失败: {e}")))?;

        Ok(Some(result.into_term()))
    }

    /// 删除学期
    ///
    /// 被任何课程引用的学期不可删除（外键也是 Restrict，这里先行检查
    /// 以便返回可读的冲突错误而不是裸数据库错误）。
    pub async fn delete_term_impl(&self, id: i64) -> Result<bool> {
        let referencing = Courses::find()
            .filter(CourseColumn::TermId.eq(id))
            .count(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询学期引用失败: {e}")))?;

        if referencing > 0 {
            return Err(LmsError::conflict(format!(
                "学期仍被 {referencing} 门课程引用，无法删除"
            )));
        }

        let result = Terms::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除学期失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
