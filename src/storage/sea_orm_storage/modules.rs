//! 模块与模块条目存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::module_items::{
    ActiveModel as ModuleItemActiveModel, Column as ModuleItemColumn, Entity as ModuleItems,
};
use crate::entity::module_prerequisites::{
    ActiveModel as PrerequisiteActiveModel, Column as PrerequisiteColumn,
    Entity as ModulePrerequisites,
};
use crate::entity::modules::{ActiveModel, Column, Entity as Modules};
use crate::errors::{LmsError, Result};
use crate::models::modules::{
    entities::{ContentKind, Module, ModuleItem, SequencedModuleItem},
    requests::{CreateModuleItemRequest, CreateModuleRequest, UpdateModuleRequest},
    responses::{ModuleItemContent, ModuleWithItems},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建模块
    pub async fn create_module_impl(
        &self,
        course_id: i64,
        module: CreateModuleRequest,
    ) -> Result<Module> {
        let model = ActiveModel {
            course_id: Set(course_id),
            name: Set(module.name),
            position: Set(module.position),
            unlock_at: Set(module.unlock_at.map(|dt| dt.timestamp())),
            require_sequential_progress: Set(module.require_sequential_progress),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建模块失败: {e}")))?;

        let module_id = result.id;
        self.set_module_prerequisites_impl(module_id, module.prerequisite_ids.clone())
            .await?;

        let mut created = result.into_module();
        created.prerequisite_ids = module.prerequisite_ids;
        Ok(created)
    }

    /// 通过 ID 获取模块（含先修列表）
    pub async fn get_module_by_id_impl(&self, module_id: i64) -> Result<Option<Module>> {
        let result = Modules::find_by_id(module_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块失败: {e}")))?;

        let Some(model) = result else {
            return Ok(None);
        };

        let mut module = model.into_module();
        module.prerequisite_ids = self.list_module_prerequisites_impl(module_id).await?;
        Ok(Some(module))
    }

    /// 课程主页视图：模块按 (position, id) 排序，每个模块带全部条目
    pub async fn list_modules_with_items_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<ModuleWithItems>> {
        let modules = Modules::find()
            .filter(Column::CourseId.eq(course_id))
            .order_by_asc(Column::Position)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块列表失败: {e}")))?;

        if modules.is_empty() {
            return Ok(vec![]);
        }

        let module_ids: Vec<i64> = modules.iter().map(|m| m.id).collect();

        // 批量取条目，按 (module, position, id) 排序
        let items = ModuleItems::find()
            .filter(ModuleItemColumn::ModuleId.is_in(module_ids.clone()))
            .order_by_asc(ModuleItemColumn::ModuleId)
            .order_by_asc(ModuleItemColumn::Position)
            .order_by_asc(ModuleItemColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块条目失败: {e}")))?;

        let mut items_by_module: HashMap<i64, Vec<ModuleItem>> = HashMap::new();
        for item in items {
            items_by_module
                .entry(item.module_id)
                .or_default()
                .push(item.into_module_item());
        }

        // 批量取先修关系
        let prerequisites = ModulePrerequisites::find()
            .filter(PrerequisiteColumn::ModuleId.is_in(module_ids))
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块先修失败: {e}")))?;

        let mut prereqs_by_module: HashMap<i64, Vec<i64>> = HashMap::new();
        for p in prerequisites {
            prereqs_by_module
                .entry(p.module_id)
                .or_default()
                .push(p.prerequisite_id);
        }

        Ok(modules
            .into_iter()
            .map(|m| {
                let module_id = m.id;
                let mut module = m.into_module();
                module.prerequisite_ids = prereqs_by_module.remove(&module_id).unwrap_or_default();
                ModuleWithItems {
                    module,
                    items: items_by_module.remove(&module_id).unwrap_or_default(),
                }
            })
            .collect())
    }

    /// 更新模块
    pub async fn update_module_impl(
        &self,
        module_id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<Module>> {
        let existing = Modules::find_by_id(module_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块失败: {e}")))?;

        if existing.is_none() {
            return Ok(None);
        }

        let mut model = ActiveModel {
            id: Set(module_id),
            ..Default::default()
        };

        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(position) = update.position {
            model.position = Set(position);
        }
        if let Some(unlock_at) = update.unlock_at {
            model.unlock_at = Set(Some(unlock_at.timestamp()));
        }
        if let Some(require_sequential_progress) = update.require_sequential_progress {
            model.require_sequential_progress = Set(require_sequential_progress);
        }

        model
            .update(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("更新模块失败: {e}")))?;

        if let Some(prerequisite_ids) = update.prerequisite_ids {
            self.set_module_prerequisites_impl(module_id, prerequisite_ids)
                .await?;
        }

        self.get_module_by_id_impl(module_id).await
    }

    /// 删除模块（条目与先修关系级联删除）
    pub async fn delete_module_impl(&self, module_id: i64) -> Result<bool> {
        let result = Modules::delete_by_id(module_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除模块失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 重建模块的先修关系集合
    async fn set_module_prerequisites_impl(
        &self,
        module_id: i64,
        prerequisite_ids: Vec<i64>,
    ) -> Result<()> {
        ModulePrerequisites::delete_many()
            .filter(PrerequisiteColumn::ModuleId.eq(module_id))
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("清理模块先修失败: {e}")))?;

        for prerequisite_id in prerequisite_ids {
            // 自引用没有意义，直接跳过
            if prerequisite_id == module_id {
                continue;
            }

            let model = PrerequisiteActiveModel {
                module_id: Set(module_id),
                prerequisite_id: Set(prerequisite_id),
            };

            model
                .insert(&self.db)
                .await
                .map_err(|e| LmsError::database_operation(format!("写入模块先修失败: {e}")))?;
        }

        Ok(())
    }

    /// 查询模块的先修 ID 列表
    async fn list_module_prerequisites_impl(&self, module_id: i64) -> Result<Vec<i64>> {
        let results = ModulePrerequisites::find()
            .filter(PrerequisiteColumn::ModuleId.eq(module_id))
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块先修失败: {e}")))?;

        Ok(results.into_iter().map(|p| p.prerequisite_id).collect())
    }

    /// 创建模块条目
    pub async fn create_module_item_impl(
        &self,
        module_id: i64,
        item: CreateModuleItemRequest,
    ) -> Result<ModuleItem> {
        let model = ModuleItemActiveModel {
            module_id: Set(module_id),
            position: Set(item.position),
            indent: Set(item.indent),
            content_type: Set(item.content_type.to_string()),
            content_id: Set(item.content_id),
            completion_requirement: Set(item.completion_requirement.map(|r| r.to_string())),
            ..Default::default()
        };

        let result = model
            .insert(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("创建模块条目失败: {e}")))?;

        Ok(result.into_module_item())
    }

    /// 课程范围内取条目：条目必须属于该课程的某个模块
    pub async fn get_module_item_in_course_impl(
        &self,
        course_id: i64,
        item_id: i64,
    ) -> Result<Option<ModuleItem>> {
        let item = ModuleItems::find_by_id(item_id)
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块条目失败: {e}")))?;

        let Some(item) = item else {
            return Ok(None);
        };

        let module = Modules::find_by_id(item.module_id)
            .filter(Column::CourseId.eq(course_id))
            .one(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块失败: {e}")))?;

        if module.is_none() {
            return Ok(None);
        }

        Ok(Some(item.into_module_item()))
    }

    /// 删除模块条目
    pub async fn delete_module_item_impl(&self, item_id: i64) -> Result<bool> {
        let result = ModuleItems::delete_by_id(item_id)
            .exec(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("删除模块条目失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 课程全量条目（附所属模块的排序键），排序交给业务层物化
    pub async fn list_course_sequence_impl(
        &self,
        course_id: i64,
    ) -> Result<Vec<SequencedModuleItem>> {
        let modules = Modules::find()
            .filter(Column::CourseId.eq(course_id))
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块列表失败: {e}")))?;

        if modules.is_empty() {
            return Ok(vec![]);
        }

        let positions: HashMap<i64, i32> = modules.iter().map(|m| (m.id, m.position)).collect();
        let module_ids: Vec<i64> = modules.iter().map(|m| m.id).collect();

        let items = ModuleItems::find()
            .filter(ModuleItemColumn::ModuleId.is_in(module_ids))
            .all(&self.db)
            .await
            .map_err(|e| LmsError::database_operation(format!("查询模块条目失败: {e}")))?;

        Ok(items
            .into_iter()
            .map(|item| {
                let module_position = positions.get(&item.module_id).copied().unwrap_or(0);
                SequencedModuleItem {
                    module_position,
                    item: item.into_module_item(),
                }
            })
            .collect())
    }

    /// 解析条目的多态指针
    ///
    /// 封闭类型表驱动：类型标签决定查哪张表。目标行已被删除或
    /// 类型未知时返回 Unknown，调用方按通用内容降级展示。
    pub async fn resolve_module_item_content_impl(
        &self,
        item: &ModuleItem,
    ) -> Result<ModuleItemContent> {
        let content = match item.content_type {
            ContentKind::Page => self
                .get_page_by_id_impl(item.content_id)
                .await?
                .map(ModuleItemContent::Page),
            ContentKind::Assignment => self
                .get_assignment_by_id_impl(item.content_id)
                .await?
                .map(ModuleItemContent::Assignment),
            ContentKind::Quiz => self
                .get_quiz_by_id_impl(item.content_id)
                .await?
                .map(ModuleItemContent::Quiz),
            ContentKind::Video => self
                .get_video_by_id_impl(item.content_id)
                .await?
                .map(ModuleItemContent::Video),
            ContentKind::Unknown => None,
        };

        Ok(content.unwrap_or(ModuleItemContent::Unknown))
    }
}
