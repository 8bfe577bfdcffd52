//! 模块条目实体（多态指针：content_type + content_id）

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "module_items")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub module_id: i64,
    pub position: i32,
    pub indent: i16,
    pub content_type: String,
    pub content_id: i64,
    pub completion_requirement: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::modules::Entity",
        from = "Column::ModuleId",
        to = "super::modules::Column::Id"
    )]
    Module,
}

impl Related<super::modules::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Module.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_module_item(self) -> crate::models::modules::entities::ModuleItem {
        use crate::models::modules::entities::{CompletionRequirement, ContentKind, ModuleItem};

        ModuleItem {
            id: self.id,
            module_id: self.module_id,
            position: self.position,
            indent: self.indent,
            content_type: ContentKind::parse(&self.content_type),
            content_id: self.content_id,
            completion_requirement: self
                .completion_requirement
                .and_then(|s| s.parse::<CompletionRequirement>().ok()),
        }
    }
}
