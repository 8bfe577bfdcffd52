//! 模块实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "modules")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    pub position: i32,
    pub unlock_at: Option<i64>,
    pub require_sequential_progress: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::courses::Entity",
        from = "Column::CourseId",
        to = "super::courses::Column::Id"
    )]
    Course,
    #[sea_orm(has_many = "super::module_items::Entity")]
    Items,
}

impl Related<super::courses::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl Related<super::module_items::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Items.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型。先修模块列表由存储层单独查询后填充。
impl Model {
    pub fn into_module(self) -> crate::models::modules::entities::Module {
        use chrono::{DateTime, Utc};

        crate::models::modules::entities::Module {
            id: self.id,
            course_id: self.course_id,
            name: self.name,
            position: self.position,
            unlock_at: self
                .unlock_at
                .map(|ts| DateTime::<Utc>::from_timestamp(ts, 0).unwrap_or_default()),
            require_sequential_progress: self.require_sequential_progress,
            prerequisite_ids: Vec::new(),
        }
    }
}
