use crate::models::modules::entities::{CompletionRequirement, ContentKind};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建模块请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct CreateModuleRequest {
    pub name: String,
    #[serde(default)]
    pub position: i32,
    pub unlock_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub require_sequential_progress: bool,
    #[serde(default)]
    pub prerequisite_ids: Vec<i64>,
}

/// 更新模块请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct UpdateModuleRequest {
    pub name: Option<String>,
    pub position: Option<i32>,
    pub unlock_at: Option<DateTime<Utc>>,
    pub require_sequential_progress: Option<bool>,
    pub prerequisite_ids: Option<Vec<i64>>,
}

/// 创建模块条目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct CreateModuleItemRequest {
    #[serde(default)]
    pub position: i32,
    #[serde(default)]
    pub indent: i16,
    pub content_type: ContentKind,
    pub content_id: i64,
    pub completion_requirement: Option<CompletionRequirement>,
}
