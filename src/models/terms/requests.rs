use chrono::{DateTime, Utc};
use serde::Deserialize;
use ts_rs::TS;

/// 创建学期请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct CreateTermRequest {
    pub name: String,
    pub start_date: DateTime<Utc>, // ISO 8601 格式，如 "2026-03-01T00:00:00Z"
    pub end_date: DateTime<Utc>,
}

/// 更新学期请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/term.ts")]
pub struct UpdateTermRequest {
    pub name: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
}
