use serde::Deserialize;
use ts_rs::TS;

/// 创建页面请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct CreatePageRequest {
    pub title: String,
    pub body: String,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default)]
    pub is_front_page: bool,
}

/// 更新页面请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct UpdatePageRequest {
    pub title: Option<String>,
    pub body: Option<String>,
    pub is_published: Option<bool>,
    pub is_front_page: Option<bool>,
}
