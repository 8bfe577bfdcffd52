use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程内 Wiki 页面
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/page.ts")]
pub struct Page {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    // HTML 正文
    pub body: String,
    pub is_published: bool,
    // 每门课程最多一个 front page
    pub is_front_page: bool,
}
