use crate::models::assignments::entities::Assignment;
use crate::models::modules::entities::{Module, ModuleItem};
use crate::models::pages::entities::Page;
use crate::models::quizzes::entities::Quiz;
use crate::models::submissions::entities::Submission;
use crate::models::videos::entities::Video;
use serde::Serialize;
use ts_rs::TS;

/// 课程主页的模块视图：模块加其全部条目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleWithItems {
    #[serde(flatten)]
    #[ts(flatten)]
    pub module: Module,
    pub items: Vec<ModuleItem>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleListResponse {
    pub items: Vec<ModuleWithItems>,
}

/// 模块条目解析出的具体内容
///
/// 多态指针解析失败（类型未知或目标已删除）时落入 Unknown。
#[derive(Debug, Serialize, TS)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub enum ModuleItemContent {
    Page(Page),
    Assignment(Assignment),
    Quiz(Quiz),
    Video(Video),
    Unknown,
}

/// 条目详情：内容主体加课程级顺序导航
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleItemDetailResponse {
    pub module_item: ModuleItem,
    pub content: ModuleItemContent,
    pub prev_item_url: Option<String>,
    pub next_item_url: Option<String>,
    // 内容为作业时附带当前用户的最新提交
    pub latest_submission: Option<Submission>,
    pub is_teacher: bool,
}
