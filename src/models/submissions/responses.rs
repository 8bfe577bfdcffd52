use crate::models::submissions::entities::Submission;
use serde::Serialize;
use ts_rs::TS;

/// 提交列表中的提交者信息
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionCreator {
    pub id: i64,
    pub username: String,
    pub full_name: Option<String>,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListItem {
    #[serde(flatten)]
    #[ts(flatten)]
    pub submission: Submission,
    pub creator: SubmissionCreator,
}

/// 某次作业的全部提交（教师视图）
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmissionListResponse {
    pub items: Vec<SubmissionListItem>,
}

/// SpeedGrader 式评分视图：当前提交加前后导航
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradingViewResponse {
    pub submission: Submission,
    pub prev_submission_url: Option<String>,
    pub next_submission_url: Option<String>,
}
