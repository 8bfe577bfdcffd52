use serde::Deserialize;
use ts_rs::TS;

/// 学生提交作业请求。body/url/attachment 按作业的 submission_types 任选
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct CreateSubmissionRequest {
    pub body: Option<String>,
    pub url: Option<String>,
    pub attachment: Option<String>,
}

/// 教师评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct GradeSubmissionRequest {
    pub score: Option<f64>,
    pub grade: Option<String>,
    pub feedback: Option<String>,
}
