use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 提交状态机
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionWorkflowState {
    Submitted,
    Graded,
    Unsubmitted,
    Late,
    Missing,
}

impl SubmissionWorkflowState {
    pub const SUBMITTED: &'static str = "submitted";
    pub const GRADED: &'static str = "graded";
    pub const UNSUBMITTED: &'static str = "unsubmitted";
    pub const LATE: &'static str = "late";
    pub const MISSING: &'static str = "missing";
}

impl<'de> Deserialize<'de> for SubmissionWorkflowState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<SubmissionWorkflowState>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持: submitted, graded, unsubmitted, late, missing"
            ))
        })
    }
}

impl std::fmt::Display for SubmissionWorkflowState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionWorkflowState::Submitted => write!(f, "submitted"),
            SubmissionWorkflowState::Graded => write!(f, "graded"),
            SubmissionWorkflowState::Unsubmitted => write!(f, "unsubmitted"),
            SubmissionWorkflowState::Late => write!(f, "late"),
            SubmissionWorkflowState::Missing => write!(f, "missing"),
        }
    }
}

impl std::str::FromStr for SubmissionWorkflowState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "submitted" => Ok(SubmissionWorkflowState::Submitted),
            "graded" => Ok(SubmissionWorkflowState::Graded),
            "unsubmitted" => Ok(SubmissionWorkflowState::Unsubmitted),
            "late" => Ok(SubmissionWorkflowState::Late),
            "missing" => Ok(SubmissionWorkflowState::Missing),
            _ => Err(format!("Invalid submission workflow state: {s}")),
        }
    }
}

// 提交：一次作业尝试，(assignment, user, attempt) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    pub id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    // 尝试次数，从 1 开始
    pub attempt: i32,
    pub body: Option<String>,
    pub url: Option<String>,
    pub attachment: Option<String>,
    pub score: Option<f64>,
    // 等级表示，例如 A、B+、95%
    pub grade: Option<String>,
    pub feedback: Option<String>,
    pub submitted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub workflow_state: SubmissionWorkflowState,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
