use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 评分方式
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub enum GradingType {
    PassFail,
    Percent,
    LetterGrade,
    Points,
}

impl<'de> Deserialize<'de> for GradingType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<GradingType>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的评分方式: '{s}'. 支持: pass_fail, percent, letter_grade, points"
            ))
        })
    }
}

impl std::fmt::Display for GradingType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GradingType::PassFail => write!(f, "pass_fail"),
            GradingType::Percent => write!(f, "percent"),
            GradingType::LetterGrade => write!(f, "letter_grade"),
            GradingType::Points => write!(f, "points"),
        }
    }
}

impl std::str::FromStr for GradingType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pass_fail" => Ok(GradingType::PassFail),
            "percent" => Ok(GradingType::Percent),
            "letter_grade" => Ok(GradingType::LetterGrade),
            "points" => Ok(GradingType::Points),
            _ => Err(format!("Invalid grading type: {s}")),
        }
    }
}

// 作业
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    // 富文本 / HTML 描述
    pub description: String,
    pub points_possible: f64,
    pub due_at: Option<chrono::DateTime<chrono::Utc>>,
    pub unlock_at: Option<chrono::DateTime<chrono::Utc>>,
    pub lock_at: Option<chrono::DateTime<chrono::Utc>>,
    // 允许的提交方式，例如 ["online_text_entry", "online_upload", "online_url"]
    pub submission_types: Vec<String>,
    pub grading_type: GradingType,
    pub published: bool,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
