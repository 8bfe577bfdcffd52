use crate::models::quizzes::entities::{QuestionType, QuizType};
use serde::Deserialize;
use ts_rs::TS;

/// 为作业创建测验配置请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct CreateQuizRequest {
    pub assignment_id: i64,
    pub time_limit_minutes: Option<i32>,
    #[serde(default = "default_allowed_attempts")]
    pub allowed_attempts: i32,
    #[serde(default)]
    pub shuffle_answers: bool,
    pub quiz_type: Option<QuizType>,
}

fn default_allowed_attempts() -> i32 {
    -1
}

/// 更新测验配置请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct UpdateQuizRequest {
    pub time_limit_minutes: Option<i32>,
    pub allowed_attempts: Option<i32>,
    pub shuffle_answers: Option<bool>,
    pub quiz_type: Option<QuizType>,
}

/// 创建题目请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct CreateQuestionRequest {
    pub question_text: String,
    pub question_type: Option<QuestionType>,
    #[serde(default = "default_points")]
    pub points: f64,
    #[serde(default)]
    pub position: i32,
}

fn default_points() -> f64 {
    1.0
}

/// 创建选项请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct CreateChoiceRequest {
    pub text: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// 开始测验作答请求：在对应作业下创建新的提交与作答记录
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct StartQuizAttemptRequest {
    pub quiz_id: i64,
}

/// 保存单题答案请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct SaveAnswerRequest {
    pub question_id: i64,
    pub selected_choice_id: Option<i64>,
    pub text_response: Option<String>,
}
