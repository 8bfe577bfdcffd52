use crate::models::quizzes::entities::{Choice, Question, Quiz, QuizAttempt, StudentAnswer};
use serde::Serialize;
use ts_rs::TS;

/// 带选项的题目视图
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuestionWithChoices {
    #[serde(flatten)]
    #[ts(flatten)]
    pub question: Question,
    pub choices: Vec<Choice>,
}

/// 测验详情：配置加全部题目
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizDetailResponse {
    pub quiz: Quiz,
    pub questions: Vec<QuestionWithChoices>,
}

/// 作答记录详情：作答加已保存的答案
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizAttemptDetailResponse {
    pub attempt: QuizAttempt,
    pub answers: Vec<StudentAnswer>,
}
