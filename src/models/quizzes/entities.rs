use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 测验类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub enum QuizType {
    GradedQuiz,
    PracticeQuiz,
    GradedSurvey,
    UngradedSurvey,
}

impl<'de> Deserialize<'de> for QuizType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<QuizType>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的测验类型: '{s}'. 支持: graded_quiz, practice_quiz, graded_survey, ungraded_survey"
            ))
        })
    }
}

impl std::fmt::Display for QuizType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuizType::GradedQuiz => write!(f, "graded_quiz"),
            QuizType::PracticeQuiz => write!(f, "practice_quiz"),
            QuizType::GradedSurvey => write!(f, "graded_survey"),
            QuizType::UngradedSurvey => write!(f, "ungraded_survey"),
        }
    }
}

impl std::str::FromStr for QuizType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "graded_quiz" => Ok(QuizType::GradedQuiz),
            "practice_quiz" => Ok(QuizType::PracticeQuiz),
            "graded_survey" => Ok(QuizType::GradedSurvey),
            "ungraded_survey" => Ok(QuizType::UngradedSurvey),
            _ => Err(format!("Invalid quiz type: {s}")),
        }
    }
}

// 题目类型
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub enum QuestionType {
    MultipleChoice,
    TrueFalse,
    ShortAnswer,
    Essay,
}

impl<'de> Deserialize<'de> for QuestionType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<QuestionType>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的题目类型: '{s}'. 支持: multiple_choice, true_false, short_answer, essay"
            ))
        })
    }
}

impl std::fmt::Display for QuestionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QuestionType::MultipleChoice => write!(f, "multiple_choice"),
            QuestionType::TrueFalse => write!(f, "true_false"),
            QuestionType::ShortAnswer => write!(f, "short_answer"),
            QuestionType::Essay => write!(f, "essay"),
        }
    }
}

impl std::str::FromStr for QuestionType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "multiple_choice" => Ok(QuestionType::MultipleChoice),
            "true_false" => Ok(QuestionType::TrueFalse),
            "short_answer" => Ok(QuestionType::ShortAnswer),
            "essay" => Ok(QuestionType::Essay),
            _ => Err(format!("Invalid question type: {s}")),
        }
    }
}

// 测验配置，与作业 1:1
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct Quiz {
    pub id: i64,
    pub assignment_id: i64,
    // 限时（分钟），空表示不限时
    pub time_limit_minutes: Option<i32>,
    // 允许尝试次数，-1 表示不限
    pub allowed_attempts: i32,
    pub shuffle_answers: bool,
    pub quiz_type: QuizType,
}

// 测验题目
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct Question {
    pub id: i64,
    pub quiz_id: i64,
    pub question_text: String,
    pub question_type: QuestionType,
    pub points: f64,
    // 测验内题目顺序
    pub position: i32,
}

// 客观题选项
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct Choice {
    pub id: i64,
    pub question_id: i64,
    pub text: String,
    pub is_correct: bool,
}

// 测验作答记录，与提交 1:1；尝试序号存在 Submission.attempt 上
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct QuizAttempt {
    pub id: i64,
    pub submission_id: i64,
    pub started_at: Option<chrono::DateTime<chrono::Utc>>,
    pub finished_at: Option<chrono::DateTime<chrono::Utc>>,
}

// 学生答案：客观题选 selected_choice_id，主观题填 text_response
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/quiz.ts")]
pub struct StudentAnswer {
    pub id: i64,
    pub attempt_id: i64,
    pub question_id: i64,
    pub selected_choice_id: Option<i64>,
    pub text_response: Option<String>,
}
