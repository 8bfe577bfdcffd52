pub mod attempts;
pub mod manage;
pub mod questions;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::quizzes::requests::{
    CreateChoiceRequest, CreateQuestionRequest, CreateQuizRequest, SaveAnswerRequest,
    StartQuizAttemptRequest, UpdateQuizRequest,
};
use crate::storage::Storage;

pub struct QuizService {
    storage: Option<Arc<dyn Storage>>,
}

impl QuizService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 为作业创建测验配置
    pub async fn create_quiz(
        &self,
        req: &HttpRequest,
        create_data: CreateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        manage::create_quiz(self, req, create_data).await
    }

    // 测验详情（配置 + 题目）
    pub async fn quiz_detail(&self, req: &HttpRequest, quiz_id: i64) -> ActixResult<HttpResponse> {
        manage::quiz_detail(self, req, quiz_id).await
    }

    // 更新测验配置
    pub async fn update_quiz(
        &self,
        req: &HttpRequest,
        quiz_id: i64,
        update_data: UpdateQuizRequest,
    ) -> ActixResult<HttpResponse> {
        manage::update_quiz(self, req, quiz_id, update_data).await
    }

    // 删除测验
    pub async fn delete_quiz(&self, req: &HttpRequest, quiz_id: i64) -> ActixResult<HttpResponse> {
        manage::delete_quiz(self, req, quiz_id).await
    }

    // 创建题目
    pub async fn create_question(
        &self,
        req: &HttpRequest,
        quiz_id: i64,
        question_data: CreateQuestionRequest,
    ) -> ActixResult<HttpResponse> {
        questions::create_question(self, req, quiz_id, question_data).await
    }

    // 删除题目
    pub async fn delete_question(
        &self,
        req: &HttpRequest,
        question_id: i64,
    ) -> ActixResult<HttpResponse> {
        questions::delete_question(self, req, question_id).await
    }

    // 创建选项
    pub async fn create_choice(
        &self,
        req: &HttpRequest,
        question_id: i64,
        choice_data: CreateChoiceRequest,
    ) -> ActixResult<HttpResponse> {
        questions::create_choice(self, req, question_id, choice_data).await
    }

    // 开始作答
    pub async fn start_attempt(
        &self,
        req: &HttpRequest,
        start_data: StartQuizAttemptRequest,
    ) -> ActixResult<HttpResponse> {
        attempts::start_attempt(self, req, start_data).await
    }

    // 保存单题答案
    pub async fn save_answer(
        &self,
        req: &HttpRequest,
        attempt_id: i64,
        answer_data: SaveAnswerRequest,
    ) -> ActixResult<HttpResponse> {
        attempts::save_answer(self, req, attempt_id, answer_data).await
    }

    // 结束作答
    pub async fn finish_attempt(
        &self,
        req: &HttpRequest,
        attempt_id: i64,
    ) -> ActixResult<HttpResponse> {
        attempts::finish_attempt(self, req, attempt_id).await
    }

    // 作答详情（作答记录 + 已保存答案）
    pub async fn attempt_detail(
        &self,
        req: &HttpRequest,
        attempt_id: i64,
    ) -> ActixResult<HttpResponse> {
        attempts::attempt_detail(self, req, attempt_id).await
    }
}
