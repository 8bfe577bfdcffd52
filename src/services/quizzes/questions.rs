use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::QuizService;
use super::manage::check_quiz_manage_permission;
use crate::models::quizzes::requests::{CreateChoiceRequest, CreateQuestionRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_question(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    question_data: CreateQuestionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let quiz = match storage.get_quiz_by_id(quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::QuizNotFound, "测验不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验失败: {e}"),
                )),
            );
        }
    };

    if let Err(response) = check_quiz_manage_permission(&storage, request, quiz.assignment_id).await
    {
        return Ok(response);
    }

    if question_data.question_text.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "题干不能为空",
        )));
    }

    match storage.create_question(quiz_id, question_data).await {
        Ok(question) => Ok(HttpResponse::Created().json(ApiResponse::success(question, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建题目失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_question(
    service: &QuizService,
    request: &HttpRequest,
    question_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let question = match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "题目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    let quiz = match storage.get_quiz_by_id(question.quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::QuizNotFound, "测验不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验失败: {e}"),
                )),
            );
        }
    };

    if let Err(response) = check_quiz_manage_permission(&storage, request, quiz.assignment_id).await
    {
        return Ok(response);
    }

    match storage.delete_question(question_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::QuestionNotFound,
            "题目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除题目失败: {e}"),
            )),
        ),
    }
}

pub async fn create_choice(
    service: &QuizService,
    request: &HttpRequest,
    question_id: i64,
    choice_data: CreateChoiceRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let question = match storage.get_question_by_id(question_id).await {
        Ok(Some(question)) => question,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::QuestionNotFound,
                "题目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询题目失败: {e}"),
                )),
            );
        }
    };

    let quiz = match storage.get_quiz_by_id(question.quiz_id).await {
        Ok(Some(quiz)) => quiz,
        Ok(None) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::QuizNotFound, "测验不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询测验失败: {e}"),
                )),
            );
        }
    };

    if let Err(response) = check_quiz_manage_permission(&storage, request, quiz.assignment_id).await
    {
        return Ok(response);
    }

    match storage.create_choice(question_id, choice_data).await {
        Ok(choice) => Ok(HttpResponse::Created().json(ApiResponse::success(choice, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建选项失败: {e}"),
            )),
        ),
    }
}
