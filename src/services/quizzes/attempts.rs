use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::QuizService;
use crate::errors::LmsError;
use crate::middlewares::RequireJWT;
use crate::models::quizzes::entities::QuizAttempt;
use crate::models::quizzes::requests::{SaveAnswerRequest, StartQuizAttemptRequest};
use crate::models::quizzes::responses::QuizAttemptDetailResponse;
use crate::models::submissions::requests::CreateSubmissionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 取作答记录并校验归属当前用户
async fn load_own_attempt(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    attempt_id: i64,
) -> Result<QuizAttempt, HttpResponse> {
    let Some(user_id) = RequireJWT::extract_user_id(request) else {
        return Err(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
    };

    let attempt = match storage.get_quiz_attempt_by_id(attempt_id).await {
        Ok(Some(attempt)) => attempt,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AttemptNotFound,
                "作答记录不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作答记录失败: {e}"),
                )),
            );
        }
    };

    match storage.get_submission_by_id(attempt.submission_id).await {
        Ok(Some(submission)) if submission.user_id == user_id => Ok(attempt),
        Ok(Some(_)) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::Forbidden,
            "不能操作他人的作答记录",
        ))),
        Ok(None) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询提交失败: {e}"),
            )),
        ),
    }
}

/// 开始作答：在测验对应的作业下创建新提交与作答记录
pub async fn start_attempt(
    service: &QuizService,
    request: &HttpRequest,
    start_data: StartQuizAttemptRequest,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized()
                .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
        }
    };

    let storage = service.get_storage(request);

    let quiz = match storage.get_quiz_by_id(start_data.quiz_id).await {
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

    // 限次测验：attempt 序号在 Submission 上，数最新提交即可
    if quiz.allowed_attempts != -1 {
        let used = match storage
            .get_latest_submission(quiz.assignment_id, user_id)
            .await
        {
            Ok(latest) => latest.map(|s| s.attempt).unwrap_or(0),
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询提交失败: {e}"),
                    )),
                );
            }
        };
        if used >= quiz.allowed_attempts {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::Conflict,
                "已达到允许的作答次数上限",
            )));
        }
    }

    let submission = match storage
        .create_submission(
            quiz.assignment_id,
            user_id,
            CreateSubmissionRequest {
                body: None,
                url: None,
                attachment: None,
            },
        )
        .await
    {
        Ok(submission) => submission,
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("创建提交失败: {e}"),
                )),
            );
        }
    };

    match storage.create_quiz_attempt(submission.id).await {
        Ok(attempt) => Ok(HttpResponse::Created().json(ApiResponse::success(attempt, "作答已开始"))),
        Err(LmsError::Conflict(msg)) => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(ErrorCode::Conflict, msg)))
        }
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建作答记录失败: {e}"),
            )),
        ),
    }
}

/// 保存单题答案，重复保存覆盖
pub async fn save_answer(
    service: &QuizService,
    request: &HttpRequest,
    attempt_id: i64,
    answer_data: SaveAnswerRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let attempt = match load_own_attempt(&storage, request, attempt_id).await {
        Ok(attempt) => attempt,
        Err(response) => return Ok(response),
    };

    if attempt.finished_at.is_some() {
        return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
            ErrorCode::Conflict,
            "作答已结束，不能再修改答案",
        )));
    }

    match storage.get_question_by_id(answer_data.question_id).await {
        Ok(Some(_)) => {}
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
    }

    match storage.save_student_answer(attempt_id, answer_data).await {
        Ok(answer) => Ok(HttpResponse::Ok().json(ApiResponse::success(answer, "答案已保存"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("保存答案失败: {e}"),
            )),
        ),
    }
}

/// 结束作答
pub async fn finish_attempt(
    service: &QuizService,
    request: &HttpRequest,
    attempt_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = load_own_attempt(&storage, request, attempt_id).await {
        return Ok(response);
    }

    match storage.finish_quiz_attempt(attempt_id).await {
        Ok(Some(attempt)) => Ok(HttpResponse::Ok().json(ApiResponse::success(attempt, "作答已结束"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttemptNotFound,
            "作答记录不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("结束作答失败: {e}"),
            )),
        ),
    }
}

/// 作答详情
pub async fn attempt_detail(
    service: &QuizService,
    request: &HttpRequest,
    attempt_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let attempt = match load_own_attempt(&storage, request, attempt_id).await {
        Ok(attempt) => attempt,
        Err(response) => return Ok(response),
    };

    match storage.list_answers_by_attempt(attempt_id).await {
        Ok(answers) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuizAttemptDetailResponse { attempt, answers },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询答案失败: {e}"),
            )),
        ),
    }
}
