use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::QuizService;
use crate::errors::LmsError;
use crate::middlewares::RequireJWT;
use crate::models::quizzes::requests::{CreateQuizRequest, UpdateQuizRequest};
use crate::models::quizzes::responses::QuizDetailResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 测验管理权限：站点管理员或测验所属课程的在任教师
pub(crate) async fn check_quiz_manage_permission(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    assignment_id: i64,
) -> Result<(), HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Err(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
    };

    if current_user.role == UserRole::Admin {
        return Ok(());
    }

    let assignment = match storage.get_assignment_by_id(assignment_id).await {
        Ok(Some(assignment)) => assignment,
        Ok(None) => {
            return Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Err(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    };

    match storage
        .is_teacher_for_course(current_user.id, assignment.course_id)
        .await
    {
        Ok(true) => Ok(()),
        Ok(false) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::NotCourseTeacher,
            "您不是该课程的教师",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询教师身份失败: {e}"),
            )),
        ),
    }
}

pub async fn create_quiz(
    service: &QuizService,
    request: &HttpRequest,
    create_data: CreateQuizRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_assignment_by_id(create_data.assignment_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::AssignmentNotFound,
                "作业不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询作业失败: {e}"),
                )),
            );
        }
    }

    if let Err(response) =
        check_quiz_manage_permission(&storage, request, create_data.assignment_id).await
    {
        return Ok(response);
    }

    // -1 表示不限次数，其余必须为正
    if create_data.allowed_attempts != -1 && create_data.allowed_attempts < 1 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "允许尝试次数必须为 -1 或正整数",
        )));
    }

    match storage.create_quiz(create_data).await {
        Ok(quiz) => Ok(HttpResponse::Created().json(ApiResponse::success(quiz, "创建成功"))),
        Err(LmsError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::QuizAlreadyExists, msg))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建测验失败: {e}"),
            )),
        ),
    }
}

pub async fn quiz_detail(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
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

    match storage.list_questions_with_choices(quiz_id).await {
        Ok(questions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            QuizDetailResponse { quiz, questions },
            "查询成功",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询题目失败: {e}"),
            )),
        ),
    }
}

pub async fn update_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
    update_data: UpdateQuizRequest,
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

    match storage.update_quiz(quiz_id, update_data).await {
        Ok(Some(quiz)) => Ok(HttpResponse::Ok().json(ApiResponse::success(quiz, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::QuizNotFound, "测验不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新测验失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_quiz(
    service: &QuizService,
    request: &HttpRequest,
    quiz_id: i64,
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

    match storage.delete_quiz(quiz_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::QuizNotFound, "测验不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除测验失败: {e}"),
            )),
        ),
    }
}
