use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::SubmissionService;
use crate::middlewares::RequireJWT;
use crate::models::submissions::entities::Submission;
use crate::models::submissions::requests::GradeSubmissionRequest;
use crate::models::submissions::responses::GradingViewResponse;
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 评分权限：站点管理员或该课程的在任教师
async fn check_grading_permission(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    course_id: i64,
) -> Result<(), HttpResponse> {
    let Some(current_user) = RequireJWT::extract_user_claims(request) else {
        return Err(HttpResponse::Unauthorized()
            .json(ApiResponse::error_empty(ErrorCode::Unauthorized, "未登录")));
    };

    if current_user.role == UserRole::Admin {
        return Ok(());
    }

    match storage.is_teacher_for_course(current_user.id, course_id).await {
        Ok(true) => Ok(()),
        Ok(false) => Err(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::NotCourseTeacher,
            "您没有评分该作业的权限",
        ))),
        Err(e) => Err(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询教师身份失败: {e}"),
            )),
        ),
    }
}

/// 取目标提交并校验归属与权限，评分视图与写评分共用
async fn load_submission_for_grading(
    storage: &Arc<dyn Storage>,
    request: &HttpRequest,
    assignment_id: i64,
    submission_id: i64,
) -> Result<Submission, HttpResponse> {
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

    check_grading_permission(storage, request, assignment.course_id).await?;

    match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) if submission.assignment_id == assignment_id => Ok(submission),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
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

fn grading_url(assignment_id: i64, submission_id: i64) -> String {
    format!("/api/v1/assignments/{assignment_id}/submissions/{submission_id}/grade")
}

/// 在 (用户名, 提交 id) 全序中定位当前提交的前后导航地址
async fn sequence_urls(
    storage: &Arc<dyn Storage>,
    assignment_id: i64,
    submission_id: i64,
) -> (Option<String>, Option<String>) {
    let Ok(submissions) = storage.list_submissions_for_grading(assignment_id).await else {
        return (None, None);
    };

    let Some(index) = submissions.iter().position(|s| s.id == submission_id) else {
        return (None, None);
    };

    let prev = if index > 0 {
        submissions
            .get(index - 1)
            .map(|s| grading_url(assignment_id, s.id))
    } else {
        None
    };
    let next = submissions
        .get(index + 1)
        .map(|s| grading_url(assignment_id, s.id));

    (prev, next)
}

/// SpeedGrader 式评分视图
/// GET /assignments/{assignment_id}/submissions/{submission_id}/grade
pub async fn grading_view(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: i64,
    submission_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let submission =
        match load_submission_for_grading(&storage, request, assignment_id, submission_id).await {
            Ok(submission) => submission,
            Err(response) => return Ok(response),
        };

    let (prev_submission_url, next_submission_url) =
        sequence_urls(&storage, assignment_id, submission_id).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        GradingViewResponse {
            submission,
            prev_submission_url,
            next_submission_url,
        },
        "查询成功",
    )))
}

/// 写评分：分数/等级/评语入库，workflow_state 置为 graded
/// POST /assignments/{assignment_id}/submissions/{submission_id}/grade
pub async fn grade_submission(
    service: &SubmissionService,
    request: &HttpRequest,
    assignment_id: i64,
    submission_id: i64,
    grade_data: GradeSubmissionRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) =
        load_submission_for_grading(&storage, request, assignment_id, submission_id).await
    {
        return Ok(response);
    }

    if let Some(score) = grade_data.score
        && !score.is_finite()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "分数不合法",
        )));
    }

    match storage.grade_submission(submission_id, grade_data).await {
        Ok(Some(submission)) => {
            let (prev_submission_url, next_submission_url) =
                sequence_urls(&storage, assignment_id, submission_id).await;

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                GradingViewResponse {
                    submission,
                    prev_submission_url,
                    next_submission_url,
                },
                "评分已保存",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotFound,
            "提交不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("写入评分失败: {e}"),
            )),
        ),
    }
}
