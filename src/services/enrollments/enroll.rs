use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EnrollmentService;
use crate::middlewares::RequireJWT;
use crate::models::enrollments::entities::{EnrollmentRole, EnrollmentState};
use crate::models::{ApiResponse, ErrorCode};

/// 自助选课
///
/// 把当前用户落位到课程下 id 最小的分班，role=student、state=active。
/// 没有分班的课程不可自助选课；重复选课是幂等空操作，返回"已选"而不是报错。
pub async fn enroll_in_course(
    service: &EnrollmentService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized: missing user id",
            )));
        }
    };

    let storage = service.get_storage(request);

    match storage.get_course_by_id(course_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::CourseNotFound,
                "课程不存在",
            )));
        }
        Err(e) => {
            error!("Error fetching course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollFailed,
                    "查询课程失败",
                )),
            );
        }
    }

    let section = match storage.get_first_section_of_course(course_id).await {
        Ok(Some(section)) => section,
        Ok(None) => {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::SectionNotFound,
                "该课程没有可供选课的分班",
            )));
        }
        Err(e) => {
            error!("Error fetching section for course {}: {}", course_id, e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollFailed,
                    "查询分班失败",
                )),
            );
        }
    };

    match storage
        .get_enrollment_by_user_and_section(user_id, section.id)
        .await
    {
        Ok(Some(enrollment)) => {
            // 幂等：已有记录直接返回，不产生第二行
            return Ok(HttpResponse::Ok().json(ApiResponse::success(
                enrollment,
                "已选该课程",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            error!("Error checking existing enrollment: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::EnrollFailed,
                    "查询选课记录失败",
                )),
            );
        }
    }

    match storage
        .create_enrollment(
            user_id,
            section.id,
            EnrollmentRole::Student,
            EnrollmentState::Active,
        )
        .await
    {
        Ok(enrollment) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(enrollment, "选课成功"))),
        Err(e) => {
            // 并发下两请求同时通过上面的存在性检查时，唯一索引挡下后到的插入
            error!("Error creating enrollment: {}", e);
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::AlreadyEnrolled,
                "已选该课程",
            )))
        }
    }
}
