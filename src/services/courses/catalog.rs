use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::collections::HashSet;
use tracing::error;

use super::CourseService;
use crate::middlewares::RequireJWT;
use crate::models::courses::responses::{CatalogCourse, CourseCatalogResponse};
use crate::models::{ApiResponse, ErrorCode};

/// 选课目录：全部课程，标注任课教师与当前用户是否已选
pub async fn course_catalog(
    service: &CourseService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let courses = match storage.list_all_courses().await {
        Ok(courses) => courses,
        Err(e) => {
            error!("Error listing courses for catalog: {}", e);
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    "查询课程目录失败",
                )),
            );
        }
    };

    let enrolled_course_ids: HashSet<i64> = match RequireJWT::extract_user_id(request) {
        Some(user_id) => match storage.list_enrolled_course_ids(user_id).await {
            Ok(ids) => ids.into_iter().collect(),
            Err(e) => {
                error!("Error listing enrolled courses: {}", e);
                HashSet::new()
            }
        },
        None => HashSet::new(),
    };

    let mut items = Vec::with_capacity(courses.len());
    for course in courses {
        let teacher = storage
            .find_course_teacher_name(course.id)
            .await
            .unwrap_or(None)
            .unwrap_or_else(|| "-".to_string());

        let is_enrolled = enrolled_course_ids.contains(&course.id);
        items.push(CatalogCourse {
            course,
            teacher,
            is_enrolled,
        });
    }

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        CourseCatalogResponse { items },
        "查询成功",
    )))
}
