use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use super::PageService;
use crate::errors::LmsError;
use crate::middlewares::RequireJWT;
use crate::models::pages::requests::{CreatePageRequest, UpdatePageRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::storage::Storage;

/// 页面管理权限：站点管理员或该课程的在任教师
async fn check_page_manage_permission(
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

pub async fn create_page(
    service: &PageService,
    request: &HttpRequest,
    course_id: i64,
    create_data: CreatePageRequest,
) -> ActixResult<HttpResponse> {
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
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询课程失败: {e}"),
                )),
            );
        }
    }

    if let Err(response) = check_page_manage_permission(&storage, request, course_id).await {
        return Ok(response);
    }

    match storage.create_page(course_id, create_data).await {
        Ok(page) => Ok(HttpResponse::Created().json(ApiResponse::success(page, "创建成功"))),
        Err(LmsError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::FrontPageAlreadyExists, msg),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建页面失败: {e}"),
            )),
        ),
    }
}

pub async fn list_pages(
    service: &PageService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_pages_by_course(course_id).await {
        Ok(pages) => Ok(HttpResponse::Ok().json(ApiResponse::success(pages, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询页面列表失败: {e}"),
            )),
        ),
    }
}

pub async fn get_page(
    service: &PageService,
    request: &HttpRequest,
    course_id: i64,
    page_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_page_by_id(page_id).await {
        Ok(Some(page)) if page.course_id == course_id => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(page, "查询成功")))
        }
        Ok(_) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::PageNotFound, "页面不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询页面失败: {e}"),
            )),
        ),
    }
}

pub async fn update_page(
    service: &PageService,
    request: &HttpRequest,
    course_id: i64,
    page_id: i64,
    update_data: UpdatePageRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_page_manage_permission(&storage, request, course_id).await {
        return Ok(response);
    }

    match storage.get_page_by_id(page_id).await {
        Ok(Some(page)) if page.course_id == course_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::PageNotFound, "页面不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询页面失败: {e}"),
                )),
            );
        }
    }

    match storage.update_page(page_id, update_data).await {
        Ok(Some(page)) => Ok(HttpResponse::Ok().json(ApiResponse::success(page, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::PageNotFound, "页面不存在"))),
        Err(LmsError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::FrontPageAlreadyExists, msg),
        )),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新页面失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_page(
    service: &PageService,
    request: &HttpRequest,
    course_id: i64,
    page_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_page_manage_permission(&storage, request, course_id).await {
        return Ok(response);
    }

    match storage.get_page_by_id(page_id).await {
        Ok(Some(page)) if page.course_id == course_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::PageNotFound, "页面不存在")));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询页面失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_page(page_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::PageNotFound, "页面不存在"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除页面失败: {e}"),
            )),
        ),
    }
}
