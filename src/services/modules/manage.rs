use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleService;
use crate::middlewares::RequireJWT;
use crate::models::modules::requests::{CreateModuleRequest, UpdateModuleRequest};
use crate::models::users::entities::UserRole;
use crate::models::{ApiResponse, ErrorCode};

/// 课程内容管理权限：站点管理员或该课程的在任教师
pub(crate) async fn check_course_manage_permission(
    service: &ModuleService,
    request: &HttpRequest,
    course_id: i64,
) -> Result<(), HttpResponse> {
    let storage = service.get_storage(request);

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

pub async fn create_module(
    service: &ModuleService,
    request: &HttpRequest,
    course_id: i64,
    create_data: CreateModuleRequest,
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

    if let Err(response) = check_course_manage_permission(service, request, course_id).await {
        return Ok(response);
    }

    match storage.create_module(course_id, create_data).await {
        Ok(module) => Ok(HttpResponse::Created().json(ApiResponse::success(module, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建模块失败: {e}"),
            )),
        ),
    }
}

pub async fn get_module(
    service: &ModuleService,
    request: &HttpRequest,
    course_id: i64,
    module_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) if module.course_id == course_id => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(module, "查询成功")))
        }
        Ok(_) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "模块不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询模块失败: {e}"),
            )),
        ),
    }
}

pub async fn list_modules(
    service: &ModuleService,
    request: &HttpRequest,
    course_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_modules_with_items(course_id).await {
        Ok(modules) => Ok(HttpResponse::Ok().json(ApiResponse::success(modules, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询模块目录失败: {e}"),
            )),
        ),
    }
}

pub async fn update_module(
    service: &ModuleService,
    request: &HttpRequest,
    course_id: i64,
    module_id: i64,
    update_data: UpdateModuleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_course_manage_permission(service, request, course_id).await {
        return Ok(response);
    }

    // 模块必须属于路径上的课程
    match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) if module.course_id == course_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleNotFound,
                "模块不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询模块失败: {e}"),
                )),
            );
        }
    }

    match storage.update_module(module_id, update_data).await {
        Ok(Some(module)) => Ok(HttpResponse::Ok().json(ApiResponse::success(module, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "模块不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新模块失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_module(
    service: &ModuleService,
    request: &HttpRequest,
    course_id: i64,
    module_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_course_manage_permission(service, request, course_id).await {
        return Ok(response);
    }

    match storage.get_module_by_id(module_id).await {
        Ok(Some(module)) if module.course_id == course_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleNotFound,
                "模块不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询模块失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_module(module_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleNotFound,
            "模块不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除模块失败: {e}"),
            )),
        ),
    }
}
