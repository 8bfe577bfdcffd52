use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ModuleService;
use super::manage::check_course_manage_permission;
use crate::models::modules::entities::ContentKind;
use crate::models::modules::requests::CreateModuleItemRequest;
use crate::models::modules::responses::ModuleItemContent;
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_module_item(
    service: &ModuleService,
    request: &HttpRequest,
    course_id: i64,
    module_id: i64,
    item_data: CreateModuleItemRequest,
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

    // 缩进层级 0~5
    if item_data.indent < 0 || item_data.indent > 5 {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "缩进层级必须在 0 到 5 之间",
        )));
    }

    // 指针目标必须是已知类型且确实存在
    if item_data.content_type == ContentKind::Unknown {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "不支持的内容类型",
        )));
    }

    let probe = crate::models::modules::entities::ModuleItem {
        id: 0,
        module_id,
        position: item_data.position,
        indent: item_data.indent,
        content_type: item_data.content_type.clone(),
        content_id: item_data.content_id,
        completion_requirement: None,
    };
    match storage.resolve_module_item_content(&probe).await {
        Ok(ModuleItemContent::Unknown) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::NotFound,
                "指向的内容对象不存在",
            )));
        }
        Ok(_) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("校验内容对象失败: {e}"),
                )),
            );
        }
    }

    match storage.create_module_item(module_id, item_data).await {
        Ok(item) => Ok(HttpResponse::Created().json(ApiResponse::success(item, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建模块条目失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_module_item(
    service: &ModuleService,
    request: &HttpRequest,
    course_id: i64,
    item_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(response) = check_course_manage_permission(service, request, course_id).await {
        return Ok(response);
    }

    match storage.get_module_item_in_course(course_id, item_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ModuleItemNotFound,
                "模块条目不存在",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("查询模块条目失败: {e}"),
                )),
            );
        }
    }

    match storage.delete_module_item(item_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ModuleItemNotFound,
            "模块条目不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除模块条目失败: {e}"),
            )),
        ),
    }
}
