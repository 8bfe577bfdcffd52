use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::AccountService;
use crate::models::accounts::requests::{CreateAccountRequest, UpdateAccountRequest};
use crate::models::{ApiResponse, ErrorCode};

pub async fn create_account(
    service: &AccountService,
    request: &HttpRequest,
    create_data: CreateAccountRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 父账户必须存在
    if let Some(parent_id) = create_data.parent_id {
        match storage.get_account_by_id(parent_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::AccountNotFound,
                    "父账户不存在",
                )));
            }
            Err(e) => {
                return Ok(
                    HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                        ErrorCode::InternalServerError,
                        format!("查询账户失败: {e}"),
                    )),
                );
            }
        }
    }

    match storage.create_account(create_data).await {
        Ok(account) => Ok(HttpResponse::Created().json(ApiResponse::success(account, "创建成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("创建账户失败: {e}"),
            )),
        ),
    }
}

pub async fn get_account(
    service: &AccountService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_account_by_id(id).await {
        Ok(Some(account)) => Ok(HttpResponse::Ok().json(ApiResponse::success(account, "查询成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            "账户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询账户失败: {e}"),
            )),
        ),
    }
}

pub async fn list_accounts(
    service: &AccountService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_accounts().await {
        Ok(accounts) => Ok(HttpResponse::Ok().json(ApiResponse::success(accounts, "查询成功"))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("查询账户列表失败: {e}"),
            )),
        ),
    }
}

pub async fn update_account(
    service: &AccountService,
    request: &HttpRequest,
    id: i64,
    update_data: UpdateAccountRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    // 不允许把账户设为自己的父节点
    if update_data.parent_id == Some(id) {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::ValidationFailed,
            "账户不能作为自身的父账户",
        )));
    }

    match storage.update_account(id, update_data).await {
        Ok(Some(account)) => Ok(HttpResponse::Ok().json(ApiResponse::success(account, "更新成功"))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            "账户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("更新账户失败: {e}"),
            )),
        ),
    }
}

pub async fn delete_account(
    service: &AccountService,
    request: &HttpRequest,
    id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_account(id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("删除成功"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AccountNotFound,
            "账户不存在",
        ))),
        Err(e) => Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                format!("删除账户失败: {e}"),
            )),
        ),
    }
}
