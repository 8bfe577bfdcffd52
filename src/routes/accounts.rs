use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::accounts::requests::{CreateAccountRequest, UpdateAccountRequest};
use crate::models::users::entities::UserRole;
use crate::services::AccountService;
use crate::utils::SafeIdI64;

// 懒加载的全局 ACCOUNT_SERVICE 实例
static ACCOUNT_SERVICE: Lazy<AccountService> = Lazy::new(AccountService::new_lazy);

// HTTP处理程序
pub async fn list_accounts(req: HttpRequest) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.list_accounts(&req).await
}

pub async fn create_account(
    req: HttpRequest,
    body: web::Json<CreateAccountRequest>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.create_account(&req, body.into_inner()).await
}

pub async fn get_account(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.get_account(&req, id.0).await
}

pub async fn update_account(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateAccountRequest>,
) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE
        .update_account(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_account(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ACCOUNT_SERVICE.delete_account(&req, id.0).await
}

// 配置路由
pub fn configure_accounts_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/accounts")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 账户树所有登录用户可读
                    .route(web::get().to(list_accounts))
                    // 结构调整仅管理员可用
                    .route(
                        web::post()
                            .to(create_account)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(get_account))
                    .route(
                        web::put()
                            .to(update_account)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_account)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            ),
    );
}
