use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::enrollments::requests::{CreateEnrollmentRequest, EnrollmentListParams};
use crate::models::users::entities::UserRole;
use crate::services::EnrollmentService;
use crate::utils::SafeIdI64;

// 懒加载的全局 ENROLLMENT_SERVICE 实例
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);

// HTTP处理程序
pub async fn list_enrollments(
    req: HttpRequest,
    query: web::Query<EnrollmentListParams>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .list_enrollments(&req, query.into_inner())
        .await
}

pub async fn create_enrollment(
    req: HttpRequest,
    body: web::Json<CreateEnrollmentRequest>,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE
        .create_enrollment(&req, body.into_inner())
        .await
}

pub async fn delete_enrollment(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.delete_enrollment(&req, id.0).await
}

// 配置路由：选课台账管理仅管理员可用（自助选课在课程路由下）
pub fn configure_enrollments_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/enrollments")
            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles()))
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    .route(web::get().to(list_enrollments))
                    // 管理端可指定角色建立选课记录（教师、助教等）
                    .route(web::post().to(create_enrollment)),
            )
            .service(web::resource("/{id}").route(web::delete().to(delete_enrollment))),
    );
}
