use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::assignments::requests::CreateAssignmentRequest;
use crate::models::courses::requests::{
    CourseListParams, CreateCourseRequest, CreateSectionRequest, UpdateCourseRequest,
};
use crate::models::modules::requests::{
    CreateModuleItemRequest, CreateModuleRequest, UpdateModuleRequest,
};
use crate::models::pages::requests::{CreatePageRequest, UpdatePageRequest};
use crate::models::users::entities::UserRole;
use crate::models::videos::requests::CreateVideoRequest;
use crate::services::{
    AssignmentService, CourseService, EnrollmentService, ModuleService, PageService, VideoService,
};
use crate::utils::{
    SafeCourseIdI64, SafeIdI64, SafeItemIdI64, SafeModuleIdI64, SafeSectionIdI64,
};

// 懒加载的全局服务实例
static COURSE_SERVICE: Lazy<CourseService> = Lazy::new(CourseService::new_lazy);
static ENROLLMENT_SERVICE: Lazy<EnrollmentService> = Lazy::new(EnrollmentService::new_lazy);
static MODULE_SERVICE: Lazy<ModuleService> = Lazy::new(ModuleService::new_lazy);
static PAGE_SERVICE: Lazy<PageService> = Lazy::new(PageService::new_lazy);
static ASSIGNMENT_SERVICE: Lazy<AssignmentService> = Lazy::new(AssignmentService::new_lazy);
static VIDEO_SERVICE: Lazy<VideoService> = Lazy::new(VideoService::new_lazy);

// HTTP处理程序
pub async fn list_courses(
    req: HttpRequest,
    query: web::Query<CourseListParams>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_courses(&req, query.into_inner()).await
}

pub async fn create_course(
    req: HttpRequest,
    body: web::Json<CreateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.create_course(&req, body.into_inner()).await
}

pub async fn course_catalog(req: HttpRequest) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.course_catalog(&req).await
}

pub async fn course_detail(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.course_detail(&req, course_id.0).await
}

pub async fn update_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    body: web::Json<UpdateCourseRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .update_course(&req, course_id.0, body.into_inner())
        .await
}

pub async fn delete_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.delete_course(&req, course_id.0).await
}

pub async fn enroll_in_course(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    ENROLLMENT_SERVICE.enroll_in_course(&req, course_id.0).await
}

pub async fn list_sections(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE.list_sections(&req, course_id.0).await
}

pub async fn create_section(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    body: web::Json<CreateSectionRequest>,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .create_section(&req, course_id.0, body.into_inner())
        .await
}

pub async fn delete_section(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    section_id: SafeSectionIdI64,
) -> ActixResult<HttpResponse> {
    COURSE_SERVICE
        .delete_section(&req, course_id.0, section_id.0)
        .await
}

pub async fn list_modules(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE.list_modules(&req, course_id.0).await
}

pub async fn create_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    body: web::Json<CreateModuleRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .create_module(&req, course_id.0, body.into_inner())
        .await
}

pub async fn get_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .get_module(&req, course_id.0, module_id.0)
        .await
}

pub async fn update_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
    body: web::Json<UpdateModuleRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .update_module(&req, course_id.0, module_id.0, body.into_inner())
        .await
}

pub async fn delete_module(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .delete_module(&req, course_id.0, module_id.0)
        .await
}

pub async fn create_module_item(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    module_id: SafeModuleIdI64,
    body: web::Json<CreateModuleItemRequest>,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .create_module_item(&req, course_id.0, module_id.0, body.into_inner())
        .await
}

pub async fn module_item_detail(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    item_id: SafeItemIdI64,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .module_item_detail(&req, course_id.0, item_id.0)
        .await
}

pub async fn delete_module_item(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    item_id: SafeItemIdI64,
) -> ActixResult<HttpResponse> {
    MODULE_SERVICE
        .delete_module_item(&req, course_id.0, item_id.0)
        .await
}

pub async fn list_pages(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.list_pages(&req, course_id.0).await
}

pub async fn create_page(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    body: web::Json<CreatePageRequest>,
) -> ActixResult<HttpResponse> {
    PAGE_SERVICE
        .create_page(&req, course_id.0, body.into_inner())
        .await
}

pub async fn get_page(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    page_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.get_page(&req, course_id.0, page_id.0).await
}

pub async fn update_page(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    page_id: SafeIdI64,
    body: web::Json<UpdatePageRequest>,
) -> ActixResult<HttpResponse> {
    PAGE_SERVICE
        .update_page(&req, course_id.0, page_id.0, body.into_inner())
        .await
}

pub async fn delete_page(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    page_id: SafeIdI64,
) -> ActixResult<HttpResponse> {
    PAGE_SERVICE.delete_page(&req, course_id.0, page_id.0).await
}

pub async fn list_assignments(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE.list_assignments(&req, course_id.0).await
}

pub async fn create_assignment(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    body: web::Json<CreateAssignmentRequest>,
) -> ActixResult<HttpResponse> {
    ASSIGNMENT_SERVICE
        .create_assignment(&req, course_id.0, body.into_inner())
        .await
}

pub async fn list_videos(req: HttpRequest, course_id: SafeCourseIdI64) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE.list_videos(&req, course_id.0).await
}

pub async fn create_video(
    req: HttpRequest,
    course_id: SafeCourseIdI64,
    body: web::Json<CreateVideoRequest>,
) -> ActixResult<HttpResponse> {
    VIDEO_SERVICE
        .create_video(&req, course_id.0, body.into_inner())
        .await
}

// 配置路由
pub fn configure_courses_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/courses")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 课程列表所有登录用户可读
                    .route(web::get().to(list_courses))
                    // 建课仅管理员可用
                    .route(
                        web::post()
                            .to(create_course)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 选课目录：带教师姓名和已选标记
            .service(web::resource("/catalog").route(web::get().to(course_catalog)))
            .service(
                web::resource("/{course_id}")
                    // 课程主页：课程信息 + 模块目录
                    .route(web::get().to(course_detail))
                    .route(
                        web::put()
                            .to(update_course)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_course)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            // 自助选课：落入第一个分班，重复选课幂等
            .service(web::resource("/{course_id}/enroll").route(web::post().to(enroll_in_course)))
            .service(
                web::resource("/{course_id}/sections")
                    .route(web::get().to(list_sections))
                    .route(
                        web::post()
                            .to(create_section)
                            .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                    ),
            )
            .service(
                web::resource("/{course_id}/sections/{section_id}").route(
                    web::delete()
                        .to(delete_section)
                        .wrap(middlewares::RequireRole::new_any(UserRole::admin_roles())),
                ),
            )
            .service(
                web::resource("/{course_id}/modules")
                    .route(web::get().to(list_modules))
                    // 教师/管理员权限在业务层检查
                    .route(web::post().to(create_module)),
            )
            .service(
                web::resource("/{course_id}/modules/{module_id}")
                    .route(web::get().to(get_module))
                    .route(web::put().to(update_module))
                    .route(web::delete().to(delete_module)),
            )
            .service(
                web::resource("/{course_id}/modules/{module_id}/items")
                    .route(web::post().to(create_module_item)),
            )
            .service(
                web::resource("/{course_id}/items/{item_id}")
                    // 条目详情：内容主体 + 上一条/下一条导航
                    .route(web::get().to(module_item_detail))
                    .route(web::delete().to(delete_module_item)),
            )
            .service(
                web::resource("/{course_id}/pages")
                    .route(web::get().to(list_pages))
                    .route(web::post().to(create_page)),
            )
            .service(
                web::resource("/{course_id}/pages/{id}")
                    .route(web::get().to(get_page))
                    .route(web::put().to(update_page))
                    .route(web::delete().to(delete_page)),
            )
            .service(
                web::resource("/{course_id}/assignments")
                    .route(web::get().to(list_assignments))
                    .route(web::post().to(create_assignment)),
            )
            .service(
                web::resource("/{course_id}/videos")
                    .route(web::get().to(list_videos))
                    .route(web::post().to(create_video)),
            ),
    );
}
