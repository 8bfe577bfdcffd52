use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::quizzes::requests::{
    CreateChoiceRequest, CreateQuestionRequest, CreateQuizRequest, SaveAnswerRequest,
    StartQuizAttemptRequest, UpdateQuizRequest,
};
use crate::services::QuizService;
use crate::utils::{SafeAttemptIdI64, SafeIdI64, SafeQuestionIdI64};

// 懒加载的全局 QUIZ_SERVICE 实例
static QUIZ_SERVICE: Lazy<QuizService> = Lazy::new(QuizService::new_lazy);

// HTTP处理程序
pub async fn create_quiz(
    req: HttpRequest,
    body: web::Json<CreateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.create_quiz(&req, body.into_inner()).await
}

pub async fn quiz_detail(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.quiz_detail(&req, id.0).await
}

pub async fn update_quiz(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<UpdateQuizRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.update_quiz(&req, id.0, body.into_inner()).await
}

pub async fn delete_quiz(req: HttpRequest, id: SafeIdI64) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.delete_quiz(&req, id.0).await
}

pub async fn create_question(
    req: HttpRequest,
    id: SafeIdI64,
    body: web::Json<CreateQuestionRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .create_question(&req, id.0, body.into_inner())
        .await
}

pub async fn delete_question(
    req: HttpRequest,
    question_id: SafeQuestionIdI64,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.delete_question(&req, question_id.0).await
}

pub async fn create_choice(
    req: HttpRequest,
    question_id: SafeQuestionIdI64,
    body: web::Json<CreateChoiceRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .create_choice(&req, question_id.0, body.into_inner())
        .await
}

pub async fn start_attempt(
    req: HttpRequest,
    body: web::Json<StartQuizAttemptRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.start_attempt(&req, body.into_inner()).await
}

pub async fn attempt_detail(
    req: HttpRequest,
    attempt_id: SafeAttemptIdI64,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.attempt_detail(&req, attempt_id.0).await
}

pub async fn save_answer(
    req: HttpRequest,
    attempt_id: SafeAttemptIdI64,
    body: web::Json<SaveAnswerRequest>,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE
        .save_answer(&req, attempt_id.0, body.into_inner())
        .await
}

pub async fn finish_attempt(
    req: HttpRequest,
    attempt_id: SafeAttemptIdI64,
) -> ActixResult<HttpResponse> {
    QUIZ_SERVICE.finish_attempt(&req, attempt_id.0).await
}

// 配置路由
pub fn configure_quizzes_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/quizzes")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("")
                    // 教师/管理员权限在业务层检查
                    .route(web::post().to(create_quiz)),
            )
            // 作答流程
            .service(web::resource("/attempts").route(web::post().to(start_attempt)))
            .service(
                web::resource("/attempts/{attempt_id}").route(web::get().to(attempt_detail)),
            )
            .service(
                web::resource("/attempts/{attempt_id}/answers")
                    .route(web::post().to(save_answer)),
            )
            .service(
                web::resource("/attempts/{attempt_id}/finish")
                    .route(web::post().to(finish_attempt)),
            )
            // 题目与选项管理
            .service(
                web::resource("/questions/{question_id}")
                    .route(web::delete().to(delete_question)),
            )
            .service(
                web::resource("/questions/{question_id}/choices")
                    .route(web::post().to(create_choice)),
            )
            .service(
                web::resource("/{id}")
                    .route(web::get().to(quiz_detail))
                    .route(web::put().to(update_quiz))
                    .route(web::delete().to(delete_quiz)),
            )
            .service(web::resource("/{id}/questions").route(web::post().to(create_question))),
    );
}
