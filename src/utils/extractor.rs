//! 路径参数安全提取器
//!
//! 将 {xxx_id} 之类的路径段解析为正整数，解析失败直接返回 400，
//! 避免每个 handler 重复校验。

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse};
use futures_util::future::{Ready, ready};

use crate::models::{ApiResponse, ErrorCode};

/// 为指定路径参数名定义一个 i64 提取器
macro_rules! define_safe_id_extractor {
    ($name:ident, $param:literal) => {
        pub struct $name(pub i64);

        impl FromRequest for $name {
            type Error = actix_web::Error;
            type Future = Ready<Result<Self, Self::Error>>;

            fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let response = HttpResponse::BadRequest().json(ApiResponse::error_empty(
                            ErrorCode::BadRequest,
                            concat!("Invalid path parameter: ", $param),
                        ));
                        Err(InternalError::from_response(
                            concat!("Invalid path parameter: ", $param),
                            response,
                        )
                        .into())
                    }
                })
            }
        }
    };
}

define_safe_id_extractor!(SafeIdI64, "id");
define_safe_id_extractor!(SafeCourseIdI64, "course_id");
define_safe_id_extractor!(SafeSectionIdI64, "section_id");
define_safe_id_extractor!(SafeModuleIdI64, "module_id");
define_safe_id_extractor!(SafeItemIdI64, "item_id");
define_safe_id_extractor!(SafeAssignmentIdI64, "assignment_id");
define_safe_id_extractor!(SafeSubmissionIdI64, "submission_id");
define_safe_id_extractor!(SafeQuestionIdI64, "question_id");
define_safe_id_extractor!(SafeAttemptIdI64, "attempt_id");
define_safe_id_extractor!(SafeUserIdI64, "user_id");
define_safe_id_extractor!(SafeVideoIdI64, "video_id");
