pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeAssignmentIdI64, SafeAttemptIdI64, SafeCourseIdI64, SafeIdI64, SafeItemIdI64,
    SafeModuleIdI64, SafeQuestionIdI64, SafeSectionIdI64, SafeSubmissionIdI64, SafeUserIdI64,
    SafeVideoIdI64,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use sql::escape_like_pattern;
