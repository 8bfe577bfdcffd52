//! SeaORM 实体定义
//!
//! 这些实体用于数据库操作，与 models 模块中的业务实体分离。
//! Storage 层使用这些实体进行 CRUD 操作，然后转换为 models 中的业务实体。

pub mod prelude;

pub mod accounts;
pub mod assignments;
pub mod choices;
pub mod courses;
pub mod enrollments;
pub mod module_items;
pub mod module_prerequisites;
pub mod modules;
pub mod pages;
pub mod questions;
pub mod quiz_attempts;
pub mod quizzes;
pub mod sections;
pub mod student_answers;
pub mod submissions;
pub mod terms;
pub mod users;
pub mod video_progress;
pub mod videos;
