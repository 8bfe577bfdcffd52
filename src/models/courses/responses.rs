use crate::models::PaginationInfo;
use crate::models::courses::entities::Course;
use crate::models::modules::responses::ModuleWithItems;
use serde::Serialize;
use ts_rs::TS;

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseListResponse {
    pub items: Vec<Course>,
    pub pagination: PaginationInfo,
}

/// 选课目录中的课程卡片：附带任课教师姓名和当前用户是否已选
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CatalogCourse {
    pub course: Course,
    pub teacher: String,
    pub is_enrolled: bool,
}

#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseCatalogResponse {
    pub items: Vec<CatalogCourse>,
}

/// 课程主页数据：课程信息加模块目录
#[derive(Debug, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/course.ts")]
pub struct CourseHomeResponse {
    pub course: Course,
    pub modules: Vec<ModuleWithItems>,
}
