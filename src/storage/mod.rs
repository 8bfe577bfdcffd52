use std::sync::Arc;

use crate::models::{
    accounts::{
        entities::Account,
        requests::{CreateAccountRequest, UpdateAccountRequest},
    },
    assignments::{
        entities::Assignment,
        requests::{CreateAssignmentRequest, UpdateAssignmentRequest},
    },
    courses::{
        entities::{Course, Section},
        requests::{CourseListQuery, CreateCourseRequest, CreateSectionRequest, UpdateCourseRequest},
        responses::CourseListResponse,
    },
    enrollments::{
        entities::{Enrollment, EnrollmentRole, EnrollmentState},
        requests::EnrollmentListQuery,
        responses::EnrollmentListResponse,
    },
    modules::{
        entities::{Module, ModuleItem, SequencedModuleItem},
        requests::{CreateModuleItemRequest, CreateModuleRequest, UpdateModuleRequest},
        responses::{ModuleItemContent, ModuleWithItems},
    },
    pages::{
        entities::Page,
        requests::{CreatePageRequest, UpdatePageRequest},
    },
    quizzes::{
        entities::{Choice, Question, Quiz, QuizAttempt, StudentAnswer},
        requests::{
            CreateChoiceRequest, CreateQuestionRequest, CreateQuizRequest, SaveAnswerRequest,
            UpdateQuizRequest,
        },
        responses::QuestionWithChoices,
    },
    submissions::{
        entities::Submission,
        requests::{CreateSubmissionRequest, GradeSubmissionRequest},
        responses::SubmissionListItem,
    },
    terms::{
        entities::Term,
        requests::{CreateTermRequest, UpdateTermRequest},
    },
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest, UserListQuery},
        responses::UserListResponse,
    },
    videos::{
        entities::{ProgressOutcome, ProgressReport, Video, VideoProgress},
        requests::{CreateVideoRequest, UpdateVideoRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户（密码已在调用方哈希）
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过用户名获取用户信息
    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>>;
    // 通过邮箱获取用户信息
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 通过 SIS 学号获取用户信息
    async fn get_user_by_sis_id(&self, sis_id: &str) -> Result<Option<User>>;
    // 通过用户名或邮箱获取用户信息
    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>>;
    // 列出用户
    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse>;
    // 更新用户信息
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;
    // 删除用户
    async fn delete_user(&self, id: i64) -> Result<bool>;
    // 更新用户最后登录时间
    async fn update_last_login(&self, id: i64) -> Result<bool>;
    // 用户总数（用于首启建号）
    async fn count_users(&self) -> Result<u64>;

    /// 账户管理方法
    async fn create_account(&self, account: CreateAccountRequest) -> Result<Account>;
    async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>>;
    async fn list_accounts(&self) -> Result<Vec<Account>>;
    async fn update_account(&self, id: i64, update: UpdateAccountRequest)
    -> Result<Option<Account>>;
    async fn delete_account(&self, id: i64) -> Result<bool>;

    /// 学期管理方法
    async fn create_term(&self, term: CreateTermRequest) -> Result<Term>;
    async fn get_term_by_id(&self, id: i64) -> Result<Option<Term>>;
    async fn list_terms(&self) -> Result<Vec<Term>>;
    async fn update_term(&self, id: i64, update: UpdateTermRequest) -> Result<Option<Term>>;
    // 删除学期；仍被课程引用时返回 Conflict
    async fn delete_term(&self, id: i64) -> Result<bool>;

    /// 课程与分班管理方法
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course>;
    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>>;
    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse>;
    // 选课目录用：全部课程（量小，不分页）
    async fn list_all_courses(&self) -> Result<Vec<Course>>;
    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>>;
    async fn delete_course(&self, course_id: i64) -> Result<bool>;
    async fn create_section(
        &self,
        course_id: i64,
        section: CreateSectionRequest,
    ) -> Result<Section>;
    async fn get_section_by_id(&self, section_id: i64) -> Result<Option<Section>>;
    async fn list_sections_by_course(&self, course_id: i64) -> Result<Vec<Section>>;
    async fn delete_section(&self, section_id: i64) -> Result<bool>;
    // 自助选课落位目标：课程下按 id 最小的分班
    async fn get_first_section_of_course(&self, course_id: i64) -> Result<Option<Section>>;
    // 选课目录卡片：课程的任课教师姓名
    async fn find_course_teacher_name(&self, course_id: i64) -> Result<Option<String>>;

    /// 选课管理方法
    async fn create_enrollment(
        &self,
        user_id: i64,
        section_id: i64,
        role: EnrollmentRole,
        state: EnrollmentState,
    ) -> Result<Enrollment>;
    async fn get_enrollment_by_user_and_section(
        &self,
        user_id: i64,
        section_id: i64,
    ) -> Result<Option<Enrollment>>;
    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse>;
    async fn delete_enrollment(&self, id: i64) -> Result<bool>;
    // 当前用户已选课程 ID 集合（目录页的"已选"标记）
    async fn list_enrolled_course_ids(&self, user_id: i64) -> Result<Vec<i64>>;
    // 教师判定：在课程任一分班持有 role=teacher 且 state=active 的选课记录
    async fn is_teacher_for_course(&self, user_id: i64, course_id: i64) -> Result<bool>;

    /// 模块与模块条目管理方法
    async fn create_module(&self, course_id: i64, module: CreateModuleRequest) -> Result<Module>;
    async fn get_module_by_id(&self, module_id: i64) -> Result<Option<Module>>;
    async fn list_modules_with_items(&self, course_id: i64) -> Result<Vec<ModuleWithItems>>;
    async fn update_module(
        &self,
        module_id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<Module>>;
    async fn delete_module(&self, module_id: i64) -> Result<bool>;
    async fn create_module_item(
        &self,
        module_id: i64,
        item: CreateModuleItemRequest,
    ) -> Result<ModuleItem>;
    // 课程范围内按 ID 取条目（条目必须属于该课程的某个模块）
    async fn get_module_item_in_course(
        &self,
        course_id: i64,
        item_id: i64,
    ) -> Result<Option<ModuleItem>>;
    async fn delete_module_item(&self, item_id: i64) -> Result<bool>;
    // 课程全量条目（未排序），顺序导航在业务层物化排序
    async fn list_course_sequence(&self, course_id: i64) -> Result<Vec<SequencedModuleItem>>;
    // 解析多态指针，未知类型或目标不存在时返回 Unknown
    async fn resolve_module_item_content(&self, item: &ModuleItem) -> Result<ModuleItemContent>;

    /// 页面管理方法
    async fn create_page(&self, course_id: i64, page: CreatePageRequest) -> Result<Page>;
    async fn get_page_by_id(&self, page_id: i64) -> Result<Option<Page>>;
    async fn list_pages_by_course(&self, course_id: i64) -> Result<Vec<Page>>;
    async fn update_page(&self, page_id: i64, update: UpdatePageRequest) -> Result<Option<Page>>;
    async fn delete_page(&self, page_id: i64) -> Result<bool>;

    /// 作业管理方法
    async fn create_assignment(
        &self,
        course_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    async fn list_assignments_by_course(&self, course_id: i64) -> Result<Vec<Assignment>>;
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 提交与评分方法
    // 创建提交（自动计算 attempt 序号，标记 submitted）
    async fn create_submission(
        &self,
        assignment_id: i64,
        user_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission>;
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 某用户对某作业的最新提交
    async fn get_latest_submission(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<Submission>>;
    // 作业的全部提交（教师视图，按用户名、attempt 排序）
    async fn list_submissions_for_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<SubmissionListItem>>;
    // 评分导航序：按 (用户名, 提交 id) 的全量提交
    async fn list_submissions_for_grading(&self, assignment_id: i64) -> Result<Vec<Submission>>;
    // 评分：写入分数/等级/评语并置为 graded
    async fn grade_submission(
        &self,
        submission_id: i64,
        grade: GradeSubmissionRequest,
    ) -> Result<Option<Submission>>;

    /// 测验管理方法
    async fn create_quiz(&self, quiz: CreateQuizRequest) -> Result<Quiz>;
    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>>;
    async fn get_quiz_by_assignment_id(&self, assignment_id: i64) -> Result<Option<Quiz>>;
    async fn update_quiz(&self, quiz_id: i64, update: UpdateQuizRequest) -> Result<Option<Quiz>>;
    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool>;
    async fn create_question(
        &self,
        quiz_id: i64,
        question: CreateQuestionRequest,
    ) -> Result<Question>;
    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>>;
    async fn list_questions_with_choices(&self, quiz_id: i64) -> Result<Vec<QuestionWithChoices>>;
    async fn delete_question(&self, question_id: i64) -> Result<bool>;
    async fn create_choice(&self, question_id: i64, choice: CreateChoiceRequest) -> Result<Choice>;
    async fn delete_choice(&self, choice_id: i64) -> Result<bool>;
    // 为提交创建作答记录（一个提交只能有一次作答）
    async fn create_quiz_attempt(&self, submission_id: i64) -> Result<QuizAttempt>;
    async fn get_quiz_attempt_by_id(&self, attempt_id: i64) -> Result<Option<QuizAttempt>>;
    async fn finish_quiz_attempt(&self, attempt_id: i64) -> Result<Option<QuizAttempt>>;
    async fn save_student_answer(
        &self,
        attempt_id: i64,
        answer: SaveAnswerRequest,
    ) -> Result<StudentAnswer>;
    async fn list_answers_by_attempt(&self, attempt_id: i64) -> Result<Vec<StudentAnswer>>;

    /// 视频与观看进度方法
    async fn create_video(&self, course_id: i64, video: CreateVideoRequest) -> Result<Video>;
    async fn get_video_by_id(&self, video_id: i64) -> Result<Option<Video>>;
    async fn list_videos_by_course(&self, course_id: i64) -> Result<Vec<Video>>;
    async fn update_video(&self, video_id: i64, update: UpdateVideoRequest)
    -> Result<Option<Video>>;
    async fn delete_video(&self, video_id: i64) -> Result<bool>;
    async fn get_video_progress(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<Option<VideoProgress>>;
    // 单事务内的读-合并-写：首次上报建行，之后单调推进
    async fn upsert_video_progress(
        &self,
        user_id: i64,
        video_id: i64,
        report: ProgressReport,
    ) -> Result<ProgressOutcome>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
