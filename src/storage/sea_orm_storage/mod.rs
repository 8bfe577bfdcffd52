//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod accounts;
mod assignments;
mod courses;
mod enrollments;
mod modules;
mod pages;
mod quizzes;
mod submissions;
mod terms;
mod users;
mod videos;

use crate::config::AppConfig;
use crate::errors::{LmsError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| LmsError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| LmsError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| LmsError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(LmsError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_username(&self, username: &str) -> Result<Option<User>> {
        self.get_user_by_username_impl(username).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn get_user_by_sis_id(&self, sis_id: &str) -> Result<Option<User>> {
        self.get_user_by_sis_id_impl(sis_id).await
    }

    async fn get_user_by_username_or_email(&self, identifier: &str) -> Result<Option<User>> {
        self.get_user_by_username_or_email_impl(identifier).await
    }

    async fn list_users_with_pagination(&self, query: UserListQuery) -> Result<UserListResponse> {
        self.list_users_with_pagination_impl(query).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    async fn delete_user(&self, id: i64) -> Result<bool> {
        self.delete_user_impl(id).await
    }

    async fn update_last_login(&self, id: i64) -> Result<bool> {
        self.update_last_login_impl(id).await
    }

    async fn count_users(&self) -> Result<u64> {
        self.count_users_impl().await
    }

    // 账户模块
    async fn create_account(&self, account: CreateAccountRequest) -> Result<Account> {
        self.create_account_impl(account).await
    }

    async fn get_account_by_id(&self, id: i64) -> Result<Option<Account>> {
        self.get_account_by_id_impl(id).await
    }

    async fn list_accounts(&self) -> Result<Vec<Account>> {
        self.list_accounts_impl().await
    }

    async fn update_account(
        &self,
        id: i64,
        update: UpdateAccountRequest,
    ) -> Result<Option<Account>> {
        self.update_account_impl(id, update).await
    }

    async fn delete_account(&self, id: i64) -> Result<bool> {
        self.delete_account_impl(id).await
    }

    // 学期模块
    async fn create_term(&self, term: CreateTermRequest) -> Result<Term> {
        self.create_term_impl(term).await
    }

    async fn get_term_by_id(&self, id: i64) -> Result<Option<Term>> {
        self.get_term_by_id_impl(id).await
    }

    async fn list_terms(&self) -> Result<Vec<Term>> {
        self.list_terms_impl().await
    }

    async fn update_term(&self, id: i64, update: UpdateTermRequest) -> Result<Option<Term>> {
        self.update_term_impl(id, update).await
    }

    async fn delete_term(&self, id: i64) -> Result<bool> {
        self.delete_term_impl(id).await
    }

    // 课程与分班模块
    async fn create_course(&self, course: CreateCourseRequest) -> Result<Course> {
        self.create_course_impl(course).await
    }

    async fn get_course_by_id(&self, course_id: i64) -> Result<Option<Course>> {
        self.get_course_by_id_impl(course_id).await
    }

    async fn list_courses_with_pagination(
        &self,
        query: CourseListQuery,
    ) -> Result<CourseListResponse> {
        self.list_courses_with_pagination_impl(query).await
    }

    async fn list_all_courses(&self) -> Result<Vec<Course>> {
        self.list_all_courses_impl().await
    }

    async fn update_course(
        &self,
        course_id: i64,
        update: UpdateCourseRequest,
    ) -> Result<Option<Course>> {
        self.update_course_impl(course_id, update).await
    }

    async fn delete_course(&self, course_id: i64) -> Result<bool> {
        self.delete_course_impl(course_id).await
    }

    async fn create_section(
        &self,
        course_id: i64,
        section: CreateSectionRequest,
    ) -> Result<Section> {
        self.create_section_impl(course_id, section).await
    }

    async fn get_section_by_id(&self, section_id: i64) -> Result<Option<Section>> {
        self.get_section_by_id_impl(section_id).await
    }

    async fn list_sections_by_course(&self, course_id: i64) -> Result<Vec<Section>> {
        self.list_sections_by_course_impl(course_id).await
    }

    async fn delete_section(&self, section_id: i64) -> Result<bool> {
        self.delete_section_impl(section_id).await
    }

    async fn get_first_section_of_course(&self, course_id: i64) -> Result<Option<Section>> {
        self.get_first_section_of_course_impl(course_id).await
    }

    async fn find_course_teacher_name(&self, course_id: i64) -> Result<Option<String>> {
        self.find_course_teacher_name_impl(course_id).await
    }

    // 选课模块
    async fn create_enrollment(
        &self,
        user_id: i64,
        section_id: i64,
        role: EnrollmentRole,
        state: EnrollmentState,
    ) -> Result<Enrollment> {
        self.create_enrollment_impl(user_id, section_id, role, state)
            .await
    }

    async fn get_enrollment_by_user_and_section(
        &self,
        user_id: i64,
        section_id: i64,
    ) -> Result<Option<Enrollment>> {
        self.get_enrollment_by_user_and_section_impl(user_id, section_id)
            .await
    }

    async fn list_enrollments_with_pagination(
        &self,
        query: EnrollmentListQuery,
    ) -> Result<EnrollmentListResponse> {
        self.list_enrollments_with_pagination_impl(query).await
    }

    async fn delete_enrollment(&self, id: i64) -> Result<bool> {
        self.delete_enrollment_impl(id).await
    }

    async fn list_enrolled_course_ids(&self, user_id: i64) -> Result<Vec<i64>> {
        self.list_enrolled_course_ids_impl(user_id).await
    }

    async fn is_teacher_for_course(&self, user_id: i64, course_id: i64) -> Result<bool> {
        self.is_teacher_for_course_impl(user_id, course_id).await
    }

    // 模块与模块条目模块
    async fn create_module(&self, course_id: i64, module: CreateModuleRequest) -> Result<Module> {
        self.create_module_impl(course_id, module).await
    }

    async fn get_module_by_id(&self, module_id: i64) -> Result<Option<Module>> {
        self.get_module_by_id_impl(module_id).await
    }

    async fn list_modules_with_items(&self, course_id: i64) -> Result<Vec<ModuleWithItems>> {
        self.list_modules_with_items_impl(course_id).await
    }

    async fn update_module(
        &self,
        module_id: i64,
        update: UpdateModuleRequest,
    ) -> Result<Option<Module>> {
        self.update_module_impl(module_id, update).await
    }

    async fn delete_module(&self, module_id: i64) -> Result<bool> {
        self.delete_module_impl(module_id).await
    }

    async fn create_module_item(
        &self,
        module_id: i64,
        item: CreateModuleItemRequest,
    ) -> Result<ModuleItem> {
        self.create_module_item_impl(module_id, item).await
    }

    async fn get_module_item_in_course(
        &self,
        course_id: i64,
        item_id: i64,
    ) -> Result<Option<ModuleItem>> {
        self.get_module_item_in_course_impl(course_id, item_id).await
    }

    async fn delete_module_item(&self, item_id: i64) -> Result<bool> {
        self.delete_module_item_impl(item_id).await
    }

    async fn list_course_sequence(&self, course_id: i64) -> Result<Vec<SequencedModuleItem>> {
        self.list_course_sequence_impl(course_id).await
    }

    async fn resolve_module_item_content(&self, item: &ModuleItem) -> Result<ModuleItemContent> {
        self.resolve_module_item_content_impl(item).await
    }

    // 页面模块
    async fn create_page(&self, course_id: i64, page: CreatePageRequest) -> Result<Page> {
        self.create_page_impl(course_id, page).await
    }

    async fn get_page_by_id(&self, page_id: i64) -> Result<Option<Page>> {
        self.get_page_by_id_impl(page_id).await
    }

    async fn list_pages_by_course(&self, course_id: i64) -> Result<Vec<Page>> {
        self.list_pages_by_course_impl(course_id).await
    }

    async fn update_page(&self, page_id: i64, update: UpdatePageRequest) -> Result<Option<Page>> {
        self.update_page_impl(page_id, update).await
    }

    async fn delete_page(&self, page_id: i64) -> Result<bool> {
        self.delete_page_impl(page_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        course_id: i64,
        assignment: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(course_id, assignment).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn list_assignments_by_course(&self, course_id: i64) -> Result<Vec<Assignment>> {
        self.list_assignments_by_course_impl(course_id).await
    }

    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(assignment_id, update).await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    // 提交与评分模块
    async fn create_submission(
        &self,
        assignment_id: i64,
        user_id: i64,
        submission: CreateSubmissionRequest,
    ) -> Result<Submission> {
        self.create_submission_impl(assignment_id, user_id, submission)
            .await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn get_latest_submission(
        &self,
        assignment_id: i64,
        user_id: i64,
    ) -> Result<Option<Submission>> {
        self.get_latest_submission_impl(assignment_id, user_id).await
    }

    async fn list_submissions_for_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<SubmissionListItem>> {
        self.list_submissions_for_assignment_impl(assignment_id)
            .await
    }

    async fn list_submissions_for_grading(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        self.list_submissions_for_grading_impl(assignment_id).await
    }

    async fn grade_submission(
        &self,
        submission_id: i64,
        grade: GradeSubmissionRequest,
    ) -> Result<Option<Submission>> {
        self.grade_submission_impl(submission_id, grade).await
    }

    // 测验模块
    async fn create_quiz(&self, quiz: CreateQuizRequest) -> Result<Quiz> {
        self.create_quiz_impl(quiz).await
    }

    async fn get_quiz_by_id(&self, quiz_id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_id_impl(quiz_id).await
    }

    async fn get_quiz_by_assignment_id(&self, assignment_id: i64) -> Result<Option<Quiz>> {
        self.get_quiz_by_assignment_id_impl(assignment_id).await
    }

    async fn update_quiz(&self, quiz_id: i64, update: UpdateQuizRequest) -> Result<Option<Quiz>> {
        self.update_quiz_impl(quiz_id, update).await
    }

    async fn delete_quiz(&self, quiz_id: i64) -> Result<bool> {
        self.delete_quiz_impl(quiz_id).await
    }

    async fn create_question(
        &self,
        quiz_id: i64,
        question: CreateQuestionRequest,
    ) -> Result<Question> {
        self.create_question_impl(quiz_id, question).await
    }

    async fn get_question_by_id(&self, question_id: i64) -> Result<Option<Question>> {
        self.get_question_by_id_impl(question_id).await
    }

    async fn list_questions_with_choices(&self, quiz_id: i64) -> Result<Vec<QuestionWithChoices>> {
        self.list_questions_with_choices_impl(quiz_id).await
    }

    async fn delete_question(&self, question_id: i64) -> Result<bool> {
        self.delete_question_impl(question_id).await
    }

    async fn create_choice(&self, question_id: i64, choice: CreateChoiceRequest) -> Result<Choice> {
        self.create_choice_impl(question_id, choice).await
    }

    async fn delete_choice(&self, choice_id: i64) -> Result<bool> {
        self.delete_choice_impl(choice_id).await
    }

    async fn create_quiz_attempt(&self, submission_id: i64) -> Result<QuizAttempt> {
        self.create_quiz_attempt_impl(submission_id).await
    }

    async fn get_quiz_attempt_by_id(&self, attempt_id: i64) -> Result<Option<QuizAttempt>> {
        self.get_quiz_attempt_by_id_impl(attempt_id).await
    }

    async fn finish_quiz_attempt(&self, attempt_id: i64) -> Result<Option<QuizAttempt>> {
        self.finish_quiz_attempt_impl(attempt_id).await
    }

    async fn save_student_answer(
        &self,
        attempt_id: i64,
        answer: SaveAnswerRequest,
    ) -> Result<StudentAnswer> {
        self.save_student_answer_impl(attempt_id, answer).await
    }

    async fn list_answers_by_attempt(&self, attempt_id: i64) -> Result<Vec<StudentAnswer>> {
        self.list_answers_by_attempt_impl(attempt_id).await
    }

    // 视频与进度模块
    async fn create_video(&self, course_id: i64, video: CreateVideoRequest) -> Result<Video> {
        self.create_video_impl(course_id, video).await
    }

    async fn get_video_by_id(&self, video_id: i64) -> Result<Option<Video>> {
        self.get_video_by_id_impl(video_id).await
    }

    async fn list_videos_by_course(&self, course_id: i64) -> Result<Vec<Video>> {
        self.list_videos_by_course_impl(course_id).await
    }

    async fn update_video(
        &self,
        video_id: i64,
        update: UpdateVideoRequest,
    ) -> Result<Option<Video>> {
        self.update_video_impl(video_id, update).await
    }

    async fn delete_video(&self, video_id: i64) -> Result<bool> {
        self.delete_video_impl(video_id).await
    }

    async fn get_video_progress(
        &self,
        user_id: i64,
        video_id: i64,
    ) -> Result<Option<VideoProgress>> {
        self.get_video_progress_impl(user_id, video_id).await
    }

    async fn upsert_video_progress(
        &self,
        user_id: i64,
        video_id: i64,
        report: ProgressReport,
    ) -> Result<ProgressOutcome> {
        self.upsert_video_progress_impl(user_id, video_id, report)
            .await
    }
}
