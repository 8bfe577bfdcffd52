pub mod accounts;
pub mod assignments;
pub mod auth;
pub mod courses;
pub mod enrollments;
pub mod modules;
pub mod pages;
pub mod quizzes;
pub mod submissions;
pub mod terms;
pub mod users;
pub mod videos;

pub use accounts::AccountService;
pub use assignments::AssignmentService;
pub use auth::AuthService;
pub use courses::CourseService;
pub use enrollments::EnrollmentService;
pub use modules::ModuleService;
pub use pages::PageService;
pub use quizzes::QuizService;
pub use submissions::SubmissionService;
pub use terms::TermService;
pub use users::UserService;
pub use videos::VideoService;
