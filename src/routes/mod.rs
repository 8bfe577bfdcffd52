pub mod accounts;

pub mod assignments;

pub mod auth;

pub mod courses;

pub mod enrollments;

pub mod quizzes;

pub mod terms;

pub mod users;

pub mod videos;

pub use accounts::configure_accounts_routes;
pub use assignments::configure_assignments_routes;
pub use auth::configure_auth_routes;
pub use courses::configure_courses_routes;
pub use enrollments::configure_enrollments_routes;
pub use quizzes::configure_quizzes_routes;
pub use terms::configure_terms_routes;
pub use users::configure_user_routes;
pub use videos::configure_videos_routes;
