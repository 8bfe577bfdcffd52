//! 预导入模块，方便使用

pub use super::accounts::{
    ActiveModel as AccountActiveModel, Entity as Accounts, Model as AccountModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::choices::{ActiveModel as ChoiceActiveModel, Entity as Choices, Model as ChoiceModel};
pub use super::courses::{ActiveModel as CourseActiveModel, Entity as Courses, Model as CourseModel};
pub use super::enrollments::{
    ActiveModel as EnrollmentActiveModel, Entity as Enrollments, Model as EnrollmentModel,
};
pub use super::module_items::{
    ActiveModel as ModuleItemActiveModel, Entity as ModuleItems, Model as ModuleItemModel,
};
pub use super::module_prerequisites::{
    ActiveModel as ModulePrerequisiteActiveModel, Entity as ModulePrerequisites,
    Model as ModulePrerequisiteModel,
};
pub use super::modules::{ActiveModel as ModuleActiveModel, Entity as Modules, Model as ModuleModel};
pub use super::pages::{ActiveModel as PageActiveModel, Entity as Pages, Model as PageModel};
pub use super::questions::{
    ActiveModel as QuestionActiveModel, Entity as Questions, Model as QuestionModel,
};
pub use super::quiz_attempts::{
    ActiveModel as QuizAttemptActiveModel, Entity as QuizAttempts, Model as QuizAttemptModel,
};
pub use super::quizzes::{ActiveModel as QuizActiveModel, Entity as Quizzes, Model as QuizModel};
pub use super::sections::{
    ActiveModel as SectionActiveModel, Entity as Sections, Model as SectionModel,
};
pub use super::student_answers::{
    ActiveModel as StudentAnswerActiveModel, Entity as StudentAnswers, Model as StudentAnswerModel,
};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
pub use super::terms::{ActiveModel as TermActiveModel, Entity as Terms, Model as TermModel};
pub use super::users::{ActiveModel as UserActiveModel, Entity as Users, Model as UserModel};
pub use super::video_progress::{
    ActiveModel as VideoProgressActiveModel, Entity as VideoProgressRecords,
    Model as VideoProgressModel,
};
pub use super::videos::{ActiveModel as VideoActiveModel, Entity as Videos, Model as VideoModel};
