/// 业务错误码
///
/// 前两位对应 HTTP 状态语义，后三位为业务细分。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,

    // 400xx 请求格式/校验错误
    BadRequest = 40000,
    ValidationFailed = 40001,
    UserNameInvalid = 40002,
    UserEmailInvalid = 40003,
    PasswordTooWeak = 40004,

    // 401xx 认证错误
    Unauthorized = 40100,
    AuthFailed = 40101,

    // 403xx 权限错误
    Forbidden = 40300,
    NotCourseTeacher = 40301,

    // 404xx 资源不存在
    NotFound = 40400,
    UserNotFound = 40401,
    AccountNotFound = 40402,
    TermNotFound = 40403,
    CourseNotFound = 40404,
    SectionNotFound = 40405,
    EnrollmentNotFound = 40406,
    ModuleNotFound = 40407,
    ModuleItemNotFound = 40408,
    PageNotFound = 40409,
    AssignmentNotFound = 40410,
    SubmissionNotFound = 40411,
    QuizNotFound = 40412,
    QuestionNotFound = 40413,
    VideoNotFound = 40414,
    AttemptNotFound = 40415,

    // 409xx 资源冲突
    Conflict = 40900,
    AlreadyEnrolled = 40901,
    UserNameAlreadyExists = 40902,
    UserEmailAlreadyExists = 40903,
    SisIdAlreadyExists = 40904,
    TermInUse = 40905,
    FrontPageAlreadyExists = 40906,
    QuizAlreadyExists = 40907,

    // 429xx 频率限制
    RateLimitExceeded = 42900,

    // 500xx 服务端错误
    InternalServerError = 50000,
    RegisterFailed = 50001,
    EnrollFailed = 50002,
}
