use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程内教学角色（Canvas 的五种标准角色）
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub enum EnrollmentRole {
    Student,  // 学生
    Teacher,  // 教师
    Ta,       // 助教
    Observer, // 旁听
    Designer, // 课程设计者
}

impl EnrollmentRole {
    pub const STUDENT: &'static str = "student";
    pub const TEACHER: &'static str = "teacher";
    pub const TA: &'static str = "ta";
    pub const OBSERVER: &'static str = "observer";
    pub const DESIGNER: &'static str = "designer";
}

impl<'de> Deserialize<'de> for EnrollmentRole {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<EnrollmentRole>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的选课角色: '{s}'. 支持的角色: student, teacher, ta, observer, designer"
            ))
        })
    }
}

impl std::fmt::Display for EnrollmentRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentRole::Student => write!(f, "{}", EnrollmentRole::STUDENT),
            EnrollmentRole::Teacher => write!(f, "{}", EnrollmentRole::TEACHER),
            EnrollmentRole::Ta => write!(f, "{}", EnrollmentRole::TA),
            EnrollmentRole::Observer => write!(f, "{}", EnrollmentRole::OBSERVER),
            EnrollmentRole::Designer => write!(f, "{}", EnrollmentRole::DESIGNER),
        }
    }
}

impl std::str::FromStr for EnrollmentRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(EnrollmentRole::Student),
            "teacher" => Ok(EnrollmentRole::Teacher),
            "ta" => Ok(EnrollmentRole::Ta),
            "observer" => Ok(EnrollmentRole::Observer),
            "designer" => Ok(EnrollmentRole::Designer),
            _ => Err(format!("Invalid enrollment role: {s}")),
        }
    }
}

// 选课状态
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub enum EnrollmentState {
    Active,    // 生效
    Inactive,  // 停用
    Concluded, // 已结课
    Pending,   // 待处理
}

impl<'de> Deserialize<'de> for EnrollmentState {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<EnrollmentState>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的选课状态: '{s}'. 支持的状态: active, inactive, concluded, pending"
            ))
        })
    }
}

impl std::fmt::Display for EnrollmentState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EnrollmentState::Active => write!(f, "active"),
            EnrollmentState::Inactive => write!(f, "inactive"),
            EnrollmentState::Concluded => write!(f, "concluded"),
            EnrollmentState::Pending => write!(f, "pending"),
        }
    }
}

impl std::str::FromStr for EnrollmentState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(EnrollmentState::Active),
            "inactive" => Ok(EnrollmentState::Inactive),
            "concluded" => Ok(EnrollmentState::Concluded),
            "pending" => Ok(EnrollmentState::Pending),
            _ => Err(format!("Invalid enrollment state: {s}")),
        }
    }
}

// 选课记录：User 与 Section 的角色绑定
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/enrollment.ts")]
pub struct Enrollment {
    pub id: i64,
    pub user_id: i64,
    pub section_id: i64,
    pub role: EnrollmentRole,
    pub enrollment_state: EnrollmentState,
    pub grade: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
