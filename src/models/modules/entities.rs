use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 模块：课程内容的有序分组
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct Module {
    pub id: i64,
    pub course_id: i64,
    pub name: String,
    // 课程内模块顺序
    pub position: i32,
    pub unlock_at: Option<chrono::DateTime<chrono::Utc>>,
    pub require_sequential_progress: bool,
    // 先修模块 ID 列表（有向图邻接，仅存储，不做闭环检查）
    pub prerequisite_ids: Vec<i64>,
}

/// 模块条目指向的内容类型
///
/// 封闭枚举加 Unknown 兜底：数据库中的未知类型标签不会导致解析失败，
/// 只会落入 Unknown 并在展示层按通用内容处理。
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub enum ContentKind {
    Page,
    Assignment,
    Quiz,
    Video,
    Unknown,
}

impl ContentKind {
    /// 从存储的类型标签解析，未知标签返回 Unknown 而不是报错
    pub fn parse(s: &str) -> Self {
        match s {
            "page" => ContentKind::Page,
            "assignment" => ContentKind::Assignment,
            "quiz" => ContentKind::Quiz,
            "video" => ContentKind::Video,
            _ => ContentKind::Unknown,
        }
    }
}

impl std::fmt::Display for ContentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContentKind::Page => write!(f, "page"),
            ContentKind::Assignment => write!(f, "assignment"),
            ContentKind::Quiz => write!(f, "quiz"),
            ContentKind::Video => write!(f, "video"),
            ContentKind::Unknown => write!(f, "unknown"),
        }
    }
}

// 模块条目完成条件
#[derive(Debug, Clone, Serialize, PartialEq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub enum CompletionRequirement {
    MustView,
    MustSubmit,
    MinScore,
}

impl<'de> Deserialize<'de> for CompletionRequirement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse::<CompletionRequirement>().map_err(|_| {
            serde::de::Error::custom(format!(
                "无效的完成条件: '{s}'. 支持: must_view, must_submit, min_score"
            ))
        })
    }
}

impl std::fmt::Display for CompletionRequirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompletionRequirement::MustView => write!(f, "must_view"),
            CompletionRequirement::MustSubmit => write!(f, "must_submit"),
            CompletionRequirement::MinScore => write!(f, "min_score"),
        }
    }
}

impl std::str::FromStr for CompletionRequirement {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "must_view" => Ok(CompletionRequirement::MustView),
            "must_submit" => Ok(CompletionRequirement::MustSubmit),
            "min_score" => Ok(CompletionRequirement::MinScore),
            _ => Err(format!("Invalid completion requirement: {s}")),
        }
    }
}

// 模块条目：指向 Page/Assignment/Quiz/Video 的多态指针
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct ModuleItem {
    pub id: i64,
    pub module_id: i64,
    // 模块内条目顺序
    pub position: i32,
    // 缩进层级 0~5
    pub indent: i16,
    pub content_type: ContentKind,
    pub content_id: i64,
    pub completion_requirement: Option<CompletionRequirement>,
}

/// 课程级顺序导航用的条目视图：条目加上其所属模块的排序键
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/module.ts")]
pub struct SequencedModuleItem {
    pub module_position: i32,
    #[serde(flatten)]
    #[ts(flatten)]
    pub item: ModuleItem,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_kind_parse_known_tags() {
        assert_eq!(ContentKind::parse("page"), ContentKind::Page);
        assert_eq!(ContentKind::parse("assignment"), ContentKind::Assignment);
        assert_eq!(ContentKind::parse("quiz"), ContentKind::Quiz);
        assert_eq!(ContentKind::parse("video"), ContentKind::Video);
    }

    #[test]
    fn test_content_kind_unknown_tag_falls_back() {
        // 存量数据里出现过的陌生标签不应让解析报错
        assert_eq!(ContentKind::parse("external_url"), ContentKind::Unknown);
        assert_eq!(ContentKind::parse(""), ContentKind::Unknown);
    }

    #[test]
    fn test_content_kind_display_round_trip() {
        for kind in [
            ContentKind::Page,
            ContentKind::Assignment,
            ContentKind::Quiz,
            ContentKind::Video,
        ] {
            assert_eq!(ContentKind::parse(&kind.to_string()), kind);
        }
    }

    #[test]
    fn test_completion_requirement_parse() {
        assert_eq!(
            "must_view".parse::<CompletionRequirement>(),
            Ok(CompletionRequirement::MustView)
        );
        assert_eq!(
            "min_score".parse::<CompletionRequirement>(),
            Ok(CompletionRequirement::MinScore)
        );
        assert!("watch_all".parse::<CompletionRequirement>().is_err());
    }
}
