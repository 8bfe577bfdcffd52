use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 课程视频
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct Video {
    pub id: i64,
    pub course_id: i64,
    pub title: String,
    // 外部播放地址（YouTube、直链 mp4 等）
    pub video_url: Option<String>,
    // 已上传文件的存储路径
    pub video_file: Option<String>,
    // 总时长（秒）
    pub duration: i64,
}

impl Video {
    /// 播放地址，video_url 优先于上传文件
    pub fn src_url(&self) -> Option<&str> {
        self.video_url
            .as_deref()
            .or(self.video_file.as_deref())
    }
}

// 单个用户对单个视频的观看进度，(user, video) 唯一
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/video.ts")]
pub struct VideoProgress {
    pub id: i64,
    pub user_id: i64,
    pub video_id: i64,
    // 已观看秒数，只增不减
    pub watched_time: f64,
    // 达到完成阈值后不再回退
    pub is_completed: bool,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

/// 完成阈值：观看时长达到总时长的 95% 即视为完成
pub const COMPLETION_THRESHOLD: f64 = 0.95;

/// 客户端上报的一次进度
#[derive(Debug, Clone, Copy)]
pub struct ProgressReport {
    pub watched_time: f64,
    pub duration: f64,
}

/// 一次进度上报合并后的持久化结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProgressOutcome {
    pub watched_time: f64,
    pub is_completed: bool,
    pub percent: i64,
}

/// 将一次上报合并进已有进度
///
/// - 上报时长 <= 0 时回退到视频库存时长，库存也为 0 则按 1 秒计，避免除零
/// - 上报秒数先夹到 >= 0
/// - 持久化秒数单调不减：快退不会降低已记录的进度
/// - 完成标志一旦置位便不再清除
/// - percent = floor(100 * watched / duration)，夹到 [0, 100]
pub fn merge_progress(
    existing: Option<(f64, bool)>,
    report: ProgressReport,
    stored_duration: i64,
) -> ProgressOutcome {
    let duration = if report.duration > 0.0 {
        report.duration
    } else if stored_duration > 0 {
        stored_duration as f64
    } else {
        1.0
    };

    let reported = report.watched_time.max(0.0);
    let (existing_watched, existing_completed) = existing.unwrap_or((0.0, false));

    let watched_time = existing_watched.max(reported);
    let is_completed = existing_completed || watched_time >= COMPLETION_THRESHOLD * duration;
    let percent = ((watched_time / duration * 100.0).floor() as i64).clamp(0, 100);

    ProgressOutcome {
        watched_time,
        is_completed,
        percent,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(watched_time: f64, duration: f64) -> ProgressReport {
        ProgressReport {
            watched_time,
            duration,
        }
    }

    #[test]
    fn test_watched_time_is_monotonic() {
        let first = merge_progress(None, report(300.0, 600.0), 600);
        assert_eq!(first.watched_time, 300.0);

        let second = merge_progress(
            Some((first.watched_time, first.is_completed)),
            report(200.0, 600.0),
            600,
        );
        assert_eq!(second.watched_time, 300.0);

        let third = merge_progress(
            Some((second.watched_time, second.is_completed)),
            report(150.0, 600.0),
            600,
        );
        assert_eq!(third.watched_time, 300.0);
    }

    #[test]
    fn test_completion_latches() {
        let done = merge_progress(None, report(590.0, 600.0), 600);
        assert!(done.is_completed);

        // 后续更小的上报不会清掉完成标志
        let after = merge_progress(
            Some((done.watched_time, done.is_completed)),
            report(10.0, 600.0),
            600,
        );
        assert!(after.is_completed);
        assert_eq!(after.watched_time, 590.0);
    }

    #[test]
    fn test_percent_is_bounded() {
        // 上报超过总时长
        let over = merge_progress(None, report(1200.0, 600.0), 600);
        assert_eq!(over.percent, 100);

        // 负数上报夹到 0
        let negative = merge_progress(None, report(-50.0, 600.0), 600);
        assert_eq!(negative.percent, 0);
        assert_eq!(negative.watched_time, 0.0);

        // 上报与库存时长都为 0 时按 1 秒计，不会除零
        let zero = merge_progress(None, report(0.0, 0.0), 0);
        assert_eq!(zero.percent, 0);
        let zero_watched = merge_progress(None, report(3.0, 0.0), 0);
        assert_eq!(zero_watched.percent, 100);
    }

    #[test]
    fn test_stored_duration_fallback() {
        // 客户端时长缺失时使用库存时长
        let outcome = merge_progress(None, report(300.0, 0.0), 600);
        assert_eq!(outcome.percent, 50);
        assert!(!outcome.is_completed);
    }

    #[test]
    fn test_rewind_then_catch_up_scenario() {
        // duration = 600s: 300 -> 200 -> 590，最终 590 / 98% / 已完成
        let mut state: Option<(f64, bool)> = None;
        let mut last = None;
        for watched in [300.0, 200.0, 590.0] {
            let outcome = merge_progress(state, report(watched, 600.0), 600);
            state = Some((outcome.watched_time, outcome.is_completed));
            last = Some(outcome);
        }

        let last = last.unwrap();
        assert_eq!(last.watched_time, 590.0);
        assert_eq!(last.percent, 98);
        assert!(last.is_completed, "590 >= 0.95 * 600 = 570");
    }

    #[test]
    fn test_completion_threshold_boundary() {
        let below = merge_progress(None, report(569.9, 600.0), 600);
        assert!(!below.is_completed);

        let at = merge_progress(None, report(570.0, 600.0), 600);
        assert!(at.is_completed);
    }

    #[test]
    fn test_video_src_url_prefers_external_url() {
        let video = Video {
            id: 1,
            course_id: 1,
            title: "Intro".to_string(),
            video_url: Some("https://example.com/v.mp4".to_string()),
            video_file: Some("videos/v.mp4".to_string()),
            duration: 600,
        };
        assert_eq!(video.src_url(), Some("https://example.com/v.mp4"));

        let uploaded = Video {
            video_url: None,
            ..video.clone()
        };
        assert_eq!(uploaded.src_url(), Some("videos/v.mp4"));
    }
}
