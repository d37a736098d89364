//! Field builders. Each takes its slice of the input and returns
//! `Some(fragment)` or `None` to omit the field from the line entirely;
//! missing or unusable data is never an error here.

use std::path::Path;

use chrono::{DateTime, Utc};

use crate::models::{QuotaPeriod, StatusInput};
use crate::render::bar::{render_bar, render_split_bar};
use crate::statusline::LineConfig;

pub const FIVE_HOUR_SECS: i64 = 5 * 3600;
pub const SEVEN_DAY_SECS: i64 = 7 * 86_400;

const MODEL_FALLBACK: &str = "Claude";

/// Context-window usage: warning-capable bar plus a `NN%` label. Omitted
/// when the hook does not report a remaining percentage.
pub fn context_bar(input: &StatusInput, cfg: &LineConfig) -> Option<String> {
    let remaining = input.context_window.remaining_percentage?;
    if !remaining.is_finite() {
        return None;
    }
    let used = (100.0 - remaining).round().clamp(0.0, 100.0);
    let bar = render_bar(
        used,
        cfg.context_bar_width,
        Some(cfg.warn_threshold),
        cfg.glyphs,
        &cfg.palette,
    );
    Some(format!("{bar} {used:.0}%"))
}

/// Final path component of the workspace directory, `.` when absent.
pub fn folder_label(input: &StatusInput, cfg: &LineConfig) -> Option<String> {
    let dir = input.workspace.current_dir.as_deref().unwrap_or(".");
    let name = Path::new(dir)
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| dir.to_string());
    Some(cfg.palette.paint(&name, cfg.palette.muted))
}

/// Quota bar for one rolling window: dual-tone actual/projected bar followed
/// by the time remaining until the window resets. The projection is a linear
/// extrapolation of the consumption rate over the elapsed part of the window.
pub fn quota_bar(
    period: Option<&QuotaPeriod>,
    window_secs: i64,
    now: DateTime<Utc>,
    cfg: &LineConfig,
) -> Option<String> {
    let period = period?;
    let secs_left = period
        .resets_at
        .map(|t| (t - now).num_seconds())
        .unwrap_or(0);

    let actual = if period.utilization.is_finite() {
        period.utilization.max(0.0)
    } else {
        0.0
    };
    let elapsed = (window_secs - secs_left.max(0)) as f64;
    let projected = if elapsed > 0.0 && actual > 0.0 {
        (actual / elapsed * window_secs as f64).round()
    } else {
        actual
    };

    let bar = render_split_bar(actual, projected, cfg.quota_bar_width, cfg.glyphs, &cfg.palette);
    Some(match reset_label(secs_left) {
        Some(label) => format!("{bar} {}", cfg.palette.paint(&label, cfg.palette.muted)),
        None => bar,
    })
}

/// Model display name with the leading brand prefix stripped.
pub fn model_label(input: &StatusInput, cfg: &LineConfig) -> Option<String> {
    let name = input.model.display_name.as_deref().unwrap_or(MODEL_FALLBACK);
    Some(cfg.palette.paint(strip_brand_prefix(name), cfg.palette.muted))
}

fn strip_brand_prefix(name: &str) -> &str {
    if let Some(prefix) = name.get(..6) {
        if prefix.eq_ignore_ascii_case("claude") {
            let rest = &name[6..];
            if rest.starts_with(char::is_whitespace) {
                return rest.trim_start();
            }
        }
    }
    name
}

/// Time-to-reset with tiered precision: minutes under an hour, hours plus
/// leftover minutes under five hours, whole hours under a day, then days
/// plus leftover hours. `None` once the reset is due.
pub fn reset_label(secs: i64) -> Option<String> {
    if secs <= 0 {
        return None;
    }
    let m = (secs / 60) % 60;
    let h = (secs / 3600) % 24;
    let d = secs / 86_400;
    let label = if secs < 3600 {
        format!("{m}m")
    } else if secs < 18_000 {
        if m > 0 {
            format!("{h}h {m}m")
        } else {
            format!("{h}h")
        }
    } else if secs < 86_400 {
        format!("{h}h")
    } else if h > 0 {
        format!("{d}d {h}h")
    } else {
        format!("{d}d")
    };
    Some(label)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::hook::{ContextWindow, HookModel, HookWorkspace};
    use chrono::TimeDelta;

    fn cfg() -> LineConfig {
        LineConfig::plain()
    }

    fn input_with_remaining(remaining: f64) -> StatusInput {
        StatusInput {
            context_window: ContextWindow {
                remaining_percentage: Some(remaining),
            },
            ..Default::default()
        }
    }

    #[test]
    fn context_bar_reports_usage_not_remaining() {
        let fragment = context_bar(&input_with_remaining(25.0), &cfg()).unwrap();
        assert!(fragment.ends_with(" 75%"), "got {fragment:?}");
    }

    #[test]
    fn context_bar_omitted_without_percentage() {
        assert!(context_bar(&StatusInput::default(), &cfg()).is_none());
        assert!(context_bar(&input_with_remaining(f64::NAN), &cfg()).is_none());
    }

    #[test]
    fn context_bar_clamps_out_of_range_remaining() {
        let fragment = context_bar(&input_with_remaining(150.0), &cfg()).unwrap();
        assert!(fragment.ends_with(" 0%"), "got {fragment:?}");
        let fragment = context_bar(&input_with_remaining(-20.0), &cfg()).unwrap();
        assert!(fragment.ends_with(" 100%"), "got {fragment:?}");
    }

    #[test]
    fn folder_label_takes_final_component() {
        let input = StatusInput {
            workspace: HookWorkspace {
                current_dir: Some("/home/user/projects/demo".into()),
            },
            ..Default::default()
        };
        assert_eq!(folder_label(&input, &cfg()).unwrap(), "demo");
    }

    #[test]
    fn folder_label_defaults_to_dot() {
        assert_eq!(folder_label(&StatusInput::default(), &cfg()).unwrap(), ".");
    }

    #[test]
    fn model_label_strips_brand_prefix() {
        let input = StatusInput {
            model: HookModel {
                display_name: Some("Claude Opus".into()),
            },
            ..Default::default()
        };
        assert_eq!(model_label(&input, &cfg()).unwrap(), "Opus");
    }

    #[test]
    fn model_label_keeps_non_prefixed_names() {
        assert_eq!(strip_brand_prefix("Claudette"), "Claudette");
        assert_eq!(strip_brand_prefix("claude sonnet"), "sonnet");
        assert_eq!(strip_brand_prefix("Opus"), "Opus");
    }

    #[test]
    fn model_label_falls_back_to_brand() {
        assert_eq!(model_label(&StatusInput::default(), &cfg()).unwrap(), "Claude");
    }

    #[test]
    fn reset_label_tiers() {
        assert_eq!(reset_label(0), None);
        assert_eq!(reset_label(-300), None);
        assert_eq!(reset_label(30 * 60).unwrap(), "30m");
        assert_eq!(reset_label(2 * 3600 + 5 * 60).unwrap(), "2h 5m");
        assert_eq!(reset_label(2 * 3600).unwrap(), "2h");
        assert_eq!(reset_label(8 * 3600).unwrap(), "8h");
        assert_eq!(reset_label(86_400 + 3600).unwrap(), "1d 1h");
        assert_eq!(reset_label(2 * 86_400).unwrap(), "2d");
    }

    #[test]
    fn quota_bar_projects_linear_consumption() {
        // utilization 40, reset 30 minutes out, 5-hour window:
        // elapsed = 16200s, projected = round(40 / 16200 * 18000) = 44
        // -> 3 consumed cells + 1 projected cell on an 8-cell bar
        let now = Utc::now();
        let period = QuotaPeriod {
            utilization: 40.0,
            resets_at: Some(now + TimeDelta::minutes(30)),
        };
        let fragment = quota_bar(Some(&period), FIVE_HOUR_SECS, now, &cfg()).unwrap();
        assert_eq!(fragment, "▰▰▰▰▱▱▱▱ 30m");
    }

    #[test]
    fn quota_bar_without_reset_uses_current_utilization() {
        let now = Utc::now();
        let period = QuotaPeriod {
            utilization: 40.0,
            resets_at: None,
        };
        // no reset time -> window fully elapsed -> projection equals actual,
        // and there is no time label
        let fragment = quota_bar(Some(&period), FIVE_HOUR_SECS, now, &cfg()).unwrap();
        assert_eq!(fragment, "▰▰▰▱▱▱▱▱");
    }

    #[test]
    fn quota_bar_omitted_without_period() {
        assert!(quota_bar(None, FIVE_HOUR_SECS, Utc::now(), &cfg()).is_none());
    }

    #[test]
    fn quota_bar_with_past_reset_drops_label() {
        let now = Utc::now();
        let period = QuotaPeriod {
            utilization: 10.0,
            resets_at: Some(now - TimeDelta::minutes(5)),
        };
        let fragment = quota_bar(Some(&period), FIVE_HOUR_SECS, now, &cfg()).unwrap();
        assert!(!fragment.contains('m'), "got {fragment:?}");
    }
}
