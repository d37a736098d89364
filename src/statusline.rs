//! Line assembly: run the field builders in configured order, drop the empty
//! ones, join with the colored separator.

use chrono::{DateTime, Utc};

use crate::cli::{Args, Field};
use crate::models::{QuotaSnapshot, StatusInput};
use crate::render::bar::{BLOCKS, Glyphs};
use crate::render::color::Palette;
use crate::segments::{self, FIVE_HOUR_SECS, SEVEN_DAY_SECS};

/// Everything the renderers need, resolved once from the CLI. Field order,
/// widths, glyphs, separator, and colors all live here so one implementation
/// covers every display variant.
#[derive(Debug, Clone)]
pub struct LineConfig {
    pub fields: Vec<Field>,
    pub context_bar_width: usize,
    pub quota_bar_width: usize,
    pub warn_threshold: f64,
    pub separator: String,
    pub glyphs: Glyphs,
    pub palette: Palette,
}

impl LineConfig {
    pub fn from_args(args: &Args) -> Self {
        let colors = !args.no_color && std::env::var("NO_COLOR").is_err();
        Self {
            fields: args.fields.clone(),
            context_bar_width: args.context_bar_width,
            quota_bar_width: args.quota_bar_width,
            warn_threshold: args.warn_threshold,
            separator: args.separator.clone(),
            glyphs: BLOCKS,
            palette: Palette::new(colors),
        }
    }

    /// Default layout with colors off. Used by tests that assert on exact
    /// fragment text.
    pub fn plain() -> Self {
        Self {
            fields: vec![
                Field::Context,
                Field::Folder,
                Field::FiveHour,
                Field::SevenDay,
                Field::Model,
            ],
            context_bar_width: 8,
            quota_bar_width: 8,
            warn_threshold: 80.0,
            separator: "    ".to_string(),
            glyphs: BLOCKS,
            palette: Palette::new(false),
        }
    }
}

/// Builds the line: configured fields in order, `None` fragments dropped,
/// the rest joined with the separator. An input with nothing renderable
/// yields the empty string.
pub fn assemble(
    input: &StatusInput,
    quota: Option<&QuotaSnapshot>,
    now: DateTime<Utc>,
    cfg: &LineConfig,
) -> String {
    let fragments: Vec<String> = cfg
        .fields
        .iter()
        .filter_map(|field| match field {
            Field::Context => segments::context_bar(input, cfg),
            Field::Folder => segments::folder_label(input, cfg),
            Field::FiveHour => segments::quota_bar(
                quota.and_then(|q| q.five_hour.as_ref()),
                FIVE_HOUR_SECS,
                now,
                cfg,
            ),
            Field::SevenDay => segments::quota_bar(
                quota.and_then(|q| q.seven_day.as_ref()),
                SEVEN_DAY_SECS,
                now,
                cfg,
            ),
            Field::Model => segments::model_label(input, cfg),
        })
        .collect();

    fragments.join(&cfg.palette.paint(&cfg.separator, cfg.palette.muted))
}
