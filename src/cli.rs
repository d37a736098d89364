/// One renderable field of the status line.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Context-window usage bar
    Context,
    /// Workspace folder name
    Folder,
    /// 5-hour rate-limit window bar
    FiveHour,
    /// 7-day rate-limit window bar
    SevenDay,
    /// Model name
    Model,
}

#[derive(clap::Parser, Debug)]
#[command(name = "claude-quotaline", about = "One-line quota statusline for Claude Code")]
pub struct Args {
    /// Fields to render, in order (comma-separated)
    #[arg(
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = [Field::Context, Field::Folder, Field::FiveHour, Field::SevenDay, Field::Model]
    )]
    pub fields: Vec<Field>,

    /// Context bar width in cells
    #[arg(long, default_value_t = 8)]
    pub context_bar_width: usize,

    /// Quota bar width in cells
    #[arg(long, default_value_t = 8)]
    pub quota_bar_width: usize,

    /// Context usage percent at which the bar turns the warning color
    #[arg(long, default_value_t = 80.0)]
    pub warn_threshold: f64,

    /// Separator between fields
    #[arg(long, default_value = "    ")]
    pub separator: String,

    /// Disable ANSI colors (NO_COLOR is also honored)
    #[arg(long)]
    pub no_color: bool,

    /// Print diagnostics to stderr (stdout stays clean)
    #[arg(long, env = "CLAUDE_QUOTALINE_DEBUG")]
    pub debug: bool,
}

impl Args {
    /// Never aborts with a nonzero exit: help and version print normally,
    /// any other parse failure falls back to the defaults so the host still
    /// gets its line.
    pub fn parse_lenient() -> Self {
        match <Args as clap::Parser>::try_parse() {
            Ok(args) => args,
            Err(err)
                if matches!(
                    err.kind(),
                    clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion
                ) =>
            {
                let _ = err.print();
                std::process::exit(0);
            }
            Err(_) => <Args as clap::Parser>::parse_from(["claude-quotaline"]),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_render_all_fields_in_source_order() {
        let args = <Args as clap::Parser>::parse_from(["claude-quotaline"]);
        assert_eq!(
            args.fields,
            vec![
                Field::Context,
                Field::Folder,
                Field::FiveHour,
                Field::SevenDay,
                Field::Model
            ]
        );
        assert_eq!(args.context_bar_width, 8);
        assert_eq!(args.quota_bar_width, 8);
    }

    #[test]
    fn fields_parse_as_comma_list() {
        let args = <Args as clap::Parser>::parse_from([
            "claude-quotaline",
            "--fields",
            "model,folder",
        ]);
        assert_eq!(args.fields, vec![Field::Model, Field::Folder]);
    }
}
