use std::io::Read;
use std::panic::{self, AssertUnwindSafe};

use chrono::Utc;

use claude_quotaline::cli::Args;
use claude_quotaline::models::StatusInput;
use claude_quotaline::quota::QuotaFetcher;
use claude_quotaline::statusline::{LineConfig, assemble};

fn main() {
    // Outermost net: the status line is decoration, so even a panic inside
    // the pipeline must end as silence on stdout and exit 0.
    let line = panic::catch_unwind(AssertUnwindSafe(run)).ok().flatten();
    if let Some(line) = line {
        print!("{line}");
    }
}

fn run() -> Option<String> {
    let args = Args::parse_lenient();
    let cfg = LineConfig::from_args(&args);

    let stdin = read_stdin().ok()?;
    let input: StatusInput = serde_json::from_slice(&stdin).ok()?;

    let now = Utc::now();
    let quota = QuotaFetcher::from_user_dirs().and_then(|fetcher| fetcher.get(now));

    if args.debug {
        eprintln!("fields: {:?}", args.fields);
        eprintln!("quota: {quota:?}");
    }

    Some(assemble(&input, quota.as_ref(), now, &cfg))
}

fn read_stdin() -> anyhow::Result<Vec<u8>> {
    let mut buf = Vec::new();
    std::io::stdin().read_to_end(&mut buf)?;
    Ok(buf)
}
