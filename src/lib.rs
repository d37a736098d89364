//! # Claude Quotaline
//!
//! A one-line quota statusline for Claude Code sessions. Reads the statusLine
//! hook payload from stdin, merges in rate-limit data from the OAuth usage
//! endpoint (behind a short-lived file cache), and prints a single
//! ANSI-colored line: context-window bar, workspace folder, 5-hour and 7-day
//! quota bars, model name.
//!
//! Best-effort by contract: malformed input, missing files, and network
//! failures all degrade to a shorter line or no output at all, never a
//! nonzero exit.

/// File-backed quota cache shared across invocations
pub mod cache;

/// Command-line argument parsing and configuration
pub mod cli;

/// Data models for the hook payload and quota snapshots
pub mod models;

/// Quota retrieval: cache, credentials, and the usage endpoint
pub mod quota;

/// ANSI palette and progress-bar rendering
pub mod render;

/// Field builders for the individual line fragments
pub mod segments;

/// Line assembly from configured fields
pub mod statusline;
