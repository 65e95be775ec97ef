//! # Zont Architecture
//!
//! Zont is a **UI-agnostic time zone conversion library**. The binary wraps it
//! with a one-shot CLI and an interactive prompt session, but nothing in this
//! crate root assumes a terminal.
//!
//! ## The Two-Layer Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI/TUI Layer (args.rs, cli/, wired by main.rs)            │
//! │  - Parses arguments, drives prompts, colors output          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core Layer (aliases, parse, zones, convert, present)       │
//! │  - Pure parsing, resolution, and conversion logic           │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Conversion Pipeline
//!
//! A conversion runs through four stages, each independently testable:
//!
//! 1. [`parse::parse_time`] turns a free-form token (`3pm`, `15:30`, `now`,
//!    `2024-01-15 15:00`) into a [`parse::ClockSpec`].
//! 2. [`zones::resolve`] turns a zone token (alias or IANA identifier, with
//!    fuzzy fallback) into a [`zones::ZoneRef`].
//! 3. [`convert::convert`] materializes the spec in the source zone and
//!    produces a [`convert::Conversion`] with a signed day offset.
//! 4. [`present::format_conversion`] renders the result as plain text;
//!    colorization is a CLI concern layered on top.
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From the core modules inward, code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<T>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! The only ambient state is the zone catalog and alias table, both read-only
//! and initialized once per process.
//!
//! ## Module Overview
//!
//! - [`aliases`]: Fixed abbreviation → IANA identifier table
//! - [`parse`]: Free-form time token parsing
//! - [`zones`]: Three-tier zone resolution with ranked fuzzy suggestions
//! - [`convert`]: Conversion and day-shift computation
//! - [`present`]: Plain-text result formatting
//! - [`config`]: Optional user defaults for the interactive session
//! - [`error`]: Error types

pub mod aliases;
pub mod config;
pub mod convert;
pub mod error;
pub mod parse;
pub mod present;
pub mod zones;
