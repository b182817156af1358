//! Core library for staticcheck-gitlab
//!
//! This crate implements the **Functional Core** of the staticcheck-gitlab
//! application, following the Functional Core - Imperative Shell architectural
//! pattern.
//!
//! # Architecture Overview
//!
//! - **`staticcheck_gitlab_core`** (this crate): Pure transformation functions with zero I/O
//! - **`staticcheck-gitlab`**: Reads stdin, writes stdout and sets the exit code (the Imperative Shell)
//!
//! The working directory is passed in as a value or a resolver closure, so every
//! function here can be tested with fixture strings.
//!
//! # Module Organization
//!
//! - [`staticcheck`]: Records emitted by `staticcheck -f json`, one per line
//! - [`gitlab`]: Records of the GitLab Code Quality report
//! - [`transform`]: Projection of one record into the other, line by line
//! - [`report`]: Encoding of the final array and the exit status rule
//!
//! # Example Usage
//!
//! ```rust
//! use staticcheck_gitlab_core::report::{exit_status, render_report, ExitStatus};
//! use staticcheck_gitlab_core::transform::Transcoder;
//! use std::path::PathBuf;
//!
//! let mut transcoder = Transcoder::new(|| Ok(PathBuf::from("/cwd")));
//! transcoder
//!     .push(r#"{"code":"SA1000","severity":"warning","location":{"file":"/cwd/pkg/x.go","line":10,"column":2},"message":"bad regexp"}"#)
//!     .unwrap();
//!
//! let entries = transcoder.into_entries();
//! assert_eq!(entries[0].location.path, "pkg/x.go");
//! assert_eq!(exit_status(&entries), ExitStatus::Findings);
//! assert!(render_report(&entries).unwrap().starts_with('['));
//! ```

pub mod error;
pub mod gitlab;
pub mod report;
pub mod staticcheck;
pub mod transform;

pub use error::Error;
