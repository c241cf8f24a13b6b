// NOTE: boldlink Architecture Rationale
//
// Why a local slot plus server catalog (not a local mirror of the server)?
// - The service is the durable store; the slot only holds links created from
//   this machine, so an unreachable service still leaves something to show
// - Merging happens at read time with server precedence, so a stale local
//   copy can never shadow fresher server data
//
// Why recompute the merge on every command (not cache it)?
// - The two sources are tiny and cheap to combine
// - A cached merge is one more thing that can go stale between the
//   optimistic local write and the delayed server re-fetch
//
// Why is nothing here fatal?
// - Connectivity and fetch failures degrade to "local records only"
// - Creation failures surface the service's message and invite resubmission
// - Storage failures are swallowed; the session continues in memory

mod args;
mod catalog;
mod commands;
pub mod config;
pub mod context;
mod handlers;
mod observer;
mod presentation;

pub use args::{Cli, Commands, OutputFormat};
pub use commands::run;
