use anyhow::Result;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

mod actions;
mod event_loop;
mod lifecycle;
mod render;
mod runtime;
mod session_access;
mod state;

pub(super) use state::App;

pub(super) fn run() -> Result<()> {
    runtime::run()
}

/// Second-resolution UTC stamp for view headers.
pub(super) fn now_stamp() -> String {
    let now = OffsetDateTime::now_utc();
    let full = now.format(&Rfc3339).unwrap_or_default();
    full.get(..19).map(|s| s.to_string()).unwrap_or(full)
}
