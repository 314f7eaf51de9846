mod redact;
mod report;

pub use redact::redact_home;
pub use report::write_crash_report;
