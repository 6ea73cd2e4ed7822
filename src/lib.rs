mod cli;
mod code;
mod secret_service;
mod service;
mod unlocker;

pub use cli::{finish, report_usage, usage_exit, Args};
pub use code::ResultCode;
pub use secret_service::SecretServiceBackend;
pub use service::{CollectionSelector, UnlockRequest, UnlockService};
pub use unlocker::{ProcessExit, UnlockOutcome, Unlocker};
