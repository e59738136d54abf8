//! Nickname engine.
//!
//! - `policy` - Event table sampling and per-member value selection (including the
//!   balanced battle allocator)
//! - `batch` - `NicknameBatchService`, which renames every eligible member of a guild
//! - `monitor` - `NicknameMonitorService`, which overwrites a watched member's nickname
//!   whenever they change it
//!
//! A batch run picks one policy for the whole guild, renames the bot itself first and
//! then walks the member list in order. Members ranked at or above the bot are skipped;
//! per-member failures are recorded and never stop the batch.

pub mod batch;
pub mod monitor;
pub mod policy;

#[cfg(test)]
mod test;

pub use batch::NicknameBatchService;
pub use monitor::{MonitorOutcome, MonitorSettings, NicknameMonitorService, RevertLedger};
