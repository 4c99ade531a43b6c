//! Chat command surface.
//!
//! Maps the bot commands onto the monitor: `/check` resolves one domain,
//! `/report` goes through the manual trigger gate, `/getid` echoes the caller's
//! chat ID so an operator can find the value for `ADMIN_CHAT_ID`.

mod dispatch;
mod parse;

pub use dispatch::{who_am_i, CommandDispatcher};
pub use parse::Command;
