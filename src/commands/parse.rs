//! Command parsing.

/// A recognized bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    /// `/check <domain>`; `None` when the argument is missing
    Check(Option<String>),
    Report,
    GetId,
    Help,
    /// Any other `/word`
    Unknown(String),
}

impl Command {
    /// Parses a message text.
    ///
    /// Returns `None` for plain text. Accepts the `/command@BotName` form used in
    /// group chats; command names are case-insensitive.
    pub fn parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let rest = text.strip_prefix('/')?;

        let mut parts = rest.splitn(2, char::is_whitespace);
        let head = parts.next().unwrap_or_default();
        let args = parts.next().map(str::trim).unwrap_or_default();
        let name = head.split('@').next().unwrap_or_default().to_lowercase();
        if name.is_empty() {
            return None;
        }

        let command = match name.as_str() {
            "start" => Command::Start,
            "check" => Command::Check(
                args.split_whitespace()
                    .next()
                    .map(str::to_string),
            ),
            "report" => Command::Report,
            "getid" => Command::GetId,
            "help" => Command::Help,
            _ => Command::Unknown(name),
        };
        Some(command)
    }
}
