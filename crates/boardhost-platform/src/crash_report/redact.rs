/// Replaces the user's home directory with `~` so crash reports do not carry
/// the account name or the board file layout under it.
pub fn redact_home(input: &str, home: Option<&str>) -> String {
    match home {
        Some(home) if home.len() > 1 => input.replace(home, "~"),
        _ => input.to_string(),
    }
}
