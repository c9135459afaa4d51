/// Parse a `KEY=VALUE` environment entry.
///
/// The value may be empty and may itself contain `=`; the key may not be
/// empty.
///
/// # Errors
///
/// Returns an error message when there is no `=` or the key is empty.
pub fn parse_env_pair(s: &str) -> Result<(String, String), String> {
    let Some((key, value)) = s.split_once('=') else {
        return Err(format!("Expected KEY=VALUE, got '{}'", s));
    };

    if key.is_empty() {
        return Err(format!("Environment key cannot be empty: '{}'", s));
    }

    Ok((key.to_string(), value.to_string()))
}
