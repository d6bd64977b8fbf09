use anyhow::{anyhow, Result};
use regex::Regex;
use std::sync::OnceLock;

const NAME_PATTERN: &str = r"^([A-Za-z_][A-Za-z0-9_.\-]*:)?[A-Za-z_][A-Za-z0-9_.\-]*$";

fn name_regex() -> &'static Regex {
    static NAME_REGEX: OnceLock<Regex> = OnceLock::new();
    NAME_REGEX.get_or_init(|| Regex::new(NAME_PATTERN).expect("NAME_PATTERN is a valid regex"))
}

pub fn is_name_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, b'_' | b'.' | b'-' | b':')
}

pub fn check_name(name: &str) -> Result<()> {
    if name_regex().is_match(name) {
        Ok(())
    } else {
        Err(anyhow!("{:?} is not a valid element or attribute name.", name))
    }
}

/// Checks a name that will be written, and so must read back as itself under [`local_name()`].
pub fn check_unprefixed_name(name: &str) -> Result<()> {
    check_name(name)?;
    if name.contains(':') {
        return Err(anyhow!("{:?} carries a namespace prefix.", name));
    }
    Ok(())
}

/// The name with its namespace prefix, if any, removed.
pub fn local_name(name: &str) -> &str {
    match name.rsplit_once(':') {
        None => name,
        Some((_prefix, local)) => local,
    }
}
