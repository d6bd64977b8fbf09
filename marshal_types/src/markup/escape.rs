use anyhow::{anyhow, Result};

pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            // Control characters, carriage return included, go out as character references.
            '\t' | '\n' => out.push(c),
            c if (c as u32) < 0x20 || c == '\u{7F}' => out.push_str(&format!("&#{};", c as u32)),
            c => out.push(c),
        }
    }
    out
}

pub fn unescape(raw: &str) -> Result<String> {
    let mut out = String::with_capacity(raw.len());
    let mut rest = raw;
    while let Some(amp_i) = rest.find('&') {
        out.push_str(&rest[..amp_i]);
        rest = &rest[amp_i + 1..];

        let semi_i = rest
            .find(';')
            .ok_or(anyhow!("Unterminated entity reference in {:?}", raw))?;
        let entity = &rest[..semi_i];
        rest = &rest[semi_i + 1..];

        let c = match entity {
            "lt" => '<',
            "gt" => '>',
            "amp" => '&',
            "quot" => '"',
            "apos" => '\'',
            _ => {
                let code = if let Some(hex) = entity.strip_prefix("#x") {
                    u32::from_str_radix(hex, 16).ok()
                } else if let Some(dec) = entity.strip_prefix('#') {
                    dec.parse::<u32>().ok()
                } else {
                    None
                };
                code.and_then(char::from_u32)
                    .ok_or(anyhow!("Unknown entity reference &{};", entity))?
            }
        };
        out.push(c);
    }
    out.push_str(rest);
    Ok(out)
}
