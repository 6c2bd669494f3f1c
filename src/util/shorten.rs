use once_cell::sync::Lazy;
use regex::Regex;

static WD_SERIAL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^WD-\S+").unwrap());

/// Compress a vendor capacity string ("<number> <unit>") into a short
/// human-friendly form: MB converts to GB (and on to TB past 1000 GB),
/// then the magnitude rounds up to the next 100 / 10 / 1 boundary
/// depending on its range. Values at or below 1 pass through unrounded,
/// and anything that doesn't look like "<number> <unit>" is returned as-is.
pub fn shorten_size(size: &str) -> String {
    let mut tokens = size.split_whitespace();
    let (num, unit) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(n), Some(u), None) => (n, u),
        _ => return size.to_string(),
    };

    let mut value: f64 = match num.parse() {
        Ok(v) => v,
        Err(_) => return size.to_string(),
    };

    let mut unit = unit.to_string();
    if unit == "MB" {
        value /= 1024.0;
        unit = "GB".to_string();
        // Only an MB origin chains on to TB.
        if value > 1000.0 {
            value /= 1000.0;
            unit = "TB".to_string();
        }
    }

    let rounded = if value > 100.0 {
        ((value / 100.0).floor() as u64 + 1) * 100
    } else if value > 10.0 {
        ((value / 10.0).floor() as u64 + 1) * 10
    } else if value > 1.0 {
        value.floor() as u64 + 1
    } else {
        // No rounding rule below 1; keep the converted magnitude.
        return format!("{} {}", value, unit);
    };

    format!("{} {}", rounded, unit)
}

/// Reduce a vendor serial string to the actual serial token, using
/// per-vendor layout heuristics. Unrecognized shapes pass through
/// unchanged, which makes a second pass a no-op.
pub fn shorten_serial(sn: &str) -> String {
    if sn.is_empty() {
        return String::new();
    }
    let tokens: Vec<&str> = sn.split_whitespace().collect();
    match tokens.len() {
        3 => {
            if tokens[0] == "SEAGATE" || tokens[0] == "TOSHIBA" {
                return tokens[2].to_string();
            }
            if ["MFAOAB70", "HPG3", "D201DL13"].contains(&tokens[2]) {
                return tokens[0].to_string();
            }
            if let Some(m) = WD_SERIAL.find(sn) {
                return m.as_str().to_string();
            }
        }
        4 if tokens[1] == "HGST" => return tokens[0].to_string(),
        2 if tokens[1].len() < 5 => return tokens[0].to_string(),
        _ => {}
    }
    sn.to_string()
}
