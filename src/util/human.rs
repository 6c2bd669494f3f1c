/// Fit a value into a fixed-width table cell: truncate when too long,
/// pad with spaces when too short.
pub fn pad(s: &str, width: usize) -> String {
    let len = s.chars().count();
    if len > width {
        s.chars().take(width).collect()
    } else {
        let mut out = String::with_capacity(width);
        out.push_str(s);
        out.extend(std::iter::repeat(' ').take(width - len));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_short_values() {
        assert_eq!(pad("RAID1", 8), "RAID1   ");
        assert_eq!(pad("", 4), "    ");
    }

    #[test]
    fn truncates_long_values() {
        assert_eq!(pad("Predictive Failure Count", 12), "Predictive F");
        assert_eq!(pad("exact", 5), "exact");
    }
}
