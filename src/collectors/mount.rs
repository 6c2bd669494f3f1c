use crate::collectors::run_command;

/// Looks up the mount point for an OS device name. The correlator takes
/// this as a seam so tests can supply a canned table.
pub trait MountResolver {
    fn resolve(&mut self, device: &str) -> String;
}

/// Snapshot of the system mount table: captured from `/bin/mount` on the
/// first lookup, cached for the rest of the process, never refreshed.
pub struct MountTable {
    lines: Option<Vec<String>>,
}

impl MountTable {
    pub fn new() -> Self {
        Self { lines: None }
    }

    /// Build a table from pre-captured mount lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines: Some(lines) }
    }

    fn snapshot() -> Vec<String> {
        match run_command("/bin/mount", &[]) {
            Ok(out) => out.trim().lines().map(|l| l.to_string()).collect(),
            Err(_) => Vec::new(),
        }
    }
}

impl Default for MountTable {
    fn default() -> Self {
        Self::new()
    }
}

impl MountResolver for MountTable {
    /// Return the first mount point whose device field equals `device` or
    /// starts with it (a disk matches its mounted partitions, e.g.
    /// /dev/sda -> /dev/sda1). Empty device or no match returns "".
    fn resolve(&mut self, device: &str) -> String {
        if device.is_empty() {
            return String::new();
        }
        let lines = self.lines.get_or_insert_with(Self::snapshot);
        for line in lines.iter() {
            let parts: Vec<&str> = line.split_whitespace().collect();
            if parts.len() >= 3 {
                let path = parts[0];
                if path == device || path.starts_with(device) {
                    return parts[2].to_string();
                }
            }
        }
        String::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> MountTable {
        MountTable::from_lines(vec![
            "proc on /proc type proc (rw,nosuid)".to_string(),
            "/dev/sda1 on / type ext4 (rw,relatime)".to_string(),
            "/dev/sdb1 on /data type xfs (rw)".to_string(),
        ])
    }

    #[test]
    fn exact_device_match() {
        assert_eq!(table().resolve("/dev/sdb1"), "/data");
    }

    #[test]
    fn prefix_matches_first_partition() {
        assert_eq!(table().resolve("/dev/sda"), "/");
    }

    #[test]
    fn empty_or_unknown_device_yields_empty() {
        assert_eq!(table().resolve(""), "");
        assert_eq!(table().resolve("/dev/nvme0n1"), "");
    }

    #[test]
    fn short_lines_are_ignored() {
        let mut t = MountTable::from_lines(vec!["/dev/sdc1".to_string()]);
        assert_eq!(t.resolve("/dev/sdc1"), "");
    }
}
