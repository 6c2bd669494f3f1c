use crate::collectors::run_command;
use crate::config::Config;
use std::path::PathBuf;

/// RAID controller family found on the PCI bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    MegaRaid,
    Unknown,
}

impl ControllerKind {
    pub fn label(&self) -> &'static str {
        match self {
            ControllerKind::MegaRaid => "MegaRAID",
            ControllerKind::Unknown  => "UNKNOWN",
        }
    }
}

/// Probe `lspci` for a MegaRAID-family adapter.
pub fn controller_kind() -> ControllerKind {
    match run_command("lspci", &[]) {
        Ok(out) if out.lines().any(|l| l.contains("MegaRAID")) => ControllerKind::MegaRaid,
        _ => ControllerKind::Unknown,
    }
}

/// Dell-branded hardware ships perccli instead of storcli; the manufacturer
/// string from dmidecode tells them apart.
pub fn is_dell() -> bool {
    match run_command("/usr/sbin/dmidecode", &["-t", "system"]) {
        Ok(out) => out
            .lines()
            .filter(|l| l.contains("Manufacturer"))
            .any(|l| l.contains("Dell")),
        Err(_) => false,
    }
}

/// Pick the vendor management binary for this machine.
pub fn vendor_binary(cfg: &Config) -> PathBuf {
    if is_dell() {
        PathBuf::from(&cfg.paths.perccli)
    } else {
        PathBuf::from(&cfg.paths.storcli)
    }
}
