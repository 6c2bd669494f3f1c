use crate::collectors::run_command;
use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use std::path::Path;

static VD_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^/c[0-9]+/v([0-9]+)$").unwrap());
static DRIVE_KEY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Drive (/c[0-9]+/e[0-9]+/s[0-9]+)$").unwrap());

/// One virtual disk as decoded from the `/call/vall` report.
#[derive(Debug, Clone)]
pub struct VdRecord {
    /// Controller/VD path, e.g. "/c0/v0".
    pub code:            String,
    pub raid_type:       String,
    pub state:           String,
    pub size:            String,
    pub device_name:     String,
    /// None when the field is absent or not an integer.
    pub span_depth:      Option<u64>,
    pub drives_per_span: Option<u64>,
    /// Member drives in report order.
    pub members:         Vec<PdSummary>,
}

/// Summary-row fields shared by both reports.
#[derive(Debug, Clone)]
pub struct PdSummary {
    /// "EID:Slt" identifier, e.g. "32:1".
    pub slot:     String,
    pub protocol: String,
    pub media:    String,
    pub size:     String,
    pub state:    String,
}

/// One drive as decoded from the `/call/eall/sall` report.
#[derive(Debug, Clone)]
pub struct DriveRecord {
    /// Enclosure/slot path, e.g. "/c0/e32/s1".
    pub path:                String,
    pub summary:             PdSummary,
    /// -1 when the controller didn't report the counter.
    pub media_errors:        i64,
    pub other_errors:        i64,
    pub predictive_failures: i64,
    pub serial:              String,
}

/// Query all virtual disks. A malformed report is fatal: nothing can be
/// shown without it.
pub fn query_vd_report(bin: &Path) -> Result<Vec<VdRecord>> {
    let out = run_command(&bin.to_string_lossy(), &["/call/vall", "show", "all", "J"])?;
    let v: Value =
        serde_json::from_str(&out).context("virtual-disk report is not valid JSON")?;
    Ok(decode_vd_report(&v))
}

/// Query per-drive details. The caller degrades to the VD-only view when
/// this report is unavailable, since it only adds enrichment.
pub fn query_drive_report(bin: &Path) -> Result<Vec<DriveRecord>> {
    let out = run_command(&bin.to_string_lossy(), &["/call/eall/sall", "show", "all", "J"])?;
    let v: Value = serde_json::from_str(&out).context("drive report is not valid JSON")?;
    Ok(decode_drive_report(&v))
}

fn decode_vd_report(v: &Value) -> Vec<VdRecord> {
    let mut records = Vec::new();
    let controllers = match v["Controllers"].as_array() {
        Some(c) => c,
        None => return records,
    };

    for controller in controllers {
        let data = &controller["Response Data"];
        let obj = match data.as_object() {
            Some(o) => o,
            None => continue,
        };

        for (key, value) in obj {
            let caps = match VD_KEY.captures(key) {
                Some(c) => c,
                None => continue,
            };
            let index = caps[1].to_string();
            let row = &value[0];

            let props_key = format!("VD{} Properties", index);
            let props = &data[props_key.as_str()];

            let pds_key = format!("PDs for VD {}", index);
            let members = data[pds_key.as_str()]
                .as_array()
                .map(|rows| rows.iter().map(pd_summary).collect())
                .unwrap_or_default();

            records.push(VdRecord {
                code:            key.clone(),
                raid_type:       text(&row["TYPE"]),
                state:           text(&row["State"]),
                size:            text(&row["Size"]),
                device_name:     text(&props["OS Drive Name"]),
                span_depth:      count(&props["Span Depth"]),
                drives_per_span: count(&props["Number of Drives Per Span"]),
                members,
            });
        }
    }
    records
}

fn decode_drive_report(v: &Value) -> Vec<DriveRecord> {
    let mut records = Vec::new();
    let controllers = match v["Controllers"].as_array() {
        Some(c) => c,
        None => return records,
    };

    for controller in controllers {
        let data = &controller["Response Data"];
        let obj = match data.as_object() {
            Some(o) => o,
            None => continue,
        };

        for (key, value) in obj {
            let caps = match DRIVE_KEY.captures(key) {
                Some(c) => c,
                None => continue,
            };
            let path = caps[1].to_string();
            let row = &value[0];
            let summary = pd_summary(row);
            if summary.slot.is_empty() {
                continue;
            }

            let detail_key = format!("{} - Detailed Information", key);
            let detail = &data[detail_key.as_str()];
            let state_key = format!("{} State", key);
            let state = &detail[state_key.as_str()];
            let attrs_key = format!("{} Device attributes", key);
            let attrs = &detail[attrs_key.as_str()];

            records.push(DriveRecord {
                path,
                summary,
                media_errors:        counter(&state["Media Error Count"]),
                other_errors:        counter(&state["Other Error Count"]),
                predictive_failures: counter(&state["Predictive Failure Count"]),
                serial:              text(&attrs["SN"]),
            });
        }
    }
    records
}

fn pd_summary(row: &Value) -> PdSummary {
    PdSummary {
        slot:     text(&row["EID:Slt"]),
        protocol: text(&row["Intf"]),
        media:    text(&row["Med"]),
        size:     text(&row["Size"]),
        state:    text(&row["State"]),
    }
}

fn text(v: &Value) -> String {
    v.as_str().unwrap_or("").to_string()
}

// Span/drive counts show up as numbers or numeric strings depending on
// firmware; anything else is "unknown".
fn count(v: &Value) -> Option<u64> {
    v.as_u64()
        .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
}

fn counter(v: &Value) -> i64 {
    v.as_i64()
        .or_else(|| v.as_str().and_then(|s| s.trim().parse().ok()))
        .unwrap_or(-1)
}
