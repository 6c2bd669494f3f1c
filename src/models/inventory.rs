use serde::{Serialize, Serializer};
use std::collections::HashMap;

/// One virtual disk with its member slots. Field names in the serialized
/// form follow the vendor report vocabulary.
#[derive(Debug, Clone, Serialize)]
pub struct VirtualDisk {
    #[serde(rename = "type")]
    pub raid_type: String,
    pub state: String,
    pub size: String,
    #[serde(rename = "device name")]
    pub device_name: String,
    pub mountpoint: String,
    /// None = the controller didn't report a usable integer.
    #[serde(rename = "span depth", serialize_with = "count_field")]
    pub span_depth: Option<u64>,
    #[serde(rename = "number of drives per span", serialize_with = "count_field")]
    pub drives_per_span: Option<u64>,
    /// span depth x drives per span, when both are known.
    #[serde(rename = "number of devices", serialize_with = "count_field")]
    pub device_count: Option<u64>,
    /// Member slot ids in report order; display preserves this order.
    pub pds: Vec<String>,
}

impl VirtualDisk {
    /// Placeholder for a drive that belongs to no virtual disk (hot spare
    /// or unconfigured), keyed by its enclosure/slot path.
    pub fn synthetic(slot: &str) -> Self {
        Self {
            raid_type:       String::new(),
            state:           String::new(),
            size:            String::new(),
            device_name:     String::new(),
            mountpoint:      String::new(),
            span_depth:      Some(1),
            drives_per_span: Some(1),
            device_count:    Some(1),
            pds:             vec![slot.to_string()],
        }
    }
}

/// One physical disk, keyed in the inventory by its "EID:Slt" identifier.
#[derive(Debug, Clone, Serialize)]
pub struct PhysicalDisk {
    pub protocol: String,
    #[serde(rename = "media type")]
    pub media: String,
    /// Shortened capacity, e.g. "300 GB".
    pub size: String,
    pub state: String,
    /// -1 = not reported.
    #[serde(rename = "Media Error Count")]
    pub media_errors: i64,
    #[serde(rename = "Other Error Count")]
    pub other_errors: i64,
    #[serde(rename = "Predictive Failure Count")]
    pub predictive_failures: i64,
    /// Shortened serial number; "" when the detail report had none.
    #[serde(rename = "SN")]
    pub serial: String,
}

/// The merged view of both vendor reports. Both maps are unordered;
/// display order is computed by the presentation layer.
#[derive(Debug, Default, Serialize)]
pub struct Inventory {
    pub vds: HashMap<String, VirtualDisk>,
    pub pds: HashMap<String, PhysicalDisk>,
}

/// span depth x drives per span, or None if either side is unknown.
pub fn derived_count(span_depth: Option<u64>, drives_per_span: Option<u64>) -> Option<u64> {
    match (span_depth, drives_per_span) {
        (Some(s), Some(d)) => Some(s * d),
        _ => None,
    }
}

/// Render an optional count with the "unknown" marker.
pub fn count_text(v: Option<u64>) -> String {
    match v {
        Some(n) => n.to_string(),
        None => "unknown".to_string(),
    }
}

fn count_field<S: Serializer>(v: &Option<u64>, ser: S) -> Result<S::Ok, S::Error> {
    match v {
        Some(n) => ser.serialize_u64(*n),
        None => ser.serialize_str("unknown"),
    }
}
