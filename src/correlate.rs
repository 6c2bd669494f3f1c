use crate::collectors::megaraid::{DriveRecord, VdRecord};
use crate::collectors::mount::MountResolver;
use crate::models::inventory::{derived_count, Inventory, PhysicalDisk, VirtualDisk};
use crate::util::shorten::{shorten_serial, shorten_size};
use std::collections::HashSet;

/// Merge the two vendor reports into one inventory.
///
/// The VD report is authoritative for array topology and for each member's
/// protocol/media/size/state; the drive report only contributes error
/// counters and serial numbers, plus drives the VD report never mentioned.
pub fn build_inventory(
    vd_report: &[VdRecord],
    drive_report: &[DriveRecord],
    mounts: &mut dyn MountResolver,
) -> Inventory {
    let mut inv = Inventory::default();

    // VD pass: one VirtualDisk per array, one stub PhysicalDisk per member.
    // Counters stay at -1 and serials empty until the detail pass.
    for rec in vd_report {
        let mut members = Vec::with_capacity(rec.members.len());
        for pd in &rec.members {
            members.push(pd.slot.clone());
            inv.pds.entry(pd.slot.clone()).or_insert_with(|| PhysicalDisk {
                protocol:            pd.protocol.clone(),
                media:               pd.media.clone(),
                size:                shorten_size(&pd.size),
                state:               pd.state.clone(),
                media_errors:        -1,
                other_errors:        -1,
                predictive_failures: -1,
                serial:              String::new(),
            });
        }
        inv.vds.insert(
            rec.code.clone(),
            VirtualDisk {
                raid_type:       rec.raid_type.clone(),
                state:           rec.state.clone(),
                size:            rec.size.clone(),
                device_name:     rec.device_name.clone(),
                mountpoint:      mounts.resolve(&rec.device_name),
                span_depth:      rec.span_depth,
                drives_per_span: rec.drives_per_span,
                device_count:    derived_count(rec.span_depth, rec.drives_per_span),
                pds:             members,
            },
        );
    }

    // Detail pass: enrich known slots in place; synthesize a placeholder
    // array for anything the VD report never mentioned (hot spares,
    // unconfigured drives). Each slot is handled once, repeats skipped.
    let mut seen: HashSet<&str> = HashSet::new();
    for rec in drive_report {
        let slot = rec.summary.slot.as_str();
        if !seen.insert(slot) {
            continue;
        }

        if let Some(pd) = inv.pds.get_mut(slot) {
            pd.media_errors        = rec.media_errors;
            pd.other_errors        = rec.other_errors;
            pd.predictive_failures = rec.predictive_failures;
            pd.serial              = shorten_serial(&rec.serial);
            continue;
        }

        inv.pds.insert(
            slot.to_string(),
            PhysicalDisk {
                protocol:            rec.summary.protocol.clone(),
                media:               rec.summary.media.clone(),
                size:                shorten_size(&rec.summary.size),
                state:               rec.summary.state.clone(),
                media_errors:        rec.media_errors,
                other_errors:        rec.other_errors,
                predictive_failures: rec.predictive_failures,
                serial:              shorten_serial(&rec.serial),
            },
        );
        inv.vds.insert(rec.path.clone(), VirtualDisk::synthetic(slot));
    }

    inv
}
