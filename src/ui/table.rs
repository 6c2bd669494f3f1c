use crate::models::inventory::{count_text, Inventory};
use crate::ui::color::{paint_pd, paint_vd, pd_tone, vd_tone};
use crate::util::human::pad;
use colored::Colorize;
use std::cmp::Ordering;

const CELL: usize = 12;

/// Order slot ids numerically as enclosure:slot pairs; anything that does
/// not parse as two integers falls back to length-then-lexicographic.
pub fn compare_slots(a: &str, b: &str) -> Ordering {
    match (parse_slot(a), parse_slot(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        _ => a.len().cmp(&b.len()).then_with(|| a.cmp(b)),
    }
}

fn parse_slot(s: &str) -> Option<(u64, u64)> {
    let (enc, slot) = s.split_once(':')?;
    Some((enc.trim().parse().ok()?, slot.trim().parse().ok()?))
}

// Per-VD display order is driven by each array's lowest-sorted member
// slot: walk all slots in order and pick up each owning array once.
fn display_order(inv: &Inventory) -> Vec<String> {
    let mut slots: Vec<&String> = inv.pds.keys().collect();
    slots.sort_by(|a, b| compare_slots(a, b));

    let mut order: Vec<String> = Vec::new();
    for slot in slots {
        if let Some(code) = owning_vd(inv, slot) {
            if !order.contains(&code) {
                order.push(code);
            }
        }
    }
    order
}

fn owning_vd(inv: &Inventory, slot: &str) -> Option<String> {
    inv.vds
        .iter()
        .find(|(_, vd)| vd.pds.iter().any(|s| s == slot))
        .map(|(code, _)| code.clone())
}

/// Print the inventory as fixed-width rows: one colored line per virtual
/// disk, followed by one line per member drive.
pub fn print_inventory(inv: &Inventory) {
    print_header();

    for code in display_order(inv) {
        let vd = match inv.vds.get(&code) {
            Some(v) => v,
            None => continue,
        };

        let count = format!(
            "{}({}*{})",
            count_text(vd.device_count),
            count_text(vd.span_depth),
            count_text(vd.drives_per_span)
        );
        let mut row = format!("{} ", pad(&code, CELL));
        for cell in [&vd.raid_type, &count, &vd.state, &vd.size, &vd.device_name, &vd.mountpoint] {
            row.push_str(&format!("{} ", pad(cell, CELL)));
        }
        println!("{}", paint_vd(vd_tone(&vd.state), &row));

        for slot in &vd.pds {
            let pd = match inv.pds.get(slot) {
                Some(p) => p,
                None => {
                    println!("{} N/A", pad(&format!(" # {}", slot), CELL));
                    continue;
                }
            };
            let pfc = pd.predictive_failures.to_string();
            let mec = pd.media_errors.to_string();
            let oec = pd.other_errors.to_string();

            let mut row = format!("{} ", pad(&format!(" # {}", slot), CELL));
            for cell in [&pd.protocol, &pd.media, &pd.state, &pd.size, &pfc, &mec, &oec] {
                row.push_str(&format!("{} ", pad(cell, CELL)));
            }
            row.push_str(&pd.serial);
            println!("{}", paint_pd(pd_tone(&pd.state), &row));
        }
    }
}

fn print_header() {
    let mut row = format!("{} ", pad("vd_k", CELL));
    for name in [
        "type",
        "number of devices(span*per span)",
        "state",
        "size",
        "device name",
        "mountpoint",
    ] {
        row.push_str(&format!("{} ", pad(name, CELL)));
    }
    println!("{}", row.bold());

    let mut row = format!("{} ", pad(" # slot", CELL));
    for name in [
        "protocol",
        "media type",
        "state",
        "size",
        "Predictive Failure Count",
        "Media Error Count",
        "Other Error Count",
        "SN",
    ] {
        row.push_str(&format!("{} ", pad(name, CELL)));
    }
    println!("{}", row.bold());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::inventory::{PhysicalDisk, VirtualDisk};

    fn pd(state: &str) -> PhysicalDisk {
        PhysicalDisk {
            protocol: "SAS".to_string(),
            media: "HDD".to_string(),
            size: "300 GB".to_string(),
            state: state.to_string(),
            media_errors: -1,
            other_errors: -1,
            predictive_failures: -1,
            serial: String::new(),
        }
    }

    fn vd(members: &[&str]) -> VirtualDisk {
        VirtualDisk {
            raid_type: "RAID1".to_string(),
            state: "Optl".to_string(),
            size: "278.875 GB".to_string(),
            device_name: String::new(),
            mountpoint: String::new(),
            span_depth: Some(1),
            drives_per_span: Some(members.len() as u64),
            device_count: Some(members.len() as u64),
            pds: members.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn slots_order_by_enclosure_then_slot() {
        assert_eq!(compare_slots("32:0", "32:1"), Ordering::Less);
        assert_eq!(compare_slots("8:2", "32:0"), Ordering::Less);
        assert_eq!(compare_slots("32:10", "32:9"), Ordering::Greater);
        assert_eq!(compare_slots("32:5", "32:5"), Ordering::Equal);
    }

    #[test]
    fn unparseable_slots_fall_back_to_length_then_lex() {
        assert_eq!(compare_slots("zz", "aaa"), Ordering::Less);
        assert_eq!(compare_slots("ab", "aa"), Ordering::Greater);
        assert_eq!(compare_slots("x", "x"), Ordering::Equal);
        // Mixed parseable/unparseable also uses the fallback.
        assert_eq!(compare_slots("32:0", "ab"), Ordering::Greater);
    }

    #[test]
    fn display_order_follows_lowest_member_slot() {
        let mut inv = Inventory::default();
        inv.vds.insert("/c0/v0".to_string(), vd(&["32:4", "32:5"]));
        inv.vds.insert("/c0/v1".to_string(), vd(&["32:0", "32:1"]));
        inv.vds.insert("/c0/e8/s2".to_string(), VirtualDisk::synthetic("8:2"));
        for slot in ["32:0", "32:1", "32:4", "32:5", "8:2"] {
            inv.pds.insert(slot.to_string(), pd("Onln"));
        }

        let order = display_order(&inv);
        assert_eq!(order, vec!["/c0/e8/s2", "/c0/v1", "/c0/v0"]);
    }

    #[test]
    fn slots_without_an_owner_are_skipped() {
        let mut inv = Inventory::default();
        inv.vds.insert("/c0/v0".to_string(), vd(&["32:0"]));
        inv.pds.insert("32:0".to_string(), pd("Onln"));
        inv.pds.insert("99:9".to_string(), pd("UGood"));

        assert_eq!(display_order(&inv), vec!["/c0/v0"]);
    }
}
