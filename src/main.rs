mod collectors;
mod config;
mod correlate;
mod models;
mod ui;
mod util;

use anyhow::Result;
use clap::Parser;
use collectors::{detect, megaraid, mount::MountTable};
use config::Config;
use serde_json::json;

#[derive(Parser, Debug)]
#[command(name = "raidstat", about = "MegaRAID/PERC virtual- and physical-disk health reporter")]
struct Cli {
    /// Print the inventory as a JSON document instead of a table
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = Config::load();
    if !cfg.output.color {
        colored::control::set_override(false);
    }

    let kind = detect::controller_kind();
    if kind != detect::ControllerKind::MegaRaid {
        let message = format!("controller not supported: {}", kind.label());
        if cli.json {
            println!("{}", ui::to_pretty_json(&json!({ "status": "error", "message": message }))?);
        } else {
            println!("{}", message);
        }
        std::process::exit(1);
    }

    let bin = detect::vendor_binary(&cfg);
    let vd_report = megaraid::query_vd_report(&bin)?;
    let drive_report = match megaraid::query_drive_report(&bin) {
        Ok(recs) => recs,
        Err(e) => {
            // The drive report only enriches; fall back to VD-only data.
            eprintln!("drive detail report unavailable: {:#}", e);
            Vec::new()
        }
    };

    let mut mounts = MountTable::new();
    let inv = correlate::build_inventory(&vd_report, &drive_report, &mut mounts);

    if cli.json {
        println!(
            "{}",
            ui::to_pretty_json(&json!({ "status": "success", "vds": inv.vds, "pds": inv.pds }))?
        );
    } else {
        ui::table::print_inventory(&inv);
    }
    Ok(())
}
