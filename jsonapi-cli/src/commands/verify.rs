use anyhow::{bail, Context, Result};
use colored::*;
use jsonapi_core::{decoder::decode_document, linker::analyze_linkage};
use tracing::{info, warn};

use super::read_input;

pub fn execute(input: &str, report_external: bool) -> Result<()> {
    info!("Verifying document: {}", input);

    let data = read_input(input)?;
    let mut document = decode_document(&data)
        .with_context(|| format!("Failed to decode document: {}", input))?;

    println!("\n=== Member Checks ===");
    let check_result = document.check();
    match &check_result {
        Ok(()) => println!("{} Meta and links valid", "✓".green()),
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            warn!("Member check failed: {}", e);
        }
    }

    if document.has_errors() && !document.is_empty() {
        warn!("Document carries both errors and primary data; data will not be encoded");
    }

    let report = analyze_linkage(&document);
    let stats = report.stats();

    println!("\n=== Linkage Analysis ===");
    println!("Included resources: {}", stats.included);
    println!("Reachable:          {}", stats.reachable);
    println!("External targets:   {}", stats.external);
    if stats.orphans > 0 {
        println!("Orphaned:           {}", stats.orphans.to_string().red());
        for orphan in &report.orphans {
            println!("  {}", orphan);
        }
    } else {
        println!("Orphaned:           {}", stats.orphans);
    }

    if report_external && !report.external.is_empty() {
        println!("\n=== External Relationship Targets ===");
        for identity in &report.external {
            println!("  {}", identity);
        }
    }

    // Overall status
    println!("\n=== Summary ===");
    let fully_linked = report.is_fully_linked();
    if let Err(e) = report.into_result() {
        warn!("{}", e);
    }

    match (check_result.is_ok(), fully_linked) {
        (true, true) => {
            println!("{} Document is valid and fully linked", "✓".green());
            Ok(())
        }
        (false, _) => {
            println!("{} Document has invalid meta or links", "✗".red());
            bail!("Document failed member checks: {}", input)
        }
        (true, false) => {
            println!("{} Document is not fully linked", "✗".red());
            bail!("Document has {} orphaned included resources: {}", stats.orphans, input)
        }
    }
}
