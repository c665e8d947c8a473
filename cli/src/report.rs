//! Report rendering over the ledger.

use std::io::{self, Write};

use export_registry_core::Ledger;

/// Fixed-width table of every registered shipment, in registration order.
pub fn general(out: &mut impl Write, ledger: &Ledger) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- General report ---")?;
    if ledger.is_empty() {
        writeln!(out, "No shipments registered yet.")?;
        return Ok(());
    }

    let rule = "-".repeat(96);
    writeln!(out, "{rule}")?;
    writeln!(
        out,
        "{:<12} | {:<25} | {:<12} | {:<20} | {:>12}",
        "Client id", "Full name", "Date", "Destination", "Total cost"
    )?;
    writeln!(out, "{rule}")?;
    for shipment in ledger.iter() {
        writeln!(
            out,
            "{:<12} | {:<25} | {:<12} | {:<20} | ${:>11.2}",
            shipment.client_id(),
            shipment.client_name(),
            shipment.formatted_export_date(),
            shipment.destination_zone(),
            shipment.total_cost()
        )?;
    }
    writeln!(out, "{rule}")?;
    Ok(())
}

/// Grouped summary: cost totals per category and weight equivalences.
pub fn grouped(out: &mut impl Write, ledger: &Ledger, as_json: bool) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Grouped report ---")?;
    if ledger.is_empty() {
        writeln!(out, "No shipments registered yet.")?;
        return Ok(());
    }

    let summary = ledger.summary();

    if as_json {
        let rendered = serde_json::to_string_pretty(&summary)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        writeln!(out, "{rendered}")?;
        return Ok(());
    }

    writeln!(out)?;
    writeln!(out, "** Cost totals by cargo category **")?;
    writeln!(
        out,
        "Heavy cargo ({} shipment(s)): ${:.2}",
        summary.heavy_count, summary.heavy_cost_total
    )?;
    writeln!(
        out,
        "Loose cargo ({} shipment(s)): ${:.2}",
        summary.loose_count, summary.loose_cost_total
    )?;
    writeln!(out, "All shipments: ${:.2}", summary.combined_cost_total)?;

    writeln!(out)?;
    writeln!(out, "** Packed weight totals **")?;
    writeln!(out, "Kilograms: {:.2} kg", summary.total_weight_kg)?;
    writeln!(out, "Equivalences:")?;
    writeln!(out, "- Grams: {:.2} g", summary.total_weight_grams)?;
    writeln!(out, "- Pounds: {:.2} lb", summary.total_weight_pounds)?;
    writeln!(out, "- Tonnes: {:.4} t", summary.total_weight_tonnes)?;
    Ok(())
}
