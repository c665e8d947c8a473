//! Interactive menu loop and per-field input prompts.
//!
//! Each field is collected in its own retry loop using the core's public
//! validators and parsers, so the final construction call can only fail on a
//! programming error. The ledger lives for the session only.

use std::io::{self, BufRead, Write};

use export_registry_core::models::shipment::{
    self, CargoClass, ServiceMode, Shipment,
};
use export_registry_core::Ledger;

use crate::report;

enum CategoryChoice {
    Heavy,
    Loose,
}

/// Run the menu loop until the user quits or input closes.
pub fn run(json_summary: bool) -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut ledger = Ledger::new();

    writeln!(out, "--- EXPORT REGISTRY ---")?;
    loop {
        writeln!(out)?;
        writeln!(out, "================ MAIN MENU ================")?;
        writeln!(out, "1. Register shipment")?;
        writeln!(out, "2. General report")?;
        writeln!(out, "3. Grouped report")?;
        writeln!(out, "4. Quit")?;

        let choice = prompt_line(&mut input, &mut out, "Select an option: ")?;
        match choice.trim() {
            "1" => register(&mut input, &mut out, &mut ledger)?,
            "2" => report::general(&mut out, &ledger)?,
            "3" => report::grouped(&mut out, &ledger, json_summary)?,
            "4" => break,
            _ => writeln!(out, ">> Invalid option, enter a number from 1 to 4. <<")?,
        }
    }
    writeln!(out, "Session closed.")?;
    Ok(())
}

/// Collect one shipment field by field and append it to the ledger.
fn register(
    input: &mut impl BufRead,
    out: &mut impl Write,
    ledger: &mut Ledger,
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "--- Register shipment ---")?;

    let client_id = read_until_valid(input, out, "Client id (format 1-1111-1111): ", |raw| {
        shipment::validate_client_id(raw).map(|_| raw.to_string())
    })?;

    let client_name = read_until_valid(input, out, "Full name (at least 7 characters): ", |raw| {
        shipment::validate_client_name(raw).map(|_| raw.to_string())
    })?;

    let zone = read_until_valid(input, out, "Destination zone (country): ", |raw| {
        shipment::validate_destination_zone(raw).map(|_| raw.to_string())
    })?;

    let mode = read_until_valid(input, out, "Service mode (Sea or Air): ", ServiceMode::parse)?;

    let weight_kg = read_until_valid(input, out, "Weight to pack (kg): ", parse_weight)?;

    let category = read_until_valid(input, out, "Cargo category (heavy or loose): ", |raw| {
        match raw.trim().to_ascii_lowercase().as_str() {
            "heavy" => Ok(CategoryChoice::Heavy),
            "loose" => Ok(CategoryChoice::Loose),
            _ => Err("enter 'heavy' or 'loose'"),
        }
    })?;

    let built = match category {
        CategoryChoice::Heavy => {
            let cargo_class = read_until_valid(
                input,
                out,
                "Cargo class (refrigerated, non-refrigerated, packed): ",
                CargoClass::parse,
            )?;
            Shipment::heavy(
                &client_id,
                &client_name,
                &zone,
                mode.as_str(),
                weight_kg,
                cargo_class.as_str(),
            )
        }
        CategoryChoice::Loose => {
            let volume_feet =
                read_until_valid(input, out, "Cargo volume (feet): ", parse_volume)?;
            Shipment::loose(
                &client_id,
                &client_name,
                &zone,
                mode.as_str(),
                weight_kg,
                volume_feet,
            )
        }
    };

    match built {
        Ok(registered) => {
            writeln!(out)?;
            writeln!(
                out,
                ">> Shipment registered. Cost: ${:.2} <<",
                registered.total_cost()
            )?;
            ledger.append(registered);
        }
        // Every field was pre-validated, so this only fires on a defect
        Err(e) => writeln!(out, ">> Registration failed: {e} <<")?,
    }
    Ok(())
}

fn parse_weight(raw: &str) -> Result<f64, String> {
    let weight_kg: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "enter a numeric weight".to_string())?;
    shipment::validate_weight(weight_kg).map_err(|e| e.to_string())?;
    Ok(weight_kg)
}

fn parse_volume(raw: &str) -> Result<f64, String> {
    let volume_feet: f64 = raw
        .trim()
        .parse()
        .map_err(|_| "enter a numeric volume".to_string())?;
    shipment::validate_volume_feet(volume_feet).map_err(|e| e.to_string())?;
    Ok(volume_feet)
}

/// Prompt repeatedly until `parse` accepts the input.
fn read_until_valid<T, E, F>(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
    parse: F,
) -> io::Result<T>
where
    E: std::fmt::Display,
    F: Fn(&str) -> Result<T, E>,
{
    loop {
        let raw = prompt_line(input, out, prompt)?;
        match parse(&raw) {
            Ok(value) => return Ok(value),
            Err(e) => writeln!(out, ">> {e}. Try again. <<")?,
        }
    }
}

/// Print a prompt and read one line, erroring out when input closes.
fn prompt_line(
    input: &mut impl BufRead,
    out: &mut impl Write,
    prompt: &str,
) -> io::Result<String> {
    write!(out, "{prompt}")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim_end_matches(&['\r', '\n'][..]).to_string())
}
