//! Decode Pixelfactor saves and print them as JSON
//!
//! Run with: cargo run --bin save-dump -- save.sav --units unit_ids.json --cargo cargo_ids.json

use std::path::PathBuf;

use clap::Parser;
use pixelfactor_save::{decode_batch, ClassMappings, DecodeConfig, UnknownUnitPolicy};

#[derive(Parser)]
#[command(name = "save-dump")]
#[command(about = "Decode Pixelfactor save files to JSON")]
struct Args {
    /// Save files to decode
    #[arg(required = true)]
    saves: Vec<PathBuf>,

    /// Unit class table (JSON object of name to class id)
    #[arg(long)]
    units: Option<PathBuf>,

    /// Cargo class table (JSON object of name to class id)
    #[arg(long)]
    cargo: Option<PathBuf>,

    /// Fail on overlay records for units that do not exist
    #[arg(long)]
    strict_units: bool,

    /// Accept bytes after the last section
    #[arg(long)]
    allow_trailing: bool,

    /// Write JSON here instead of stdout
    #[arg(long, short)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let mappings = ClassMappings::load(args.units.as_deref(), args.cargo.as_deref())?;
    let config = DecodeConfig {
        unknown_units: if args.strict_units {
            UnknownUnitPolicy::Reject
        } else {
            UnknownUnitPolicy::Skip
        },
        require_exhausted: !args.allow_trailing,
    };

    let buffers = args
        .saves
        .iter()
        .map(std::fs::read)
        .collect::<Result<Vec<_>, _>>()?;
    let slices: Vec<&[u8]> = buffers.iter().map(Vec::as_slice).collect();

    let mut saves = Vec::with_capacity(slices.len());
    let mut failed = 0;
    for (path, result) in args.saves.iter().zip(decode_batch(&slices, &mappings, config)) {
        match result {
            Ok(save) => {
                eprintln!(
                    "{}: version {}, {} sectors, {} factions, {} units",
                    path.display(),
                    save.header.version,
                    save.sectors.len(),
                    save.factions.len(),
                    save.units.len()
                );
                saves.push(save);
            }
            Err(e) => {
                eprintln!("{}: {}", path.display(), e);
                failed += 1;
            }
        }
    }

    let json = if args.saves.len() == 1 {
        match saves.first() {
            Some(save) => serde_json::to_string_pretty(save)?,
            None => String::new(),
        }
    } else {
        serde_json::to_string_pretty(&saves)?
    };

    if !json.is_empty() {
        match &args.output {
            Some(path) => std::fs::write(path, json)?,
            None => println!("{}", json),
        }
    }

    if failed > 0 {
        return Err(format!("{} of {} saves failed to decode", failed, args.saves.len()).into());
    }
    Ok(())
}
