use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::reagent::Reagent;
use crate::core::settings::PriorSettings;
use crate::loader::read_reagent_files;

#[derive(Args)]
pub struct LoadArgs {
    /// Reagent SMILES files, one per reaction component slot
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,

    /// Minimum uncertainty about the mean for each record's prior.
    /// Higher values favor exploration, lower values exploitation.
    #[arg(long)]
    pub minimum_uncertainty: f64,

    /// Assumed ("known") standard deviation of the scoring distribution.
    /// Should be proportional to the range of scores the function produces.
    #[arg(long)]
    pub prior_std: f64,

    /// Keep at most this many reagents per file (the leading lines, in file
    /// order). Mostly useful for development runs on large files.
    #[arg(short = 'n', long)]
    pub num_to_select: Option<usize>,
}

/// Execute load subcommand
///
/// # Errors
///
/// Returns an error if any input file cannot be read or parsed.
pub fn run(args: LoadArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let settings = PriorSettings::new(args.minimum_uncertainty, args.prior_std);
    let slots = read_reagent_files(&args.files, &settings, args.num_to_select)?;

    if verbose {
        let total: usize = slots.iter().map(Vec::len).sum();
        eprintln!(
            "Loaded {total} reagents across {} component slots",
            slots.len()
        );
    }

    match format {
        OutputFormat::Text => print_text_results(&slots, &args.files),
        OutputFormat::Json => print_json_results(&slots, &args.files, &settings)?,
        OutputFormat::Tsv => print_tsv_results(&slots),
    }

    Ok(())
}

fn print_text_results(slots: &[Vec<Reagent>], files: &[PathBuf]) {
    for (i, (slot, file)) in slots.iter().zip(files).enumerate() {
        if i > 0 {
            println!();
        }

        println!(
            "Slot {} ({}): {} reagents",
            i + 1,
            file.display(),
            slot.len()
        );
        for reagent in slot {
            println!("   {} {}", reagent.smiles(), reagent.name());
        }
    }
}

fn print_json_results(
    slots: &[Vec<Reagent>],
    files: &[PathBuf],
    settings: &PriorSettings,
) -> anyhow::Result<()> {
    let slot_values: Vec<serde_json::Value> = slots
        .iter()
        .zip(files)
        .map(|(slot, file)| {
            serde_json::json!({
                "file": file.display().to_string(),
                "count": slot.len(),
                "reagents": slot,
            })
        })
        .collect();

    let output = serde_json::json!({
        "minimum_uncertainty": settings.minimum_uncertainty,
        "known_std": settings.known_std,
        "slots": slot_values,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(slots: &[Vec<Reagent>]) {
    println!("slot\tname\tsmiles");
    for (i, slot) in slots.iter().enumerate() {
        for reagent in slot {
            println!("{}\t{}\t{}", i + 1, reagent.name(), reagent.smiles());
        }
    }
}
