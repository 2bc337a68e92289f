use std::path::PathBuf;

use clap::Args;

use crate::cli::OutputFormat;
use crate::core::settings::PriorSettings;
use crate::parsing::smi::parse_reagent_file;

#[derive(Args)]
pub struct CheckArgs {
    /// Reagent SMILES files to check
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}

/// Execute check subcommand
///
/// Parses every file in full; the first structural or IO error aborts the
/// run with a nonzero exit.
///
/// # Errors
///
/// Returns an error naming the offending file if it cannot be read or parsed.
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    // Seed values do not influence parsing; a structural check only needs
    // the line format.
    let settings = PriorSettings::new(0.0, 0.0);

    let mut counts = Vec::with_capacity(args.files.len());
    for file in &args.files {
        let reagents = parse_reagent_file(file, &settings, None)
            .map_err(|e| anyhow::anyhow!("{}: {e}", file.display()))?;

        if verbose {
            eprintln!("{}: ok", file.display());
        }
        counts.push((file, reagents.len()));
    }

    match format {
        OutputFormat::Text => {
            for (file, count) in &counts {
                println!("{}: {count} reagents", file.display());
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = counts
                .iter()
                .map(|(file, count)| {
                    serde_json::json!({
                        "file": file.display().to_string(),
                        "count": count,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("file\tcount");
            for (file, count) in &counts {
                println!("{}\t{count}", file.display());
            }
        }
    }

    Ok(())
}
