//! Generate command - run every template and inline target of the project

use anyhow::Result;
use autogen_core::project::{FileOutcome, GenerationReport, Generator};
use colored::Colorize;
use std::env;

/// Run the generator rooted at the current directory
pub fn run() -> Result<()> {
    let root = env::current_dir()?;
    let generator = Generator::load(&root)?;

    let files = &generator.manifest().files;
    log::debug!(
        "project root {}: {} template(s), {} inline target(s)",
        generator.root().display(),
        files.render.len(),
        files.inline.len()
    );

    let report = generator.run()?;
    print_report(&report);

    Ok(())
}

fn print_report(report: &GenerationReport) {
    if report.is_empty() {
        println!("{} No files to generate", "!".yellow());
        return;
    }

    for (file, outcome) in &report.files {
        match outcome {
            FileOutcome::Rendered { output } => println!(
                "{} Rendered {} -> {}",
                "✓".green().bold(),
                file.display(),
                output.display()
            ),
            FileOutcome::Patched { regions } => println!(
                "{} Patched {} ({} section(s))",
                "✓".green().bold(),
                file.display(),
                regions
            ),
            FileOutcome::Unchanged => {
                println!("{} {} is up to date", "·".dimmed(), file.display())
            }
        }
    }

    println!(
        "\n{} {} file(s) processed, {} written",
        "✓".green().bold(),
        report.files.len(),
        report.written()
    );
}
