//! rune-edit - replay a script of editing commands against a text file

mod cli;

use std::fs;

use anyhow::{Context, Result};
use clap::Parser;

use rune_edit::editable::Region;
use rune_edit::model::Editor;
use rune_edit::tracing::RegionSnapshot;

use cli::{format_regions, parse_script, CliArgs};

fn main() -> Result<()> {
    rune_edit::tracing::init();

    let args = CliArgs::parse();
    let config = args.editor_config().context("Failed to load config")?;

    let text = fs::read_to_string(&args.file)
        .with_context(|| format!("Failed to read {}", args.file.display()))?;
    let source = fs::read_to_string(&args.script)
        .with_context(|| format!("Failed to read {}", args.script.display()))?;
    let steps = parse_script(&source)
        .with_context(|| format!("Failed to parse script {}", args.script.display()))?;

    let editor = Editor::with_config(config);
    let mut doc = editor.new_document();

    // Initial text is not undoable
    doc.set_scratch(true);
    doc.edit(|e| e.insert(0, &text))?;
    doc.set_scratch(false);
    doc.set_regions([Region::cursor(0)]);

    tracing::info!(
        "Replaying {} steps against {} ({} chars)",
        steps.len(),
        args.file.display(),
        doc.buffer().len()
    );

    for (i, step) in steps.iter().enumerate() {
        if let Some(regions) = step.regions() {
            doc.set_regions(regions);
        }

        let before = RegionSnapshot::from_regions(doc.regions());
        editor
            .run_command(&mut doc, &step.command, &step.args)
            .with_context(|| format!("Step {} ({}) failed", i + 1, step.command))?;
        before.log_diff(&RegionSnapshot::from_regions(doc.regions()), &step.command);
    }

    print!("{}", doc.text());
    if !doc.text().ends_with('\n') {
        println!();
    }
    println!("regions: {}", format_regions(doc.regions()));
    Ok(())
}
