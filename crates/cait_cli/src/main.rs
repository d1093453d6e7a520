//! `cait` command-line entry point.
//!
//! # Responsibility
//! - Resolve configuration, start logging and dispatch to core use-cases.
//! - Print results to stdout; diagnostics go through the logger.

mod config;

use anyhow::{anyhow, bail, Context, Result};
use cait_core::{
    build_accession_title_index, init_logging, load_subjects, render_title_index,
    AccessionViewService,
};
use clap::Parser;
use config::{Cli, Command};
use log::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_config())
        .map_err(|err| anyhow!(err))
        .context("failed to initialize logging")?;

    match &cli.command {
        Command::Index { root, json } => {
            let root = cli.index_root(root.as_deref());
            let index = build_accession_title_index(&root)
                .with_context(|| format!("failed to build title index for {}", root.display()))?;
            if *json {
                println!("{}", serde_json::to_string_pretty(&index)?);
            } else {
                for (uri, markup) in render_title_index(&index) {
                    println!("{uri}\t{markup}");
                }
            }
        }
        Command::View {
            accessions,
            subjects,
            digital_objects,
            uri,
        } => {
            let subjects_dir = cli.subjects_dir(subjects.as_deref());
            let digital_objects_dir = cli.digital_objects_dir(digital_objects.as_deref());
            let accessions_dir = cli.accessions_dir(accessions.as_deref());

            let service = AccessionViewService::from_dirs(&subjects_dir, &digital_objects_dir)
                .context("failed to load lookup records")?;
            let mut views = service
                .normalize_dir(&accessions_dir)
                .context("failed to load accessions")?;

            if let Some(uri) = uri {
                views.retain(|view| view.uri == *uri);
                if views.is_empty() {
                    bail!("no accession with uri {uri} in {}", accessions_dir.display());
                }
            }
            println!("{}", serde_json::to_string_pretty(&views)?);
        }
        Command::Subjects { dir } => {
            let dir = cli.subjects_dir(dir.as_deref());
            let subjects = load_subjects(&dir).context("failed to load subjects")?;
            for subject in &subjects {
                println!("{}\t{}", subject.uri, subject.title);
            }
            info!(
                "event=cli_subjects module=cli status=ok count={}",
                subjects.len()
            );
        }
        Command::Version => {
            println!("cait_core version={}", cait_core::core_version());
        }
    }

    Ok(())
}
