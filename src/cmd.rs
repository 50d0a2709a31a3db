//! Command line interface

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use kdam::{tqdm, BarExt};

use excirc::catalog::stats::stats;
use excirc::io::{read_corpus_file, read_corpus_files, write_corpus_file, CorpusError};
use excirc::reduce::{remove_duplicates_in_width, remove_reducibles_in_width};
use excirc::Catalog;

/// Command line arguments
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Command line arguments
#[derive(Subcommand)]
pub enum Commands {
    /// Show statistics about a catalog
    ///
    /// Will print the number of structures for each width and gate count.
    #[clap()]
    Show(ShowArgs),

    /// Reduce a catalog
    ///
    /// Removes every structure that contains, as a contiguous block of literal rows, a structure
    /// with the same width and a lower gate count. Duplicate structures are removed afterwards,
    /// leaving each bucket sorted.
    #[clap(alias = "rm")]
    Reduce(ReduceArgs),
}

impl Commands {
    pub fn run(&self) -> Result<(), CorpusError> {
        match self {
            Commands::Show(a) => a.run(),
            Commands::Reduce(a) => a.run(),
        }
    }
}

/// Command arguments for catalog informations
#[derive(Args)]
pub struct ShowArgs {
    /// Catalog to show
    file: PathBuf,
}

impl ShowArgs {
    pub fn run(&self) -> Result<(), CorpusError> {
        let catalog = read_corpus_file(&self.file)?;
        println!("Catalog stats:\n{}", stats(&catalog));
        Ok(())
    }
}

/// Command arguments for reduction
#[derive(Args)]
pub struct ReduceArgs {
    /// Catalogs to reduce; they are merged first and must have the same bounds
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Output file for the reduced catalog
    #[arg(short = 'o', long)]
    output: PathBuf,
}

/// Run a pass on every width of the catalog, with a progress bar
fn run_pass<F: Fn(&mut Catalog, usize)>(
    catalog: &mut Catalog,
    description: &str,
    pass: F,
) -> Result<(), CorpusError> {
    let mut progress = tqdm!(total = catalog.nb_widths());
    progress.set_description(description);
    let nb_before = catalog.nb_structures();
    for width in 0..catalog.nb_widths() {
        pass(catalog, width);
        progress.set_postfix(format!("structures={}", catalog.nb_structures()));
        progress.update(1)?;
    }
    progress.write(format!(
        "{}: kept {}/{} structures",
        description,
        catalog.nb_structures(),
        nb_before
    ))?;
    Ok(())
}

impl ReduceArgs {
    pub fn run(&self) -> Result<(), CorpusError> {
        let mut catalog = read_corpus_files(&self.files)?;
        println!(
            "Read catalog with {} structures, widths up to {} and gate counts up to {}",
            catalog.nb_structures(),
            catalog.max_width(),
            catalog.max_gate_count()
        );
        run_pass(
            &mut catalog,
            "Removing reducibles",
            remove_reducibles_in_width,
        )?;
        run_pass(
            &mut catalog,
            "Removing duplicates",
            remove_duplicates_in_width,
        )?;
        catalog.check();
        println!("Catalog stats:\n{}", stats(&catalog));
        write_corpus_file(&self.output, &catalog)?;
        log::info!(
            "Wrote {} structures to {}",
            catalog.nb_structures(),
            self.output.display()
        );
        Ok(())
    }
}
