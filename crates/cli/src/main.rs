use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use catalog_core::application::CatalogService;
use catalog_core::domain::AppDraft;
use catalog_core::error::{CatalogError, Result};
use catalog_core::filter::{apply_filters, catalog_stats, PriceFilter};
use catalog_core::ports::{CatalogView, CsvSource, KeyValueStore, Severity};
use catalog_core::validate::{validate_app_name, validate_company_name, validate_website};
use console_ui::ConsoleView;
use fs_source::{read_import_file, FileCsvSource};
use sqlite_store::SqliteKeyValueStore;

/// CLI tool to manage a local catalog of AI applications backed by a CSV source
#[derive(Parser, Debug)]
#[command(name = "aicat")]
#[command(about = "Manages a local catalog of AI applications with CSV import/export")]
struct Cli {
    /// Path to the SQLite database holding the catalog snapshot
    #[arg(long, default_value = "catalog.db")]
    db: String,

    /// Path to the CSV file the catalog is seeded from
    #[arg(long, default_value = "database.csv")]
    source: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List catalog entries, optionally filtered
    List {
        /// Only show entries in this usage field
        #[arg(long)]
        field: Option<String>,

        /// Only show free or paid entries
        #[arg(long, value_enum)]
        price: Option<PriceArg>,
    },
    /// Add a new application to the catalog
    Add {
        #[arg(long)]
        name: String,
        #[arg(long)]
        company: String,
        #[arg(long)]
        website: String,
        /// Free-text pricing label, e.g. "Yes (free tier)" or "No"
        #[arg(long, default_value = "Yes")]
        is_free: String,
        /// Usage field the application belongs to
        #[arg(long)]
        field: String,
        #[arg(long)]
        description: String,
        /// Logo URL; a placeholder is used when omitted
        #[arg(long, default_value = "")]
        logo: String,
    },
    /// Delete an application by id
    Delete { id: i64 },
    /// Replace the whole catalog with the contents of a CSV file
    Import { file: PathBuf },
    /// Export the catalog as CSV, to a file or stdout
    Export {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Clear the stored catalog and reload it from the CSV source
    Reset,
    /// Show catalog counters
    Stats,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PriceArg {
    Free,
    Paid,
}

impl From<PriceArg> for PriceFilter {
    fn from(arg: PriceArg) -> Self {
        match arg {
            PriceArg::Free => PriceFilter::Free,
            PriceArg::Paid => PriceFilter::Paid,
        }
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Instantiate concrete implementations of the secondary adapters
    let store: Box<dyn KeyValueStore> = Box::new(SqliteKeyValueStore::new(cli.db.clone()));
    let source: Box<dyn CsvSource> = Box::new(FileCsvSource::new(cli.source.clone()));
    let view = ConsoleView::new();

    let mut service = CatalogService::new(store, source);

    match run(cli.command, &mut service, &view) {
        Ok(()) => {}
        Err(e) => {
            view.notify(&e.to_string(), Severity::Error);
            std::process::exit(1);
        }
    }
}

fn run(command: Command, service: &mut CatalogService, view: &ConsoleView) -> Result<()> {
    match command {
        Command::List { field, price } => {
            service.ensure_loaded()?;
            let records = service.get_all()?;
            let filtered = apply_filters(&records, field.as_deref(), price.map(Into::into));
            view.render(&filtered)?;
        }
        Command::Add {
            name,
            company,
            website,
            is_free,
            field,
            description,
            logo,
        } => {
            if !validate_submission(view, &name, &company, &website, &field, &description) {
                return Err(CatalogError::InvalidDraft(
                    "submission failed validation".into(),
                ));
            }

            service.ensure_loaded()?;
            let draft = AppDraft {
                name,
                company,
                website,
                is_free,
                field,
                description,
                logo,
            };
            let record = service.add(draft)?;
            view.notify(
                &format!("added \"{}\" with id {}", record.name, record.id),
                Severity::Success,
            );
        }
        Command::Delete { id } => {
            service.ensure_loaded()?;
            if service.remove(id)? {
                view.notify(&format!("deleted application {id}"), Severity::Success);
            } else {
                view.notify(&format!("no application with id {id}"), Severity::Warning);
            }
        }
        Command::Import { file } => {
            let contents = read_import_file(&file)?;
            let count = service.import_replace(&contents)?;
            view.notify(&format!("imported {count} application(s)"), Severity::Success);
        }
        Command::Export { output } => {
            service.ensure_loaded()?;
            let records = service.get_all()?;
            if records.is_empty() {
                view.notify("no data to export", Severity::Warning);
                return Ok(());
            }
            let csv = service.export_all()?;
            match output {
                Some(path) => {
                    fs::write(&path, csv)?;
                    view.notify(
                        &format!("exported {} application(s) to {}", records.len(), path.display()),
                        Severity::Success,
                    );
                }
                None => print!("{csv}"),
            }
        }
        Command::Reset => {
            service.reset()?;
            view.notify("catalog reset from CSV source", Severity::Success);
        }
        Command::Stats => {
            service.ensure_loaded()?;
            let stats = catalog_stats(&service.get_all()?);
            println!("total applications: {}", stats.total);
            println!("free applications:  {}", stats.free);
            println!("usage fields:       {}", stats.fields.join(", "));
        }
    }
    Ok(())
}

/// Runs every submission check and reports each failure before giving a
/// verdict, so the user sees all problems at once.
fn validate_submission(
    view: &ConsoleView,
    name: &str,
    company: &str,
    website: &str,
    field: &str,
    description: &str,
) -> bool {
    let mut valid = true;

    if !validate_app_name(name) {
        view.notify(
            "application name must contain English letters only, no spaces",
            Severity::Error,
        );
        valid = false;
    }
    if !validate_company_name(company) {
        view.notify(
            "company name must contain English letters only (spaces allowed)",
            Severity::Error,
        );
        valid = false;
    }
    if !validate_website(website) {
        view.notify("website must be a valid http(s) URL", Severity::Error);
        valid = false;
    }
    if field.trim().is_empty() {
        view.notify("please choose a usage field", Severity::Error);
        valid = false;
    }
    if description.trim().is_empty() {
        view.notify("please provide a short description", Severity::Error);
        valid = false;
    }

    valid
}
