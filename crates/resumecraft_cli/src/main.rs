//! Command-line surface over the resumecraft core crate.
//!
//! # Responsibility
//! - Exercise the full pipeline: seed, preview, export, share.
//! - Keep output deterministic for quick local sanity checks.

use clap::{Parser, Subcommand};
use resumecraft_core::db::open_db;
use resumecraft_core::{
    default_log_level, export_html, export_pdf, init_logging, render_text, sample_resume,
    share_link, Autosaver, ExportOutcome, GenpdfConverter, Resume, ResumeSession, ResumeStore,
    SqliteResumeStore, SystemClock,
};
use std::error::Error;
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "resumecraft", about = "Local-first resume builder", version)]
struct Cli {
    /// SQLite database file holding saved resumes.
    #[arg(long, default_value = "resumecraft.sqlite3")]
    db: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset.
    #[arg(long)]
    log_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Seed and save the bundled sample resume.
    Demo,
    /// Print a text preview of a saved resume.
    Preview {
        /// Resume ID; defaults to the most recently updated one.
        #[arg(long)]
        id: Option<Uuid>,
    },
    /// List the built-in template catalog.
    Templates,
    /// Export a saved resume as a standalone HTML document.
    ExportHtml {
        #[arg(long)]
        id: Option<Uuid>,
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
    /// Export a saved resume as PDF, falling back to HTML on failure.
    ExportPdf {
        #[arg(long)]
        id: Option<Uuid>,
        #[arg(long, default_value = ".")]
        out: PathBuf,
        /// Directory holding the TrueType family used by the PDF backend.
        #[arg(long, default_value = "assets/fonts")]
        fonts: PathBuf,
        #[arg(long, default_value = "LiberationSans")]
        font_family: String,
    },
    /// Print a stateless share link embedding the resume data.
    Share {
        #[arg(long)]
        id: Option<Uuid>,
        #[arg(long, default_value = "https://resumecraft.local")]
        base_url: String,
    },
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        init_logging(default_log_level(), log_dir)?;
    }

    let conn = open_db(&cli.db)?;
    let store = SqliteResumeStore::try_new(&conn)?;

    match cli.command {
        Command::Demo => {
            let mut session = ResumeSession::new(SystemClock);
            let mut autosaver = Autosaver::new();
            let resume = sample_resume(now_ms());
            let id = resume.id;
            session.set_resume(resume);
            autosaver.mirror(&mut session, &store)?;
            println!("saved sample resume {id}");
            println!("{} resume(s) in store", session.saved().len());
        }
        Command::Preview { id } => {
            let resume = select_resume(&store, id)?;
            print!("{}", render_text(&resume));
        }
        Command::Templates => {
            for template in resumecraft_core::template_catalog() {
                let tier = if template.is_premium { "premium" } else { "free" };
                println!("{}: {} [{tier}] {}", template.id, template.name, template.description);
            }
        }
        Command::ExportHtml { id, out } => {
            let resume = select_resume(&store, id)?;
            let path = export_html(&resume, &out)?;
            println!("wrote {}", path.display());
        }
        Command::ExportPdf {
            id,
            out,
            fonts,
            font_family,
        } => {
            let resume = select_resume(&store, id)?;
            let converter = GenpdfConverter::new(fonts, font_family);
            match export_pdf(&resume, &out, &converter)? {
                ExportOutcome::Pdf(path) => println!("wrote {}", path.display()),
                ExportOutcome::HtmlFallback { path, instructions } => {
                    println!("wrote {}", path.display());
                    println!("{instructions}");
                }
            }
        }
        Command::Share { id, base_url } => {
            let resume = select_resume(&store, id)?;
            println!("{}", share_link(&resume, &base_url)?);
        }
    }

    Ok(())
}

fn select_resume(store: &SqliteResumeStore<'_>, id: Option<Uuid>) -> Result<Resume, Box<dyn Error>> {
    let resumes = store.load_all()?;
    let selected = match id {
        Some(id) => resumes.into_iter().find(|resume| resume.id == id),
        None => resumes
            .into_iter()
            .max_by_key(|resume| (resume.updated_at, resume.id)),
    };
    selected.ok_or_else(|| "no saved resume found; run `resumecraft demo` first".into())
}

fn now_ms() -> i64 {
    use resumecraft_core::Clock;
    SystemClock.now_ms()
}
