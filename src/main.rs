use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use webster_reader::{
    parse_encoding, validate, validate_with, write_console, EntryParser, HtmlPage, ReaderOptions,
    Result,
};

#[derive(Parser)]
#[command(version, about = "Look up and export entries of the plain-text Webster's dictionary")]
struct Cli {
    /// Path to the Gutenberg corpus file.
    #[arg(long, env = "WEBSTER_CORPUS", default_value = "29765-8.txt")]
    corpus: PathBuf,

    /// Single-byte encoding of the corpus.
    #[arg(long, default_value = "latin1")]
    encoding: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the entries for one or more words.
    Lookup {
        #[arg(required = true)]
        words: Vec<String>,

        /// Also write the found entries to an HTML page.
        #[arg(long)]
        html: Option<PathBuf>,
    },
    /// Walk the whole corpus and check every headword.
    Validate,
    /// Validate, then write every entry to one HTML page.
    Export { output: PathBuf },
}

fn main() -> ExitCode {
    if std::env::var_os("RUST_LOG").is_none() {
        std::env::set_var("RUST_LOG", "warn");
    }
    pretty_env_logger::init();

    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let options = ReaderOptions::default().with_encoding(parse_encoding(&cli.encoding)?);
    let mut parser = EntryParser::open(&cli.corpus, options)?;

    match cli.command {
        Command::Lookup { words, html } => {
            let mut page = HtmlPage::new(words.join(", "));
            let mut stdout = io::stdout().lock();
            for word in &words {
                match parser.lookup(&word.to_uppercase())? {
                    Some(entry) => {
                        write_console(&mut stdout, &entry)?;
                        page.push(entry);
                    }
                    None => eprintln!("{}: not found", word),
                }
            }
            if let Some(path) = html {
                page.write_to(&path)?;
                println!("Wrote {} entries to {}", page.len(), path.display());
            }
            Ok(if page.is_empty() { ExitCode::FAILURE } else { ExitCode::SUCCESS })
        }
        Command::Validate => {
            let report = validate(&mut parser)?;
            match report.violation {
                None => {
                    println!("OK: {} distinct entries", report.entries);
                    Ok(ExitCode::SUCCESS)
                }
                Some(violation) => {
                    eprintln!(
                        "FAILED at {:?} after {} entries: {}",
                        violation.key(),
                        report.entries,
                        violation
                    );
                    Ok(ExitCode::FAILURE)
                }
            }
        }
        Command::Export { output } => {
            let mut page = HtmlPage::new("Webster's Unabridged Dictionary");
            let entries = validate_with(&mut parser, |entry| page.push(entry))?.into_result()?;
            page.write_to(&output)?;
            println!("Exported {} entries to {}", entries, output.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}
