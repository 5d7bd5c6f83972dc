use clap::Parser;
use log::{error, info};
use radstruct_core::cli::{Cli, Document, OutputFormat};
use radstruct_core::{
    RadstructError, ReportStructurer, RuleBasedAnalyzer, StructuredReport, SynonymSet, TextReport,
};
use std::path::Path;
use std::process;
use std::sync::Arc;

fn main() {
    let cli = Cli::parse();

    // Setup logging
    setup_logging(cli.verbose);

    let synonyms = match load_synonyms(cli.synonyms.as_deref()) {
        Ok(synonyms) => Arc::new(synonyms),
        Err(e) => {
            error!("Failed to load synonyms: {}", e);
            eprintln!("Error: Failed to load synonyms: {}", e);
            process::exit(1);
        }
    };

    let documents = match cli.documents() {
        Ok(documents) => documents,
        Err(e) => {
            error!("Failed to read input: {}", e);
            eprintln!("Error: Failed to read input: {}", e);
            process::exit(1);
        }
    };

    info!("Structuring {} document(s)", documents.len());

    let analyzer = RuleBasedAnalyzer::default().with_max_chars(cli.max_chars);
    let structurer = ReportStructurer::with_synonyms(analyzer, synonyms);

    let texts: Vec<&str> = documents.iter().map(|d| d.text.as_str()).collect();
    let reports = structurer.structure_all(&texts);

    output_reports(&documents, &reports, cli.format);
}

fn setup_logging(verbose: bool) {
    if verbose {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }
}

fn load_synonyms(path: Option<&Path>) -> Result<SynonymSet, RadstructError> {
    match path {
        None => Ok(SynonymSet::default()),
        #[cfg(feature = "json")]
        Some(path) => {
            info!("Loading synonyms from {}", path.display());
            SynonymSet::from_json_file(path)
        }
        #[cfg(not(feature = "json"))]
        Some(_) => Err(RadstructError::Catalog(
            "synonym files require the 'json' feature".to_string(),
        )),
    }
}

fn output_reports(documents: &[Document], reports: &[StructuredReport], format: OutputFormat) {
    match format {
        OutputFormat::Text => {
            for (document, report) in documents.iter().zip(reports) {
                if documents.len() > 1 {
                    println!("# {}", document.source);
                }
                println!("{}", TextReport::new(report).with_caption(&document.text));
            }
        }
        OutputFormat::Json => {
            #[cfg(feature = "json")]
            {
                match output_json(documents, reports) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        error!("Failed to serialize to JSON: {}", e);
                        eprintln!("Error: Failed to serialize to JSON: {}", e);
                        process::exit(1);
                    }
                }
            }
            #[cfg(not(feature = "json"))]
            {
                let _ = (documents, reports);
                eprintln!("Error: JSON output requires the 'json' feature");
                eprintln!("Rebuild with: cargo build --features json");
                process::exit(1);
            }
        }
    }
}

#[cfg(feature = "json")]
fn output_json(
    documents: &[Document],
    reports: &[StructuredReport],
) -> Result<String, serde_json::Error> {
    use serde::Serialize;

    #[derive(Serialize)]
    struct DocumentJson<'a> {
        source: &'a str,
        caption: &'a str,
        observations: &'a StructuredReport,
    }

    let output: Vec<DocumentJson<'_>> = documents
        .iter()
        .zip(reports)
        .map(|(document, report)| DocumentJson {
            source: &document.source,
            caption: document.text.trim(),
            observations: report,
        })
        .collect();

    serde_json::to_string_pretty(&output)
}
