use log::{debug, info, warn};

use snafu::{prelude::*, Snafu};
use survey_tally::*;

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value as JSValue;
use text_diff::print_diff;

use crate::args::Args;
use crate::survey::config_reader::*;

pub mod config_reader;
pub mod io_common;
pub mod io_csv;
pub mod io_excel;
pub mod io_json;
pub mod report;

#[derive(Debug, Snafu)]
pub enum SurveyError {
    #[snafu(display("Error opening Excel file {path}"))]
    OpeningExcel {
        source: calamine::XlsxError,
        path: String,
    },
    #[snafu(display("The Excel file {path} has no worksheet or no header row"))]
    EmptyExcel { path: String },
    #[snafu(display("Cannot find worksheet {name:?} in {path}"))]
    MissingWorksheet { path: String, name: String },
    #[snafu(display(
        "The Excel file {path} has several worksheets, the worksheet name must be provided"
    ))]
    TooManyWorksheets { path: String },
    #[snafu(display("Error opening CSV file {path}"))]
    CsvOpen { source: csv::Error, path: String },
    #[snafu(display("Error reading line {lineno} of the CSV file"))]
    CsvLineParse { source: csv::Error, lineno: usize },
    #[snafu(display("Error opening file {path}"))]
    OpeningJson {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Error parsing JSON"))]
    ParsingJson { source: serde_json::Error },
    #[snafu(display("Expected a positive integer for {field}"))]
    ParsingJsonNumber { field: String },
    #[snafu(display("The data endpoint reported an error: {message}"))]
    EndpointRejected { message: String },
    #[snafu(display("JSON structure not recognized: {description}"))]
    UnrecognizedPayload { description: String },
    #[snafu(display("Unknown input type {input_type:?} (expected xlsx, csv or json)"))]
    UnknownInputType { input_type: String },
    #[snafu(display("Unknown report {report:?} (expected groups, group, all, compare or bundle)"))]
    UnknownReport { report: String },
    #[snafu(display("No input file: use --input or a source in the configuration file"))]
    MissingInput {},
    #[snafu(display("The group report needs --group-id or --group-name"))]
    MissingGroup {},
    #[snafu(display("Unknown group {group}"))]
    UnknownGroup { group: String },
    #[snafu(display("Invalid survey table"))]
    BuildingTable { source: TableErrors },
    #[snafu(display("Error writing {path}"))]
    WritingOutput {
        source: std::io::Error,
        path: String,
    },
    #[snafu(display("Difference detected between the computed report and the reference {path}"))]
    ReferenceMismatch { path: String },

    #[snafu(whatever, display("{message}"))]
    Whatever {
        message: String,
        #[snafu(source(from(Box<dyn std::error::Error>, Some)))]
        source: Option<Box<dyn std::error::Error>>,
    },
}

pub type SurveyResult<T> = Result<T, SurveyError>;

/// The formats the survey answers can be read from.
#[derive(Eq, PartialEq, Debug, Clone, Copy)]
pub enum InputType {
    Xlsx,
    Csv,
    Json,
}

impl InputType {
    pub fn parse(s: &str) -> SurveyResult<InputType> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" | "excel" => Ok(InputType::Xlsx),
            "csv" => Ok(InputType::Csv),
            "json" => Ok(InputType::Json),
            x => UnknownInputTypeSnafu { input_type: x }.fail(),
        }
    }

    /// Deduces the type from the extension of the file.
    pub fn from_path(path: &str) -> SurveyResult<InputType> {
        let ext = Path::new(path)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        InputType::parse(ext)
    }
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum ReportKind {
    Groups,
    Group,
    All,
    Compare,
    Bundle,
}

impl ReportKind {
    pub fn parse(s: &str) -> SurveyResult<ReportKind> {
        match s {
            "groups" => Ok(ReportKind::Groups),
            "group" => Ok(ReportKind::Group),
            "all" => Ok(ReportKind::All),
            "compare" => Ok(ReportKind::Compare),
            "bundle" => Ok(ReportKind::Bundle),
            x => UnknownReportSnafu { report: x }.fail(),
        }
    }
}

/// Where the answers are read from, after merging the configuration file and the arguments.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct ResolvedSource {
    pub path: String,
    pub input_type: InputType,
    pub excel_worksheet_name: Option<String>,
}

pub fn read_survey_table(source: &ResolvedSource) -> SurveyResult<RawTable> {
    info!(
        "Attempting to read survey file {:?} as {:?}",
        source.path, source.input_type
    );
    let table = match source.input_type {
        InputType::Xlsx => {
            io_excel::read_excel_table(&source.path, source.excel_worksheet_name.as_deref())?
        }
        InputType::Csv => io_csv::read_csv_table(&source.path)?,
        InputType::Json => io_json::read_json_table(&source.path)?,
    };
    info!(
        "Read {} rows and {} columns from {}",
        table.rows.len(),
        table.columns.len(),
        io_common::simplify_file_name(&source.path)
    );
    Ok(table)
}

/// Renders the requested report for a snapshot.
pub fn build_report(
    snapshot: &Snapshot,
    report: &ReportKind,
    group_id: Option<usize>,
    group_name: Option<&str>,
) -> SurveyResult<JSValue> {
    let js = match report {
        ReportKind::Groups => report::directory_to_json(&snapshot.group_directory()),
        ReportKind::Group => {
            let summaries = match (group_id, group_name) {
                (Some(id), _) => snapshot
                    .summarize_group_id(id)
                    .context(UnknownGroupSnafu {
                        group: id.to_string(),
                    })?,
                (None, Some(name)) => {
                    let cleaned = survey_tally::normalize::clean_text(name);
                    if !snapshot.group_names().contains(&cleaned) {
                        return UnknownGroupSnafu { group: cleaned }.fail();
                    }
                    snapshot.summarize_group(&cleaned)
                }
                (None, None) => return MissingGroupSnafu {}.fail(),
            };
            report::summaries_to_json(&summaries)
        }
        ReportKind::All => report::summaries_to_json(&snapshot.summarize_all()),
        ReportKind::Compare => report::comparison_to_json(&snapshot.compare_groups()),
        ReportKind::Bundle => report::bundle_to_json(snapshot),
    };
    Ok(js)
}

fn write_output(out: Option<&str>, content: &str) -> SurveyResult<()> {
    match out {
        None | Some("stdout") | Some("") => {
            println!("{}", content);
            Ok(())
        }
        Some(path) => {
            info!("Writing report to {:?}", path);
            fs::write(path, content).context(WritingOutputSnafu { path })
        }
    }
}

fn check_reference(reference_path: &str, pretty_js: &str) -> SurveyResult<()> {
    let reference = read_reference(reference_path)?;
    let pretty_reference = serde_json::to_string_pretty(&reference).context(ParsingJsonSnafu {})?;
    if pretty_reference != pretty_js {
        warn!("Found differences with the reference report");
        print_diff(pretty_reference.as_str(), pretty_js, "\n");
        return ReferenceMismatchSnafu {
            path: reference_path,
        }
        .fail();
    }
    info!("The report matches the reference {:?}", reference_path);
    Ok(())
}

fn resolve_source(args: &Args, config: &SurveyConfig, root: &Path) -> SurveyResult<ResolvedSource> {
    let file_source = config.source.clone().unwrap_or_default();
    let path = match (&args.input, &file_source.file_path) {
        (Some(p), _) => p.clone(),
        // Paths in the configuration file are relative to the file.
        (None, Some(p)) => {
            let full: PathBuf = [root, Path::new(p)].iter().collect();
            full.display().to_string()
        }
        (None, None) => return MissingInputSnafu {}.fail(),
    };
    let input_type = match (&args.input_type, &file_source.provider) {
        (Some(t), _) => InputType::parse(t)?,
        (None, Some(t)) if args.input.is_none() => InputType::parse(t)?,
        _ => InputType::from_path(&path)?,
    };
    Ok(ResolvedSource {
        path,
        input_type,
        excel_worksheet_name: args
            .excel_worksheet_name
            .clone()
            .or(file_source.excel_worksheet_name),
    })
}

pub fn run_survey(args: &Args) -> SurveyResult<()> {
    let (config, root) = match &args.config {
        Some(config_path) => {
            let config = read_config(config_path)?;
            info!("config: {:?}", config);
            let root = Path::new(config_path)
                .parent()
                .map(|p| p.to_path_buf())
                .unwrap_or_default();
            (config, root)
        }
        None => (SurveyConfig::default(), PathBuf::new()),
    };
    let rules = config.rules()?;
    debug!("rules: {:?}", rules);

    let source = resolve_source(args, &config, &root)?;
    let table = read_survey_table(&source)?;

    let store = SnapshotStore::new(Snapshot::build(table, &rules));
    let snapshot = store.current();
    let stats = snapshot.stats();
    info!(
        "Loaded {} rows from {:?}: {} groups, {} Likert questions, {} Yes/No questions",
        stats.rows, source.path, stats.groups, stats.likert_questions, stats.yesno_questions
    );

    let report_kind = ReportKind::parse(args.report.as_deref().unwrap_or("bundle"))?;
    let js = build_report(
        &snapshot,
        &report_kind,
        args.group_id,
        args.group_name.as_deref(),
    )?;
    let pretty_js = serde_json::to_string_pretty(&js).context(ParsingJsonSnafu {})?;

    let out = args.out.clone().or(config.output_path);
    write_output(out.as_deref(), &pretty_js)?;

    if let Some(reference_path) = &args.reference {
        check_reference(reference_path, &pretty_js)?;
    }
    Ok(())
}
