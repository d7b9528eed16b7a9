use clap::Parser;

/// This is a tabulation program for satisfaction surveys.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file describing the survey source and its settings.
    /// See the manual of survey_tally for the format.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) A reference file containing the expected report in JSON format. If provided, evalsurvey
    /// will check that the computed report matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (file path, 'stdout' or empty) If specified, the report will be written in JSON format to the given
    /// location. Setting this option overrides the path that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path or empty) The file containing the survey answers. Setting this option overrides the
    /// source that may be specified with the --config option.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (xlsx, csv or json) The type of the input. If not provided, it is deduced from the file extension.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// When using an Excel file, indicates the name of the worksheet to use.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    /// (default bundle) The report to produce: groups, group, all, compare or bundle.
    #[clap(long, value_parser)]
    pub report: Option<String>,

    /// With --report group: the id of the group, as listed by --report groups.
    #[clap(long, value_parser)]
    pub group_id: Option<usize>,

    /// With --report group: the name of the group.
    #[clap(long, value_parser)]
    pub group_name: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
