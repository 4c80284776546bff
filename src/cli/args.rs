use crate::io::ParserConfig;
use clap::Parser;
use std::path::PathBuf;

/// Generate a monthly income/expenditure statement from a transaction CSV
#[derive(Parser, Debug)]
#[command(name = "ledger-statement")]
#[command(
    about = "Generate a monthly statement from a transaction CSV",
    long_about = None
)]
pub struct CliArgs {
    /// Target month
    #[arg(
        long = "period",
        value_name = "YYYYMM",
        help = "The target month in YYYYMM format (e.g., 202601)"
    )]
    pub period: String,

    /// Input CSV file path containing transaction records
    #[arg(
        long = "file",
        value_name = "PATH",
        help = "Path to the transaction CSV file"
    )]
    pub file: PathBuf,

    /// Reject rows with more than three columns
    #[arg(
        long = "strict-columns",
        help = "Reject data rows that have more than the three expected columns"
    )]
    pub strict_columns: bool,
}

impl CliArgs {
    /// Create a ParserConfig from CLI arguments
    pub fn to_parser_config(&self) -> ParserConfig {
        ParserConfig::new(self.strict_columns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_required_arguments() {
        let parsed =
            CliArgs::try_parse_from(["program", "--period", "202601", "--file", "in.csv"]).unwrap();
        assert_eq!(parsed.period, "202601");
        assert_eq!(parsed.file, PathBuf::from("in.csv"));
        assert!(!parsed.strict_columns);
    }

    #[rstest]
    #[case::default(&["program", "--period", "202601", "--file", "in.csv"], false)]
    #[case::strict(&["program", "--strict-columns", "--period", "202601", "--file", "in.csv"], true)]
    fn test_parser_config_conversion(#[case] args: &[&str], #[case] strict: bool) {
        let parsed = CliArgs::try_parse_from(args).unwrap();
        assert_eq!(parsed.to_parser_config(), ParserConfig::new(strict));
    }

    // Period validation belongs to the processor, not to clap
    #[test]
    fn test_period_is_not_validated_by_cli() {
        let parsed =
            CliArgs::try_parse_from(["program", "--period", "202613", "--file", "in.csv"]).unwrap();
        assert_eq!(parsed.period, "202613");
    }

    // Error handling tests
    #[rstest]
    #[case::no_arguments(&["program"])]
    #[case::missing_file(&["program", "--period", "202601"])]
    #[case::missing_period(&["program", "--file", "in.csv"])]
    #[case::unknown_flag(&["program", "--period", "202601", "--file", "in.csv", "--verbose"])]
    fn test_parsing_errors(#[case] args: &[&str]) {
        let result = CliArgs::try_parse_from(args);
        assert!(result.is_err());
    }
}
