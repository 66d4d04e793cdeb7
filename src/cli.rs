use crate::date_range::DateRange;
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use std::path::PathBuf;

/// Study tracker performance report
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "study_tracker")]
#[command(about = "Performance report over recorded study sessions", long_about = None)]
#[command(version)]
pub struct Args {
    /// Use in-memory database for testing
    #[arg(long, help = "Use in-memory database for testing")]
    pub test: bool,

    /// Custom database file path
    #[arg(long, value_name = "PATH", help = "Use custom database file path")]
    pub db_path: Option<PathBuf>,

    /// Override current date for testing (YYYY-MM-DD format)
    #[arg(
        long,
        value_name = "DATE",
        help = "Override current date (YYYY-MM-DD format)"
    )]
    pub override_date: Option<String>,

    #[arg(long, value_name = "ID", default_value = "1", help = "Student whose report is built")]
    pub student: String,

    #[arg(
        long,
        value_name = "ID",
        help = "Who is looking at the report (defaults to the student)"
    )]
    pub viewer: Option<String>,

    #[arg(long, value_name = "DATE", help = "First day of the period (YYYY-MM-DD)")]
    pub from: Option<String>,

    #[arg(
        long,
        value_name = "DATE",
        requires = "from",
        help = "Last day of the period (YYYY-MM-DD), defaults to --from"
    )]
    pub to: Option<String>,

    #[arg(
        long,
        conflicts_with_all = ["from", "to"],
        help = "Report over every recorded session"
    )]
    pub all: bool,

    #[arg(long, value_name = "DIR", help = "Also write the report as a paginated text file")]
    pub export_dir: Option<PathBuf>,

    #[arg(long, help = "Disable colored output")]
    pub no_color: bool,

    #[arg(long, value_name = "SEED", help = "Add a month of sample sessions before reporting")]
    pub seed: Option<u64>,

    #[arg(long, help = "Also print today's goal progress")]
    pub goals: bool,

    #[arg(long, help = "Also print the student's submitted essays")]
    pub essays: bool,

    #[arg(long, help = "Also print headline numbers for every student the viewer may see")]
    pub overview: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse_args() -> Self {
        Args::parse()
    }

    /// Validate the override_date argument if provided
    pub fn validate_override_date(&self) -> Result<Option<NaiveDate>, String> {
        self.override_date
            .as_deref()
            .map(|value| parse_day("--override-date", value))
            .transpose()
    }

    /// Report period from `--all`, `--from`/`--to`, or the trailing week before `now`
    pub fn resolve_range(&self, now: DateTime<Utc>) -> Result<DateRange, String> {
        if self.all {
            return Ok(DateRange::all());
        }

        let from = self
            .from
            .as_deref()
            .map(|value| parse_day("--from", value))
            .transpose()?;
        let to = self
            .to
            .as_deref()
            .map(|value| parse_day("--to", value))
            .transpose()?;

        let range = match (from, to) {
            (None, None) => DateRange::default_for(now),
            (None, Some(_)) => return Err("--to requires --from".to_string()),
            (Some(from), to) => DateRange { from: Some(from), to },
        };

        if range.is_inverted() {
            return Err(format!(
                "Invalid period: --from {} is after --to {}",
                self.from.as_deref().unwrap_or_default(),
                self.to.as_deref().unwrap_or_default()
            ));
        }
        Ok(range)
    }
}

fn parse_day(flag: &str, value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        format!(
            "Invalid date format for {}: '{}'. Expected YYYY-MM-DD",
            flag, value
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, d).unwrap()
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["study_tracker"]).unwrap();
        assert!(!args.test);
        assert!(args.db_path.is_none());
        assert_eq!(args.student, "1");
        assert!(args.viewer.is_none());
        assert!(!args.all);
        assert!(!args.no_color);
    }

    #[test]
    fn test_parse_all_flags() {
        let args = Args::try_parse_from([
            "study_tracker",
            "--test",
            "--db-path",
            "/tmp/test.db",
            "--override-date",
            "2025-03-10",
            "--student",
            "2",
            "--viewer",
            "a1",
            "--from",
            "2025-03-01",
            "--to",
            "2025-03-07",
            "--export-dir",
            "/tmp",
            "--no-color",
            "--seed",
            "42",
            "--goals",
            "--essays",
            "--overview",
        ])
        .unwrap();

        assert!(args.test);
        assert_eq!(args.db_path, Some(PathBuf::from("/tmp/test.db")));
        assert_eq!(args.student, "2");
        assert_eq!(args.viewer.as_deref(), Some("a1"));
        assert_eq!(args.export_dir, Some(PathBuf::from("/tmp")));
        assert!(args.no_color);
        assert_eq!(args.seed, Some(42));
        assert!(args.goals);
        assert!(args.essays);
        assert!(args.overview);
    }

    #[test]
    fn test_all_conflicts_with_from() {
        assert!(Args::try_parse_from(["study_tracker", "--all", "--from", "2025-03-01"]).is_err());
    }

    #[test]
    fn test_to_requires_from() {
        assert!(Args::try_parse_from(["study_tracker", "--to", "2025-03-01"]).is_err());
    }

    #[test]
    fn test_validate_override_date_valid() {
        let args = Args {
            override_date: Some("2024-01-15".to_string()),
            ..Args::default()
        };
        assert_eq!(
            args.validate_override_date().unwrap(),
            Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap())
        );
    }

    #[test]
    fn test_validate_override_date_invalid_format() {
        let args = Args {
            override_date: Some("2024/01/15".to_string()),
            ..Args::default()
        };
        let result = args.validate_override_date();
        assert!(result.unwrap_err().contains("Invalid date format"));
    }

    #[test]
    fn test_validate_override_date_invalid_date() {
        let args = Args {
            override_date: Some("2024-13-01".to_string()),
            ..Args::default()
        };
        assert!(args.validate_override_date().is_err());
    }

    #[test]
    fn test_validate_override_date_none() {
        assert_eq!(Args::default().validate_override_date().unwrap(), None);
    }

    #[test]
    fn test_default_range_is_trailing_week() {
        let range = Args::default().resolve_range(now()).unwrap();
        assert_eq!(range, DateRange::new(day(3), day(10)));
    }

    #[test]
    fn test_all_disables_filtering() {
        let args = Args {
            all: true,
            ..Args::default()
        };
        assert_eq!(args.resolve_range(now()).unwrap(), DateRange::all());
    }

    #[test]
    fn test_from_alone_is_single_day() {
        let args = Args {
            from: Some("2025-03-05".to_string()),
            ..Args::default()
        };
        let range = args.resolve_range(now()).unwrap();
        assert_eq!(range, DateRange::single_day(day(5)));
    }

    #[test]
    fn test_explicit_range() {
        let args = Args {
            from: Some("2025-03-01".to_string()),
            to: Some("2025-03-07".to_string()),
            ..Args::default()
        };
        assert_eq!(
            args.resolve_range(now()).unwrap(),
            DateRange::new(day(1), day(7))
        );
    }

    #[test]
    fn test_inverted_range_rejected() {
        let args = Args {
            from: Some("2025-03-07".to_string()),
            to: Some("2025-03-01".to_string()),
            ..Args::default()
        };
        let err = args.resolve_range(now()).unwrap_err();
        assert!(err.contains("Invalid period"), "{}", err);
    }

    #[test]
    fn test_bad_from_date_rejected() {
        let args = Args {
            from: Some("07/03/2025".to_string()),
            ..Args::default()
        };
        assert!(args.resolve_range(now()).unwrap_err().contains("--from"));
    }
}
