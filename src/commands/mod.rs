pub mod run;

use std::process::ExitCode;

use crate::config::Settings;

pub const USAGE: &str = "Usage: cdi-tracker <chart-name>\n\n\
Fetches the latest CDI rate, appends 10 jittered samples to ./taxa-cdi.csv\n\
and saves a chart of the whole file as <chart-name>.png";

/// How a run ended; mapped to the process exit status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Fetched, wrote and rendered
    Completed,
    /// No samples were collected or no chart was produced, without an I/O failure
    Degraded,
    /// Writing the store or rendering the chart failed
    Failed,
    /// Missing chart name; nothing was done
    Usage,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::Degraded | Outcome::Failed => ExitCode::FAILURE,
            Outcome::Usage => ExitCode::from(2),
        }
    }
}

/// The chart base name is the first positional argument after the program name
pub fn parse_chart_name(args: &[String]) -> Option<&str> {
    args.get(1).map(String::as_str)
}

pub async fn handle_args(args: &[String], settings: &Settings) -> Outcome {
    let Some(chart_name) = parse_chart_name(args) else {
        println!("{}", USAGE);
        return Outcome::Usage;
    };

    tracing::info!("📈 Run started with chart name {:?}", chart_name);
    run::execute(settings, chart_name).await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_chart_name() {
        assert_eq!(parse_chart_name(&args(&["cdi-tracker", "relatorio"])), Some("relatorio"));
        assert_eq!(parse_chart_name(&args(&["cdi-tracker", "a", "b"])), Some("a"));
        assert_eq!(parse_chart_name(&args(&["cdi-tracker"])), None);
        assert_eq!(parse_chart_name(&[]), None);
    }

    #[tokio::test]
    async fn test_missing_argument_has_no_side_effects() {
        let dir = tempfile::tempdir().unwrap();
        let csv_path = dir.path().join("taxa-cdi.csv");
        let settings = Settings {
            csv_path: csv_path.to_string_lossy().into_owned(),
            ..Settings::default()
        };

        let outcome = handle_args(&args(&["cdi-tracker"]), &settings).await;

        assert_eq!(outcome, Outcome::Usage);
        assert!(!csv_path.exists());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
