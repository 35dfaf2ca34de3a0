use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// RobotEvents skills leaderboard
///
/// Looks up an event by its code, fetches every registered team's skills
/// runs, ranks teams by best driver + best programming score and writes the
/// table to `<OUTPUT>.xlsx`. If that file cannot be written the table goes
/// to `<EVENT_CODE>_skills.xlsx` instead.
///
/// The API key is read from the API_KEY environment variable (a `.env` file
/// in the working directory is loaded first).
#[derive(Parser, Debug)]
#[command(version, about, long_about)]
#[command(styles = get_styles())]
pub struct Args {
    /// Event code as shown on RobotEvents, e.g. RE-VRC-24-1234
    pub event_code: String,

    /// Output file name without the .xlsx extension
    pub output: String,

    /// Season id used for skills lookups (defaults to the current season)
    #[arg(long = "season", short = 's')]
    pub season: Option<u32>,

    /// Read configuration from this TOML file instead of the default location
    #[arg(long = "config", help_heading = "Configuration")]
    pub config: Option<String>,

    /// Specify a custom log file path. If not provided, logs will be written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Log at debug level, including response statuses and sizes
    #[arg(long = "debug", help_heading = "Debug")]
    pub debug: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_two_positionals() {
        let args = Args::try_parse_from(["skills_ranked", "RE-VRC-24-1234", "ranking"]).unwrap();
        assert_eq!(args.event_code, "RE-VRC-24-1234");
        assert_eq!(args.output, "ranking");
        assert_eq!(args.season, None);
        assert!(!args.debug);
    }

    #[test]
    fn test_parses_options() {
        let args = Args::try_parse_from([
            "skills_ranked",
            "RE-VRC-24-1234",
            "ranking",
            "--season",
            "181",
            "--debug",
            "--log-file",
            "/tmp/run.log",
        ])
        .unwrap();
        assert_eq!(args.season, Some(181));
        assert!(args.debug);
        assert_eq!(args.log_file.as_deref(), Some("/tmp/run.log"));
    }

    #[test]
    fn test_rejects_wrong_arity() {
        assert!(Args::try_parse_from(["skills_ranked"]).is_err());
        assert!(Args::try_parse_from(["skills_ranked", "RE-VRC-24-1234"]).is_err());
        assert!(Args::try_parse_from(["skills_ranked", "a", "b", "c"]).is_err());
    }
}
