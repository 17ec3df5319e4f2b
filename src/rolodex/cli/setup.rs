use clap::Parser;
use flexi_logger::{Logger, LoggerHandle};
use log::{debug, info};
use rolodex::api::RolodexApi;
use rolodex::config::{self, RolodexConfig};
use rolodex::error::Result;
use rolodex::store::fs::FileStore;
use std::path::PathBuf;

/// Returns the version string, including the git hash for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "rolodex", bin_name = "rolodex", version = get_version())]
#[command(
    about = "Command-line contact book",
    long_about = "Command-line contact book.\n\n\
        Without a command, starts an interactive session; type 'help' there for the \
        command list. With a command (e.g. `rolodex add Bob 0123456789`), runs it once \
        and exits."
)]
pub struct Cli {
    /// Contact snapshot to use instead of the one in the data directory
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Contacts per page for listings
    #[arg(short = 'n', long, value_name = "N")]
    pub page_size: Option<usize>,

    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Command to run once, in the same form as at the prompt
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Starts logging to stderr. `RUST_LOG` wins over `-v`.
///
/// The handle must stay alive for the rest of the process. A logger that
/// fails to start is reported and otherwise ignored.
pub fn init_logging(verbose: u8) -> Option<LoggerHandle> {
    let started = Logger::try_with_env_or_str(log_level(verbose))
        .and_then(|logger| logger.log_to_stderr().start());
    match started {
        Ok(handle) => Some(handle),
        Err(err) => {
            eprintln!("Warning: failed to start logger: {}", err);
            None
        }
    }
}

/// Resolves config and snapshot location, then opens the session.
pub fn init_api(cli: &Cli) -> Result<RolodexApi<FileStore>> {
    let data_dir = config::data_dir();

    let mut config = match &data_dir {
        Ok(dir) => RolodexConfig::load(dir)?,
        Err(err) => {
            debug!("no data directory ({}), using default config", err);
            RolodexConfig::default()
        }
    };
    if let Some(page_size) = cli.page_size {
        config.set_page_size(page_size)?;
    }

    let path = match (&cli.file, data_dir) {
        (Some(file), _) => file.clone(),
        (None, Ok(dir)) => config.snapshot_path(&dir),
        (None, Err(err)) => return Err(err),
    };
    info!("using contact snapshot {}", path.display());

    RolodexApi::open(FileStore::new(path), config.page_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_startup_flags_and_trailing_command() {
        let cli = Cli::try_parse_from([
            "rolodex", "-vv", "--file", "/tmp/c.json", "-n", "3", "add", "Bob", "0123456789",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.file, Some(PathBuf::from("/tmp/c.json")));
        assert_eq!(cli.page_size, Some(3));
        assert_eq!(cli.command, ["add", "Bob", "0123456789"]);
    }

    #[test]
    fn no_command_means_interactive() {
        let cli = Cli::try_parse_from(["rolodex"]).unwrap();
        assert!(cli.command.is_empty());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(log_level(0), "warn");
        assert_eq!(log_level(1), "info");
        assert_eq!(log_level(2), "debug");
        assert_eq!(log_level(9), "trace");
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let cli = Cli::try_parse_from([
            "rolodex".to_string(),
            "--file".to_string(),
            dir.path().join("c.json").display().to_string(),
            "--page-size".to_string(),
            "0".to_string(),
        ])
        .unwrap();
        assert!(init_api(&cli).is_err());
    }

    #[test]
    fn explicit_file_is_used() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("c.json");
        let cli = Cli::try_parse_from([
            "rolodex".to_string(),
            "--file".to_string(),
            path.display().to_string(),
            "-n".to_string(),
            "4".to_string(),
        ])
        .unwrap();
        let api = init_api(&cli).unwrap();
        assert_eq!(api.store().path(), path.as_path());
        assert_eq!(api.page_size(), 4);
    }
}
