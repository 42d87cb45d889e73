//! Parsing command-line arguments.

use clap::{
    command,
    error::{Error, ErrorKind},
    value_parser, Arg, ArgAction, ArgMatches, Command,
};
use log::debug;
use std::{ffi::OsString, fs, path::Path};
use terca_lib::{Config, Row, World};

/// How to print the spacetime field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Format {
    /// One generation per line, `.` for `0`, `A` for `1`, `B` for `2`.
    Plaintext,
    /// A JSON object containing the field as an array of arrays.
    Json,
}

/// A struct to store the parse results.
#[derive(Debug)]
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) world: World,
    pub(crate) format: Format,
    pub(crate) stats: bool,
}

fn command() -> Command {
    command!()
        .long_about(
            "Simulating 3-state nearest-neighbor cellular automata\n\
             \n\
             The next state of each cell depends on its left neighbor and itself. \
             The row is circular, so the left neighbor of the first cell is the last cell.\n\
             \n\
             The rule number is read as a 9-digit ternary number, least significant digit \
             first, giving the next state for the neighborhoods \
             00, 01, 02, 10, 11, 12, 20, 21, 22 in this order.\n\
             \n\
             The result is displayed in a plaintext format, one generation per line.\n\
             * Cells with state 0 are represented by `.`;\n\
             * Cells with state 1 are represented by `A`;\n\
             * Cells with state 2 are represented by `B`.\n",
        )
        .arg(
            Arg::new("RULE")
                .help("Rule number, between 0 and 19682 [default: 7518]")
                .index(1)
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("LENGTH")
                .help("Length of the random initial condition [default: 100]")
                .short('l')
                .long("length")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("TIME")
                .help("Number of time steps [default: 100]")
                .short('t')
                .long("time")
                .allow_negative_numbers(true)
                .value_parser(value_parser!(i64)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random initial condition")
                .short('s')
                .long("seed")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("INIT")
                .help("Initial condition, e.g. `.AB.B` or `01202`")
                .long_help(
                    "Initial condition\n\
                     Each character is a cell: `.` or `0`, `A` or `1`, `B` or `2`.\n\
                     If given, the length and the seed are ignored.\n",
                )
                .short('i')
                .long("init")
                .value_parser(|s: &str| s.parse::<Row>().map_err(|e| e.to_string())),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a JSON, YAML or TOML file")
                .long_help(
                    "Reads the configuration from a JSON, YAML or TOML file\n\
                     The format is decided by the file extension. \
                     Options given on the command line override the file.\n",
                )
                .short('c')
                .long("config"),
        )
        .arg(
            Arg::new("FORMAT")
                .help("Output format")
                .short('f')
                .long("format")
                .value_parser(["plaintext", "json", "p", "j"])
                .default_value("plaintext"),
        )
        .arg(
            Arg::new("STATS")
                .help("Prints the number of cells in each state in every generation")
                .long("stats")
                .action(ArgAction::SetTrue),
        )
}

/// Reads a configuration file, choosing the format by the extension.
fn read_config(path: &str) -> Result<Config, Error> {
    let text = fs::read_to_string(path)
        .map_err(|e| Error::raw(ErrorKind::Io, format!("cannot read '{}': {}\n", path, e)))?;
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let config = match extension.as_deref() {
        Some("json") => serde_json::from_str(&text).map_err(|e| e.to_string()),
        Some("yaml") | Some("yml") => serde_yaml::from_str(&text).map_err(|e| e.to_string()),
        Some("toml") => toml::from_str(&text).map_err(|e| e.to_string()),
        _ => Err(String::from("unknown format, expected .json, .yaml or .toml")),
    };
    config.map_err(|e| {
        Error::raw(
            ErrorKind::InvalidValue,
            format!("invalid configuration file '{}': {}\n", path, e),
        )
    })
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses arguments from an iterator.
    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let mut command = command();
        let matches = command.try_get_matches_from_mut(args)?;
        Self::from_matches(&matches).map_err(|e| e.format(&mut command))
    }

    fn from_matches(matches: &ArgMatches) -> Result<Self, Error> {
        let mut config = match matches.get_one::<String>("CONFIG") {
            Some(path) => read_config(path)?,
            None => Config::default(),
        };

        if let Some(&rule_number) = matches.get_one::<i64>("RULE") {
            config.rule_number = rule_number;
        }
        if let Some(&length) = matches.get_one::<i64>("LENGTH") {
            config.length = length;
        }
        if let Some(&time) = matches.get_one::<i64>("TIME") {
            config.time = time;
        }
        if let Some(&seed) = matches.get_one::<u64>("SEED") {
            config.seed = Some(seed);
        }
        if let Some(initial) = matches.get_one::<Row>("INIT") {
            config.initial = Some(initial.clone());
        }

        let format = match matches.get_one::<String>("FORMAT").map(String::as_str) {
            Some("json") | Some("j") => Format::Json,
            _ => Format::Plaintext,
        };
        let stats = matches.get_flag("STATS");

        debug!("Configuration: {:?}", config);
        let world = config
            .world()
            .map_err(|e| Error::raw(ErrorKind::InvalidValue, format!("{}\n", e)))?;

        Ok(Args {
            config,
            world,
            format,
            stats,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Result<Args, Error> {
        Args::parse_from(std::iter::once("terca").chain(args.iter().copied()))
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.config, Config::default());
        assert_eq!(args.format, Format::Plaintext);
        assert!(!args.stats);
        assert_eq!(args.world.len(), 100);
    }

    #[test]
    fn options() {
        let args = parse(&["42", "-l", "7", "-t", "3", "-s", "1", "-f", "j", "--stats"]).unwrap();
        assert_eq!(args.config, Config::new(42, 7, 3).set_seed(1));
        assert_eq!(args.format, Format::Json);
        assert!(args.stats);
        assert_eq!(args.world.len(), 7);
    }

    #[test]
    fn initial_condition() {
        let args = parse(&["--init", ".AB02"]).unwrap();
        assert_eq!(args.world.current().to_string(), ".AB.B");
        assert!(parse(&["--init", ".AC"]).is_err());
    }

    #[test]
    fn invalid_values() {
        let kind = |args: &[&str]| parse(args).map(|_| ()).unwrap_err().kind();
        assert_eq!(kind(&["19683"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["-1"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["-l", "-5"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["-t", "-5"]), ErrorKind::InvalidValue);
        assert_eq!(kind(&["-t", "five"]), ErrorKind::ValueValidation);
    }

    #[test]
    fn config_file() {
        let dir = std::env::temp_dir();
        let path = dir.join(format!("terca-test-{}.toml", std::process::id()));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "rule_number = 1\ntime = 2\ninitial = [1, 2, 0, 0, 0]").unwrap();
        drop(file);

        let path_str = path.to_str().unwrap();
        let args = parse(&["-c", path_str, "-t", "3"]).unwrap();
        assert_eq!(args.config.rule_number, 1);
        assert_eq!(args.config.time, 3);
        assert_eq!(args.world.current().to_string(), "AB...");

        fs::remove_file(&path).unwrap();
        assert_eq!(
            parse(&["-c", path_str]).map(|_| ()).unwrap_err().kind(),
            ErrorKind::Io
        );
    }
}
