use availability_lib::{FlushOverhangPolicy, Settings, SupersetPolicy};
use clap::{Arg, ArgAction, ArgMatches, arg};
use log::LevelFilter;

pub struct GlobalSettings {
    pub settings: Settings,

    // Print results as JSON instead of human-readable text
    pub json: bool,

    // Number of --verbose switches
    pub verbosity: u8,
}

impl GlobalSettings {
    /// Return the command line switches to configure the global settings
    pub fn cli() -> impl IntoIterator<Item = Arg> {
        [
            Arg::new("superset")
                .long("superset")
                .value_name("POLICY")
                .help("When a reservation covers more than an availability range, keep the range or consume it")
                .value_parser(["keep", "consume"])
                .default_value("keep")
                .global(true),
            Arg::new("flush-overhang")
                .long("flush-overhang")
                .value_name("POLICY")
                .help("When a reservation is flush with one end of an availability range and overhangs the other, return the reversed range as computed or consume the range")
                .value_parser(["literal", "consume"])
                .default_value("literal")
                .global(true),
            arg!(--json "Output results as JSON").global(true),
            arg!(-v --verbose "Show more logs (repeat for more)")
                .action(ArgAction::Count)
                .global(true),
        ]
    }

    /// Create the settings from the command line arguments.
    pub fn new(args: &ArgMatches) -> Self {
        let superset = match args.get_one::<String>("superset").map(String::as_str) {
            Some("consume") => SupersetPolicy::Consume,
            Some(_) | None => SupersetPolicy::KeepSplit,
        };
        let flush_overhang =
            match args.get_one::<String>("flush-overhang").map(String::as_str) {
                Some("consume") => FlushOverhangPolicy::Consume,
                Some(_) | None => FlushOverhangPolicy::Literal,
            };
        GlobalSettings {
            settings: Settings {
                superset,
                flush_overhang,
            },
            json: args.get_flag("json"),
            verbosity: args.get_count("verbose"),
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        match self.verbosity {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }
}
