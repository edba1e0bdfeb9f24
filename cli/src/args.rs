use crate::global_settings::GlobalSettings;
use clap::{Arg, Command, arg};

pub(crate) fn build_cli() -> Command {
    Command::new("avail")
        .version("0.1")
        .about("Manage availability windows of rentable items")
        .subcommand_required(true)
        .flatten_help(true) // show help for all subcommands
        .arg_required_else_help(true) // show full help if nothing given
        .args(GlobalSettings::cli())
        .subcommand(
            Command::new("overlap")
                .about("Whether range B overlaps range A")
                .arg(arg!(<A_START> "First day of range A"))
                .arg(arg!(<A_END> "Last day of range A"))
                .arg(arg!(<B_START> "First day of range B"))
                .arg(arg!(<B_END> "Last day of range B")),
        )
        .subcommand(
            Command::new("find")
                .about("Position of the first range overlapping the candidate")
                .arg(
                    arg!(-r --ranges <FILE> "JSON list of ranges to search")
                        .required(true),
                )
                .arg(arg!(<START> "First day of the candidate"))
                .arg(arg!(<END> "Last day of the candidate")),
        )
        .subcommand(
            Command::new("compare")
                .about("Compare the durations of ranges A and B")
                .arg(arg!(<A_START> "First day of range A"))
                .arg(arg!(<A_END> "Last day of range A"))
                .arg(arg!(<B_START> "First day of range B"))
                .arg(arg!(<B_END> "Last day of range B")),
        )
        .subcommand(
            Command::new("subtract")
                .about("Remove a reservation from an availability range")
                .arg(arg!(<SPLIT_START> "First day of the availability"))
                .arg(arg!(<SPLIT_END> "Last day of the availability"))
                .arg(arg!(<WITHDRAW_START> "First day of the reservation"))
                .arg(arg!(<WITHDRAW_END> "Last day of the reservation")),
        )
        .subcommand(
            Command::new("book")
                .about("Reserve a range, and show the updated availability")
                .arg(
                    arg!(-a --availability <FILE> "JSON list of availability windows")
                        .required(true),
                )
                .arg(
                    Arg::new("reservations")
                        .short('r')
                        .long("reservations")
                        .value_name("FILE")
                        .help("JSON list of existing reservations"),
                )
                .arg(arg!(<START> "First day of the reservation"))
                .arg(arg!(<END> "Last day of the reservation")),
        )
        .subcommand(
            // Use    eval "$(avail completions zsh)"
            Command::new("completions")
                .about("Generate shell completions")
                .arg(
                    Arg::new("shell")
                        .value_name("SHELL")
                        .help("The shell to generate the completions for")
                        .required(true)
                        .value_parser(clap::builder::EnumValueParser::<
                            clap_complete_command::Shell,
                        >::new()),
                ),
        )
}
