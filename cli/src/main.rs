mod args;
mod global_settings;
mod inputs;
mod ranges_view;

use crate::args::build_cli;
use crate::global_settings::GlobalSettings;
use crate::inputs::{range_arg, read_ranges};
use crate::ranges_view::{
    index_view, ordering_view, overlap_view, remainder_view, reservation_view,
};
use anyhow::{Context, Result, bail};
use availability_lib::bookings::{Availability, Booking};
use availability_lib::{
    compare_range_durations, find_overlapping_range, ranges_overlap,
    subtract_range_with,
};
use clap::ArgMatches;
use log::debug;
use std::path::Path;

fn main() -> Result<()> {
    let args = build_cli().get_matches();
    let global = GlobalSettings::new(&args);

    env_logger::Builder::new()
        .filter_level(global.log_level())
        .parse_default_env()
        .init();

    println!("{}", run(&args, &global)?);
    Ok(())
}

/// Execute the subcommand, and return what should be printed
fn run(args: &ArgMatches, global: &GlobalSettings) -> Result<String> {
    Ok(match args.subcommand() {
        Some(("overlap", sub)) => {
            let a = range_arg(sub, "A_START", "A_END")?;
            let b = range_arg(sub, "B_START", "B_END")?;
            overlap_view(ranges_overlap(&a, &b), global.json)?
        }
        Some(("find", sub)) => {
            let ranges = read_ranges(path_arg(sub, "ranges")?)?;
            let candidate = range_arg(sub, "START", "END")?;
            debug!("searching {} ranges", ranges.len());
            index_view(find_overlapping_range(&ranges, &candidate), global.json)?
        }
        Some(("compare", sub)) => {
            let a = range_arg(sub, "A_START", "A_END")?;
            let b = range_arg(sub, "B_START", "B_END")?;
            ordering_view(compare_range_durations(&a, &b), global.json)
        }
        Some(("subtract", sub)) => {
            let split = range_arg(sub, "SPLIT_START", "SPLIT_END")?;
            let withdraw = range_arg(sub, "WITHDRAW_START", "WITHDRAW_END")?;
            let remainder = subtract_range_with(&split, &withdraw, &global.settings);
            remainder_view(&remainder, global.json)?
        }
        Some(("book", sub)) => {
            let availability = read_ranges(path_arg(sub, "availability")?)?;
            let reservations = match sub.get_one::<String>("reservations") {
                None => vec![],
                Some(p) => read_ranges(Path::new(p))?,
            };
            let request = range_arg(sub, "START", "END")?;
            let mut booking = Booking::new(
                Availability::new(availability),
                reservations,
                global.settings,
            );
            let reservation = booking
                .reserve(request)
                .with_context(|| format!("cannot reserve {request}"))?;
            reservation_view(
                &reservation,
                booking.availability().ranges(),
                global.json,
            )?
        }
        Some(("completions", sub)) => {
            let Some(shell) = sub
                .get_one::<clap_complete_command::Shell>("shell")
                .cloned()
            else {
                bail!("missing SHELL");
            };
            let mut buf = Vec::new();
            shell.generate(&mut build_cli(), &mut buf);
            String::from_utf8(buf)?
        }
        Some((cmd, _)) => bail!("unknown command {cmd}"),
        None => bail!("missing command"),
    })
}

fn path_arg<'a>(args: &'a ArgMatches, name: &str) -> Result<&'a Path> {
    args.get_one::<String>(name)
        .map(Path::new)
        .with_context(|| format!("missing --{name}"))
}
