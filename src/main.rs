use std::process;

use chrono::Utc;
use clap::Parser;

mod error;
mod filter;
mod ics;
mod schedule;
mod utils;

#[derive(Parser)]
#[clap(version, about, long_about = None)]
struct Args {
    /// JSON file with the schedule rows grabbed from the portal
    #[clap(value_parser)]
    schedule: String,

    /// Export to iCalendar format (.ics)
    #[clap(
        short,
        long,
        value_name = "FILE NAME",
        num_args = 0..=1,
        default_missing_value = "schedule.ics"
    )]
    export: Option<String>,

    /// Keep every course without asking
    #[clap(short, long)]
    all: bool,
}

fn main() {
    let args = Args::parse();

    println!("Reading the schedule...");
    let mut meetings = match schedule::load(&args.schedule) {
        Ok(meetings) => meetings,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    if !args.all {
        meetings = filter::meetings(meetings);
    }

    if let Some(mut filename) = args.export {
        // Export the calendar
        let exported = ics::build(&meetings, Utc::now())
            .and_then(|calendar| ics::export(&calendar, &mut filename));

        match exported {
            Ok(()) => println!(".ICS file built and exported => {filename}"),
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        // Show the schedule
        println!("Displaying...");
        schedule::display(&meetings);
    }
}
