use log::warn;
use objsum::{reader::buffering::Buffering, Options, Report, E};
use std::{env, process};

fn run() -> Result<Report, E> {
    let mut args = env::args_os().skip(1);
    let path = args.next().ok_or(E::MissingArgument)?;
    let ignored = args.count();
    if ignored > 0 {
        warn!("{ignored} extra argument(s) ignored");
    }
    let calculator = Options::new().calculate::<Buffering, _>(&path)?;
    Report::new(&calculator)
}

fn main() {
    env_logger::init();
    match run() {
        Ok(report) => print!("{report}"),
        Err(err) => {
            println!("Error: {err}");
            process::exit(1);
        }
    }
}
