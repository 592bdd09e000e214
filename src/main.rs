use clap::Parser;
use log::{error, info};
use ricoprof::{
    profile::case::Case,
    setup::{setup, Settings},
};
use std::{path::PathBuf, process};

/// Generate the initial profiles of the RICO case
#[derive(Parser)]
#[command(name = "ricoprof")]
#[command(version, about, long_about = None)]
struct Cli {
    /// ini file providing `ktot` and `zsize`
    #[arg(short, long, default_value = "rico.ini")]
    ini: PathBuf,

    /// profile file to write
    #[arg(short, long, default_value = "rico.prof")]
    output: PathBuf,

    /// moisture setup: gcss, ss08 or test
    #[arg(short, long, default_value = "gcss")]
    case: Case,
}

fn main() {
    pretty_env_logger::init_timed();
    let cli = Cli::parse();
    info!("initialising ricoprof");

    let settings = Settings {
        ini: cli.ini,
        prof: cli.output,
        case: cli.case,
    };
    println!("Setup = {}", settings.case);

    match setup(&settings) {
        Ok(surface) => {
            println!("{}", surface);
            info!("profiles completed")
        }
        Err(err) => {
            error!("{}", err);
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }
}
