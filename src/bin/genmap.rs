//! Prints a random map in the format `mapcol` reads.
//!
//! `genmap <countries> [uncolored%] [density%] [seed] [colors]`

use std::io::{self, Write};
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use clap::{Arg, Command, value_parser};
use indicatif::{ProgressBar, ProgressStyle};
use log::info;

use mapcol::generate::{generate_map, GeneratorConfig};
use mapcol::Palette;

fn make_parser() -> Command {
  Command::new("genmap")
    .about("Generates a random map that can be colored with a given number of colors")
    .version(env!("CARGO_PKG_VERSION"))
    .arg(
      Arg::new("countries")
        .required(true)
        .value_parser(value_parser!(usize))
        .help("Number of countries"),
    )
    .arg(
      Arg::new("uncolored")
        .value_parser(value_parser!(u32))
        .default_value("100")
        .help("Percentage of countries left uncolored"),
    )
    .arg(
      Arg::new("density")
        .value_parser(value_parser!(u32))
        .default_value("30")
        .help("Chance (percent) that two differently colored countries border"),
    )
    .arg(
      Arg::new("seed")
        .value_parser(value_parser!(u64))
        .help("Random seed (default: current time)"),
    )
    .arg(
      Arg::new("colors")
        .value_parser(value_parser!(usize))
        .default_value("4")
        .help("Number of colors the map can be colored with"),
    )
    .arg(
      Arg::new("quiet")
        .short('q')
        .long("quiet")
        .action(clap::ArgAction::SetTrue)
        .help("Do not show progress"),
    )
}

fn config_from_args() -> (GeneratorConfig, bool) {
  let matches = make_parser().get_matches();
  let seed = matches.get_one::<u64>("seed").copied().unwrap_or_else(|| {
    SystemTime::now().duration_since(UNIX_EPOCH).map_or(0, |d| d.as_secs())
  });

  let config = GeneratorConfig {
    countries: matches.get_one::<usize>("countries").copied().unwrap_or_default(),
    uncolored_percent: matches.get_one::<u32>("uncolored").copied().unwrap_or(100),
    density: matches.get_one::<u32>("density").copied().unwrap_or(30),
    seed,
    colors: matches.get_one::<usize>("colors").copied().unwrap_or(4),
  };
  (config, matches.get_flag("quiet"))
}

fn run(config: &GeneratorConfig, quiet: bool) -> Result<()> {
  let palette = Palette::default();
  let pb = if quiet { ProgressBar::hidden() } else { ProgressBar::new(0) };
  if let Ok(style) = ProgressStyle::with_template("[gen ] [{elapsed_precise}] {wide_bar:.cyan/blue} {pos}/{len}") {
    pb.set_style(style);
  }

  let map = generate_map(config, &palette, &pb)?;
  pb.finish_and_clear();
  info!("seed {}", config.seed);

  let stdout = io::stdout();
  let mut out = stdout.lock();
  write!(out, "{}", map.display(&palette))?;
  Ok(())
}

fn main() -> ExitCode {
  let env = env_logger::Env::new()
    .filter("MAPCOL_LOG")
    .write_style("MAPCOL_LOG_STYLE");
  env_logger::init_from_env(env);

  let (config, quiet) = config_from_args();
  match run(&config, quiet) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("genmap: {err:#}");
      ExitCode::FAILURE
    }
  }
}
