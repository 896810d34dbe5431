use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, warn};

use mapcol::export::SerializableMap;
use mapcol::options::{Options, OptionsError, OutputFormat};
use mapcol::{
  check_coloring, check_map, color_map_with, degree_order, is_valid_coloring, read_map,
  ColoringViolation, ConfigError, MapError,
};

fn open_input(path: Option<&Path>) -> Result<Box<dyn BufRead>, ConfigError> {
  match path {
    Some(path) => {
      let file = File::open(path)
        .map_err(|source| ConfigError::Input { path: path.to_path_buf(), source })?;
      Ok(Box::new(BufReader::new(file)))
    }
    None => Ok(Box::new(io::stdin().lock())),
  }
}

fn search_progress(quiet: bool) -> ProgressBar {
  if quiet {
    return ProgressBar::hidden();
  }
  let pb = ProgressBar::new_spinner();
  if let Ok(style) = ProgressStyle::with_template("[color] {spinner} {pos} assignments {elapsed_precise}") {
    pb.set_style(style);
  }
  pb
}

fn run(options: &Options) -> Result<()> {
  let reader = open_input(options.input.as_deref()).map_err(MapError::from)?;
  let mut map = read_map(reader, &options.palette).map_err(MapError::from)?;
  check_map(&map).map_err(MapError::from)?;

  let stdout = io::stdout();
  let mut out = stdout.lock();

  if options.check_only {
    let verdict = check_coloring(&map, &options.palette, options.n_colors);
    match &verdict {
      Err(ColoringViolation::OverBudget { n_colors, .. }) => {
        writeln!(out, "More than {} colors used", n_colors)?;
      }
      Err(violation) => debug!("{violation}"),
      Ok(()) => {}
    }
    writeln!(out, "Map is {}colored correctly", if verdict.is_ok() { "" } else { "not " })?;
    return Ok(());
  }

  // Heuristic: high degree countries are colored first. The map itself keeps
  // its input order, which is the order it is printed in.
  let order = degree_order(&map);
  let pb = search_progress(options.quiet);
  let outcome = color_map_with(&mut map, options.n_colors, &order, &pb);
  pb.finish_and_clear();

  if !outcome.colored {
    writeln!(out, "The map cannot be colored with {} colors", options.n_colors)?;
    return Ok(());
  }
  if !is_valid_coloring(&map, &options.palette, options.n_colors) {
    warn!("pre-colored countries break the coloring rules");
    writeln!(out, "The map cannot be colored with {} colors", options.n_colors)?;
    return Ok(());
  }

  match options.format {
    OutputFormat::Text => write!(out, "{}", map.display(&options.palette))?,
    OutputFormat::Json => {
      let json = SerializableMap::new(&map, &options.palette)
        .to_json()
        .context("cannot serialize colored map")?;
      writeln!(out, "{}", json)?;
    }
  }
  Ok(())
}

fn main() -> ExitCode {
  let env = env_logger::Env::new()
    .filter("MAPCOL_LOG")
    .write_style("MAPCOL_LOG_STYLE");
  env_logger::init_from_env(env);

  let options = match Options::parse_from_args(std::env::args_os()) {
    Ok(options) => options,
    Err(OptionsError::Args(err)) => err.exit(),
    Err(OptionsError::Config(err)) => {
      eprintln!("mapcol: {err}");
      return ExitCode::FAILURE;
    }
  };
  debug!("options: {:?}", options);

  match run(&options) {
    Ok(()) => ExitCode::SUCCESS,
    Err(err) => {
      eprintln!("mapcol: {err:#}");
      ExitCode::FAILURE
    }
  }
}
