mod args;
mod types;

use std::{process::ExitCode, time::Instant};

use ansi_term::Colour;
use args::{DevServerArgs, InputArgs, OutputArgs};
use clap::Parser;

use pagepack::{BuildError, BundlerConfig, ConfigGenerator, DevServerOptions, GeneratorOptions};

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Commands {
  #[clap(flatten)]
  input: InputArgs,

  #[clap(flatten)]
  output: OutputArgs,

  #[clap(flatten)]
  dev_server: DevServerArgs,
}

/// Diagnostics go to stderr so the JSON payload on stdout stays pipeable.
fn print_summary(config: &BundlerConfig) {
  let mut left = 0;

  let mut rows = Vec::with_capacity(config.entry.len() + config.documents.len());

  for (name, files) in config.entry.iter() {
    let detail = match files.len() {
      1 => "1 file".to_string(),
      count => format!("{count} files"),
    };
    rows.push((name.to_string(), "entry", detail));
  }

  for document in &config.documents {
    let chunks: Vec<&str> = document.chunks.iter().map(|chunk| chunk.as_str()).collect();
    rows.push((document.filename.clone(), "page", chunks.join(" + ")));
  }

  for (name, _, _) in &rows {
    if name.len() > left {
      left = name.len();
    }
  }

  let dim = Colour::White.dimmed();
  let color = Colour::Cyan;

  for (name, kind, detail) in rows {
    let name_len = name.len();
    eprintln!(
      "{}{:pad$} {}{}{}",
      color.paint(name),
      "",
      dim.paint(format!("{kind:5}")),
      dim.paint(" │ "),
      detail,
      pad = left - name_len
    );
  }
}

fn report_errors(errors: &BuildError) -> ExitCode {
  for error in &**errors {
    eprintln!("{} {}", Colour::Red.paint("Error:"), error);
  }
  ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
  if std::env::var("RUST_LOG").ok().is_none() {
    std::env::set_var("RUST_LOG", "info");
  }
  pretty_env_logger::init();

  let args = Commands::parse();

  let mut generator = ConfigGenerator::new(GeneratorOptions {
    mode: args.input.mode.map(Into::into),
    cwd: args.input.cwd,
    src: args.input.src,
    dist: args.output.dist,
    public_path: args.output.public_path,
    minify: args.output.minify,
    https: Some(args.dev_server.https),
    dev_server: Some(DevServerOptions {
      port: args.dev_server.port,
      host: args.dev_server.host,
      ..Default::default()
    }),
    ..GeneratorOptions::default()
  });

  let start = Instant::now();
  let output = match generator.generate().await {
    Ok(output) => output,
    Err(errors) => return report_errors(&errors),
  };

  if let Err(errors) = output.validate() {
    return report_errors(&errors);
  }

  for warning in &output.warnings {
    eprintln!("{} {}", Colour::Yellow.paint("Warning:"), warning);
  }

  print_summary(&output.config);

  let json = match serde_json::to_string_pretty(&output.config) {
    Ok(json) => json,
    Err(error) => {
      eprintln!("{} {}", Colour::Red.paint("Error:"), error);
      return ExitCode::FAILURE;
    }
  };

  match &args.output.out {
    Some(path) => {
      if let Err(error) = std::fs::write(path, json) {
        eprintln!(
          "{} Failed to write {}: {}",
          Colour::Red.paint("Error:"),
          path.display(),
          error
        );
        return ExitCode::FAILURE;
      }
    }
    None => println!("{json}"),
  }

  let elapsed = format!("{:.2} ms", start.elapsed().as_secs_f64() * 1000.0);
  eprintln!("\n{} Finished in {}", Colour::Green.paint("✔"), Colour::White.bold().paint(elapsed));

  ExitCode::SUCCESS
}
