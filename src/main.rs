use anyhow::Context;
use clap::Parser;
use cstar_compiler::config::Config;
use cstar_compiler::paths::{executable_path, select_input};
use cstar_compiler::session::{PassOutcome, Session};
use cstar_compiler::toolchain::{run_executable, Compiler, Gxx};
use cstar_compiler::LANGUAGE_VERSION;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "cstarc", about = "CStar to C++ compiler", disable_version_flag = true)]
struct Cli {
    /// Source file. The first argument ending in `.cstar` wins; default `testfile.cstar`
    files: Vec<String>,

    /// Also compile the generated C++ and run the executable
    #[arg(short = 'c')]
    compile: bool,

    /// Print version information and exit
    #[arg(short = 'v', long = "version")]
    version: bool,

    /// Silence all compiler output
    #[arg(short = 's')]
    silent: bool,

    /// Executable extension, `none` for no extension (default `out`)
    #[arg(long = "out-ext", value_name = "EXT")]
    out_ext: Option<String>,

    /// Turn `import("x", "system"|"local")` lines into `#include`s
    #[arg(long)]
    imports: bool,

    /// JSON config file
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .init();

    if cli.version {
        if !cli.silent {
            print_banner();
            println!(
                "Version: {}; Language version: {}",
                env!("CARGO_PKG_VERSION"),
                LANGUAGE_VERSION
            );
        }
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if !cli.silent {
                eprintln!("error: {:#}", e);
            }
            ExitCode::FAILURE
        }
    }
}

fn print_banner() {
    println!("CStar Compiler");
    println!("Licensed under the MIT License");
}

fn load_config(cli: &Cli) -> cstar_compiler::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    config.apply_env(env::var("CXX").ok());

    if cli.imports {
        config.hoist_imports = true;
    }
    if let Some(ext) = &cli.out_ext {
        config.executable_extension = match ext.as_str() {
            "none" | "" => None,
            other => Some(other.trim_start_matches('.').to_string()),
        };
    }
    Ok(config)
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    if !cli.silent {
        print_banner();
    }

    let config = load_config(cli)?;
    let input = select_input(&cli.files);
    log::debug!("input file: {}", input.display());

    let mut session = Session::open(&input, &config)?;
    let outcome = session.trigger(true)?;
    let output = session.finish()?;

    if let Some(outcome) = &outcome {
        if !cli.silent {
            report_keywords(outcome);
        }
    }

    if !cli.compile {
        return Ok(());
    }

    let exe = executable_path(&input, config.executable_extension.as_deref());
    let compiler = Gxx::from_settings(&config.compiler)?;

    if !cli.silent {
        println!("Compiling...");
    }
    compiler
        .compile(&output, &exe)
        .context("Compilation failed")?;

    if cli.silent {
        return Ok(());
    }
    println!("Compilation successful! Output: {}", exe.display());

    match run_executable(&exe) {
        Ok(status) if !status.success() => {
            log::warn!("{} exited with {}", exe.display(), status);
        }
        Ok(_) => {}
        Err(e) => log::warn!("{}", e),
    }
    Ok(())
}

fn report_keywords(outcome: &PassOutcome) {
    for hit in &outcome.result.keyword_hits {
        println!("Keyword found: {} in line: {}", hit.keyword, hit.line);
    }
}
