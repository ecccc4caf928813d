//! Wirebot headless host entry point.
//!
//! Stands in for the game process: opens a channel, spawns the console,
//! and ticks a simulated character that logs what it does.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use wirebot_runtime::HostConfig;

fn main() -> ExitCode {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<(HostConfig, bool, bool), Box<dyn std::error::Error>> {
    let mut config = HostConfig::default();
    let mut show_help = false;
    let mut show_version = false;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => show_help = true,
            "-V" | "--version" => show_version = true,
            "--max-ticks" => {
                i += 1;
                if i >= args.len() {
                    return Err("--max-ticks requires a value".into());
                }
                config.max_ticks = Some(
                    args[i]
                        .parse()
                        .map_err(|_| format!("invalid --max-ticks value: {}", args[i]))?,
                );
            }
            "--tick-ms" => {
                i += 1;
                if i >= args.len() {
                    return Err("--tick-ms requires a value".into());
                }
                config.tick_ms = args[i]
                    .parse()
                    .map_err(|_| format!("invalid --tick-ms value: {}", args[i]))?;
            }
            "--console" => {
                i += 1;
                if i >= args.len() {
                    return Err("--console requires a path".into());
                }
                config.console = Some(PathBuf::from(&args[i]));
            }
            arg => {
                return Err(format!("unknown option: {arg}").into());
            }
        }
        i += 1;
    }

    Ok((config, show_help, show_version))
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let (config, show_help, show_version) = parse_args(args)?;

    if show_help {
        print_help();
        return Ok(());
    }

    if show_version {
        println!("wirebot-host {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    wirebot_runtime::host::run(&config)?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mWirebot host\x1b[0m - headless game-process stand-in

Opens a command channel, spawns the console, and ticks a simulated
character until the console session ends.

\x1b[1mUSAGE:\x1b[0m
    wirebot-host [OPTIONS]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --max-ticks N      Stop after N ticks (for testing)
    --tick-ms N        Milliseconds per tick (default 50)
    --console PATH     Console executable to spawn"
    );
}
