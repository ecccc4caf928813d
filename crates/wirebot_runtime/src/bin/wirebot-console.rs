//! Wirebot console entry point.
//!
//! Spawned by the game process with the channel's session handle as the
//! sole positional argument.

use std::env;
use std::process::ExitCode;

use wirebot_runtime::ConsoleRepl;
use wirebot_transport::ProducerEndpoint;

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    handle: Option<String>,
    no_banner: bool,
    show_help: bool,
    show_version: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    for arg in args.into_iter().skip(1) {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--no-banner" => config.no_banner = true,
            other if other.starts_with('-') => {
                return Err(format!("unknown option: {other}").into());
            }
            handle => {
                if config.handle.is_some() {
                    return Err("exactly one session handle is expected".into());
                }
                config.handle = Some(handle.to_string());
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let config = parse_args(args)?;

    if config.show_help {
        print_help();
        return Ok(());
    }

    if config.show_version {
        println!("wirebot-console {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let Some(handle) = config.handle else {
        return Err("missing the session handle (usually provided by the game process); \
                    see --help"
            .into());
    };

    let producer = ProducerEndpoint::connect(&handle)?;
    let mut repl = ConsoleRepl::new(producer)?;
    if config.no_banner {
        repl = repl.without_banner();
    }

    // Once the session is up the console always exits cleanly; session
    // problems are reported to the operator inside the loop.
    if let Err(e) = repl.run() {
        eprintln!("\x1b[31mError: {e}\x1b[0m");
    }
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mWirebot console\x1b[0m - remote command console for a Wirebot character

\x1b[1mUSAGE:\x1b[0m
    wirebot-console [OPTIONS] <SESSION-HANDLE>

\x1b[1mARGUMENTS:\x1b[0m
    <SESSION-HANDLE>    Channel address supplied by the game process

\x1b[1mOPTIONS:\x1b[0m
    -h, --help       Print help information
    -V, --version    Print version information
    --no-banner      Skip the welcome banner

\x1b[1mCOMMANDS:\x1b[0m
    move <up|down|left|right> [n]   Queue a move of n units (default 1)
    move <n>                        Queue a move along the current heading
    turn <left|right> <degrees>     Queue a rotation
    stop                            Queue a halt
    beep                            Queue a beep
    signal <on|off>                 Queue the signal
    marker <down|up>                Queue the trail marker
    end                             Run the queued batch
    exit                            Leave the console"
    );
}
