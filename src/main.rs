use becrypt::cli::{program_name, usage, wants_help, Invocation};
use becrypt::commands::{self, Outcome};
use becrypt::config::Config;
use becrypt::error::EXIT_CONFIG;
use becrypt::password::StdPasswordSource;
use std::io::{self, Write};
use std::process;

fn main() {
    env_logger::init_from_env(env_logger::Env::new().filter_or("BECRYPT_LOG", "warn"));

    let mut args = std::env::args();
    let program = program_name(args.next().as_deref());

    let args: Vec<String> = args.collect();

    let config = match Config::from_env() {
        Ok(config) => config,
        // Help must still work with a broken environment.
        Err(e) if wants_help(&args) => {
            log::debug!("Ignoring invalid configuration for help: {:#}", e);
            Config::default()
        }
        Err(e) => {
            eprintln!("{}: invalid configuration: {:#}", program, e);
            process::exit(EXIT_CONFIG);
        }
    };

    let result = Invocation::parse(args, config.default_cost).and_then(|invocation| {
        let mut source = StdPasswordSource::new(&config);
        let mut out = io::stdout().lock();
        let outcome = commands::run(&invocation, &mut source, &mut out)?;
        out.flush()?;
        Ok(outcome)
    });

    match result {
        Ok(Outcome::Help) => {
            eprintln!("{}", usage(&program, config.default_cost));
        }
        Ok(outcome) => process::exit(outcome.exit_code()),
        Err(e) => {
            log::debug!("Aborting with exit status {}: {:?}", e.exit_code(), e);
            if e.shows_usage() {
                eprintln!("{}", usage(&program, config.default_cost));
                eprintln!("Abort: {}", e);
            } else {
                eprintln!("{}: {}", program, e);
            }
            process::exit(e.exit_code());
        }
    }
}
