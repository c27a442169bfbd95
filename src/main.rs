use clap::error::ErrorKind;
use clap::Parser;
use queue_addresses::utils::logger;
use queue_addresses::{AddressBuilder, CliConfig, QueueAddrError, Result};

/// Exit code for rejected flags, shared with configuration errors.
const USAGE_EXIT_CODE: i32 = 1;

fn main() {
    let cli = match CliConfig::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // clap already writes help/version to stdout and errors to stderr
            let _ = e.print();
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => std::process::exit(0),
                _ => std::process::exit(USAGE_EXIT_CODE),
            }
        }
    };

    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }
    tracing::debug!("CLI config: {:?}", cli);

    if let Err(e) = run(&cli) {
        fail(&e);
    }
}

fn run(cli: &CliConfig) -> Result<()> {
    let settings = cli.settings()?;

    let builder = AddressBuilder::from_source(&settings)?;
    let addresses = builder.build();
    tracing::info!(
        "Resolved {} queue addresses on port {}",
        addresses.len(),
        builder.port()
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    settings.printer().write(&mut out, &addresses)
}

fn fail(e: &QueueAddrError) -> ! {
    tracing::debug!("{:?} (exit code {})", e, e.exit_code());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(e.exit_code());
}
