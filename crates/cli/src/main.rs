//! # emaildefense
//!
//! Reports the email-security posture of a domain: MX, SPF, DMARC, the DKIM
//! `_domainkey` namespace and DANE TLSA for every MX host.

mod bootstrap;
mod di;
mod output;

use anyhow::anyhow;
use clap::{Args, Parser, Subcommand};
use emaildefense_domain::config::TransportProtocol;
use emaildefense_domain::validators::validate_domain_name;
use emaildefense_domain::CliOverrides;
use tracing::info;

#[derive(Parser)]
#[command(name = "emaildefense")]
#[command(version)]
#[command(about = "Email defense reporting tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a report about a domain
    Check(CheckArgs),
    /// Print the version
    Version,
}

#[derive(Args)]
struct CheckArgs {
    /// Domain to check
    #[arg(long, default_value = "example.org")]
    domain: String,

    /// Resolver to query (IP, ip:port or host name)
    #[arg(long)]
    nameserver: Option<String>,

    /// Include every raw record in the console report
    #[arg(long)]
    full: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Query the resolver over TCP instead of UDP
    #[arg(long)]
    tcp: bool,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Budget for the whole check in milliseconds
    #[arg(long)]
    deadline_ms: Option<u64>,

    /// Port used in the TLSA owner name
    #[arg(long)]
    tlsa_port: Option<u16>,

    /// Run the per-host TLSA lookups concurrently
    #[arg(long)]
    parallel_tlsa: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

impl CheckArgs {
    fn overrides(&self) -> CliOverrides {
        CliOverrides {
            nameserver: self.nameserver.clone(),
            protocol: self.tcp.then_some(TransportProtocol::Tcp),
            query_timeout_ms: self.timeout_ms,
            deadline_ms: self.deadline_ms,
            tlsa_port: self.tlsa_port,
            parallel_tlsa: self.parallel_tlsa.then_some(true),
            log_level: self.log_level.clone(),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Version => {
            println!("Email defense reporting tool version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Check(args) => run_check(args).await,
    }
}

async fn run_check(args: CheckArgs) -> anyhow::Result<()> {
    validate_domain_name(&args.domain)
        .map_err(|e| anyhow!("invalid domain '{}': {e}", args.domain))?;

    let config = bootstrap::load_config(args.config.as_deref(), args.overrides())?;
    bootstrap::init_logging(&config);

    let nameserver =
        bootstrap::resolve_nameserver(&config.resolver.nameserver, config.resolver.port).await?;

    let use_cases = di::UseCases::new(&config);
    let domain = args.domain.trim_end_matches('.');

    info!(domain = %domain, nameserver = %nameserver, "Starting check");
    let report = use_cases.check_domain.execute(domain, nameserver).await;
    info!(
        domain = %domain,
        failures = report.failure_count(),
        "Check finished"
    );

    if args.json {
        output::print_json(&report)?;
    } else {
        output::print_report(&report, args.full);
    }

    Ok(())
}
