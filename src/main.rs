use clap::Parser;
use ferrofetch::collectors::CollectOptions;
use ferrofetch::{config, logo};
use tracing_subscriber::EnvFilter;

/// Display system info and a logo for the running OS
#[derive(Debug, Parser)]
#[command(name = "ferrofetch", version)]
struct Args {
    /// Render every compiled logo with slot indexes and exit
    #[arg(short, long)]
    display: bool,

    /// Emit metrics as a single JSON object instead of rendered art
    #[arg(short, long)]
    json: bool,

    /// Assume a zeroconfig network and add .local to the hostname
    #[arg(short, long)]
    zeroconfig: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.display {
        print!("{}", logo::preview_all());
        return;
    }

    let config = config::load_config();
    let opts = CollectOptions {
        zeroconfig: args.zeroconfig || config.zeroconfig,
        structured: args.json,
    };

    let snapshot = ferrofetch::collect_with_logo(&opts, config.logo.as_deref());
    if args.json {
        println!("{}", snapshot.report.to_json());
    } else {
        println!("{}", snapshot.profile.render(snapshot.report.lines()));
    }
}
