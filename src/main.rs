use clap::Parser;
use notekeep::cli::{
    handle_add, handle_get, handle_list, handle_serve, handle_update, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("notekeep=info,tower_http=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    let data_dir = cli.data_dir;

    let result = match cli.command {
        Commands::Serve {
            host,
            port,
            static_dir,
        } => handle_serve(data_dir, host, port, static_dir),
        Commands::List { json } => handle_list(data_dir, json),
        Commands::Get { id, json } => handle_get(data_dir, id, json),
        Commands::Add { fields, json } => handle_add(data_dir, fields, json),
        Commands::Update { id, fields, json } => handle_update(data_dir, id, fields, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
