use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;
use nextprop::cli::{check_access, describe_decision, fetch_contacts, parse_cookie};

#[derive(Parser)]
#[command(name = "nextprop-cli")]
#[command(about = "NextProp CLI - Operational tools for the NextProp API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show what the access gate would do with a request
    CheckAccess {
        /// Request path (prompted for if not provided)
        path: Option<String>,

        /// Cookie sent with the request, as NAME=VALUE (repeatable)
        #[arg(short = 'c', long = "cookie", value_parser = parse_cookie)]
        cookies: Vec<(String, String)>,
    },
    /// Print the normalized contact list as JSON
    Contacts {
        /// Skip the cache and fetch from the contacts backend
        #[arg(long)]
        force_refresh: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::CheckAccess { path, cookies } => handle_check_access(path, cookies),
        Commands::Contacts { force_refresh } => handle_contacts(force_refresh).await,
    }
}

fn handle_check_access(path: Option<String>, cookies: Vec<(String, String)>) {
    let path = match path {
        Some(path) => path,
        None => match Input::<String>::new()
            .with_prompt("Request path")
            .default("/".to_string())
            .interact_text()
        {
            Ok(path) => path,
            Err(e) => {
                eprintln!("❌ Failed to read path: {}", e);
                std::process::exit(1);
            }
        },
    };

    let decision = check_access(&path, &cookies);
    println!("{} {}", path, describe_decision(&decision));
}

async fn handle_contacts(force_refresh: bool) {
    let page = match fetch_contacts(force_refresh).await {
        Ok(page) => page,
        Err(e) => {
            eprintln!("❌ Error fetching contacts ({}): {}", e.status, e.error);
            std::process::exit(1);
        }
    };

    match serde_json::to_string_pretty(&page) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("❌ Error encoding contacts: {}", e);
            std::process::exit(1);
        }
    }
}
