use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "relay-cli")]
#[command(about = "Management CLI for the Issue Relay", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check relay health
    Health,
    /// Fetch an issue and print its flattened content
    Fetch {
        /// Issue key, e.g. PROJ-123
        issue_key: String,
    },
    /// Forward a raw JSON payload to the test-generation route
    Generate {
        /// JSON payload to forward
        payload: String,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    match cli.command {
        Commands::Health => {
            let res = client
                .get(format!("{}/api/health", cli.url))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Fetch { issue_key } => {
            let res = client
                .post(format!("{}/api/jira/fetch", cli.url))
                .json(&json!({ "issueKey": issue_key }))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Generate { payload } => {
            let payload: Value = serde_json::from_str(&payload)?;
            let res = client
                .post(format!("{}/api/generate-tests", cli.url))
                .json(&payload)
                .send()
                .await?;
            print_response(res).await?;
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: relay returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
