mod config;

use anyhow::Result;
use config::Config;
use gameguide_shared::registry::{get_tool_schemas, TOOLBELTS};
use gameguide_shared::{get_tools, use_tool};
use serde_json::Value;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load config
    let mut config = match Config::load() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load config: {}", e);
            return Err(e);
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    gameguide_shared::config::install(config.effective_scraper());

    // Parse args
    let args: Vec<String> = std::env::args().collect();
    let command = args.get(1).map(|s| s.as_str()).unwrap_or("help");

    match command {
        "tools" => list_tools(),
        "schema" => {
            println!("{}", serde_json::to_string_pretty(&get_tools())?);
        }
        "call" => {
            let Some(name) = args.get(2) else {
                print_usage();
                return Ok(());
            };
            let tool = resolve_tool_name(name)?;
            let tool_args: Value = match args.get(3) {
                Some(raw) => serde_json::from_str(raw)?,
                None => Value::Object(Default::default()),
            };
            println!("{}", use_tool(tool, &tool_args)?);
        }
        "config" => {
            if args.len() < 3 {
                println!("Current config:");
                println!("{}", serde_json::to_string_pretty(&config)?);
            } else if args[2] == "set" && args.len() >= 5 {
                if config.set(&args[3], &args[4])? {
                    config.save()?;
                    println!("{} updated to: {}", args[3], args[4]);
                } else {
                    print_usage();
                }
            } else {
                print_usage();
            }
        }
        _ => print_usage(),
    }

    Ok(())
}

/// Accepts either the full `Toolbelt::tool` name or the bare tool name.
fn resolve_tool_name(name: &str) -> Result<&'static str> {
    get_tool_schemas()
        .iter()
        .find(|s| s.name == name || s.name.rsplit("::").next() == Some(name))
        .map(|s| s.name)
        .ok_or_else(|| anyhow::anyhow!("Tool '{}' not found. Run `gameguide tools` to list tools.", name))
}

fn list_tools() {
    for (toolbelt, description) in TOOLBELTS {
        println!("{} - {}", toolbelt, description);

        let prefix = format!("{}::", toolbelt);
        for schema in get_tool_schemas().iter().filter(|s| s.name.starts_with(&prefix)) {
            println!("  {}", schema.name);
            println!("      {}", schema.description);
            for param in &schema.parameters {
                let marker = if param.required { "" } else { " (optional)" };
                println!("      - {}: {}{} - {}", param.name, param.type_name, marker, param.description);
            }
        }
        println!();
    }
}

fn print_usage() {
    println!("GameGuide - Console for the game lookup tools");
    println!("\nUsage:");
    println!("  gameguide tools                      List tools and their parameters");
    println!("  gameguide schema                     Print tool schemas as JSON");
    println!("  gameguide call TOOL ['{{json args}}']  Run a tool, e.g.");
    println!("      gameguide call search_games '{{\"query\": \"hades\"}}'");
    println!("  gameguide config                     Show current configuration");
    println!("  gameguide config set KEY VALUE       Set base_url, timeout_secs, max_redirects,");
    println!("                                       user_agent or log_filter");
}
