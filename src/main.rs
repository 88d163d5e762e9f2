use std::process;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use terminal_size::{terminal_size, Width};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use droplet_ips::api::{list_droplets, set_verbose, ApiClient};
use droplet_ips::config::{
    self, Config, INPUT_IP_VERSION, INPUT_NETWORK_TYPE, INPUT_TAG, INPUT_TAGS,
};
use droplet_ips::output::{set_failed, ActionOutput};
use droplet_ips::resolver::{matching_droplets, without_address};
use droplet_ips::ActionError;

#[derive(Parser)]
#[command(
    name = "droplet-ips",
    author,
    version,
    about = "Resolve the addresses of DigitalOcean droplets by tag",
    long_about = r#"Resolve the addresses of DigitalOcean droplets by tag.

Run without a subcommand inside a GitHub Actions job: inputs are read from the
INPUT_* environment variables (digital-ocean-key, tag or tags, network-type,
ip-version, api-url) and the addresses are published as the `server_ips` output.

Examples:
  1) Inspect what a workflow would resolve:
      DIGITALOCEAN_TOKEN=... droplet-ips list --tag web
  2) Run the action locally with an env file:
      droplet-ips --env-file .env
"#,
    after_help = "Use `droplet-ips <subcommand> --help` to get subcommand specific options."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Load environment variables from this file before reading inputs
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Echo API requests and response bodies (prints the whole droplet inventory)
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve addresses and publish `server_ips` (the default)
    Run,
    /// Show the droplets a tag filter matches
    #[command(about = "List matching droplets", long_about = "Print the droplets matching the tag filter with the address the action would publish. Flags override the corresponding INPUT_* variables; nothing is written to GITHUB_OUTPUT.")]
    List {
        /// Single tag to match
        #[arg(long)]
        tag: Option<String>,
        /// Comma separated tags; a droplet matches if it carries any of them
        #[arg(long)]
        tags: Option<String>,
        /// Address family: public or private
        #[arg(long)]
        network_type: Option<String>,
        /// IP version: v4 or v6
        #[arg(long)]
        ip_version: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    if cli.verbose {
        set_verbose(true);
    }

    config::load_env_file(cli.env_file.as_deref());

    let result = match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_action().await,
        Commands::List {
            tag,
            tags,
            network_type,
            ip_version,
        } => list(tag, tags, network_type, ip_version).await,
    };

    if let Err(e) = result {
        set_failed(&e.to_string());
        process::exit(1);
    }
}

async fn run_action() -> Result<(), ActionError> {
    let config = Config::from_env()?;
    let output = ActionOutput::from_env();
    let addresses = droplet_ips::run(&config, &output).await?;
    println!(
        "{} {}",
        yansi::Paint::new("Published server_ips:").green(),
        serde_json::to_string(&addresses).unwrap_or_default()
    );
    Ok(())
}

async fn list(
    tag: Option<String>,
    tags: Option<String>,
    network_type: Option<String>,
    ip_version: Option<String>,
) -> Result<(), ActionError> {
    // Flags take precedence; a tag flag masks both tag inputs so they stay exclusive.
    let tag_flag_given = tag.is_some() || tags.is_some();
    let config = Config::from_lookup(|name| match name {
        INPUT_TAG if tag_flag_given => tag.clone(),
        INPUT_TAGS if tag_flag_given => tags.clone(),
        INPUT_NETWORK_TYPE => network_type.clone().or_else(|| config::env_lookup(name)),
        INPUT_IP_VERSION => ip_version.clone().or_else(|| config::env_lookup(name)),
        _ => config::env_lookup(name),
    })?;

    let client = ApiClient::new(&config.api_base_url, &config.api_token)?;
    let droplets = list_droplets(&client).await?;
    let matched = matching_droplets(&droplets, &config.tags);

    if matched.is_empty() {
        println!("(no droplets match {})", config.tags);
        return Ok(());
    }

    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table.set_header(vec!["ID", "Name", "Status", "Tags", "Address"]);
    for d in &matched {
        let address = d
            .address(config.network_type, config.ip_version)
            .unwrap_or("(none)")
            .to_string();
        table.add_row(vec![
            d.id.to_string(),
            d.name.clone(),
            d.status.clone(),
            d.tags.join(", "),
            address,
        ]);
    }
    println!("\n{table}");
    println!(
        "\n{}",
        yansi::Paint::new(format!(
            "{} of {} droplets match {} ({} {})",
            matched.len(),
            droplets.len(),
            config.tags,
            config.network_type,
            config.ip_version
        ))
        .cyan()
    );

    let missing = without_address(&matched, config.network_type, config.ip_version);
    if let Some(first) = missing.first() {
        println!(
            "{}",
            yansi::Paint::new(format!(
                "{} matching droplet(s) have no {} {} address; the action would fail on {} ({})",
                missing.len(),
                config.network_type,
                config.ip_version,
                first.name,
                first.id
            ))
            .yellow()
        );
    }
    Ok(())
}
