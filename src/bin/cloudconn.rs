use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use cloudconn::config::ConfigStore;
use cloudconn::provider::{Provider, ProviderSummary};
use cloudconn::OsEnv;

/// Show how a storage provider resolves: headers, ACLs, error classes and
/// where its credentials come from.
#[derive(Debug, Parser)]
#[command(name = "cloudconn", version, about)]
struct CliArgs {
    /// Provider identity (`aws` or `google`)
    provider: String,
    /// Config file to use instead of the default search path
    #[arg(long, short)]
    config: Option<PathBuf>,
    /// Print the summary as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = CliArgs::parse();

    let builder = Provider::builder(&args.provider).env(OsEnv);
    let builder = match &args.config {
        Some(path) => builder
            .config_file(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => builder
            .config(ConfigStore::load_default(&OsEnv).context("failed to load default config")?),
    };
    let provider = builder.build()?;
    let summary = provider.summary();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        print_summary(&summary);
    }
    Ok(())
}

fn print_summary(summary: &ProviderSummary) {
    println!("provider:          {} ({})", summary.provider, summary.provider_name);
    println!("chunked transfer:  {}", summary.supports_chunked_transfer);
    println!(
        "default host:      {}",
        summary.default_host.as_deref().unwrap_or("-")
    );
    println!(
        "access key:        {:?} (present: {})",
        summary.credential_sources.access_key, summary.has_access_key
    );
    println!(
        "secret key:        {:?} (present: {})",
        summary.credential_sources.secret_key, summary.has_secret_key
    );
    println!("acl schema:        {}", summary.acl_schema);
    println!("canned acls:       {}", summary.canned_acls.join(", "));
    println!();
    println!("headers:");
    for (role, value) in &summary.headers {
        println!("  {:<32} {}", role.as_str(), value.unwrap_or("n/a"));
    }
    println!();
    println!("errors:");
    for (kind, class) in &summary.errors {
        println!("  {:<32} {}", format!("{kind:?}"), class);
    }
}
