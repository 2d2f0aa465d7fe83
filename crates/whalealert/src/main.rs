mod cli;
mod report;

use clap::Parser;
use eyre::WrapErr;

use whalealert_core::{WhaleAlertApi, WhaleAlertClient};

#[tokio::main]
async fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let client = WhaleAlertClient::builder()
        .url(args.url)
        .access_key(args.api_key)
        .build();
    tracing::debug!(url = client.url(), "configured whale alert client");

    let output = run(&client, args.command, args.json).await?;
    print!("{output}");

    Ok(())
}

/// Execute one subcommand and render its output.
async fn run(
    api: &dyn WhaleAlertApi,
    command: cli::Command,
    json: bool,
) -> eyre::Result<String> {
    let output = match command {
        cli::Command::Status => {
            let status = api.status().await.wrap_err("while requesting API status")?;
            if json {
                to_json(&status)?
            } else {
                report::status(&status)
            }
        }
        cli::Command::Transaction { blockchain, hash } => {
            let res = api
                .transaction(&blockchain, &hash)
                .await
                .wrap_err_with(|| format!("while looking up {blockchain} transaction {hash}"))?;
            if json {
                to_json(&res)?
            } else {
                report::lookup(&res)
            }
        }
        cli::Command::Transactions {
            start,
            end,
            cursor,
            min_value,
            limit,
            currency,
        } => {
            let request = cli::listing_request(end, cursor, min_value, limit, currency);
            let res = api
                .transactions(start, request)
                .await
                .wrap_err_with(|| format!("while listing transactions since {start}"))?;
            if json {
                to_json(&res)?
            } else {
                report::listing(&res)
            }
        }
    };
    Ok(output)
}

fn to_json<T: serde::Serialize>(value: &T) -> eyre::Result<String> {
    let mut rendered = serde_json::to_string_pretty(value).wrap_err("encode response as JSON")?;
    rendered.push('\n');
    Ok(rendered)
}
