/**
 * Command-line driver for the Expo push client.
 *
 *   expo-push-send <push_token> [title] [body]
 *   expo-push-send batch <push_token>...
 *   expo-push-send receipts <receipt_id>...
 *
 * Errors are printed, never escalated: the process exits normally either way.
 * Set RUST_LOG=expo_push_core=debug to see each request.
 */
use std::io;
use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use clap::{CommandFactory, Parser, Subcommand};
use expo_push_core::{receipt_ids, PushClient, PushError, PushMessage};
use serde_json::{json, Map, Value};
use tracing_subscriber::EnvFilter;

const DEFAULT_TITLE: &str = "Test Notification";
const DEFAULT_BODY: &str = "This is a test notification from Rust!";

/// Pause between a successful send and the receipt lookup.
const RECEIPT_DELAY: Duration = Duration::from_secs(2);

#[derive(Parser)]
#[command(
    name = "expo-push-send",
    about = "Send a push notification through the Expo push service",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,

    /// Expo push token, e.g. "ExponentPushToken[abc123]"
    push_token: Option<String>,

    #[arg(default_value = DEFAULT_TITLE)]
    title: String,

    #[arg(default_value = DEFAULT_BODY)]
    body: String,
}

#[derive(Subcommand)]
enum Command {
    /// Send one numbered message per token in a single batch request
    Batch {
        #[arg(required = true)]
        push_tokens: Vec<String>,
    },

    /// Look up delivery receipts once
    Receipts {
        #[arg(required = true)]
        ids: Vec<String>,
    },
}

fn main() -> io::Result<()> {
    init_logging();

    let cli = Cli::parse();
    let client = PushClient::new();

    match (cli.command, cli.push_token) {
        (Some(Command::Batch { push_tokens }), _) => send_batch(&client, &push_tokens),
        (Some(Command::Receipts { ids }), _) => {
            print_result("Receipts", &client.get_receipts(&ids[..]));
        }
        (None, Some(token)) => send_single(&client, &token, &cli.title, &cli.body),
        (None, None) => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/**
 * Sends one notification and, when the service hands back a ticket id,
 * waits briefly and checks its receipt once.
 */
fn send_single(client: &PushClient, token: &str, title: &str, body: &str) {
    let preview: String = token.chars().take(20).collect();
    println!("Sending notification to: {preview}...");
    println!("Title: {title}");
    println!("Body: {body}");
    println!();

    let mut data = Map::new();
    data.insert("source".into(), json!("rust_cli"));
    data.insert("timestamp".into(), json!(unix_seconds().to_string()));

    let response = match client.send_notification(token, title, body, Some(data), None) {
        Ok(response) => response,
        Err(err) => {
            println!("Error: {err}");
            return;
        }
    };

    println!("Notification sent successfully!");
    println!("Response: {}", pretty(&response));

    let Some(receipt_id) = receipt_ids(&response).into_iter().next() else {
        return;
    };

    println!();
    println!("Receipt ID: {receipt_id}");
    println!("Waiting {} seconds to check receipt...", RECEIPT_DELAY.as_secs());
    thread::sleep(RECEIPT_DELAY);

    print_result("Receipt", &client.get_receipts(&[receipt_id]));
}

fn send_batch(client: &PushClient, tokens: &[String]) {
    let messages: Vec<PushMessage> = tokens
        .iter()
        .enumerate()
        .map(|(i, token)| {
            let index = i + 1;
            let mut data = Map::new();
            data.insert("index".into(), json!(index));

            PushMessage::new(
                token.as_str(),
                format!("Batch Notification {index}"),
                format!("Message {index} of {} in batch", tokens.len()),
            )
            .with_data(data)
        })
        .collect();

    print_result("Batch result", &client.send_batch(&messages));
}

fn print_result(label: &str, result: &Result<Value, PushError>) {
    match result {
        Ok(value) => println!("{label}: {}", pretty(value)),
        Err(err) => println!("Error: {err}"),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

fn unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_secs())
        .unwrap_or_default()
}
