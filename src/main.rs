// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Luotain CLI - Embeddable HTTP Request Tester
//!
//! Example usage and demonstration of the luotain library. A real embedding
//! owns a view surface and a `ViewChannel`; this binary just drives one
//! submission end to end and prints what the surface would render.

use std::env;
use std::process::ExitCode;

use anyhow::Context;

use luotain::{highlight, render_result, Method, Pipeline, RequestDraft};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("luotain=info".parse().unwrap()),
        )
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "send" => {
            if args.len() < 3 {
                eprintln!("Usage: luotain send <url> [method] [body-json]");
                return ExitCode::from(1);
            }
            let method = args.get(3).map(String::as_str).unwrap_or("GET");
            let body = args.get(4).cloned();
            run(send_request(&args[2], method, body).await)
        }
        "highlight" => {
            if args.len() < 3 {
                eprintln!("Usage: luotain highlight <json-text>");
                return ExitCode::from(1);
            }
            println!("{}", highlight::highlight(&args[2]));
            ExitCode::SUCCESS
        }
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("luotain {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        cmd => {
            eprintln!("Unknown command: {}", cmd);
            print_usage();
            ExitCode::from(1)
        }
    }
}

fn run(result: anyhow::Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(1)
        }
    }
}

async fn send_request(url: &str, method: &str, body: Option<String>) -> anyhow::Result<()> {
    let method: Method = method.parse().map_err(anyhow::Error::msg)?;

    let mut draft = RequestDraft::new(url, method);
    if let Some(body) = body {
        draft.body_text = body;
    }

    let pipeline = Pipeline::with_defaults().context("failed to assemble pipeline")?;
    let submission = pipeline.handle_submit(&draft).await;

    println!(
        "{}",
        serde_json::to_string_pretty(&submission.envelope)
            .context("failed to serialize envelope")?
    );
    println!();
    println!("{}", render_result(&submission.envelope));

    Ok(())
}

fn print_usage() {
    println!(
        r#"Luotain - Embeddable HTTP Request Tester

USAGE:
    luotain <COMMAND> [OPTIONS]

COMMANDS:
    send <url> [method] [body-json]    Submit a request and print the result
    highlight <json-text>              Print highlighted markup for JSON text
    help                               Show this help message
    version                            Show version information

EXAMPLES:
    luotain send https://httpbin.org/get
    luotain send https://httpbin.org/post POST '{{"name": "widget"}}'
    luotain highlight '{{"n": 1, "ok": true}}'

For more information, see: https://github.com/bountyyfi/luotain
"#
    );
}
