//! # chatview CLI
//!
//! Command-line interface for the chatview library.

use std::fs;
use std::io::{self, Write};
use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use chatview::cli::{Cli, Command, ImportArgs, ParseArgs, ShowArgs, StoreArgs};
use chatview::config::TranscriptConfig;
use chatview::core::{
    FilterConfig, OutputConfig, Perspective, TranscriptStats, apply_filters, group_consecutive,
};
use chatview::format::{to_format_string, write_to_format};
use chatview::parser::Parser;
use chatview::parsers::TranscriptParser;
use chatview::store::{ChatStore, JsonFileStore, NewChat, StoredChat};
use chatview::{ChatMessage, ChatviewError};

fn main() {
    let cli = <Cli as ClapParser>::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

/// Logs go to stderr so stdout stays clean for records.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(command: Command) -> Result<(), ChatviewError> {
    match command {
        Command::Parse(args) => parse(&args),
        Command::Import(args) => import(args),
        Command::List(args) => list(&args),
        Command::Show(args) => show(&args),
    }
}

fn parse(args: &ParseArgs) -> Result<(), ChatviewError> {
    let start = Instant::now();

    let messages = if args.stream {
        let parser = TranscriptParser::with_config(TranscriptConfig::streaming());
        parser
            .stream(&args.input)?
            .collect::<Result<Vec<ChatMessage>, ChatviewError>>()?
    } else {
        TranscriptParser::new().parse(&args.input)?
    };
    let parsed_count = messages.len();

    let mut filter = FilterConfig::new();
    if let Some(from) = &args.from {
        filter = filter.with_sender(from);
    }
    if args.no_notifications {
        filter = filter.without_notifications();
    }
    let messages = apply_filters(messages, &filter);

    let mut output_config = OutputConfig::new();
    if args.ids {
        output_config = output_config.with_ids();
    }
    if args.dates {
        output_config = output_config.with_dates();
    }

    let format = args.resolved_format();
    debug!(
        parsed = parsed_count,
        kept = messages.len(),
        %format,
        elapsed_ms = start.elapsed().as_millis(),
        "transcript processed"
    );

    match &args.output {
        Some(path) => {
            write_to_format(&messages, path, format, &output_config)?;
            eprintln!(
                "✅ {} of {} records written to {} ({format})",
                messages.len(),
                parsed_count,
                path.display()
            );
        }
        None => {
            let text = to_format_string(&messages, format, &output_config)?;
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            if !text.ends_with('\n') {
                stdout.write_all(b"\n")?;
            }
        }
    }

    Ok(())
}

fn import(args: ImportArgs) -> Result<(), ChatviewError> {
    let raw_text = read_transcript(&args.input)?;
    let title = args.resolved_title();
    let store = JsonFileStore::open(args.store.store);
    let chat = store.create(NewChat::new(title, raw_text))?;

    println!(
        "✅ Imported chat #{} \"{}\" ({} records)",
        chat.id,
        chat.title,
        chat.message_count()
    );
    Ok(())
}

fn read_transcript(path: &Path) -> Result<String, ChatviewError> {
    Ok(fs::read_to_string(path)?)
}

fn list(args: &StoreArgs) -> Result<(), ChatviewError> {
    let chats = JsonFileStore::open(&args.store).list()?;
    if chats.is_empty() {
        println!("No chats yet. Import one with `chatview import <file>`.");
        return Ok(());
    }

    println!("{:>4}  {:<20}  {:>8}  TITLE", "ID", "CREATED", "RECORDS");
    for chat in &chats {
        println!(
            "{:>4}  {:<20}  {:>8}  {}",
            chat.id,
            chat.created_at.format("%Y-%m-%d %H:%M:%S"),
            chat.message_count(),
            chat.title
        );
    }
    Ok(())
}

fn show(args: &ShowArgs) -> Result<(), ChatviewError> {
    let chat = JsonFileStore::open(&args.store.store).get(args.id)?;
    print!("{}", render_chat(&chat, args.view_as.as_deref()));
    Ok(())
}

/// Renders a stored chat as plain text, grouped by consecutive sender.
fn render_chat(chat: &StoredChat, view_as: Option<&str>) -> String {
    let messages = &chat.parsed_data;
    let view = Perspective::new(messages, view_as);
    let stats = TranscriptStats::from_messages(messages);

    let mut out = String::new();
    out.push_str(&format!(
        "# {} (#{}, {})\n",
        chat.title,
        chat.id,
        chat.created_at.format("%Y-%m-%d %H:%M")
    ));

    let names: Vec<String> = view
        .participants()
        .iter()
        .map(|name| match view.color_slot(name) {
            None => format!("{name} (you)"),
            Some(slot) => format!("{name} [{}]", slot + 1),
        })
        .collect();
    out.push_str(&format!("Participants: {}\n", names.join(", ")));
    out.push_str(&format!(
        "Messages: {}, notifications: {}\n",
        stats.messages, stats.notifications
    ));

    for group in group_consecutive(messages) {
        out.push('\n');
        let first = group.messages[0];
        let stamp = format!(
            "{} {}",
            first.date().unwrap_or_default(),
            first.time().unwrap_or_default()
        );

        match group.sender {
            None => {
                out.push_str(&format!("  -- {} ({stamp}) --\n", first.text()));
            }
            Some(sender) => {
                let marker = if view.is_own(first) { " (you)" } else { "" };
                out.push_str(&format!("[{stamp}] {sender}{marker}:\n"));
                for msg in &group.messages {
                    for line in msg.text().lines() {
                        out.push_str(&format!("    {line}\n"));
                    }
                }
            }
        }
    }

    out
}
