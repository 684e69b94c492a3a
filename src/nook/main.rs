use chrono::Utc;
use clap::Parser;
use colored::*;
use directories::ProjectDirs;
use nook::api::{filter_ranked, NookApi, UpdateFields};
use nook::config::NookConfig;
use nook::error::{NookError, Result};
use nook::model::{Document, RequestContext};
use nook::store::fs::FileStore;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};
use unicode_width::UnicodeWidthStr;
use uuid::Uuid;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct AppContext {
    api: NookApi<FileStore>,
    ctx: RequestContext,
    data_dir: PathBuf,
    json: bool,
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);
    let mut app = init_context(&cli)?;

    match cli.command {
        Some(Commands::Create { inside, title }) => handle_create(&mut app, inside, title),
        Some(Commands::List { parent }) => handle_list(&app, parent),
        Some(Commands::View { doc }) => handle_view(&app, doc),
        Some(Commands::Edit {
            doc,
            title,
            content,
            icon,
            cover,
        }) => handle_edit(&mut app, doc, title, content, icon, cover),
        Some(Commands::Publish { doc }) => handle_publish(&mut app, doc, true),
        Some(Commands::Unpublish { doc }) => handle_publish(&mut app, doc, false),
        Some(Commands::RemoveIcon { doc }) => handle_remove_icon(&mut app, doc),
        Some(Commands::RemoveCover { doc }) => handle_remove_cover(&mut app, doc),
        Some(Commands::Archive { doc }) => handle_archive(&mut app, doc),
        Some(Commands::Restore { doc }) => handle_restore(&mut app, doc),
        Some(Commands::Trash) => handle_trash(&app),
        Some(Commands::Search { term }) => handle_search(&app, term),
        Some(Commands::Purge { doc }) => handle_purge(&mut app, doc),
        Some(Commands::Doctor { fix }) => handle_doctor(&mut app, fix),
        Some(Commands::Config { key, value }) => handle_config(&app, key, value),
        None => handle_list(&app, None),
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    let fmt_layer = fmt::layer().with_writer(std::io::stderr).with_target(true);

    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let data_dir = match &cli.data_dir {
        Some(dir) => dir.clone(),
        None => ProjectDirs::from("com", "nook", "nook")
            .ok_or_else(|| NookError::Store("could not determine the data directory".to_string()))?
            .data_dir()
            .to_path_buf(),
    };

    let config = NookConfig::load(&data_dir).unwrap_or_default();

    // Identity: --user / NOOK_USER beats the configured default; --anonymous
    // beats everything.
    let caller = if cli.anonymous {
        None
    } else {
        cli.user.clone().or(config.user)
    };
    let ctx = match caller {
        Some(user) => RequestContext::authenticated(user),
        None => RequestContext::anonymous(),
    };

    let api = NookApi::new(FileStore::new(data_dir.clone()));

    Ok(AppContext {
        api,
        ctx,
        data_dir,
        json: cli.json,
    })
}

fn handle_create(app: &mut AppContext, inside: Option<String>, title: Vec<String>) -> Result<()> {
    let parent_id = match inside {
        Some(selector) => Some(resolve_selector(app, &selector)?),
        None => None,
    };

    let title = title.join(" ");
    let title = if title.trim().is_empty() {
        "Untitled".to_string()
    } else {
        title
    };

    let doc = app.api.create(&app.ctx, title, parent_id)?;
    print_mutated(app, "Created", &doc)
}

fn handle_list(app: &AppContext, parent: Option<String>) -> Result<()> {
    let parent_id = match parent {
        Some(selector) => Some(resolve_selector(app, &selector)?),
        None => None,
    };

    let docs = app.api.sidebar(&app.ctx, parent_id.as_ref())?;
    print_listing(app, &docs)
}

fn handle_view(app: &AppContext, doc: String) -> Result<()> {
    let id = resolve_selector(app, &doc)?;
    let doc = app.api.get_by_id(&app.ctx, &id)?;

    if app.json {
        return print_json(&doc);
    }
    print_document_full(&doc);
    Ok(())
}

fn handle_edit(
    app: &mut AppContext,
    doc: String,
    title: Option<String>,
    content: Option<String>,
    icon: Option<String>,
    cover: Option<String>,
) -> Result<()> {
    if title.is_none() && content.is_none() && icon.is_none() && cover.is_none() {
        return Err(NookError::Api(
            "Nothing to update: pass --title, --content, --icon, or --cover".to_string(),
        ));
    }

    let id = resolve_selector(app, &doc)?;
    let fields = UpdateFields {
        title,
        content,
        icon,
        cover_image: cover,
        is_published: None,
    };

    let doc = app.api.update(&app.ctx, &id, fields)?;
    print_mutated(app, "Updated", &doc)
}

fn handle_publish(app: &mut AppContext, doc: String, publish: bool) -> Result<()> {
    let id = resolve_selector(app, &doc)?;
    let fields = UpdateFields {
        is_published: Some(publish),
        ..Default::default()
    };

    let doc = app.api.update(&app.ctx, &id, fields)?;
    let verb = if publish { "Published" } else { "Unpublished" };
    print_mutated(app, verb, &doc)
}

fn handle_remove_icon(app: &mut AppContext, doc: String) -> Result<()> {
    let id = resolve_selector(app, &doc)?;
    let doc = app.api.remove_icon(&app.ctx, &id)?;
    print_mutated(app, "Icon removed", &doc)
}

fn handle_remove_cover(app: &mut AppContext, doc: String) -> Result<()> {
    let id = resolve_selector(app, &doc)?;
    let doc = app.api.remove_cover_image(&app.ctx, &id)?;
    print_mutated(app, "Cover removed", &doc)
}

fn handle_archive(app: &mut AppContext, doc: String) -> Result<()> {
    let id = resolve_selector(app, &doc)?;
    let doc = app.api.archive(&app.ctx, &id)?;
    print_mutated(app, "Archived", &doc)
}

fn handle_restore(app: &mut AppContext, doc: String) -> Result<()> {
    let id = resolve_selector(app, &doc)?;
    let doc = app.api.restore(&app.ctx, &id)?;
    print_mutated(app, "Restored", &doc)
}

fn handle_trash(app: &AppContext) -> Result<()> {
    let docs = app.api.trash(&app.ctx)?;
    print_listing(app, &docs)
}

fn handle_search(app: &AppContext, term: Option<String>) -> Result<()> {
    let docs = app.api.search(&app.ctx)?;
    let docs = match term {
        Some(term) => filter_ranked(docs, &term),
        None => docs,
    };
    print_listing(app, &docs)
}

fn handle_purge(app: &mut AppContext, doc: String) -> Result<()> {
    let id = resolve_selector(app, &doc)?;
    let doc = app.api.remove(&app.ctx, &id)?;
    print_mutated(app, "Purged", &doc)
}

fn handle_doctor(app: &mut AppContext, fix: bool) -> Result<()> {
    let report = app.api.doctor(&app.ctx, fix)?;

    if report.orphans.is_empty() {
        println!("{}", "No inconsistencies found.".green());
        return Ok(());
    }

    println!("{}", "Documents with a missing parent:".yellow());
    for doc in &report.orphans {
        println!("  {} {}", short_id(&doc.id), doc.title);
    }

    if fix {
        println!(
            "{}",
            format!("Reparented {} document(s) to root.", report.fixed).green()
        );
    } else {
        println!("{}", "Run `nook doctor --fix` to promote them to root.".dimmed());
    }
    Ok(())
}

fn handle_config(app: &AppContext, key: Option<String>, value: Option<String>) -> Result<()> {
    let mut config = NookConfig::load(&app.data_dir)?;

    match (key.as_deref(), value) {
        (None, _) | (Some("user"), None) => {
            println!("user = {}", config.user.as_deref().unwrap_or("(unset)"));
        }
        (Some("user"), Some(v)) => {
            config.user = Some(v);
            config.save(&app.data_dir)?;
        }
        (Some(other), _) => {
            println!("Unknown config key: {}", other);
        }
    }
    Ok(())
}

// --- Selector resolution ---

/// Resolve a user-typed selector to a document id. Accepts a full UUID, or a
/// unique prefix (at least 4 chars) matched against the caller's own
/// documents, live and archived alike. Anonymous callers must pass the full
/// id; they have no listing to resolve a prefix against.
fn resolve_selector(app: &AppContext, input: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::parse_str(input) {
        return Ok(id);
    }

    let needle = input.to_lowercase();
    if needle.len() < 4 || !needle.chars().all(|c| c.is_ascii_hexdigit() || c == '-') {
        return Err(NookError::Api(format!(
            "Invalid document selector: {} (expected an id or a prefix of at least 4 characters)",
            input
        )));
    }

    let mut candidates = app.api.search(&app.ctx)?;
    candidates.extend(app.api.trash(&app.ctx)?);

    let matches: Vec<&Document> = candidates
        .iter()
        .filter(|d| d.id.to_string().starts_with(&needle))
        .collect();

    match matches.len() {
        0 => Err(NookError::Api(format!("No document matches: {}", input))),
        1 => Ok(matches[0].id),
        n => Err(NookError::Api(format!(
            "Selector {} is ambiguous ({} matches)",
            input, n
        ))),
    }
}

fn short_id(id: &Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

// --- Printing ---

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).map_err(NookError::Serialization)?;
    println!("{}", json);
    Ok(())
}

fn print_mutated(app: &AppContext, verb: &str, doc: &Document) -> Result<()> {
    if app.json {
        return print_json(doc);
    }
    println!(
        "{}",
        format!("{}: {} {}", verb, short_id(&doc.id), doc.title).green()
    );
    Ok(())
}

fn print_listing(app: &AppContext, docs: &[Document]) -> Result<()> {
    if app.json {
        return print_json(&docs);
    }
    print_documents(docs);
    Ok(())
}

fn print_document_full(doc: &Document) {
    let title = match &doc.icon {
        Some(icon) => format!("{} {}", icon, doc.title),
        None => doc.title.clone(),
    };

    let marker = if doc.is_published {
        format!(" {}", PUBLISHED_MARKER.cyan())
    } else {
        String::new()
    };

    println!("{} {}{}", short_id(&doc.id).yellow(), title.bold(), marker);
    if let Some(cover) = &doc.cover_image {
        println!("{}", format!("cover: {}", cover).dimmed());
    }
    println!("--------------------------------");
    match doc.content.as_deref() {
        Some(content) if !content.is_empty() => println!("{}", content),
        _ => println!("{}", "(no content)".dimmed()),
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const PUBLISHED_MARKER: &str = "◉";

fn print_documents(docs: &[Document]) {
    if docs.is_empty() {
        println!("No documents found.");
        return;
    }

    for doc in docs {
        let idx_str = format!("{}. ", short_id(&doc.id));

        let left_prefix = "    ".to_string();
        let left_prefix_width = left_prefix.width();

        let right_suffix = if doc.is_published {
            format!("{} ", PUBLISHED_MARKER)
        } else {
            "  ".to_string()
        };
        let right_suffix_width = right_suffix.width();

        let time_ago = format_time_ago(doc.created_at);

        let content_preview: String = doc
            .content
            .as_deref()
            .unwrap_or_default()
            .chars()
            .take(50)
            .map(|c| if c == '\n' { ' ' } else { c })
            .collect();

        let mut title_content = match &doc.icon {
            Some(icon) => format!("{} {}", icon, doc.title),
            None => doc.title.clone(),
        };
        if !content_preview.is_empty() {
            title_content = format!("{} {}", title_content, content_preview);
        }

        let idx_width = idx_str.width();
        let fixed_width = left_prefix_width + idx_width + right_suffix_width + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let title_display = truncate_to_width(&title_content, available);

        let content_width = title_display.width();
        let padding = available.saturating_sub(content_width);

        let idx_colored = if doc.is_archived {
            idx_str.red()
        } else {
            idx_str.normal()
        };

        println!(
            "{}{}{}{}{}{}",
            left_prefix,
            idx_colored,
            title_display,
            " ".repeat(padding),
            right_suffix,
            time_ago.dimmed()
        );
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(timestamp);

    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());

    // Pad single-unit strings so the column lines up
    let time_str = time_str
        .replace("hour ago", "hour  ago")
        .replace("minute ago", "minute  ago")
        .replace("second ago", "second  ago")
        .replace("day ago", "day  ago")
        .replace("week ago", "week  ago")
        .replace("month ago", "month  ago")
        .replace("year ago", "year  ago");

    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
