//! glyphsync entrypoint: wires the editing side (file watcher + synthesis
//! session) to the rendering side (sync bridge + terminal canvas) over the
//! in-process wire channel.

mod canvas;

use anyhow::{Context, Result};
use canvas::TerminalCanvas;
use clap::Parser;
use core_bridge::{SyncBridge, bootstrap, wire};
use core_highlight::{DEFAULT_LANGUAGE, languages};
use core_snapshot::{EditorSession, Message};
use core_style::Theme;
use notify::{RecursiveMode, Watcher};
use std::path::{Path, PathBuf};
use std::sync::Once;
use tracing::{debug, error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;

/// CLI arguments.
#[derive(Parser, Debug)]
#[command(name = "glyphsync", version, about = "Document → positioned-run sync host")]
struct Args {
    /// Document to watch and synchronize (UTF-8 text).
    pub path: Option<PathBuf>,
    /// Language name from the registry (see --list-languages).
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    pub language: String,
    /// Optional theme file overriding the built-in styles.
    #[arg(long)]
    pub theme: Option<PathBuf>,
    /// Print the language registry in presentation order and exit.
    #[arg(long)]
    pub list_languages: bool,
    /// Synthesize one snapshot, print the wire payload to stdout, and exit.
    #[arg(long)]
    pub once: bool,
    /// Substitute the document and language into a bootstrap template file,
    /// print the result to stdout, and exit.
    #[arg(long)]
    pub seed_template: Option<PathBuf>,
}

fn configure_logging() -> Option<WorkerGuard> {
    let file_appender = tracing_appender::rolling::never(".", "glyphsync.log");
    let (nb_writer, guard) = tracing_appender::non_blocking(file_appender);
    match tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(nb_writer)
        .with_ansi(false)
        .try_init()
    {
        Ok(_) => Some(guard),
        // Global subscriber already installed; drop the guard so the writer
        // shuts down.
        Err(_) => None,
    }
}

fn install_panic_hook() {
    static HOOK: Once = Once::new();
    HOOK.call_once(|| {
        let default_panic = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            tracing::error!(target: "runtime.panic", ?info, "panic");
            default_panic(info);
        }));
    });
}

fn load_theme(path: Option<&Path>) -> Theme {
    match path {
        Some(p) => match Theme::load_from(p) {
            Ok(theme) => theme,
            Err(e) => {
                warn!(target: "runtime.startup", error = %e, file = %p.display(), "theme_load_failed_using_default");
                Theme::default()
            }
        },
        None => Theme::default(),
    }
}

fn read_document(path: &Path) -> Option<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => {
            debug!(target: "io", file = %path.display(), size_bytes = content.len(), "file_read_ok");
            Some(content)
        }
        Err(e) => {
            warn!(target: "io", file = %path.display(), error = %e, "file_read_failed");
            None
        }
    }
}

/// Editing side: initial synthesis plus one re-synthesis per change event,
/// each emitting a full snapshot down the wire.
fn watch_loop(
    path: &Path,
    session: &mut EditorSession,
    tx: &crossbeam_channel::Sender<String>,
) -> Result<()> {
    let text = read_document(path).unwrap_or_default();
    wire::send(tx, &Message::Text(session.synthesize(&text)));

    let (event_tx, event_rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(event_tx).context("create file watcher")?;
    watcher
        .watch(path, RecursiveMode::NonRecursive)
        .with_context(|| format!("watch {}", path.display()))?;
    info!(target: "runtime.startup", file = %path.display(), language = session.language(), "watching");

    for event in event_rx {
        match event {
            Ok(event) if event.kind.is_modify() || event.kind.is_create() => {
                let Some(text) = read_document(path) else {
                    continue;
                };
                wire::send(tx, &Message::Text(session.synthesize(&text)));
            }
            Ok(_) => {}
            Err(e) => warn!(target: "io", error = %e, "watch_error"),
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _log_guard = configure_logging();
    install_panic_hook();

    if args.list_languages {
        for lang in languages() {
            println!("{}", lang.name);
        }
        return Ok(());
    }

    let theme = load_theme(args.theme.as_deref());
    let mut session = EditorSession::new(&args.language, theme)
        .with_context(|| format!("select language {:?}", args.language))?;

    let document = args
        .path
        .as_deref()
        .and_then(read_document)
        .unwrap_or_default();

    if let Some(template_path) = args.seed_template.as_deref() {
        let template = std::fs::read_to_string(template_path)
            .with_context(|| format!("read template {}", template_path.display()))?;
        let seeded = bootstrap::seed(&template, &document, &args.language)?;
        println!("{seeded}");
        return Ok(());
    }

    if args.once {
        let snapshot = session.synthesize(&document);
        println!("{}", wire::encode(&Message::Text(snapshot)));
        return Ok(());
    }

    let path = args
        .path
        .clone()
        .context("a document path is required unless --once or --list-languages is given")?;

    let (tx, rx) = wire::channel();
    let render_thread = std::thread::spawn(move || {
        let mut bridge = SyncBridge::new(TerminalCanvas::new());
        for payload in rx.iter() {
            match wire::decode(&payload) {
                Ok(msg) => bridge.apply_message(msg),
                Err(e) => warn!(target: "bridge.wire", error = %e, "payload_dropped"),
            }
        }
        debug!(target: "bridge.wire", "receive_loop_closed");
    });

    let result = watch_loop(&path, &mut session, &tx);
    drop(tx);
    if render_thread.join().is_err() {
        error!(target: "runtime", "render_thread_panicked");
    }
    result
}
