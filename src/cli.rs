//! Command-line arguments and the interactive browse loop.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use gg_app::usecases::{BrowseController, FetchOutcome, SessionView};
use gg_app::App;
use gg_core::{DownloadStatus, MediaId, MediaRecord, PermissionState};
use gg_platform::terminal::read_line;
use tokio::sync::watch;
use tracing::{debug, info};

use crate::bootstrap::config::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "gifgrid", version, about = "Browse, download and share GIFs from the terminal")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// API key (overrides the config file and GIFGRID_API_KEY)
    #[arg(long, value_name = "KEY")]
    pub api_key: Option<String>,

    /// Directory downloads are written to
    #[arg(long, value_name = "DIR")]
    pub documents_dir: Option<PathBuf>,

    /// Grant storage access up front instead of asking on first download
    #[arg(long)]
    pub grant_storage: bool,
}

impl Cli {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            api_key: self.api_key.clone(),
            documents_dir: self.documents_dir.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    More,
    Search(String),
    Clear,
    List,
    Download(usize),
    Share(usize),
    Play(usize),
    Tasks,
    Help,
    Quit,
}

const HELP: &str = "\
commands:
  more            load the next page
  search <text>   search (empty text goes back to trending)
  clear           back to trending
  list            show loaded items
  download <n>    save item n to the documents directory
  share <n>       share item n
  play <n>        toggle the animated preview of item n
  tasks           show downloads
  quit";

pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim_start();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest),
        None => (line.trim_end(), ""),
    };

    let index = |rest: &str| -> Result<usize, String> {
        rest.trim()
            .parse::<usize>()
            .map_err(|_| format!("{word} expects an item number, got {:?}", rest.trim()))
    };

    match word {
        "more" | "m" => Ok(Command::More),
        // The text is passed on as typed, spaces included.
        "search" | "s" => Ok(Command::Search(rest.to_string())),
        "clear" => Ok(Command::Clear),
        "list" | "ls" => Ok(Command::List),
        "download" | "dl" => index(rest).map(Command::Download),
        "share" => index(rest).map(Command::Share),
        "play" => index(rest).map(Command::Play),
        "tasks" => Ok(Command::Tasks),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        other => Err(format!("unknown command {other:?}, try help")),
    }
}

pub fn status_line(view: &SessionView) -> String {
    let mut line = match view.mode {
        gg_core::QueryMode::Trending => format!("trending: {} items", view.results.len()),
        gg_core::QueryMode::Search => {
            format!("search {:?}: {} items", view.query, view.results.len())
        }
    };
    if view.loading {
        line.push_str(" (loading)");
    }
    line
}

fn list_lines(view: &SessionView, playing: &HashSet<MediaId>) -> Vec<String> {
    view.results
        .iter()
        .enumerate()
        .map(|(i, record)| {
            let is_playing = playing.contains(record.id());
            let marker = if is_playing { "▶" } else { "❚❚" };
            format!(
                "{:>3} {} {} {}",
                i + 1,
                marker,
                record.id(),
                record.preview(is_playing).url()
            )
        })
        .collect()
}

/// Items are numbered from 1 in `list`.
fn record_at(view: &SessionView, n: usize) -> Option<MediaRecord> {
    n.checked_sub(1).and_then(|i| view.results.get(i)).cloned()
}

async fn render_status(mut views: watch::Receiver<SessionView>) {
    while views.changed().await.is_ok() {
        let line = status_line(&views.borrow_and_update());
        println!("{line}");
    }
}

pub async fn run(app: App) -> anyhow::Result<()> {
    let controller = app.browse_controller();
    let renderer = tokio::spawn(render_status(controller.subscribe()));
    spawn_fetch(&controller, true);

    let download = Arc::new(app.download_media());
    let share = app.share_media();
    let gate = app.permission_gate();
    let tracker = app.download_tracker();
    let mut playing: HashSet<MediaId> = HashSet::new();

    println!("{HELP}");
    while let Some(line) = read_line("> ".to_string()).await? {
        if line.trim().is_empty() {
            continue;
        }
        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{message}");
                continue;
            }
        };
        debug!(?command, "command");

        match command {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::More => spawn_fetch(&controller, false),
            Command::Search(text) => controller.search_changed(text),
            Command::Clear => controller.search_changed(""),
            Command::List => {
                let view = controller.view();
                println!("{}", status_line(&view));
                for line in list_lines(&view, &playing) {
                    println!("{line}");
                }
            }
            Command::Play(n) => match record_at(&controller.view(), n) {
                Some(record) => {
                    let id = record.id().clone();
                    if !playing.remove(&id) {
                        playing.insert(id);
                    }
                    let is_playing = playing.contains(record.id());
                    println!("{n}: {}", record.preview(is_playing).url());
                }
                None => println!("no item {n}"),
            },
            Command::Download(n) => match record_at(&controller.view(), n) {
                Some(record) => {
                    // The prompt reads stdin, so it runs before the
                    // transfer moves to the background.
                    if gate.state() == PermissionState::Unknown {
                        gate.prefetch().await;
                    }
                    let download = Arc::clone(&download);
                    tokio::spawn(async move {
                        if let Err(err) = download.execute(&record).await {
                            debug!(error = %err, "download ended with an error");
                        }
                    });
                }
                None => println!("no item {n}"),
            },
            Command::Share(n) => match record_at(&controller.view(), n) {
                Some(record) => {
                    if let Err(err) = share.execute(&record).await {
                        debug!(error = %err, "share ended with an error");
                    }
                }
                None => println!("no item {n}"),
            },
            Command::Tasks => {
                let tasks = tracker.list();
                if tasks.is_empty() {
                    println!("no downloads yet");
                }
                for task in tasks {
                    let status = match &task.status {
                        DownloadStatus::Pending => "pending".to_string(),
                        DownloadStatus::InFlight => "downloading".to_string(),
                        DownloadStatus::Succeeded => "done".to_string(),
                        DownloadStatus::Failed(reason) => format!("failed: {reason}"),
                    };
                    println!("{} {} {}", task.media_id, task.target.display(), status);
                }
            }
        }
    }

    controller.unmount();
    renderer.abort();
    info!("browse loop finished");
    Ok(())
}

/// Fetches run in the background so the prompt stays usable.
fn spawn_fetch(controller: &Arc<BrowseController>, initial: bool) {
    let controller = Arc::clone(controller);
    tokio::spawn(async move {
        let outcome = if initial {
            controller.mount().await
        } else {
            controller.end_reached().await
        };
        match outcome {
            FetchOutcome::Skipped => println!("still loading"),
            other => debug!(initial, ?other, "fetch finished"),
        }
    });
}
