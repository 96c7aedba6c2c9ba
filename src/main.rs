mod app;
mod catalog;
mod config;
mod input;
mod library;
mod lyrics;
mod playback;
mod translate;
mod tui;

use anyhow::Context;
use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "petal", version, about = "Playlist + synced lyrics TUI player (simulated playback)")]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run the interactive TUI (default).
    Tui,
    /// Print the playlist catalog to stdout (headless).
    Playlists {
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print a playlist's songs to stdout (headless).
    Songs {
        playlist_id: String,
        /// Emit JSON instead of a table.
        #[arg(long)]
        json: bool,
    },
    /// Print a song's lyric sheet to stdout (headless).
    Lyrics {
        song_id: String,
    },
    /// Translate a song's lyrics and print them side by side (headless).
    Translate {
        song_id: String,
        /// Target language name, e.g. "French".
        language: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_level(true)
        .init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref()).context("load config")?;
    let cfg_path = match cli.config.clone() {
        Some(p) => p,
        None => config::default_config_path().context("default config path")?,
    };

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let mut terminal = tui::TerminalGuard::enter().context("init terminal")?;
            let mut app = app::App::new(cfg, cfg_path)?;
            app.run(terminal.terminal_mut()).await?;
        }
        Command::Playlists { json } => {
            let playlists = catalog::seed();
            if json {
                println!("{}", serde_json::to_string_pretty(&playlists)?);
            } else {
                for (i, p) in playlists.iter().enumerate() {
                    println!(
                        "{:02}. {}  [{}] ({} songs, id={})",
                        i + 1,
                        p.name,
                        p.color.label(),
                        p.song_count,
                        p.id
                    );
                }
            }
        }
        Command::Songs { playlist_id, json } => {
            let playlists = catalog::seed();
            let playlist = playlists
                .iter()
                .find(|p| p.id == playlist_id)
                .with_context(|| format!("no playlist with id {playlist_id}"))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&playlist.songs)?);
            } else {
                print_songs(&playlist.songs);
            }
        }
        Command::Lyrics { song_id } => {
            let song = find_song(&song_id)?;
            println!("{} — {}\n", song.title, song.artist);
            for line in &song.lyrics {
                println!("[{:02}:{:02}] {}", line.time / 60, line.time % 60, line.text);
            }
        }
        Command::Translate { song_id, language } => {
            let song = find_song(&song_id)?;
            let client = translate::TranslateClient::new(
                cfg.translator.base_url.as_deref(),
                cfg.translator.api_key.clone(),
            );
            let lines: Vec<String> = song.lyrics.iter().map(|l| l.text.clone()).collect();
            let translated = client
                .translate(&lines, &language)
                .await
                .context("translate lyrics")?;
            if translated.len() != lines.len() {
                anyhow::bail!(
                    "translation line count mismatch: got {}, expected {}",
                    translated.len(),
                    lines.len()
                );
            }
            for (original, translated) in lines.iter().zip(&translated) {
                println!("{original}");
                println!("  {translated}");
            }
        }
    }

    Ok(())
}

fn find_song(song_id: &str) -> anyhow::Result<catalog::Song> {
    catalog::seed()
        .into_iter()
        .flat_map(|p| p.songs)
        .find(|s| s.id == song_id)
        .with_context(|| format!("no song with id {song_id}"))
}

fn print_songs(songs: &[catalog::Song]) {
    for (i, s) in songs.iter().enumerate() {
        println!(
            "{:02}. {} — {}  ({:02}:{:02}, id={})",
            i + 1,
            s.title,
            s.artist,
            s.duration / 60,
            s.duration % 60,
            s.id
        );
    }
}
