use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::{QuestionLoader, QuestionSource};
use tracing_subscriber::EnvFilter;
use ui::{App, UiApp, build_app_context};

#[derive(Parser, Debug)]
#[command(name = "topic-shuffle", about = "Shuffled flash-card quiz with translation and tip hints")]
struct Args {
    /// Question payload: a local path, a file:// URL, or an http(s) URL.
    #[arg(long, env = "QUIZ_SOURCE", default_value = QuestionSource::DEFAULT)]
    source: String,

    /// Window title.
    #[arg(long, env = "QUIZ_TITLE", default_value = "Topic Shuffle")]
    title: String,
}

struct DesktopApp {
    title: String,
    loader: Arc<QuestionLoader>,
}

impl UiApp for DesktopApp {
    fn window_title(&self) -> String {
        self.title.clone()
    }

    fn question_loader(&self) -> Arc<QuestionLoader> {
        Arc::clone(&self.loader)
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn run() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let source = QuestionSource::parse(&args.source)
        .with_context(|| format!("invalid --source value: {}", args.source))?;
    tracing::info!(%source, "starting quiz");

    let app: Arc<dyn UiApp> = Arc::new(DesktopApp {
        title: args.title.clone(),
        loader: Arc::new(QuestionLoader::new(source)),
    });
    let context = build_app_context(&app);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(args.title)
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err:#}");
        std::process::exit(2);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_payload() {
        let args = Args::try_parse_from(["topic-shuffle"]).unwrap();
        if std::env::var_os("QUIZ_SOURCE").is_none() {
            assert_eq!(args.source, "questions.json");
        }
        if std::env::var_os("QUIZ_TITLE").is_none() {
            assert_eq!(args.title, "Topic Shuffle");
        }
    }

    #[test]
    fn source_flag_accepts_urls() {
        let args =
            Args::try_parse_from(["topic-shuffle", "--source", "https://example.com/q.json"])
                .unwrap();
        let source = QuestionSource::parse(&args.source).unwrap();
        assert!(matches!(source, QuestionSource::Url(_)));
    }
}
