//! Demo front-end: mounts the root layout against a JSON preference file
//! and renders pages to the terminal.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::info;

use lumen::{
    AdaptivePalette, AuthLayout, ColorMode, FileStore, HostPreference, LumenConfig,
    ManualPreference, OsPreference, OutputMode, Renderer, RootLayout, StaticOutlet, Theme,
    ThemeContext, ThemeProvider, ThemeToggle, TogglePolicy,
};

const DEFAULT_WIDTH: usize = 80;
const SIGN_IN_PAGE: &str = "Welcome back\n\nSign in to continue";

#[derive(Parser)]
#[command(name = "lumen", version, about = "Theme-aware terminal pages")]
struct Cli {
    /// YAML or JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Preference file (defaults to <config dir>/lumen/preferences.json)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Output mode: auto, term or text
    #[arg(long, global = true, default_value = "auto")]
    output: OutputMode,

    /// Column width for centered pages
    #[arg(long, global = true)]
    width: Option<usize>,

    /// Use this host preference instead of asking the OS
    #[arg(long, global = true, value_enum)]
    host: Option<HostArg>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the stored theme and the mode it resolves to
    Get,
    /// Select a theme
    Set { theme: Theme },
    /// Activate the theme toggle once
    Toggle {
        /// Flip light/dark instead of cycling through system
        #[arg(long)]
        binary: bool,
    },
    /// Render a page
    Show {
        #[arg(value_enum, default_value_t = Page::Auth)]
        page: Page,
        /// Explicit content instead of the routed page
        #[arg(long)]
        content: Option<String>,
    },
    /// Re-render the sign-in page whenever the OS preference changes
    Watch {
        #[arg(long, default_value_t = 1000)]
        interval_ms: u64,
        /// Stop after this many re-renders
        #[arg(long)]
        count: Option<usize>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Page {
    Root,
    Auth,
}

#[derive(Clone, Copy, ValueEnum)]
enum HostArg {
    Light,
    Dark,
}

impl From<HostArg> for ColorMode {
    fn from(arg: HostArg) -> Self {
        match arg {
            HostArg::Light => ColorMode::Light,
            HostArg::Dark => ColorMode::Dark,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => LumenConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => LumenConfig::default(),
    };
    let store_path = cli
        .store
        .clone()
        .or_else(default_store_path)
        .context("no config directory found; pass --store")?;
    let width = cli.width.or(config.width).unwrap_or_else(terminal_width);

    let renderer = Renderer::with_output(AdaptivePalette::default(), cli.output)?;
    let root = RootLayout::with_renderer(config.theme_config(), renderer.clone());
    let auth = AuthLayout::new(renderer)
        .with_width(width)
        .with_toggle(ThemeToggle::new(config.toggle));

    let host: Box<dyn HostPreference> = match cli.host {
        Some(mode) => Box::new(ManualPreference::new(mode.into())),
        None => Box::new(OsPreference),
    };
    info!("using preference file {}", store_path.display());
    let mut provider = root.mount(Box::new(FileStore::new(&store_path)), host);

    match cli.command {
        Command::Get => print_state(&provider),
        Command::Set { theme } => {
            provider.set_theme(theme);
            print_state(&provider);
        }
        Command::Toggle { binary } => {
            if binary {
                ThemeToggle::new(TogglePolicy::Binary).activate(&mut provider);
            } else {
                auth.activate_toggle(&mut provider);
            }
            print_state(&provider);
        }
        Command::Show { page, content } => {
            let out = match page {
                Page::Root => {
                    let outlet = StaticOutlet::new(content.unwrap_or_else(|| SIGN_IN_PAGE.into()));
                    root.render(&provider, &outlet)?
                }
                Page::Auth => {
                    let router = StaticOutlet::new(SIGN_IN_PAGE);
                    root.render(&provider, &auth.page(&router, content.as_deref()))?
                }
            };
            println!("{}", out.trim_end());
        }
        Command::Watch { interval_ms, count } => {
            watch(&root, &auth, &mut provider, Duration::from_millis(interval_ms), count)?
        }
    }
    Ok(())
}

fn watch(
    root: &RootLayout,
    auth: &AuthLayout,
    provider: &mut ThemeProvider,
    interval: Duration,
    count: Option<usize>,
) -> Result<()> {
    provider.subscribe(|change| {
        info!(
            "colour mode {} -> {} (theme {})",
            change.previous_mode, change.mode, change.current
        );
    });

    let router = StaticOutlet::new(SIGN_IN_PAGE);
    print!("{}", root.render(provider, &auth.page(&router, None))?);

    let mut renders = 0;
    while count.map_or(true, |limit| renders < limit) {
        std::thread::sleep(interval);
        if provider.host_preference_changed() {
            print!("{}", root.render(provider, &auth.page(&router, None))?);
            renders += 1;
        }
    }
    Ok(())
}

fn print_state(provider: &ThemeProvider) {
    println!(
        "{} ({}) [{}]",
        provider.theme(),
        provider.applied(),
        provider.state().storage_key
    );
}

fn default_store_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("lumen").join("preferences.json"))
}

fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(DEFAULT_WIDTH)
}
