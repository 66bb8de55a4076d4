//! Application configuration from CLI arguments

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use super::config_file::ConfigFile;
use crate::content::LayoutMetrics;
use crate::core::ViewType;

/// Process exit codes
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const ERROR: i32 = 1;
    pub const INVALID: i32 = 3;
}

/// Application configuration from CLI args and config file
#[derive(Debug)]
pub struct Config {
    /// Library root folder
    pub root: PathBuf,
    pub view_type: ViewType,
    pub show_hidden: bool,
    pub mouse_enabled: bool,
    pub watch: bool,
    pub use_trash: bool,
    pub metrics: LayoutMetrics,
    /// Write logs to this file
    pub log_file: Option<PathBuf>,
}

/// What the command line asks for
#[derive(Debug)]
pub enum Command {
    Run(Config),
    Help,
    Version,
}

impl Config {
    /// Parse the process arguments. Prints help or version and exits when
    /// asked to.
    pub fn from_args() -> anyhow::Result<Self> {
        let config_file = ConfigFile::load();

        match Self::parse(env::args().skip(1), config_file)? {
            Command::Run(config) => Ok(config),
            Command::Help => {
                print_help();
                std::process::exit(exit_code::SUCCESS);
            }
            Command::Version => {
                println!("lv {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(exit_code::SUCCESS);
            }
        }
    }

    /// Parse arguments on top of config file settings. CLI arguments take
    /// precedence.
    pub fn parse(
        args: impl IntoIterator<Item = String>,
        config_file: ConfigFile,
    ) -> anyhow::Result<Command> {
        let mut args = args.into_iter();
        let mut root: Option<PathBuf> = None;
        let mut view: Option<ViewType> = None;
        let mut show_hidden: Option<bool> = None;
        let mut no_watch = false;
        let mut log_file: Option<PathBuf> = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--help" | "-h" => return Ok(Command::Help),
                "--version" | "-V" => return Ok(Command::Version),
                "--hidden" | "-a" => show_hidden = Some(true),
                "--no-watch" => no_watch = true,
                "--view" => {
                    let Some(value) = args.next() else {
                        anyhow::bail!("--view requires a value (list16, grid32, grid48, grid64)");
                    };
                    view = Some(ViewType::from_str(&value).map_err(|e| anyhow::anyhow!(e))?);
                }
                "--log-file" => {
                    let Some(file) = args.next() else {
                        anyhow::bail!("--log-file requires a file path");
                    };
                    log_file = Some(PathBuf::from(file));
                }
                path if !path.starts_with('-') => {
                    if root.is_some() {
                        anyhow::bail!("Only one library folder can be given");
                    }
                    let p = PathBuf::from(path);
                    if !p.is_dir() {
                        anyhow::bail!("Not a folder: {}", path);
                    }
                    root = Some(p.canonicalize()?);
                }
                unknown => {
                    anyhow::bail!(
                        "Unknown option: {}. Use --help for usage information.",
                        unknown
                    );
                }
            }
        }

        let root = match root {
            Some(root) => root,
            None => env::current_dir()?,
        };

        let view_type = match view {
            Some(view) => view,
            None => ViewType::from_str(&config_file.general.view).unwrap_or_else(|e| {
                tracing::warn!("config: {}", e);
                ViewType::default()
            }),
        };

        Ok(Command::Run(Self {
            root,
            view_type,
            show_hidden: show_hidden.unwrap_or(config_file.general.show_hidden),
            mouse_enabled: config_file.general.mouse_enabled,
            watch: config_file.general.watch && !no_watch,
            use_trash: config_file.general.use_trash,
            metrics: config_file.layout.metrics(),
            log_file,
        }))
    }
}

fn print_help() {
    println!(
        r#"lv - Library view: browse an asset library as tiles

USAGE:
    lv [OPTIONS] [PATH]

OPTIONS:
    --view TYPE         Initial view: list16, grid32, grid48, grid64
    -a, --hidden        Show hidden files
    --no-watch          Do not watch the library for changes
    --log-file PATH     Write logs to PATH (filter with LIBVIEW_LOG)
    -h, --help          Show this help message
    -V, --version       Show version

CONFIG FILE:
    ~/.config/libview/config.toml    Main configuration file
    ~/.config/libview/theme.toml     Color theme

KEYBINDINGS:
    Arrows/hjkl     Move selection
    Enter           Enter folder / open file
    Backspace       Parent folder
    ~               Library root
    PgUp/PgDn       Scroll
    F2              Rename
    Delete          Delete (with confirmation)
    Ctrl+C/X/V      Copy / Cut / Paste
    Ctrl+D          Duplicate
    Ctrl+N          New folder
    /               Search
    Esc             Deselect / clear search
    1-4             List, small, medium, large tiles
    Ctrl+R/F5       Refresh
    q               Quit

MOUSE:
    Click           Select (Ctrl toggles, Shift extends)
    Double-click    Enter folder / open file
    Drag            Rectangle select, or move entries onto a folder
    Wheel           Scroll"#
    );
}
