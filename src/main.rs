use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tui_carousel::config::Config;
use tui_carousel::item::load_items;
use tui_carousel::logging::init_tracing;
use tui_carousel::ui::app::App;
use tui_carousel::ui::carousel::{Carousel, CarouselProps, DefaultSelected};
use tui_carousel::ui::icons::IconStyle;
use tui_carousel::ui::runtime;

/// Browse a list of items in a terminal carousel.
#[derive(Debug, Parser)]
#[command(name = "tui-carousel", version, about)]
struct Cli {
    /// JSON array of items: [{"id": "...", "data": {"title": ..., "main_image": {...}}}]
    items: PathBuf,

    /// Initial position (number or numeric string; invalid values select the first item)
    #[arg(long)]
    default_selected: Option<String>,

    /// Render item titles
    #[arg(long)]
    show_title: bool,

    /// Config file (default: ~/.config/tui-carousel/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Use ASCII navigation glyphs
    #[arg(long)]
    ascii: bool,
}

impl Cli {
    /// File props with command-line overrides applied.
    fn props(&self, config: &Config) -> CarouselProps {
        let mut props = config.carousel.props();
        if let Some(raw) = &self.default_selected {
            props.default_selected = DefaultSelected::from(raw.as_str());
        }
        props.show_title |= self.show_title;
        props
    }

    fn icon_style(&self, config: &Config) -> IconStyle {
        if self.ascii {
            IconStyle::Ascii
        } else {
            config.icons.style
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref()).context("Failed to open log file")?;

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    config.page.global_style()?.install()?;
    let theme = config.theme.theme()?;
    let items = load_items(&cli.items)?;
    let props = cli.props(&config);

    tracing::info!(
        items = items.len(),
        default_selected = %props.default_selected,
        show_title = props.show_title,
        "Starting carousel"
    );

    let carousel = Carousel::new(items, props);
    let app = App::new(carousel, theme, cli.icon_style(&config).icon_set());
    runtime::run(app).context("Terminal UI failed")?;
    Ok(())
}
