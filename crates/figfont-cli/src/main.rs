use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use figfont::{FontRegistry, LayoutMode, PrintDirection, Renderer};
use log::LevelFilter;

mod fonts;

#[derive(Parser)]
#[command(name = "figfont", about = "FIGlet banner renderer")]
struct Cli {
    /// Log parsing and layout details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render text as a banner
    Render {
        /// Bundled font name or path to a font file
        #[arg(short, long, default_value = "standard")]
        font: String,
        /// Override the font's layout mode
        #[arg(long, value_enum)]
        layout: Option<LayoutArg>,
        /// Lay the text out right to left
        #[arg(long)]
        rtl: bool,
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// List bundled fonts
    List,
    /// Inspect font metadata
    Inspect {
        /// Bundled font name or path to a font file
        font: String,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum LayoutArg {
    Full,
    Kerning,
    Smushing,
}

impl From<LayoutArg> for LayoutMode {
    fn from(arg: LayoutArg) -> Self {
        match arg {
            LayoutArg::Full => LayoutMode::FullWidth,
            LayoutArg::Kerning => LayoutMode::Kerning,
            LayoutArg::Smushing => LayoutMode::Smushing,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut logger = env_logger::Builder::from_default_env();
    if cli.verbose {
        logger.filter_level(LevelFilter::Debug);
    }
    logger.init();

    let registry = FontRegistry::new();
    match cli.command {
        Cmd::Render {
            font,
            layout,
            rtl,
            text,
        } => {
            let font = fonts::resolve(&registry, &font)?;
            let mut renderer = Renderer::new(&font);
            if let Some(layout) = layout {
                renderer = renderer.layout_mode(layout.into());
            }
            if rtl {
                renderer = renderer.print_direction(PrintDirection::RightToLeft);
            }
            println!("{}", renderer.render(&text.join(" ")));
        }
        Cmd::List => {
            for name in registry.names() {
                println!("{name}");
            }
        }
        Cmd::Inspect { font } => {
            let font = fonts::resolve(&registry, &font)?;
            println!("FIGfont: {}", font.name());
            println!("  Height: {} (baseline {})", font.height(), font.baseline());
            println!("  Hard-blank: {:?}", font.hard_blank());
            println!(
                "  Layout: {:#x} ({:?})",
                font.layout().bits(),
                font.layout().mode()
            );
            println!("  Direction: {:?}", font.direction());
            println!(
                "  Defined characters: {} required, {} code-tagged",
                font.required_glyph_count(),
                font.tagged_glyph_count()
            );
            println!("  Max width: {}", font.max_width());
            for comment in font.comments() {
                println!("  # {comment}");
            }
        }
    }
    Ok(())
}
