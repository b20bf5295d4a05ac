mod args;

use anyhow::{Context, Result};
use clap::Parser;
use umbra_style::css;
use umbra_style::draw::DrawTarget;
use umbra_style::logging::{init_logging, LoggingConfig};
use umbra_style::scene::{DrawCmd, DrawList};

#[derive(Parser)]
#[command(name = "umbra-studio")]
#[command(about = "Inspect how a shadow value serializes, resolves and paints")]
struct Cli {
    /// Shadow value, e.g. "0 1 2 @shade, inset 1 1 #000"
    shadow: String,

    /// Theme color definition (repeatable); later definitions may use earlier names
    #[arg(long = "color", value_name = "NAME=COLOR")]
    colors: Vec<String>,

    /// Content painted behind each layer
    #[arg(long, default_value = "Aa")]
    content: String,

    /// Current point before painting; unset means the painter picks (0, 0)
    #[arg(long, value_name = "X,Y")]
    origin: Option<String>,

    /// Log filter in env_logger syntax
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(LoggingConfig {
        env_filter: cli.log.clone(),
        ..LoggingConfig::default()
    });

    let props = args::build_properties(cli.colors.as_slice())?;
    log::debug!("theme defines {} color(s)", props.len());

    let shadow = css::parse_shadow(&cli.shadow)
        .with_context(|| format!("invalid shadow value {:?}", cli.shadow))?;
    println!("declared: {}", shadow.to_css_string().as_deref().unwrap_or("none"));

    let resolved = shadow.resolve(&props).context("shadow does not resolve against the theme")?;
    println!("resolved: {}", resolved.to_css_string().as_deref().unwrap_or("none"));

    let mut list = DrawList::new();
    if let Some(origin) = cli.origin.as_deref() {
        list.move_to(args::parse_origin(origin)?);
    }
    let Ok(()) = resolved.paint_behind(&mut list, cli.content.as_str());

    println!("paint:");
    for cmd in list.commands() {
        match cmd {
            DrawCmd::Save => println!("  save"),
            DrawCmd::Restore => println!("  restore"),
            DrawCmd::Fill(fill) => println!(
                "  fill {:?} at ({}, {}) with {} blur {} spread {}",
                fill.content, fill.origin.x, fill.origin.y, fill.color, fill.radius, fill.spread
            ),
        }
    }

    Ok(())
}
