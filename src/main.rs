use anyhow::{bail, Context, Result};
use clap::Parser;
use tracing::info;

use prompt_amplifier::{place_near_tray, Config, Rect, Size};

#[derive(Parser)]
#[command(name = "prompt-amplifier")]
#[command(about = "diagnostics for the prompt amplifier tray popover")]
struct Cli {
    /// print the active configuration
    #[arg(long)]
    print_config: bool,

    /// print where the config file lives
    #[arg(long)]
    config_path: bool,

    /// compute where the popover would open
    #[arg(long, requires_all = ["tray", "screen"])]
    place: bool,

    /// tray icon bounds as x,y,width,height
    #[arg(long, value_name = "x,y,w,h", value_parser = parse_rect)]
    tray: Option<Rect>,

    /// window size as width,height (defaults to the configured size)
    #[arg(long, value_name = "w,h", value_parser = parse_size)]
    window: Option<Size>,

    /// usable screen area as width,height
    #[arg(long, value_name = "w,h", value_parser = parse_size)]
    screen: Option<Size>,
}

fn parse_numbers<const N: usize>(raw: &str) -> Result<[f64; N]> {
    let parts = raw
        .split(',')
        .map(|p| p.trim().parse::<f64>().with_context(|| format!("not a number: {:?}", p)))
        .collect::<Result<Vec<_>>>()?;
    match <[f64; N]>::try_from(parts) {
        Ok(values) => Ok(values),
        Err(parts) => bail!("expected {} comma separated values, got {}", N, parts.len()),
    }
}

fn parse_rect(raw: &str) -> Result<Rect> {
    let [x, y, width, height] = parse_numbers::<4>(raw)?;
    Ok(Rect::new(x, y, width, height))
}

fn parse_size(raw: &str) -> Result<Size> {
    let [width, height] = parse_numbers::<2>(raw)?;
    Ok(Size::new(width, height))
}

fn main() -> Result<()> {
    // initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "prompt_amplifier=info".into()),
        )
        .init();

    info!("starting prompt-amplifier v{}", env!("CARGO_PKG_VERSION"));

    let cli = Cli::parse();

    if cli.config_path {
        println!("{}", Config::config_path()?.display());
        return Ok(());
    }

    let config = Config::load_or_create()?;

    if cli.print_config {
        print!("{}", toml::to_string_pretty(&config)?);
        return Ok(());
    }

    if cli.place {
        let (Some(tray), Some(screen)) = (cli.tray, cli.screen) else {
            bail!("--place needs --tray and --screen");
        };
        let window = cli.window.unwrap_or_else(|| config.window.size());
        let position = place_near_tray(tray, window, screen, config.window.gap);

        println!("\nplacement");
        println!("========================================");
        println!("tray:   {},{} {}x{}", tray.x, tray.y, tray.width, tray.height);
        println!("window: {}x{}", window.width, window.height);
        println!("screen: {}x{}", screen.width, screen.height);
        println!("gap:    {}", config.window.gap);
        println!("result: x={} y={}", position.x, position.y);
        println!("========================================\n");
        return Ok(());
    }

    // default: show configuration summary
    println!("\nprompt amplifier");
    println!("========================================");
    println!("version: {}", env!("CARGO_PKG_VERSION"));
    println!("config: {:?}", Config::config_path()?);
    println!("\nconfiguration:");
    println!("  tray: {} ({})", config.tray.title, config.tray.tooltip);
    println!(
        "  window: {}x{}, gap {}",
        config.window.width, config.window.height, config.window.gap
    );
    println!("  hide on blur: {}", config.window.hide_on_blur);
    println!("  save as: {}", config.save.default_file_name);

    println!("\nusage:");
    println!("  --print-config                         dump the active config");
    println!("  --config-path                          show the config location");
    println!("  --place --tray x,y,w,h --screen w,h    dry-run window placement");
    println!("========================================\n");

    Ok(())
}
