use std::{
    collections::BTreeMap,
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    sync::Arc,
    time::Duration,
};

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use moodwall::Clock as _;

#[derive(Parser, Debug)]
#[command(name = "moodwall", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize one wallpaper and write it to a file.
    Render(RenderArgs),
    /// Replay recorded detector frames through a session and report what would be shown.
    Replay(ReplayArgs),
    /// Print the mood style table as JSON.
    Styles,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Mood label (happy, sad, angry, surprised, fearful, disgusted, neutral).
    #[arg(long)]
    mood: String,

    #[arg(long, default_value_t = 1920)]
    width: u32,

    #[arg(long, default_value_t = 1080)]
    height: u32,

    /// Blob-placement seed. Defaults to the current unix second.
    #[arg(long)]
    seed: Option<u32>,

    #[arg(long, value_enum, default_value_t = FormatChoice::Jpeg)]
    format: FormatChoice,

    /// Optional JSON config (synth section applies).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output image path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// JSON array of detector frames.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Logical viewport size as WIDTHxHEIGHT.
    #[arg(long, default_value = "1280x720", value_parser = parse_viewport)]
    viewport: (f64, f64),

    /// Device pixel ratio.
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Simulated time between frames, in milliseconds.
    #[arg(long, default_value_t = 33)]
    frame_ms: u64,

    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Jpeg,
    Png,
}

impl From<FormatChoice> for moodwall::ImageFormat {
    fn from(f: FormatChoice) -> Self {
        match f {
            FormatChoice::Jpeg => moodwall::ImageFormat::Jpeg,
            FormatChoice::Png => moodwall::ImageFormat::Png,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Replay(args) => cmd_replay(args),
        Command::Styles => cmd_styles(),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_viewport(s: &str) -> Result<(f64, f64), String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got \"{s}\""))?;
    let w: f64 = w.trim().parse().map_err(|e| format!("width: {e}"))?;
    let h: f64 = h.trim().parse().map_err(|e| format!("height: {e}"))?;
    Ok((w, h))
}

fn load_config(path: Option<&Path>) -> anyhow::Result<moodwall::MoodwallConfig> {
    match path {
        Some(p) => Ok(moodwall::MoodwallConfig::from_json_path(p)?),
        None => Ok(moodwall::MoodwallConfig::default()),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let mood: moodwall::MoodCategory = args.mood.parse()?;
    let canvas = moodwall::Canvas::new(args.width, args.height)?;
    let mut synth = load_config(args.config.as_deref())?.synth;
    synth.format = args.format.into();

    let seed = match args.seed {
        Some(s) => s,
        None => moodwall::seed_for_unix_secs(moodwall::SystemClock::new().unix_secs()),
    };

    let wallpaper = moodwall::synthesize(mood, canvas, seed, &synth)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &wallpaper.image.bytes)
        .with_context(|| format!("write image '{}'", args.out.display()))?;

    eprintln!(
        "wrote {} ({mood}, {canvas}, seed {seed})",
        args.out.display()
    );
    Ok(())
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let cfg = load_config(args.config.as_deref())?;

    let f = File::open(&args.in_path)
        .with_context(|| format!("open frames '{}'", args.in_path.display()))?;
    let frames: Vec<moodwall::DetectionFrame> = serde_json::from_reader(BufReader::new(f))
        .with_context(|| "parse detection frames JSON")?;

    let clock = Arc::new(moodwall::ManualClock::new(
        moodwall::SystemClock::new().unix_secs(),
    ));
    let (w, h) = args.viewport;
    let viewport = moodwall::Viewport::new(w, h, args.dpr);
    let surface = moodwall::RecordingSurface::new();
    let mut session =
        moodwall::MoodSession::with_synthesizer(cfg, surface, viewport, clock.clone())?;

    if let Some(b) = session.start()? {
        print_backdrop("start", &b);
    }

    for (i, frame) in frames.iter().enumerate() {
        clock.advance(Duration::from_millis(args.frame_ms));
        let outcome = session.on_frame(frame)?;
        if let Some(change) = outcome.mood_changed() {
            println!("frame {i}: mood-changed {} -> {}", change.from, change.to);
        }
        if let Some(b) = &outcome.presented {
            print_backdrop(&format!("frame {i}"), b);
        }
        if let Some(b) = session.poll()? {
            print_backdrop(&format!("frame {i}"), &b);
        }
    }

    println!(
        "stable mood: {} ({} wallpapers cached)",
        session.stable_mood(),
        session.trigger().cache().len()
    );
    Ok(())
}

fn print_backdrop(label: &str, b: &moodwall::Backdrop) {
    let img = &b.wallpaper.image;
    println!(
        "{label}: presented {} {}x{} {} {} bytes overlay={}",
        b.mood,
        img.width,
        img.height,
        img.format.mime_type(),
        img.bytes.len(),
        b.css_overlay()
    );
}

fn cmd_styles() -> anyhow::Result<()> {
    let table: BTreeMap<&str, &moodwall::MoodStyle> = moodwall::MoodCategory::ALL
        .iter()
        .map(|m| (m.as_str(), moodwall::style_for(*m)))
        .collect();
    let json = serde_json::to_string_pretty(&table).with_context(|| "serialize style table")?;
    println!("{json}");
    Ok(())
}
