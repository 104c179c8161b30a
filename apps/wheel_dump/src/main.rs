use anyhow::Context;
use astrolabe::chart::{load_chart_input_from_json, ChartInput, ChartKind, ProcessDate, Step};
use astrolabe::layout::ChartLayout;
use astrolabe::session::{
    ChartRequest, ChartSession, GeoPosition, HoroscopeService, RefreshOutcome, SessionError,
};
use astrolabe::viewport::{fit_to_viewport, FixedViewport, HeadlessCanvas};
use async_trait::async_trait;
use chrono::NaiveDateTime;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::path::{Path, PathBuf};

const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Kind {
    Natal,
    Transit,
    SolarReturn,
    LunarReturn,
    Compare,
    SevenGovernors,
}

impl From<Kind> for ChartKind {
    fn from(kind: Kind) -> Self {
        match kind {
            Kind::Natal => ChartKind::Natal,
            Kind::Transit => ChartKind::Transit,
            Kind::SolarReturn => ChartKind::SolarReturn,
            Kind::LunarReturn => ChartKind::LunarReturn,
            Kind::Compare => ChartKind::Compare,
            Kind::SevenGovernors => ChartKind::SevenGovernors,
        }
    }
}

/// Lay out a chart wheel from precomputed positions and print it as JSON.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Chart positions as returned by the calculation service (JSON).
    #[arg(long)]
    input: PathBuf,

    /// Wheel settings TOML (default: configs/wheel.toml, else built-in defaults).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Chart kind; defaults to the kind recorded in the input file.
    #[arg(long, value_enum)]
    kind: Option<Kind>,

    /// Viewport width in px. Shrinks the wheel and reports the zoom factor.
    #[arg(long)]
    viewport: Option<f64>,

    /// Native date, "YYYY-MM-DD HH:MM:SS".
    #[arg(long, default_value = "2000-01-01 12:00:00")]
    native_date: String,

    /// Process date, "YYYY-MM-DD HH:MM:SS". Defaults to the native date.
    #[arg(long)]
    process_date: Option<String>,

    /// Move the process date by this many days before drawing.
    #[arg(long, default_value_t = 0)]
    step_days: i64,

    #[arg(long, default_value_t = 0.0)]
    geo_long: f64,

    #[arg(long, default_value_t = 0.0)]
    geo_lat: f64,

    /// Write the JSON here instead of stdout.
    #[arg(long)]
    out: Option<PathBuf>,
}

/// Serves every request from one positions file.
struct FileService {
    path: PathBuf,
}

#[async_trait]
impl HoroscopeService for FileService {
    async fn fetch(&self, request: &ChartRequest) -> Result<ChartInput, SessionError> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| SessionError::Upstream(format!("{}: {}", self.path.display(), e)))?;
        let mut input = load_chart_input_from_json(&text)?;
        if input.kind != request.kind {
            log::debug!("Drawing {:?} positions as {:?}", input.kind, request.kind);
            input.kind = request.kind;
        }
        Ok(input)
    }
}

#[derive(Debug, Serialize)]
struct Dump {
    generation: u64,
    process_date: String,
    /// Canvas zoom applied after drawing, if the viewport was narrower
    zoom: Option<f64>,
    layout: ChartLayout,
}

fn parse_date(text: &str) -> anyhow::Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, DATE_FORMAT)
        .with_context(|| format!("Invalid date {:?} (expected {})", text, DATE_FORMAT))
}

fn input_kind(path: &Path) -> anyhow::Result<ChartKind> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let input = load_chart_input_from_json(&text)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    Ok(input.kind)
}

async fn run(args: &Args) -> anyhow::Result<Dump> {
    let settings = match &args.config {
        Some(path) => astrolabe_config::load_chart_settings_from(path)?,
        None => astrolabe_config::load_chart_settings_or_default()?,
    };

    let kind = match args.kind {
        Some(kind) => ChartKind::from(kind),
        None => input_kind(&args.input)?,
    };
    let native_date = parse_date(&args.native_date)?;
    let process_date = match &args.process_date {
        Some(text) => parse_date(text)?,
        None => native_date,
    };
    let request = ChartRequest {
        kind,
        native_date,
        process_date: ProcessDate(process_date),
        geo: GeoPosition {
            long: args.geo_long,
            lat: args.geo_lat,
        },
    };

    let margin = settings.viewport_margin;
    let session = ChartSession::new(
        FileService {
            path: args.input.clone(),
        },
        settings,
        request,
    );
    // The seven-governors wheel is resized before layout; western wheels are
    // zoomed after drawing. Never both.
    let resize_first = kind == ChartKind::SevenGovernors;
    if let Some(width) = args.viewport.filter(|_| resize_first) {
        let wheel = session.resize(width).await;
        log::info!("Wheel fitted to {}px, font {}px", wheel.size, wheel.font_size);
    }

    let outcome = if args.step_days != 0 {
        session.step(Step::days(args.step_days)).await?
    } else {
        session.refresh().await?
    };
    let layout = match outcome {
        RefreshOutcome::Drawn(layout) => layout,
        RefreshOutcome::Stale { generation, latest } => {
            anyhow::bail!("Refresh {} superseded by {}", generation, latest)
        }
    };

    let zoom = if resize_first {
        None
    } else {
        let mut canvas = HeadlessCanvas::new(layout.size, layout.size);
        fit_to_viewport(&mut canvas, &FixedViewport(args.viewport), margin).await
    };

    Ok(Dump {
        generation: session.latest_generation(),
        process_date: session.request().await.process_date.to_string(),
        zoom,
        layout,
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let dump = run(&args).await?;
    let json = serde_json::to_string_pretty(&dump)?;
    match &args.out {
        Some(path) => {
            std::fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!(
                "[wheel_dump] {:?} chart, {} labels -> {}",
                dump.layout.kind,
                dump.layout.labels.len() + dump.layout.outer_labels.len(),
                path.display()
            );
        }
        None => println!("{}", json),
    }
    Ok(())
}
