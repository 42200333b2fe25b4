mod reports;

use anyhow::{Context, Result, bail};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use lodge_theme::{
    LodgeId, LodgeTheme, LodgeThemeResolver, Month, MonthSource, ResolverConfig,
    SeasonCalendar, SeasonalThemeResolver, SystemClock,
};
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::{Path, PathBuf};

use reports::{
    ThemeReport, generate_console_report, generate_json_report, generate_markdown_report,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored human-readable output
    Console,
    /// Pretty-printed JSON
    Json,
    /// Markdown tables
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "lodge-tester", version = "0.1.0")]
#[command(about = "Resolve and inspect seasonal and lodge themes for the lodge website")]
struct Args {
    /// Month to resolve (1-12); defaults to the current local month
    #[arg(long)]
    month: Option<Month>,

    /// Lodges to include (comma-separated ids, `all`, or `none`)
    #[arg(long, default_value = "all")]
    lodge: String,

    /// Also print the twelve-month season calendar
    #[arg(long)]
    calendar: bool,

    /// Output report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long)]
    output: Option<PathBuf>,

    /// Resolver config JSON file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the banner text from the config
    #[arg(long)]
    banner_text: Option<String>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = load_config(args.config.as_deref(), args.banner_text.as_deref())?;
    let resolver = SeasonalThemeResolver::with_config(config);
    let month = resolve_month(args.month);
    let lodges = select_lodges(&args.lodge)?;
    let calendar = args
        .calendar
        .then(|| SeasonCalendar::with_resolver(&resolver));

    let report = ThemeReport {
        generated_at: Utc::now().to_rfc3339(),
        month,
        season: resolver.resolve(month),
        lodges,
        calendar: calendar.as_ref().map(SeasonCalendar::entries),
    };
    log::info!(
        "resolved month {month} to {} with {} lodge(s)",
        report.season.name,
        report.lodges.len()
    );

    let mut output_target = OutputTarget::new(args.output.clone())?;
    match args.report {
        ReportFormat::Console => {
            announce_banner(&mut output_target)?;
            generate_console_report(&mut output_target, &report)?;
        }
        ReportFormat::Json => generate_json_report(&mut output_target, &report)?,
        ReportFormat::Markdown => generate_markdown_report(&mut output_target, &report)?,
    }
    output_target.flush_inner()?;

    if let Some(path) = &args.output {
        println!("📄 Report written to {}", path.display());
    }
    Ok(())
}

fn init_logging(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    let _ = builder.try_init();
}

fn announce_banner(out: &mut dyn Write) -> std::io::Result<()> {
    writeln!(out, "{}", "🏔  Lodge Theme Tester".bright_cyan().bold())?;
    writeln!(out, "{}", "=========================".cyan())
}

fn load_config(path: Option<&Path>, banner_text: Option<&str>) -> Result<ResolverConfig> {
    let config = match path {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            ResolverConfig::from_json(&raw)
                .with_context(|| format!("failed to load config {}", path.display()))?
        }
        None => ResolverConfig::default_config(),
    };
    match banner_text {
        Some(text) => config
            .with_banner_text(text)
            .context("invalid --banner-text"),
        None => Ok(config),
    }
}

fn resolve_month(arg: Option<Month>) -> Month {
    arg.unwrap_or_else(|| {
        let month = SystemClock.current_month();
        log::debug!("no --month given, using local month {month}");
        month
    })
}

fn select_lodges(arg: &str) -> Result<Vec<&'static LodgeTheme>> {
    let tokens = split_csv(arg);
    match tokens.as_slice() {
        [] => bail!("invalid --lodge: no lodge ids given"),
        [only] if only == "all" => {
            return Ok(LodgeThemeResolver::all().map(|(_, theme)| theme).collect());
        }
        [only] if only == "none" => return Ok(Vec::new()),
        _ => {}
    }
    if let Some(keyword) = tokens.iter().find(|t| *t == "all" || *t == "none") {
        bail!("invalid --lodge: `{keyword}` cannot be combined with other ids");
    }
    let mut ids: Vec<LodgeId> = tokens
        .iter()
        .map(|token| token.parse::<LodgeId>())
        .collect::<Result<_, _>>()
        .context("invalid --lodge")?;
    ids.sort_unstable();
    ids.dedup();
    Ok(ids.into_iter().map(LodgeThemeResolver::resolve).collect())
}

fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_lowercase)
        .collect()
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
