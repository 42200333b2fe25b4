//! Console, JSON and Markdown renderings of a theme report.
use anyhow::Result;
use colored::Colorize;
use lodge_theme::{CalendarEntry, LodgeTheme, Month, SeasonalTheme};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
pub struct ThemeReport<'a> {
    pub generated_at: String,
    pub month: Month,
    pub season: SeasonalTheme,
    pub lodges: Vec<&'a LodgeTheme>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<&'a [CalendarEntry]>,
}

pub fn generate_json_report<W: Write>(writer: &mut W, report: &ThemeReport<'_>) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, report)?;
    writeln!(writer)?;
    Ok(())
}

/// Escape text for a Markdown table cell.
fn md_cell(text: &str) -> String {
    text.replace('|', "\\|").replace('\n', " ")
}

pub fn generate_markdown_report<W: Write>(writer: &mut W, report: &ThemeReport<'_>) -> Result<()> {
    writeln!(writer, "# Lodge Theme Report")?;
    writeln!(writer)?;
    writeln!(writer, "**Generated:** {}", report.generated_at)?;
    writeln!(writer)?;
    writeln!(writer, "## Season (month {})", report.month)?;
    writeln!(writer)?;
    writeln!(writer, "| Field | Value |")?;
    writeln!(writer, "|-------|-------|")?;
    writeln!(writer, "| name | {} |", report.season.name)?;
    writeln!(writer, "| primary | `{}` |", report.season.primary)?;
    writeln!(writer, "| accent | `{}` |", report.season.accent)?;
    writeln!(writer, "| gradient | `{}` |", report.season.gradient)?;
    writeln!(
        writer,
        "| description | {} |",
        md_cell(report.season.description)
    )?;
    match &report.season.banner {
        Some(banner) => writeln!(
            writer,
            "| banner | {} ({}) |",
            md_cell(&banner.text),
            banner.kind.as_str()
        )?,
        None => writeln!(writer, "| banner | none |")?,
    }

    if !report.lodges.is_empty() {
        writeln!(writer)?;
        writeln!(writer, "## Lodges")?;
        writeln!(writer)?;
        writeln!(writer, "| Id | Name | Primary | Light | Dark | Background |")?;
        writeln!(writer, "|----|------|---------|-------|------|------------|")?;
        for lodge in &report.lodges {
            writeln!(
                writer,
                "| {} | {} | `{}` | `{}` | `{}` | `{}` |",
                lodge.id, lodge.name, lodge.primary, lodge.light, lodge.dark, lodge.bg
            )?;
        }
    }

    if let Some(calendar) = report.calendar {
        writeln!(writer)?;
        writeln!(writer, "## Calendar")?;
        writeln!(writer)?;
        writeln!(writer, "| Month | Season | Banner |")?;
        writeln!(writer, "|-------|--------|--------|")?;
        for entry in calendar {
            let banner = entry
                .theme
                .banner
                .as_ref()
                .map_or("-", |b| b.kind.as_str());
            writeln!(writer, "| {} | {} | {} |", entry.month, entry.theme.name, banner)?;
        }
    }
    Ok(())
}

pub fn generate_console_report<W: Write>(writer: &mut W, report: &ThemeReport<'_>) -> Result<()> {
    writeln!(
        writer,
        "{} {}",
        format!("🏔  Month {}:", report.month).bright_cyan().bold(),
        report.season.name.as_str().bold()
    )?;
    writeln!(writer, "   {}", report.season.description)?;
    writeln!(
        writer,
        "   primary {}  accent {}  gradient {}",
        report.season.primary, report.season.accent, report.season.gradient
    )?;
    if let Some(banner) = &report.season.banner {
        let line = format!("   [{}] {}", banner.kind.as_str(), banner.text);
        match banner.kind {
            lodge_theme::BannerKind::Info => writeln!(writer, "{}", line.blue())?,
            lodge_theme::BannerKind::Warning => writeln!(writer, "{}", line.yellow())?,
        }
    }

    for lodge in &report.lodges {
        writeln!(
            writer,
            "{} {} - {} (primary {}, bg {})",
            "🏠".green(),
            lodge.name.bold(),
            lodge.description,
            lodge.primary,
            lodge.bg
        )?;
    }

    if let Some(calendar) = report.calendar {
        writeln!(writer, "{}", "📅 Calendar".bright_yellow().bold())?;
        for entry in calendar {
            writeln!(writer, "   {:>2}  {}", entry.month.number(), entry.theme.name)?;
        }
    }
    Ok(())
}
