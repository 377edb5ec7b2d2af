//! Output formatting and display logic for sitepulse

use serde::Serialize;

use crate::core::constants::{display, output_formats};
use crate::core::error::Result;
use crate::core::types::{ProbeResult, Report, Strategy};
use crate::ui::color::{Colors, colorize, status_color};

/// JSON document emitted by `--format json`
#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    generated_at: String,
    strategy: Strategy,
    success_rate: f64,
    #[serde(flatten)]
    report: &'a Report,
}

/// Announce the run before any probe starts (text format only)
pub fn display_run_start(target_count: usize, strategy: Strategy) {
    println!("Starting website status checker...");
    println!(
        "Monitoring {} site(s) ({})...\n",
        colorize(&target_count.to_string(), Colors::BOLD),
        strategy
    );
}

/// Display the report in the requested format
pub fn display_report(
    report: &Report,
    strategy: Strategy,
    output_format: &str,
    quiet: bool,
) -> Result<()> {
    match output_format {
        output_formats::JSON => println!("{}", render_json(report, strategy)?),
        output_formats::MINIMAL => print!("{}", render_minimal(report)),
        _ if quiet => {}
        _ => print!("{}", render_text(report)),
    }
    Ok(())
}

/// One `UP <url>` / `DOWN <url>` line per result, no colors
pub fn render_minimal(report: &Report) -> String {
    report
        .results
        .iter()
        .map(|r| format!("{} {}\n", r.status_label(), r.url))
        .collect()
}

/// Serialize the report together with run metadata
pub fn render_json(report: &Report, strategy: Strategy) -> Result<String> {
    let document = JsonReport {
        generated_at: chrono::Utc::now().to_rfc3339(),
        strategy,
        success_rate: report.success_rate(),
        report,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

/// Results table followed by a summary block
pub fn render_text(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("Results:\n");
    out.push_str("--------\n");
    for result in &report.results {
        out.push_str(&render_result_line(result));
        out.push('\n');
    }

    let rate_color = if report.is_all_reachable() {
        Colors::BRIGHT_GREEN
    } else {
        Colors::BRIGHT_YELLOW
    };

    out.push('\n');
    out.push_str(&format!(
        "Reachable: {}/{} ({}), unreachable: {}\n",
        report.success_count,
        report.total_count,
        colorize(&format!("{:.1}%", report.success_rate()), rate_color),
        report.failure_count
    ));
    out.push_str(&format!(
        "Average response time: {:?}\n",
        report.average_elapsed
    ));
    out.push_str(&format!(
        "\nTotal execution time: {:?}\n",
        report.wall_clock_elapsed
    ));

    out
}

fn render_result_line(result: &ProbeResult) -> String {
    let emoji = if result.reachable {
        display::SUCCESS_EMOJI
    } else {
        display::ERROR_EMOJI
    };
    let status = format!("{emoji} {}", result.status_label());
    let detail = match (result.status_code, result.error.as_deref()) {
        (Some(code), _) => format!("HTTP {code}"),
        (None, Some(err)) => err.to_string(),
        (None, None) => String::new(),
    };

    format!(
        "{:<width$} {} {} {}",
        result.url,
        colorize(&status, status_color(result.reachable)),
        colorize(&format!("{}ms", result.elapsed.as_millis()), Colors::CYAN),
        colorize(&detail, Colors::DIM),
        width = display::URL_COLUMN_WIDTH
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::summarize;
    use std::time::Duration;

    fn sample_report() -> Report {
        summarize(
            vec![
                ProbeResult::up("https://up.test", Duration::from_millis(50), 200),
                ProbeResult::down("https://down.test", Duration::from_millis(10), "connection refused"),
            ],
            Duration::from_millis(52),
        )
    }

    #[test]
    fn test_render_minimal() {
        assert_eq!(
            render_minimal(&sample_report()),
            "UP https://up.test\nDOWN https://down.test\n"
        );
    }

    #[test]
    fn test_render_minimal_empty() {
        assert_eq!(render_minimal(&summarize(vec![], Duration::ZERO)), "");
    }

    #[test]
    fn test_render_text() {
        let text = render_text(&sample_report());

        assert!(text.starts_with("Results:\n--------\n"));
        assert!(text.contains("https://up.test"));
        assert!(text.contains("✅ UP"));
        assert!(text.contains("HTTP 200"));
        assert!(text.contains("❌ DOWN"));
        assert!(text.contains("connection refused"));
        assert!(text.contains("Reachable: 1/2 (50.0%), unreachable: 1"));
        assert!(text.contains("Average response time: 30ms"));
        assert!(text.ends_with("Total execution time: 52ms\n"));
    }

    #[test]
    fn test_render_text_pads_url_column() {
        let line = render_result_line(&ProbeResult::up("http://a.b", Duration::ZERO, 200));
        assert!(line.starts_with(&format!("{:<30} ", "http://a.b")));
    }

    #[test]
    fn test_render_json() -> Result<()> {
        let json = render_json(&sample_report(), Strategy::Concurrent)?;
        let value: serde_json::Value = serde_json::from_str(&json)?;

        assert_eq!(value["strategy"], "concurrent");
        assert_eq!(value["total_count"], 2);
        assert_eq!(value["success_count"], 1);
        assert_eq!(value["failure_count"], 1);
        assert_eq!(value["average_elapsed_ms"], 30.0);
        assert_eq!(value["success_rate"], 50.0);
        assert_eq!(value["results"].as_array().map(Vec::len), Some(2));
        assert_eq!(value["results"][1]["error"], "connection refused");
        assert!(value["generated_at"].is_string());
        Ok(())
    }

    #[test]
    fn test_display_report_all_formats() -> Result<()> {
        let report = sample_report();
        for format in output_formats::ALL {
            display_report(&report, Strategy::Sequential, format, false)?;
            display_report(&report, Strategy::Sequential, format, true)?;
        }
        Ok(())
    }
}
