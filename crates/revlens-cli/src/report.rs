//! Console output for analysis, history, and markdown reports.

use chrono::Utc;
use revlens_core::AnalyzedReview;
use revlens_sentiment::{AnalysisReport, HistoryEntry};

/// Longest review excerpt shown in a table cell.
const EXCERPT_CHARS: usize = 80;

fn join_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

/// Escape pipes and flatten newlines so `text` stays inside one table cell.
pub(crate) fn table_cell(text: &str) -> String {
    text.replace('|', "\\|").replace(['\r', '\n'], " ")
}

/// Shorten `text` to [`EXCERPT_CHARS`] characters and make it table-safe.
pub(crate) fn excerpt(text: &str) -> String {
    let mut out: String = text.chars().take(EXCERPT_CHARS).collect();
    if text.chars().count() > EXCERPT_CHARS {
        out.push_str("...");
    }
    table_cell(&out)
}

pub(crate) fn print_buy_link(link: Option<&str>) {
    match link {
        Some(url) => println!("Buy: {url}"),
        None => println!("Buy: no marketplace listing found"),
    }
}

pub(crate) fn print_analysis(report: &AnalysisReport, product_filter: Option<&str>) {
    let Some(verdict) = &report.verdict else {
        println!(
            "no collected reviews to analyze{}; run `collect` first",
            product_filter
                .filter(|p| !p.is_empty())
                .map(|p| format!(" for product '{p}'"))
                .unwrap_or_default()
        );
        return;
    };

    println!("Final verdict: {verdict}");
    println!(
        "Breakdown: {} positive, {} negative, {} neutral",
        report.counts.positive, report.counts.negative, report.counts.neutral
    );
    println!("Pros: {}", join_or_dash(&report.pros));
    println!("Cons: {}", join_or_dash(&report.cons));
    println!(
        "Saved {} new analyzed rows ({} already stored)",
        report.persisted.saved, report.persisted.skipped
    );
    println!();
    print_rows(&report.reviews);
}

pub(crate) fn print_history(entry: Option<&HistoryEntry>) {
    let Some(entry) = entry else {
        println!("no analysis history yet; run `analyze` first");
        return;
    };

    println!("Last analyzed product: {}", entry.product);
    println!("Final verdict: {}", entry.verdict);
    println!("Pros: {}", join_or_dash(&entry.pros));
    println!("Cons: {}", join_or_dash(&entry.cons));
    println!();
    print_rows(&entry.reviews);
}

fn print_rows(rows: &[AnalyzedReview]) {
    println!("{:<10}{:<30}REVIEW", "SENTIMENT", "CONS");
    for row in rows {
        println!(
            "{:<10}{:<30}{}",
            row.sentiment.as_str(),
            join_or_dash(&row.cons),
            excerpt(&row.review)
        );
        for suggestion in &row.improvements {
            println!("{:<40}-> {suggestion}", "");
        }
    }
}

/// Render analyzed rows as a markdown document.
pub(crate) fn render_markdown(rows: &[AnalyzedReview], product_filter: Option<&str>) -> String {
    use std::fmt::Write as _;

    let now = Utc::now().format("%Y-%m-%d %H:%M UTC");
    let filter_label = product_filter.unwrap_or("All products");

    let mut out = String::new();
    let _ = writeln!(out, "# Review Sentiment Report");
    let _ = writeln!(out);
    let _ = writeln!(out, "**Generated**: {now}");
    let _ = writeln!(out, "**Filter**: {filter_label}");
    let _ = writeln!(out, "**Reviews**: {}", rows.len());
    let _ = writeln!(out);
    let _ = writeln!(out, "---");
    let _ = writeln!(out);
    let _ = writeln!(out, "| Product | Sentiment | Pros | Cons | Review |");
    let _ = writeln!(out, "|---------|-----------|------|------|--------|");
    for row in rows {
        let _ = writeln!(
            out,
            "| {} | {} | {} | {} | {} |",
            table_cell(&row.product),
            row.sentiment,
            table_cell(&join_or_dash(&row.pros)),
            table_cell(&join_or_dash(&row.cons)),
            excerpt(&row.review)
        );
    }
    out
}
