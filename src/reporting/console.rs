//! Console output for verdicts, notices, batch results and tips.

use crate::content::{PreventionTip, DETECTOR_TAGLINE, DETECTOR_TITLE, FOOTER, HOW_IT_WORKS};
use crate::reporting::shared::{duration, pluralize};
use crate::rules::{
    keyword_indicator, KEYWORDS, KEYWORD_WEIGHT, LINK_INDICATOR, LINK_WEIGHT, MONEY_INDICATOR,
    MONEY_WEIGHT, PHISHING_THRESHOLD,
};
use crate::types::{AnalysisResult, BatchReport, EmailReport, Notice, NoticeVariant};
use colored::Colorize;

/// Prints the detector header shown before an interactive analysis.
pub fn print_banner() {
    println!("{}", DETECTOR_TITLE.bold());
    println!("{}", DETECTOR_TAGLINE.dimmed());
    println!();
}

/// Prints the verdict card for one analysis.
pub fn print_result(result: &AnalysisResult) {
    let headline = format!("{} [{}]", result.headline(), result.badge());
    if result.is_phishing {
        println!("{}", headline.red().bold());
    } else {
        println!("{}", headline.green().bold());
    }
    println!("  {}% Confidence", result.confidence);
    println!();

    println!("{}", "Detected Indicators:".cyan());
    for indicator in &result.indicators {
        let mark = if result.is_phishing { "⚠".red() } else { "✓".green() };
        println!("  {mark} {indicator}");
    }
    println!();

    println!("{}", "Recommendation:".cyan());
    println!("  {}", result.recommendation.dimmed());
}

pub fn print_notice(notice: &Notice) {
    match notice.variant {
        NoticeVariant::Destructive => {
            eprintln!("{} {}", notice.title.red().bold(), notice.description);
        }
        NoticeVariant::Default => {
            println!("{} {}", notice.title.green().bold(), notice.description.dimmed());
        }
    }
}

/// Prints one line per email followed by a summary.
pub fn print_batch(report: &BatchReport) {
    for email in &report.emails {
        print_email_line(email);
    }
    println!();
    print_batch_summary(report);
}

fn print_email_line(email: &EmailReport) {
    let path = email.path.display();
    match (&email.result, &email.error) {
        (Some(r), _) if r.is_phishing => println!(
            "{} {path} ({}%, {} {})",
            "DANGER".red().bold(),
            r.confidence,
            r.indicators.len(),
            pluralize("indicator", r.indicators.len())
        ),
        (Some(r), _) => println!("{} {path} ({}%)", "SAFE  ".green().bold(), r.confidence),
        (None, Some(e)) => println!("{} {path}: {}", "ERROR ".yellow().bold(), e.dimmed()),
        (None, None) => println!("{} {path} (empty)", "SKIP  ".dimmed()),
    }
}

fn print_batch_summary(report: &BatchReport) {
    let total = report.emails.len();
    let elapsed = duration(report);
    let line = format!(
        "Scanned {total} {} in {elapsed:?}: {} flagged, {} skipped, {} failed",
        pluralize("email", total),
        report.flagged,
        report.skipped,
        report.failed
    );
    if report.has_phishing() {
        println!("{}", line.red().bold());
    } else {
        println!("{}", line.green().bold());
    }
}

pub fn print_tips(tips: &[PreventionTip]) {
    println!("{}", "Prevention Best Practices".green().bold());
    println!();
    for tip in tips {
        println!("{}", tip.title.bold());
        println!("  {}", tip.description.dimmed());
        for action in &tip.actions {
            println!("  {} {action}", "•".cyan());
        }
        println!();
    }
    println!("{}", "How It Works".bold());
    println!("  {}", HOW_IT_WORKS.dimmed());
    println!();
    println!("{}", FOOTER.dimmed());
}

/// Lists every rule with its weight.
pub fn print_rules() {
    println!("{}", "Indicator rules".bold());
    for keyword in KEYWORDS {
        println!("  +{KEYWORD_WEIGHT:<3} {}", keyword_indicator(keyword));
    }
    println!("  +{LINK_WEIGHT:<3} {LINK_INDICATOR} (http:// or a domain-like token)");
    println!("  +{MONEY_WEIGHT:<3} {MONEY_INDICATOR} ($ followed by digits)");
    println!();
    println!(
        "{}",
        format!("Scores above {PHISHING_THRESHOLD} are classified as phishing.").dimmed()
    );
}
