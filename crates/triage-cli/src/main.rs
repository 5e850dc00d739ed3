use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::{ColoredString, Colorize};

use triage_core::{
    alert_subject, compose_alert_now, AnalysisReport, Config, LabelCatalog, LabelSet,
    LanguageDescriptor, LocationFix, UrgencyLevel, SUPPORTED_LANGUAGES,
};
use triage_llm::{Analyzer, AnalysisOutcome, GeminiProvider, ImagePayload};

#[derive(Parser)]
#[command(name = "triage-cli")]
#[command(about = "Turn a photographed sign, note, or injury into a responder-ready incident report")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one image and print the localized report
    Analyze {
        /// Path to the image file (jpg, png, gif, bmp, webp)
        image: PathBuf,

        /// Target language code for the report
        #[arg(long, default_value = "en")]
        lang: String,

        /// Responder position as "lat,lon", included in the alert
        #[arg(long)]
        location: Option<String>,
    },
    /// List supported target languages
    Languages,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze {
            image,
            lang,
            location,
        } => analyze(&image, &lang, location.as_deref()).await,
        Commands::Languages => {
            for language in SUPPORTED_LANGUAGES {
                println!("{}  {}", language.code.cyan(), language.display_name);
            }
            Ok(())
        }
    }
}

async fn analyze(image_path: &Path, lang: &str, location: Option<&str>) -> anyhow::Result<()> {
    let config = Config::new();
    let api_key = match config.credential() {
        Ok(key) => key.to_string(),
        Err(e) => {
            // Advisory, not an exception: no request is attempted.
            println!("{} {}", "⚠".yellow().bold(), e.to_string().yellow());
            println!(
                "{}",
                "Get a key from https://aistudio.google.com/app/apikey".yellow()
            );
            return Ok(());
        }
    };

    let target = LanguageDescriptor::find(lang).with_context(|| {
        let codes: Vec<&str> = SUPPORTED_LANGUAGES.iter().map(|l| l.code).collect();
        format!(
            "unsupported language code {lang:?}; supported codes: {}",
            codes.join(", ")
        )
    })?;

    let extension = image_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    let mime_type = ImagePayload::mime_for_extension(extension)
        .with_context(|| format!("unsupported image format {extension:?}"))?;
    let bytes = std::fs::read(image_path)
        .with_context(|| format!("failed to read {}", image_path.display()))?;
    let image = ImagePayload::from_bytes(&bytes, mime_type);

    let fix = location.and_then(parse_location);

    let mut provider = GeminiProvider::new(api_key);
    if let Some(base) = &config.api_base {
        provider = provider.with_base_url(base.as_str());
    }
    if let Some(model) = &config.model {
        provider = provider.with_model(model.as_str());
    }

    println!("{}", "Analyzing image...".cyan());
    let analyzer = Analyzer::new(provider);
    let outcome = analyzer.analyze(&image, target).await;

    let labels = LabelCatalog::get(target.code);
    match &outcome {
        AnalysisOutcome::Failed(failure) => {
            println!("{} {}", "✗".red().bold(), failure.message.red());
        }
        AnalysisOutcome::Parsed(report) => {
            render_report(report, labels);
            maybe_escalate(report, fix.as_ref());
        }
        AnalysisOutcome::Degraded { report, .. } => {
            println!(
                "{}",
                "Best-effort result: the model reply was not valid JSON".yellow()
            );
            render_report(report, labels);
            maybe_escalate(report, fix.as_ref());
        }
    }

    Ok(())
}

fn render_report(report: &AnalysisReport, labels: &LabelSet) {
    let level = report.urgency_level;
    let urgency_label = labels.get_or(&format!("urgency.{}", level.as_str()), level.as_str());
    println!();
    println!(
        "{}: {}",
        labels.get_or("urgency_level", "Urgency Level").bold(),
        urgency_colored(level, urgency_label)
    );

    if !report.detected_text.is_empty() {
        println!(
            "{} ({}): {}",
            labels.get_or("detected_text", "Detected Text").bold(),
            report.detected_language,
            report.detected_text
        );
    }
    if !report.translation.is_empty() {
        println!(
            "{}: {}",
            labels.get_or("translation", "Translation").bold(),
            report.translation
        );
    }
    if !report.medical_keywords.is_empty() {
        println!(
            "{}: {}",
            labels.get_or("medical_keywords", "Medical Keywords").bold(),
            report.medical_keywords.join(", ").red()
        );
    }
    if !report.predicted_conditions.is_empty() {
        println!(
            "{}:",
            labels
                .get_or("predicted_conditions", "Possible Conditions")
                .bold()
        );
        for condition in &report.predicted_conditions {
            println!(
                "  - {} ({}): {}",
                condition.condition,
                condition.probability.as_str(),
                condition.reasoning
            );
        }
    }
    if !report.context.is_empty() {
        println!(
            "{}: {}",
            labels.get_or("context", "Context").bold(),
            report.context
        );
    }
    if !report.suggested_response.is_empty() {
        println!(
            "{}: {}",
            labels
                .get_or("suggested_response", "Suggested Response")
                .bold(),
            report.suggested_response.green()
        );
    }
    if !report.additional_notes.is_empty() {
        println!(
            "{}: {}",
            labels.get_or("additional_notes", "Notes").bold(),
            report.additional_notes
        );
    }
}

fn urgency_colored(level: UrgencyLevel, label: &str) -> ColoredString {
    let text = label.to_uppercase();
    match level {
        UrgencyLevel::Low => text.green(),
        UrgencyLevel::Medium => text.yellow(),
        UrgencyLevel::High => text.truecolor(255, 140, 0),
        UrgencyLevel::Critical => text.red().bold(),
    }
}

fn maybe_escalate(report: &AnalysisReport, fix: Option<&LocationFix>) {
    if !report.urgency_level.is_critical() {
        return;
    }
    println!();
    println!("{}", alert_subject().red().bold());
    println!("{}", compose_alert_now(report, fix));
}

// "lat,lon" → fix; malformed input degrades to no fix and never blocks
// the analysis or the alert.
fn parse_location(raw: &str) -> Option<LocationFix> {
    let (lat, lon) = raw.split_once(',')?;
    match (lat.trim().parse::<f64>(), lon.trim().parse::<f64>()) {
        (Ok(latitude), Ok(longitude)) => Some(LocationFix {
            latitude,
            longitude,
            accuracy: 0.0,
        }),
        _ => {
            log::warn!("ignoring malformed --location {raw:?}");
            None
        }
    }
}
