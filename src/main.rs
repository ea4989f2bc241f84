use anyhow::Context;
use clap::Parser;
use course_registrar::utils::logger::{self, LogFormat};
use course_registrar::utils::validation::Validate;
use course_registrar::{CliConfig, Registrar, RegistrarConfig, RegistrarError, RunSummary};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    let format = if cli.json { LogFormat::Json } else { LogFormat::Compact };
    logger::init_logger(format, cli.verbose).context("initialising logger")?;

    tracing::info!("Starting registrar");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match load_config(&cli.config) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Configuration failed: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    let mut registrar = match Registrar::from_config(&config) {
        Ok(registrar) => registrar,
        Err(e) => {
            tracing::error!("Catalog setup failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if cli.dry_run {
        tracing::info!("DRY RUN MODE - requests are not applied");
        print_catalog(&registrar, config.requests.len());
        return Ok(());
    }

    let summary = match registrar.run(&config.requests) {
        Ok(summary) => summary,
        Err(e) => {
            tracing::error!("Run aborted: {} (Category: {:?})", e, e.category());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    };

    if cli.json {
        let report = serde_json::json!({
            "term": config.term_name(),
            "summary": summary,
            "roster": registrar.roster(),
        });
        let rendered = serde_json::to_string_pretty(&report)
            .map_err(RegistrarError::from)
            .context("rendering JSON report")?;
        println!("{}", rendered);
    } else {
        print_report(&registrar, &summary);
    }

    Ok(())
}

fn load_config(path: &str) -> course_registrar::Result<RegistrarConfig> {
    tracing::info!("Loading registration script from: {}", path);
    let config = RegistrarConfig::from_file(path)?;
    config.validate()?;
    Ok(config)
}

fn print_catalog(registrar: &Registrar, pending_requests: usize) {
    println!("📋 Catalog:");
    for course in registrar.catalog().iter() {
        let status = if course.is_offered() { "offered" } else { "not offered" };
        match course.prerequisite() {
            Some(prerequisite) => println!("  {} ({}, requires {})", course, status, prerequisite),
            None => println!("  {} ({})", course, status),
        }
    }
    println!("  Students: {}", registrar.students().len());
    println!("  Pending requests: {}", pending_requests);
}

fn print_report(registrar: &Registrar, summary: &RunSummary) {
    for result in &summary.outcomes {
        println!(
            "  student {} {:?} {}: {}",
            result.request.student, result.request.action, result.request.course, result.outcome
        );
    }
    println!(
        "✅ {} accepted, {} rejected, {} dropped",
        summary.accepted, summary.rejected, summary.dropped
    );

    println!("📋 Roster:");
    for entry in registrar.roster() {
        println!("  {} {}: {}", entry.id, entry.name, entry.courses.join(", "));
    }
}
