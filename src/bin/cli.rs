use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use extguard::catalog::PermissionCatalog;
use extguard::config::Config;
use extguard::error::GuardError;
use extguard::output::OutputFormat;
use extguard::risk::RiskCategory;
use extguard::AuditOptions;

#[derive(Parser)]
#[command(
    name = "extguard",
    about = "Permission risk auditor for browser extensions",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Audit one or more extensions (directories or manifest.json files)
    Audit {
        /// Paths to extension directories or manifest files
        #[arg(default_value = ".")]
        paths: Vec<PathBuf>,

        /// Config file path
        #[arg(long, short = 'c')]
        config: Option<PathBuf>,

        /// Output format (console, json)
        #[arg(long, short = 'f', default_value = "console")]
        format: String,

        /// Risk tier at or above which to exit nonzero
        /// (safe, limited, broad, high, critical)
        #[arg(long)]
        fail_on: Option<String>,

        /// Treat the extension as a verified publisher
        #[arg(long)]
        verified: bool,

        /// Also count optional permissions the extension may request later
        #[arg(long)]
        include_optional: bool,

        /// Write output to file instead of stdout
        #[arg(long, short = 'o')]
        output: Option<PathBuf>,
    },

    /// List the built-in permission catalog
    ListPermissions {
        /// Output format (table, json)
        #[arg(long, short = 'f', default_value = "table")]
        format: String,
    },

    /// Generate a starter .extguard.toml config file
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Audit {
            paths,
            config,
            format,
            fail_on,
            verified,
            include_optional,
            output,
        } => cmd_audit(
            paths,
            config,
            format,
            fail_on,
            verified,
            include_optional,
            output,
        ),
        Commands::ListPermissions { format } => cmd_list_permissions(format),
        Commands::Init { force } => cmd_init(force),
    };

    match result {
        Ok(exit_code) => process::exit(exit_code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(e.exit_code());
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_audit(
    paths: Vec<PathBuf>,
    config: Option<PathBuf>,
    format_str: String,
    fail_on_str: Option<String>,
    verified: bool,
    include_optional: bool,
    output_path: Option<PathBuf>,
) -> Result<i32, GuardError> {
    let format = OutputFormat::from_str_lenient(&format_str).unwrap_or_else(|| {
        eprintln!("Warning: unknown format '{}', using console", format_str);
        OutputFormat::Console
    });

    let fail_on = fail_on_str.and_then(|s| {
        let tier = RiskCategory::from_str_lenient(&s);
        if tier.is_none() {
            eprintln!("Warning: unknown risk tier '{}', using config default", s);
        }
        tier
    });

    let options = AuditOptions {
        config_path: config,
        format,
        include_optional,
        verified_override: if verified { Some(true) } else { None },
        fail_on_override: fail_on,
    };

    // A batch tolerates partial failure: a path that won't load is warned
    // and skipped rather than sinking the whole run.
    let mut reports = Vec::new();
    for path in &paths {
        match extguard::audit(path, &options) {
            Ok(report) => reports.push(report),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "skipping extension that failed to load");
            }
        }
    }

    if reports.is_empty() {
        return Err(GuardError::NoManifest(
            paths
                .first()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| ".".into()),
        ));
    }

    let rendered = extguard::render_reports(&reports, format)?;
    match output_path {
        Some(out) => std::fs::write(&out, &rendered)?,
        None => print!("{}", rendered),
    }

    // Exit code: 0 = pass, 1 = a report reached the fail-on tier
    Ok(if reports.iter().all(|r| r.pass) { 0 } else { 1 })
}

fn cmd_list_permissions(format_str: String) -> Result<i32, GuardError> {
    let entries = PermissionCatalog::builtin().entries();

    match format_str.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&entries)?;
            println!("{}", json);
        }
        _ => {
            println!("{:<40} {:>6}  DESCRIPTION", "PERMISSION", "WEIGHT");
            println!("{}", "-".repeat(100));
            for entry in &entries {
                println!("{:<40} {:>6}  {}", entry.id, entry.weight, entry.description);
            }
        }
    }

    Ok(0)
}

fn cmd_init(force: bool) -> Result<i32, GuardError> {
    let path = PathBuf::from(".extguard.toml");

    if path.exists() && !force {
        eprintln!(".extguard.toml already exists. Use --force to overwrite.");
        return Ok(1);
    }

    std::fs::write(&path, Config::starter_toml())?;
    println!("Created .extguard.toml");

    Ok(0)
}
