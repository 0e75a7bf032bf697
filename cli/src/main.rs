//! paperforge CLI - compose, generate, and quality-check papers

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use paperforge::{
    load_paper, save_paper, ApiClient, ClientOptions, JsonFormat, OverallStatus, Paper,
    QualityReport, SessionState, DEFAULT_BASE_URL,
};

#[derive(Parser)]
#[command(name = "paperforge")]
#[command(version)]
#[command(about = "Generate and quality-check IEEE-style papers", long_about = None)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "PAPERFORGE_API", default_value = DEFAULT_BASE_URL)]
    api: String,

    /// Bearer token for authenticated requests
    #[arg(long, global = true, env = "PAPERFORGE_TOKEN")]
    token: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty paper file to start from
    Init {
        /// Output file
        #[arg(value_name = "FILE", default_value = "paper.json")]
        output: PathBuf,
    },

    /// Show a summary of a paper file
    Info {
        /// Paper JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Submit a paper for generation and save the resulting document
    #[command(alias = "gen")]
    Generate {
        /// Paper JSON file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output document path
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Upload a .docx document for a quality report
    Check {
        /// Document to analyze
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Print the raw report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log in and print the issued token
    Login {
        /// Account email
        email: String,

        /// Account password
        #[arg(long, env = "PAPERFORGE_PASSWORD")]
        password: String,
    },

    /// Create an account and print the issued token
    Signup {
        /// Account email
        email: String,

        /// Account password
        #[arg(long, env = "PAPERFORGE_PASSWORD")]
        password: String,

        /// Full name for the account
        #[arg(long)]
        full_name: String,
    },

    /// Check whether the current token is still accepted
    Verify,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let client = match build_client(&cli) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Init { output } => cmd_init(&output),
        Commands::Info { input } => cmd_info(&input),
        Commands::Generate { input, output } => {
            cmd_generate(&client, &input, output.as_deref()).await
        }
        Commands::Check { input, json } => cmd_check(&client, &input, json).await,
        Commands::Login { email, password } => cmd_login(&client, &email, &password).await,
        Commands::Signup {
            email,
            password,
            full_name,
        } => cmd_signup(&client, &email, &password, &full_name).await,
        Commands::Verify => cmd_verify(&client, cli.token.as_deref()).await,
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn build_client(cli: &Cli) -> paperforge::Result<ApiClient> {
    log::debug!("using backend at {}", cli.api);
    let mut options = ClientOptions::new()
        .with_base_url(cli.api.clone())
        .with_timeout(Duration::from_secs(120));
    if let Some(token) = &cli.token {
        options = options.with_token(token.clone());
    }
    ApiClient::with_options(options)
}

fn spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap(),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

fn cmd_init(output: &Path) -> Result<(), Box<dyn std::error::Error>> {
    if output.exists() {
        return Err(format!("{} already exists", output.display()).into());
    }
    save_paper(&Paper::new(), output, JsonFormat::Pretty)?;
    println!("{} {}", "Created".green().bold(), output.display());
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let paper = load_paper(input)?;

    println!("{}", "Paper Summary".green().bold());
    print_field("Title", &paper.title);
    print_field("Authors", &join_non_blank(&paper.authors));
    print_field("Affiliations", &join_non_blank(&paper.affiliations));
    print_field("Keywords", &join_non_blank(&paper.keywords));

    println!("  {:<14} {}", "Sections:".dimmed(), paper.section_count());
    for (idx, section) in paper.sections.iter().enumerate() {
        let heading = if section.body.heading.trim().is_empty() {
            format!("Section {}", idx + 1)
        } else {
            section.body.heading.clone()
        };
        if section.subsections.is_empty() {
            println!("    {} {}", "-".dimmed(), heading);
        } else {
            println!(
                "    {} {} {}",
                "-".dimmed(),
                heading,
                format!("({} subsections)", section.subsections.len()).dimmed()
            );
        }
    }

    let references = paper.references.iter().filter(|r| !r.trim().is_empty()).count();
    let appendix = paper.appendix.iter().filter(|a| !a.trim().is_empty()).count();
    println!("  {:<14} {}", "References:".dimmed(), references);
    println!("  {:<14} {}", "Appendix:".dimmed(), appendix);

    if !paper.metadata_complete() {
        println!(
            "\n{} title, at least one author, and an abstract are required before generation",
            "Note:".yellow().bold()
        );
    }
    Ok(())
}

fn print_field(name: &str, value: &str) {
    let shown = if value.trim().is_empty() { "(not set)" } else { value };
    println!("  {:<14} {}", format!("{}:", name).dimmed(), shown);
}

fn join_non_blank(values: &[String]) -> String {
    values
        .iter()
        .filter(|v| !v.trim().is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(", ")
}

async fn cmd_generate(
    client: &ApiClient,
    input: &Path,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let paper = load_paper(input)?;

    let output = output.map(|p| p.to_path_buf()).unwrap_or_else(|| {
        let stem = input.file_stem().unwrap_or_default().to_string_lossy();
        PathBuf::from(format!("{}.docx", stem))
    });

    let pb = spinner("Generating document...");
    let bytes = client.generate(&paper).await?;
    pb.finish_and_clear();

    fs::write(&output, &bytes)?;
    println!(
        "{} {} ({} bytes)",
        "Saved".green().bold(),
        output.display(),
        bytes.len()
    );
    Ok(())
}

async fn cmd_check(
    client: &ApiClient,
    input: &Path,
    raw_json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let data = fs::read(input)?;
    let filename = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or("input path has no file name")?;

    let pb = spinner("Analyzing document...");
    let report = client.check_quality(data, &filename).await?;
    pb.finish_and_clear();

    if raw_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }
    Ok(())
}

fn status_colored(status: OverallStatus) -> colored::ColoredString {
    let text = status.to_string();
    match status {
        OverallStatus::Excellent => text.green().bold(),
        OverallStatus::Good => text.cyan().bold(),
        OverallStatus::NeedsImprovement => text.yellow().bold(),
        OverallStatus::Poor => text.red().bold(),
        OverallStatus::Unknown => text.dimmed(),
    }
}

fn score_colored(score: f64) -> colored::ColoredString {
    let text = format!("{}", score);
    if score >= 85.0 {
        text.green().bold()
    } else if score >= 70.0 {
        text.cyan().bold()
    } else if score >= 50.0 {
        text.yellow().bold()
    } else {
        text.red().bold()
    }
}

fn print_report(report: &QualityReport) {
    if let Some(message) = &report.message {
        println!("{}", message);
        return;
    }

    println!("{}", "Document Quality Report".green().bold());
    println!(
        "  {:<20} {}",
        "Assessment:".dimmed(),
        status_colored(report.overall_status)
    );
    if let Some(score) = report.quality_score {
        println!("  {:<20} {}", "Quality score:".dimmed(), score_colored(score));
    }
    if !report.status_message.is_empty() {
        println!("  {:<20} {}", "Summary:".dimmed(), report.status_message);
    }

    println!("\n{}", "Statistics".green().bold());
    println!("  {:<20} {}", "Words:".dimmed(), report.word_count);
    println!("  {:<20} {}", "Sentences:".dimmed(), report.total_sentences);
    println!(
        "  {:<20} {}",
        "Avg words/sentence:".dimmed(),
        report.avg_words_per_sentence()
    );
    println!(
        "  {:<20} {}",
        "Citations found:".dimmed(),
        report.statistics.unique_citations
    );
    println!(
        "  {:<20} {}",
        "Valid citations:".dimmed(),
        report.statistics.valid_citations
    );
    println!(
        "  {:<20} {}",
        "Citation issues:".dimmed(),
        report.statistics.citation_issues
    );

    if !report.insights.is_empty() {
        println!("\n{}", "Insights".green().bold());
        for insight in &report.insights {
            let text = insight.as_str();
            let line = if text.starts_with('✓') {
                text.green()
            } else if text.starts_with('⚠') {
                text.yellow()
            } else if text.starts_with('✗') {
                text.red()
            } else {
                text.normal()
            };
            println!("  {}", line);
        }
    }

    if !report.citation_validation.is_empty() {
        println!("\n{}", "Citation Validation".green().bold());
        for (citation, valid) in &report.citation_validation {
            if *valid {
                println!("  {} {} reference found", citation, "✓".green());
            } else {
                println!("  {} {} missing reference", citation, "✗".red());
            }
        }
    }
}

async fn cmd_login(
    client: &ApiClient,
    email: &str,
    password: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = client.login(email, password).await?;
    println!("{}", "Logged in.".green().bold());
    println!("{}", session.token);
    Ok(())
}

async fn cmd_signup(
    client: &ApiClient,
    email: &str,
    password: &str,
    full_name: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = client.signup(email, password, full_name).await?;
    println!("{}", "Account created.".green().bold());
    println!("{}", session.token);
    Ok(())
}

async fn cmd_verify(
    client: &ApiClient,
    token: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    let token = token.ok_or("no token provided (use --token or PAPERFORGE_TOKEN)")?;

    match paperforge::session_state(token) {
        SessionState::Expired => {
            println!("{} token has expired", "✗".red());
            return Ok(());
        }
        SessionState::ExpiringSoon { remaining } => {
            println!(
                "{} token expires in {}m {}s",
                "⚠".yellow(),
                remaining.num_minutes(),
                remaining.num_seconds() % 60
            );
        }
        SessionState::Active => {}
    }

    let pb = spinner("Checking with the auth service...");
    let accepted = client.verify(token).await?;
    pb.finish_and_clear();

    if accepted {
        println!("{} token accepted", "✓".green());
    } else {
        println!("{} token rejected", "✗".red());
    }
    Ok(())
}
