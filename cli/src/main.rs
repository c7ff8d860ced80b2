//! unrtf CLI - extract HTML from Outlook RTF/TNEF message bodies

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};

use unrtf::{detect_format_from_path, extract_line, extract_lines, tokenize, JsonFormat};

#[derive(Parser)]
#[command(name = "unrtf")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Extract the HTML document embedded in RTF-encoded text", long_about = None)]
struct Cli {
    /// Input RTF file
    #[arg(value_name = "FILE")]
    input: Option<PathBuf>,

    /// Output HTML file
    #[arg(value_name = "OUTPUT")]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract the embedded HTML document
    #[command(alias = "extract")]
    Html {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Dump the fragment stream of each line as JSON
    Tokens {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Dump a single 0-based line only
        #[arg(long)]
        line: Option<usize>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show format information about an RTF file
    Info {
        /// Input RTF file
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Some(Commands::Html { input, output }) => cmd_html(&input, output.as_deref()),
        Some(Commands::Tokens {
            input,
            line,
            compact,
        }) => cmd_tokens(&input, line, compact),
        Some(Commands::Info { input }) => cmd_info(&input),
        None => {
            // Default behavior: extract if input is provided
            if let Some(input) = cli.input {
                cmd_html(&input, cli.output.as_deref())
            } else {
                println!("{}", "Usage: unrtf <FILE> [OUTPUT]".yellow());
                println!("       unrtf --help for more information");
                Ok(())
            }
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_html(input: &Path, output: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    detect_format_from_path(input)?;
    let text = read_input(input)?;
    let lines: Vec<&str> = text.lines().collect();

    let pb = ProgressBar::new(lines.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} lines")
            .unwrap()
            .progress_chars("#>-"),
    );

    let mut html = String::new();
    for piece in extract_lines(pb.wrap_iter(lines.iter())) {
        html.push_str(&piece?);
    }
    pb.finish_and_clear();

    match output {
        Some(path) => {
            fs::write(path, &html)?;
            println!(
                "{} {} ({} bytes)",
                "Wrote".green().bold(),
                path.display(),
                html.len()
            );
        }
        None => print!("{html}"),
    }
    Ok(())
}

fn cmd_tokens(
    input: &Path,
    line: Option<usize>,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    detect_format_from_path(input)?;
    let text = read_input(input)?;
    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    for (index, source) in text.lines().enumerate() {
        if line.is_some_and(|wanted| wanted != index) {
            continue;
        }
        if source.chars().all(char::is_whitespace) {
            continue;
        }
        let fragments = tokenize(source).map_err(|e| unrtf::Error::Line {
            line: index,
            source: Box::new(e),
        })?;
        let entry = serde_json::json!({
            "line": index,
            "fragments": serde_json::to_value(&fragments)?,
        });
        let rendered = match format {
            JsonFormat::Pretty => serde_json::to_string_pretty(&entry)?,
            JsonFormat::Compact => serde_json::to_string(&entry)?,
        };
        println!("{rendered}");
    }
    Ok(())
}

fn cmd_info(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = detect_format_from_path(input)?;
    let text = read_input(input)?;

    let mut total = 0usize;
    let mut content_lines = 0usize;
    let mut html_bytes = 0usize;
    for line in text.lines() {
        total += 1;
        if line.chars().all(char::is_whitespace) {
            continue;
        }
        if let Ok(html) = extract_line(line) {
            if !html.is_empty() {
                content_lines += 1;
                html_bytes += html.len();
            }
        }
    }

    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    println!("{}: {}", "Lines".bold(), total);
    println!("{}: {}", "Lines with HTML content".bold(), content_lines);
    println!("{}: {}", "Extracted HTML bytes".bold(), html_bytes);
    Ok(())
}

fn read_input(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    let data = fs::read(path)?;
    log::debug!("read {} bytes from {}", data.len(), path.display());
    Ok(String::from_utf8_lossy(&data).into_owned())
}
