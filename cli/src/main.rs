//! synopsis CLI - writes the project synopsis DOCX

use std::path::Path;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;

use synopsis::render::{self, DocumentStats, JsonFormat, RenderOptions};
use synopsis::Document;

#[derive(Parser)]
#[command(name = "synopsis")]
#[command(author = "iyulab")]
#[command(version)]
#[command(
    about = "Write the College Event & Placement Management System synopsis as DOCX",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Write the synopsis DOCX into the current directory (default)
    Generate,

    /// Show the block structure of a DOCX file
    Inspect {
        /// Input DOCX file
        #[arg(value_name = "FILE")]
        input: std::path::PathBuf,
    },

    /// Print the synopsis content without writing a file
    Preview {
        /// Output format
        #[arg(long, value_enum, default_value = "markdown")]
        format: PreviewFormat,

        /// Include YAML frontmatter (Markdown only)
        #[arg(short, long)]
        frontmatter: bool,

        /// Keep Markdown special characters unescaped (Markdown only)
        #[arg(long)]
        no_escape: bool,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show version information
    Version,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum PreviewFormat {
    /// Markdown with hard line breaks
    Markdown,
    /// Plain text
    Text,
    /// Document model as JSON
    Json,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        None | Some(Commands::Generate) => cmd_generate(),
        Some(Commands::Inspect { input }) => cmd_inspect(&input),
        Some(Commands::Preview {
            format,
            frontmatter,
            no_escape,
            compact,
        }) => cmd_preview(format, frontmatter, no_escape, compact),
        Some(Commands::Version) => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_generate() -> Result<(), Box<dyn std::error::Error>> {
    let path = synopsis::generate()?;
    log::info!("synopsis written to {}", path.display());
    println!("{} {}", "Saved to".green(), path.display());
    Ok(())
}

fn cmd_inspect(input: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let format = synopsis::detect_format_from_path(input)?;
    let doc = synopsis::read_file(input)?;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "File".bold(), input.display());
    println!("{}: {}", "Format".bold(), format);
    print_metadata(&doc);

    println!();
    println!("{}", "Blocks".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    for (index, (kind, first_line)) in render::outline(&doc).iter().enumerate() {
        println!("{:>3} {:<10} {}", index, kind.dimmed(), first_line);
    }

    let stats = DocumentStats::collect(&doc);
    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());
    println!("{}: {}", "Blocks".bold(), stats.block_count);
    for (level, count) in stats.headings_by_level.iter().enumerate() {
        if *count == 0 {
            continue;
        }
        let label = if level == 0 {
            "Title headings".to_string()
        } else {
            format!("Level {} headings", level)
        };
        println!("{}: {}", label.bold(), count);
    }
    println!("{}: {}", "Paragraphs".bold(), stats.paragraph_count);
    println!("{}: {}", "Empty paragraphs".bold(), stats.empty_paragraph_count);
    println!("{}: {}", "Bullet lines".bold(), stats.bullet_line_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn print_metadata(doc: &Document) {
    let metadata = &doc.metadata;
    if let Some(ref title) = metadata.title {
        println!("{}: {}", "Title".bold(), title);
    }
    if let Some(ref subject) = metadata.subject {
        println!("{}: {}", "Subject".bold(), subject);
    }
    if let Some(ref creator) = metadata.creator {
        println!("{}: {}", "Creator".bold(), creator);
    }
    if let Some(revision) = metadata.revision {
        println!("{}: {}", "Revision".bold(), revision);
    }
    if let Some(ref created) = metadata.created {
        println!("{}: {}", "Created".bold(), created);
    }
    if let Some(ref modified) = metadata.modified {
        println!("{}: {}", "Modified".bold(), modified);
    }
}

fn cmd_preview(
    format: PreviewFormat,
    frontmatter: bool,
    no_escape: bool,
    compact: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = synopsis::synopsis()?;

    let output = match format {
        PreviewFormat::Markdown => {
            let options = RenderOptions::new()
                .with_frontmatter(frontmatter)
                .with_escaping(!no_escape);
            render::to_markdown(&doc, &options)?
        }
        PreviewFormat::Text => render::to_text(&doc),
        PreviewFormat::Json => {
            let json_format = if compact {
                JsonFormat::Compact
            } else {
                JsonFormat::Pretty
            };
            render::to_json(&doc, json_format)?
        }
    };

    println!("{}", output);
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "synopsis".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Project synopsis DOCX generator");
    println!();
    println!("Output: {}", synopsis::OUTPUT_FILE_NAME.dimmed());
    println!("License: MIT");
}
