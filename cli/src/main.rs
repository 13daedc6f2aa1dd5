//! richstack CLI - rich-text document renderer

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::{ColoredString, Colorize};

use richstack::model::{sample, Document, TextAttribute};
use richstack::render::{
    walk, ContainerUnit, Decoration, InlineUnit, JsonFormat, RenderOptions, Renderer,
    StyledFragment, UnitVisitor, VisitorAction,
};

#[derive(Parser)]
#[command(name = "richstack")]
#[command(version)]
#[command(about = "Render rich-text documents to the terminal, plain text, and JSON", long_about = None)]
struct Cli {
    #[command(flatten)]
    render: RenderArgs,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every rendering command.
#[derive(Args)]
struct RenderArgs {
    /// Merge neighbouring runs that share a style
    #[arg(long, global = true, env = "RICHSTACK_MERGE_RUNS")]
    merge_runs: bool,

    /// Drop runs with empty text
    #[arg(long, global = true, env = "RICHSTACK_SKIP_EMPTY")]
    skip_empty: bool,

    /// Quote border width
    #[arg(long, global = true, default_value = "2", env = "RICHSTACK_QUOTE_BORDER")]
    quote_border: u8,

    /// Quote padding
    #[arg(long, global = true, default_value = "8", env = "RICHSTACK_QUOTE_PADDING")]
    quote_padding: u8,
}

impl RenderArgs {
    fn options(&self) -> RenderOptions {
        RenderOptions::new()
            .with_merged_runs(self.merge_runs)
            .with_skip_empty(self.skip_empty)
            .with_quote_border(self.quote_border)
            .with_quote_padding(self.quote_padding)
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON document to the terminal with styling
    Render {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Render a JSON document to plain text
    Text {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Render a JSON document to a JSON presentation tree
    Json {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Output file (stdout if not specified)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Output compact JSON
        #[arg(long)]
        compact: bool,
    },

    /// Show document statistics
    Info {
        /// Input JSON document
        #[arg(value_name = "FILE")]
        input: PathBuf,
    },

    /// Render the built-in demo document
    Demo {
        /// Print the demo document as JSON instead of rendering it
        #[arg(long)]
        source: bool,
    },

    /// Show version information
    Version,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    let options = cli.render.options();

    let result = match cli.command {
        Commands::Render { input } => cmd_render(&input, options),
        Commands::Text { input, output } => cmd_text(&input, output.as_deref(), options),
        Commands::Json {
            input,
            output,
            compact,
        } => cmd_json(&input, output.as_deref(), compact, options),
        Commands::Info { input } => cmd_info(&input, options),
        Commands::Demo { source } => cmd_demo(source, options),
        Commands::Version => {
            cmd_version();
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}: {}", "Error".red().bold(), e);
        std::process::exit(1);
    }
}

fn cmd_render(input: &Path, options: RenderOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = richstack::parse_file(input)?;
    print_document(&doc, options);
    Ok(())
}

fn cmd_text(
    input: &Path,
    output: Option<&Path>,
    options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = richstack::parse_file(input)?;
    let text = richstack::to_text(&doc, &options);
    write_output(output, &text)
}

fn cmd_json(
    input: &Path,
    output: Option<&Path>,
    compact: bool,
    options: RenderOptions,
) -> Result<(), Box<dyn std::error::Error>> {
    let doc = richstack::parse_file(input)?;

    let format = if compact {
        JsonFormat::Compact
    } else {
        JsonFormat::Pretty
    };

    let json = richstack::to_json(&doc, &options, format)?;
    write_output(output, &json)
}

fn cmd_info(input: &Path, options: RenderOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = richstack::parse_file(input)?;
    let result = Renderer::new(options).render_with_stats(doc.blocks());
    let stats = result.stats;

    println!("{}", "Document Information".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "File".bold(), input.display());
    if let Some(ref title) = doc.title {
        println!("{}: {}", "Title".bold(), title);
    }
    println!("{}: {}", "Top-level blocks".bold(), doc.blocks().len());

    println!();
    println!("{}", "Content Statistics".cyan().bold());
    println!("{}", "─".repeat(40).dimmed());

    println!("{}: {}", "Paragraphs".bold(), stats.plain_text_blocks);
    println!("{}: {}", "Quotes".bold(), stats.quote_blocks);
    println!("{}: {}", "Max quote depth".bold(), stats.max_depth);
    println!("{}: {}", "Runs".bold(), stats.run_count);
    println!("{}: {}", "Fragments".bold(), stats.fragment_count);
    println!("{}: {}", "Words".bold(), stats.word_count);
    println!("{}: {}", "Characters".bold(), stats.char_count);

    Ok(())
}

fn cmd_demo(source: bool, options: RenderOptions) -> Result<(), Box<dyn std::error::Error>> {
    let doc = sample::demo_document();
    if source {
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print_document(&doc, options);
    }
    Ok(())
}

fn cmd_version() {
    println!("{} {}", "richstack".cyan().bold(), env!("CARGO_PKG_VERSION"));
    println!("Rich-text document renderer");
    println!();
    println!("License: MIT");
}

fn write_output(output: Option<&Path>, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = output {
        fs::write(path, content)?;
        println!("{} {}", "Saved to".green(), path.display());
    } else {
        println!("{}", content);
    }
    Ok(())
}

fn print_document(doc: &Document, options: RenderOptions) {
    if let Some(ref title) = doc.title {
        println!("{}", title.cyan().bold());
        println!("{}", "─".repeat(title.chars().count().max(3)).dimmed());
    }

    log::debug!("Drawing document with {:?}", options);
    let units = Renderer::new(options).render_document(doc);
    let mut host = TerminalHost::default();
    walk(&units, &mut host);
    for line in host.lines {
        println!("{}", line);
    }
}

/// Draws presentation units with ANSI styling.
///
/// Each open quote contributes a `│` border followed by its padding.
#[derive(Default)]
struct TerminalHost {
    gutters: Vec<String>,
    lines: Vec<String>,
}

impl TerminalHost {
    fn gutter(&self) -> String {
        self.gutters.concat()
    }

    fn quote_gutter(decoration: Decoration) -> String {
        match decoration {
            Decoration::Quote(quote) => {
                let border = "│".repeat(usize::from(quote.border_width.max(1)));
                // Terminal cells are much wider than host points; scale padding down.
                let padding = " ".repeat(usize::from(quote.padding / 4).max(1));
                format!("{}{}", border.dimmed(), padding)
            }
        }
    }
}

impl UnitVisitor for TerminalHost {
    fn visit_inline(&mut self, unit: &InlineUnit, _depth: usize) {
        let gutter = self.gutter();
        let mut line = gutter.clone();
        for fragment in unit.fragments() {
            for (i, piece) in fragment.text().split('\n').enumerate() {
                if i > 0 {
                    self.lines.push(std::mem::replace(&mut line, gutter.clone()));
                }
                line.push_str(&style_fragment(fragment, piece).to_string());
            }
        }
        self.lines.push(line);
    }

    fn enter_container(&mut self, container: &ContainerUnit, _depth: usize) -> VisitorAction {
        self.gutters.push(Self::quote_gutter(container.decoration()));
        if container.is_empty() {
            self.lines.push(self.gutter());
        }
        VisitorAction::Continue
    }

    fn leave_container(&mut self, _container: &ContainerUnit, _depth: usize) {
        self.gutters.pop();
    }
}

/// Map fragment attributes onto terminal attributes.
fn style_fragment(fragment: &StyledFragment, text: &str) -> ColoredString {
    let mut styled = ColoredString::from(text);
    if fragment.has(TextAttribute::BOLD) {
        styled = styled.bold();
    }
    if fragment.has(TextAttribute::ITALIC) {
        styled = styled.italic();
    }
    if fragment.has(TextAttribute::HEADING) {
        styled = styled.bold().underline().bright_white();
    }
    styled
}
