//! diagram subcommands - bulk, single file, stdin

use clap::Subcommand;
use diagram::{
    normalize_path, recognize, DiagramConfig, DiagramResponse, MermaidGenerator, RecognizeOptions,
    MAX_FILES_LIMIT,
};
use std::io::Read;

#[derive(Subcommand)]
pub enum DiagramCommands {
    /// Diagram every C# file under a folder
    Bulk {
        /// Folder path (default: SHARPMAP_ROOT or /workspace/src)
        path: Option<String>,
        /// Stop after this many diagrammed files (1-1000)
        #[arg(long)]
        max_files: Option<usize>,
        /// Exclude interfaces (currently has no effect)
        #[arg(long)]
        no_interfaces: bool,
        /// Omit <<abstract>> markers
        #[arg(long)]
        no_abstracts: bool,
        /// JSON output
        #[arg(long)]
        json: bool,
        /// Write Markdown to this file
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Diagram a single C# file
    File {
        /// File path
        path: String,
        /// Omit <<abstract>> markers
        #[arg(long)]
        no_abstracts: bool,
        /// JSON output
        #[arg(long)]
        json: bool,
    },
    /// Diagram C# text read from stdin
    Recognize {
        /// Name shown in the diagram's file comment
        #[arg(long, default_value = "stdin.cs")]
        name: String,
        /// Omit <<abstract>> markers
        #[arg(long)]
        no_abstracts: bool,
    },
}

pub fn run(cmd: DiagramCommands, config: &DiagramConfig) -> anyhow::Result<()> {
    match cmd {
        DiagramCommands::Bulk { path, max_files, no_interfaces, no_abstracts, json, output } => {
            let config = DiagramConfig {
                root: path.unwrap_or_else(|| config.root.clone()),
                max_files: max_files.unwrap_or(config.max_files),
                include_interfaces: config.include_interfaces && !no_interfaces,
                include_abstracts: config.include_abstracts && !no_abstracts,
            };
            cmd_bulk(&config, json, output.as_deref())
        }
        DiagramCommands::File { path, no_abstracts, json } => {
            let config = DiagramConfig {
                max_files: 1,
                include_abstracts: config.include_abstracts && !no_abstracts,
                ..config.clone()
            };
            cmd_file(&path, &config, json)
        }
        DiagramCommands::Recognize { name, no_abstracts } => {
            let options = RecognizeOptions {
                include_interfaces: config.include_interfaces,
                include_abstracts: config.include_abstracts && !no_abstracts,
            };
            cmd_recognize(&name, options)
        }
    }
}

fn cmd_bulk(config: &DiagramConfig, json: bool, output: Option<&str>) -> anyhow::Result<()> {
    if !(1..=MAX_FILES_LIMIT).contains(&config.max_files) {
        anyhow::bail!(
            "--max-files must be between 1 and {}, got {}",
            MAX_FILES_LIMIT,
            config.max_files
        );
    }

    let root = normalize_path(&config.root);
    let response = config.traverser().traverse(&root)?.to_response();

    if let Some(file) = output {
        std::fs::write(file, to_markdown(&response))?;
        eprintln!("Saved to: {}", file);
        return Ok(());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_text(&response);
    }
    Ok(())
}

fn cmd_file(path: &str, config: &DiagramConfig, json: bool) -> anyhow::Result<()> {
    let file = normalize_path(path);
    let response = config.traverser().traverse_file(&file)?.to_response();

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    match response.content.first() {
        Some(item) => println!("{}", item.mermaid),
        None => anyhow::bail!("No type declarations found in {}", file.display()),
    }
    Ok(())
}

fn cmd_recognize(name: &str, options: RecognizeOptions) -> anyhow::Result<()> {
    let mut text = String::new();
    std::io::stdin().read_to_string(&mut text)?;

    let statements = recognize(&text, &options);
    println!("{}", MermaidGenerator::new().generate_file_diagram(name, &statements));
    Ok(())
}

fn print_text(response: &DiagramResponse) {
    for item in &response.content {
        println!("### {}\n{}\n", item.file, item.mermaid);
    }
    println!("{}", summary(response));
}

fn to_markdown(response: &DiagramResponse) -> String {
    let mut blocks: Vec<String> = response
        .content
        .iter()
        .map(|item| format!("### {}\n{}", item.file, MermaidGenerator::fenced(&item.mermaid)))
        .collect();
    blocks.push(summary(response));
    blocks.join("\n")
}

fn summary(response: &DiagramResponse) -> String {
    let mut line = format!(
        "Processed {} file(s), scanned {}",
        response.processed, response.total_scanned
    );
    if response.truncated {
        line.push_str(&format!(" (stopped at {} files)", response.processed));
    }
    line
}
