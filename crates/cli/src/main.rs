//! CLI tool for compiling lyrics into slide operation batches.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use slides_core::{
    publish, DeckCompiler, GenerateRequest, RecordingRenderer, SlideOperation, SlideStyle,
    SlideStyleOverride,
};
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

/// Compile song lyrics into a slide deck operation batch.
#[derive(Parser, Debug)]
#[command(name = "slides-compile")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Lyrics file, verses separated by blank lines ("-" reads stdin)
    input: PathBuf,

    /// JSON file with style overrides (camelCase SlideStyle fields)
    #[arg(short, long)]
    style: Option<PathBuf>,

    /// Default style profile the overrides are merged over
    #[arg(long, value_enum, default_value_t = Profile::Default)]
    profile: Profile,

    /// Id of the renderer's placeholder slide to delete
    #[arg(long)]
    placeholder: Option<String>,

    /// Presentation title (used with --dry-run)
    #[arg(short, long)]
    title: Option<String>,

    /// Run the full publish flow against an in-memory renderer
    #[arg(long)]
    dry_run: bool,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Profile {
    /// Arial, 24pt, auto-fit
    Default,
    /// Times New Roman, bold, centered, auto-fit
    Worship,
}

impl Profile {
    fn style(self) -> SlideStyle {
        match self {
            Profile::Default => SlideStyle::default(),
            Profile::Worship => SlideStyle::worship(),
        }
    }
}

/// Body of a `batchUpdate` call.
#[derive(Serialize)]
struct BatchUpdateBody<'a> {
    requests: &'a [SlideOperation],
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    }

    let lyrics = read_lyrics(&args.input)?;
    let overrides = args.style.as_deref().map(read_style).transpose()?;
    let compiler = DeckCompiler::new().with_default_style(args.profile.style());

    let output = if args.dry_run {
        let mut request = GenerateRequest::new(lyrics);
        request.presentation_title = args.title.clone();
        request.style = overrides;

        let mut renderer = RecordingRenderer::new();
        let response = publish(&mut renderer, &compiler, &request)
            .context("Failed to publish presentation")?;

        if args.verbose {
            eprintln!("Published {} slides", response.slide_count);
        }
        to_json(&response, args.pretty)?
    } else {
        let plan = compiler
            .compile(&lyrics, overrides.as_ref(), args.placeholder.as_deref())
            .context("Failed to compile lyrics")?;

        if args.verbose {
            eprintln!(
                "Compiled {} slides into {} operations",
                plan.slide_count,
                plan.batch.len()
            );
        }
        to_json(&BatchUpdateBody { requests: &plan.batch }, args.pretty)?
    };

    match &args.output {
        Some(path) => {
            write_output(path, &output)?;
            if args.verbose {
                eprintln!("Written to: {}", path.display());
            }
        }
        None => println!("{}", output),
    }

    Ok(())
}

/// Read lyrics from a file, or from stdin when the path is `-`.
fn read_lyrics(path: &Path) -> Result<String> {
    let mut lyrics = String::new();

    if path.as_os_str() == "-" {
        io::stdin()
            .read_to_string(&mut lyrics)
            .context("Failed to read lyrics from stdin")?;
    } else {
        File::open(path)
            .with_context(|| format!("Failed to open {}", path.display()))?
            .read_to_string(&mut lyrics)
            .with_context(|| format!("Failed to read {}", path.display()))?;
    }

    Ok(lyrics)
}

/// Load style overrides from a JSON file.
fn read_style(path: &Path) -> Result<SlideStyleOverride> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open style file {}", path.display()))?;
    parse_style(file).with_context(|| format!("Invalid style file {}", path.display()))
}

fn parse_style<R: Read>(reader: R) -> Result<SlideStyleOverride> {
    Ok(serde_json::from_reader(reader)?)
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Write output to a file.
fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }

    let mut file =
        File::create(path).with_context(|| format!("Failed to create {}", path.display()))?;

    file.write_all(content.as_bytes())
        .with_context(|| format!("Failed to write to {}", path.display()))?;
    file.write_all(b"\n")
        .with_context(|| format!("Failed to write to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_style_subset() {
        let style = parse_style(r##"{"fontSize": 36, "isBold": true}"##.as_bytes()).unwrap();
        assert_eq!(style.font_size, Some(36.0));
        assert_eq!(style.is_bold, Some(true));
        assert_eq!(style.font_family, None);
    }

    #[test]
    fn test_parse_style_rejects_garbage() {
        assert!(parse_style("not json".as_bytes()).is_err());
    }

    #[test]
    fn test_batch_body_shape() {
        let plan = DeckCompiler::new().compile("Hello", None, None).unwrap();
        let json = to_json(&BatchUpdateBody { requests: &plan.batch }, false).unwrap();
        assert!(json.starts_with(r#"{"requests":[{"createSlide":"#));
    }

    #[test]
    fn test_profiles() {
        assert_eq!(Profile::Default.style(), SlideStyle::default());
        assert!(Profile::Worship.style().is_centered);
    }

    #[test]
    fn test_args_parse() {
        let args = Args::try_parse_from([
            "slides-compile",
            "song.txt",
            "--profile",
            "worship",
            "--placeholder",
            "p1",
            "--pretty",
        ])
        .unwrap();
        assert_eq!(args.profile, Profile::Worship);
        assert_eq!(args.placeholder.as_deref(), Some("p1"));
        assert!(args.pretty && !args.dry_run);
    }
}
