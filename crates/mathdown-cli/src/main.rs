//! Segmentation inspector: reads a document, runs the scanner, and prints
//! the resulting block tree with kinds, spans, and content previews.

use std::{env, fs, io::Read, process};

use anyhow::{Context, Result};
use mathdown_engine::{ComponentBlock, RenderMode, segment};

struct Options {
    mode: RenderMode,
    path: String,
}

impl Options {
    /// Accepts `[--inline] <file | ->`.
    fn parse(args: &[String]) -> Option<Self> {
        match args {
            [path] => Some(Self {
                mode: RenderMode::Document,
                path: path.clone(),
            }),
            [flag, path] if flag == "--inline" => Some(Self {
                mode: RenderMode::InlineOnly,
                path: path.clone(),
            }),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = Options::parse(&args) else {
        eprintln!("Usage: mathdown-cli [--inline] <file | ->");
        process::exit(2);
    };

    let input = read_input(&options.path)
        .with_context(|| format!("failed to read {}", options.path))?;
    log::info!("segmenting {} bytes from {}", input.len(), options.path);

    let blocks = segment(&input, options.mode);
    log::info!(
        "{} block(s), {} component(s)",
        blocks.len(),
        blocks.iter().map(|b| b.components.len()).sum::<usize>()
    );

    print_blocks(&blocks);
    Ok(())
}

fn read_input(path: &str) -> Result<String> {
    if path == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn print_blocks(blocks: &[ComponentBlock]) {
    for (i, block) in blocks.iter().enumerate() {
        let label = if block.is_inline_run() {
            "inline run"
        } else {
            "standalone"
        };
        println!("block {i} ({label})");
        for component in &block.components {
            println!(
                "  {:?} {}..{} {}",
                component.kind,
                component.span.start,
                component.span.end,
                preview(&component.text)
            );
        }
    }
}

/// Single-line preview of component text, truncated for display.
fn preview(text: &str) -> String {
    const MAX_CHARS: usize = 48;
    let flat = text.replace('\n', "\\n");
    if flat.chars().count() > MAX_CHARS {
        let head: String = flat.chars().take(MAX_CHARS).collect();
        format!("{head}...")
    } else {
        flat
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preview_flattens_newlines() {
        assert_eq!(preview("a\nb"), "a\\nb");
    }

    #[test]
    fn preview_truncates_long_text() {
        let long = "x".repeat(100);
        let shown = preview(&long);
        assert!(shown.ends_with("..."));
        assert_eq!(shown.chars().count(), 51);
    }

    #[test]
    fn options_parse_modes() {
        let plain = Options::parse(&["doc.md".to_string()]).unwrap();
        assert_eq!(plain.mode, RenderMode::Document);

        let inline =
            Options::parse(&["--inline".to_string(), "doc.md".to_string()]).unwrap();
        assert_eq!(inline.mode, RenderMode::InlineOnly);

        assert!(Options::parse(&[]).is_none());
    }
}
