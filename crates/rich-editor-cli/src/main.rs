use anyhow::{Context, Result};
use rich_editor_config::Config;
use rich_editor_engine::{Editor, RecordingBackend};
use std::{env, path::PathBuf, process};

#[derive(Debug, Default, PartialEq, Eq)]
struct CliArgs {
    input: PathBuf,
    regex: Option<String>,
    words: Vec<String>,
    caret: Option<usize>,
}

impl CliArgs {
    fn has_highlight_flags(&self) -> bool {
        self.regex.is_some() || !self.words.is_empty()
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs, String> {
    let mut parsed = CliArgs::default();
    let mut input = None;
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        let mut value = |flag: &str| {
            rest.next()
                .cloned()
                .ok_or_else(|| format!("{flag} needs a value"))
        };
        match arg.as_str() {
            "--regex" => parsed.regex = Some(value("--regex")?),
            "--word" => parsed.words.push(value("--word")?),
            "--caret" => {
                let caret = value("--caret")?;
                parsed.caret = Some(
                    caret
                        .parse()
                        .map_err(|e| format!("invalid caret {caret:?}: {e}"))?,
                );
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag {flag}")),
            path if input.is_none() => input = Some(PathBuf::from(path)),
            extra => return Err(format!("unexpected argument {extra}")),
        }
    }

    parsed.input = input.ok_or_else(|| "missing input file".to_string())?;
    Ok(parsed)
}

fn run(args: CliArgs) -> Result<()> {
    let html = std::fs::read_to_string(&args.input)
        .with_context(|| format!("reading {}", args.input.display()))?;

    let config = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            log::warn!("ignoring config: {e}");
            Config::default()
        }
    };

    let mut editor = Editor::new(RecordingBackend::default());
    if let Some(placeholder) = &config.placeholder {
        editor.set_placeholder_text(placeholder.clone());
    }

    // Flags replace the configured highlight settings wholesale
    if args.has_highlight_flags() {
        editor.set_highlight_options(args.regex.clone(), Some(args.words.clone()));
    } else if let Some(highlight) = config.highlight() {
        editor.set_highlight_options(highlight.regex.clone(), Some(highlight.words.clone()));
    }

    editor.set_html(&html);
    editor.load();

    if let Some(caret) = args.caret {
        editor
            .select_absolute(caret, caret)
            .context("placing caret")?;
        editor.handle_input();
    }

    let tick = editor.tick();
    log::info!("tick: {tick:?}");

    println!("{}", editor.html());
    match editor.absolute_selection() {
        Ok(Some(selection)) => println!("selection: {}..{}", selection.anchor, selection.focus),
        Ok(None) => println!("selection: none"),
        Err(e) => println!("selection: {e}"),
    }
    if editor.is_placeholder_visible() {
        println!("placeholder: {}", editor.placeholder_text());
    }
    println!("messages:");
    for message in editor.take_queued_messages() {
        println!("  {message}");
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let parsed = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("Error: {e}");
            eprintln!(
                "Usage: {} <file.html> [--regex PATTERN] [--word WORD]... [--caret INDEX]",
                args.first().map_or("rich-editor-cli", String::as_str)
            );
            eprintln!(
                "Highlight defaults are read from {}",
                Config::config_path().display()
            );
            process::exit(1);
        }
    };

    run(parsed)
}
