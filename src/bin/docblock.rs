//! Command-line interface for docblock
//!
//! Usage:
//!   docblock render `[line]` --language `<id>` [--style `<style>`] [--spacing `<n>`] [--plain]
//!   docblock inspect `[line]` --language `<id>` [--format `<stage-format>`]
//!   docblock tags --language `<id>`
//!   docblock languages
//!
//! When no line is given, the first line of stdin is used. `-v` and `-q` pick the
//! log level unless `RUST_LOG` (e.g. `RUST_LOG=docblock::parser=trace`) is set.

use clap::{Arg, ArgAction, ArgMatches, Command};
use docblock::completions;
use docblock::config::Loader;
use docblock::processor::{self, available_formats, ProcessingSpec};
use docblock::{DocblockResult, Language, Settings};
use std::io::BufRead;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn language_arg() -> Arg {
    Arg::new("language")
        .long("language")
        .short('l')
        .help("Editor language identifier (e.g. 'typescript', 'php', 'cpp')")
        .default_value("javascript")
}

fn line_arg() -> Arg {
    Arg::new("line")
        .help("Declaration line; read from stdin when omitted")
        .index(1)
}

fn cli() -> Command {
    Command::new("docblock")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Generate documentation comment templates from declaration lines")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Log recognition details to stderr")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Only log errors")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("render")
                .about("Render the comment block for a declaration")
                .arg(line_arg())
                .arg(language_arg())
                .arg(
                    Arg::new("config")
                        .long("config")
                        .short('c')
                        .help("TOML file layered over the built-in settings"),
                )
                .arg(
                    Arg::new("style")
                        .long("style")
                        .help("Comment style: 'default' or 'drupal'"),
                )
                .arg(
                    Arg::new("spacing")
                        .long("spacing")
                        .help("Minimum spaces between aligned columns")
                        .value_parser(clap::value_parser!(u32)),
                )
                .arg(
                    Arg::new("plain")
                        .long("plain")
                        .help("Print plain text instead of a snippet")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("inspect")
                .about("Show the tokens, symbol or comment produced for a declaration")
                .arg(line_arg())
                .arg(language_arg())
                .arg(
                    Arg::new("format")
                        .long("format")
                        .short('f')
                        .help("Stage and format, e.g. 'token-json' or 'symbol-yaml'")
                        .default_value("symbol-simple"),
                ),
        )
        .subcommand(
            Command::new("tags")
                .about("List the tag completions for a language")
                .arg(language_arg()),
        )
        .subcommand(Command::new("languages").about("List supported language identifiers"))
}

fn main() {
    let matches = cli().get_matches();

    let level = if matches.get_flag("quiet") {
        LevelFilter::ERROR
    } else if matches.get_flag("verbose") {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    };
    // a RUST_LOG setting takes precedence over the flags
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if let Err(err) = run(&matches) {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run(matches: &ArgMatches) -> DocblockResult<()> {
    match matches.subcommand() {
        Some(("render", render_matches)) => handle_render_command(render_matches),
        Some(("inspect", inspect_matches)) => handle_inspect_command(inspect_matches),
        Some(("tags", tags_matches)) => handle_tags_command(tags_matches),
        Some(("languages", _)) => {
            handle_languages_command();
            Ok(())
        }
        _ => unreachable!(),
    }
}

fn language(matches: &ArgMatches) -> DocblockResult<Language> {
    let id = matches
        .get_one::<String>("language")
        .map(String::as_str)
        .unwrap_or("javascript");
    Language::from_id(id)
}

/// The line argument, or the first line of stdin
fn input_line(matches: &ArgMatches) -> DocblockResult<String> {
    if let Some(line) = matches.get_one::<String>("line") {
        return Ok(line.clone());
    }
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}

fn settings(matches: &ArgMatches) -> DocblockResult<Settings> {
    let mut loader = Loader::new();
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if let Some(style) = matches.get_one::<String>("style") {
        loader = loader.set_override("comment_style", style.as_str())?;
    }
    if let Some(spacing) = matches.get_one::<u32>("spacing") {
        loader = loader.set_override("column_spacing", i64::from(*spacing))?;
    }
    Ok(loader.build()?)
}

/// Handle the render command
fn handle_render_command(matches: &ArgMatches) -> DocblockResult<()> {
    let language = language(matches)?;
    let settings = settings(matches)?;
    let line = input_line(matches)?;

    let format = if matches.get_flag("plain") {
        "comment-plain"
    } else {
        "comment-snippet"
    };
    let spec = ProcessingSpec::from_string(format)?;
    println!("{}", processor::process(&line, language, spec, &settings)?);
    Ok(())
}

/// Handle the inspect command
fn handle_inspect_command(matches: &ArgMatches) -> DocblockResult<()> {
    let language = language(matches)?;
    let format = matches
        .get_one::<String>("format")
        .map(String::as_str)
        .unwrap_or("symbol-simple");
    let spec = ProcessingSpec::from_string(format).map_err(|err| {
        tracing::error!("available formats: {}", available_formats().join(", "));
        err
    })?;
    let line = input_line(matches)?;

    println!(
        "{}",
        processor::process(&line, language, spec, &Settings::default())?
    );
    Ok(())
}

/// Handle the tags command
fn handle_tags_command(matches: &ArgMatches) -> DocblockResult<()> {
    let language = language(matches)?;
    for tag in completions::tags(language) {
        println!("{:<16}{}", tag.label, tag.detail);
    }
    Ok(())
}

/// Handle the languages command
fn handle_languages_command() {
    for language in Language::ALL {
        let aliases: Vec<_> = language.aliases().collect();
        println!("{:<12}{}", language.id(), aliases.join(", "));
    }
}
