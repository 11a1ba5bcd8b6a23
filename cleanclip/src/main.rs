// cleanclip/src/main.rs
//! CleanClip entry point.
//!
//! Parses arguments, sets up logging and the theme, loads the rule set and
//! dispatches to the chosen command.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::io;

use cleanclip::cli::{Cli, Commands, RulesCommand, SanitizeCommand};
use cleanclip::commands::cleanclip::{
    error_msg, run_cleanclip_opts, success_msg, CleanclipOptions, InputSource,
};
use cleanclip::commands::rules::{edit_rules, import_rules, reset_rules, show_rules};
use cleanclip::logger;
use cleanclip::ui::theme::{build_theme_map, ThemeMap};
use cleanclip::utils::rule_store::JsonFileStore;
use cleanclip_core::{parse, RegexEngine, RuleSet, RuleStore};

fn main() {
    let cli = Cli::parse();
    logger::init_logger(logger::resolve_log_level(
        cli.quiet,
        cli.debug,
        cli.disable_debug,
        logger::env_max_level(),
    ));

    let theme_map = match build_theme_map(cli.theme.as_ref()) {
        Ok(theme_map) => theme_map,
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(1);
        }
    };

    if let Err(e) = run(&cli, &theme_map) {
        error_msg(format!("{e:#}"), &theme_map);
        std::process::exit(1);
    }
}

fn run(cli: &Cli, theme_map: &ThemeMap) -> Result<()> {
    let store = JsonFileStore::from_config_dir(cli.config_dir.as_deref())?;

    match &cli.command {
        Commands::Sanitize(cmd) => {
            let rules = load_rules_for(cmd, &store)?;
            let engine = RegexEngine::new(rules);
            let opts = CleanclipOptions {
                source: input_source(cmd),
                output_path: cmd.output.clone(),
                copy: cmd.copy,
                diff: cmd.diff,
                no_redaction_summary: cmd.no_summary,
                quiet: cli.quiet,
            };
            run_cleanclip_opts(&engine, &opts, theme_map)?;
        }
        Commands::Rules(RulesCommand::Show) => {
            show_rules(&store, &mut io::stdout().lock())?;
        }
        Commands::Rules(RulesCommand::Import { path }) => {
            let rules = import_rules(&store, path)?;
            success_msg(format!("Patterns saved: {} rules stored.", rules.len()), theme_map);
        }
        Commands::Rules(RulesCommand::Edit) => {
            let rules = edit_rules(&store)?;
            success_msg(format!("Patterns saved: {} rules stored.", rules.len()), theme_map);
        }
        Commands::Rules(RulesCommand::Reset) => {
            let rules = reset_rules(&store)?;
            success_msg(format!("Default patterns restored: {} rules stored.", rules.len()), theme_map);
        }
        Commands::Rules(RulesCommand::Path) => {
            println!("{}", store.path().display());
        }
    }
    Ok(())
}

fn input_source(cmd: &SanitizeCommand) -> InputSource {
    match (&cmd.input_file, cmd.stdin) {
        (Some(path), _) => InputSource::File(path.clone()),
        (None, true) => InputSource::Stdin,
        (None, false) => InputSource::Clipboard,
    }
}

fn load_rules_for(cmd: &SanitizeCommand, store: &JsonFileStore) -> Result<RuleSet> {
    match &cmd.rules {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
            parse(&text).with_context(|| format!("Invalid rules file: {}", path.display()))
        }
        None => store.load_rule_set().context("Failed to load stored rules"),
    }
}
