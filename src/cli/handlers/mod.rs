use std::io::IsTerminal;

use chrono::Local;
use clap::CommandFactory;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::store::Store;
use crate::model::config::Config;
use crate::ops::batch::{BatchAction, run_batch};
use crate::ops::focus_ops;
use crate::ops::task_ops;
use crate::ops::view::resolve_view;
use crate::parse::selection::parse_selection_args;
use crate::tui::theme::Theme;
use crate::util::time::now_timestamp;

type HandlerResult = Result<(), Box<dyn std::error::Error>>;

/// Per-invocation output settings
struct Ctx<'a> {
    store: &'a dyn Store,
    json: bool,
    color: bool,
}

impl Ctx<'_> {
    fn painter<'t>(&self, theme: &'t Theme) -> Painter<'t> {
        if self.color && !self.json {
            Painter::themed(theme)
        } else {
            Painter::plain()
        }
    }

    /// Report a validation problem. Not fatal: the exit status stays 0.
    fn reject(&self, config: &Config, message: &str) -> HandlerResult {
        log::info!("event=command_rejected reason={:?}", message);
        if self.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&ErrorJson {
                    error: message.to_string()
                })?
            );
        } else {
            let p = self.painter(Theme::by_name(&config.theme));
            println!("{}", p.error(&format!("✖ {}", message)));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Run one CLI command against `store`.
///
/// Validation problems are printed and return Ok; storage write failures
/// return Err.
pub fn dispatch(cli: Cli, store: &dyn Store) -> HandlerResult {
    let ctx = Ctx {
        store,
        json: cli.json,
        color: std::io::stdout().is_terminal(),
    };

    match cli.command {
        None => Ok(()),
        Some(cmd) => match cmd {
            Commands::List => cmd_list(&ctx),
            Commands::Add(args) => cmd_add(&ctx, args),
            Commands::Check(args) => cmd_batch(&ctx, args, BatchAction::ToggleDone),
            Commands::Hold(args) => cmd_batch(&ctx, args, BatchAction::ToggleHold),
            Commands::Remove(args) => cmd_batch(&ctx, args, BatchAction::Remove),
            Commands::Focus(args) => cmd_focus(&ctx, args),
            Commands::Help => cmd_help(),
        },
    }
}

// ---------------------------------------------------------------------------
// Read commands
// ---------------------------------------------------------------------------

fn cmd_list(ctx: &Ctx<'_>) -> HandlerResult {
    let config = ctx.store.load_config();
    print_list(ctx, &config)
}

/// Print the current focus view (no banner)
fn print_list(ctx: &Ctx<'_>, config: &Config) -> HandlerResult {
    let tasks = ctx.store.load_tasks();
    let view = resolve_view(tasks.tasks(), &config.current_focus);
    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&list_to_json(&config.current_focus, &view))?
        );
    } else {
        let p = ctx.painter(Theme::by_name(&config.theme));
        for line in format_list_view(&config.current_focus, &view, Local::now().naive_local(), p) {
            println!("{}", line);
        }
    }
    Ok(())
}

/// Reprint the list after a write command, when enabled
fn reprint(ctx: &Ctx<'_>, config: &Config) -> HandlerResult {
    if config.reprint_list && !ctx.json {
        println!();
        print_list(ctx, config)?;
    }
    Ok(())
}

fn cmd_help() -> HandlerResult {
    println!("{}", Cli::command().render_help());
    Ok(())
}

// ---------------------------------------------------------------------------
// Write commands
// ---------------------------------------------------------------------------

fn cmd_add(ctx: &Ctx<'_>, args: AddArgs) -> HandlerResult {
    let config = ctx.store.load_config();
    let text = args.text.join(" ");

    let mut tasks = ctx.store.load_tasks();
    let created = now_timestamp();
    let id = match task_ops::add_task(&mut tasks, &text, &config.current_focus, created.clone()) {
        Ok(id) => id,
        Err(task_ops::TaskError::EmptyText) => {
            return ctx.reject(&config, "No todo text provided");
        }
    };
    ctx.store.save_tasks(&tasks)?;
    log::info!("event=task_added focus={}", config.current_focus);

    let text = tasks.get(id).map(|t| t.text.clone()).unwrap_or_default();
    if ctx.json {
        let position = resolve_view(tasks.tasks(), &config.current_focus)
            .iter()
            .position(|t| t.id == id)
            .map_or(0, |i| i + 1);
        println!(
            "{}",
            serde_json::to_string_pretty(&AddJson {
                focus: config.current_focus.clone(),
                position,
                text,
                created,
            })?
        );
    } else {
        let p = ctx.painter(Theme::by_name(&config.theme));
        println!("{} \"{}\"", p.success("✔ Added:"), text);
    }
    reprint(ctx, &config)
}

fn cmd_batch(ctx: &Ctx<'_>, args: NumbersArgs, action: BatchAction) -> HandlerResult {
    let config = ctx.store.load_config();
    if args.numbers.is_empty() {
        return ctx.reject(&config, "No numbers provided");
    }
    let selection = parse_selection_args(&args.numbers);
    if selection.is_empty() {
        return ctx.reject(&config, "No valid numbers provided");
    }

    let report = run_batch(ctx.store, &config.current_focus, &selection, action)?;

    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&BatchJson {
                focus: &config.current_focus,
                report: &report,
            })?
        );
    } else {
        let p = ctx.painter(Theme::by_name(&config.theme));
        for line in format_batch_lines(&report, p) {
            println!("{}", line);
        }
    }
    reprint(ctx, &config)
}

// ---------------------------------------------------------------------------
// Focus management
// ---------------------------------------------------------------------------

fn cmd_focus(ctx: &Ctx<'_>, args: FocusCmd) -> HandlerResult {
    let mut config = ctx.store.load_config();

    let message = match args.action.unwrap_or(FocusAction::List) {
        FocusAction::List => {
            let tasks = ctx.store.load_tasks();
            if ctx.json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&focuses_to_json(&config, &tasks))?
                );
            } else {
                let p = ctx.painter(Theme::by_name(&config.theme));
                for line in format_focus_list(&config, &tasks, p) {
                    println!("{}", line);
                }
            }
            return Ok(());
        }
        FocusAction::Add(arg) => match focus_ops::add_focus(&mut config, &arg.name) {
            Ok(name) => {
                ctx.store.save_config(&config)?;
                log::info!("event=focus_added");
                format!("✔ Added focus: {}", name)
            }
            Err(e) => return ctx.reject(&config, &e.to_string()),
        },
        FocusAction::Remove(arg) => {
            let mut tasks = ctx.store.load_tasks();
            match focus_ops::remove_focus(&mut config, &mut tasks, &arg.name) {
                Ok(deleted) => {
                    ctx.store.save_tasks(&tasks)?;
                    ctx.store.save_config(&config)?;
                    log::info!("event=focus_removed tasks_deleted={}", deleted);
                    format!("✔ Removed focus: {} ({} todo(s) deleted)", arg.name, deleted)
                }
                Err(e) => return ctx.reject(&config, &e.to_string()),
            }
        }
        FocusAction::Use(arg) => match focus_ops::select_focus(&mut config, &arg.name) {
            Ok(()) => {
                ctx.store.save_config(&config)?;
                log::info!("event=focus_selected");
                format!("✔ Selected focus: @{}", arg.name)
            }
            Err(e) => return ctx.reject(&config, &e.to_string()),
        },
    };

    if ctx.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&focuses_to_json(&config, &ctx.store.load_tasks()))?
        );
    } else {
        let p = ctx.painter(Theme::by_name(&config.theme));
        println!("{}", p.success(&message));
    }
    Ok(())
}
