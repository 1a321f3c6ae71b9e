use clap::Parser;
use ghosty::cli::commands::Cli;
use ghosty::cli::handlers;
use ghosty::io::data_dir::resolve_data_dir;
use ghosty::io::store::JsonStore;

fn main() {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.clone());

    // Logging is best effort; the todo list still works without it
    if let Err(e) = ghosty::logging::init_logging(&data_dir) {
        eprintln!("warning: logging disabled: {}", e);
    }

    let store = JsonStore::new(&data_dir);
    let result = match cli.command {
        // No subcommand → launch TUI
        None => ghosty::tui::run(Box::new(store)),
        Some(_) => handlers::dispatch(cli, &store),
    };
    if let Err(e) = result {
        log::error!("event=command_failed error={:?}", e.to_string());
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}
