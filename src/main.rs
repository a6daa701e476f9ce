// src/main.rs
use lwt::{logging, source, Config, SpawnCommand};

fn main() -> glib::ExitCode {
    logging::init();
    tracing::info!("Starting lwt v{}", env!("CARGO_PKG_VERSION"));

    let config = Config::load(&source::config_path());
    let command = SpawnCommand::from_args(&config.settings, std::env::args());

    lwt::run(config, command)
}
