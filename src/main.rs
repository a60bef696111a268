use clap::Parser;
use oddsline::adapter::inbound::cli::command::{Cli, ColorChoice, Commands, ConfigCommand};
use oddsline::adapter::inbound::cli::{config, draftkings, output};
use oddsline::infrastructure::config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {}
    }
    output::configure(output::OutputConfig::new(cli.json, cli.quiet));

    let config_path = cli.config.as_deref();
    let result = match &cli.command {
        Commands::Draftkings(args) => match Config::load_or_default(config_path) {
            Ok(config) => draftkings::execute(args, config).await,
            Err(e) => Err(e),
        },
        Commands::Config(ConfigCommand::Show) => config::execute_show(config_path),
        Commands::Config(ConfigCommand::Validate) => config::execute_validate(config_path),
    };

    if let Err(e) = result {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
