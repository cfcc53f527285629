use clap::Parser;
use layout_binding::cli::commands::cmd_derive;
use layout_binding::cli::config::{Cli, Commands, load_config};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref());

    match cli.command {
        Commands::Derive {
            input,
            prefix,
            format,
            output,
        } => {
            // CLI flag wins over the config file
            let prefix = prefix.as_deref().unwrap_or(&config.generate.field_prefix);

            let all_valid = cmd_derive(
                &input,
                prefix,
                &format,
                output.as_deref(),
                config.generate.validate,
                cli.verbose,
            )?;
            if !all_valid {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}
