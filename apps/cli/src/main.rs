use clap::Parser;

use cepfinder::{cli::Cli, config::Config, init_tracing, run};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Every path exits with status 0, including usage errors.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            err.print()?;
            return Ok(());
        }
    };

    let config = Config::from_env().with_cli(&cli);
    init_tracing(config.log_format);

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();
    run(&config, cli.ceps.as_slice(), &mut stdout.lock(), &mut stderr.lock()).await?;
    Ok(())
}
