use clap::Parser;
use color_eyre::eyre::Result;

use composer::{
    app::App,
    infrastructure::{cli::Cli, config::Config},
    presentation::widgets::render_to_lines,
    utils::{initialize_logging, initialize_panic_handler},
};

async fn tokio_main() -> Result<()> {
    initialize_logging()?;

    initialize_panic_handler()?;

    let args = <Cli as Parser>::parse();
    let config = Config::new()?;
    let mut app = App::new(config, args.page)?;

    if args.dump {
        for line in render_to_lines(&app.frame(), args.width, args.height) {
            println!("{line}");
        }
        return Ok(());
    }

    app.run(args.tick_rate, args.frame_rate).await
}

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = tokio_main().await {
        eprintln!("{} error: Something went wrong", env!("CARGO_PKG_NAME"));
        Err(e)
    } else {
        Ok(())
    }
}
