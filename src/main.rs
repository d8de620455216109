use bubbletea_rs::Program;
use clap::Parser;
use crossterm::terminal;
use std::io;
use std::process::ExitCode;
use whittle::cli::Cli;
use whittle::{app, ingest, logging, App, Error, Event, Theme};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("Error running program: {}", err);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> whittle::Result<()> {
    logging::init(cli.log_file.as_deref(), cli.log_level)?;

    let items = ingest::read_lines(io::stdin().lock())?;
    let mut app = App::new(items, &cli.settings(), Theme::default());

    // The engine only reports size changes, so seed the starting size here.
    let (width, height) = terminal::size().map_err(|e| Error::Program(e.to_string()))?;
    app.on_event(Event::Resize {
        width: usize::from(width),
        height: usize::from(height),
    });
    app::stage(app);

    let program = Program::<App>::builder()
        .alt_screen(true)
        .build()
        .map_err(|e| Error::Program(e.to_string()))?;
    program
        .run()
        .await
        .map_err(|e| Error::Program(e.to_string()))?;

    tracing::info!("program finished");
    Ok(())
}
