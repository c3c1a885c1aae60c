//! `tabs` binary: an interactive shell over the to-do and counter stores.
//!
//! Reads one command per line from stdin on a single-threaded runtime. Logs
//! go to stderr so they never interleave with the rendered screens.

use anyhow::Context;
use tabs::{Shell, TabsConfig};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

async fn write_lines(out: &mut tokio::io::Stdout, lines: &[String]) -> std::io::Result<()> {
    for line in lines {
        out.write_all(line.as_bytes()).await?;
        out.write_all(b"\n").await?;
    }
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = TabsConfig::from_env().context("failed to load configuration")?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!(
        items = config.initial_items.len(),
        initial_count = config.initial_count,
        "Starting tabs shell"
    );

    let mut shell = Shell::from_config(&config);
    let mut stdout = tokio::io::stdout();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    write_lines(&mut stdout, &shell.welcome()).await?;

    loop {
        stdout.write_all(shell.prompt().as_bytes()).await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await.context("failed to read input")? else {
            tracing::info!("Input closed");
            break;
        };

        let reply = shell.handle_line(&line);
        write_lines(&mut stdout, &reply.lines).await?;
        if reply.quit {
            break;
        }
    }

    stdout.flush().await?;
    tracing::info!(
        todos = shell.todos().count(),
        count = shell.counter().value(),
        "Shell exited"
    );
    Ok(())
}
