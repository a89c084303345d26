use clap::{Parser, ValueEnum};
use fave_core::control::{Command, SOCKET_PATH};
use std::io::Write;
use std::os::unix::net::UnixStream;

#[derive(Parser, Debug)]
#[command(name = "favectl", version, about = "Drive a running fave button", long_about = None)]
struct Cli {
    /// What to do with the button
    #[arg(value_enum)]
    action: Action,

    /// Apply the state without the ring and spark animation
    #[arg(short = 'n', long)]
    now: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum Action {
    Toggle,
    Select,
    Deselect,
}

impl Cli {
    fn command(&self) -> Command {
        match (self.action, self.now) {
            (Action::Toggle, _) => Command::Toggle,
            (Action::Select, false) => Command::Select,
            (Action::Select, true) => Command::SelectNow,
            (Action::Deselect, false) => Command::Deselect,
            (Action::Deselect, true) => Command::DeselectNow,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.now && matches!(cli.action, Action::Toggle) {
        log::warn!("--now has no effect on toggle");
    }

    send_command(cli.command())
}

fn send_command(command: Command) -> anyhow::Result<()> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|e| {
        anyhow::anyhow!(
            "Failed to connect to fave at {}: {}. Is fave running?",
            SOCKET_PATH,
            e
        )
    })?;

    writeln!(stream, "{}", command)?;
    log::debug!("Sent '{}'", command);
    Ok(())
}
