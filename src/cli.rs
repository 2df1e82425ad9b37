use clap::{Parser, Subcommand};

/// CareerBridge job board server
#[derive(Debug, Parser)]
#[command(name = "careerbridge", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Run migrations, then serve HTTP (default)
    Serve,
    /// Run migrations and exit
    Migrate,
}

impl Cli {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Serve)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_serve() {
        let cli = Cli::parse_from(["careerbridge"]);
        assert_eq!(cli.command(), Command::Serve);
    }

    #[test]
    fn parses_migrate() {
        let cli = Cli::parse_from(["careerbridge", "migrate"]);
        assert_eq!(cli.command(), Command::Migrate);
    }
}
