//! Topic Desk CLI
//!
//! Command-line interface for the topic service:
//! - Interactive dashboard shell
//! - Register an account
//! - List a user's topics
//! - Read the papers collected for a topic
//! - Check API status

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use owo_colors::OwoColorize;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use topicdesk::api::http::HttpTransport;
use topicdesk::config::{generate_default_config, Config, LoggingConfig};
use topicdesk::render::{render, sanitize};
use topicdesk::{ApiClient, Dashboard, Prompt, Topic, TopicsPanel, View};

#[derive(Parser)]
#[command(name = "topicdesk")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Track research topics and read the papers collected for them")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// API server URL (overrides config and TOPICDESK_API_URL)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Config file (default: search standard locations)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Interactive dashboard session
    Shell,

    /// Create an account
    Register {
        #[arg(long)]
        email: String,
        /// Prompted when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Log in and list your topics
    Topics {
        #[arg(long)]
        email: String,
        /// Prompted when omitted
        #[arg(long)]
        password: Option<String>,
    },

    /// Show the papers collected for a topic
    Papers {
        /// Topic name
        topic: String,
    },

    /// Check that the API answers
    Status,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }

    init_logging(&config.logging);
    tracing::debug!("Using API at {}", config.api.base_url);

    match cli.command {
        Commands::Shell => {
            let dashboard = build_dashboard(&config)?;
            run_shell(dashboard).await?;
        }

        Commands::Register { email, password } => {
            let password = password_or_prompt(password)?;
            let mut dashboard = build_dashboard(&config)?;
            dashboard.show_register();
            dashboard.register(&email, &password).await;

            let status = dashboard.state().register_status();
            if let Some(error) = &status.error {
                bail!("{}", sanitize(error, false));
            }
            if let Some(success) = &status.success {
                println!("{} {}", "✔".green(), success);
            }
        }

        Commands::Topics { email, password } => {
            let password = password_or_prompt(password)?;
            let mut dashboard = build_dashboard(&config)?;
            dashboard.login(&email, &password).await;

            if let Some(error) = dashboard.state().login_error() {
                bail!("{}", sanitize(error, false));
            }
            print!("{}", render(dashboard.state()));
        }

        Commands::Papers { topic } => {
            if topic.trim().is_empty() {
                bail!("topic must not be empty");
            }
            let mut dashboard = build_dashboard(&config)?;
            dashboard.view_papers(Topic::new(topic)).await;
            print!("{}", render(dashboard.state()));
        }

        Commands::Status => {
            let dashboard = build_dashboard(&config)?;
            match dashboard.client().ping().await {
                Ok(message) => println!(
                    "{} {} ({})",
                    "✔".green(),
                    sanitize(&message, false),
                    config.api.base_url
                ),
                Err(e) => bail!("{} is not reachable: {}", config.api.base_url, e),
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("writing {}", path.display()))?;
                    println!("{} Config written to {}", "✔".green(), path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

fn init_logging(config: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(format!("topicdesk={}", config.level)));

    let registry = tracing_subscriber::registry().with(filter);
    if config.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn build_dashboard(config: &Config) -> anyhow::Result<Dashboard<HttpTransport>> {
    let transport = HttpTransport::new(&config.api.base_url, config.api.request_timeout())?;
    Ok(Dashboard::new(
        ApiClient::new(transport),
        config.dashboard.return_delay(),
    ))
}

fn password_or_prompt(password: Option<String>) -> anyhow::Result<String> {
    match password {
        Some(password) => Ok(password),
        None => read_password("Password").context("reading password"),
    }
}

/// Print `prompt` and read one line. `None` at end of input.
fn read_line(prompt: &str) -> io::Result<Option<String>> {
    print!("{}", prompt);
    io::stdout().flush()?;

    let mut input = String::new();
    if io::stdin().read_line(&mut input)? == 0 {
        return Ok(None);
    }
    Ok(Some(input.trim_end_matches(['\r', '\n']).to_string()))
}

/// Read a password without echo. Falls back to a plain line when stdin is
/// not a terminal.
fn read_password(prompt: &str) -> io::Result<String> {
    if !io::stdin().is_terminal() {
        return Ok(read_line(&format!("{}: ", prompt))?.unwrap_or_default());
    }

    print!("{}: ", prompt);
    io::stdout().flush()?;

    enable_raw_mode()?;
    let password = read_hidden();
    disable_raw_mode()?;
    println!();
    password
}

fn read_hidden() -> io::Result<String> {
    let mut password = String::new();
    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Enter => return Ok(password),
            KeyCode::Backspace => {
                password.pop();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
            }
            KeyCode::Esc => {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "cancelled"));
            }
            KeyCode::Char(c) => password.push(c),
            _ => {}
        }
    }
}

/// Confirmation and alerts on the terminal
struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn confirm(&self, message: &str) -> bool {
        match read_line(&format!("{} [y/N]: ", message)) {
            Ok(Some(answer)) => matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }

    fn alert(&self, message: &str) {
        eprintln!("{} {}", "✘".red(), sanitize(message, false));
    }
}

const SHELL_HELP: &str = "\
Commands:
  register <email>       create an account (password is prompted)
  login <email>          log in (password is prompted)
  logout                 log out
  topics                 show the dashboard and refresh topics
  add <topic>            add a topic
  delete <n|topic>       delete a topic by row number or name
  papers <n|topic>       show papers for a topic by row number or name
  view <login|register|dashboard|add>
  help                   this text
  quit                   leave the shell";

async fn run_shell(mut dashboard: Dashboard<HttpTransport>) -> anyhow::Result<()> {
    println!("{}", "Topic Desk - type `help` for commands".dimmed());
    print!("{}", render(dashboard.state()));

    loop {
        let prompt = format!("{}> ", dashboard.state().view().as_str().cyan());
        let Some(line) = read_line(&prompt)? else {
            break;
        };

        let line = line.trim();
        let (command, arg) = match line.split_once(char::is_whitespace) {
            Some((command, arg)) => (command, arg.trim()),
            None => (line, ""),
        };

        if let Some(usage) = missing_argument(command, arg) {
            eprintln!("{} Usage: {}", "✘".red(), usage);
            continue;
        }

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", SHELL_HELP);
                continue;
            }
            "register" => {
                let password = password_or_prompt(None)?;
                dashboard.show_register();
                dashboard.register(arg, &password).await;
            }
            "login" => {
                let password = password_or_prompt(None)?;
                dashboard.show_login();
                dashboard.login(arg, &password).await;
            }
            "logout" => dashboard.logout(),
            "topics" => dashboard.show_dashboard().await,
            "add" => {
                dashboard.show_add_topic();
                if let Some(ticket) = dashboard.add_topic(arg).await {
                    print!("{}", render(dashboard.state()));
                    dashboard.finish_add_topic(ticket).await;
                }
            }
            "delete" => {
                let topic = resolve_topic(&dashboard, arg);
                dashboard.delete_topic(topic, &TerminalPrompt).await;
            }
            "papers" => {
                let topic = resolve_topic(&dashboard, arg);
                dashboard.view_papers(topic).await;
            }
            "view" => match arg {
                "login" => dashboard.show_login(),
                "register" => dashboard.show_register(),
                "dashboard" => dashboard.show_dashboard().await,
                "add" | "add-topic" => dashboard.show_add_topic(),
                other => {
                    eprintln!("{} Unknown view: {}", "✘".red(), other);
                    continue;
                }
            },
            other => {
                eprintln!("{} Unknown command: {} (try `help`)", "✘".red(), other);
                continue;
            }
        }

        print!("{}", render(dashboard.state()));
    }

    Ok(())
}

/// Usage line for a shell command that needs an argument and got none
fn missing_argument(command: &str, arg: &str) -> Option<&'static str> {
    if !arg.is_empty() {
        return None;
    }
    match command {
        "register" => Some("register <email>"),
        "login" => Some("login <email>"),
        "add" => Some("add <topic>"),
        "delete" => Some("delete <n|topic>"),
        "papers" => Some("papers <n|topic>"),
        "view" => Some("view <login|register|dashboard|add>"),
        _ => None,
    }
}

/// A row number from the topic list, or a topic name as typed
fn resolve_topic(dashboard: &Dashboard<HttpTransport>, arg: &str) -> Topic {
    if dashboard.state().view() == View::Dashboard {
        if let (TopicsPanel::Rows(rows), Ok(n)) = (dashboard.state().topics(), arg.parse::<usize>()) {
            if let Some(row) = n.checked_sub(1).and_then(|idx| rows.get(idx)) {
                return row.topic.clone();
            }
        }
    }
    Topic::new(arg)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topic_commands_require_an_argument() {
        assert_eq!(missing_argument("add", ""), Some("add <topic>"));
        assert_eq!(missing_argument("delete", ""), Some("delete <n|topic>"));
        assert_eq!(missing_argument("papers", ""), Some("papers <n|topic>"));
        assert_eq!(missing_argument("login", ""), Some("login <email>"));

        assert_eq!(missing_argument("add", "graphs"), None);
        assert_eq!(missing_argument("papers", "2"), None);
        assert_eq!(missing_argument("logout", ""), None);
        assert_eq!(missing_argument("topics", ""), None);
    }
}
