//! Interactive line-oriented session over a [`Shell`].

use anyhow::Result;
use nasaview_core::MediaType;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use super::{Route, Shell};

pub const HELP: &str = "\
commands:
  search <query>   search the library (empty query allowed)
  type <kind>      toggle a media type filter: image, video, audio
  open <n>         open the nth result card
  go <path>        navigate to a route, e.g. /asset/as11-40-5874
  meta             show or hide the metadata panel
  back             return to the previous view
  help             show this help
  quit             leave
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search(String),
    Toggle(MediaType),
    Open(usize),
    Go(Route),
    Meta,
    Back,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. `Err` carries a message for the user.
    pub fn parse(line: &str) -> std::result::Result<Command, String> {
        let line = line.trim();
        let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match word {
            "search" | "s" => Ok(Command::Search(rest.to_string())),
            "type" | "t" => rest.parse().map(Command::Toggle),
            "open" | "o" => match rest.parse::<usize>() {
                Ok(n) if n > 0 => Ok(Command::Open(n - 1)),
                _ => Err(format!("expected a card number, got {rest:?}")),
            },
            "go" => Ok(Command::Go(Route::parse(rest))),
            "meta" | "m" => Ok(Command::Meta),
            "back" | "b" => Ok(Command::Back),
            "help" | "?" => Ok(Command::Help),
            "quit" | "q" | "exit" => Ok(Command::Quit),
            "" => Err(String::new()),
            other => Err(format!("unknown command {other:?}; try help")),
        }
    }
}

/// Read commands from `input` until `quit` or end of input, writing each
/// rendered screen to `output`.
pub async fn run<R, W>(shell: &mut Shell, input: R, mut output: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    output.write_all(shell.render().as_bytes()).await?;
    output.write_all(b"> ").await?;
    output.flush().await?;

    while let Some(line) = lines.next_line().await? {
        let redraw = match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => {
                output.write_all(HELP.as_bytes()).await?;
                false
            }
            Ok(command) => {
                let message = apply(shell, command).await;
                if let Some(message) = message {
                    output.write_all(format!("{message}\n").as_bytes()).await?;
                }
                true
            }
            Err(message) if message.is_empty() => false,
            Err(message) => {
                output.write_all(format!("{message}\n").as_bytes()).await?;
                false
            }
        };

        if redraw {
            output.write_all(shell.render().as_bytes()).await?;
        }
        output.write_all(b"> ").await?;
        output.flush().await?;
    }

    Ok(())
}

/// Apply `command`, returning a one-line note when it did nothing.
async fn apply(shell: &mut Shell, command: Command) -> Option<String> {
    match command {
        Command::Search(query) => {
            shell.search(&query).await;
            None
        }
        Command::Toggle(media_type) => match shell.toggle_media_type(media_type) {
            Some(checked) => Some(format!(
                "{} {}",
                media_type.label(),
                if checked { "checked" } else { "unchecked" }
            )),
            None => Some("not on the search page".to_string()),
        },
        Command::Open(n) => {
            if shell.open(n).await {
                None
            } else {
                Some(format!("nothing to open at {}", n + 1))
            }
        }
        Command::Go(route) => {
            shell.navigate(route).await;
            None
        }
        Command::Meta => match shell.toggle_metadata() {
            Some(_) => None,
            None => Some("no asset open".to_string()),
        },
        Command::Back => {
            if shell.back().await {
                None
            } else {
                Some("already at the start".to_string())
            }
        }
        Command::Help | Command::Quit => None,
    }
}
