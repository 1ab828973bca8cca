//! Interactive session loop.

use std::{path::Path, sync::Arc, time::Duration};

use rustyline::{DefaultEditor, error::ReadlineError};
use squadup_core::infrastructure::{
    reply::RandomReplyPicker, repository::InMemoryPlayerRepository,
    scheduler::TokioTaskScheduler,
};
use squadup_shared::time::SystemClock;
use tokio::sync::{mpsc, oneshot};

use crate::{
    app::{App, Flow},
    command::{Command, parse_line},
    config::Args,
    error::CliError,
    formatter::ViewFormatter,
    ui::{PROMPT, redisplay_prompt},
};

/// How often the loop checks the conversation for delivered replies
const REPLY_POLL_INTERVAL: Duration = Duration::from_millis(100);

fn load_roster(path: Option<&Path>) -> Result<InMemoryPlayerRepository, CliError> {
    let Some(path) = path else {
        return Ok(InMemoryPlayerRepository::seeded()?);
    };
    let json = std::fs::read_to_string(path).map_err(|source| CliError::RosterFile {
        path: path.display().to_string(),
        source,
    })?;
    let repository = InMemoryPlayerRepository::from_json(&json)?;
    tracing::info!("Loaded roster from {}", path.display());
    Ok(repository)
}

/// Spawn a blocking thread for rustyline (synchronous readline).
///
/// Lines are forwarded untrimmed so chat messages keep their spacing.
fn spawn_readline(
    input_tx: mpsc::UnboundedSender<String>,
) -> oneshot::Receiver<Result<(), ReadlineError>> {
    let (ready_tx, ready_rx) = oneshot::channel();

    std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => {
                ready_tx.send(Ok(())).ok();
                rl
            }
            Err(e) => {
                ready_tx.send(Err(e)).ok();
                return;
            }
        };

        loop {
            match rl.readline(PROMPT) {
                Ok(line) => {
                    if line.trim().is_empty() {
                        continue;
                    }
                    rl.add_history_entry(line.trim()).ok();
                    if input_tx.send(line).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    ready_rx
}

/// Run the interactive session until the user quits or closes stdin
pub async fn run(args: Args) -> Result<(), CliError> {
    let repository = load_roster(args.roster.as_deref())?;
    let mut app = App::new(
        Arc::new(repository),
        args.chat_config(),
        Arc::new(TokioTaskScheduler::new()),
        Arc::new(RandomReplyPicker),
        Arc::new(SystemClock),
        ViewFormatter::new(!args.no_color),
    );

    for command in [Command::Help, Command::List] {
        if let Flow::Continue(output) = app.handle(command).await {
            println!("{}", output);
        }
    }

    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();
    // a dropped sender means the thread died before reporting; the closed
    // input channel ends the loop below
    if let Ok(ready) = spawn_readline(input_tx).await {
        ready?;
    }

    let mut ticker = tokio::time::interval(REPLY_POLL_INTERVAL);
    loop {
        tokio::select! {
            line = input_rx.recv() => {
                let Some(line) = line else {
                    break;
                };
                let chat_open = app.is_chat_open().await;
                match parse_line(&line, chat_open) {
                    Ok(Some(command)) => match app.handle(command).await {
                        Flow::Continue(output) => print!("{}", output),
                        Flow::Exit => break,
                    },
                    Ok(None) => {}
                    Err(e) => println!("{}", e),
                }
            }
            _ = ticker.tick() => {
                let output = app.drain_new_messages().await;
                if !output.is_empty() {
                    print!("\n{}", output);
                    redisplay_prompt();
                }
            }
        }
    }

    tracing::info!("Session ended");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_builtin_roster() {
        // テスト項目: ファイル指定がなければ組み込みの名簿が使われる
        assert!(load_roster(None).is_ok());
    }

    #[test]
    fn test_load_missing_roster_file() {
        // テスト項目: 存在しない名簿ファイルはパスつきのエラーになる
        // given (前提条件):
        let path = Path::new("/nonexistent/squadup-roster.json");

        // when (操作):
        let result = load_roster(Some(path));

        // then (期待する結果):
        match result {
            Err(CliError::RosterFile { path, .. }) => {
                assert_eq!(path, "/nonexistent/squadup-roster.json")
            }
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }
}
