//! REPL application state: the active filter, the use cases, and the part of
//! the conversation already shown on screen.

use std::sync::Arc;

use squadup_core::{
    domain::{
        FilterCriteria, FilterEvent, IgnoreReason, PlayerRepository, ReplyPicker, SessionId,
        TaskScheduler,
    },
    usecase::{
        ChatConfig, ChatContext, CloseChatUseCase, FilterPlayersUseCase, GetConversationUseCase,
        GetRosterSummaryUseCase, OpenChatUseCase, SendMessageUseCase, SendOutcome,
    },
};
use squadup_shared::time::Clock;

use crate::{command::Command, formatter::ViewFormatter};

/// Result of handling one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print the output and keep reading commands
    Continue(String),
    Exit,
}

pub struct App {
    criteria: FilterCriteria,
    formatter: ViewFormatter,
    filter_players: FilterPlayersUseCase,
    roster_summary: GetRosterSummaryUseCase,
    open_chat: OpenChatUseCase,
    send_message: SendMessageUseCase,
    close_chat: CloseChatUseCase,
    get_conversation: GetConversationUseCase,
    /// Session and number of its messages already printed
    shown: Option<(SessionId, usize)>,
}

impl App {
    pub fn new(
        repository: Arc<dyn PlayerRepository>,
        config: ChatConfig,
        scheduler: Arc<dyn TaskScheduler>,
        picker: Arc<dyn ReplyPicker>,
        clock: Arc<dyn Clock>,
        formatter: ViewFormatter,
    ) -> Self {
        let context = Arc::new(ChatContext::new(config));
        Self {
            criteria: FilterCriteria::default(),
            formatter,
            filter_players: FilterPlayersUseCase::new(repository.clone()),
            roster_summary: GetRosterSummaryUseCase::new(repository.clone()),
            open_chat: OpenChatUseCase::new(context.clone(), repository, clock.clone()),
            send_message: SendMessageUseCase::new(context.clone(), scheduler, picker, clock),
            close_chat: CloseChatUseCase::new(context.clone()),
            get_conversation: GetConversationUseCase::new(context),
            shown: None,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub async fn is_chat_open(&self) -> bool {
        self.get_conversation.execute().await.is_open()
    }

    pub async fn handle(&mut self, command: Command) -> Flow {
        let output = match command {
            Command::Help => self.formatter.format_help(),
            Command::Games => self.formatter.format_games(self.criteria.selected_game),
            Command::SelectGame(game) => self.update_filter(FilterEvent::SelectGame(game)).await,
            Command::Search(term) => self.update_filter(FilterEvent::Search(term)).await,
            Command::MinRating(raw) => self.update_filter(FilterEvent::MinRating(raw)).await,
            Command::Rank(rank) => self.update_filter(FilterEvent::Rank(rank)).await,
            Command::Reset => self.update_filter(FilterEvent::Reset).await,
            Command::Ranks => {
                let game = self.criteria.selected_game;
                self.formatter
                    .format_ranks(game, self.filter_players.ranks(game))
            }
            Command::List => self.render_roster().await,
            Command::Stats => {
                let summary = self.roster_summary.execute().await;
                self.formatter.format_summary(&summary)
            }
            Command::OpenChat(id) => self.open(&id).await,
            Command::Say(text) => self.say(&text).await,
            Command::Close => match self.close_chat.execute().await {
                Some(_) => {
                    self.shown = None;
                    self.formatter.format_chat_closed()
                }
                None => "Чат не открыт\n".to_string(),
            },
            Command::History => {
                let session = self.get_conversation.execute().await;
                self.formatter.format_history(&session)
            }
            Command::Quit => return Flow::Exit,
        };
        Flow::Continue(output)
    }

    /// Render messages of the open conversation that have not been shown yet.
    ///
    /// Returns an empty string when there is nothing new or no chat is open.
    pub async fn drain_new_messages(&mut self) -> String {
        let session = self.get_conversation.execute().await;
        let (Some(id), Some(player)) = (session.id(), session.selected_player()) else {
            self.shown = None;
            return String::new();
        };
        if !session.is_open() {
            self.shown = None;
            return String::new();
        }

        let start = match self.shown {
            Some((shown_id, count)) if shown_id == id => count,
            _ => 0,
        };
        let messages = session.messages();
        let output = messages
            .iter()
            .skip(start)
            .map(|message| self.formatter.format_message(message, &player.name))
            .collect();
        self.shown = Some((id, messages.len()));
        output
    }

    async fn update_filter(&mut self, event: FilterEvent) -> String {
        self.criteria = std::mem::take(&mut self.criteria).apply(event);
        tracing::debug!("Filter changed: {:?}", self.criteria);
        self.render_roster().await
    }

    async fn render_roster(&self) -> String {
        let players = self.filter_players.execute(&self.criteria).await;
        self.formatter.format_roster(&self.criteria, &players)
    }

    async fn open(&mut self, raw_id: &str) -> String {
        if let Err(e) = self.open_chat.execute_by_id(raw_id).await {
            return format!("{e}\n");
        }
        let session = self.get_conversation.execute().await;
        let header = session
            .selected_player()
            .map(|player| self.formatter.format_chat_opened(player))
            .unwrap_or_default();
        header + &self.drain_new_messages().await
    }

    async fn say(&mut self, text: &str) -> String {
        match self.send_message.execute(text).await {
            SendOutcome::Sent { .. } => self.drain_new_messages().await,
            SendOutcome::Ignored(IgnoreReason::EmptyMessage) => String::new(),
            SendOutcome::Ignored(IgnoreReason::NoPlayerSelected) => {
                "Сначала выберите игрока: /chat <id>\n".to_string()
            }
            SendOutcome::Ignored(IgnoreReason::ChatClosed) => {
                "Чат закрыт. Откройте его снова: /chat <id>\n".to_string()
            }
        }
    }
}
