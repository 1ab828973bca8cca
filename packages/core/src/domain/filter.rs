//! Roster filter
//!
//! 名簿に対する複数条件のフィルタ。全ての関数は純粋関数で、入力の順序を保ったまま
//! 条件を満たすプレイヤーだけを返します。

use super::{entity::Player, game::Game};

/// フィルタ条件
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCriteria {
    pub selected_game: Game,
    pub search_term: String,
    pub min_rating: Option<i32>,
    pub selected_rank: Option<String>,
}

/// フィルタ条件を更新する入力イベント
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    SelectGame(Game),
    Search(String),
    /// 入力欄の生テキスト。数値として解釈できなければ下限なしとして扱う
    MinRating(String),
    /// 空文字列は「全てのランク」
    Rank(String),
    /// ゲーム以外の条件をクリアする
    Reset,
}

impl FilterCriteria {
    pub fn new(selected_game: Game) -> Self {
        Self {
            selected_game,
            search_term: String::new(),
            min_rating: None,
            selected_rank: None,
        }
    }

    /// Reducer: return the criteria with `event` applied.
    ///
    /// Switching games keeps the other filters, including a rank that does not
    /// exist for the new game.
    pub fn apply(self, event: FilterEvent) -> Self {
        match event {
            FilterEvent::SelectGame(game) => Self {
                selected_game: game,
                ..self
            },
            FilterEvent::Search(term) => Self {
                search_term: term,
                ..self
            },
            FilterEvent::MinRating(raw) => Self {
                min_rating: parse_min_rating(&raw),
                ..self
            },
            FilterEvent::Rank(rank) => Self {
                selected_rank: (!rank.is_empty()).then_some(rank),
                ..self
            },
            FilterEvent::Reset => Self::new(self.selected_game),
        }
    }

    pub fn matches(&self, player: &Player) -> bool {
        self.matches_game(player)
            && self.matches_search(player)
            && self.matches_rating(player)
            && self.matches_rank(player)
    }

    fn matches_game(&self, player: &Player) -> bool {
        player.game == self.selected_game
    }

    fn matches_search(&self, player: &Player) -> bool {
        if self.search_term.is_empty() {
            return true;
        }
        let needle = self.search_term.to_lowercase();
        player.name.to_lowercase().contains(&needle)
            || player.description.to_lowercase().contains(&needle)
    }

    fn matches_rating(&self, player: &Player) -> bool {
        self.min_rating.is_none_or(|min| player.rating >= min)
    }

    fn matches_rank(&self, player: &Player) -> bool {
        match self.selected_rank.as_deref() {
            None | Some("") => true,
            Some(rank) => player.rank == rank,
        }
    }
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self::new(Game::Dota)
    }
}

/// Apply `criteria` to `roster`, keeping roster order.
pub fn filter_players(roster: &[Player], criteria: &FilterCriteria) -> Vec<Player> {
    roster
        .iter()
        .filter(|player| criteria.matches(player))
        .cloned()
        .collect()
}

/// Parse the minimum-rating input.
///
/// Accepts an optional sign followed by digits after leading whitespace and
/// ignores whatever follows the digits (`"4000abc"` is 4000). Input without
/// leading digits is no minimum. Out-of-range values saturate.
pub fn parse_min_rating(raw: &str) -> Option<i32> {
    let input = raw.trim_start();
    let (negative, rest) = match input.as_bytes().first() {
        Some(b'-') => (true, &input[1..]),
        Some(b'+') => (false, &input[1..]),
        _ => (false, input),
    };
    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    let magnitude = rest[..digits_len].parse::<i64>().unwrap_or(i64::MAX);
    let value = if negative { -magnitude } else { magnitude };
    Some(value.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
}
