use quiz_types::Player;

/// Score standings as shown on the host display.
///
/// Rebuilt from scratch from every roster push; the server owns the scores
/// and the client never edits them in place.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    standings: Vec<Player>,
}

impl Leaderboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the standings with a fresh roster, ordered by score
    /// descending. The sort is stable so tied players keep the order the
    /// server pushed them in.
    pub fn replace(&mut self, mut players: Vec<Player>) {
        players.sort_by(|a, b| b.score.cmp(&a.score));
        self.standings = players;
    }

    pub fn standings(&self) -> &[Player] {
        &self.standings
    }

    pub fn clear(&mut self) {
        self.standings.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.standings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(nickname: &str, score: i32) -> Player {
        Player {
            nickname: nickname.to_string(),
            score,
        }
    }

    #[test]
    fn orders_by_score_descending() {
        let mut board = Leaderboard::new();
        board.replace(vec![
            player("Carol", 5),
            player("Alice", 12),
            player("Bob", 9),
        ]);

        let names: Vec<&str> = board
            .standings()
            .iter()
            .map(|p| p.nickname.as_str())
            .collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn order_is_non_increasing_for_any_roster() {
        let mut board = Leaderboard::new();
        board.replace(vec![
            player("a", 0),
            player("b", 7),
            player("c", 7),
            player("d", -3),
            player("e", 21),
        ]);

        let scores: Vec<i32> = board.standings().iter().map(|p| p.score).collect();
        assert!(scores.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn ties_keep_pushed_order() {
        let mut board = Leaderboard::new();
        board.replace(vec![
            player("First", 10),
            player("Second", 10),
            player("Third", 10),
        ]);

        let names: Vec<&str> = board
            .standings()
            .iter()
            .map(|p| p.nickname.as_str())
            .collect();
        assert_eq!(names, ["First", "Second", "Third"]);
    }

    #[test]
    fn replace_discards_previous_roster() {
        let mut board = Leaderboard::new();
        board.replace(vec![player("Alice", 3), player("Bob", 1)]);
        board.replace(vec![player("Bob", 1)]);

        assert_eq!(board.standings().len(), 1);
        assert_eq!(board.standings()[0].nickname, "Bob");
    }
}
