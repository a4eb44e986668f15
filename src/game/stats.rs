//! Running statistics across games in one session

use super::GameStatus;
use std::collections::BTreeMap;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Attempts needed -> number of games won with that many attempts
    pub guess_distribution: BTreeMap<usize, usize>,
}

impl Statistics {
    /// Record a finished game. Games still in progress are ignored.
    pub fn record(&mut self, status: GameStatus) {
        match status {
            GameStatus::InProgress => {}
            GameStatus::Won { attempts } => {
                self.total_games += 1;
                self.games_won += 1;
                *self.guess_distribution.entry(attempts).or_insert(0) += 1;
            }
            GameStatus::Lost => self.total_games += 1,
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(GameStatus::Won { attempts: 3 });
        stats.record(GameStatus::Won { attempts: 3 });
        stats.record(GameStatus::Lost);
        stats.record(GameStatus::InProgress);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution.get(&3), Some(&2));
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn empty_win_rate() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
