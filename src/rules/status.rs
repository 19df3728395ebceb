//! Derived table status: loser, winner, alive count.
//!
//! Status is never stored independently of the players it is computed from.
//! The session re-evaluates it after every life change.

use serde::{Deserialize, Serialize};

use crate::core::player::Player;

/// Result of scanning every seated player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    /// Last player in seat order whose life is at or below zero.
    pub loser: Option<String>,

    /// Sole surviving player, if exactly one is alive.
    pub winner: Option<String>,

    /// Number of players with life above zero.
    pub alive: usize,
}

impl Status {
    /// Scan players in seat order.
    ///
    /// When several players are at or below zero, the last one scanned is
    /// reported as the loser.
    ///
    /// ```
    /// use life_counter::core::{Player, PlayerId};
    /// use life_counter::rules::Status;
    ///
    /// let players = [
    ///     Player::new(PlayerId::new(0), "A", 0),
    ///     Player::new(PlayerId::new(1), "B", 12),
    /// ];
    /// let status = Status::evaluate(&players);
    /// assert_eq!(status.loser.as_deref(), Some("A"));
    /// assert_eq!(status.winner.as_deref(), Some("B"));
    /// ```
    pub fn evaluate<'a>(players: impl IntoIterator<Item = &'a Player>) -> Self {
        let mut status = Status::default();
        let mut last_alive = None;

        for player in players {
            if player.is_alive() {
                status.alive += 1;
                last_alive = Some(player);
            } else {
                status.loser = Some(player.name.clone());
            }
        }

        if status.alive == 1 {
            status.winner = last_alive.map(|p| p.name.clone());
        }

        status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::player::PlayerId;

    fn table(lives: &[i64]) -> Vec<Player> {
        lives
            .iter()
            .enumerate()
            .map(|(i, &life)| Player::new(PlayerId::new(i as u32), Player::default_name(i + 1), life))
            .collect()
    }

    #[test]
    fn test_everyone_alive() {
        let status = Status::evaluate(&table(&[20, 20, 20, 20]));

        assert_eq!(status.alive, 4);
        assert_eq!(status.loser, None);
        assert_eq!(status.winner, None);
    }

    #[test]
    fn test_loser_without_winner() {
        let status = Status::evaluate(&table(&[20, -1, 20]));

        assert_eq!(status.alive, 2);
        assert_eq!(status.loser.as_deref(), Some("Player 2"));
        assert_eq!(status.winner, None);
    }

    #[test]
    fn test_last_scanned_loser_wins_tie() {
        let status = Status::evaluate(&table(&[0, 5, -3, 0]));

        assert_eq!(status.loser.as_deref(), Some("Player 4"));
        assert_eq!(status.winner.as_deref(), Some("Player 2"));
    }

    #[test]
    fn test_no_survivors_has_no_winner() {
        let status = Status::evaluate(&table(&[0, -2]));

        assert_eq!(status.alive, 0);
        assert_eq!(status.loser.as_deref(), Some("Player 2"));
        assert_eq!(status.winner, None);
    }
}
