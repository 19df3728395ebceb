//! Session state: the table, its history and derived status.
//!
//! ## Session
//!
//! Owns everything the UI shows:
//! - Seated players in display order
//! - Append-only history of life changes
//! - Derived loser/winner annotations
//! - Started and game-over flags
//!
//! Uses `im` persistent vectors so a session can be cloned for
//! rendering or inspection in O(1).
//!
//! ## Phases
//!
//! `Setup` → `InProgress` on the first life change, `InProgress` →
//! `GameOver` when one player is left alive, `GameOver` → `Setup` when the
//! notice is acknowledged. Nothing else changes the phase.

use im::Vector;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::{LifeAction, Sign};
use super::config::SessionConfig;
use super::error::{LifeError, LifeResult};
use super::player::{Player, PlayerId, PlayerIdAllocator};
use crate::events::SessionEvent;
use crate::rules::Status;

/// Events produced by a single action. Most actions produce one or two.
pub type Events = SmallVec<[SessionEvent; 2]>;

/// Coarse session state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No life has changed yet; players may still be added.
    Setup,
    /// At least one life change has happened.
    InProgress,
    /// A winner was declared and the notice is up.
    GameOver,
}

/// A life-counting session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    config: SessionConfig,

    // === Table ===
    players: Vector<Player>,
    ids: PlayerIdAllocator,

    // === History ===
    history: Vector<String>,

    // === Derived status ===
    loser: Option<String>,
    winner: Option<String>,

    // === Flags ===
    game_started: bool,
    game_over: bool,
}

impl Session {
    /// Create a session with the config's default table.
    #[must_use]
    pub fn new(config: SessionConfig) -> Self {
        let mut session = Self {
            config,
            players: Vector::new(),
            ids: PlayerIdAllocator::default(),
            history: Vector::new(),
            loser: None,
            winner: None,
            game_started: false,
            game_over: false,
        };
        session.seat_default_table();
        session
    }

    fn seat_default_table(&mut self) {
        self.players.clear();
        for seat in 1..=self.config.default_player_count {
            let id = self.ids.next_id();
            self.players.push_back(Player::new(
                id,
                Player::default_name(seat),
                self.config.starting_life,
            ));
        }
    }

    // === Accessors ===

    /// Get the session configuration.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Seated players in display order.
    #[must_use]
    pub fn players(&self) -> &Vector<Player> {
        &self.players
    }

    /// Get the number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Look up a player by id.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Id of the player in a 0-based seat.
    #[must_use]
    pub fn player_at(&self, seat: usize) -> Option<PlayerId> {
        self.players.get(seat).map(|p| p.id)
    }

    /// History entries, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<String> {
        &self.history
    }

    /// Name of the most recently detected loser.
    #[must_use]
    pub fn loser(&self) -> Option<&str> {
        self.loser.as_deref()
    }

    /// Name of the last player standing.
    #[must_use]
    pub fn winner(&self) -> Option<&str> {
        self.winner.as_deref()
    }

    /// True after the first life change.
    #[must_use]
    pub fn game_started(&self) -> bool {
        self.game_started
    }

    /// True while the game-over notice is up.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.game_started {
            Phase::InProgress
        } else {
            Phase::Setup
        }
    }

    /// Check if "Add Player" would seat someone.
    #[must_use]
    pub fn can_add_player(&self) -> bool {
        !self.game_started && self.players.len() < self.config.max_players
    }

    fn player_mut(&mut self, id: PlayerId) -> LifeResult<&mut Player> {
        self.players
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(LifeError::UnknownPlayer(id))
    }

    // === Operations ===

    /// Seat a new player with the starting life.
    ///
    /// Returns `None` (and changes nothing) once the game has started or
    /// the table is full.
    pub fn add_player(&mut self) -> Option<PlayerId> {
        if !self.can_add_player() {
            debug!(
                "add player ignored (started: {}, seats: {}/{})",
                self.game_started,
                self.players.len(),
                self.config.max_players
            );
            return None;
        }

        let id = self.ids.next_id();
        let name = Player::default_name(self.players.len() + 1);
        debug!("seating {name} as {id}");
        self.players
            .push_back(Player::new(id, name, self.config.starting_life));
        Some(id)
    }

    /// Add `delta` to a player's life, record it, and re-evaluate status.
    pub fn change_life(&mut self, id: PlayerId, delta: i64) -> LifeResult<Events> {
        let player = self.player_mut(id)?;
        player.life = player.life.saturating_add(delta);
        let life = player.life;
        let entry = describe_change(&player.name, delta);

        debug!("{entry} ({id} now at {life})");
        self.history.push_back(entry);
        self.game_started = true;

        let mut events = Events::new();
        events.push(SessionEvent::LifeChanged {
            player: id,
            delta,
            life,
        });

        let previous_loser = self.loser.clone();
        let was_over = self.game_over;
        self.recompute_status();

        if self.loser != previous_loser {
            events.push(SessionEvent::LoserChanged {
                loser: self.loser.clone(),
            });
        }
        if !was_over && self.game_over {
            if let Some(winner) = &self.winner {
                events.push(SessionEvent::GameOver {
                    winner: winner.clone(),
                });
            }
        }

        Ok(events)
    }

    /// Apply ±N where N is parsed from the custom delta field.
    ///
    /// Input that is not an integer leaves the session untouched.
    pub fn apply_custom_delta(
        &mut self,
        id: PlayerId,
        sign: Sign,
        input: &str,
    ) -> LifeResult<Events> {
        let amount = parse_delta(input)?;
        self.change_life(id, sign.apply(amount))
    }

    /// Overwrite a player's display name. History keeps the old name.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> LifeResult<()> {
        let player = self.player_mut(id)?;
        player.name = name.into();
        debug!("{id} renamed to {:?}", player.name);
        Ok(())
    }

    /// Re-scan every player and update loser/winner.
    ///
    /// Raises the game-over notice when exactly one player is alive.
    pub fn recompute_status(&mut self) -> Status {
        let status = Status::evaluate(&self.players);
        self.loser = status.loser.clone();

        if let Some(winner) = &status.winner {
            if !self.game_over {
                info!("{winner} wins ({} players seated)", self.players.len());
            }
            self.winner = Some(winner.clone());
            self.game_over = true;
        }

        status
    }

    /// Discard all state and reseat the default table.
    pub fn reset(&mut self) {
        info!(
            "resetting session ({} history entries discarded)",
            self.history.len()
        );
        self.seat_default_table();
        self.history.clear();
        self.loser = None;
        self.winner = None;
        self.game_started = false;
        self.game_over = false;
    }

    /// Dismiss the game-over notice. Resets the session.
    ///
    /// Returns false (and does nothing) outside `GameOver`.
    pub fn acknowledge_game_over(&mut self) -> bool {
        if !self.game_over {
            return false;
        }
        self.reset();
        true
    }

    /// Apply an action and report what happened.
    pub fn apply(&mut self, action: &LifeAction) -> LifeResult<Events> {
        let mut events = Events::new();

        match action {
            LifeAction::AddPlayer => {
                if let Some(player) = self.add_player() {
                    events.push(SessionEvent::PlayerAdded { player });
                }
            }
            LifeAction::ChangeLife { player, delta } => {
                events = self.change_life(*player, *delta)?;
            }
            LifeAction::CustomDelta {
                player,
                sign,
                input,
            } => {
                events = self.apply_custom_delta(*player, *sign, input)?;
            }
            LifeAction::Rename { player, name } => {
                self.rename_player(*player, name.clone())?;
                events.push(SessionEvent::PlayerRenamed { player: *player });
            }
            LifeAction::Reset => {
                self.reset();
                events.push(SessionEvent::Reset);
            }
            LifeAction::AcknowledgeGameOver => {
                if self.acknowledge_game_over() {
                    events.push(SessionEvent::Reset);
                }
            }
        }

        Ok(events)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(SessionConfig::default())
    }
}

/// Parse the custom delta field.
///
/// ```
/// use life_counter::core::parse_delta;
///
/// assert_eq!(parse_delta(" 7 ").unwrap(), 7);
/// assert!(parse_delta("abc").is_err());
/// ```
pub fn parse_delta(input: &str) -> LifeResult<i64> {
    input.trim().parse::<i64>().map_err(|_| {
        debug!("ignoring non-numeric delta {input:?}");
        LifeError::InvalidDelta {
            input: input.to_string(),
        }
    })
}

fn describe_change(name: &str, delta: i64) -> String {
    if delta < 0 {
        format!("{name} lost {} life.", delta.unsigned_abs())
    } else {
        format!("{name} gained {delta} life.")
    }
}
