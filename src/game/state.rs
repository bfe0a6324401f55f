//! Session state machine
//!
//! Owns the hunter, the towns visited so far and the random source, and
//! turns one menu action into one message.

use std::mem;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::data::GameConfig;
use crate::entities::{Catalog, Hunter};
use crate::progression::Difficulty;
use crate::world::Town;
use super::action::Action;
use super::dice::RandomSource;

/// Where the hunt stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    /// Every treasure collected
    Victory,
    /// Gold went below zero
    Bankrupt,
    /// The player gave up
    Retired,
}

impl GameState {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameState::Playing)
    }
}

/// One playthrough
pub struct Session<R = StdRng> {
    hunter: Hunter,
    difficulty: Difficulty,
    catalog: Catalog,
    /// Town the hunter is in
    town: Town,
    /// Towns left behind, in visit order
    visited: Vec<Town>,
    rng: R,
    state: GameState,
}

impl Session<StdRng> {
    /// Start a session, seeded from the config or from entropy
    pub fn new(name: &str, difficulty: Difficulty, config: &GameConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(name, difficulty, config, rng)
    }
}

impl<R: RandomSource> Session<R> {
    /// Start a session on any random source
    pub fn with_rng(name: &str, difficulty: Difficulty, config: &GameConfig, mut rng: R) -> Self {
        let hunter = Hunter::for_difficulty(name, difficulty, config.kit_capacity);
        let catalog = config.catalog();
        let town = Town::generate(&mut rng, difficulty, catalog.clone());
        log::info!(
            "New hunt for {} on {} with {} gold",
            hunter.name(),
            difficulty,
            hunter.gold()
        );
        Self {
            hunter,
            difficulty,
            catalog,
            town,
            visited: Vec::new(),
            rng,
            state: GameState::Playing,
        }
    }

    pub fn hunter(&self) -> &Hunter {
        &self.hunter
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn current_town(&self) -> &Town {
        &self.town
    }

    /// Town by visit order, the first town being 0
    pub fn town(&self, index: usize) -> Option<&Town> {
        if index == self.visited.len() {
            Some(&self.town)
        } else {
            self.visited.get(index)
        }
    }

    /// Number of towns seen, including the current one
    pub fn towns_visited(&self) -> usize {
        self.visited.len() + 1
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    /// Welcome for the current town
    pub fn greeting(&self) -> String {
        self.town.hunter_arrives(&self.hunter)
    }

    /// Play one turn
    pub fn act(&mut self, action: Action) -> String {
        if self.state.is_over() {
            return "The hunt is over.".to_string();
        }

        let message = match action {
            Action::Shop { mode, item } => self.town.enter_shop(&mut self.hunter, mode, item),
            Action::Move => self.move_on(),
            Action::Hunt => self.town.hunt_for_treasure(&mut self.hunter),
            Action::Dig => self.town.dig_for_gold(&mut self.hunter, &mut self.rng),
            Action::LookForTrouble => self.town.look_for_trouble(&mut self.hunter, &mut self.rng),
            Action::Exit => {
                self.set_state(GameState::Retired);
                return format!("Fare thee well, {}!", self.hunter.name());
            }
        };

        self.check_end();
        message
    }

    /// Closing words for a finished hunt
    pub fn farewell(&self) -> Option<&'static str> {
        match self.state {
            GameState::Playing => None,
            GameState::Victory => Some("Congrats, you collected all the treasures of the land!"),
            GameState::Bankrupt => {
                Some("You ran out of money and are forced to stop your hunt and dreams.")
            }
            GameState::Retired => Some("Until next time... bye bye"),
        }
    }

    fn move_on(&mut self) -> String {
        let departure = self.town.leave_town(&mut self.hunter, &mut self.rng);
        if !departure.left {
            return departure.message;
        }

        let next = Town::generate(&mut self.rng, self.difficulty, self.catalog.clone());
        let previous = mem::replace(&mut self.town, next);
        self.visited.push(previous);
        log::info!("{} reached town #{}", self.hunter.name(), self.towns_visited());

        format!("{}\n{}", departure.message, self.greeting())
    }

    fn check_end(&mut self) {
        if self.hunter.has_all_treasure() {
            self.set_state(GameState::Victory);
        } else if self.hunter.is_broke() {
            self.set_state(GameState::Bankrupt);
        }
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("State transition: {:?} -> {:?}", self.state, state);
        if state.is_over() {
            log::info!(
                "Hunt ended ({:?}) after {} towns with {} gold",
                state,
                self.towns_visited(),
                self.hunter.gold()
            );
        }
        self.state = state;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::ShopMode;
    use crate::game::ScriptedRolls;
    use crate::items::{Item, Treasure};
    use crate::world::Terrain;

    #[test]
    fn test_new_session_from_difficulty() {
        let session = Session::new("kenji", Difficulty::Special, &GameConfig::default());
        assert_eq!(session.hunter().name(), "Samurai kenji");
        assert_eq!(session.hunter().gold(), 20);
        assert_eq!(session.state(), GameState::Playing);
        assert_eq!(session.towns_visited(), 1);
        assert!(session.greeting().starts_with("Welcome to town, Samurai kenji."));
    }

    #[test]
    fn test_seeded_sessions_match() {
        let config = GameConfig { seed: Some(5), ..GameConfig::default() };
        let a = Session::new("ada", Difficulty::Normal, &config);
        let b = Session::new("ada", Difficulty::Normal, &config);
        assert_eq!(a.current_town().terrain(), b.current_town().terrain());
        assert_eq!(a.current_town().treasure(), b.current_town().treasure());
    }

    #[test]
    fn test_move_to_new_town() {
        // Town 1: Mountains, Crown, calm. Crossing keeps the rope. Town 2: Ocean.
        let rolls = ScriptedRolls::new(vec![0.0, 0.0, 0.9, 0.9, 0.2, 0.3, 0.9]);
        let mut session = Session::with_rng("ada", Difficulty::Test, &GameConfig::default(), rolls);
        assert_eq!(session.current_town().terrain(), Terrain::Mountains);

        let message = session.act(Action::Move);
        assert!(message.starts_with("You used your rope to cross the Mountains."));
        assert!(message.contains("Welcome to town, ada."));
        assert_eq!(session.towns_visited(), 2);
        assert_eq!(session.current_town().terrain(), Terrain::Ocean);
        assert_eq!(session.town(0).map(|t| t.terrain()), Some(Terrain::Mountains));
        assert!(session.hunter().has_item(Item::Rope));
    }

    #[test]
    fn test_broken_item_keeps_hunter_in_town() {
        let rolls = ScriptedRolls::new(vec![0.0, 0.0, 0.9, 0.1]);
        let mut session = Session::with_rng("ada", Difficulty::Test, &GameConfig::default(), rolls);

        let message = session.act(Action::Move);
        assert!(message.contains("broke"));
        assert_eq!(session.towns_visited(), 1);
        assert!(!session.hunter().has_item(Item::Rope));

        let message = session.act(Action::Move);
        assert!(message.contains("don't have a rope"));
        assert_eq!(session.towns_visited(), 1);
    }

    #[test]
    fn test_shop_round_trip() {
        let rolls = ScriptedRolls::new(vec![0.5]);
        let mut session = Session::with_rng("ada", Difficulty::Normal, &GameConfig::default(), rolls);

        session.act(Action::Shop { mode: ShopMode::Buy, item: Item::Boots });
        assert_eq!(session.hunter().gold(), 5);
        session.act(Action::Shop { mode: ShopMode::Sell, item: Item::Boots });
        assert_eq!(session.hunter().gold(), 7);
    }

    #[test]
    fn test_bankrupt_after_lost_brawl() {
        // Calm town (0.9 >= 0.4), brawl found, lost, pays 10
        let rolls = ScriptedRolls::new(vec![0.0, 0.0, 0.9, 0.5, 0.1, 0.95]);
        let config = GameConfig::default();
        let mut session = Session::with_rng("ada", Difficulty::Normal, &config, rolls);
        session.act(Action::Shop { mode: ShopMode::Buy, item: Item::Water });
        assert_eq!(session.hunter().gold(), 8);

        let message = session.act(Action::LookForTrouble);
        assert!(message.contains("lost the brawl"));
        assert_eq!(session.hunter().gold(), -2);
        assert_eq!(session.state(), GameState::Bankrupt);
        assert!(session.farewell().is_some());

        assert_eq!(session.act(Action::Hunt), "The hunt is over.");
        assert_eq!(session.hunter().treasures().count(), 0);
    }

    #[test]
    fn test_victory_after_all_treasures() {
        // Each town: terrain 0.0 (Mountains), treasure roll picks each in turn,
        // calm, and every crossing keeps the rope.
        let rolls = ScriptedRolls::new(vec![
            0.0, 0.0, 0.9, // town 1: Crown
            0.9, 0.0, 0.3, 0.9, // keep rope, town 2: Trophy
            0.9, 0.0, 0.6, 0.9, // town 3: Gem
            0.9, 0.0, 0.8, 0.9, // town 4: Dust
        ]);
        let mut session = Session::with_rng("ada", Difficulty::Test, &GameConfig::default(), rolls);

        for expected in Treasure::ALL {
            assert_eq!(session.current_town().treasure(), expected);
            session.act(Action::Hunt);
            if session.state().is_over() {
                break;
            }
            session.act(Action::Move);
        }
        assert_eq!(session.state(), GameState::Victory);
        assert_eq!(session.towns_visited(), 4);
    }

    #[test]
    fn test_exit() {
        let mut session = Session::with_rng(
            "ada",
            Difficulty::Easy,
            &GameConfig::default(),
            ScriptedRolls::new(vec![0.5]),
        );
        assert_eq!(session.act(Action::Exit), "Fare thee well, ada!");
        assert_eq!(session.state(), GameState::Retired);
        assert_eq!(session.farewell(), Some("Until next time... bye bye"));
    }
}
