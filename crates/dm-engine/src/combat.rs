//! Turn-based combat between the player and a monster.
//!
//! Damage is fixed: the player always hits for their attack power and the
//! monster for its level. The player strikes first each round, and a
//! monster that falls does not strike back.

use dm_core::{Monster, Player};
use tracing::info;

use crate::error::{EngineError, EngineResult};

/// Where a fight stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombatState {
    /// Both sides still stand.
    Ongoing,
    /// The monster fell.
    PlayerWins,
    /// The player fell.
    MonsterWins,
}

impl CombatState {
    /// Whether the fight is over.
    pub fn is_finished(&self) -> bool {
        !matches!(self, Self::Ongoing)
    }
}

/// One hit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blow {
    /// Round the blow landed in (1-based).
    pub round: u32,
    /// Who struck.
    pub attacker: String,
    /// Who was hit.
    pub defender: String,
    /// Damage dealt.
    pub damage: i32,
    /// Defender's hit points afterwards, never below zero.
    pub remaining: i32,
}

impl std::fmt::Display for Blow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} hits {} for {}. {} HP: {}",
            self.attacker, self.defender, self.damage, self.defender, self.remaining
        )
    }
}

/// Everything that happened in a finished fight.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CombatReport {
    /// Every blow, in order.
    pub blows: Vec<Blow>,
    /// Rounds fought.
    pub rounds: u32,
    /// How it ended. Never `Ongoing`.
    pub outcome: CombatState,
}

/// A fight in progress.
#[derive(Debug)]
pub struct Combat<'a> {
    player: &'a mut Player,
    monster: &'a mut Monster,
    state: CombatState,
    round: u32,
    blows: Vec<Blow>,
}

impl<'a> Combat<'a> {
    /// Square the two sides off.
    ///
    /// Both need a positive attack, otherwise a round could pass without
    /// anyone losing hit points and the fight would never end.
    pub fn new(player: &'a mut Player, monster: &'a mut Monster) -> EngineResult<Self> {
        if player.attack <= 0 {
            return Err(EngineError::InvalidArgument(format!(
                "{} cannot fight with attack {}",
                player.name, player.attack
            )));
        }
        if monster.level <= 0 {
            return Err(EngineError::InvalidArgument(format!(
                "{} cannot fight at level {}",
                monster.name, monster.level
            )));
        }
        Ok(Self {
            player,
            monster,
            state: CombatState::Ongoing,
            round: 0,
            blows: Vec::new(),
        })
    }

    /// Current state.
    pub fn state(&self) -> CombatState {
        self.state
    }

    /// Rounds fought so far.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Fight one round. Does nothing once the fight is over.
    pub fn step(&mut self) -> CombatState {
        if self.state.is_finished() {
            return self.state;
        }
        self.round += 1;

        self.monster.hp = self.monster.hp.saturating_sub(self.player.attack);
        self.blows.push(Blow {
            round: self.round,
            attacker: self.player.name.clone(),
            defender: self.monster.name.clone(),
            damage: self.player.attack,
            remaining: self.monster.hp.max(0),
        });
        if self.monster.hp <= 0 {
            self.state = CombatState::PlayerWins;
            return self.state;
        }

        self.player.hp = self.player.hp.saturating_sub(self.monster.level);
        self.blows.push(Blow {
            round: self.round,
            attacker: self.monster.name.clone(),
            defender: self.player.name.clone(),
            damage: self.monster.level,
            remaining: self.player.display_hp(),
        });
        if self.player.hp <= 0 {
            self.state = CombatState::MonsterWins;
        }
        self.state
    }

    /// Fight to the end.
    pub fn run(mut self) -> CombatReport {
        while !self.step().is_finished() {}
        info!(
            player = %self.player.name,
            monster = %self.monster.name,
            rounds = self.round,
            outcome = ?self.state,
            "combat finished"
        );
        CombatReport {
            blows: self.blows,
            rounds: self.round,
            outcome: self.state,
        }
    }
}

/// Fight `player` against `monster` until one of them falls.
pub fn resolve(player: &mut Player, monster: &mut Monster) -> EngineResult<CombatReport> {
    Ok(Combat::new(player, monster)?.run())
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn player_wins_in_two_rounds() {
        let mut player = Player::new("Hero", 20, 5);
        let mut wolf = Monster::new("Wolf", 1, 8);

        let report = resolve(&mut player, &mut wolf).unwrap();
        assert_eq!(report.outcome, CombatState::PlayerWins);
        assert_eq!(report.rounds, 2);
        assert_eq!(player.hp, 19);
        assert!(!wolf.is_alive());

        // hero, wolf, hero: no retaliation after the killing blow
        assert_eq!(report.blows.len(), 3);
        assert_eq!(report.blows[0].remaining, 3);
        assert_eq!(report.blows[1].attacker, "Wolf");
        assert_eq!(report.blows[1].remaining, 19);
        assert_eq!(report.blows[2].remaining, 0);
    }

    #[test]
    fn monster_wins_in_one_round() {
        let mut player = Player::new("Hero", 5, 1);
        let mut ogre = Monster::new("Ogre", 50, 50);

        let report = resolve(&mut player, &mut ogre).unwrap();
        assert_eq!(report.outcome, CombatState::MonsterWins);
        assert_eq!(report.rounds, 1);
        assert!(player.hp <= 0);
        assert_eq!(ogre.hp, 49);
        // shown hp is floored
        assert_eq!(report.blows[1].remaining, 0);
    }

    #[test]
    fn step_walks_the_state_machine() {
        let mut player = Player::new("Hero", 20, 5);
        let mut wolf = Monster::new("Wolf", 1, 8);
        let mut combat = Combat::new(&mut player, &mut wolf).unwrap();

        assert_eq!(combat.state(), CombatState::Ongoing);
        assert_eq!(combat.step(), CombatState::Ongoing);
        assert_eq!(combat.step(), CombatState::PlayerWins);
        // finished fights stay finished
        assert_eq!(combat.step(), CombatState::PlayerWins);
        assert_eq!(combat.round(), 2);
    }

    #[test]
    fn zero_attack_is_rejected() {
        let mut player = Player::new("Hero", 20, 0);
        let mut wolf = Monster::new("Wolf", 1, 8);
        assert!(matches!(
            resolve(&mut player, &mut wolf),
            Err(EngineError::InvalidArgument(_))
        ));
        assert_eq!(wolf.hp, 8);
    }

    #[test]
    fn zero_level_monster_is_rejected() {
        let mut player = Player::new("Hero", 20, 5);
        let mut slime = Monster::new("Slime", 0, 100);
        assert!(resolve(&mut player, &mut slime).is_err());
        assert_eq!(player.hp, 20);
    }

    #[test]
    fn blow_display() {
        let blow = Blow {
            round: 1,
            attacker: "Hero".into(),
            defender: "Wolf".into(),
            damage: 5,
            remaining: 3,
        };
        assert_eq!(blow.to_string(), "Hero hits Wolf for 5. Wolf HP: 3");
    }

    proptest! {
        #[test]
        fn fights_end_with_exactly_one_side_down(
            hp in 1i32..200,
            attack in 1i32..30,
            level in 1i32..30,
            monster_hp in 1i32..200,
        ) {
            let mut player = Player::new("Hero", hp, attack);
            let mut monster = Monster::new("Beast", level, monster_hp);

            let report = resolve(&mut player, &mut monster).unwrap();
            match report.outcome {
                CombatState::PlayerWins => {
                    prop_assert!(monster.hp <= 0);
                    prop_assert!(player.hp > 0);
                }
                CombatState::MonsterWins => {
                    prop_assert!(player.hp <= 0);
                    prop_assert!(monster.hp > 0);
                }
                CombatState::Ongoing => prop_assert!(false, "fight ended while ongoing"),
            }
            let expected_rounds = (monster_hp + attack - 1) / attack;
            prop_assert!(report.rounds as i32 <= expected_rounds);
        }

        #[test]
        fn fights_are_deterministic(
            hp in 1i32..100,
            attack in 1i32..20,
            level in 1i32..20,
            monster_hp in 1i32..100,
        ) {
            let run = || {
                let mut player = Player::new("Hero", hp, attack);
                let mut monster = Monster::new("Beast", level, monster_hp);
                let report = resolve(&mut player, &mut monster).unwrap();
                (report, player.hp, monster.hp)
            };
            prop_assert_eq!(run(), run());
        }
    }
}
