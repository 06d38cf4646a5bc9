//! The duel state machine.
//!
//! ## Phases
//!
//! ```text
//! AwaitingInput --submit/time out--> Settled(result) --advance--> AwaitingInput
//!                        \
//!                         `--a life hits 0--> MatchOver(result)
//! ```
//!
//! Commands that don't fit the current phase are ignored (logged at debug
//! level) and leave the state untouched. `restart` is valid from any phase.
//!
//! ## Damage
//!
//! Exactly one player's life changes per settled turn: the opponent on a
//! correct answer, the answering player otherwise. See `DamageRules`.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::timer::{TimerEvent, TurnTimer};
use super::turn::{AnswerResult, TurnOutcome, TurnState};
use crate::core::{DuelResult, GameRng, MatchConfig, Player, PlayerId, PlayerMap, RandomSource};
use crate::problems::{InputPolicy, Problem, ProblemGenerator};
use crate::rules::{Hit, MatchResult};
use crate::stats::{MatchReport, Medal, MedalEvaluator, PlayerStats};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// The active player may type and submit.
    AwaitingInput,
    /// The turn is over; waiting for `advance_turn`.
    Settled(AnswerResult),
    /// Terminal until `restart`.
    MatchOver(MatchResult),
}

/// A two-player duel over problems from one generator.
///
/// ```
/// use math_duel::core::MatchConfig;
/// use math_duel::game::Match;
/// use math_duel::problems::{ArithmeticGenerator, OperatorSet};
///
/// let generator = ArithmeticGenerator::with_operators(OperatorSet::all());
/// let mut duel = Match::new(generator, MatchConfig::default(), 7).unwrap();
///
/// let answer = duel.problem().expected_text();
/// let outcome = duel.submit_answer(&answer, 30).unwrap();
///
/// assert!(outcome.result.is_correct());
/// assert_eq!(duel.player(outcome.target).life, 270);
/// assert!(duel.advance_turn());
/// ```
pub struct Match<G: ProblemGenerator> {
    // === Setup ===
    config: MatchConfig,
    generator: G,
    rng: Box<dyn RandomSource + Send>,

    // === Match progression ===
    players: PlayerMap<Player>,
    stats: PlayerMap<PlayerStats>,
    turn: TurnState,
    phase: Phase,
    /// Turns started since the last restart, starting at 1.
    turn_number: u32,
    last_outcome: Option<TurnOutcome>,
}

fn fresh_players(config: &MatchConfig) -> PlayerMap<Player> {
    config
        .player_names
        .map(|_, name| Player::new(name.clone(), config.max_life))
}

impl<G: ProblemGenerator> Match<G> {
    /// Create a match seeded for reproducible problems.
    pub fn new(generator: G, config: MatchConfig, seed: u64) -> DuelResult<Self> {
        Self::with_rng(generator, config, GameRng::new(seed))
    }

    /// Create a match drawing problems from `rng`.
    pub fn with_rng(
        generator: G,
        config: MatchConfig,
        rng: impl RandomSource + Send + 'static,
    ) -> DuelResult<Self> {
        config.validate()?;

        let mut rng: Box<dyn RandomSource + Send> = Box::new(rng);
        let problem = generator.generate(&mut *rng);
        let turn = TurnState::new(PlayerId::new(0), problem, config.turn_secs);

        info!(
            category = %generator.category(),
            max_life = config.max_life,
            turn_secs = config.turn_secs,
            "match created"
        );

        Ok(Self {
            players: fresh_players(&config),
            stats: PlayerMap::with_default(),
            turn,
            phase: Phase::AwaitingInput,
            turn_number: 1,
            last_outcome: None,
            config,
            generator,
            rng,
        })
    }

    // === Turn resolution ===

    /// Judge `raw` as the active player's answer with `time_remaining`
    /// seconds left on the clock.
    ///
    /// Returns `None` unless the match is awaiting input.
    pub fn submit_answer(&mut self, raw: &str, time_remaining: u32) -> Option<TurnOutcome> {
        if self.phase != Phase::AwaitingInput {
            debug!(phase = ?self.phase, "answer ignored");
            return None;
        }

        let turn_secs = self.config.turn_secs;
        let remaining = time_remaining.min(turn_secs);
        let reaction = turn_secs - remaining;
        let player = self.turn.active;
        self.turn.timer.cancel();

        if self.generator.validate(raw, &self.turn.problem) {
            let hit = self.config.damage.correct_hit(remaining, turn_secs);
            let target = player.opponent();
            self.stats[player].record_correct(&self.turn.problem, raw, reaction, hit.life_delta);
            self.stats[target].take_hit(hit.stat_damage_taken);
            Some(self.settle(player, AnswerResult::Correct, false, target, hit, reaction))
        } else {
            let hit = self.config.damage.wrong_answer();
            self.stats[player].record_incorrect(
                &self.turn.problem,
                raw,
                reaction,
                hit.stat_damage_taken,
            );
            Some(self.settle(player, AnswerResult::Incorrect, false, player, hit, reaction))
        }
    }

    /// Submit whatever is in the input buffer, using the timer's remaining time.
    pub fn submit(&mut self) -> Option<TurnOutcome> {
        let raw = self.turn.input.as_str().to_string();
        let remaining = self.turn.timer.remaining();
        self.submit_answer(&raw, remaining)
    }

    /// Settle the turn as unanswered.
    pub fn time_out(&mut self) -> Option<TurnOutcome> {
        if self.phase != Phase::AwaitingInput {
            debug!(phase = ?self.phase, "time out ignored");
            return None;
        }

        let turn_secs = self.config.turn_secs;
        let player = self.turn.active;
        self.turn.timer.cancel();

        let hit = self.config.damage.timeout();
        self.stats[player].record_timeout(
            &self.turn.problem,
            self.turn.input.as_str(),
            turn_secs,
            hit.stat_damage_taken,
        );
        Some(self.settle(player, AnswerResult::Incorrect, true, player, hit, turn_secs))
    }

    /// Advance the countdown by one second. Times the turn out when it
    /// reaches zero.
    pub fn tick(&mut self) -> Option<TurnOutcome> {
        if self.phase != Phase::AwaitingInput {
            return None;
        }
        match self.turn.timer.tick() {
            TimerEvent::Expired => self.time_out(),
            TimerEvent::Idle | TimerEvent::Running(_) => None,
        }
    }

    fn settle(
        &mut self,
        player: PlayerId,
        result: AnswerResult,
        timed_out: bool,
        target: PlayerId,
        hit: Hit,
        reaction_secs: u32,
    ) -> TurnOutcome {
        let life_delta = self.players[target].take_damage(hit.life_delta);
        self.turn.result = Some(result);

        let match_over = MatchResult::from_players(&self.players);
        self.phase = match match_over {
            Some(over) => Phase::MatchOver(over),
            None => Phase::Settled(result),
        };

        info!(
            player = %player,
            result = ?result,
            timed_out,
            target = %target,
            life_delta,
            life = self.players[target].life,
            "turn settled"
        );
        if let Some(over) = match_over {
            info!(result = ?over, turns = self.turn_number, "match over");
        }

        let outcome = TurnOutcome {
            player,
            result,
            timed_out,
            target,
            life_delta,
            stat_damage_taken: hit.stat_damage_taken,
            reaction_secs,
            match_over,
        };
        self.last_outcome = Some(outcome.clone());
        outcome
    }

    // === Turn flow ===

    /// Hand the turn to the other player with a new problem.
    ///
    /// Only valid once the current turn has settled and the match is not over.
    pub fn advance_turn(&mut self) -> bool {
        if !matches!(self.phase, Phase::Settled(_)) {
            debug!(phase = ?self.phase, "advance ignored");
            return false;
        }
        let next = self.turn.active.opponent();
        self.turn_number += 1;
        self.start_turn(next);
        true
    }

    /// Full lives, empty stats, player 1 to answer a fresh problem.
    pub fn restart(&mut self) {
        self.players = fresh_players(&self.config);
        for (_, stats) in self.stats.iter_mut() {
            stats.reset();
        }
        self.turn_number = 1;
        self.last_outcome = None;
        self.start_turn(PlayerId::new(0));
        info!("match restarted");
    }

    fn start_turn(&mut self, player: PlayerId) {
        let problem = self.generator.generate(&mut *self.rng);
        debug!(
            player = %player,
            turn = self.turn_number,
            category = %problem.category,
            prompt = %problem.prompt,
            "new problem"
        );
        self.turn = TurnState::new(player, problem, self.config.turn_secs);
        self.phase = Phase::AwaitingInput;
    }

    // === Input ===

    fn accepting_input(&self) -> bool {
        let accepting = self.phase == Phase::AwaitingInput;
        if !accepting {
            debug!(phase = ?self.phase, "input ignored");
        }
        accepting
    }

    /// Replace the input, filtered through the problem's input policy.
    pub fn set_input(&mut self, text: &str) -> bool {
        if !self.accepting_input() {
            return false;
        }
        self.turn.input.set(self.turn.problem.input, text);
        true
    }

    /// Type one character. Returns whether the policy accepted it.
    pub fn push_input(&mut self, ch: char) -> bool {
        self.accepting_input() && self.turn.input.push(self.turn.problem.input, ch)
    }

    pub fn backspace(&mut self) -> bool {
        self.accepting_input() && self.turn.input.backspace()
    }

    pub fn clear_input(&mut self) -> bool {
        if !self.accepting_input() {
            return false;
        }
        self.turn.input.clear();
        true
    }

    /// Put option `index` of a multiple-choice problem in the input buffer.
    pub fn select_option(&mut self, index: usize) -> bool {
        if !self.accepting_input() {
            return false;
        }
        match self.turn.problem.options.get(index) {
            Some(option) => {
                self.turn.input.set(InputPolicy::Choice, option);
                true
            }
            None => false,
        }
    }

    // === Accessors ===

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn players(&self) -> &PlayerMap<Player> {
        &self.players
    }

    pub fn player(&self, player: PlayerId) -> &Player {
        &self.players[player]
    }

    pub fn active_player(&self) -> PlayerId {
        self.turn.active
    }

    pub fn problem(&self) -> &Problem {
        &self.turn.problem
    }

    pub fn input(&self) -> &str {
        self.turn.input.as_str()
    }

    pub fn answer_result(&self) -> Option<AnswerResult> {
        self.turn.result
    }

    pub fn stats(&self, player: PlayerId) -> &PlayerStats {
        &self.stats[player]
    }

    pub fn all_stats(&self) -> &PlayerMap<PlayerStats> {
        &self.stats
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn timer(&self) -> &TurnTimer {
        &self.turn.timer
    }

    pub fn turn(&self) -> &TurnState {
        &self.turn
    }

    pub fn turn_number(&self) -> u32 {
        self.turn_number
    }

    /// The final result, once the match is over.
    pub fn result(&self) -> Option<MatchResult> {
        match self.phase {
            Phase::MatchOver(result) => Some(result),
            _ => None,
        }
    }

    pub fn is_over(&self) -> bool {
        self.result().is_some()
    }

    pub fn last_outcome(&self) -> Option<&TurnOutcome> {
        self.last_outcome.as_ref()
    }

    // === Feedback ===

    /// Medals for `player` so far. The outcome medal appears once the match is over.
    pub fn medals(&self, player: PlayerId) -> Vec<Medal> {
        MedalEvaluator::new().evaluate(&self.stats[player], player, self.result())
    }

    /// Report for both players, labelled with the configured names.
    pub fn report(&self) -> MatchReport {
        MatchReport::build(&self.stats, self.result(), &self.config.player_names)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ScriptedRng;
    use crate::problems::{ArithmeticGenerator, OperatorSet};
    use crate::rules::DamageRules;

    /// Every problem is `1 + 2`.
    fn scripted_match(config: MatchConfig) -> Match<ArithmeticGenerator> {
        let generator = ArithmeticGenerator::with_operators(OperatorSet::default());
        Match::with_rng(generator, config, ScriptedRng::new(vec![0, 1, 2])).unwrap()
    }

    #[test]
    fn test_correct_answer_hits_opponent() {
        let mut duel = scripted_match(MatchConfig::default());
        assert_eq!(duel.problem().prompt, "1 + 2");

        let outcome = duel.submit_answer("3", 25).unwrap();

        assert_eq!(outcome.result, AnswerResult::Correct);
        assert_eq!(outcome.target, PlayerId::new(1));
        assert_eq!(outcome.life_delta, 25);
        assert_eq!(outcome.reaction_secs, 5);
        assert_eq!(duel.player(PlayerId::new(1)).life, 275);
        assert_eq!(duel.player(PlayerId::new(0)).life, 300);
        assert_eq!(duel.stats(PlayerId::new(0)).streak, 1);
        assert_eq!(duel.stats(PlayerId::new(0)).damage_done, 25);
        assert_eq!(duel.stats(PlayerId::new(1)).damage_taken, 25);
        assert_eq!(duel.phase(), Phase::Settled(AnswerResult::Correct));
        assert!(!duel.timer().is_running());
    }

    #[test]
    fn test_wrong_answer_hurts_self() {
        let mut duel = scripted_match(MatchConfig::default());
        let outcome = duel.submit_answer("4", 20).unwrap();

        assert_eq!(outcome.target, PlayerId::new(0));
        assert_eq!(outcome.life_delta, 10);
        assert_eq!(outcome.stat_damage_taken, 5);
        assert_eq!(duel.player(PlayerId::new(0)).life, 290);
        assert_eq!(duel.stats(PlayerId::new(0)).damage_taken, 5);
        assert_eq!(duel.stats(PlayerId::new(0)).errors, 1);
    }

    #[test]
    fn test_time_remaining_is_clamped() {
        let mut duel = scripted_match(MatchConfig::default());
        let outcome = duel.submit_answer("3", 99).unwrap();

        assert_eq!(outcome.life_delta, 30);
        assert_eq!(outcome.reaction_secs, 0);
    }

    #[test]
    fn test_tick_times_out_once() {
        let mut duel = scripted_match(MatchConfig::default().with_turn_secs(3));

        assert!(duel.tick().is_none());
        assert!(duel.tick().is_none());
        let outcome = duel.tick().unwrap();
        assert!(outcome.timed_out);
        assert_eq!(outcome.reaction_secs, 3);
        assert!(duel.tick().is_none());

        let stats = duel.stats(PlayerId::new(0));
        assert_eq!(stats.timeouts, 1);
        assert_eq!(stats.total, 1);
        assert_eq!(stats.damage_taken, 10);
    }

    #[test]
    fn test_submit_uses_buffer_and_timer() {
        let mut duel = scripted_match(MatchConfig::default());
        duel.tick();
        duel.tick();
        assert!(duel.push_input('3'));
        assert!(!duel.push_input('x'));
        assert_eq!(duel.input(), "3");

        let outcome = duel.submit().unwrap();
        assert_eq!(outcome.reaction_secs, 2);
        assert_eq!(outcome.life_delta, 28);
    }

    #[test]
    fn test_commands_ignored_after_settle() {
        let mut duel = scripted_match(MatchConfig::default());
        duel.submit_answer("3", 30);

        assert!(duel.submit_answer("3", 30).is_none());
        assert!(duel.time_out().is_none());
        assert!(duel.tick().is_none());
        assert!(!duel.push_input('1'));
        assert!(!duel.set_input("12"));
        assert_eq!(duel.player(PlayerId::new(1)).life, 270);
    }

    #[test]
    fn test_advance_alternates_players() {
        let mut duel = scripted_match(MatchConfig::default());
        assert!(!duel.advance_turn());

        for expected in [0, 1, 0, 1] {
            assert_eq!(duel.active_player(), PlayerId::new(expected));
            duel.push_input('7');
            duel.submit();
            assert!(duel.advance_turn());
            assert_eq!(duel.input(), "");
            assert_eq!(duel.answer_result(), None);
        }
        assert_eq!(duel.turn_number(), 5);
    }

    #[test]
    fn test_match_over_is_terminal() {
        let mut duel = scripted_match(MatchConfig::default().with_max_life(20));

        let outcome = duel.submit_answer("3", 30).unwrap();
        assert_eq!(outcome.match_over, Some(MatchResult::Winner(PlayerId::new(0))));
        assert_eq!(outcome.life_delta, 20);
        assert!(duel.is_over());
        assert!(!duel.advance_turn());
        assert!(duel.submit_answer("3", 30).is_none());

        let medals = duel.medals(PlayerId::new(0));
        assert!(medals.iter().any(|m| m.label == "Winner!"));
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut duel = scripted_match(MatchConfig::default().with_max_life(20));
        duel.submit_answer("3", 30);
        assert_eq!(duel.stats(PlayerId::new(1)).damage_taken, 30);
        duel.restart();

        assert_eq!(duel.phase(), Phase::AwaitingInput);
        assert_eq!(duel.active_player(), PlayerId::new(0));
        assert_eq!(duel.turn_number(), 1);
        assert!(duel.last_outcome().is_none());
        for (_, player) in duel.players().iter() {
            assert_eq!(player.life, 20);
        }
        for (_, stats) in duel.all_stats().iter() {
            assert_eq!(stats, &PlayerStats::default());
        }
        assert_eq!(duel.timer().remaining(), 30);
        assert!(duel.timer().is_running());
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let generator = ArithmeticGenerator::default();
        let result = Match::new(generator, MatchConfig::default().with_turn_secs(0), 1);
        assert!(result.is_err());

        let harmless = DamageRules {
            penalty: 0,
            ..DamageRules::default()
        };
        let config = MatchConfig::default().with_damage(harmless);
        assert!(Match::new(ArithmeticGenerator::default(), config, 1).is_err());
    }

    #[test]
    fn test_select_option_needs_choices() {
        let mut duel = scripted_match(MatchConfig::default());
        assert!(!duel.select_option(0));
        assert_eq!(duel.input(), "");
    }
}
