use rand::seq::SliceRandom;
use rand::Rng;
use strum_macros::{Display, EnumIter};

use crate::game::{Game, Move};

/// The pieces of both sides, shuffled once per decision so that equal
/// positions do not always produce the same move.
pub struct Context<'a, G: Game> {
    pub game: &'a G,
    pub side: G::Side,
    pub mine: Vec<G::Square>,
    pub theirs: Vec<G::Square>,
}

impl<'a, G: Game> Context<'a, G> {
    pub fn new<R: Rng + ?Sized>(game: &'a G, side: G::Side, rng: &mut R) -> Self {
        let mut mine = game.pieces_of(side);
        let mut theirs = game.pieces_of(G::opponent(side));
        mine.shuffle(rng);
        theirs.shuffle(rng);
        Context { game, side, mine, theirs }
    }

    fn shuffled_moves<R: Rng + ?Sized>(&self, piece: G::Square, rng: &mut R) -> Vec<G::Square> {
        let mut moves = self.game.moves(piece);
        moves.shuffle(rng);
        moves
    }

    fn is_safe(&self, square: G::Square) -> bool {
        self.game.is_safe(self.side, square)
    }

    fn holds_opponent(&self, square: G::Square) -> bool {
        self.game.side_at(square) == Some(G::opponent(self.side))
    }

    /// Standing on `landing`, `piece` would hit an opposing piece other than
    /// one it just captured there.
    fn threatens(&self, piece: G::Square, landing: G::Square) -> bool {
        let reach = self.game.reach_from(piece, landing);
        self.theirs
            .iter()
            .any(|&target| target != landing && reach.contains(&target))
    }

    /// Another own piece could recapture on `landing`.
    fn defended(&self, piece: G::Square, landing: G::Square) -> bool {
        self.mine
            .iter()
            .any(|&other| other != piece && self.game.reaches(other, landing))
    }

    /// Standing on `landing`, `piece` would cover another own piece.
    fn defends(&self, piece: G::Square, landing: G::Square) -> bool {
        let reach = self.game.reach_from(piece, landing);
        self.mine
            .iter()
            .any(|&other| other != piece && reach.contains(&other))
    }

    /// Eating `target` gains at least the value the mover ends up with, and no
    /// recapture on `landing` ends with the opponent holding more than that.
    pub fn is_favourable_trade(&self, piece: G::Square, target: G::Square, landing: G::Square) -> bool {
        let gain = self.game.value_after_eating(piece, target);
        if self.game.value_of(target) < gain {
            return false;
        }
        let best_recapture = self
            .theirs
            .iter()
            .copied()
            .filter(|&killer| killer != landing && self.game.reaches(killer, landing))
            .map(|killer| self.game.value_of(killer).max(gain))
            .max()
            .unwrap_or(0);
        best_recapture <= gain
    }
}

/// The cascade, in the order the agent tries it.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, EnumIter, Display)]
#[strum(serialize_all = "snake_case")]
pub enum Heuristic {
    SafeEatPlayer,
    RunFromPlayer,
    Trade,
    SafeDefendedAttackMove,
    MakeSafeForwardMove,
    SafeDefendMove,
    MakeSafeMove,
    DefendedAttackMove,
    TradeAttackMove,
    DefendMove,
}

impl Heuristic {
    pub fn attempt<G: Game, R: Rng + ?Sized>(self, ctx: &Context<'_, G>, rng: &mut R) -> Option<Move<G::Square>> {
        match self {
            Heuristic::SafeEatPlayer => safe_eat_player(ctx, rng),
            Heuristic::RunFromPlayer => run_from_player(ctx, rng),
            Heuristic::Trade => trade(ctx, rng),
            Heuristic::SafeDefendedAttackMove => defended_attack_move(ctx, rng, true),
            Heuristic::MakeSafeForwardMove => make_safe_forward_move(ctx, rng),
            Heuristic::SafeDefendMove => defend_move(ctx, rng, true),
            Heuristic::MakeSafeMove => make_safe_move(ctx, rng),
            Heuristic::DefendedAttackMove => defended_attack_move(ctx, rng, false),
            Heuristic::TradeAttackMove => trade_attack_move(ctx, rng),
            Heuristic::DefendMove => defend_move(ctx, rng, false),
        }
    }
}

pub fn safe_eat_player<G: Game, R: Rng + ?Sized>(ctx: &Context<'_, G>, rng: &mut R) -> Option<Move<G::Square>> {
    for &piece in &ctx.mine {
        for end in ctx.shuffled_moves(piece, rng) {
            if ctx.holds_opponent(end) && ctx.is_safe(end) {
                return Some(Move::new(piece, end));
            }
        }
    }
    None
}

// The only rule that looks at every candidate: the most valuable threatened
// piece runs.
pub fn run_from_player<G: Game, R: Rng + ?Sized>(ctx: &Context<'_, G>, rng: &mut R) -> Option<Move<G::Square>> {
    let mut best: Option<(u32, G::Square, Vec<G::Square>)> = None;
    for &piece in &ctx.mine {
        if ctx.is_safe(piece) {
            continue;
        }
        let escapes = ctx.game.safe_moves(piece);
        if escapes.is_empty() {
            continue;
        }
        let value = ctx.game.value_of(piece);
        if best.as_ref().map_or(true, |(best_value, ..)| value > *best_value) {
            best = Some((value, piece, escapes));
        }
    }
    let (_, piece, escapes) = best?;
    escapes.choose(rng).map(|&end| Move::new(piece, end))
}

pub fn trade<G: Game, R: Rng + ?Sized>(ctx: &Context<'_, G>, rng: &mut R) -> Option<Move<G::Square>> {
    for &piece in &ctx.mine {
        for end in ctx.shuffled_moves(piece, rng) {
            if ctx.holds_opponent(end) && ctx.is_favourable_trade(piece, end, end) {
                return Some(Move::new(piece, end));
            }
        }
    }
    None
}

pub fn defended_attack_move<G: Game, R: Rng + ?Sized>(
    ctx: &Context<'_, G>,
    rng: &mut R,
    require_safe: bool,
) -> Option<Move<G::Square>> {
    for &piece in &ctx.mine {
        for end in ctx.shuffled_moves(piece, rng) {
            if ctx.threatens(piece, end) && ctx.defended(piece, end) && (!require_safe || ctx.is_safe(end)) {
                return Some(Move::new(piece, end));
            }
        }
    }
    None
}

pub fn make_safe_forward_move<G: Game, R: Rng + ?Sized>(ctx: &Context<'_, G>, rng: &mut R) -> Option<Move<G::Square>> {
    for &piece in &ctx.mine {
        let mut safe_moves = ctx.game.safe_moves(piece);
        safe_moves.shuffle(rng);
        if let Some(&end) = safe_moves.iter().find(|&&end| ctx.game.is_forward(piece, end)) {
            return Some(Move::new(piece, end));
        }
    }
    None
}

pub fn defend_move<G: Game, R: Rng + ?Sized>(
    ctx: &Context<'_, G>,
    rng: &mut R,
    require_safe: bool,
) -> Option<Move<G::Square>> {
    for &piece in &ctx.mine {
        for end in ctx.shuffled_moves(piece, rng) {
            if ctx.defends(piece, end) && (!require_safe || ctx.is_safe(end)) {
                return Some(Move::new(piece, end));
            }
        }
    }
    None
}

pub fn make_safe_move<G: Game, R: Rng + ?Sized>(ctx: &Context<'_, G>, rng: &mut R) -> Option<Move<G::Square>> {
    for &piece in &ctx.mine {
        if let Some(&end) = ctx.game.safe_moves(piece).choose(rng) {
            return Some(Move::new(piece, end));
        }
    }
    None
}

pub fn trade_attack_move<G: Game, R: Rng + ?Sized>(ctx: &Context<'_, G>, rng: &mut R) -> Option<Move<G::Square>> {
    for &piece in &ctx.mine {
        for end in ctx.shuffled_moves(piece, rng) {
            let reach = ctx.game.reach_from(piece, end);
            let worth_it = ctx.theirs.iter().any(|&target| {
                target != end && reach.contains(&target) && ctx.is_favourable_trade(piece, target, end)
            });
            if worth_it {
                return Some(Move::new(piece, end));
            }
        }
    }
    None
}

pub fn random_move<G: Game, R: Rng + ?Sized>(ctx: &Context<'_, G>, rng: &mut R) -> Option<Move<G::Square>> {
    for &piece in &ctx.mine {
        if let Some(&end) = ctx.game.moves(piece).choose(rng) {
            return Some(Move::new(piece, end));
        }
    }
    None
}
