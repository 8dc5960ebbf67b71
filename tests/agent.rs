use rand::rngs::StdRng;
use rand::SeedableRng;

use shogiss::safety;
use shogiss::{Board, Context, Heuristic, HeuristicAgent, Move, PieceKind, Position, Side, Source, VictoryCondition};

fn p(x: i8, y: i8) -> Position {
    Position::new(x, y)
}

fn board(pieces: &[(PieceKind, Side, Position)]) -> Board {
    let mut board = Board::empty(8, VictoryCondition::KillAll).unwrap();
    for &(kind, side, position) in pieces {
        board.place(kind, side, position).unwrap();
    }
    board
}

fn attempt(heuristic: Heuristic, board: &Board, seed: u64) -> Option<Move> {
    let mut rng = StdRng::seed_from_u64(seed);
    let ctx = Context::new(board, Side::Enemy, &mut rng);
    heuristic.attempt(&ctx, &mut rng)
}

#[test]
fn full_difficulty_takes_an_available_safe_capture() {
    let board = board(&[
        (PieceKind::Diamond, Side::Enemy, p(4, 4)),
        (PieceKind::Triangle, Side::Player, p(4, 5)),
    ]);
    let agent = HeuristicAgent::new(1.0).unwrap();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let decision = agent.decide(&board, Side::Enemy, &mut rng).unwrap();
        assert_eq!(decision.mv, Move::new(p(4, 4), p(4, 5)));
        assert_eq!(decision.source, Source::Heuristic(Heuristic::SafeEatPlayer));
    }
}

#[test]
fn zero_difficulty_falls_through_to_a_random_legal_move() {
    let board = Board::new(8, VictoryCondition::KillAll).unwrap();
    let agent = HeuristicAgent::new(0.0).unwrap();
    for seed in 0..20 {
        let mut rng = StdRng::seed_from_u64(seed);
        let decision = agent.decide(&board, Side::Enemy, &mut rng).unwrap();
        assert_eq!(decision.source, Source::Random);
        let piece = board.piece_at(decision.mv.start).unwrap();
        assert_eq!(piece.side, Side::Enemy);
        assert!(board.legal_moves(piece).contains(&decision.mv.end));
    }
}

#[test]
fn a_side_without_pieces_gets_no_move() {
    let board = board(&[(PieceKind::Ring, Side::Player, p(3, 3))]);
    let agent = HeuristicAgent::new(1.0).unwrap();
    let mut rng = StdRng::seed_from_u64(1);
    assert_eq!(agent.select_move(&board, Side::Enemy, &mut rng), None);
}

#[test]
fn the_most_valuable_threatened_piece_runs_to_safety() {
    let board = board(&[
        (PieceKind::Ring, Side::Enemy, p(3, 3)),
        (PieceKind::Diamond, Side::Enemy, p(6, 6)),
        (PieceKind::Diamond, Side::Player, p(3, 4)),
        (PieceKind::Diamond, Side::Player, p(6, 5)),
    ]);
    for seed in 0..20 {
        let mv = attempt(Heuristic::RunFromPlayer, &board, seed).unwrap();
        assert_eq!(mv.start, p(3, 3));
        assert!(safety::is_safe(&board, Side::Enemy, mv.end));
    }
}

#[test]
fn trade_accepts_an_even_recapture_and_refuses_a_losing_one() {
    let even = board(&[
        (PieceKind::Diamond, Side::Enemy, p(2, 2)),
        (PieceKind::Circle, Side::Player, p(2, 3)),
        (PieceKind::Diamond, Side::Player, p(2, 4)),
    ]);
    assert_eq!(attempt(Heuristic::Trade, &even, 5), Some(Move::new(p(2, 2), p(2, 3))));

    let losing = board(&[
        (PieceKind::Diamond, Side::Enemy, p(2, 2)),
        (PieceKind::Circle, Side::Player, p(2, 3)),
        (PieceKind::Ring, Side::Player, p(2, 5)),
    ]);
    assert_eq!(attempt(Heuristic::Trade, &losing, 5), None);
    assert_eq!(attempt(Heuristic::SafeEatPlayer, &losing, 5), None);
}

#[test]
fn trade_attack_move_lines_up_a_favourable_capture() {
    let board = board(&[
        (PieceKind::Diamond, Side::Enemy, p(3, 2)),
        (PieceKind::Circle, Side::Player, p(3, 4)),
    ]);
    assert_eq!(attempt(Heuristic::TradeAttackMove, &board, 9), Some(Move::new(p(3, 2), p(3, 3))));
}

#[test]
fn forward_means_down_the_board_for_the_enemy() {
    let board = board(&[
        (PieceKind::Diamond, Side::Enemy, p(4, 4)),
        (PieceKind::Diamond, Side::Player, p(0, 7)),
    ]);
    for seed in 0..10 {
        assert_eq!(attempt(Heuristic::MakeSafeForwardMove, &board, seed), Some(Move::new(p(4, 4), p(4, 3))));
    }
}

#[test]
fn defend_moves_cover_another_own_piece() {
    let board = board(&[
        (PieceKind::Diamond, Side::Enemy, p(4, 4)),
        (PieceKind::Diamond, Side::Enemy, p(6, 4)),
    ]);
    for heuristic in [Heuristic::SafeDefendMove, Heuristic::DefendMove] {
        for seed in 0..10 {
            let mv = attempt(heuristic, &board, seed).unwrap();
            assert_eq!(mv.end, p(5, 4), "{heuristic}");
        }
    }
}

#[test]
fn defended_attacks_land_where_a_friend_covers() {
    let board = board(&[
        (PieceKind::Diamond, Side::Enemy, p(3, 2)),
        (PieceKind::Diamond, Side::Enemy, p(4, 3)),
        (PieceKind::Triangle, Side::Player, p(3, 4)),
    ]);
    for heuristic in [Heuristic::SafeDefendedAttackMove, Heuristic::DefendedAttackMove] {
        for seed in 0..10 {
            let mv = attempt(heuristic, &board, seed).unwrap();
            assert_eq!(mv.end, p(3, 3), "{heuristic}");
        }
    }
}

#[test]
fn make_safe_move_avoids_attacked_squares() {
    let board = board(&[
        (PieceKind::Diamond, Side::Enemy, p(0, 0)),
        (PieceKind::Square, Side::Player, p(2, 1)),
    ]);
    // the square on c2 covers b1, leaving a2 as the only safe step
    for seed in 0..10 {
        assert_eq!(attempt(Heuristic::MakeSafeMove, &board, seed), Some(Move::new(p(0, 0), p(0, 1))));
    }
}

#[test]
fn deciding_does_not_touch_the_board() {
    let board = Board::new(8, VictoryCondition::KillAll).unwrap();
    let before = board.to_string();
    let agent = HeuristicAgent::new(0.75).unwrap();
    let mut rng = StdRng::seed_from_u64(42);
    for _ in 0..10 {
        agent.select_move(&board, Side::Enemy, &mut rng).unwrap();
    }
    assert_eq!(board.to_string(), before);
}

#[test]
fn self_play_only_produces_legal_moves() {
    let agent = HeuristicAgent::new(0.75).unwrap();
    for seed in 0..4 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut board = Board::new(8, VictoryCondition::KillAll).unwrap();
        let mut side = Side::Player;
        for _ in 0..200 {
            if board.winner().is_some() {
                break;
            }
            match agent.select_move(&board, side, &mut rng) {
                Some(mv) => {
                    board.apply_move(mv).expect("agent moves are legal");
                }
                None => board.concede(side),
            }
            side = side.opponent();
        }
    }
}
