use tictac_engine::{Board, LineClassifier, Mark, MinimaxSearch, WinClassifier};

fn select(s: &str, ai_side: Mark) -> Option<usize> {
    let board: Board = s.parse().unwrap();
    MinimaxSearch::full_depth().select(&board, ai_side, &LineClassifier::new())
}

#[test]
fn test_takes_immediate_win() {
    // X completes the top row at index 2
    assert_eq!(select("XX..O..O.", Mark::X), Some(2));
}

#[test]
fn test_blocks_opponent_threat() {
    // O threatens the top row; X must block at index 2
    assert_eq!(select("OO.X.....", Mark::X), Some(2));
}

#[test]
fn test_takes_win_at_high_index() {
    // X wins the bottom row at index 8. A lower index only ties or wins
    // later, so the tie-break never overrides a strictly better score.
    assert_eq!(select(".O..O.XX.", Mark::X), Some(8));
}

#[test]
fn test_empty_board_ties_break_to_lowest_index() {
    // Perfect play from the empty board is a draw whatever the first move,
    // so all nine children score 0 and the first-seen index wins.
    assert_eq!(select(".........", Mark::X), Some(0));
}

#[test]
fn test_depth_one_still_returns_a_legal_move() {
    // With one ply of lookahead nothing is terminal from the empty board;
    // every child scores 0 and the search degrades to the lowest index
    // rather than failing.
    let board = Board::empty();
    let shallow = MinimaxSearch::new(1);
    let chosen = shallow.select(&board, Mark::X, &LineClassifier::new());

    assert_eq!(chosen, Some(0));
    assert!(board.is_empty_cell(chosen.unwrap()));
}

#[test]
fn test_depth_one_still_takes_an_immediate_win() {
    // The winning placement is visible within a single ply
    let board: Board = "XX..O..O.".parse().unwrap();
    let shallow = MinimaxSearch::new(1);

    assert_eq!(shallow.select(&board, Mark::X, &LineClassifier::new()), Some(2));
}

#[test]
fn test_depth_limit_is_clamped() {
    assert_eq!(MinimaxSearch::new(0).depth_limit(), 1);
    assert_eq!(MinimaxSearch::new(12).depth_limit(), 9);
    assert_eq!(MinimaxSearch::new(5).depth_limit(), 5);

    // The default searcher explores the whole tree
    assert_eq!(MinimaxSearch::default(), MinimaxSearch::full_depth());
}

#[test]
fn test_full_board_yields_no_move() {
    assert_eq!(select("XXOOOXXXO", Mark::X), None);
    assert_eq!(select("XXOOOXXXO", Mark::O), None);
}

#[test]
fn test_decided_position_yields_no_move() {
    // X already owns the top row; there is nothing left to choose
    assert_eq!(select("XXX.OO...", Mark::O), None);
    assert_eq!(select("XXX.OO...", Mark::X), None);
}

#[test]
fn test_search_never_mutates_the_board() {
    let board: Board = "OO.X.....".parse().unwrap();
    let snapshot = board;
    let search = MinimaxSearch::full_depth();
    let classifier = LineClassifier::new();

    let first = search.select(&board, Mark::X, &classifier);
    let second = search.select(&board, Mark::X, &classifier);

    // Identical inputs give identical outputs, and the board is untouched
    assert_eq!(first, second);
    assert_eq!(board, snapshot);
}

#[test]
fn test_statistics_report_the_work_done() {
    let (chosen, stats) =
        MinimaxSearch::full_depth().select_with_stats(&Board::empty(), Mark::X, &LineClassifier::new());

    assert_eq!(chosen, Some(0));

    // The full tree from an empty board is large; drawn lines run all the
    // way down to a full board at ply 9
    assert!(stats.nodes_visited > 100_000);
    assert!(stats.terminal_hits > 0);
    assert_eq!(stats.max_ply, 9);
    assert!(stats.summary().contains("Nodes visited"));
}

/// Plays the engine against every opponent line and asserts the opponent
/// never wins. `to_move` alternates; the engine side always answers with a
/// full-depth search.
fn assert_engine_never_loses(board: Board, to_move: Mark, engine_side: Mark) {
    let classifier = LineClassifier::new();

    if let Some(winner) = classifier.winner(&board) {
        assert_ne!(
            winner,
            engine_side.opponent(),
            "engine lost this line:\n{}",
            board
        );
        return;
    }
    if board.is_full() {
        return;
    }

    if to_move == engine_side {
        let index = MinimaxSearch::full_depth()
            .select(&board, engine_side, &classifier)
            .expect("engine must produce a move in an open position");
        assert_engine_never_loses(board.with_move(index, engine_side), to_move.opponent(), engine_side);
    } else {
        let empties: Vec<usize> = board.empty_cells().collect();
        for index in empties {
            assert_engine_never_loses(board.with_move(index, to_move), to_move.opponent(), engine_side);
        }
    }
}

#[test]
fn test_never_loses_moving_first() {
    assert_engine_never_loses(Board::empty(), Mark::X, Mark::X);
}

#[test]
fn test_never_loses_moving_second() {
    assert_engine_never_loses(Board::empty(), Mark::X, Mark::O);
}
