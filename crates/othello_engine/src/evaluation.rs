use othello_core::{Board, Player, Position};

// Corners can never be flipped once taken, so they are weighted well above
// a single disc or a single move of mobility.
const CORNER_VALUE: i32 = 10;

/// Evaluates a position from `reference`'s point of view.
/// Positive scores favor `reference`, negative scores favor the opponent.
///
/// The score is the sum of three terms:
/// - material: disc count difference
/// - mobility: legal move count difference
/// - corners: +/-`CORNER_VALUE` per corner held
pub fn heuristic(board: &Board, reference: Player) -> i32 {
    material(board, reference) + mobility(board, reference) + corner_bonus(board, reference)
}

pub fn material(board: &Board, reference: Player) -> i32 {
    board.score(reference) as i32 - board.score(reference.opponent()) as i32
}

pub fn mobility(board: &Board, reference: Player) -> i32 {
    let ours = board.legal_moves(reference).len() as i32;
    let theirs = board.legal_moves(reference.opponent()).len() as i32;
    ours - theirs
}

pub fn corner_bonus(board: &Board, reference: Player) -> i32 {
    Position::all()
        .filter(|pos| pos.is_corner())
        .map(|pos| match board.cell(pos).owner() {
            Some(owner) if owner == reference => CORNER_VALUE,
            Some(_) => -CORNER_VALUE,
            None => 0,
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_position_is_balanced() {
        let board = Board::new();
        assert_eq!(heuristic(&board, Player::Dark), 0);
        assert_eq!(heuristic(&board, Player::Light), 0);
    }

    #[test]
    fn terms_flip_sign_with_the_reference() {
        let board: Board = "
            X......O
            .X....O.
            ..XXXO..
            ...XO...
            ...OX...
            ........
            ........
            O.......
        "
        .parse()
        .unwrap();

        assert_eq!(material(&board, Player::Dark), -material(&board, Player::Light));
        assert_eq!(mobility(&board, Player::Dark), -mobility(&board, Player::Light));
        assert_eq!(corner_bonus(&board, Player::Dark), -corner_bonus(&board, Player::Light));
        assert_eq!(heuristic(&board, Player::Dark), -heuristic(&board, Player::Light));
    }

    #[test]
    fn corners_count_ten_each() {
        let board: Board = "
            X......O
            ........
            ........
            ........
            ........
            ........
            ........
            O......O
        "
        .parse()
        .unwrap();

        assert_eq!(corner_bonus(&board, Player::Dark), 10 - 30);
        assert_eq!(corner_bonus(&board, Player::Light), 20);
        // No one can move on this board, so only material and corners count.
        assert_eq!(mobility(&board, Player::Dark), 0);
        assert_eq!(heuristic(&board, Player::Light), 2 + 20);
    }

    #[test]
    fn mobility_after_opening() {
        let board = Board::new()
            .apply_move(othello_core::Move::new(2, 3).unwrap(), Player::Dark)
            .unwrap();
        assert_eq!(material(&board, Player::Dark), 3);
        assert_eq!(board.legal_moves(Player::Light).len(), 3);
        assert_eq!(
            mobility(&board, Player::Dark),
            board.legal_moves(Player::Dark).len() as i32 - 3
        );
    }
}
