use crate::state::Grid;

/// Win-condition check.
pub struct TerminationChecker;

impl TerminationChecker {
    /// True once no food or bonus cell is left on the board.
    pub fn all_consumed(grid: &Grid) -> bool {
        !grid.cells().iter().any(|cell| cell.is_consumable())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn board_with_only_hazards_and_empty_is_won() {
        let grid: Grid = "P-G-----G-------".parse().unwrap();
        assert!(TerminationChecker::all_consumed(&grid));
    }

    #[test]
    fn single_food_or_bonus_keeps_the_game_going() {
        let food: Grid = "P--------------F".parse().unwrap();
        let bonus: Grid = "P------C--------".parse().unwrap();
        assert!(!TerminationChecker::all_consumed(&food));
        assert!(!TerminationChecker::all_consumed(&bonus));
    }
}
