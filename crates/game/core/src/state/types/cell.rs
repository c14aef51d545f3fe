/// Content of a single board cell.
///
/// The `Display`/`FromStr` form is the one-character symbol used by layouts
/// and the renderer.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::IntoStaticStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(ascii_case_insensitive)]
pub enum Cell {
    /// The agent's current cell. Exactly one per board.
    #[strum(serialize = "P")]
    Agent,
    /// Destroys the agent unless it holds a resource.
    #[strum(serialize = "G")]
    Hazard,
    /// Grants one hazard-immunity charge when collected.
    #[strum(serialize = "C")]
    Bonus,
    /// Small reward; must be cleared to win.
    #[strum(serialize = "F")]
    Food,
    #[default]
    #[strum(serialize = "-")]
    Empty,
}

impl Cell {
    /// Returns the layout symbol for this cell.
    pub fn symbol(self) -> &'static str {
        self.into()
    }

    /// True for cells that still have to be collected before the game is won.
    #[inline]
    pub const fn is_consumable(self) -> bool {
        matches!(self, Cell::Food | Cell::Bonus)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn symbols_parse_back_to_cells() {
        for cell in Cell::iter() {
            assert_eq!(Cell::from_str(cell.symbol()), Ok(cell));
        }
        assert_eq!(Cell::from_str("f"), Ok(Cell::Food));
        assert!(Cell::from_str("X").is_err());
    }

    #[test]
    fn only_food_and_bonus_are_consumable() {
        let consumable: Vec<Cell> = Cell::iter().filter(|c| c.is_consumable()).collect();
        assert_eq!(consumable, vec![Cell::Bonus, Cell::Food]);
    }
}
