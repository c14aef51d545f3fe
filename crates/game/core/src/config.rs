/// Fixed rule constants for the 4x4 board.
///
/// The board geometry, item counts and utility table are not runtime-tunable;
/// they live here so every module reads them from one place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GameConfig;

impl GameConfig {
    // ===== board geometry =====
    pub const GRID_WIDTH: u8 = 4;
    pub const GRID_HEIGHT: u8 = 4;
    /// Total number of cells (row-major, indices `0..CELL_COUNT`).
    pub const CELL_COUNT: usize = (Self::GRID_WIDTH as usize) * (Self::GRID_HEIGHT as usize);
    /// Cell the agent occupies when a generated game starts.
    pub const AGENT_START: u8 = 0;

    // ===== initial item counts (sum with the agent to CELL_COUNT) =====
    pub const HAZARD_COUNT: usize = 3;
    pub const BONUS_COUNT: usize = 3;
    pub const FOOD_COUNT: usize = 6;
    pub const EMPTY_COUNT: usize = 3;

    // ===== loop limits =====
    /// Moves after which a still-running game stops.
    pub const MAX_STEPS: u32 = 50;

    // ===== utility table =====
    pub const BONUS_UTILITY: i32 = 10;
    pub const FOOD_UTILITY: i32 = 5;
    pub const SHIELDED_HAZARD_UTILITY: i32 = 1;
    pub const FATAL_HAZARD_UTILITY: i32 = -9999;
    pub const NEUTRAL_UTILITY: i32 = 0;
}

const _: () = assert!(
    1 + GameConfig::HAZARD_COUNT
        + GameConfig::BONUS_COUNT
        + GameConfig::FOOD_COUNT
        + GameConfig::EMPTY_COUNT
        == GameConfig::CELL_COUNT
);
