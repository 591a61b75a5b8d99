use std::sync::OnceLock;

/// Neighbor counts range over `0..=8`
const NEIGHBOR_STATES: usize = 9;
/// One row of outcomes for dead cells, one for alive cells
type RuleTable = [[bool; NEIGHBOR_STATES]; 2];

/// Returns a Singleton lookup table for the B3/S23 ruleset
///
/// Equivalent to calling [`generate_rule_table`] once and storing the result
fn rule_table() -> &'static RuleTable {
    static TABLE: OnceLock<RuleTable> = OnceLock::new();
    TABLE.get_or_init(generate_rule_table)
}

/// Creates a lookup table for the Game of Life ruleset
///
/// The table is indexed by `[alive as usize][live_neighbors]` and holds
/// whether the cell is alive in the next generation.
fn generate_rule_table() -> RuleTable {
    let mut table = [[false; NEIGHBOR_STATES]; 2];
    for (alive, row) in table.iter_mut().enumerate() {
        for (neighbors, next) in row.iter_mut().enumerate() {
            *next = match (alive == 1, neighbors) {
                // underpopulation
                (true, 0..=1) => false,
                // survival
                (true, 2 | 3) => true,
                // overpopulation
                (true, _) => false,
                // reproduction
                (false, 3) => true,
                (false, _) => false,
            };
        }
    }
    table
}

/// State of a cell in the next generation, given its current state and
/// number of live neighbors
#[inline]
pub(super) fn next_state(alive: bool, live_neighbors: u8) -> bool {
    debug_assert!(
        (live_neighbors as usize) < NEIGHBOR_STATES,
        "a cell has at most 8 neighbors"
    );
    rule_table()[alive as usize][live_neighbors as usize]
}
