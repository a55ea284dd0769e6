//! Tombala card generation. A card is a 3×9 grid carrying 15 numbers: five
//! per row, columns restricted to their value band (1–9, 10–19, …, 80–90),
//! ascending top to bottom within a column. Generation is deterministic per
//! seed so a card can be reproduced and the invariants can be tested.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub const ROWS: usize = 3;
pub const COLUMNS: usize = 9;
pub const NUMBERS_PER_ROW: usize = 5;
pub const NUMBERS_PER_CARD: usize = ROWS * NUMBERS_PER_ROW;

/// The inclusive value band of a column: 1–9, 10–19, …, 70–79, 80–90.
pub fn column_range(column: usize) -> std::ops::RangeInclusive<u8> {
    match column {
        0 => 1..=9,
        8 => 80..=90,
        _ => {
            let low = (column as u8) * 10;
            low..=low + 9
        }
    }
}

/// Card
///
/// One tombala card. Cells are `None` for blanks; the grid invariants are
/// established by `generate` and never change afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    cells: [[Option<u8>; COLUMNS]; ROWS],
}

impl Card {
    /// generate
    ///
    /// Builds a card from a seed. Column occupancy is drawn first (every
    /// column keeps at least one number, none more than three), then the
    /// columns are laid out onto rows largest-first, always picking the
    /// emptiest rows. With 15 numbers over 3×5 row slots that greedy order
    /// always finds a row with capacity.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);

        // 1. How many numbers each column carries.
        let mut counts = [1usize; COLUMNS];
        let mut remaining = NUMBERS_PER_CARD - COLUMNS;
        while remaining > 0 {
            let column = rng.gen_range(0..COLUMNS);
            if counts[column] < ROWS {
                counts[column] += 1;
                remaining -= 1;
            }
        }

        // 2. Which numbers, drawn from each column's band, kept ascending.
        let mut column_numbers: Vec<Vec<u8>> = Vec::with_capacity(COLUMNS);
        for (column, &count) in counts.iter().enumerate() {
            let mut pool: Vec<u8> = column_range(column).collect();
            pool.shuffle(&mut rng);
            let mut picked = pool[..count].to_vec();
            picked.sort_unstable();
            column_numbers.push(picked);
        }

        // 3. Row layout: columns largest-first into the emptiest rows.
        let mut order: Vec<usize> = (0..COLUMNS).collect();
        order.sort_by_key(|&column| std::cmp::Reverse(counts[column]));

        let mut row_loads = [0usize; ROWS];
        let mut cells = [[None; COLUMNS]; ROWS];
        for column in order {
            let mut rows: Vec<usize> = (0..ROWS)
                .filter(|&row| row_loads[row] < NUMBERS_PER_ROW)
                .collect();
            rows.sort_by_key(|&row| row_loads[row]);
            rows.truncate(counts[column]);
            // Numbers ascend top to bottom, so fill in row order.
            rows.sort_unstable();
            for (nth, &row) in rows.iter().enumerate() {
                cells[row][column] = Some(column_numbers[column][nth]);
                row_loads[row] += 1;
            }
        }

        Self { cells }
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<u8> {
        self.cells[row][column]
    }

    pub fn rows(&self) -> &[[Option<u8>; COLUMNS]; ROWS] {
        &self.cells
    }

    /// All 15 numbers on the card, in grid order.
    pub fn numbers(&self) -> Vec<u8> {
        self.cells
            .iter()
            .flatten()
            .filter_map(|cell| *cell)
            .collect()
    }

    pub fn contains(&self, number: u8) -> bool {
        self.cells
            .iter()
            .flatten()
            .any(|cell| *cell == Some(number))
    }
}
