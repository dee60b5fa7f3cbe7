use rand::prelude::*;

use crate::input::InputKind;

pub const ROW_COUNT: usize = 200;
pub const GRID_CELLS: usize = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub title: &'static str,
    pub subtitle: &'static str,
}

impl Default for GridCell {
    fn default() -> Self {
        Self {
            title: "Title",
            subtitle: "Subtitle",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowVariant {
    Collapsible,
    /// Horizontally scrolling strip of `cells` identical cells.
    WidgetGrid { cells: usize },
    Input(InputKind),
}

impl RowVariant {
    /// Cells of a grid row; empty for every other variant.
    pub fn grid_cells(&self) -> Vec<GridCell> {
        match self {
            RowVariant::WidgetGrid { cells } => vec![GridCell::default(); *cells],
            _ => Vec::new(),
        }
    }
}

/// Widget for row `index`. Even rows collapse, odd multiples of three get a
/// grid, everything else flips a coin between a masked and a plain input.
pub fn variant_for(index: usize, rng: &mut impl Rng) -> RowVariant {
    if index % 2 == 0 {
        RowVariant::Collapsible
    } else if index % 3 == 0 {
        RowVariant::WidgetGrid { cells: GRID_CELLS }
    } else if rng.gen_bool(0.5) {
        RowVariant::Input(InputKind::Masked)
    } else {
        RowVariant::Input(InputKind::Plain)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenConfig {
    pub rows: usize,
    /// Fixed seed for reproducible screens; `None` draws from entropy.
    pub seed: Option<u64>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            rows: ROW_COUNT,
            seed: None,
        }
    }
}

impl ScreenConfig {
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn rows(mut self, rows: usize) -> Self {
        self.rows = rows;
        self
    }
}

/// Row variants for one screen, drawn once up front.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScreenModel {
    rows: Vec<RowVariant>,
}

impl ScreenModel {
    pub fn new(config: &ScreenConfig) -> Self {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let rows: Vec<RowVariant> = (0..config.rows).map(|i| variant_for(i, &mut rng)).collect();
        log::debug!("screen model: {} rows (seed {:?})", rows.len(), config.seed);
        Self { rows }
    }

    pub fn rows(&self) -> &[RowVariant] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
