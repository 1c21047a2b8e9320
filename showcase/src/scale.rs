use serde::Deserialize;
use tuimotion::Edges;

/// Converts density-independent lengths (dp) to terminal cells.
///
/// Terminal cells are roughly twice as tall as they are wide, so vertical and
/// horizontal lengths use separate factors.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Scale {
    pub dp_per_column: f32,
    pub dp_per_row: f32,
}

impl Default for Scale {
    fn default() -> Self {
        Self {
            dp_per_column: 10.0,
            dp_per_row: 40.0,
        }
    }
}

impl Scale {
    pub fn columns(&self, dp: f32) -> u16 {
        to_cells(dp, self.dp_per_column)
    }

    pub fn rows(&self, dp: f32) -> u16 {
        to_cells(dp, self.dp_per_row)
    }

    /// Vertical gap between blocks. Unlike [`Scale::rows`], a non-zero gap
    /// never collapses to nothing.
    pub fn spacing_rows(&self, dp: f32) -> u16 {
        if dp > 0.0 { self.rows(dp).max(1) } else { 0 }
    }

    /// The same dp inset on every side.
    pub fn inset(&self, dp: f32) -> Edges {
        Edges::symmetric(self.rows(dp), self.columns(dp))
    }
}

fn to_cells(dp: f32, dp_per_cell: f32) -> u16 {
    (dp / dp_per_cell).round().clamp(0.0, u16::MAX as f32) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_nearest_cell() {
        let scale = Scale::default();
        assert_eq!(scale.rows(200.0), 5);
        assert_eq!(scale.rows(100.0), 3);
        assert_eq!(scale.columns(200.0), 20);
        assert_eq!(scale.columns(16.0), 2);
        assert_eq!(scale.rows(0.0), 0);
    }

    #[test]
    fn spacing_keeps_at_least_one_row() {
        let scale = Scale::default();
        assert_eq!(scale.rows(16.0), 0);
        assert_eq!(scale.spacing_rows(16.0), 1);
        assert_eq!(scale.spacing_rows(120.0), 3);
        assert_eq!(scale.spacing_rows(0.0), 0);
    }

    #[test]
    fn negative_lengths_clamp_to_zero() {
        assert_eq!(Scale::default().columns(-30.0), 0);
    }
}
