//! Flat rectangular LED panel, addressed as (column, row).

use super::LedLayout;

/// Panel with `columns` x `rows` LEDs; a column plays the role of a strut
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelGeometry {
    pub columns: usize,
    pub rows: usize,
}

impl Default for PanelGeometry {
    fn default() -> Self {
        Self {
            columns: 30,
            rows: 40,
        }
    }
}

impl LedLayout for PanelGeometry {
    fn strut_count(&self) -> usize {
        self.columns
    }

    fn led_count(&self, column: usize) -> usize {
        assert!(
            column < self.columns,
            "panel column {} out of range ({} columns)",
            column,
            self.columns
        );
        self.rows
    }
}
