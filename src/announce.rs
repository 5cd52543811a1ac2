//! Localized status strings for assistive-technology announcements.
//!
//! Wording is a presentation concern; the dispatcher only guarantees one
//! announcement per state-changing event. Positions are reported 1-based, the
//! way a screen reader user counts rows and columns.

use crate::config::Language;
use crate::draw::CellAddress;
use crate::input::InputMode;

/// Builds status messages in a fixed language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Messages {
    language: Language,
}

impl Messages {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Accessible label for a cell, e.g. "Row 1, column 2".
    pub fn cell_label(&self, cell: CellAddress) -> String {
        let (row, col) = one_based(cell);
        match self.language {
            Language::English => format!("Row {row}, column {col}"),
            Language::Spanish => format!("Fila {row}, columna {col}"),
        }
    }

    pub fn stroke_started(&self, cell: CellAddress) -> String {
        let (row, col) = one_based(cell);
        match self.language {
            Language::English => format!("Stroke started at row {row}, column {col}."),
            Language::Spanish => format!("Trazo iniciado en fila {row}, columna {col}."),
        }
    }

    pub fn cell_painted(&self, cell: CellAddress) -> String {
        let (row, col) = one_based(cell);
        match self.language {
            Language::English => format!("Cell painted: row {row}, column {col}."),
            Language::Spanish => format!("Celda pintada: fila {row}, columna {col}."),
        }
    }

    pub fn stroke_finished(&self, points: usize) -> String {
        match (self.language, points) {
            (Language::English, 1) => "Stroke finished with 1 point.".to_string(),
            (Language::English, n) => format!("Stroke finished with {n} points."),
            (Language::Spanish, 1) => "Trazo terminado con 1 punto.".to_string(),
            (Language::Spanish, n) => format!("Trazo terminado con {n} puntos."),
        }
    }

    pub fn canvas_reset(&self) -> String {
        match self.language {
            Language::English => "Canvas reset.".to_string(),
            Language::Spanish => "Dibujo borrado.".to_string(),
        }
    }

    pub fn mode_changed(&self, mode: InputMode) -> String {
        match (self.language, mode) {
            (Language::English, InputMode::ContinuousPaint) => "Continuous paint on.".to_string(),
            (Language::English, InputMode::DirectActivation) => {
                "Continuous paint off.".to_string()
            }
            (Language::Spanish, InputMode::ContinuousPaint) => {
                "Pintura continua activada.".to_string()
            }
            (Language::Spanish, InputMode::DirectActivation) => {
                "Pintura continua desactivada.".to_string()
            }
        }
    }

    /// Human-readable mode name for status lines.
    pub fn mode_name(&self, mode: InputMode) -> &'static str {
        match (self.language, mode) {
            (Language::English, InputMode::DirectActivation) => "Direct",
            (Language::English, InputMode::ContinuousPaint) => "Continuous",
            (Language::Spanish, InputMode::DirectActivation) => "Directo",
            (Language::Spanish, InputMode::ContinuousPaint) => "Continuo",
        }
    }
}

fn one_based(cell: CellAddress) -> (usize, usize) {
    (cell.row + 1, cell.col + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positions_are_one_based() {
        let messages = Messages::new(Language::English);
        assert_eq!(
            messages.stroke_started(CellAddress::new(0, 2)),
            "Stroke started at row 1, column 3."
        );
        assert_eq!(messages.cell_label(CellAddress::new(4, 0)), "Row 5, column 1");
    }

    #[test]
    fn spanish_labels_follow_grid_wording() {
        let messages = Messages::new(Language::Spanish);
        assert_eq!(
            messages.cell_label(CellAddress::new(0, 0)),
            "Fila 1, columna 1"
        );
        assert_eq!(messages.stroke_finished(1), "Trazo terminado con 1 punto.");
        assert_eq!(messages.stroke_finished(3), "Trazo terminado con 3 puntos.");
    }
}
