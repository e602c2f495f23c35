//! Board rendering for the Othello GUI

use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use crate::board::{Board, Cell, Pos};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Area covered by the slots, margins excluded
    grid_rect: Rect,
    size: usize,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 40.0,
            grid_rect: Rect::NOTHING,
            size: 0,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked slot if it is one of `legal`
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        legal: &[Pos],
        changed: &[Pos],
        accept_input: bool,
    ) -> Option<Pos> {
        self.size = board.size();

        let available_size = ui.available_size();
        let side = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (side - 2.0 * BOARD_MARGIN) / self.size as f32;

        let (response, painter) = ui.allocate_painter(Vec2::splat(side), Sense::click());
        self.grid_rect = Rect::from_min_size(
            response.rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * self.size as f32),
        );

        painter.rect_filled(response.rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.grid_rect, CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_pieces(&painter, board);

        for &pos in changed {
            self.draw_changed_marker(&painter, pos);
        }

        if !accept_input {
            return None;
        }

        for &pos in legal {
            painter.circle_filled(
                self.slot_center(pos),
                self.cell_size * LEGAL_MARKER_RATIO,
                legal_marker(),
            );
        }

        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|pos| legal.contains(pos));

        if let Some(pos) = hovered {
            painter.circle_filled(
                self.slot_center(pos),
                self.cell_size * PIECE_RADIUS_RATIO,
                hover_legal(),
            );
            if response.clicked() {
                return Some(pos);
            }
        }

        None
    }

    /// Draw the N x N slot lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let extent = self.cell_size * self.size as f32;

        for i in 0..=self.size {
            let offset = i as f32 * self.cell_size;

            let start = self.grid_rect.min + Vec2::new(offset, 0.0);
            painter.line_segment([start, start + Vec2::new(0.0, extent)], stroke);

            let start = self.grid_rect.min + Vec2::new(0.0, offset);
            painter.line_segment([start, start + Vec2::new(extent, 0.0)], stroke);
        }
    }

    /// Draw coordinate labels (A.., 1..) matching the text board
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(13.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..self.size {
            let offset = (i as f32 + 0.5) * self.cell_size;

            let letter = char::from(b'A' + i as u8);
            let pos = Pos2::new(self.grid_rect.min.x + offset, self.grid_rect.min.y - half);
            painter.text(pos, egui::Align2::CENTER_CENTER, letter, font.clone(), LABEL);

            let pos = Pos2::new(self.grid_rect.min.x - half, self.grid_rect.min.y + offset);
            painter.text(
                pos,
                egui::Align2::CENTER_CENTER,
                (i + 1).to_string(),
                font.clone(),
                LABEL,
            );
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for pos in board.positions() {
            let cell = board.get(pos);
            if !cell.is_empty() {
                self.draw_piece(painter, pos, cell);
            }
        }
    }

    /// Draw a single piece with a drop shadow
    fn draw_piece(&self, painter: &Painter, pos: Pos, cell: Cell) {
        let center = self.slot_center(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        let shadow = center + Vec2::new(2.0, 2.0);

        match cell {
            Cell::Black => {
                painter.circle_filled(shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 70));
                painter.circle_filled(center, radius, BLACK_PIECE);
                painter.circle_filled(
                    center + Vec2::splat(-radius * 0.3),
                    radius * 0.2,
                    BLACK_PIECE_HIGHLIGHT,
                );
            }
            Cell::White => {
                painter.circle_filled(shadow, radius, Color32::from_rgba_unmultiplied(0, 0, 0, 50));
                painter.circle_filled(center, radius, WHITE_PIECE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_PIECE_SHADOW),
                );
            }
            Cell::Empty => {}
        }
    }

    /// Ring around a slot that changed on the last move
    fn draw_changed_marker(&self, painter: &Painter, pos: Pos) {
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 2.0;
        painter.circle_stroke(self.slot_center(pos), radius, Stroke::new(2.0, CHANGED_RING));
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        if !self.grid_rect.contains(screen_pos) || self.cell_size <= 0.0 {
            return None;
        }

        let relative = screen_pos - self.grid_rect.min;
        let col = (relative.x / self.cell_size).floor() as usize;
        let row = (relative.y / self.cell_size).floor() as usize;

        (row < self.size && col < self.size).then(|| Pos::new(row as u8, col as u8))
    }

    /// Center of a slot in screen coordinates
    pub fn slot_center(&self, pos: Pos) -> Pos2 {
        self.grid_rect.min
            + Vec2::new(
                (f32::from(pos.col) + 0.5) * self.cell_size,
                (f32::from(pos.row) + 0.5) * self.cell_size,
            )
    }
}
