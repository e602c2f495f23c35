//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Color;
use crate::engine::Outcome;

use super::board_view::BoardView;
use super::game_state::{GameMode, GameState, Settings};
use super::theme::*;

/// Which screen is showing
enum Screen {
    Settings(Settings),
    Playing(GameState),
}

/// Main Othello application
pub struct OthelloApp {
    screen: Screen,
    board_view: BoardView,
    show_debug: bool,
    title: String,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self {
            screen: Screen::Settings(Settings::default()),
            board_view: BoardView::default(),
            show_debug: false,
            title: String::new(),
        }
    }
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn button(ui: &mut egui::Ui, text: &str) -> bool {
        let frame = Frame::new()
            .fill(BUTTON_BG)
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0);

        frame
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(13.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    /// Board size and opponent choice; picking an opponent starts the match
    fn render_settings(ctx: &Context, settings: &mut Settings) -> Option<GameMode> {
        let mut chosen = None;

        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(80.0);
                    ui.label(RichText::new("OTHELLO").size(36.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("Game Settings").size(14.0).color(TEXT_MUTED));
                    ui.add_space(24.0);

                    Self::card_frame().show(ui, |ui| {
                        ui.set_width(320.0);
                        ui.vertical_centered(|ui| {
                            let label = format!(
                                "Board Size: {0}x{0} (click to increase)",
                                settings.size
                            );
                            if Self::button(ui, &label) {
                                settings.increase_size();
                            }

                            ui.add_space(16.0);
                            ui.horizontal(|ui| {
                                for mode in [GameMode::Computer, GameMode::Friend] {
                                    if Self::button(ui, mode.label()) {
                                        chosen = Some(mode);
                                    }
                                }
                            });
                        });
                    });
                });
            });

        chosen
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        let mut back_to_settings = None;

        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                let Screen::Playing(state) = &mut self.screen else {
                    return;
                };

                ui.menu_button("Game", |ui| {
                    if ui.button("New Round (N)").clicked() {
                        state.new_round();
                        ui.close_menu();
                    }
                    if ui.button("Settings (Esc)").clicked() {
                        back_to_settings = Some(state.settings);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label(format!(
                        "{0}x{0} - {1}",
                        state.settings.size,
                        state.settings.mode.label()
                    ));
                });
            });
        });

        if let Some(settings) = back_to_settings {
            self.screen = Screen::Settings(settings);
        }
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        let show_debug = self.show_debug;
        let Screen::Playing(state) = &mut self.screen else {
            return;
        };

        let mut quit = false;
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                ui.horizontal(|ui| {
                    ui.add_space(8.0);
                    ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
                });
                ui.add_space(12.0);

                Self::render_turn_card(ui, state);
                ui.add_space(10.0);

                Self::render_score_card(ui, state);
                ui.add_space(10.0);

                Self::render_tally_card(ui, state);

                if show_debug {
                    ui.add_space(10.0);
                    Self::render_debug_card(ui, state);
                }

                if let Some(outcome) = state.outcome {
                    ui.add_space(10.0);
                    match Self::render_game_over_card(ui, &outcome) {
                        Some(true) => state.new_round(),
                        Some(false) => quit = true,
                        None => {}
                    }
                }

                if let Some(msg) = &state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });

        if quit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
        }
    }

    fn render_turn_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            let is_black = state.current_turn == Color::Black;
            let (accent, fg) = if is_black {
                (BLACK_PIECE, TEXT_PRIMARY)
            } else {
                (WHITE_PIECE, BLACK_PIECE)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 22.0, accent);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    if is_black { "X" } else { "O" },
                    egui::FontId::proportional(20.0),
                    fg,
                );

                ui.add_space(12.0);
                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = state.current_turn.name().to_uppercase();
                    ui.label(RichText::new(name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if state.outcome.is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if state.is_ai_thinking() {
                        ("Computer thinking...", STATUS_BUSY)
                    } else {
                        ("Your turn", STATUS_READY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    fn render_score_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            for color in [Color::Black, Color::White] {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(color.name()).size(14.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(
                            RichText::new(state.engine.score(color).to_string())
                                .size(18.0)
                                .strong()
                                .color(TEXT_PRIMARY),
                        );
                        ui.label(
                            RichText::new(format!(
                                "{} moves",
                                state.engine.legal_moves(color).len()
                            ))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                        );
                    });
                });
            }
        });
    }

    fn render_tally_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MATCHES WON").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(
                RichText::new(format!(
                    "Black {}  -  {} White",
                    state.tally.black, state.tally.white
                ))
                .size(14.0)
                .color(TEXT_PRIMARY),
            );
        });
    }

    fn render_debug_card(ui: &mut egui::Ui, state: &GameState) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = state.ai_thinking_elapsed() {
                ui.label(
                    RichText::new(format!("thinking {:.2}s", elapsed.as_secs_f32()))
                        .size(12.0)
                        .color(STATUS_BUSY),
                );
            } else if let Some(result) = &state.last_ai_result {
                let best = result
                    .best_move
                    .map_or_else(|| "pass".to_string(), |p| p.to_string());
                ui.label(RichText::new(best).size(14.0).strong().color(WIN_HIGHLIGHT));
                ui.label(
                    RichText::new(format!("Score: {:.2}", result.score))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                ui.label(
                    RichText::new(format!("{} nodes", result.nodes))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                if let Some(time) = state.last_ai_time {
                    ui.label(
                        RichText::new(format!("{}ms", time.as_millis()))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                }
            } else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Match result; `Some(true)` for another round, `Some(false)` to quit
    fn render_game_over_card(ui: &mut egui::Ui, outcome: &Outcome) -> Option<bool> {
        let headline = match outcome.winner {
            Some(Color::Black) => "Black Won!!",
            Some(Color::White) => "White Won!!",
            None => "It's a tie!!",
        };
        let mut choice = None;

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(20.0).strong().color(TEXT_PRIMARY));
                    ui.label(
                        RichText::new(format!(
                            "Black: {}  White: {}",
                            outcome.black, outcome.white
                        ))
                        .size(12.0)
                        .color(TEXT_SECONDARY),
                    );

                    ui.add_space(10.0);
                    ui.label(
                        RichText::new("Would you like another round?")
                            .size(12.0)
                            .color(TEXT_PRIMARY),
                    );
                    ui.horizontal(|ui| {
                        if Self::button(ui, "Yes") {
                            choice = Some(true);
                        }
                        if Self::button(ui, "No") {
                            choice = Some(false);
                        }
                    });
                });
            });

        choice
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        let Screen::Playing(state) = &mut self.screen else {
            return;
        };
        let board_view = &mut self.board_view;

        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(10.0))
            .show(ctx, |ui| {
                let accept_input =
                    state.outcome.is_none() && state.is_human_turn() && !state.is_ai_thinking();
                let legal = state.engine.legal_moves(state.current_turn);
                let changed = state.changed_slots();

                let clicked = board_view.show(
                    ui,
                    state.engine.board(),
                    &legal,
                    &changed,
                    accept_input,
                );

                if let Some(pos) = clicked {
                    if let Err(msg) = state.try_place_piece(pos) {
                        state.message = Some(msg);
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, new_round, escape) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::N),
                i.key_pressed(egui::Key::Escape),
            )
        });

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }

        let mut back_to_settings = None;
        if let Screen::Playing(state) = &mut self.screen {
            if new_round {
                state.new_round();
            }
            if escape {
                back_to_settings = Some(state.settings);
            }
        }
        if let Some(settings) = back_to_settings {
            self.screen = Screen::Settings(settings);
        }
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        if let Screen::Settings(settings) = &mut self.screen {
            let chosen = Self::render_settings(ctx, settings).map(|mode| Settings {
                mode,
                ..*settings
            });
            if let Some(settings) = chosen {
                log::info!("starting {:?} on {}x{}", settings.mode, settings.size, settings.size);
                self.screen = Screen::Playing(GameState::new(settings));
            }
            return;
        }

        self.handle_input(ctx);

        if let Screen::Playing(state) = &mut self.screen {
            state.check_ai_result();
            if state.is_ai_turn() && !state.is_ai_thinking() {
                state.start_ai_thinking();
            }
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if let Screen::Playing(state) = &self.screen {
            let title = match state.outcome {
                Some(_) => "Othello - Game Over".to_string(),
                None => format!("Othello - {}'s Turn", state.current_turn),
            };
            if title != self.title {
                ctx.send_viewport_cmd(egui::ViewportCommand::Title(title.clone()));
                self.title = title;
            }

            if state.is_ai_thinking() {
                ctx.request_repaint();
            }
        }
    }
}
