//! Stateless rendering for the three screens.

use gameof_core::{final_ranking, GameSession, PRESET_WORDS};
use gameof_types::Player;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, Screen, SetupFocus};

pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen() {
        Screen::Setup => draw_setup(frame, app),
        Screen::Game => draw_game(frame, app),
        Screen::Results => draw_results(frame, app),
    }
}

fn draw_setup(frame: &mut Frame, app: &App) {
    let session = app.session();
    let strings = app.strings();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(2), // Chosen word preview
            Constraint::Length(2), // Preset row
            Constraint::Length(3), // Word input
            Constraint::Length(3), // Name input
            Constraint::Min(3),    // Roster
            Constraint::Length(1), // Start line
            Constraint::Length(1), // Key help
        ])
        .split(frame.area());

    let title = Paragraph::new(strings.title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    let preview = spaced_letters(&session.stripped_target());
    let preview = Paragraph::new(preview)
        .style(Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(preview, chunks[1]);

    frame.render_widget(preset_row(app).alignment(Alignment::Center), chunks[2]);

    frame.render_widget(
        input_box(
            session.target_word(),
            strings.custom_word,
            strings.choose_word,
            app.focus() == SetupFocus::Word,
        ),
        chunks[3],
    );

    frame.render_widget(
        input_box(
            app.name_input(),
            strings.player_name,
            strings.players,
            app.focus() == SetupFocus::Name,
        ),
        chunks[4],
    );

    frame.render_widget(roster(app), chunks[5]);

    let can_start = !session.stripped_target().is_empty() && session.players().len() >= 2;
    let start_style = if can_start {
        Style::default()
            .fg(Color::LightGreen)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let start = Paragraph::new(format!("{} (Ctrl+S)", strings.start_game))
        .style(start_style)
        .alignment(Alignment::Center);
    frame.render_widget(start, chunks[6]);

    frame.render_widget(
        help_line("Tab next field | Enter confirm | x remove player | Esc quit"),
        chunks[7],
    );
}

fn preset_row(app: &App) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (i, word) in PRESET_WORDS.iter().enumerate() {
        let mut style = if *word == app.session().target_word() {
            Style::default()
                .fg(Color::White)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        if app.focus() == SetupFocus::Presets && i == app.preset_cursor() {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!(" {word} "), style));
        spans.push(Span::raw(" "));
    }
    Paragraph::new(Line::from(spans))
}

fn input_box(value: &str, placeholder: &'static str, title: &'static str, focused: bool) -> Paragraph<'static> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let text = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(value.to_string(), Style::default().fg(Color::White))
    };
    Paragraph::new(Line::from(text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(title),
    )
}

fn roster(app: &App) -> Paragraph<'static> {
    let focused = app.focus() == SetupFocus::Roster;
    let lines: Vec<Line> = app
        .session()
        .players()
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let mut style = Style::default().fg(Color::Gray);
            if focused && i == app.selected() {
                style = style.add_modifier(Modifier::REVERSED);
            }
            Line::from(Span::styled(format!(" {} ", player.name), style))
        })
        .collect();
    Paragraph::new(lines)
}

fn draw_game(frame: &mut Frame, app: &App) {
    let session = app.session();
    let strings = app.strings();
    let show_leaderboard_link = session.had_winner();

    let mut constraints = vec![
        Constraint::Length(2), // Title
        Constraint::Length(1), // Tap hint
    ];
    if show_leaderboard_link {
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Min(3)); // Player cards
    constraints.push(Constraint::Length(1)); // Saved note
    constraints.push(Constraint::Length(1)); // Key help
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(frame.area());

    let title = Paragraph::new(format!("Game of {}", session.target_word()))
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    frame.render_widget(title, chunks[0]);

    frame.render_widget(
        Paragraph::new(strings.tap_to_add).style(Style::default().fg(Color::Gray)),
        chunks[1],
    );

    let mut next = 2;
    if show_leaderboard_link {
        let link = Paragraph::new(format!("[l] {}", strings.back_to_leaderboard))
            .style(
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center);
        frame.render_widget(link, chunks[next]);
        next += 1;
    }

    draw_player_cards(frame, chunks[next], app);

    frame.render_widget(
        Paragraph::new(strings.game_saved)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[next + 1],
    );
    frame.render_widget(
        help_line("Up/Down select | Space tap | u undo | w wildcard | r reset | q quit"),
        chunks[next + 2],
    );
}

fn draw_player_cards(frame: &mut Frame, area: Rect, app: &App) {
    let players = app.session().players();
    let mut constraints: Vec<Constraint> = players.iter().map(|_| Constraint::Length(3)).collect();
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (i, player) in players.iter().enumerate() {
        draw_player_card(frame, rows[i], app, player, i == app.selected());
    }
}

fn draw_player_card(frame: &mut Frame, area: Rect, app: &App, player: &Player, selected: bool) {
    let strings = app.strings();

    let border = if selected {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let mut title = vec![Span::styled(
        format!(" {} ", player.name),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )];
    if player.eliminated {
        title.push(Span::styled(
            format!(" {} ", strings.eliminated),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ));
    }
    if player.wildcard_used {
        title.push(Span::styled(
            format!(" ★ {} ", strings.wildcard_used),
            Style::default().fg(Color::LightGreen),
        ));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(Line::from(title));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut track = Paragraph::new(letter_track(app.session(), player));
    if player.eliminated {
        track = track.style(Style::default().add_modifier(Modifier::DIM));
    }
    frame.render_widget(track, inner);
}

/// One cell per letter of the target: collected letters shown, the rest
/// held back as dots.
fn letter_track(session: &GameSession, player: &Player) -> Line<'static> {
    let collected = player.letter_count();
    let mut spans = Vec::new();
    for (i, letter) in session.stripped_target().chars().enumerate() {
        if i < collected {
            spans.push(Span::styled(
                format!(" {letter} "),
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ));
        } else {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

fn draw_results(frame: &mut Frame, app: &App) {
    let session = app.session();
    let strings = app.strings();
    let ranked = final_ranking(session.players(), session.winner());

    let height = 9 + ranked.len() as u16;
    let card = center_rect(frame.area(), 54, height);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Game over
            Constraint::Length(2), // Winner line
            Constraint::Length(1), // Ranking label
            Constraint::Min(1),    // Ranking rows
            Constraint::Length(2), // Buttons
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(format!("🏆 {}", strings.game_over))
            .style(Style::default().fg(Color::Yellow))
            .alignment(Alignment::Center),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(format!(
            "{} {}",
            session.winner().unwrap_or_default(),
            strings.wins
        ))
        .style(
            Style::default()
                .fg(Color::LightGreen)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(strings.final_ranking).style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
    frame.render_widget(Paragraph::new(ranking_lines(&ranked)), chunks[3]);
    frame.render_widget(
        Paragraph::new(format!(
            "[b] {}   [n] {}",
            strings.back_to_game, strings.new_game
        ))
        .style(Style::default().fg(Color::Gray))
        .alignment(Alignment::Center),
        chunks[4],
    );
}

fn ranking_lines(ranked: &[Player]) -> Vec<Line<'static>> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, player)| {
            let position_style = match i {
                0 => Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
                1 => Style::default().fg(Color::Gray),
                2 => Style::default().fg(Color::LightRed),
                _ => Style::default().fg(Color::DarkGray),
            };
            let name_style = if i == 0 {
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            let mut spans = vec![
                Span::styled(format!("{:>2}. ", i + 1), position_style),
                Span::styled(player.name.clone(), name_style),
                Span::raw("  "),
                Span::styled(player.letters.clone(), Style::default().fg(Color::DarkGray)),
            ];
            if player.wildcard_used {
                spans.push(Span::styled(" ★", Style::default().fg(Color::LightGreen)));
            }
            Line::from(spans)
        })
        .collect()
}

fn spaced_letters(word: &str) -> String {
    word.chars()
        .flat_map(|c| [c, ' '])
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn help_line(text: &'static str) -> Paragraph<'static> {
    Paragraph::new(text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vertical[1])[1]
}
