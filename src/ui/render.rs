use crate::password::CharClass;
use crate::ui::app::{App, Control, ModalKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, Paragraph, Wrap},
    Frame,
};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = &app.theme;
    frame.render_widget(
        Block::default().style(Style::default().bg(theme.bg).fg(theme.fg)),
        frame.area(),
    );

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(6), // Settings
            Constraint::Length(3), // Generate button
            Constraint::Length(output_height(app, frame.area().width)), // Output + copy
            Constraint::Length(3), // Strength gauge
            Constraint::Min(0),
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, app, main_chunks[0]);
    render_settings(frame, app, main_chunks[1]);
    render_button(
        frame,
        app,
        main_chunks[2],
        "Generate",
        app.focus == Control::Generate,
        true,
    );
    render_output(frame, app, main_chunks[3]);
    render_strength(frame, app, main_chunks[4]);
    render_footer(frame, app, main_chunks[6]);

    if app.modal.is_some() {
        render_modal(frame, app);
    }
}

fn border_style(app: &App, focused: bool) -> Style {
    if focused {
        Style::default().fg(app.theme.accent)
    } else {
        Style::default().fg(app.theme.fg_dim)
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let header = Paragraph::new(Line::from(vec![Span::styled(
        "  passgen - password generator  ",
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    )]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.accent)),
    );

    frame.render_widget(header, area);
}

fn render_settings(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Settings ")
        .border_style(Style::default().fg(app.theme.fg_dim));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    // Length field
    let length_focused = app.focus == Control::Length;
    let length_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(17), Constraint::Length(9), Constraint::Min(0)])
        .split(rows[0]);

    let label = Paragraph::new("Password length:").style(Style::default().fg(app.theme.fg));
    frame.render_widget(
        label,
        Rect {
            y: length_row[0].y + 1,
            height: 1,
            ..length_row[0]
        },
    );

    let value_style = if app.length().is_some() {
        Style::default().fg(app.theme.fg)
    } else {
        Style::default().fg(app.theme.error)
    };
    let cursor = if length_focused { "_" } else { "" };
    let field = Paragraph::new(Line::from(vec![
        Span::styled(app.length_input.clone(), value_style),
        Span::styled(cursor, Style::default().fg(app.theme.accent)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(app, length_focused)),
    );
    frame.render_widget(field, length_row[1]);

    if length_focused {
        let hint = Paragraph::new(" ←/→ adjust, digits to type")
            .style(Style::default().fg(app.theme.fg_dim));
        frame.render_widget(
            hint,
            Rect {
                y: length_row[2].y + 1,
                height: 1,
                ..length_row[2]
            },
        );
    }

    // Checkboxes
    let spans: Vec<Span> = CharClass::ALL
        .iter()
        .flat_map(|class| {
            let checked = app.classes.contains(*class);
            let focused = app.focus == Control::Class(*class);
            let mark = if checked { "[x]" } else { "[ ]" };
            let mut style = if checked {
                Style::default().fg(app.theme.fg)
            } else {
                Style::default().fg(app.theme.fg_dim)
            };
            if focused {
                style = style
                    .fg(app.theme.bg)
                    .bg(app.theme.accent)
                    .add_modifier(Modifier::BOLD);
            }
            [
                Span::raw("  "),
                Span::styled(format!("{} {}", mark, class.caption()), style),
            ]
        })
        .collect();
    frame.render_widget(Paragraph::new(Line::from(spans)), rows[1]);
}

fn render_button(
    frame: &mut Frame,
    app: &App,
    area: Rect,
    label: &str,
    focused: bool,
    enabled: bool,
) {
    let style = if !enabled {
        Style::default().fg(app.theme.fg_dim)
    } else if focused {
        Style::default()
            .fg(app.theme.bg)
            .bg(app.theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.fg)
    };

    let button = Paragraph::new(label.to_string())
        .alignment(Alignment::Center)
        .style(style)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(app, focused)),
        );
    frame.render_widget(button, area);
}

/// Width of the Copy button next to the password field.
const COPY_BUTTON_WIDTH: u16 = 10;

/// Rows needed for the password box so a long password wraps instead of
/// being cut off at the right border.
fn output_height(app: &App, total_width: u16) -> u16 {
    let text_width = usize::from(
        total_width
            .saturating_sub(COPY_BUTTON_WIDTH)
            .saturating_sub(2)
            .max(1),
    );
    let chars = app.password.as_ref().map_or(0, |p| p.chars().count());
    let lines = chars.div_ceil(text_width).max(1);
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

fn render_output(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(COPY_BUTTON_WIDTH)])
        .split(area);

    let text = match &app.password {
        Some(password) => Span::styled(
            password.clone(),
            Style::default()
                .fg(app.theme.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        None => Span::styled(
            "press g to generate",
            Style::default().fg(app.theme.fg_dim),
        ),
    };

    let output = Paragraph::new(Line::from(text))
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Password ")
                .border_style(Style::default().fg(app.theme.fg_dim)),
        );
    frame.render_widget(output, chunks[0]);

    render_button(
        frame,
        app,
        chunks[1],
        "Copy",
        app.focus == Control::Copy,
        app.can_copy(),
    );
}

fn render_strength(frame: &mut Frame, app: &App, area: Rect) {
    let (percent, label, color) = match app.strength {
        Some(strength) => (
            strength.percent(),
            strength.label(),
            app.theme.strength_color(strength.score()),
        ),
        None => (0, "-", app.theme.fg_dim),
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Strength ")
                .border_style(Style::default().fg(app.theme.fg_dim)),
        )
        .gauge_style(Style::default().fg(color).bg(app.theme.bg))
        .percent(percent)
        .label(Span::styled(
            format!("Strength: {}", label),
            Style::default().fg(app.theme.fg),
        ));
    frame.render_widget(gauge, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match &app.status {
        Some(status) => (status.clone(), app.theme.secondary),
        None => (
            "[Tab/↑↓] Move  [Space/Enter] Select  [g] Generate  [c] Copy  [t] Theme  [q] Quit"
                .to_string(),
            app.theme.fg_dim,
        ),
    };

    let footer = Paragraph::new(text).style(Style::default().fg(color));
    frame.render_widget(footer, area);
}

fn render_modal(frame: &mut Frame, app: &App) {
    let Some(modal) = &app.modal else {
        return;
    };

    let color = match modal.kind {
        ModalKind::Info => app.theme.success,
        ModalKind::Error => app.theme.error,
    };

    let area = centered_rect(50, 7, frame.area());
    let body = vec![
        Line::from(""),
        Line::from(modal.message.clone()),
        Line::from(""),
        Line::from(Span::styled(
            "[Enter] OK",
            Style::default().fg(app.theme.fg_dim),
        )),
    ];

    let dialog = Paragraph::new(body)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(Style::default().bg(app.theme.bg).fg(app.theme.fg))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", modal.title))
                .border_style(Style::default().fg(color).add_modifier(Modifier::BOLD)),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(dialog, area);
}

/// A rectangle `percent_x` wide and `height` rows tall, centered in `area`.
fn centered_rect(percent_x: u16, height: u16, area: Rect) -> Rect {
    let scaled = u32::from(area.width) * u32::from(percent_x) / 100;
    let width = u16::try_from(scaled)
        .unwrap_or(area.width)
        .max(30)
        .min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
