use crate::surface::{self, DrawCommand, DrawList, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        Block, Borders, Paragraph,
        canvas::{Canvas, Circle, Context, Points},
    },
};

/// Viewport units between the concentric rings that fill a circle
const RING_SPACING: f64 = 3.0;

/// View struct that holds everything needed to draw one frame
pub struct RenderView<'a> {
    pub draw_list: &'a DrawList,
    pub tick: u64,
    pub fps: u32,
    pub area: Rect,
}

/// Replays the primitives recorded by a world tick onto the terminal
pub struct GameRenderer {
    marker: Marker,
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl GameRenderer {
    pub fn new() -> Self {
        Self {
            marker: Marker::Braille,
        }
    }

    pub fn render(&self, frame: &mut Frame, view: &RenderView) {
        let [board_area, footer_area] =
            Layout::vertical([Constraint::Min(3), Constraint::Length(1)]).areas(view.area);

        let commands = view.draw_list.visible();
        let canvas = Canvas::default()
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" Tower Defense "),
            )
            .marker(self.marker)
            .x_bounds([0.0, VIEWPORT_WIDTH])
            .y_bounds([0.0, VIEWPORT_HEIGHT])
            .paint(|ctx| {
                for command in commands {
                    replay(ctx, command);
                }
            });
        frame.render_widget(canvas, board_area);

        let footer = Line::from(vec![
            Span::styled("Tick: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.tick),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  FPS: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format!("{}", view.fps),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("  [Q: Quit]", Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(footer).centered(), footer_area);
    }
}

fn replay(ctx: &mut Context, command: &DrawCommand) {
    match command {
        // The canvas starts blank every frame; `visible` already dropped
        // everything before the last clear.
        DrawCommand::ClearRect { .. } => {}
        DrawCommand::FillCircle {
            x,
            y,
            radius,
            color,
        } => fill_circle(ctx, *x, flip_y(*y), *radius, terminal_color(*color)),
        DrawCommand::FillText { text, x, y, .. } => {
            ctx.print(
                *x,
                flip_y(*y),
                Line::styled(
                    text.clone(),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            );
        }
    }
}

/// The canvas grows upward, the viewport downward
fn flip_y(y: f64) -> f64 {
    VIEWPORT_HEIGHT - y
}

fn fill_circle(ctx: &mut Context, x: f64, y: f64, radius: f64, color: Color) {
    let mut ring = radius;
    while ring > 0.0 {
        ctx.draw(&Circle {
            x,
            y,
            radius: ring,
            color,
        });
        ring -= RING_SPACING;
    }
    ctx.draw(&Points {
        coords: &[(x, y)],
        color,
    });
}

fn terminal_color(color: surface::Color) -> Color {
    match color {
        surface::Color::Red => Color::Red,
        surface::Color::Blue => Color::Blue,
        surface::Color::Green => Color::Green,
    }
}
