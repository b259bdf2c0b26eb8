//! User interface rendering functions for the puzzle screen.
//!
//! The engine describes each frame as sprites placed on a 400x400 pixel canvas. This module maps
//! that canvas onto a centered area of the terminal, scaling pixel edges to cell edges, and paints
//! rectangles as filled blocks and text as centered lines.

use color_eyre::eyre::{OptionExt as _, Result};
use ratatui::{
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

use crate::{
    scene::{Placement, Scene},
    types::Shape,
    App,
};

/// Updates the application UI based on the persistent state.
///
/// This function splits the terminal into the board area and a tooltip at the bottom, then draws
/// the session's current frame into the board area.
///
/// # Errors
///
/// This function may return errors from layout retrieval or coordinate conversion failures.
pub(crate) fn draw(app: &App, frame: &mut Frame) -> Result<()> {
    clear(frame);

    let overall_layout = Layout::vertical([
        Constraint::Min(1),    // Board and padding area
        Constraint::Length(3), // Tooltip block
    ])
    .split(frame.area());

    let board_full_area = *overall_layout
        .first()
        .ok_or_eyre("failed to get board area from layout")?;
    let tooltip_area = *overall_layout
        .last()
        .ok_or_eyre("failed to get tooltip area from layout")?;

    let canvas = canvas_area(board_full_area)?;
    render_scene(frame, &app.session.frame()?, canvas)?;
    tooltip(app, frame, tooltip_area);

    Ok(())
}

/// Clears the terminal screen by rendering a [`Clear`] widget.
///
/// This function renders a clear widget over the entire area of the frame to prepare for
/// rendering new content without artifacts from previous buffers rendered on the same frame.
pub(crate) fn clear(frame: &mut Frame) {
    let clear = Clear;
    frame.render_widget(clear, frame.area());
}

/// Computes the largest centered area that looks square on screen.
///
/// Terminal cells are roughly twice as tall as they are wide, so the area is twice as many columns
/// wide as it is rows tall.
pub(crate) fn canvas_area(area: Rect) -> Result<Rect> {
    let side = area.height.min(area.width / 2);

    let rows = Layout::vertical([Constraint::Length(side)])
        .flex(Flex::Center)
        .split(area)
        .first()
        .copied()
        .ok_or_eyre("failed to get canvas rows from vertical layout")?;

    Layout::horizontal([Constraint::Length(side.saturating_mul(2))])
        .flex(Flex::Center)
        .split(rows)
        .first()
        .copied()
        .ok_or_eyre("failed to get canvas columns from horizontal layout")
}

/// Paints every placement of `scene` into `area`, in order.
///
/// # Errors
///
/// This function may return errors if a scaled coordinate does not fit the terminal.
pub(crate) fn render_scene(frame: &mut Frame, scene: &Scene, area: Rect) -> Result<()> {
    for placement in &scene.placements {
        for shape in &placement.sprite.layers {
            match shape {
                Shape::Rectangle {
                    width,
                    height,
                    color,
                } => {
                    let rect = scale_rect(scene, area, placement, *width, *height)?;
                    frame.render_widget(Block::default().style(Style::default().bg(*color)), rect);
                }
                Shape::Text { content, color, .. } => {
                    let rect = text_rect(scene, area, placement, content)?;
                    frame.render_widget(
                        Line::styled(content.as_str(), Style::default().fg(*color)).centered(),
                        rect,
                    );
                }
            }
        }
    }

    Ok(())
}

/// Scales a canvas pixel offset to a terminal cell offset.
fn scale(pixels: i32, cells: u16, canvas: u16) -> i32 {
    rounded_div::i32(pixels * i32::from(cells), i32::from(canvas.max(1)))
}

/// Converts a scaled offset back to a terminal coordinate relative to `origin`.
fn offset(origin: u16, cells: i32) -> Result<u16> {
    Ok(origin.saturating_add(u16::try_from(cells.max(0))?))
}

/// Maps a rectangle centered on a placement to the terminal cells it covers.
///
/// Both edges are scaled independently so that neighbouring rectangles share their edges exactly.
fn scale_rect(
    scene: &Scene,
    area: Rect,
    placement: &Placement,
    width: u16,
    height: u16,
) -> Result<Rect> {
    let left = i32::from(placement.x) - i32::from(width) / 2;
    let top = i32::from(placement.y) - i32::from(height) / 2;

    let x0 = scale(left, area.width, scene.width);
    let x1 = scale(left + i32::from(width), area.width, scene.width);
    let y0 = scale(top, area.height, scene.height);
    let y1 = scale(top + i32::from(height), area.height, scene.height);

    let rect = Rect::new(
        offset(area.x, x0)?,
        offset(area.y, y0)?,
        u16::try_from((x1 - x0).max(0))?,
        u16::try_from((y1 - y0).max(0))?,
    );

    Ok(rect.intersection(area))
}

/// Maps a line of text centered on a placement to the terminal row it occupies.
fn text_rect(scene: &Scene, area: Rect, placement: &Placement, content: &str) -> Result<Rect> {
    let len = u16::try_from(content.chars().count())?;
    let center_x = offset(
        area.x,
        scale(i32::from(placement.x), area.width, scene.width),
    )?;
    let center_y = offset(
        area.y,
        scale(i32::from(placement.y), area.height, scene.height),
    )?;

    let rect = Rect::new(center_x.saturating_sub(len / 2), center_y, len, 1);

    Ok(rect.intersection(area))
}

/// Renders the tooltip block with the key help and the move counter.
fn tooltip(app: &App, frame: &mut Frame, area: Rect) {
    let title = if app.session.is_solved() {
        "(q) quit"
    } else {
        "(arrows / wasd) slide / (q) quit"
    };

    let tooltip_block = Block::bordered()
        .title(title)
        .title_alignment(Alignment::Center)
        .style(Style::default().fg(Color::Green))
        .border_type(BorderType::Plain)
        .borders(Borders::TOP);

    let inner = tooltip_block.inner(area);
    frame.render_widget(tooltip_block, area);
    frame.render_widget(
        Line::raw(format!("moves: {}", app.session.move_count())).centered(),
        inner,
    );
}
