//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldSpec, FieldValue};
use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows a field needs, including the line reserved for its error
pub fn field_height(spec: &FieldSpec) -> u16 {
    let body = if spec.multiline { 5 } else { 3 };
    if spec.kind == FieldKind::Flag {
        body
    } else {
        body + 1
    }
}

/// Draw one form field with a floating label.
///
/// Empty unfocused fields show the label as a placeholder; once focused
/// or filled the label moves into the border.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    spec: &FieldSpec,
    value: Option<&FieldValue>,
    error: Option<&str>,
    is_active: bool,
    palette: &Palette,
) {
    let color = if error.is_some() {
        palette.error
    } else if is_active {
        palette.accent
    } else {
        palette.muted
    };
    let border_style = Style::default().fg(color);

    let label = if spec.required && spec.kind != FieldKind::Flag {
        format!("{} *", spec.label)
    } else {
        spec.label.clone()
    };

    let display_value = value.map(FieldValue::display_value).unwrap_or_default();
    let floating = is_active || !display_value.is_empty() || spec.kind == FieldKind::Flag;
    let cursor = if is_active && spec.kind != FieldKind::Flag {
        "▌"
    } else {
        ""
    };
    let cursor_style = Style::default().fg(palette.accent);

    let content = if !floating {
        Paragraph::new(Span::styled(
            label.clone(),
            Style::default().fg(palette.muted),
        ))
    } else if spec.multiline {
        let mut lines: Vec<Line> = display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), Style::default().fg(palette.text))))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(Span::styled(cursor, cursor_style));
        }
        // Keep the cursor line visible
        let visible = area.height.saturating_sub(3) as usize;
        let skip = lines.len().saturating_sub(visible.max(1));
        Paragraph::new(lines.split_off(skip))
    } else {
        let value_style = if is_active && spec.kind == FieldKind::Flag {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(palette.text)
        };
        Paragraph::new(Line::from(vec![
            Span::styled(display_value, value_style),
            Span::styled(cursor, cursor_style),
        ]))
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style);
    if floating {
        block = block.title(Span::styled(format!(" {label} "), Style::default().fg(color)));
    }

    let body_height = if spec.kind == FieldKind::Flag {
        area.height
    } else {
        area.height.saturating_sub(1)
    };
    let body = Rect {
        height: body_height,
        ..area
    };
    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), body);

    if let Some(message) = error {
        if body_height < area.height {
            let error_area = Rect {
                x: area.x + 1,
                y: area.y + body_height,
                width: area.width.saturating_sub(1),
                height: 1,
            };
            let line = Paragraph::new(Span::styled(message, Style::default().fg(palette.error)));
            frame.render_widget(line, error_area);
        }
    }
}
