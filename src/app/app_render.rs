use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use super::app_state::App;
use crate::dom::{Document, ElementId};
use crate::widgets::popup::{self, element_rect, tip_rect};

const TITLE: &str = " tipsy demo ";
const DIM_BELOW_OPACITY: f64 = 0.5;

impl App {
    pub fn render(&self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

        frame.render_widget(
            Paragraph::new(TITLE).style(Style::default().add_modifier(Modifier::BOLD)),
            layout[0],
        );

        let area = frame.area();
        for button in &self.buttons {
            if let Some(rect) = element_rect(&self.doc, button.element, area) {
                self.render_button(frame, button.element, &button.label, rect);
            }
        }

        // Tips float over everything else
        for (_, tip) in self.visible_tips() {
            if let Some(rect) = tip_rect(&self.doc, tip, area) {
                self.render_tip(frame, tip, rect);
            }
        }

        frame.render_widget(
            Paragraph::new(self.status.as_str()).style(Style::default().fg(Color::DarkGray)),
            layout[2],
        );
    }

    fn render_button(&self, frame: &mut Frame, element: ElementId, label: &str, rect: Rect) {
        let style = if self.hovered == Some(element) {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };

        let button = Paragraph::new(label)
            .centered()
            .style(style)
            .block(Block::default().borders(Borders::ALL).border_style(style));
        frame.render_widget(button, rect);
    }

    fn render_tip(&self, frame: &mut Frame, tip: ElementId, rect: Rect) {
        popup::clear_area(frame, rect);

        let opacity = self
            .doc
            .style(tip, "opacity")
            .and_then(|value| value.parse::<f64>().ok())
            .unwrap_or(1.0);
        let style = if opacity < DIM_BELOW_OPACITY {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let lines: Vec<Line> = self.doc.text_lines(tip).into_iter().map(Line::from).collect();
        let body = Paragraph::new(Text::from(lines)).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(style),
        );
        frame.render_widget(body, rect);
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
