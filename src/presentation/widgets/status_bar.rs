use ratatui::{prelude::*, widgets::Paragraph};

/// Bottom line of the console: the current page and key hints, or the last
/// error when there is one.
pub struct StatusBarWidget<'a> {
    page: &'a str,
    hints: &'a str,
    message: Option<&'a str>,
}

impl<'a> StatusBarWidget<'a> {
    pub fn new(page: &'a str, hints: &'a str, message: Option<&'a str>) -> Self {
        Self {
            page,
            hints,
            message,
        }
    }
}

impl Widget for StatusBarWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let line = match self.message {
            Some(message) => Line::from(Span::styled(
                message.to_string(),
                Style::default().fg(Color::Red),
            )),
            None => {
                let mut spans = vec![Span::styled(
                    self.page.to_string(),
                    Style::default().fg(Color::Gray).italic(),
                )];
                if !self.hints.is_empty() {
                    spans.push(Span::raw(format!(" · {}", self.hints)));
                }
                Line::from(spans)
            }
        };
        Paragraph::new(line)
            .style(Style::default().bg(Color::Black))
            .render(area, buf);
    }
}
