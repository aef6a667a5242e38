use ratatui::prelude::*;
use ratatui::widgets::{Cell, Row};

use crate::constants::NO_RESPONSE;
use crate::messages::ResponseView;
use crate::models::HttpMethod;
use crate::render::{ContentKind, RenderModel};

/// Header table rows, with the synthetic "Response Code" row first
pub fn header_table(model: &RenderModel) -> Vec<(String, String)> {
    let mut rows = Vec::with_capacity(model.header_rows.len() + 1);
    rows.push((String::from("Response Code"), model.status_line.clone()));
    rows.extend(model.header_rows.iter().cloned());
    rows
}

/// Lines for the scrollable response area
pub fn response_lines(view: &ResponseView) -> Vec<Line<'static>> {
    match view {
        ResponseView::Empty => vec![Line::from(Span::styled(
            NO_RESPONSE,
            Style::default().fg(Color::DarkGray),
        ))],
        ResponseView::Cancelled => vec![Line::from(Span::styled(
            "Request cancelled",
            Style::default().fg(Color::Yellow),
        ))],
        ResponseView::Failed { message, time_ms } => vec![
            Line::from(Span::styled(
                format!("Error: {}", message),
                Style::default().fg(Color::Red).bold(),
            )),
            Line::raw(""),
            statistics_line(*time_ms),
        ],
        ResponseView::Rendered { model, time_ms } => rendered_lines(model, *time_ms),
    }
}

fn rendered_lines(model: &RenderModel, time_ms: u64) -> Vec<Line<'static>> {
    let heading = Style::default().fg(Color::Cyan).bold();
    let mut lines = vec![Line::from(Span::styled("Headers", heading))];

    let rows = header_table(model);
    let width = rows
        .iter()
        .map(|(name, _)| name.chars().count())
        .max()
        .unwrap_or(0)
        .max("Header".len());

    lines.push(Line::from(Span::styled(
        format!("{:width$} │ Value", "Header"),
        Style::default().bold(),
    )));
    lines.push(Line::raw(format!("{}─┼─{}", "─".repeat(width), "─".repeat(24))));

    for (i, (name, value)) in rows.into_iter().enumerate() {
        let value_style = if i == 0 {
            model
                .status_line
                .parse::<u16>()
                .map(|code| Style::default().fg(status_color(code)).bold())
                .unwrap_or_default()
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:width$}", name), Style::default().fg(Color::Gray)),
            Span::raw(" │ "),
            Span::styled(value, value_style),
        ]));
    }

    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        format!("Body ({})", model.kind.as_str()),
        heading,
    )));
    if let Some(note) = &model.note {
        lines.push(Line::from(Span::styled(
            format!("! {}", note),
            Style::default().fg(Color::Yellow),
        )));
    }

    let fence = Style::default().fg(Color::DarkGray);
    lines.push(Line::from(Span::styled("```", fence)));
    if model.kind == ContentKind::Json && model.note.is_none() {
        lines.extend(highlight_json(&model.body_block));
    } else {
        lines.extend(model.body_block.lines().map(|l| Line::raw(l.to_string())));
    }
    lines.push(Line::from(Span::styled("```", fence)));

    lines.push(Line::raw(""));
    lines.push(statistics_line(time_ms));
    lines
}

fn statistics_line(time_ms: u64) -> Line<'static> {
    Line::from(vec![
        Span::styled("Statistics ", Style::default().fg(Color::Cyan).bold()),
        Span::raw(format!("{}ms", time_ms)),
    ])
}

/// Simple JSON syntax highlighting, line by line
pub fn highlight_json(text: &str) -> Vec<Line<'static>> {
    text.lines().map(highlight_json_line).collect()
}

fn highlight_json_line(line: &str) -> Line<'static> {
    let chars: Vec<char> = line.chars().collect();
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        match c {
            '"' => {
                flush(&mut plain, &mut spans);
                let start = i;
                i += 1;
                while i < chars.len() && chars[i] != '"' {
                    if chars[i] == '\\' {
                        i += 1;
                    }
                    i += 1;
                }
                i = (i + 1).min(chars.len());
                let token: String = chars[start..i].iter().collect();
                let is_key = chars[i..].iter().find(|c| !c.is_whitespace()) == Some(&':');
                let color = if is_key { Color::Cyan } else { Color::Green };
                spans.push(Span::styled(token, Style::default().fg(color)));
                continue;
            }
            '{' | '}' | '[' | ']' => {
                flush(&mut plain, &mut spans);
                spans.push(Span::styled(c.to_string(), Style::default().fg(Color::Yellow)));
            }
            '-' | '0'..='9' => {
                flush(&mut plain, &mut spans);
                let start = i;
                while i < chars.len()
                    && matches!(chars[i], '-' | '+' | '.' | 'e' | 'E' | '0'..='9')
                {
                    i += 1;
                }
                let token: String = chars[start..i].iter().collect();
                spans.push(Span::styled(token, Style::default().fg(Color::Yellow)));
                continue;
            }
            't' | 'f' | 'n' => {
                let rest: String = chars[i..].iter().take(5).collect();
                if let Some(word) = ["true", "false", "null"]
                    .into_iter()
                    .find(|w| rest.starts_with(w))
                {
                    flush(&mut plain, &mut spans);
                    spans.push(Span::styled(word, Style::default().fg(Color::Magenta)));
                    i += word.len();
                    continue;
                }
                plain.push(c);
            }
            _ => plain.push(c),
        }
        i += 1;
    }

    flush(&mut plain, &mut spans);
    Line::from(spans)
}

fn flush(plain: &mut String, spans: &mut Vec<Span<'static>>) {
    if !plain.is_empty() {
        spans.push(Span::raw(std::mem::take(plain)));
    }
}

/// Status code color
/// Key bindings listed in the help popup, grouped by section (empty key starts a section)
pub const KEY_HELP: &[(&str, &str)] = &[
    ("", "Navigation"),
    ("Tab / Shift+Tab", "Switch panels"),
    ("↑ / ↓", "Scroll response"),
    ("", "Request"),
    ("m", "Cycle HTTP method"),
    ("e / Enter", "Edit URL or body"),
    ("s", "Send request"),
    ("Ctrl+X", "Cancel request"),
    ("w", "Save (not implemented)"),
    ("", "General"),
    ("?", "Toggle this help"),
    ("q / Ctrl+C", "Quit"),
];

pub fn help_rows() -> Vec<Row<'static>> {
    KEY_HELP
        .iter()
        .map(|&(key, action)| {
            if key.is_empty() {
                Row::new(vec![Cell::from(action.to_uppercase()).bold()])
            } else {
                Row::new(vec![
                    Cell::from(key).fg(Color::Cyan),
                    Cell::from(action),
                ])
            }
        })
        .collect()
}

pub fn status_color(code: u16) -> Color {
    match code {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Red,
        500..=599 => Color::Magenta,
        _ => Color::Yellow,
    }
}

/// Method color
pub fn method_color(method: HttpMethod) -> Color {
    match method {
        HttpMethod::GET => Color::Green,
        HttpMethod::POST => Color::Yellow,
        HttpMethod::PUT => Color::Blue,
        HttpMethod::DELETE => Color::Red,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn model() -> RenderModel {
        RenderModel {
            status_line: "404".into(),
            header_rows: vec![
                ("content-type".into(), "text/plain".into()),
                ("x-custom".into(), "1".into()),
            ],
            body_block: "line one\nline two".into(),
            kind: ContentKind::Other,
            note: None,
        }
    }

    #[test]
    fn test_header_table_starts_with_response_code() {
        let rows = header_table(&model());
        assert_eq!(rows[0], ("Response Code".to_string(), "404".to_string()));
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].0, "x-custom");
    }

    #[test]
    fn test_rendered_lines_layout() {
        let view = ResponseView::Rendered {
            model: model(),
            time_ms: 12,
        };
        let lines: Vec<String> = response_lines(&view).iter().map(text).collect();

        let fences: Vec<usize> = lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.as_str() == "```")
            .map(|(i, _)| i)
            .collect();
        assert_eq!(fences.len(), 2);
        assert_eq!(lines[fences[0] + 1], "line one");
        assert_eq!(lines[fences[0] + 2], "line two");
        assert!(lines.iter().any(|l| l.starts_with("Response Code │ 404")));
        assert_eq!(lines.last().unwrap(), "Statistics 12ms");
    }

    #[test]
    fn test_note_shown_for_fallback() {
        let mut m = model();
        m.kind = ContentKind::Json;
        m.note = Some("Body is not valid JSON".into());
        let view = ResponseView::Rendered { model: m, time_ms: 0 };
        let lines: Vec<String> = response_lines(&view).iter().map(text).collect();
        assert!(lines.contains(&"! Body is not valid JSON".to_string()));
        assert!(lines.contains(&"line one".to_string()));
    }

    #[test]
    fn test_highlight_preserves_text() {
        let src = "{\n  \"a\\\"b\": [1, -2.5e3, true, null],\n  \"s\": \"x: y\"\n}";
        let rendered: Vec<String> = highlight_json(src).iter().map(text).collect();
        assert_eq!(rendered.join("\n"), src);
    }

    #[test]
    fn test_highlight_colors_keys_and_values() {
        let line = highlight_json_line("  \"key\": \"value\",");
        let key = line.spans.iter().find(|s| s.content == "\"key\"").unwrap();
        let value = line.spans.iter().find(|s| s.content == "\"value\"").unwrap();
        assert_eq!(key.style.fg, Some(Color::Cyan));
        assert_eq!(value.style.fg, Some(Color::Green));
    }

    #[test]
    fn test_help_lists_every_action_key() {
        let keys: Vec<&str> = KEY_HELP.iter().map(|&(k, _)| k).collect();
        for key in ["m", "s", "Ctrl+X", "w", "?", "q / Ctrl+C"] {
            assert!(keys.contains(&key), "missing {key}");
        }
        assert_eq!(help_rows().len(), KEY_HELP.len());
    }
}
