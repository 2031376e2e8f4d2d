// Project section rendering.
// Draws skeleton placeholders, project cards, or the error panel.

use chrono::{DateTime, Utc};
use ratatui::{prelude::*, widgets::*};

use crate::projects::{DisplayProject, ProjectStatus};
use crate::state::{ProjectList, ProjectsView};

/// Bar drawn in place of a card title while loading.
pub const SKELETON_TITLE: &str = "▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓▓";
const SKELETON_BODY: &str = "░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░░";

/// Format a timestamp as relative time (e.g., "2h ago").
pub fn format_relative_time(dt: &DateTime<Utc>) -> String {
    let now = Utc::now();
    let duration = now.signed_duration_since(*dt);

    if duration.num_days() > 0 {
        format!("{}d ago", duration.num_days())
    } else if duration.num_hours() > 0 {
        format!("{}h ago", duration.num_hours())
    } else if duration.num_minutes() > 0 {
        format!("{}m ago", duration.num_minutes())
    } else {
        "just now".to_string()
    }
}

fn status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Active => Color::Green,
        ProjectStatus::Maintained => Color::Blue,
        ProjectStatus::Archived => Color::Gray,
    }
}

/// Lines making up one project card.
pub fn card_lines(project: &DisplayProject) -> Vec<Line<'_>> {
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                &project.name,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(
                format!("[{}]", project.status.label().to_uppercase()),
                Style::default().fg(status_color(project.status)),
            ),
        ]),
        Line::from(Span::raw(&project.description)),
    ];

    if !project.technologies.is_empty() {
        let mut tags = Vec::with_capacity(project.technologies.len() * 2);
        for tech in &project.technologies {
            tags.push(Span::styled(
                format!(" {} ", tech),
                Style::default().fg(Color::Black).bg(Color::Gray),
            ));
            tags.push(Span::raw(" "));
        }
        lines.push(Line::from(tags));
    }

    let mut stats = vec![Span::styled(
        format!(
            "⭐ {}  🍴 {}  📝 {}",
            project.stars, project.forks, project.language
        ),
        Style::default().fg(Color::DarkGray),
    )];
    if let Some(updated) = &project.updated {
        stats.push(Span::styled(
            format!("  updated {}", format_relative_time(updated)),
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines.push(Line::from(stats));

    let mut links = Vec::new();
    if let Some(github) = &project.github {
        links.push(Span::styled("Code ", Style::default().fg(Color::Yellow)));
        links.push(Span::raw(github.as_str()));
    }
    if let Some(demo) = &project.demo {
        if !links.is_empty() {
            links.push(Span::raw("   "));
        }
        links.push(Span::styled("Demo ", Style::default().fg(Color::Yellow)));
        links.push(Span::raw(demo.as_str()));
    }
    if !links.is_empty() {
        lines.push(Line::from(links));
    }

    lines.push(Line::from(""));
    lines
}

fn skeleton_item() -> ListItem<'static> {
    let style = Style::default().fg(Color::DarkGray);
    ListItem::new(vec![
        Line::styled(SKELETON_TITLE, style),
        Line::styled(SKELETON_BODY, style),
        Line::styled(SKELETON_BODY, style),
        Line::from(""),
    ])
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray))
        .block(Block::default().borders(Borders::ALL).title(" Projects "));
    frame.render_widget(text, area);
}

/// Render the error panel with its retry control.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(vec![
        Line::from(""),
        Line::styled(
            "Failed to load projects",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
        Line::styled(format!("❌ {}", error), Style::default().fg(Color::Red)),
        Line::from(""),
        Line::from(vec![
            Span::styled("[r]", Style::default().fg(Color::Yellow)),
            Span::raw(" Retry"),
        ]),
    ])
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::ALL).title(" Projects "));
    frame.render_widget(text, area);
}

/// Render the project section for the presenter's current state.
pub fn render_projects(frame: &mut Frame, list: &mut ProjectList, area: Rect) {
    let (view, list_state) = list.view_with_selection();
    match view {
        ProjectsView::Skeleton { placeholders } => {
            let items: Vec<ListItem> = (0..placeholders).map(|_| skeleton_item()).collect();
            let list_widget = List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" ⏳ Loading projects... "),
            );
            frame.render_widget(list_widget, area);
        }
        ProjectsView::ErrorPanel { message } => render_error(frame, area, message),
        ProjectsView::Cards(projects) if projects.is_empty() => {
            render_empty(frame, area, "No projects to show");
        }
        ProjectsView::Cards(projects) => {
            let items: Vec<ListItem> = projects
                .iter()
                .map(|project| ListItem::new(card_lines(project)))
                .collect();
            let title = format!(" Featured Projects ({}) ", projects.len());

            let list_widget = List::new(items)
                .block(Block::default().borders(Borders::ALL).title(title))
                .highlight_style(Style::default().bg(Color::DarkGray))
                .highlight_symbol("> ");

            frame.render_stateful_widget(list_widget, area, list_state);
        }
    }
}
