//! Render-ready snapshots of a mounted page
//!
//! A [`PageSnapshot`] is what a renderer needs to draw one frame: resolved
//! colors, reveal states and the typed prefix. Snapshots serialize to JSON
//! for the CLI and render to plain text with [`render_text`].

use folio_theme::ColorScheme;
use serde::Serialize;
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PageSnapshot {
    pub path: &'static str,
    pub scheme: ColorScheme,
    pub now_ms: u64,
    pub scroll_y: f32,
    pub background: String,
    pub body: PageView,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "page", rename_all = "lowercase")]
pub enum PageView {
    Home(HeroView),
    About(AboutView),
    Projects(ProjectsView),
    Contact(ContactView),
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HeroView {
    pub text: String,
    pub revealed: usize,
    pub len: usize,
    pub complete: bool,
    pub caret: bool,
    pub color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct AboutView {
    pub entries: Vec<TimelineEntryView>,
    pub skills: Vec<SkillView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimelineEntryView {
    pub title: &'static str,
    pub company: &'static str,
    pub date: &'static str,
    pub side: &'static str,
    pub shown: bool,
    pub opacity: f32,
    pub title_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SkillView {
    pub name: &'static str,
    pub fill_percent: u8,
    pub fill_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectsView {
    pub categories: Vec<&'static str>,
    pub selected: &'static str,
    pub cards: Vec<ProjectCardView>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectCardView {
    pub id: u32,
    pub title: &'static str,
    pub category: &'static str,
    pub technologies: &'static [&'static str],
    pub github_url: Option<&'static str>,
    pub shown: bool,
    pub offset_y: f32,
    pub background: String,
    pub title_color: String,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContactView {
    pub email: String,
    pub copied: bool,
    pub button_label: &'static str,
    pub button_color: String,
}

impl ContactView {
    pub fn label(copied: bool) -> &'static str {
        if copied {
            "Copied!"
        } else {
            "Copy"
        }
    }
}

fn mark(shown: bool) -> char {
    if shown {
        '*'
    } else {
        '.'
    }
}

/// Plain-text rendering for terminals
pub fn render_text(snapshot: &PageSnapshot) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "[{} ms] {} ({}, scroll {:.0})",
        snapshot.now_ms, snapshot.path, snapshot.scheme, snapshot.scroll_y
    );

    match &snapshot.body {
        PageView::Home(hero) => {
            let caret = if hero.caret { "|" } else { " " };
            let _ = writeln!(out, "  {}{}", hero.text, caret);
            let _ = writeln!(out, "  {}/{}", hero.revealed, hero.len);
        }
        PageView::About(about) => {
            for entry in &about.entries {
                let _ = writeln!(
                    out,
                    "  {} {:<5} {} @ {} ({})",
                    mark(entry.shown),
                    entry.side,
                    entry.title,
                    entry.company,
                    entry.date
                );
            }
            for skill in &about.skills {
                let filled = usize::from(skill.fill_percent) / 5;
                let _ = writeln!(
                    out,
                    "  {:<12} [{:<20}] {:>3}%",
                    skill.name,
                    "#".repeat(filled),
                    skill.fill_percent
                );
            }
        }
        PageView::Projects(projects) => {
            let filters: Vec<String> = projects
                .categories
                .iter()
                .map(|c| {
                    if *c == projects.selected {
                        format!("[{c}]")
                    } else {
                        (*c).to_string()
                    }
                })
                .collect();
            let _ = writeln!(out, "  {}", filters.join(" "));
            for card in &projects.cards {
                let _ = writeln!(out, "  {} {} <{}>", mark(card.shown), card.title, card.category);
            }
        }
        PageView::Contact(contact) => {
            let _ = writeln!(out, "  {} [{}]", contact.email, contact.button_label);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(body: PageView) -> PageSnapshot {
        PageSnapshot {
            path: "/",
            scheme: ColorScheme::Dark,
            now_ms: 300,
            scroll_y: 0.0,
            background: "#111827".to_string(),
            body,
        }
    }

    #[test]
    fn test_hero_text() {
        let text = render_text(&snapshot(PageView::Home(HeroView {
            text: "He".to_string(),
            revealed: 2,
            len: 5,
            complete: false,
            caret: true,
            color: "#ffffff".to_string(),
        })));
        assert!(text.contains("He|"));
        assert!(text.contains("2/5"));
    }

    #[test]
    fn test_json_is_tagged_by_page() {
        let json = serde_json::to_value(snapshot(PageView::Contact(ContactView {
            email: "a@b.c".to_string(),
            copied: true,
            button_label: ContactView::label(true),
            button_color: "#2dd4bf".to_string(),
        })))
        .unwrap();
        assert_eq!(json["body"]["page"], "contact");
        assert_eq!(json["body"]["button_label"], "Copied!");
        assert_eq!(json["scheme"], "dark");
    }
}
