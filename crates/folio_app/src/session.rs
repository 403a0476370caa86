//! Page session
//!
//! A [`Session`] is the single-threaded event loop of one open tab. It owns
//! the clock, every pending timer, every visibility trigger and the theme
//! store, and mounts one page at a time.
//!
//! Inputs arrive as method calls (`navigate`, `advance`, `scroll_to`,
//! `toggle_theme`, ...) and each returns the [`SessionEvent`]s it caused.
//! Unmounting a page releases every trigger it attached and cancels every
//! timer it armed, so navigation never leaks work into the next page.

use crate::config::FolioConfig;
use crate::content::{self, ALL_CATEGORIES, COPY_RESET_MS, SKILLS, TIMELINE};
use crate::routes::{Page, Route};
use crate::view::{
    AboutView, ContactView, HeroView, PageSnapshot, PageView, ProjectCardView, ProjectsView,
    SkillView, TimelineEntryView,
};
use folio_animation::{Caret, TypingFrame, TypingId, TypingScheduler};
use folio_core::{ConfigError, Rect, TimerId, TimerQueue};
use folio_layout::headless::EntryBatch;
use folio_layout::{
    project_card_style, timeline_entry_style, ElementId, HeadlessViewport, RevealList, SkillMeter,
    TriggerId, VisibilityRegistry,
};
use folio_theme::{ColorScheme, Subscription, ThemeStore};
use indexmap::IndexMap;
use smallvec::SmallVec;
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;
use thiserror::Error;

/// Height of the page header above the first list item
const PAGE_HEADER: f32 = 640.0;
const ITEM_GAP: f32 = 32.0;
const SECTION_GAP: f32 = 96.0;
const TIMELINE_ENTRY_HEIGHT: f32 = 280.0;
const SKILL_HEIGHT: f32 = 48.0;
const CARD_HEIGHT: f32 = 420.0;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("{0} is not a page")]
    NotAPage(Route),
    #[error("no page is mounted")]
    NoPage,
    #[error("action needs {expected}, but {current} is mounted")]
    WrongPage { expected: Page, current: Page },
    #[error("unknown project category `{0}`")]
    UnknownCategory(String),
}

/// Item whose visibility trigger fired
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RevealedItem {
    TimelineEntry(usize),
    Skill(&'static str),
    ProjectCard(u32),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// The hero heading advanced
    Typed(TypingFrame),
    Revealed(RevealedItem),
    /// The contact page's "Copied!" indicator reverted
    CopyReset,
}

impl fmt::Display for SessionEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionEvent::Typed(frame) if frame.complete => write!(f, "typing complete"),
            SessionEvent::Typed(frame) => write!(f, "typed {}/{}", frame.revealed, frame.len),
            SessionEvent::Revealed(RevealedItem::TimelineEntry(index)) => {
                write!(f, "revealed timeline entry {index}")
            }
            SessionEvent::Revealed(RevealedItem::Skill(name)) => write!(f, "revealed skill {name}"),
            SessionEvent::Revealed(RevealedItem::ProjectCard(id)) => {
                write!(f, "revealed project {id}")
            }
            SessionEvent::CopyReset => write!(f, "copy indicator reset"),
        }
    }
}

pub type Events = SmallVec<[SessionEvent; 4]>;

struct HomePage {
    typing: TypingId,
    mounted_at: u64,
}

struct AboutPage {
    timeline: RevealList<usize>,
    skills: RevealList<&'static str>,
    meters: Vec<SkillMeter>,
    elements: Vec<ElementId>,
}

struct ProjectsPage {
    selected: &'static str,
    cards: RevealList<u32>,
    elements: IndexMap<u32, ElementId>,
}

#[derive(Default)]
struct ContactPage {
    copied: bool,
    reset: Option<TimerId>,
}

enum MountedPage {
    Home(HomePage),
    About(AboutPage),
    Projects(ProjectsPage),
    Contact(ContactPage),
}

impl MountedPage {
    fn kind(&self) -> Page {
        match self {
            MountedPage::Home(_) => Page::Home,
            MountedPage::About(_) => Page::About,
            MountedPage::Projects(_) => Page::Projects,
            MountedPage::Contact(_) => Page::Contact,
        }
    }
}

fn mismatch(expected: Page, mounted: &Option<MountedPage>) -> SessionError {
    match mounted {
        Some(page) => SessionError::WrongPage {
            expected,
            current: page.kind(),
        },
        None => SessionError::NoPage,
    }
}

/// Rect of the `index`th item in a vertical stack starting at `top`
fn stacked(top: f32, index: usize, height: f32, width: f32) -> Rect {
    Rect::new(0.0, top + index as f32 * (height + ITEM_GAP), width, height)
}

fn stack_bottom(top: f32, count: usize, height: f32) -> f32 {
    top + count as f32 * (height + ITEM_GAP)
}

/// One open tab
pub struct Session {
    config: FolioConfig,
    timers: TimerQueue,
    typing: TypingScheduler,
    registry: VisibilityRegistry<HeadlessViewport>,
    theme: ThemeStore,
    restyles: Rc<Cell<u32>>,
    theme_subscription: Option<Subscription>,
    caret: Caret,
    page: Option<MountedPage>,
    clipboard: Option<String>,
}

impl Session {
    /// Create a session with nothing mounted
    ///
    /// Fails if the configuration holds an invalid threshold or cadence.
    pub fn new(config: FolioConfig) -> Result<Self, SessionError> {
        config.validate()?;

        let viewport = HeadlessViewport::new(config.viewport.width, config.viewport.height);
        let theme = ThemeStore::new(config.theme.initial);

        let restyles = Rc::new(Cell::new(0));
        let counter = Rc::clone(&restyles);
        let subscription = theme.subscribe(move |scheme| {
            counter.set(counter.get() + 1);
            tracing::debug!(%scheme, "restyling page");
        });

        Ok(Self {
            config,
            timers: TimerQueue::new(),
            typing: TypingScheduler::new(),
            registry: VisibilityRegistry::new(viewport),
            theme,
            restyles,
            theme_subscription: Some(subscription),
            caret: Caret::default(),
            page: None,
            clipboard: None,
        })
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Unmount the current page and mount the one at `route`
    ///
    /// Items already in view reveal immediately; their events are returned.
    pub fn navigate(&mut self, route: Route) -> Result<Events, SessionError> {
        let Some(page) = route.page() else {
            return Err(SessionError::NotAPage(route));
        };

        self.unmount();
        self.registry.host_mut().scroll_to(0.0);

        let mounted = match page {
            Page::Home => MountedPage::Home(self.mount_home()?),
            Page::About => MountedPage::About(self.mount_about()?),
            Page::Projects => MountedPage::Projects(self.mount_projects()?),
            Page::Contact => MountedPage::Contact(ContactPage::default()),
        };
        self.page = Some(mounted);
        tracing::debug!(%page, "page mounted");

        Ok(self.flush_viewport())
    }

    fn mount_home(&mut self) -> Result<HomePage, SessionError> {
        let typing = self.typing.start(
            &mut self.timers,
            self.config.site.hero_text.clone(),
            self.config.site.hero_cadence_ms,
        )?;
        Ok(HomePage {
            typing,
            mounted_at: self.timers.now(),
        })
    }

    fn mount_about(&mut self) -> Result<AboutPage, SessionError> {
        let threshold = self.config.site.reveal_threshold;
        let width = self.config.viewport.width;
        let mut page = AboutPage {
            timeline: RevealList::new(threshold)?,
            skills: RevealList::new(threshold)?,
            meters: SKILLS
                .iter()
                .map(|skill| SkillMeter::new(skill.percent))
                .collect::<Result<_, _>>()?,
            elements: Vec::with_capacity(TIMELINE.len() + SKILLS.len()),
        };

        for index in 0..TIMELINE.len() {
            let rect = stacked(PAGE_HEADER, index, TIMELINE_ENTRY_HEIGHT, width);
            let element = self.registry.host_mut().insert_element(rect);
            page.timeline.mount(&mut self.registry, index, element);
            page.elements.push(element);
        }

        let skills_top =
            stack_bottom(PAGE_HEADER, TIMELINE.len(), TIMELINE_ENTRY_HEIGHT) + SECTION_GAP;
        for (index, skill) in SKILLS.iter().enumerate() {
            let rect = stacked(skills_top, index, SKILL_HEIGHT, width);
            let element = self.registry.host_mut().insert_element(rect);
            page.skills.mount(&mut self.registry, skill.name, element);
            page.elements.push(element);
        }
        Ok(page)
    }

    fn mount_projects(&mut self) -> Result<ProjectsPage, SessionError> {
        let mut page = ProjectsPage {
            selected: ALL_CATEGORIES,
            cards: RevealList::new(self.config.site.reveal_threshold)?,
            elements: IndexMap::new(),
        };
        layout_projects(&mut self.registry, &mut page, self.config.viewport.width);
        Ok(page)
    }

    /// Tear down the mounted page, releasing its triggers and timers
    fn unmount(&mut self) {
        let Some(page) = self.page.take() else {
            return;
        };
        let kind = page.kind();

        match page {
            MountedPage::Home(home) => {
                self.typing.cancel(&mut self.timers, home.typing);
            }
            MountedPage::About(mut about) => {
                about.timeline.unmount_all(&mut self.registry);
                about.skills.unmount_all(&mut self.registry);
                for element in about.elements {
                    self.registry.host_mut().detach_element(element);
                }
            }
            MountedPage::Projects(mut projects) => {
                projects.cards.unmount_all(&mut self.registry);
                for (_, element) in projects.elements {
                    self.registry.host_mut().detach_element(element);
                }
            }
            MountedPage::Contact(contact) => {
                if let Some(timer) = contact.reset {
                    self.timers.cancel(timer);
                }
            }
        }

        tracing::debug!(
            page = %kind,
            observations = self.live_observations(),
            timers = self.pending_timers(),
            "page unmounted"
        );
    }

    /// Unmount everything and stop listening to the theme store
    pub fn shutdown(&mut self) {
        self.unmount();
        if let Some(mut subscription) = self.theme_subscription.take() {
            subscription.unsubscribe();
        }
        tracing::debug!(
            observations = self.live_observations(),
            timers = self.pending_timers(),
            "session shut down"
        );
    }

    // =========================================================================
    // Input
    // =========================================================================

    /// Let `ms` milliseconds pass, firing every timer that falls due
    pub fn advance(&mut self, ms: u64) -> Events {
        let until = self.timers.now().saturating_add(ms);
        let mut events = Events::new();
        while let Some(timer) = self.timers.pop_due(until) {
            if let Some(event) = self.on_timer(timer) {
                events.push(event);
            }
        }
        self.timers.settle(until);
        events
    }

    fn on_timer(&mut self, timer: TimerId) -> Option<SessionEvent> {
        if let Some((_, frame)) = self.typing.on_timer(&mut self.timers, timer) {
            return Some(SessionEvent::Typed(frame));
        }
        if let Some(MountedPage::Contact(contact)) = &mut self.page {
            if contact.reset == Some(timer) {
                contact.reset = None;
                contact.copied = false;
                return Some(SessionEvent::CopyReset);
            }
        }
        tracing::warn!(?timer, "timer fired without an owner");
        None
    }

    pub fn scroll_to(&mut self, y: f32) -> Events {
        let entries = self.registry.host_mut().scroll_to(y);
        self.deliver(entries)
    }

    pub fn scroll_by(&mut self, dy: f32) -> Events {
        let entries = self.registry.host_mut().scroll_by(dy);
        self.deliver(entries)
    }

    pub fn resize(&mut self, width: f32, height: f32) -> Events {
        let entries = self.registry.host_mut().resize(width, height);
        self.deliver(entries)
    }

    /// Flip the theme; subscribers are notified before this returns
    pub fn toggle_theme(&mut self) -> ColorScheme {
        self.theme.toggle();
        self.theme.current()
    }

    /// Copy the e-mail address and show "Copied!" for a while
    ///
    /// Copying again restarts the indicator's timeout.
    pub fn copy_email(&mut self) -> Result<(), SessionError> {
        let contact = match &mut self.page {
            Some(MountedPage::Contact(contact)) => contact,
            other => return Err(mismatch(Page::Contact, other)),
        };
        if let Some(previous) = contact.reset.take() {
            self.timers.cancel(previous);
        }
        contact.copied = true;
        contact.reset = Some(self.timers.set_timeout(COPY_RESET_MS));
        self.clipboard = Some(self.config.site.email.clone());
        tracing::debug!("e-mail copied");
        Ok(())
    }

    /// Filter the project list
    ///
    /// Cards that stay in the list keep their trigger and reveal state.
    pub fn select_category(&mut self, name: &str) -> Result<Events, SessionError> {
        let category = content::categories()
            .into_iter()
            .find(|c| *c == name)
            .ok_or_else(|| SessionError::UnknownCategory(name.to_string()))?;

        let width = self.config.viewport.width;
        match &mut self.page {
            Some(MountedPage::Projects(projects)) => {
                projects.selected = category;
                layout_projects(&mut self.registry, projects, width);
            }
            other => return Err(mismatch(Page::Projects, other)),
        }
        tracing::debug!(category, "project filter changed");
        Ok(self.flush_viewport())
    }

    fn flush_viewport(&mut self) -> Events {
        let entries = self.registry.host_mut().flush();
        self.deliver(entries)
    }

    fn deliver(&mut self, entries: EntryBatch) -> Events {
        let revealed = self.registry.deliver_all(entries);
        revealed
            .into_iter()
            .filter_map(|trigger| self.item_for(trigger))
            .map(SessionEvent::Revealed)
            .collect()
    }

    fn item_for(&self, trigger: TriggerId) -> Option<RevealedItem> {
        match self.page.as_ref()? {
            MountedPage::About(about) => about
                .timeline
                .key_for(trigger)
                .map(|index| RevealedItem::TimelineEntry(*index))
                .or_else(|| {
                    about
                        .skills
                        .key_for(trigger)
                        .map(|name| RevealedItem::Skill(*name))
                }),
            MountedPage::Projects(projects) => projects
                .cards
                .key_for(trigger)
                .map(|id| RevealedItem::ProjectCard(*id)),
            _ => None,
        }
    }

    // =========================================================================
    // Queries
    // =========================================================================

    pub fn now(&self) -> u64 {
        self.timers.now()
    }

    /// Absolute time of the next pending timer
    pub fn next_deadline(&self) -> Option<u64> {
        self.timers.next_deadline()
    }

    pub fn page(&self) -> Option<Page> {
        self.page.as_ref().map(MountedPage::kind)
    }

    pub fn theme(&self) -> ColorScheme {
        self.theme.current()
    }

    /// Store shared with anything else that styles itself
    pub fn theme_store(&self) -> &ThemeStore {
        &self.theme
    }

    /// Number of theme notifications this session has handled
    pub fn restyle_count(&self) -> u32 {
        self.restyles.get()
    }

    pub fn clipboard(&self) -> Option<&str> {
        self.clipboard.as_deref()
    }

    pub fn live_observations(&self) -> usize {
        self.registry.host().observation_count()
    }

    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    pub fn scroll_offset(&self) -> f32 {
        self.registry.host().scroll_offset()
    }

    /// Render-ready view of the mounted page
    pub fn snapshot(&self) -> Option<PageSnapshot> {
        let page = self.page.as_ref()?;
        let palette = self.theme.palette();

        let body = match page {
            MountedPage::Home(home) => {
                let state = self.typing.state(home.typing)?;
                let frame = state.frame();
                let elapsed = self.timers.now().saturating_sub(home.mounted_at);
                PageView::Home(HeroView {
                    text: state.visible().to_string(),
                    revealed: frame.revealed,
                    len: frame.len,
                    complete: frame.complete,
                    caret: self.caret.visible_at(elapsed),
                    color: palette.heading.to_hex(),
                })
            }
            MountedPage::About(about) => {
                let entries = TIMELINE
                    .iter()
                    .enumerate()
                    .map(|(index, item)| {
                        let revealed = about.timeline.is_revealed(&self.registry, &index);
                        let style = timeline_entry_style(index, revealed, &palette);
                        TimelineEntryView {
                            title: item.title,
                            company: item.company,
                            date: item.date,
                            side: style.side.as_str(),
                            shown: style.reveal.is_shown(),
                            opacity: style.reveal.opacity(),
                            title_color: style.title.to_hex(),
                        }
                    })
                    .collect();
                let skills = SKILLS
                    .iter()
                    .zip(&about.meters)
                    .map(|(skill, meter)| {
                        let revealed = about.skills.is_revealed(&self.registry, &skill.name);
                        let style = meter.style(revealed, &palette);
                        SkillView {
                            name: skill.name,
                            fill_percent: style.fill_percent,
                            fill_color: style.fill.to_hex(),
                        }
                    })
                    .collect();
                PageView::About(AboutView { entries, skills })
            }
            MountedPage::Projects(projects) => {
                let cards = content::filter_projects(projects.selected)
                    .map(|project| {
                        let revealed = projects.cards.is_revealed(&self.registry, &project.id);
                        let style = project_card_style(revealed, &palette);
                        ProjectCardView {
                            id: project.id,
                            title: project.title,
                            category: project.category,
                            technologies: project.technologies,
                            github_url: project.github_url,
                            shown: style.reveal.is_shown(),
                            offset_y: style.offset_y,
                            background: style.background.to_hex(),
                            title_color: style.title.to_hex(),
                        }
                    })
                    .collect();
                PageView::Projects(ProjectsView {
                    categories: content::categories(),
                    selected: projects.selected,
                    cards,
                })
            }
            MountedPage::Contact(contact) => PageView::Contact(ContactView {
                email: self.config.site.email.clone(),
                copied: contact.copied,
                button_label: ContactView::label(contact.copied),
                button_color: palette.accent.to_hex(),
            }),
        };

        Some(PageSnapshot {
            path: page.kind().route().path(),
            scheme: self.theme.current(),
            now_ms: self.timers.now(),
            scroll_y: self.scroll_offset(),
            background: palette.page_background.to_hex(),
            body,
        })
    }
}

/// Bring the mounted cards in line with the selected category
///
/// Cards leaving the list are released and detached; cards staying are
/// moved to their new slot; new cards are placed and mounted.
fn layout_projects(
    registry: &mut VisibilityRegistry<HeadlessViewport>,
    page: &mut ProjectsPage,
    width: f32,
) {
    let selected = page.selected;
    let keep = |id: &u32| {
        content::project(*id)
            .is_some_and(|p| selected == ALL_CATEGORIES || p.category == selected)
    };

    page.cards.retain(registry, keep);
    let dropped: Vec<u32> = page.elements.keys().copied().filter(|id| !keep(id)).collect();
    for id in dropped {
        if let Some(element) = page.elements.shift_remove(&id) {
            registry.host_mut().detach_element(element);
        }
    }

    for (index, project) in content::filter_projects(selected).enumerate() {
        let rect = stacked(PAGE_HEADER, index, CARD_HEIGHT, width);
        match page.elements.get(&project.id).copied() {
            Some(element) => registry.host_mut().attach_element(element, rect),
            None => {
                let element = registry.host_mut().insert_element(rect);
                page.elements.insert(project.id, element);
                page.cards.mount(registry, project.id, element);
            }
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let mut config = FolioConfig::default();
        config.viewport.height = 600.0;
        Session::new(config).unwrap()
    }

    #[test]
    fn test_document_route_is_not_mountable() {
        let mut session = session();
        assert_eq!(
            session.navigate(Route::ViewCv),
            Err(SessionError::NotAPage(Route::ViewCv))
        );
        assert_eq!(session.page(), None);
    }

    #[test]
    fn test_actions_on_wrong_page() {
        let mut session = session();
        assert_eq!(session.copy_email(), Err(SessionError::NoPage));

        session.navigate(Route::Home).unwrap();
        assert_eq!(
            session.select_category("All"),
            Err(SessionError::WrongPage {
                expected: Page::Projects,
                current: Page::Home
            })
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let mut config = FolioConfig::default();
        config.site.reveal_threshold = 2.0;
        assert!(matches!(
            Session::new(config),
            Err(SessionError::Config(ConfigError::InvalidThreshold(_)))
        ));
    }

    #[test]
    fn test_unknown_category() {
        let mut session = session();
        session.navigate(Route::Projects).unwrap();
        assert_eq!(
            session.select_category("Cooking"),
            Err(SessionError::UnknownCategory("Cooking".to_string()))
        );
    }

    #[test]
    fn test_stacked_layout() {
        let first = stacked(100.0, 0, 50.0, 800.0);
        let second = stacked(100.0, 1, 50.0, 800.0);
        assert_eq!(first.y(), 100.0);
        assert_eq!(second.y(), 100.0 + 50.0 + ITEM_GAP);
        assert_eq!(stack_bottom(100.0, 2, 50.0), second.y() + 50.0 + ITEM_GAP);
    }
}
