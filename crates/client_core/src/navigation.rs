//! Page selection and the single-active-modal state machine.
//!
//! ```text
//!   any ──open(k)──► k            (replaces whatever was open)
//!   any ──close────► none
//!   Collaboration ──request chat──► Chat   (single step, no `none` in between)
//!   any ──crew on──► Crew
//!   Crew ──crew off─► none
//! ```
//!
//! Changing page never touches the modal.

use thiserror::Error;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Video,
    History,
    Admin,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Video, Page::History, Page::Admin];

    pub fn label(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Video => "video",
            Page::History => "history",
            Page::Admin => "admin",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModalKind {
    /// Prompt inviting the visitor to collaborate.
    Collaboration,
    Chat,
    /// Crew roster overlay.
    Crew,
}

impl ModalKind {
    pub fn label(self) -> &'static str {
        match self {
            ModalKind::Collaboration => "collaboration",
            ModalKind::Chat => "chat",
            ModalKind::Crew => "crew",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub page: Page,
    pub modal: Option<ModalKind>,
}

impl NavigationState {
    pub fn crew_overlay_visible(&self) -> bool {
        self.modal == Some(ModalKind::Crew)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    NavigateTo(Page),
    OpenModal(ModalKind),
    CloseModal,
    RequestChatFromCollab,
    ToggleCrewOverlay(bool),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("chat handoff needs the collaboration prompt open (current modal: {current:?})")]
    HandoffUnavailable { current: Option<ModalKind> },
}

pub fn reduce(
    state: &NavigationState,
    action: NavAction,
) -> Result<NavigationState, NavigationError> {
    let mut next = *state;
    match action {
        NavAction::NavigateTo(page) => next.page = page,
        NavAction::OpenModal(kind) => next.modal = Some(kind),
        NavAction::CloseModal => next.modal = None,
        NavAction::RequestChatFromCollab => {
            if state.modal != Some(ModalKind::Collaboration) {
                return Err(NavigationError::HandoffUnavailable {
                    current: state.modal,
                });
            }
            next.modal = Some(ModalKind::Chat);
        }
        NavAction::ToggleCrewOverlay(true) => next.modal = Some(ModalKind::Crew),
        NavAction::ToggleCrewOverlay(false) => {
            if state.crew_overlay_visible() {
                next.modal = None;
            }
        }
    }
    Ok(next)
}

/// Session-lifetime owner of [`NavigationState`].
#[derive(Debug, Default)]
pub struct NavigationController {
    state: NavigationState,
}

impl NavigationController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn dispatch(&mut self, action: NavAction) -> Result<NavigationState, NavigationError> {
        let next = reduce(&self.state, action)?;
        debug!(
            ?action,
            page = next.page.label(),
            modal = next.modal.map(ModalKind::label),
            "navigation transition"
        );
        self.state = next;
        Ok(next)
    }

    pub fn navigate_to(&mut self, page: Page) {
        self.apply_infallible(NavAction::NavigateTo(page));
    }

    pub fn open_modal(&mut self, kind: ModalKind) {
        self.apply_infallible(NavAction::OpenModal(kind));
    }

    pub fn close_modal(&mut self) {
        self.apply_infallible(NavAction::CloseModal);
    }

    pub fn request_chat_from_collab(&mut self) -> Result<(), NavigationError> {
        self.dispatch(NavAction::RequestChatFromCollab).map(|_| ())
    }

    pub fn toggle_crew_overlay(&mut self, visible: bool) {
        self.apply_infallible(NavAction::ToggleCrewOverlay(visible));
    }

    pub fn crew_overlay_visible(&self) -> bool {
        self.state.crew_overlay_visible()
    }

    fn apply_infallible(&mut self, action: NavAction) {
        if let Err(error) = self.dispatch(action) {
            debug!(?action, %error, "navigation action refused");
        }
    }
}
