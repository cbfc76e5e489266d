//! Text form of navigation actions for the `pages` command.

use client_core::{ModalKind, NavAction, Page};

/// Home, collaboration prompt, chat handoff, crew roster, gallery.
pub const DEFAULT_JOURNEY: &[&str] = &[
    "open:collaboration",
    "handoff",
    "close",
    "crew:on",
    "video",
    "crew:off",
];

pub fn parse_step(step: &str) -> Result<NavAction, String> {
    let step = step.trim().to_ascii_lowercase();
    if let Some(page) = Page::ALL.into_iter().find(|p| p.label() == step) {
        return Ok(NavAction::NavigateTo(page));
    }
    match step.as_str() {
        "close" => Ok(NavAction::CloseModal),
        "handoff" => Ok(NavAction::RequestChatFromCollab),
        "crew:on" => Ok(NavAction::ToggleCrewOverlay(true)),
        "crew:off" => Ok(NavAction::ToggleCrewOverlay(false)),
        other => match other.strip_prefix("open:") {
            Some("collaboration") => Ok(NavAction::OpenModal(ModalKind::Collaboration)),
            Some("chat") => Ok(NavAction::OpenModal(ModalKind::Chat)),
            Some("crew") => Ok(NavAction::OpenModal(ModalKind::Crew)),
            _ => Err(format!("unknown navigation step '{other}'")),
        },
    }
}
