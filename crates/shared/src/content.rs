//! Static portal content rendered next to the profile.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateKind {
    Feature,
    Fix,
    Launch,
}

#[derive(Debug, Clone, Copy)]
pub struct UpdateEntry {
    pub version: &'static str,
    pub date: &'static str,
    pub description: &'static str,
    pub kind: UpdateKind,
}

/// Newest first.
pub const UPDATE_HISTORY: &[UpdateEntry] = &[
    UpdateEntry {
        version: "v1.7.0",
        date: "Februari 2026",
        description: "Sistem Local-First: Bebas biaya server & Tanpa ribet setup.",
        kind: UpdateKind::Feature,
    },
    UpdateEntry {
        version: "v1.6.4",
        date: "Februari 2026",
        description: "Pembersihan sistem Cloud yang memberatkan user.",
        kind: UpdateKind::Fix,
    },
    UpdateEntry {
        version: "v1.0.0",
        date: "Oktober 2023",
        description: "Peluncuran perdana Portal KabutCraft.",
        kind: UpdateKind::Launch,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct CrewMember {
    pub name: &'static str,
    pub role: &'static str,
}

pub const CREW_MEMBERS: &[CrewMember] = &[
    CrewMember {
        name: "MistHaze (Haze)",
        role: "Pemilik Utama & Pembuat",
    },
    CrewMember {
        name: "Lopli",
        role: "Voice Actor",
    },
    CrewMember {
        name: "Hanzen",
        role: "Voice Actor",
    },
    CrewMember {
        name: "Keshi",
        role: "Voice Actor",
    },
    CrewMember {
        name: "Rain",
        role: "Voice Actor",
    },
    CrewMember {
        name: "Nia",
        role: "Voice Actor",
    },
    CrewMember {
        name: "Renmaru",
        role: "Voice Actor",
    },
    CrewMember {
        name: "Asep",
        role: "Voice Actor",
    },
];

pub fn youtube_embed_url(video_id: &str) -> String {
    format!("https://www.youtube.com/embed/{video_id}?rel=0")
}

#[cfg(test)]
#[path = "tests/content_tests.rs"]
mod tests;
