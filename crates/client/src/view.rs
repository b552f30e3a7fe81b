use shared_types::SessionUser;

/// Places the directory hands the user off to instead of rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Redirect {
    /// Request management for signed-in lawyers.
    LawyerRequests,
}

impl Redirect {
    pub fn path(&self) -> &'static str {
        match self {
            Redirect::LawyerRequests => "/lawyer/requests",
        }
    }
}

/// Which half of the directory is showing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ViewTab {
    /// Lawyers the user is already connected to.
    #[default]
    Connected,
    /// Everyone else, narrowed by the filter criteria.
    Discover,
}

impl ViewTab {
    pub fn label(&self) -> &'static str {
        match self {
            ViewTab::Connected => "Your Lawyers",
            ViewTab::Discover => "Find Lawyers",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewTab::Connected => "your",
            ViewTab::Discover => "find",
        }
    }

    pub fn from_str_or_default(s: &str) -> Self {
        match s {
            "find" => ViewTab::Discover,
            _ => ViewTab::Connected,
        }
    }

    pub fn shows_filters(&self) -> bool {
        matches!(self, ViewTab::Discover)
    }
}

/// Where to send the user instead of rendering the directory, if anywhere.
///
/// Checked once when the page mounts; the directory is for clients only.
pub fn landing_redirect(session: Option<&SessionUser>) -> Option<Redirect> {
    match session {
        Some(user) if user.is_lawyer() => Some(Redirect::LawyerRequests),
        _ => None,
    }
}
