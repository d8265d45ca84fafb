//! Profile page: user facts, activity summary and the logout entry point.

/// Campus e-mail domain used for derived addresses.
pub const CAMPUS_EMAIL_DOMAIN: &str = "university.edu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProfileStat {
    pub label: &'static str,
    pub value: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Club,
    Notes,
    Event,
    Assignment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activity {
    pub action: &'static str,
    pub time: &'static str,
    pub kind: ActivityKind,
}

const STATS: [ProfileStat; 4] = [
    ProfileStat {
        label: "Events Joined",
        value: 5,
    },
    ProfileStat {
        label: "Notes Uploaded",
        value: 12,
    },
    ProfileStat {
        label: "Clubs Joined",
        value: 3,
    },
    ProfileStat {
        label: "Achievements",
        value: 8,
    },
];

const RECENT_ACTIVITY: [Activity; 4] = [
    Activity {
        action: "Joined Photography Club",
        time: "2 hours ago",
        kind: ActivityKind::Club,
    },
    Activity {
        action: "Uploaded Data Structures Notes",
        time: "1 day ago",
        kind: ActivityKind::Notes,
    },
    Activity {
        action: "Registered for AI Workshop",
        time: "2 days ago",
        kind: ActivityKind::Event,
    },
    Activity {
        action: "Completed DBMS Assignment",
        time: "3 days ago",
        kind: ActivityKind::Assignment,
    },
];

/// Mounted profile page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileScreen {
    user_name: String,
}

impl ProfileScreen {
    pub fn mount(user_name: &str) -> Self {
        Self {
            user_name: user_name.to_string(),
        }
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    /// Campus address: lower-cased name, first space replaced by `.`.
    pub fn email(&self) -> String {
        format!(
            "{}@{CAMPUS_EMAIL_DOMAIN}",
            self.user_name.to_lowercase().replacen(' ', ".", 1)
        )
    }

    pub fn stats(&self) -> &'static [ProfileStat] {
        &STATS
    }

    pub fn recent_activity(&self) -> &'static [Activity] {
        &RECENT_ACTIVITY
    }
}
