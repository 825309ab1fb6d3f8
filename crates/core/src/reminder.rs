use serde::{Deserialize, Serialize};

/// Hint shown under the page title, picked once when the session starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Reminder {
    #[default]
    None,
    Morning,
    Evening,
}

impl Reminder {
    #[must_use]
    pub fn text(self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::Morning => Some("Schon gewogen heute? Jetzt wäre ein guter Zeitpunkt! ☀️"),
            Self::Evening => Some("Abendroutine! Hast du dein Gewicht eingetragen? 🌙"),
        }
    }
}

/// Weigh-in reminder for a local hour of day: mornings 9–12, evenings 17–20.
#[must_use]
pub fn select_reminder(hour: u32) -> Reminder {
    match hour {
        9..12 => Reminder::Morning,
        17..20 => Reminder::Evening,
        _ => Reminder::None,
    }
}
