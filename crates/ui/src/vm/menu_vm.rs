/// One tile on the home menu.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuEntryVm {
    pub title: &'static str,
    pub description: &'static str,
    /// Only the Grand Slam quiz is playable; the rest are placeholders.
    pub available: bool,
}

#[must_use]
pub fn menu_entries() -> Vec<MenuEntryVm> {
    vec![
        MenuEntryVm {
            title: "Grand Slam Champions",
            description: "Name every men's singles major winner from 2024 back to 2000.",
            available: true,
        },
        MenuEntryVm {
            title: "Year-End No. 1",
            description: "Who finished each season on top of the rankings?",
            available: false,
        },
        MenuEntryVm {
            title: "Finals Scorelines",
            description: "Match the Grand Slam finals to their scores.",
            available: false,
        },
        MenuEntryVm {
            title: "Head to Head",
            description: "Rivalries and their records.",
            available: false,
        },
    ]
}
