//! View mode, navigation routes and resolved screens

use serde::{Deserialize, Serialize};

use crate::model::{Firefighter, Slot, Team, TeamStatus};

/// Layout of the team overview; presentation only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Grid => "grid",
            ViewMode::List => "list",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "grid" => Some(ViewMode::Grid),
            "list" => Some(ViewMode::List),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            ViewMode::Grid => ViewMode::List,
            ViewMode::List => ViewMode::Grid,
        }
    }
}

/// Navigation target parsed from a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Overview,
    /// `/team/{id}`
    Team(u32),
    /// `/team/{id}/firefighter/{0|1}`
    Firefighter { team_id: u32, slot: Slot },
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Route::Overview,
            ["team", id] => id.parse().map(Route::Team).unwrap_or(Route::NotFound),
            ["team", id, "firefighter", index] => {
                let team_id = id.parse::<u32>().ok();
                let slot = index.parse::<usize>().ok().and_then(Slot::from_index);
                match (team_id, slot) {
                    (Some(team_id), Some(slot)) => Route::Firefighter { team_id, slot },
                    _ => Route::NotFound,
                }
            }
            _ => Route::NotFound,
        }
    }

    /// Canonical path; `None` for `NotFound`
    pub fn path(&self) -> Option<String> {
        match self {
            Route::Overview => Some("/".to_string()),
            Route::Team(id) => Some(format!("/team/{}", id)),
            Route::Firefighter { team_id, slot } => {
                Some(format!("/team/{}/firefighter/{}", team_id, slot.index()))
            }
            Route::NotFound => None,
        }
    }
}

/// What the dashboard shows for a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Overview,
    TeamDetail(Team),
    FirefighterDetail { team: Team, slot: Slot },
    /// Lookup miss; offers a way back to the overview
    NotFound,
}

impl Screen {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Screen::NotFound)
    }

    /// Team shown by a detail screen
    pub fn team(&self) -> Option<&Team> {
        match self {
            Screen::TeamDetail(team) | Screen::FirefighterDetail { team, .. } => Some(team),
            _ => None,
        }
    }

    pub fn firefighter(&self) -> Option<&Firefighter> {
        match self {
            Screen::FirefighterDetail { team, slot } => Some(team.firefighter(*slot)),
            _ => None,
        }
    }

    /// Where the back button leads
    pub fn back_route(&self) -> Route {
        match self {
            Screen::FirefighterDetail { team, .. } => Route::Team(team.id()),
            _ => Route::Overview,
        }
    }
}

/// Status legend entries shown along the bottom of the overview
pub fn status_legend() -> [(TeamStatus, &'static str); 4] {
    TeamStatus::ALL.map(|status| (status, status.label()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_mode_toggle() {
        assert_eq!(ViewMode::default(), ViewMode::Grid);
        assert_eq!(ViewMode::Grid.toggled(), ViewMode::List);
        assert_eq!(ViewMode::List.toggled().toggled(), ViewMode::List);
        assert_eq!(ViewMode::from_str("LIST"), Some(ViewMode::List));
        assert_eq!(ViewMode::from_str("cards"), None);
    }

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("/"), Route::Overview);
        assert_eq!(Route::parse(""), Route::Overview);
        assert_eq!(Route::parse("/team/3"), Route::Team(3));
        assert_eq!(Route::parse("/team/3/"), Route::Team(3));
        assert_eq!(Route::parse("/team/3?tab=1"), Route::Team(3));
        assert_eq!(
            Route::parse("/team/6/firefighter/1"),
            Route::Firefighter {
                team_id: 6,
                slot: Slot::B
            }
        );
    }

    #[test]
    fn test_parse_bad_routes() {
        assert_eq!(Route::parse("/team/abc"), Route::NotFound);
        assert_eq!(Route::parse("/team/3abc"), Route::NotFound);
        assert_eq!(Route::parse("/team/-1"), Route::NotFound);
        assert_eq!(Route::parse("/team/2/firefighter/2"), Route::NotFound);
        assert_eq!(Route::parse("/team/2/firefighter/A"), Route::NotFound);
        assert_eq!(Route::parse("/settings"), Route::NotFound);
    }

    #[test]
    fn test_route_paths() {
        for path in ["/", "/team/4", "/team/4/firefighter/0"] {
            assert_eq!(Route::parse(path).path().as_deref(), Some(path));
        }
        assert_eq!(Route::NotFound.path(), None);
    }

    #[test]
    fn test_screen_back_route() {
        let team = Team::new(2);
        let screen = Screen::FirefighterDetail {
            team: team.clone(),
            slot: Slot::A,
        };
        assert_eq!(screen.back_route(), Route::Team(2));
        assert_eq!(screen.firefighter().map(|f| f.id.as_str()), Some("2-a"));
        assert_eq!(Screen::NotFound.back_route(), Route::Overview);
        assert_eq!(Screen::TeamDetail(team).back_route(), Route::Overview);
    }

    #[test]
    fn test_status_legend() {
        let legend = status_legend();
        assert_eq!(legend[0], (TeamStatus::Standby, "Gotowy"));
        assert_eq!(legend[3], (TeamStatus::Danger, "Krytyczny"));
    }
}
