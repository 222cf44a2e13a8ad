use std::rc::Rc;
use yew::Reducible;

pub const STORAGE_KEY: &str = "hardcoded-theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn flipped(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Theme> {
        match value {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Visit rule: with nothing stored the coin decides, otherwise this visit
/// gets the opposite of whatever the last visit (or a manual toggle) left
/// behind.
pub fn on_load(stored: Option<Theme>, coin_is_dark: bool) -> Theme {
    match stored {
        None => {
            if coin_is_dark {
                Theme::Dark
            } else {
                Theme::Light
            }
        }
        Some(previous) => previous.flipped(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeState {
    pub current: Option<Theme>,
}

pub enum ThemeAction {
    Set(Theme),
    Toggle,
}

impl Reducible for ThemeState {
    type Action = ThemeAction;

    fn reduce(self: Rc<Self>, action: ThemeAction) -> Rc<Self> {
        let current = match action {
            ThemeAction::Set(theme) => Some(theme),
            // The stylesheet defaults to the light palette until the stored
            // value loads, so a toggle that races the load flips from light.
            ThemeAction::Toggle => Some(self.current.unwrap_or(Theme::Light).flipped()),
        };
        Rc::new(ThemeState { current })
    }
}

pub fn stored_theme() -> Option<Theme> {
    let storage = web_sys::window()?.local_storage().ok()??;
    storage
        .get_item(STORAGE_KEY)
        .ok()?
        .and_then(|value| Theme::parse(&value))
}

pub fn persist(theme: Theme) {
    if let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(STORAGE_KEY, theme.as_str());
    }
}

pub fn apply_to_document(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        let classes = root.class_list();
        let _ = match theme {
            Theme::Dark => classes.add_1("dark"),
            Theme::Light => classes.remove_1("dark"),
        };
    }
}

pub fn random_coin_is_dark() -> bool {
    web_sys::js_sys::Math::random() > 0.5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_visit_takes_the_coin() {
        assert_eq!(on_load(None, true), Theme::Dark);
        assert_eq!(on_load(None, false), Theme::Light);
    }

    #[test]
    fn later_visits_alternate() {
        assert_eq!(on_load(Some(Theme::Dark), false), Theme::Light);
        assert_eq!(on_load(Some(Theme::Light), false), Theme::Dark);
        // the coin is ignored once something is stored
        assert_eq!(on_load(Some(Theme::Dark), true), Theme::Light);
    }

    #[test]
    fn manual_toggle_rebases_the_next_visit() {
        // visitor lands on light, toggles to dark, leaves; the next visit
        // alternates from the manual value
        let toggled = Theme::Light.flipped();
        assert_eq!(toggled, Theme::Dark);
        assert_eq!(on_load(Some(toggled), false), Theme::Light);
    }

    #[test]
    fn reducer_set_replaces_and_toggle_flips() {
        let state = Rc::new(ThemeState::default());
        let state = state.reduce(ThemeAction::Set(Theme::Light));
        assert_eq!(state.current, Some(Theme::Light));

        let state = state.reduce(ThemeAction::Toggle);
        assert_eq!(state.current, Some(Theme::Dark));
    }

    #[test]
    fn toggle_before_load_flips_from_the_light_default() {
        // A click that lands before the stored value is dispatched starts
        // from the palette the visitor is actually looking at.
        let state = Rc::new(ThemeState::default()).reduce(ThemeAction::Toggle);
        assert_eq!(state.current, Some(Theme::Dark));
    }

    #[test]
    fn stored_literals_round_trip() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("light"), Some(Theme::Light));
        assert_eq!(Theme::parse("sepia"), None);
        assert_eq!(Theme::Dark.as_str(), "dark");
        assert_eq!(Theme::Light.as_str(), "light");
    }
}
