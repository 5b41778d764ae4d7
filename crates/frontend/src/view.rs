//! Terminal rendering of the view state.
//!
//! Rendering is a pure function of `ViewState`; the theme picks the palette
//! for every line so switching it restyles the whole view.

use api_client::Recommendation;
use colored::{Color, Colorize};

use crate::state::{Theme, ViewState};

pub const HEADER: &str = "Movie Recommender";
pub const TAGLINE: &str = "Discover your next favorite film!";
pub const LOADING_NOTICE: &str = "Finding your perfect movies...";
pub const FOOTER: &str = "Built with Rust, reqwest & tokio";

struct Palette {
    accent: Color,
    text: Color,
    muted: Color,
    error: Color,
}

impl Palette {
    fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Palette {
                accent: Color::BrightGreen,
                text: Color::BrightWhite,
                muted: Color::BrightBlack,
                error: Color::BrightRed,
            },
            Theme::Light => Palette {
                accent: Color::Blue,
                text: Color::Black,
                muted: Color::BrightBlack,
                error: Color::Red,
            },
        }
    }
}

/// Render the whole page.
pub fn render(state: &ViewState) -> String {
    let palette = Palette::for_theme(state.theme);
    let mut out = Vec::new();

    out.push(format!("[{}]", state.theme.toggle_label()).color(palette.muted).to_string());
    out.push(String::new());
    out.push(HEADER.color(palette.text).bold().to_string());
    out.push(TAGLINE.color(palette.muted).to_string());
    out.push(String::new());

    let selected = match &state.selected {
        Some(title) => title.color(palette.text).bold().to_string(),
        None => "(none)".color(palette.muted).to_string(),
    };
    out.push(format!(
        "Movie: {}  ({} available)   [{}]",
        selected,
        state.movies.len(),
        state.recommend_label().color(palette.accent).bold()
    ));
    out.push(String::new());

    if state.loading {
        out.push(LOADING_NOTICE.color(palette.muted).italic().to_string());
    }
    if let Some(message) = &state.last_error {
        out.push(format!("! {}", message).color(palette.error).to_string());
    }

    out.extend(card_lines(&state.recommendations, &palette));

    out.push(String::new());
    out.push(FOOTER.color(palette.muted).to_string());
    out.join("\n")
}

/// Render only the recommendation cards for the selected movie.
pub fn render_recommendations(state: &ViewState) -> String {
    let palette = Palette::for_theme(state.theme);
    let movie = state.selected.as_deref().unwrap_or_default();

    let mut out = vec![format!("Because you picked {}:", movie)
        .color(palette.accent)
        .bold()
        .to_string()];
    if state.recommendations.is_empty() {
        out.push(format!("  {}", "No recommendations".color(palette.muted)));
    } else {
        out.extend(card_lines(&state.recommendations, &palette));
    }
    out.push(String::new());
    out.push(FOOTER.color(palette.muted).to_string());
    out.join("\n")
}

fn card_lines(recommendations: &[Recommendation], palette: &Palette) -> Vec<String> {
    recommendations
        .iter()
        .enumerate()
        .flat_map(|(rank, rec)| {
            [
                format!(
                    "{}. {}",
                    (rank + 1).to_string().color(palette.accent),
                    rec.title.color(palette.text).bold()
                ),
                format!("   poster: {}", rec.poster.color(palette.muted)),
            ]
        })
        .collect()
}

/// Render the catalog with 1-based indices, marking the selection.
pub fn render_catalog(state: &ViewState) -> String {
    let palette = Palette::for_theme(state.theme);

    if state.movies.is_empty() {
        return "No movies available".color(palette.muted).to_string();
    }

    let width = state.movies.len().to_string().len();
    state
        .movies
        .iter()
        .enumerate()
        .map(|(i, title)| {
            let marker = if state.selected.as_deref() == Some(title.as_str()) {
                ">".color(palette.accent).to_string()
            } else {
                " ".to_string()
            };
            format!("{} {:>width$}. {}", marker, i + 1, title.color(palette.text))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_render_idle_page() {
        plain();
        let state = ViewState {
            movies: vec!["Avatar".into(), "Titanic".into()],
            selected: Some("Avatar".into()),
            ..ViewState::default()
        };

        let page = render(&state);
        assert!(page.contains("[Switch to Light Mode]"));
        assert!(page.contains(HEADER));
        assert!(page.contains("Movie: Avatar  (2 available)   [Get Recommendations]"));
        assert!(!page.contains(LOADING_NOTICE));
        assert!(page.ends_with(FOOTER));
    }

    #[test]
    fn test_render_loading_and_error() {
        plain();
        let state = ViewState {
            loading: true,
            last_error: Some("Could not get recommendations: boom".into()),
            ..ViewState::default()
        };

        let page = render(&state);
        assert!(page.contains("(none)"));
        assert!(page.contains("[Finding...]"));
        assert!(page.contains(LOADING_NOTICE));
        assert!(page.contains("! Could not get recommendations: boom"));
    }

    #[test]
    fn test_render_cards() {
        plain();
        let state = ViewState {
            recommendations: vec![
                Recommendation::new("Aliens", "https://img.example/aliens.jpg"),
                Recommendation::new("Titanic", "https://img.example/titanic.jpg"),
            ],
            theme: Theme::Light,
            ..ViewState::default()
        };

        let page = render(&state);
        assert!(page.contains("[Switch to Dark Mode]"));
        assert!(page.contains("1. Aliens\n   poster: https://img.example/aliens.jpg"));
        assert!(page.contains("2. Titanic\n   poster: https://img.example/titanic.jpg"));
    }

    #[test]
    fn test_render_recommendations_only() {
        plain();
        let state = ViewState {
            selected: Some("Avatar".into()),
            recommendations: vec![Recommendation::new("Aliens", "https://img.example/aliens.jpg")],
            theme: Theme::Light,
            ..ViewState::default()
        };

        let out = render_recommendations(&state);
        assert!(out.starts_with("Because you picked Avatar:"));
        assert!(out.contains("1. Aliens\n   poster: https://img.example/aliens.jpg"));
        assert!(!out.contains(HEADER));
        assert!(out.ends_with(FOOTER));

        let empty = ViewState {
            selected: Some("Avatar".into()),
            ..ViewState::default()
        };
        assert!(render_recommendations(&empty).contains("  No recommendations"));
    }

    #[test]
    fn test_palette_follows_theme() {
        let dark = Palette::for_theme(Theme::Dark);
        let light = Palette::for_theme(Theme::Light);
        assert_ne!(dark.accent, light.accent);
        assert_ne!(dark.text, light.text);
    }

    #[test]
    fn test_render_catalog_marks_selection() {
        plain();
        let state = ViewState {
            movies: (1..=10).map(|i| format!("Movie {}", i)).collect(),
            selected: Some("Movie 2".into()),
            ..ViewState::default()
        };

        let lines: Vec<String> = render_catalog(&state).lines().map(String::from).collect();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[0], "   1. Movie 1");
        assert_eq!(lines[1], ">  2. Movie 2");
        assert_eq!(lines[9], "  10. Movie 10");
    }

    #[test]
    fn test_render_empty_catalog() {
        plain();
        assert_eq!(render_catalog(&ViewState::default()), "No movies available");
    }
}
