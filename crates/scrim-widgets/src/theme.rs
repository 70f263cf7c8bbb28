//! Visual constants and styles for modal dialogs
//!
//! Dialog cards sit on the scaled content layer; their buttons use a raised
//! look that sinks in while pressed.

use iced::widget::button::{Status, Style as ButtonStyle};
use iced::widget::container::Style as ContainerStyle;
use iced::{Background, Border, Color, Shadow, Vector};
use scrim_core::BackdropConfig;

/// Dialog card background
pub const CARD_BG: Color = Color::from_rgb(0.16, 0.16, 0.18);

/// Neutral (cancel/close) button color
pub const NEUTRAL_BG: Color = Color::from_rgb(0.25, 0.25, 0.25);

/// Affirmative button color
pub const ACCENT_BG: Color = Color::from_rgb(0.3, 0.6, 0.9);

/// Destructive button color
pub const DANGER_BG: Color = Color::from_rgb(0.8, 0.25, 0.25);

/// Convert the configured backdrop color (alpha is applied per frame)
pub fn backdrop_color(config: &BackdropConfig) -> Color {
    let [r, g, b] = config.color;
    Color::from_rgb(r, g, b)
}

/// Rounded card with a soft drop shadow
pub fn card_style() -> ContainerStyle {
    ContainerStyle {
        background: Some(Background::Color(CARD_BG)),
        text_color: Some(Color::WHITE),
        border: Border {
            color: Color::from_rgb(0.3, 0.3, 0.34),
            width: 1.0,
            radius: 10.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.5),
            offset: Vector::new(0.0, 6.0),
            blur_radius: 18.0,
        },
        ..Default::default()
    }
}

/// Lighten a color by a factor (0.0-1.0)
fn lighten(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r + factor).min(1.0),
        (color.g + factor).min(1.0),
        (color.b + factor).min(1.0),
    )
}

/// Darken a color by a factor (0.0-1.0)
fn darken(color: Color, factor: f32) -> Color {
    Color::from_rgb(
        (color.r * (1.0 - factor)).max(0.0),
        (color.g * (1.0 - factor)).max(0.0),
        (color.b * (1.0 - factor)).max(0.0),
    )
}

fn raised(base: Color) -> ButtonStyle {
    ButtonStyle {
        background: Some(Background::Color(base)),
        text_color: Color::WHITE,
        border: Border {
            color: lighten(base, 0.1),
            width: 1.0,
            radius: 6.0.into(),
        },
        shadow: Shadow {
            color: Color::from_rgba(0.0, 0.0, 0.0, 0.4),
            offset: Vector::new(0.0, 2.0),
            blur_radius: 3.0,
        },
        snap: false,
    }
}

fn sunken(base: Color) -> ButtonStyle {
    ButtonStyle {
        background: Some(Background::Color(darken(base, 0.15))),
        shadow: Shadow::default(),
        ..raised(base)
    }
}

/// Dialog button style for `base`
///
/// Use with `.style(|_theme, status| dialog_button(status, ACCENT_BG))`
pub fn dialog_button(status: Status, base: Color) -> ButtonStyle {
    match status {
        Status::Active => raised(base),
        Status::Hovered => raised(lighten(base, 0.08)),
        Status::Pressed => sunken(base),
        Status::Disabled => ButtonStyle {
            background: Some(Background::Color(Color::from_rgb(0.2, 0.2, 0.2))),
            text_color: Color::from_rgb(0.5, 0.5, 0.5),
            shadow: Shadow::default(),
            ..raised(base)
        },
    }
}
