//! Modal overlay building utilities
//!
//! Renders a `scrim_core::Frame` as two stacked layers:
//! - a full-screen backdrop whose alpha follows the frame's opacity and which
//!   reports a press anywhere on it
//! - a full-screen, centered content layer scaled by the frame's scale; only
//!   the content itself captures input, the rest of the layer lets presses
//!   through to the backdrop

use iced::widget::{center, container, float, mouse_area, opaque, stack, Space, Stack};
use iced::{Color, Element, Length};
use scrim_core::Frame;

/// Build a backdrop that reports presses with `on_press`
///
/// # Arguments
/// * `color` - Backdrop color (its alpha is replaced)
/// * `opacity` - Alpha for this frame (0.0-1.0)
/// * `on_press` - The message to send when the backdrop is pressed
pub fn build_backdrop<'a, Message>(color: Color, opacity: f32, on_press: Message) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let background = Color {
        a: opacity.clamp(0.0, 1.0),
        ..color
    };

    mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(background.into()),
                ..Default::default()
            }),
    )
    .on_press(on_press)
    .into()
}

/// Center `content` on a full-screen layer and scale it
pub fn modal_layer<'a, Message>(scale: f32, content: Element<'a, Message>) -> Element<'a, Message>
where
    Message: 'a,
{
    center(float(opaque(content)).scale(scale.max(0.0)))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Render one visible modal frame (backdrop + scaled content)
///
/// # Example
/// ```ignore
/// if let Some(frame) = modal.frame() {
///     layers.push(modal_view(frame, Color::BLACK, dialogs::view, Message::Backdrop(frame.id)));
/// }
/// ```
pub fn modal_view<'a, C, Message, F>(
    frame: Frame<'a, C>,
    backdrop_color: Color,
    content: F,
    on_backdrop: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
    F: FnOnce(&'a C) -> Element<'a, Message>,
{
    let backdrop = build_backdrop(backdrop_color, frame.backdrop_opacity, on_backdrop);
    let layer = modal_layer(frame.scale, content(frame.content));

    stack![backdrop, layer]
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Stack modal layers above the base content, first layer lowest
///
/// With no layers the base is returned as is.
pub fn with_modals<'a, Message>(
    base: Element<'a, Message>,
    layers: Vec<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    if layers.is_empty() {
        return base;
    }

    Stack::with_children(std::iter::once(base).chain(layers))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
