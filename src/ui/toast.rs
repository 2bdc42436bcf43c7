// SPDX-License-Identifier: MPL-2.0
//! Toast widgets for rendering a notification [`Snapshot`].
//!
//! Banners are small cards with a severity-colored accent, stacked at the top
//! or bottom edge in insertion order. A notification with buttons is shown
//! as a centered modal card over a dimmed backdrop. Opacity follows the
//! enter/exit animation progress.

use crate::i18n::fluent::I18n;
use crate::notifications::{
    Button as ToastButton, ButtonStyle, Notification, NotificationId, Position, Severity,
    Snapshot,
};
use crate::ui::design_tokens::{
    border, opacity, palette, radius, shadow, sizing, spacing, typography,
};
use iced::widget::{
    button, container, opaque, text, tooltip, Column, Container, Row, Stack, Text, Tooltip,
};
use iced::{alignment, Background, Color, Element, Length, Theme};
use tokio::time::Instant;

/// Fluent key of the dismiss button's tooltip.
pub const DISMISS_KEY: &str = "toast-dismiss";

/// Interactions emitted by the toast overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Dismiss(NotificationId),
    Activate { id: NotificationId, index: usize },
}

pub struct Toast;

impl Toast {
    /// Renders a single banner.
    pub fn view<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        let alpha = notification.animation_progress(now);
        let accent = accent_color(notification.severity());

        let glyph = Container::new(
            Text::new(severity_glyph(notification.severity()))
                .size(typography::BODY_LG)
                .style(move |_theme: &Theme| text::Style {
                    color: Some(faded(accent, alpha)),
                }),
        )
        .width(Length::Fixed(sizing::ICON_MD))
        .align_x(alignment::Horizontal::Center);

        let dismiss_button = button(Text::new("✕").size(typography::BODY))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(move |theme: &Theme, status| dismiss_button_style(theme, status, alpha));
        let dismiss_button = Tooltip::new(
            dismiss_button,
            Text::new(i18n.tr(DISMISS_KEY)).size(typography::CAPTION),
            tooltip::Position::Bottom,
        );

        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(glyph)
            .push(
                Container::new(Self::text_block(notification, i18n, alpha))
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent, alpha))
            .into()
    }

    /// Renders a notification that carries buttons as a centered modal.
    pub fn view_modal<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        now: Instant,
    ) -> Element<'a, Message> {
        let alpha = notification.animation_progress(now);
        let accent = accent_color(notification.severity());
        let id = notification.id();

        let actions = notification.buttons().iter().enumerate().fold(
            Row::new().spacing(spacing::XS),
            |row, (index, action)| row.push(Self::action_button(id, index, action, alpha)),
        );

        let card = Column::new()
            .spacing(spacing::MD)
            .push(Self::text_block(notification, i18n, alpha))
            .push(
                Container::new(actions)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Right),
            );

        let card = Container::new(card)
            .width(Length::Fixed(sizing::MODAL_WIDTH))
            .padding(spacing::LG)
            .style(move |theme: &Theme| modal_container_style(theme, accent, alpha));

        let backdrop = Container::new(card)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(move |_theme: &Theme| container::Style {
                background: Some(Background::Color(Color {
                    a: opacity::BACKDROP * alpha,
                    ..palette::BLACK
                })),
                ..Default::default()
            });

        // Clicks must not reach the screen behind a modal.
        opaque(backdrop)
    }

    /// Renders every tracked notification on top of the application.
    ///
    /// At most `max_visible` banners are stacked per edge; the oldest modal
    /// is drawn above everything else.
    pub fn view_overlay<'a>(
        snapshot: &'a Snapshot,
        i18n: &'a I18n,
        max_visible: usize,
    ) -> Element<'a, Message> {
        let now = Instant::now();
        let mut layers = Stack::new().width(Length::Fill).height(Length::Fill);

        for position in [Position::Top, Position::Bottom] {
            let toasts: Vec<Element<'a, Message>> = snapshot
                .stack(position, max_visible)
                .map(|notification| Self::view(notification, i18n, now))
                .collect();
            if toasts.is_empty() {
                continue;
            }

            let column = Column::with_children(toasts)
                .spacing(spacing::XS)
                .align_x(alignment::Horizontal::Center);
            let edge = match position {
                Position::Top => alignment::Vertical::Top,
                Position::Bottom => alignment::Vertical::Bottom,
            };
            layers = layers.push(
                Container::new(column)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Center)
                    .align_y(edge)
                    .padding(spacing::MD),
            );
        }

        if let Some(modal) = snapshot.front_modal() {
            layers = layers.push(Self::view_modal(modal, i18n, now));
        }

        layers.into()
    }

    /// Title (or the localized severity name) above the optional message.
    fn text_block<'a>(
        notification: &'a Notification,
        i18n: &'a I18n,
        alpha: f32,
    ) -> Column<'a, Message> {
        let title = notification
            .title()
            .map_or_else(|| i18n.tr(notification.severity().title_key()), str::to_owned);

        let mut block = Column::new().spacing(spacing::XXS).push(
            Text::new(title)
                .size(typography::BODY_LG)
                .style(move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, alpha)),
                }),
        );
        if let Some(message) = notification.message() {
            block = block.push(Text::new(message).size(typography::BODY).style(
                move |theme: &Theme| text::Style {
                    color: Some(faded(theme.palette().text, alpha * 0.85)),
                },
            ));
        }
        block
    }

    fn action_button<'a>(
        id: NotificationId,
        index: usize,
        action: &'a ToastButton,
        alpha: f32,
    ) -> Element<'a, Message> {
        let style = action.button_style();
        button(Text::new(action.label()).size(typography::BODY))
            .on_press(Message::Activate { id, index })
            .padding([spacing::XS, spacing::MD])
            .style(move |theme: &Theme, status| action_button_style(theme, status, style, alpha))
            .into()
    }
}

/// Accent color for a severity.
#[must_use]
pub fn accent_color(severity: Severity) -> Color {
    match severity {
        Severity::Success => palette::SUCCESS_500,
        Severity::Error => palette::ERROR_500,
        Severity::Warning => palette::WARNING_500,
        Severity::Info => palette::INFO_500,
    }
}

fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "✓",
        Severity::Error => "⨯",
        Severity::Warning => "⚠",
        Severity::Info => "ℹ",
    }
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE),
        ..color
    }
}

fn faded_shadow(alpha: f32, base: iced::Shadow) -> iced::Shadow {
    iced::Shadow {
        color: faded(base.color, alpha * opacity::OVERLAY_MEDIUM),
        ..base
    }
}

fn toast_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(faded(bg_color, alpha))),
        border: iced::Border {
            color: faded(accent, alpha),
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: faded_shadow(alpha, shadow::MD),
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn modal_container_style(theme: &Theme, accent: Color, alpha: f32) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(faded(bg_color, alpha))),
        border: iced::Border {
            color: faded(accent, alpha),
            width: border::WIDTH_SM,
            radius: radius::LG.into(),
        },
        shadow: faded_shadow(alpha, shadow::LG),
        text_color: Some(faded(theme.palette().text, alpha)),
        ..Default::default()
    }
}

fn dismiss_button_style(theme: &Theme, status: button::Status, alpha: f32) -> button::Style {
    let text_color = faded(theme.extended_palette().background.base.text, alpha);
    let hover_background = |a: f32| {
        Some(Background::Color(Color {
            a: a * alpha,
            ..palette::GRAY_400
        }))
    };

    let (background, text_color) = match status {
        button::Status::Active => (None, text_color),
        button::Status::Hovered => (hover_background(opacity::OVERLAY_SUBTLE), text_color),
        button::Status::Pressed => (hover_background(opacity::OVERLAY_MEDIUM), text_color),
        button::Status::Disabled => (
            None,
            Color {
                a: text_color.a * opacity::OVERLAY_MEDIUM,
                ..text_color
            },
        ),
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

fn action_button_style(
    theme: &Theme,
    status: button::Status,
    style: ButtonStyle,
    alpha: f32,
) -> button::Style {
    let extended = theme.extended_palette();
    let (base, hovered, text_color) = match style {
        ButtonStyle::Default => (palette::PRIMARY_500, palette::PRIMARY_600, palette::WHITE),
        ButtonStyle::Destructive => (palette::ERROR_500, palette::ERROR_600, palette::WHITE),
        ButtonStyle::Cancel => (
            extended.background.weak.color,
            extended.background.strong.color,
            extended.background.base.text,
        ),
    };

    let background = match status {
        button::Status::Active | button::Status::Disabled => base,
        button::Status::Hovered | button::Status::Pressed => hovered,
    };

    button::Style {
        background: Some(Background::Color(faded(background, alpha))),
        text_color: faded(text_color, alpha),
        border: iced::Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        shadow: shadow::NONE,
        snap: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, GeneralConfig};

    #[test]
    fn dismiss_tooltip_is_localized() {
        for (lang, expected) in [("en-US", "Dismiss"), ("fr", "Fermer")] {
            let config = Config {
                general: GeneralConfig {
                    language: Some(lang.to_string()),
                },
                ..Config::default()
            };
            let i18n = I18n::new(None, &config);
            assert_eq!(i18n.tr(DISMISS_KEY), expected);
        }
    }

    #[test]
    fn toast_container_style_uses_accent_color() {
        let theme = Theme::Dark;
        let accent = accent_color(Severity::Success);
        let style = toast_container_style(&theme, accent, 1.0);

        assert_eq!(style.border.color, accent);
        assert!(style.background.is_some());
    }

    #[test]
    fn style_fades_with_animation_progress() {
        let theme = Theme::Light;
        let style = toast_container_style(&theme, accent_color(Severity::Error), 0.5);
        assert!((style.border.color.a - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn destructive_buttons_are_red() {
        let style = action_button_style(
            &Theme::Dark,
            button::Status::Active,
            ButtonStyle::Destructive,
            1.0,
        );
        assert_eq!(
            style.background,
            Some(Background::Color(palette::ERROR_500))
        );
    }

    #[test]
    fn every_severity_has_a_glyph_and_accent() {
        for severity in Severity::ALL {
            assert!(!severity_glyph(severity).is_empty());
            assert!(accent_color(severity).a > 0.0);
        }
    }
}
