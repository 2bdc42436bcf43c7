// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo application.
//!
//! A mock money-transfer form with the toast overlay stacked on top.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::notifications::{Position, Snapshot};
use crate::ui::design_tokens::{radius, sizing, spacing, typography};
use crate::ui::toast::Toast;
use iced::widget::{button, container, Column, Container, Row, Stack, Text};
use iced::{alignment, Element, Length, Theme};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub snapshot: &'a Snapshot,
    pub amount: &'a str,
    pub position: Position,
    pub max_visible: usize,
    pub recorded_diagnostics: usize,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let form = transfer_form(&ctx);
    let screen = Container::new(form)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let overlay = Toast::view_overlay(ctx.snapshot, ctx.i18n, ctx.max_visible).map(Message::Toast);

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(screen)
        .push(overlay)
        .into()
}

fn transfer_form<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let action = |key: &str, message: Message| {
        button(Text::new(i18n.tr(key)).size(typography::BODY))
            .on_press(message)
            .padding([spacing::XS, spacing::MD])
            .height(sizing::BUTTON_HEIGHT)
            .width(Length::Fill)
    };

    let position_button = |key: &str, position: Position| {
        let style: fn(&Theme, button::Status) -> button::Style = if ctx.position == position {
            button::primary
        } else {
            button::secondary
        };
        button(Text::new(i18n.tr(key)).size(typography::CAPTION))
            .on_press(Message::PositionSelected(position))
            .padding([spacing::XXS, spacing::SM])
            .style(style)
    };

    let positions = Row::new()
        .spacing(spacing::XS)
        .push(position_button("demo-position-top", Position::Top))
        .push(position_button("demo-position-bottom", Position::Bottom));

    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(i18n.tr("demo-heading")).size(typography::TITLE_LG))
        .push(Text::new(i18n.tr("demo-recipient")).size(typography::BODY_LG))
        .push(
            Text::new(i18n.tr_with_args("demo-amount", &[("amount", ctx.amount)]))
                .size(typography::BODY_LG),
        )
        .push(action("demo-send", Message::ConfirmTransfer))
        .push(action("demo-send-invalid", Message::SendInvalidTransfer))
        .push(action("demo-check-limits", Message::CheckLimits))
        .push(action("demo-rate-info", Message::ShowRate))
        .push(positions)
        .push(action("demo-dismiss-all", Message::DismissAll))
        .push(
            Text::new(i18n.tr_with_args(
                "demo-history",
                &[("count", &ctx.recorded_diagnostics.to_string())],
            ))
            .size(typography::CAPTION),
        );

    Container::new(content)
        .width(Length::Fixed(sizing::FORM_WIDTH))
        .padding(spacing::XL)
        .style(|theme: &Theme| container::Style {
            border: iced::Border {
                radius: radius::LG.into(),
                ..Default::default()
            },
            ..container::rounded_box(theme)
        })
        .into()
}
