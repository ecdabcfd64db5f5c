// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The screen sits in a fixed-width phone frame: the balances content
//! scrolls above the tab bar, which stays pinned to the bottom.

use super::Message;
use crate::fonts::Typefaces;
use crate::i18n::fluent::I18n;
use crate::ui::balances;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::tab_bar;
use crate::ui::theming::AppTheme;
use iced::widget::{Column, Container, Scrollable, Text};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme: &'a AppTheme,
    pub fonts: Typefaces,
    pub balances: &'a balances::State,
    pub tab_bar: &'a tab_bar::State,
    /// Translated warning shown above the content, if any.
    pub warning: Option<String>,
    pub now: Instant,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let colors = &ctx.theme.colors;

    let content = ctx
        .balances
        .view(balances::ViewContext {
            i18n: ctx.i18n,
            colors,
            fonts: ctx.fonts,
        })
        .map(Message::Balances);

    let bar = ctx
        .tab_bar
        .view(tab_bar::ViewContext {
            i18n: ctx.i18n,
            colors,
            now: ctx.now,
        })
        .map(Message::TabBar);

    let mut column = Column::new();
    if let Some(warning) = ctx.warning {
        column = column.push(
            Container::new(
                Text::new(warning)
                    .size(typography::CHIP)
                    .color(colors.failure_text),
            )
            .padding(spacing::SM),
        );
    }

    let column = column
        .push(Scrollable::new(content).height(Length::Fill))
        .push(
            Container::new(bar)
                .center_x(Length::Fill)
                .padding([spacing::SM, 0.0]),
        );

    let shell = Container::new(column)
        .width(Length::Fixed(sizing::SHELL_WIDTH))
        .height(Length::Fill)
        .clip(true)
        .style(styles::container::shell(colors));

    Container::new(shell)
        .center_x(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .into()
}
