// SPDX-License-Identifier: MPL-2.0
//! Balances screen: currency cards, page dots and recent transactions.
//!
//! The content is fixed. The only moving parts are the three flag graphics,
//! each fetched by its own loader.

use crate::config::AssetsConfig;
use crate::fonts::Typefaces;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::remote_svg::{self, RemoteSvg};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::alignment::Vertical;
use iced::widget::{Column, Container, Row, Space, Text};
use iced::{Element, Length, Padding, Size, Task};

/// Number of balance pages shown by the pager.
pub const PAGER_TOTAL: usize = 3;

/// Page the pager marks as current.
pub const PAGER_ACTIVE: usize = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    Us,
    Eu,
    Uk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Balance {
    pub flag: Flag,
    /// Translation key of the caption.
    pub caption_key: &'static str,
    pub amount: &'static str,
    pub code: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transaction {
    pub title: &'static str,
    /// Signed amount; a leading `-` marks money going out.
    pub amount: &'static str,
    pub currency: &'static str,
}

impl Transaction {
    #[must_use]
    pub fn is_outgoing(&self) -> bool {
        is_negative(self.amount)
    }
}

/// Transactions booked on one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Day {
    pub date: &'static str,
    pub transactions: &'static [Transaction],
}

pub const BALANCES: [Balance; 3] = [
    Balance {
        flag: Flag::Us,
        caption_key: "balance-usd-card",
        amount: "240,000.00",
        code: "USD",
    },
    Balance {
        flag: Flag::Eu,
        caption_key: "balance-eur",
        amount: "55,000.00",
        code: "EUR",
    },
    Balance {
        flag: Flag::Uk,
        caption_key: "balance-gbp",
        amount: "250.00",
        code: "GBP",
    },
];

pub const ACTIVITY: [Day; 2] = [
    Day {
        date: "24 Mar 2022",
        transactions: &[
            Transaction {
                title: "Timothee Chalamet",
                amount: "500.00",
                currency: "USD",
            },
            Transaction {
                title: "Bank of China",
                amount: "-500.00",
                currency: "USD",
            },
        ],
    },
    Day {
        date: "02 Mar 2022",
        transactions: &[Transaction {
            title: "HSBC (1234)",
            amount: "-500.00",
            currency: "USD",
        }],
    },
];

/// Whether an amount string denotes an outgoing payment.
#[must_use]
pub fn is_negative(amount: &str) -> bool {
    amount.trim_start().starts_with('-')
}

/// Contextual data needed to render the screen.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub fonts: Typefaces,
}

#[derive(Debug, Clone)]
pub enum Message {
    Flag(Flag, remote_svg::Message),
}

pub struct State {
    us: RemoteSvg,
    eu: RemoteSvg,
    uk: RemoteSvg,
}

impl State {
    /// Creates the screen and the tasks fetching its flags.
    pub fn new(assets: &AssetsConfig) -> (Self, Task<Message>) {
        let size = Size::new(sizing::FLAG, sizing::FLAG);
        let (us, us_task) = RemoteSvg::new(assets.flag_us_url(), size);
        let (eu, eu_task) = RemoteSvg::new(assets.flag_eu_url(), size);
        let (uk, uk_task) = RemoteSvg::new(assets.flag_uk_url(), size);

        let tasks = Task::batch([
            us_task.map(|m| Message::Flag(Flag::Us, m)),
            eu_task.map(|m| Message::Flag(Flag::Eu, m)),
            uk_task.map(|m| Message::Flag(Flag::Uk, m)),
        ]);
        (Self { us, eu, uk }, tasks)
    }

    pub fn update(&mut self, message: Message) {
        match message {
            Message::Flag(flag, message) => {
                self.flag_mut(flag).update(message);
            }
        }
    }

    #[must_use]
    pub fn flag(&self, flag: Flag) -> &RemoteSvg {
        match flag {
            Flag::Us => &self.us,
            Flag::Eu => &self.eu,
            Flag::Uk => &self.uk,
        }
    }

    fn flag_mut(&mut self, flag: Flag) -> &mut RemoteSvg {
        match flag {
            Flag::Us => &mut self.us,
            Flag::Eu => &mut self.eu,
            Flag::Uk => &mut self.uk,
        }
    }

    pub fn view<'a>(&'a self, ctx: ViewContext<'a>) -> Element<'a, Message> {
        let cards = BALANCES.iter().fold(
            Column::new().spacing(spacing::LG),
            |column, balance| column.push(self.balance_card(balance, &ctx)),
        );

        let activity = ACTIVITY
            .iter()
            .fold(Column::new().spacing(spacing::LG), |column, day| {
                column
                    .push(date_chip(day.date, &ctx))
                    .push(day_card(day, &ctx))
            });

        Column::new()
            .push(cards)
            .push(
                Container::new(pager(ctx.colors))
                    .width(Length::Fill)
                    .center_x(Length::Fill)
                    .padding(Padding {
                        top: 18.0,
                        bottom: spacing::LG,
                        ..Padding::ZERO
                    }),
            )
            .push(activity)
            .padding(Padding {
                top: spacing::XL,
                right: spacing::XL,
                bottom: spacing::XXL,
                left: spacing::XL,
            })
            .into()
    }

    fn balance_card<'a>(&'a self, balance: &Balance, ctx: &ViewContext<'a>) -> Element<'a, Message> {
        let flag = balance.flag;
        let graphic = self
            .flag(flag)
            .view(ctx.i18n, ctx.colors)
            .map(move |m| Message::Flag(flag, m));

        let details = Column::new()
            .spacing(spacing::XS)
            .push(
                Text::new(ctx.i18n.tr(balance.caption_key))
                    .size(typography::CAPTION)
                    .font(ctx.fonts.regular())
                    .color(ctx.colors.text_secondary),
            )
            .push(
                Text::new(format!("{} {}", balance.amount, balance.code))
                    .size(typography::AMOUNT)
                    .font(ctx.fonts.demi())
                    .color(ctx.colors.text_primary),
            );

        let row = Row::new()
            .spacing(spacing::MD)
            .align_y(Vertical::Center)
            .push(graphic)
            .push(details);

        Container::new(row)
            .width(Length::Fill)
            .padding(spacing::XL)
            .style(styles::container::card(ctx.colors))
            .into()
    }
}

fn pager<'a>(colors: &ColorScheme) -> Element<'a, Message> {
    (0..PAGER_TOTAL)
        .fold(Row::new().spacing(spacing::MD), |row, index| {
            row.push(
                Container::new(Space::new())
                    .width(Length::Fixed(sizing::PAGER_DOT))
                    .height(Length::Fixed(sizing::PAGER_DOT))
                    .style(styles::container::pager_dot(colors, index == PAGER_ACTIVE)),
            )
        })
        .into()
}

fn date_chip<'a>(date: &'static str, ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let chip = Container::new(
        Text::new(date)
            .size(typography::CHIP)
            .font(ctx.fonts.demi()),
    )
    .padding([spacing::SM, spacing::MD])
    .style(styles::container::date_chip(ctx.colors));

    Container::new(chip).center_x(Length::Fill).into()
}

fn day_card<'a>(day: &Day, ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let mut column = Column::new();
    for (index, transaction) in day.transactions.iter().enumerate() {
        if index > 0 {
            column = column.push(divider(ctx.colors));
        }
        column = column.push(transaction_row(transaction, ctx));
    }

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XL)
        .style(styles::container::card(ctx.colors))
        .into()
}

fn transaction_row<'a>(transaction: &Transaction, ctx: &ViewContext<'_>) -> Element<'a, Message> {
    let label = format!("{} {}", transaction.amount, transaction.currency);
    let amount: Element<'a, Message> = if transaction.is_outgoing() {
        Text::new(label)
            .font(ctx.fonts.demi())
            .color(ctx.colors.text_primary)
            .into()
    } else {
        Container::new(Text::new(label).font(ctx.fonts.demi()))
            .padding([spacing::XS, 10.0])
            .style(styles::container::amount_chip(ctx.colors))
            .into()
    };

    let header = Row::new()
        .spacing(spacing::XL)
        .align_y(Vertical::Center)
        .push(
            Text::new(transaction.title)
                .size(typography::BODY)
                .font(ctx.fonts.demi())
                .color(ctx.colors.text_primary)
                .width(Length::Fill),
        )
        .push(amount);

    Column::new()
        .spacing(spacing::XS)
        .padding([spacing::MD, 0.0])
        .push(header)
        .push(
            Text::new(ctx.i18n.tr("txn-status-completed"))
                .size(typography::CAPTION)
                .font(ctx.fonts.regular())
                .color(ctx.colors.text_secondary),
        )
        .into()
}

fn divider<'a>(colors: &ColorScheme) -> Element<'a, Message> {
    Container::new(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fixed(sizing::DIVIDER))
            .style(styles::container::divider(colors)),
    )
    .padding([spacing::SM, 0.0])
    .into()
}
