// SPDX-License-Identifier: MPL-2.0
//! User interface components.

pub mod balances;
pub mod design_tokens;
pub mod remote_svg;
pub mod styles;
pub mod tab_bar;
pub mod theming;
