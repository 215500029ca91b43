//! Order intent parsing
//!
//! Turns the `--top` / `--order <position>` flags into a normalized
//! [`OrderIntent`]. Parsing is pure: contradictory or malformed input is
//! rejected before any credential lookup or network call happens.

use crate::error::{Result, TodoistError};

pub const CONFLICTING_FLAGS_MESSAGE: &str = "Use either \"--top\" or \"--order <position>\".";
pub const INVALID_ORDER_MESSAGE: &str = "Invalid --order value. Use \"top\" or a positive integer.";

/// Raw ordering flags as supplied on the command line
#[derive(Debug, Clone, Default)]
pub struct OrderOptions {
    pub top: bool,
    pub order: Option<String>,
}

/// Where a task should land among its siblings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OrderIntent {
    Top,
    /// 1-based position, always >= 1
    AtPosition(usize),
}

impl OrderIntent {
    /// The 1-based position this intent resolves to
    pub fn position(&self) -> usize {
        match self {
            OrderIntent::Top => 1,
            OrderIntent::AtPosition(n) => *n,
        }
    }
}

/// Parse ordering flags.
///
/// Returns `Ok(None)` when neither flag carries a value, which leaves the
/// task at its natural end-of-list position.
pub fn parse_order_intent(options: &OrderOptions) -> Result<Option<OrderIntent>> {
    let order_value = options
        .order
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    if options.top && order_value.is_some() {
        return Err(TodoistError::InvalidUsage(
            CONFLICTING_FLAGS_MESSAGE.to_string(),
        ));
    }

    if options.top {
        return Ok(Some(OrderIntent::Top));
    }

    let Some(order_value) = order_value else {
        return Ok(None);
    };

    if order_value.eq_ignore_ascii_case("top") {
        return Ok(Some(OrderIntent::Top));
    }

    if !order_value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TodoistError::InvalidUsage(INVALID_ORDER_MESSAGE.to_string()));
    }

    // All digits, so the only parse failure left is overflow; such a
    // position is past any real sibling list and clamps to the end.
    let position = order_value.parse::<usize>().unwrap_or(usize::MAX);
    if position < 1 {
        return Err(TodoistError::InvalidUsage(INVALID_ORDER_MESSAGE.to_string()));
    }

    Ok(Some(OrderIntent::AtPosition(position)))
}
