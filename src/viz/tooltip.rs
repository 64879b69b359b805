//! Tooltip controller: a pure reducer from pointer events to the (single) tooltip.

use serde::Serialize;

use super::types::{Point, TOOLTIP_OFFSET};
use crate::format::format_currency_full;

/// A visible tooltip in chart-local coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Tooltip {
    pub x: f64,
    pub y: f64,
    pub content: String,
}

/// At most one tooltip per chart instance.
pub type TooltipState = Option<Tooltip>;

/// Pointer input for the reducer, already resolved to tooltip content.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    Move {
        client: Point,
        container_origin: Point,
        content: String,
    },
    Leave,
}

/// Compute the next tooltip. The latest event always wins; the previous state is never consulted.
pub fn reduce(_state: &TooltipState, event: PointerEvent) -> TooltipState {
    match event {
        PointerEvent::Move {
            client,
            container_origin,
            content,
        } => Some(Tooltip {
            x: client.x - container_origin.x + TOOLTIP_OFFSET,
            y: client.y - container_origin.y + TOOLTIP_OFFSET,
            content,
        }),
        PointerEvent::Leave => None,
    }
}

/// Source values of a hovered primitive, handed to a [`TooltipFormat`].
#[derive(Debug, Clone, PartialEq)]
pub enum HoverSource<'a> {
    Bar {
        series: &'a str,
        category: &'a str,
        value: f64,
    },
    Row {
        label: &'a str,
        value: f64,
    },
}

/// Caller-replaceable tooltip text builder.
pub type TooltipFormat = fn(&HoverSource<'_>) -> String;

/// `"Hotel · Feb: ₹200"` for bars, `"Travel: ₹1,20,000"` for rows.
pub fn default_tooltip_format(source: &HoverSource<'_>) -> String {
    match source {
        HoverSource::Bar {
            series,
            category,
            value,
        } => format!("{series} · {category}: {}", format_currency_full(Some(*value))),
        HoverSource::Row { label, value } => {
            format!("{label}: {}", format_currency_full(Some(*value)))
        }
    }
}
