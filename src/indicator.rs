use dioxus::prelude::*;

use crate::provider::use_ws_status;
use crate::status::StatusVisual;

const DOT_BASE: &str = "inline-block w-3 h-3 rounded-full border border-white/60 self-center";

#[derive(Props, Clone, PartialEq)]
pub struct WebSocketStatusProps {
    /// Extra classes merged after the base dot classes.
    #[props(optional)]
    pub class: Option<String>,
    /// Inline style overrides, appended after the computed background.
    #[props(optional)]
    pub style: Option<String>,
}

/// Status dot. Stateless: reads the debounced status from context and looks
/// it up in the fixed visual table, `title` carrying the human-readable text.
#[component]
pub fn WebSocketStatus(props: WebSocketStatusProps) -> Element {
    let visual = StatusVisual::lookup(use_ws_status());

    let class = match &props.class {
        Some(extra) if !extra.is_empty() => format!("{} {}", DOT_BASE, extra),
        _ => DOT_BASE.to_string(),
    };
    let style = match &props.style {
        Some(extra) if !extra.is_empty() => format!("background: {}; {}", visual.color, extra),
        _ => format!("background: {};", visual.color),
    };

    rsx! {
        span { class, style, title: "{visual.label}" }
    }
}

#[derive(Props, Clone, PartialEq)]
pub struct WebSocketStatusBadgeProps {
    #[props(optional)]
    pub class: Option<String>,
}

/// Dot plus visible label, for places with room for more than a tooltip.
#[component]
pub fn WebSocketStatusBadge(props: WebSocketStatusBadgeProps) -> Element {
    let visual = StatusVisual::lookup(use_ws_status());

    let base = "flex items-center space-x-2";
    let class = match &props.class {
        Some(extra) if !extra.is_empty() => format!("{} {}", base, extra),
        _ => base.to_string(),
    };

    rsx! {
        div { class,
            span {
                class: DOT_BASE,
                style: "background: {visual.color};",
                title: "{visual.label}",
            }
            span { class: "text-sm font-medium", "{visual.label}" }
        }
    }
}
