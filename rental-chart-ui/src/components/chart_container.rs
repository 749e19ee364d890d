//! Chart container component with loading and empty states.

use dioxus::prelude::*;

/// Props for ChartContainer
#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// The DOM id for the chart container (D3 will render into this)
    pub id: String,
    /// Whether the data is still loading
    #[props(default = false)]
    pub loading: bool,
    /// Whether the loaded dataset is empty
    #[props(default = false)]
    pub empty: bool,
    /// Optional minimum height in pixels
    #[props(default = 300)]
    pub min_height: u32,
    /// Fixed width in pixels; 0 fills the parent
    #[props(default = 0)]
    pub width: u32,
}

/// A container div for D3.js charts with loading and empty-data overlays.
#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let width = if props.width > 0 {
        format!("{}px", props.width)
    } else {
        "100%".to_string()
    };
    let style = format!(
        "min-height: {}px; position: relative; width: {}; overflow-x: auto;",
        props.min_height, width
    );

    rsx! {
        div {
            style: "{style}",
            if props.loading {
                div {
                    style: "position: absolute; top: 50%; left: 50%; transform: translate(-50%, -50%); color: #666;",
                    "차트를 불러오는 중..."
                }
            } else if props.empty {
                div {
                    style: "position: absolute; top: 8px; right: 8px; font-size: 12px; color: #999;",
                    "표시할 데이터가 없습니다."
                }
            }
            div {
                id: "{props.id}",
                style: "width: 100%;",
            }
        }
    }
}
