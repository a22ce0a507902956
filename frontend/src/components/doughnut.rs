use yew::prelude::*;

use crate::chart::{donut_slices, tooltip_label, ChartData, CUTOUT, FALLBACK_COLOR};

const VIEW_RADIUS: f64 = 100.0;

#[derive(Properties, PartialEq)]
pub struct DoughnutProps {
    pub data: ChartData,
    /// Symbol used inside slice tooltips.
    pub currency_symbol: String,
    /// Text drawn in the hole of the ring.
    #[prop_or_default]
    pub center_label: String,
}

#[function_component(Doughnut)]
pub fn doughnut(props: &DoughnutProps) -> Html {
    let hovered = use_state(|| None::<usize>);

    let dataset = props.data.dataset().cloned().unwrap_or_default();
    let total = props.data.total();
    // Leave room for the hover push-out and the stroke.
    let outer = VIEW_RADIUS - f64::from(dataset.hover_offset) - f64::from(dataset.border_width);
    let slices = donut_slices(&dataset.data, outer, CUTOUT);

    html! {
        <div class="relative w-full max-w-[320px] aspect-square mx-auto">
            <svg viewBox="-100 -100 200 200" class="w-full h-full">
                { for slices.iter().map(|slice| {
                    let idx = slice.index;
                    let fill = dataset
                        .background_color
                        .get(idx)
                        .cloned()
                        .unwrap_or_else(|| FALLBACK_COLOR.to_string());
                    let stroke = dataset.border_color.get(idx).cloned().unwrap_or_else(|| fill.clone());
                    let label = props.data.labels.get(idx).cloned().unwrap_or_default();
                    let value = dataset.data.get(idx).copied().unwrap_or_default();
                    let (dx, dy) = if *hovered == Some(idx) {
                        slice.offset(f64::from(dataset.hover_offset))
                    } else {
                        (0.0, 0.0)
                    };
                    let onmouseenter = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(Some(idx)))
                    };
                    let onmouseleave = {
                        let hovered = hovered.clone();
                        Callback::from(move |_: MouseEvent| hovered.set(None))
                    };

                    html! {
                        <path
                            key={idx}
                            d={slice.path.clone()}
                            fill={fill}
                            stroke={stroke}
                            stroke-width={dataset.border_width.to_string()}
                            transform={format!("translate({:.3} {:.3})", dx, dy)}
                            {onmouseenter}
                            {onmouseleave}
                        >
                            <title>{ tooltip_label(&label, value, total, &props.currency_symbol) }</title>
                        </path>
                    }
                }) }
            </svg>
            <div class="absolute inset-0 flex items-center justify-center pointer-events-none">
                <span class="text-xl font-bold text-[#173E63]">{ props.center_label.clone() }</span>
            </div>
        </div>
    }
}
