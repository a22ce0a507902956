use yew::prelude::*;

use super::icons::icon_chevron_down;

#[derive(Clone, Debug, PartialEq)]
pub struct DropdownOption {
    pub value: String,
    pub label: String,
}

impl DropdownOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Options whose label is the value itself.
    pub fn plain<I, S>(values: I) -> Vec<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        values
            .into_iter()
            .map(|value| {
                let value = value.into();
                Self::new(value.clone(), value)
            })
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct FloatingDropdownProps {
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub on_change: Callback<String>,
    #[prop_or_default]
    pub placeholder: String,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(FloatingDropdown)]
pub fn floating_dropdown(props: &FloatingDropdownProps) -> Html {
    let open = use_state(|| false);
    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let selected = props
        .options
        .iter()
        .find(|option| option.value == props.value)
        .map(|option| option.label.clone());
    let trigger_label = selected.clone().unwrap_or_else(|| props.placeholder.clone());
    let trigger_text = if selected.is_some() {
        "text-[#173E63]"
    } else {
        "text-slate-400"
    };

    html! {
        <div class="relative w-full">
            <button
                type="button"
                class={classes!("w-full", "flex", "items-center", "justify-between", "px-4", "py-2", "rounded-xl", "border", "border-border", "bg-white", "text-sm", trigger_text, props.class.clone())}
                onclick={toggle}
            >
                <span class="truncate">{ trigger_label }</span>
                { icon_chevron_down() }
            </button>
            {
                if *open {
                    html! {
                        <ul class="absolute left-0 right-0 top-12 max-h-60 overflow-y-auto bg-white border border-border rounded-xl shadow-lg z-50">
                            { for props.options.iter().map(|option| {
                                let is_selected = option.value == props.value;
                                let class_name = if is_selected {
                                    "px-4 py-2 text-sm cursor-pointer bg-[#B2CBDE] text-[#173E63] font-bold"
                                } else {
                                    "px-4 py-2 text-sm cursor-pointer text-slate-600 hover:bg-slate-50"
                                };
                                let on_change = props.on_change.clone();
                                let open = open.clone();
                                let value = option.value.clone();
                                html! {
                                    <li key={option.value.clone()} class={class_name} onclick={Callback::from(move |_: MouseEvent| {
                                        open.set(false);
                                        on_change.emit(value.clone());
                                    })}>
                                        { option.label.clone() }
                                    </li>
                                }
                            }) }
                        </ul>
                    }
                } else {
                    html! {}
                }
            }
        </div>
    }
}
