use std::rc::Rc;

use yew::prelude::*;

use super::icons::{icon_bar_chart, icon_dollar, icon_home, icon_wallet};
use super::{use_layout_mode, StatisticsDashboard};
use crate::config::DashboardConfig;
use crate::format::format_balance;
use crate::store::{select_total_balance, select_user, Store};

struct NavItem {
    label: &'static str,
    active: bool,
    icon: fn() -> Html,
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    username: String,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 bg-[#173E63] rounded-full flex items-center justify-center text-white">
                    { icon_wallet() }
                </div>
                <span class="text-[#173E63] text-xl font-black tracking-tight">{"Money Guard"}</span>
            </div>
            <span class="text-sm font-medium text-[#173E63]">{ props.username.clone() }</span>
        </header>
    }
}

#[function_component(Navigation)]
fn navigation() -> Html {
    let nav_items = vec![
        NavItem {
            label: "Home",
            active: false,
            icon: icon_home,
        },
        NavItem {
            label: "Statistics",
            active: true,
            icon: icon_bar_chart,
        },
        NavItem {
            label: "Currency",
            active: false,
            icon: icon_dollar,
        },
    ];

    html! {
        <nav class="space-y-2">
            { for nav_items.iter().map(|item| {
                let class_name = if item.active {
                    "flex items-center gap-3 px-4 py-3 rounded-xl text-[13px] font-bold bg-[#B2CBDE] text-[#173E63]"
                } else {
                    "flex items-center gap-3 px-4 py-3 rounded-xl text-[13px] font-medium text-slate-300"
                };
                html! {
                    <div class={class_name}>
                        <span class="shrink-0">{ (item.icon)() }</span>
                        <span class="truncate">{ item.label }</span>
                    </div>
                }
            }) }
        </nav>
    }
}

#[derive(Properties, PartialEq)]
struct CurrencyPanelProps {
    currency_symbol: String,
    tooltip_currency_symbol: String,
}

#[function_component(CurrencyPanel)]
fn currency_panel(props: &CurrencyPanelProps) -> Html {
    html! {
        <div class="rounded-xl bg-white/10 p-4 text-[13px] text-slate-200 space-y-2">
            <h4 class="font-bold text-white">{"Currency"}</h4>
            <div class="flex justify-between">
                <span>{"Amounts"}</span>
                <span>{ props.currency_symbol.clone() }</span>
            </div>
            <div class="flex justify-between">
                <span>{"Chart tooltips"}</span>
                <span>{ props.tooltip_currency_symbol.clone() }</span>
            </div>
        </div>
    }
}

#[function_component(StatisticsPage)]
pub fn statistics_page() -> Html {
    let config = use_context::<Rc<DashboardConfig>>().unwrap_or_default();
    let store = use_context::<Rc<Store>>().unwrap_or_default();
    let layout = use_layout_mode(config.narrow_breakpoint);

    let username = select_user(&store)
        .map(|user| user.username.clone())
        .unwrap_or_default();
    let total_balance = format_balance(
        select_total_balance(&store),
        &config.balance_currency_symbol,
    );

    html! {
        <div class="min-h-screen bg-background">
            <Header username={username} />
            <div class="flex flex-col md:flex-row">
                <aside class="md:w-[280px] bg-[#173E63] p-6 space-y-6">
                    <Navigation />
                    <div class="rounded-xl bg-white/10 p-4">
                        <h3 class="text-[12px] font-bold tracking-widest text-slate-300">{"YOUR BALANCE"}</h3>
                        <div class="text-2xl font-bold text-white mt-1">{ total_balance }</div>
                    </div>
                    if !layout.is_narrow() {
                        <CurrencyPanel
                            currency_symbol={config.currency_symbol.clone()}
                            tooltip_currency_symbol={config.tooltip_currency_symbol.clone()}
                        />
                    }
                </aside>
                <main class="flex-1 p-6 max-w-7xl">
                    <h1 class="text-2xl font-bold text-foreground pb-4">{"Statistics"}</h1>
                    <StatisticsDashboard />
                </main>
            </div>
        </div>
    }
}
