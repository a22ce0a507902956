use std::rc::Rc;

use yew::prelude::*;

use super::{use_viewport_width, Doughnut, DropdownOption, FloatingDropdown};
use crate::chart::FALLBACK_COLOR;
use crate::config::DashboardConfig;
use crate::format::{format_balance, format_currency};
use crate::model::MONTHS;
use crate::statistics::{
    aggregate, category_name, empty_message, expense_transactions, filter_by_period,
};
use crate::store::{select_transaction_categories, select_transactions, Store};
use crate::view_model::{StatisticsViewModel, ViewModelAction};
use crate::viewport::{viewport_width, LayoutMode};

fn color_box(color: &str) -> Html {
    html! {
        <span class="inline-block w-6 h-6 rounded shrink-0" style={format!("background-color: {}", color)}></span>
    }
}

#[function_component(StatisticsDashboard)]
pub fn statistics_dashboard() -> Html {
    let config = use_context::<Rc<DashboardConfig>>().unwrap_or_default();
    let store = use_context::<Rc<Store>>().unwrap_or_default();

    let view_model = {
        let config = config.clone();
        use_reducer(move || StatisticsViewModel::new(&config, viewport_width()))
    };

    let width = use_viewport_width();
    {
        let dispatcher = view_model.dispatcher();
        use_effect_with_deps(
            move |width| {
                if let Some(width) = *width {
                    dispatcher.dispatch(ViewModelAction::Resize(width));
                }
                || ()
            },
            width,
        );
    }

    let period = view_model.period.clone();
    let layout = view_model.layout;

    let statistics = use_memo(
        |(store, period)| {
            aggregate(
                select_transactions(store),
                select_transaction_categories(store),
                period,
            )
        },
        (store.clone(), period.clone()),
    );
    let expenses = use_memo(
        |(store, period)| expense_transactions(&filter_by_period(select_transactions(store), period)),
        (store.clone(), period.clone()),
    );

    let on_month = {
        let dispatcher = view_model.dispatcher();
        Callback::from(move |month: String| dispatcher.dispatch(ViewModelAction::SelectMonth(month)))
    };
    let on_year = {
        let dispatcher = view_model.dispatcher();
        Callback::from(move |year: String| dispatcher.dispatch(ViewModelAction::SelectYear(year)))
    };

    let symbol = config.currency_symbol.clone();
    let digits = layout.fraction_digits();
    let categories = select_transaction_categories(&store);

    let chart = html! {
        <Doughnut
            data={statistics.chart_data.clone()}
            currency_symbol={config.tooltip_currency_symbol.clone()}
            center_label={format_balance(statistics.balance, &symbol)}
        />
    };

    let trigger_class = layout.trigger_class();
    let filters = html! {
        <div class="grid grid-cols-2 gap-4">
            <FloatingDropdown
                options={DropdownOption::plain(MONTHS)}
                value={period.month.clone()}
                on_change={on_month}
                placeholder="Select month"
                class={classes!(trigger_class)}
            />
            <FloatingDropdown
                options={DropdownOption::plain(config.years.iter().cloned())}
                value={period.year.clone()}
                on_change={on_year}
                placeholder="Select year"
                class={classes!(trigger_class)}
            />
        </div>
    };

    let table = if let Some(message) = empty_message(&period, &expenses) {
        html! {
            <div class="py-10 text-center text-sm text-muted-foreground">
                <p>{ message }</p>
            </div>
        }
    } else {
        match layout {
            LayoutMode::Wide => html! {
                <div class="rounded-[10px] overflow-hidden">
                    <div class="grid grid-cols-3 px-5 py-3 bg-white/60 text-[13px] font-bold text-[#173E63]">
                        <span>{"Category"}</span>
                        <span>{"Comment"}</span>
                        <span class="text-right">{"Amount"}</span>
                    </div>
                    { for expenses.iter().map(|tx| {
                        let name = category_name(tx.category_id.as_deref(), categories);
                        let color = statistics.color_for(&name).to_string();
                        html! {
                            <div key={tx.id.clone()} class="grid grid-cols-3 items-center px-5 py-3 border-b border-border text-sm">
                                <span class="flex items-center gap-3">{ color_box(&color) }{ name }</span>
                                <span class="text-muted-foreground truncate">{ tx.comment.clone() }</span>
                                <span class="text-right font-semibold text-red-600">
                                    { format_currency(tx.amount.abs(), &symbol, digits) }
                                </span>
                            </div>
                        }
                    }) }
                </div>
            },
            LayoutMode::Narrow => html! {
                <div class="rounded-[10px] overflow-hidden">
                    <div class="flex justify-between px-5 py-3 bg-white/60 text-[13px] font-bold text-[#173E63]">
                        <span>{"Category"}</span>
                        <span>{"Sum"}</span>
                    </div>
                    { for statistics.category_expenses.iter().enumerate().map(|(idx, (name, amount))| {
                        let color = statistics
                            .chart_data
                            .color_at(idx)
                            .unwrap_or(FALLBACK_COLOR)
                            .to_string();
                        html! {
                            <div key={name.to_string()} class="flex items-center justify-between px-5 py-3 border-b border-border text-sm">
                                <span class="flex items-center gap-3">{ color_box(&color) }{ name.to_string() }</span>
                                <span class="font-semibold">{ format_currency(amount, &symbol, digits) }</span>
                            </div>
                        }
                    }) }
                </div>
            },
        }
    };

    let totals = html! {
        <div class="space-y-3 px-5 pt-2 text-sm font-bold">
            <div class="flex justify-between">
                <span class="text-[#173E63]">{"Expenses:"}</span>
                <span class="text-red-600">{ format_currency(statistics.total_expense, &symbol, digits) }</span>
            </div>
            <div class="flex justify-between">
                <span class="text-[#173E63]">{"Income:"}</span>
                <span class="text-[#1D617A]">{ format_currency(statistics.total_income, &symbol, digits) }</span>
            </div>
        </div>
    };

    match layout {
        LayoutMode::Wide => html! {
            <div class="grid grid-cols-2 gap-8 items-start">
                <div class="pt-4">{ chart }</div>
                <div class="space-y-5">
                    { filters }
                    { table }
                    { totals }
                </div>
            </div>
        },
        LayoutMode::Narrow => html! {
            <div class="flex flex-col gap-6">
                { chart }
                { filters }
                { table }
                { totals }
            </div>
        },
    }
}
