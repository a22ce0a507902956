use std::rc::Rc;

use yew::prelude::*;

use super::StatisticsPage;
use crate::config::DashboardConfig;
use crate::store::Store;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<DashboardConfig>,
    pub store: Rc<Store>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    html! {
        <ContextProvider<Rc<DashboardConfig>> context={props.config.clone()}>
            <ContextProvider<Rc<Store>> context={props.store.clone()}>
                <StatisticsPage />
            </ContextProvider<Rc<Store>>>
        </ContextProvider<Rc<DashboardConfig>>>
    }
}
