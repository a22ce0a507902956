use std::rc::Rc;

use wallet_stats::components::{App, AppProps};

fn main() {
    let (config, store) = wallet_stats::init();
    yew::Renderer::<App>::with_props(AppProps {
        config: Rc::new(config),
        store: Rc::new(store),
    })
    .render();
}
