mod app;
mod dashboard;
mod doughnut;
mod dropdown;
mod hooks;
mod icons;
mod page;

pub use app::{App, AppProps};
pub use dashboard::StatisticsDashboard;
pub use doughnut::{Doughnut, DoughnutProps};
pub use dropdown::{DropdownOption, FloatingDropdown, FloatingDropdownProps};
pub use hooks::{use_layout_mode, use_viewport_width};
pub use page::StatisticsPage;
