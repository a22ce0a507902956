use std::rc::Rc;

use yew::functional::Reducible;

use crate::config::DashboardConfig;
use crate::model::Period;
use crate::viewport::LayoutMode;

/// UI state owned by the statistics dashboard: the picked period and the
/// active layout.
#[derive(Clone, Debug, PartialEq)]
pub struct StatisticsViewModel {
    pub period: Period,
    pub layout: LayoutMode,
    narrow_breakpoint: u32,
}

impl StatisticsViewModel {
    pub fn new(config: &DashboardConfig, viewport_width: Option<f64>) -> Self {
        let layout = viewport_width
            .map(|width| config.layout_for(width))
            .unwrap_or(LayoutMode::Wide);
        Self {
            period: config.default_period(),
            layout,
            narrow_breakpoint: config.narrow_breakpoint,
        }
    }

    pub fn set_month(&mut self, month: String) {
        self.period.month = month;
    }

    pub fn set_year(&mut self, year: String) {
        self.period.year = year;
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.layout = LayoutMode::from_width(width, self.narrow_breakpoint);
    }
}

pub enum ViewModelAction {
    SelectMonth(String),
    SelectYear(String),
    Resize(f64),
}

impl Reducible for StatisticsViewModel {
    type Action = ViewModelAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ViewModelAction::SelectMonth(month) => next.set_month(month),
            ViewModelAction::SelectYear(year) => next.set_year(year),
            ViewModelAction::Resize(width) => next.set_viewport_width(width),
        }
        if next == *self {
            return self;
        }
        Rc::new(next)
    }
}
