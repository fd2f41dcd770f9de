use crate::api::{AttendanceCategory, AttendanceQuery, AttendanceRecord, DropdownOption, LegendItem};

pub const CHART_TITLE: &str = "Attendance Summary";
pub const CHART_SUBTITLE: &str = "Attendance from 1-12 Dec, 2025";

pub const CHART_HEIGHT_PX: f64 = 140.0;
pub const VALUE_SCALE: f64 = 10.0;
pub const MIN_BAR_HEIGHT_PX: f64 = 12.0;
pub const ZERO_BAR_HEIGHT_PX: f64 = 4.0;

pub const SEGMENT_WIDTH_PX: u32 = 17;
pub const SEGMENT_GAP_PX: u32 = 4;
pub const FILLER_WIDTH_PX: u32 = 14;
pub const WEEKEND_FILLER_HEIGHT_PX: f64 = 12.0;
pub const EMPTY_FILLER_HEIGHT_PX: f64 = 6.0;

/// Y-axis labels, top to bottom.
pub const TIME_LABELS: [&str; 6] = ["11:00", "08:00", "07:00", "06:00", "05:00", "01:00"];

/// Pixel height for one category value; zero is a stub, anything else has a floor.
pub fn bar_height(value: f64) -> f64 {
    if value == 0.0 {
        ZERO_BAR_HEIGHT_PX
    } else {
        (value / VALUE_SCALE * CHART_HEIGHT_PX).max(MIN_BAR_HEIGHT_PX)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BarSegment {
    pub category: AttendanceCategory,
    pub height: f64,
    pub color: &'static str,
    pub gap_after: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FillerKind {
    Weekend,
    Empty,
}

impl FillerKind {
    pub fn height(&self) -> f64 {
        match self {
            FillerKind::Weekend => WEEKEND_FILLER_HEIGHT_PX,
            FillerKind::Empty => EMPTY_FILLER_HEIGHT_PX,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            FillerKind::Weekend => "bg-black",
            FillerKind::Empty => "bg-gray-800",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum BarShape {
    Filler(FillerKind),
    Segments(Vec<BarSegment>),
}

pub fn bar_shape(record: &AttendanceRecord) -> BarShape {
    let active = record.active_categories();
    if active.is_empty() {
        return if record.is_weekend_sentinel() {
            BarShape::Filler(FillerKind::Weekend)
        } else {
            BarShape::Filler(FillerKind::Empty)
        };
    }
    let last = active.len() - 1;
    BarShape::Segments(
        active
            .into_iter()
            .enumerate()
            .map(|(index, category)| BarSegment {
                category,
                height: bar_height(f64::from(record.value(category))),
                color: category.color(),
                gap_after: index < last,
            })
            .collect(),
    )
}

/// Distance from the top of the plot, in percent, for grid line `index` of `count`.
pub fn grid_line_offset(index: usize, count: usize) -> f64 {
    if count < 2 {
        return 0.0;
    }
    index as f64 / (count - 1) as f64 * 100.0
}

pub fn legend_items() -> Vec<LegendItem> {
    AttendanceCategory::ALL.into_iter().map(LegendItem::from).collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Employee,
    WorkHours,
    Period,
    Month,
}

impl FilterKind {
    pub const ALL: [FilterKind; 4] = [
        FilterKind::Employee,
        FilterKind::WorkHours,
        FilterKind::Period,
        FilterKind::Month,
    ];

    pub fn options(&self) -> Vec<DropdownOption> {
        let pairs: &[(&str, &str)] = match self {
            FilterKind::Employee => &[
                ("all", "Select Employee"),
                ("john", "John Doe"),
                ("jane", "Jane Smith"),
            ],
            FilterKind::WorkHours => &[
                ("total", "Total Work Hours"),
                ("regular", "Regular Hours"),
                ("overtime", "Overtime Hours"),
            ],
            FilterKind::Period => &[
                ("10-days", "Previous 10 Days"),
                ("30-days", "Previous 30 Days"),
                ("90-days", "Previous 90 Days"),
            ],
            FilterKind::Month => &[
                ("current", "Current Month"),
                ("last", "Last Month"),
                ("custom", "Custom Range"),
            ],
        };
        pairs
            .iter()
            .map(|(value, label)| DropdownOption::new(value, label))
            .collect()
    }

    pub fn label<'a>(&self, filters: &'a AttendanceQuery) -> &'a str {
        match self {
            FilterKind::Employee => &filters.employee,
            FilterKind::WorkHours => &filters.work_hours,
            FilterKind::Period => &filters.period,
            FilterKind::Month => &filters.month,
        }
    }

    /// Replaces this filter's display label and nothing else.
    pub fn apply(&self, filters: &mut AttendanceQuery, label: String) {
        let slot = match self {
            FilterKind::Employee => &mut filters.employee,
            FilterKind::WorkHours => &mut filters.work_hours,
            FilterKind::Period => &mut filters.period,
            FilterKind::Month => &mut filters.month,
        };
        *slot = label;
    }
}
