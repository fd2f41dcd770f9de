use crate::components::sidebar::nav_item_for_section;
use leptos::*;

pub fn section_title(section: &str) -> String {
    nav_item_for_section(section)
        .map(|item| item.label.to_string())
        .unwrap_or_else(|| section.replace('-', " "))
}

/// Stand-in for dashboard sub-pages that have no content yet.
#[component]
pub fn SectionPlaceholder(#[prop(into)] section: Signal<String>) -> impl IntoView {
    view! {
        <div class="bg-white rounded-lg shadow p-12 text-center">
            <i class="fas fa-tools text-4xl text-gray-300 mb-4"></i>
            <h1 class="text-2xl font-bold text-gray-900">{move || section_title(&section.get())}</h1>
            <p class="mt-2 text-sm text-gray-500">"This section is coming soon."</p>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::section_title;

    #[test]
    fn titles_come_from_navigation() {
        assert_eq!(section_title("employee-directory"), "Employee Directory");
        assert_eq!(section_title("payroll-runs"), "payroll runs");
    }
}
