/// Plain-text rendering of controller state
use crate::controller::LaunchListController;
use crate::domain::SortDirection;
use crate::links::populated_links;

const DETAILS_WIDTH: usize = 60;

/// Render the launch table, expanded link panels and pagination footer.
///
/// Pure function of controller state; all I/O stays in the caller.
pub fn render_table<S>(controller: &LaunchListController<S>) -> String {
    let mut out = String::new();

    let date_heading = match controller.sort() {
        Some(SortDirection::Ascending) => "Date (UTC) ^",
        Some(SortDirection::Descending) => "Date (UTC) v",
        None => "Date (UTC)",
    };
    out.push_str(&format!(
        "  {:<8} {:<17} {:<14} {}\n",
        "Flight", date_heading, "Rocket", "Details"
    ));

    for launch in controller.launches() {
        let marker = if controller.is_highlighted(&launch.id) {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!(
            "{} {:<8} {:<17} {:<14} {}  [{}]\n",
            marker,
            format!("#{}", launch.flight_number),
            launch.date_utc.format("%Y-%m-%d %H:%M"),
            launch.rocket.name,
            ellipsize(launch.details.as_deref().unwrap_or("-")),
            launch.id,
        ));

        if controller.is_expanded(&launch.id) {
            let links = populated_links(&launch.links);
            if links.is_empty() {
                out.push_str("      (no media links)\n");
            } else {
                for link in links {
                    out.push_str(&format!("      {:<18} {}\n", link.label, link.path));
                }
            }
        }
    }

    out.push_str(&render_footer(controller));
    out
}

/// Pagination footer, e.g. `Showing 6-10 of 12 (page 2/3)`.
pub fn render_footer<S>(controller: &LaunchListController<S>) -> String {
    let pagination = controller.pagination();
    if pagination.total_docs == 0 {
        return "No launches to display\n".to_string();
    }

    let mut footer = format!(
        "Showing {}-{} of {} (page {}/{})",
        controller.start_index(),
        controller.end_index(),
        pagination.total_docs,
        pagination.page,
        pagination.total_pages,
    );
    if pagination.has_prev_page {
        footer.push_str("  [p]rev");
    }
    if pagination.has_next_page {
        footer.push_str("  [n]ext");
    }
    footer.push('\n');
    footer
}

fn ellipsize(text: &str) -> String {
    if text.chars().count() <= DETAILS_WIDTH {
        return text.to_string();
    }
    let cut: String = text.chars().take(DETAILS_WIDTH - 3).collect();
    format!("{cut}...")
}
