use crate::models::itinerary::ItineraryRecord;

/// Render a stored itinerary as a standalone Markdown document.
pub fn render_markdown(record: &ItineraryRecord) -> String {
    let mut out = String::new();

    out.push_str(&format!("# {} Itinerary\n\n", record.destination));
    out.push_str(&format!(
        "**Dates:** {} to {}\n\n",
        record.start_date, record.end_date
    ));

    if !record.itinerary.overview.is_empty() {
        out.push_str("## Overview\n\n");
        out.push_str(&record.itinerary.overview);
        out.push_str("\n\n");
    }

    for day in &record.itinerary.days {
        if day.title.is_empty() {
            out.push_str(&format!("## Day {}\n\n", day.day));
        } else {
            out.push_str(&format!("## Day {}: {}\n\n", day.day, day.title));
        }

        push_section(&mut out, "Morning", &day.morning);
        push_section(&mut out, "Afternoon", &day.afternoon);
        push_section(&mut out, "Evening", &day.evening);
        push_section(&mut out, "Food", &day.food);
        push_section(&mut out, "Notes", &day.notes);
        out.push('\n');
    }

    out
}

fn push_section(out: &mut String, label: &str, text: &str) {
    if !text.is_empty() {
        out.push_str(&format!("- **{}:** {}\n", label, text));
    }
}
