use std::sync::OnceLock;

use regex::Regex;
use serde_json::Value;

use crate::models::itinerary::{Day, Itinerary};

/// Deterministic chat-edit engine, used whenever the AI path fails.
///
/// The user message runs through a fixed sequence of keyword-triggered
/// passes; more than one may fire, and each later pass sees the output of
/// the earlier ones. The rules are intentionally kept as a flat ordered
/// list so each one stays independently testable.
///
/// Preferences are never changed on this path; callers reuse the input.

pub struct FallbackEdit {
    pub response_message: String,
    pub updated_itinerary: Itinerary,
}

const FALLBACK_SUFFIX: &str =
    "(The AI assistant is temporarily unavailable, so I applied these quick edits directly.)";

const BUDGET_NOTES: &str =
    "Budget tips: look for lunch specials, free walking tours, and day passes for public transport.";

const ADD_DAY_TRIGGERS: [&str; 5] = [
    "add day",
    "extend trip",
    "one more day",
    "extra day",
    "additional day",
];

const LUXURY_QUALIFIERS: [&str; 4] = ["high", "luxury", "expensive", "upgrade"];
const BUDGET_QUALIFIERS: [&str; 4] = ["low", "cheap", "budget", "save"];

pub fn apply_fallback_edit(
    user_message: &str,
    itinerary: &Itinerary,
    preferences: &Value,
) -> FallbackEdit {
    let msg = user_message.to_lowercase();
    let destination = preferences
        .get("destination")
        .and_then(Value::as_str)
        .unwrap_or("your destination")
        .to_string();

    let mut updated = itinerary.clone();
    let mut change_notes: Vec<String> = Vec::new();
    let mut added_relax_day = false;
    let mut targeted_day_edit = false;

    // Pass 1: add a day.
    if ADD_DAY_TRIGGERS.iter().any(|t| msg.contains(t)) && !updated.days.is_empty() {
        let count = updated.days.len() as u32;
        let new_number = match mentioned_day_number(&msg) {
            // An explicit "day 7" beyond the current count wins; it is
            // appended as-is, so the day field may not match list position.
            Some(n) if n > count => n,
            _ => count + 1,
        };

        let new_day = if msg.contains("relax") {
            added_relax_day = true;
            relaxation_day(new_number, &destination)
        } else {
            exploration_day(new_number, &destination)
        };
        updated.days.push(new_day);

        updated
            .overview
            .push_str(&format!(" Extended to {} days.", updated.days.len()));
        change_notes.push(format!("Added day {} to the itinerary", new_number));
    }

    // Pass 2: targeted single-day modification.
    if let Some(n) = targeted_day_number(&msg) {
        if n >= 1 && (n as usize) <= updated.days.len() {
            let index = (n - 1) as usize;
            if msg.contains("relax") || msg.contains("slow") {
                updated.days[index] = relaxation_day(n, &destination);
                change_notes.push(format!("Reworked day {} into a relaxation day", n));
                targeted_day_edit = true;
            } else if msg.contains("luxury") || msg.contains("high") {
                upgrade_day_to_luxury(&mut updated.days[index]);
                change_notes.push(format!("Upgraded day {} with luxury options", n));
                targeted_day_edit = true;
            }
        }
    }

    // Pass 3: pacing adjustment on the day before a newly added rest day.
    if (msg.contains("accordingly") || msg.contains("update"))
        && added_relax_day
        && updated.days.len() >= 2
    {
        let index = updated.days.len() - 2;
        let day = &mut updated.days[index];
        if day.morning.to_lowercase().contains("hike")
            || day.notes.to_lowercase().contains("busy")
        {
            day.notes = format!(
                "Pacing adjusted: keep this day light ahead of the rest day. {}",
                day.notes
            );
            change_notes.push(format!("Adjusted pacing notes on day {}", day.day));
        }
    }

    // Pass 4: whole-itinerary budget shift. Skipped when a single day was
    // already targeted, so "update day 2 to be luxury" leaves the rest of
    // the trip untouched.
    if !targeted_day_edit && (msg.contains("budget") || msg.contains("luxury")) {
        if LUXURY_QUALIFIERS.iter().any(|q| msg.contains(q)) {
            for day in updated.days.iter_mut() {
                upgrade_day_to_luxury(day);
            }
            change_notes.push("Upgraded the whole itinerary to luxury options".to_string());
        } else if BUDGET_QUALIFIERS.iter().any(|q| msg.contains(q)) {
            for day in updated.days.iter_mut() {
                downgrade_day_to_budget(day);
            }
            change_notes
                .push("Switched the whole itinerary to budget-friendly options".to_string());
        }
    }

    let response_message = if change_notes.is_empty() {
        format!(
            "I received your message: \"{}\". I could not match it to a quick edit, so the itinerary is unchanged for now.",
            user_message
        )
    } else {
        format!("{}. {}", change_notes.join("; "), FALLBACK_SUFFIX)
    };

    FallbackEdit {
        response_message,
        updated_itinerary: updated,
    }
}

/// First "day <N>" mention anywhere in the message.
fn mentioned_day_number(msg: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"day\s*(\d+)").unwrap());
    re.captures(msg)?.get(1)?.as_str().parse().ok()
}

/// "update/modify/change day <N>" target, if present.
fn targeted_day_number(msg: &str) -> Option<u32> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"(?:update|modify|change)\s+day\s*(\d+)").unwrap());
    re.captures(msg)?.get(1)?.as_str().parse().ok()
}

/// Fully-formed rest day. Overwrite-based, so applying it twice to the
/// same slot is a no-op beyond the first application.
fn relaxation_day(number: u32, destination: &str) -> Day {
    Day {
        day: number,
        title: format!("Relaxation Day {}", number),
        morning: format!(
            "Sleep in, then enjoy a slow breakfast and an easy stroll through a quiet part of {}.",
            destination
        ),
        afternoon: "Spa or wellness session, followed by downtime at a scenic cafe.".to_string(),
        evening: "Relaxed dinner near your accommodation and an early night.".to_string(),
        food: "Light, healthy options: fresh juices, salads, and a calm sit-down dinner."
            .to_string(),
        notes: "A deliberately slow day to recharge for the rest of the trip.".to_string(),
    }
}

fn exploration_day(number: u32, destination: &str) -> Day {
    Day {
        day: number,
        title: format!("Extra Day in {}", destination),
        morning: format!("Free morning to revisit favorite spots in {}.", destination),
        afternoon: "Explore a neighborhood you have not seen yet, with time for souvenir shopping."
            .to_string(),
        evening: "Casual dinner and a final evening walk.".to_string(),
        food: "Try a local dish you have not had yet.".to_string(),
        notes: "Flexible day, rearrange freely around energy levels.".to_string(),
    }
}

const LUXURY_SWAPS: [(&str, &str); 8] = [
    ("hotel", "five-star hotel"),
    ("lodging", "luxury suite"),
    ("tour", "private guided tour"),
    ("market", "artisan market visit with a personal shopper"),
    ("museum", "museum visit with a private curator"),
    ("beach", "private beach club"),
    ("sightseeing", "chauffeured sightseeing"),
    ("show", "front-row show"),
];

const LUXURY_FOOD_SWAPS: [(&str, &str); 3] = [
    ("street food", "gourmet tasting menu"),
    ("dining", "fine dining"),
    ("restaurant", "award-winning restaurant"),
];

// Order matters: "private tour" must be rewritten before the bare
// "private" rule fires.
const BUDGET_SWAPS: [(&str, &str); 5] = [
    ("luxury", "comfortable"),
    ("private tour", "self-guided tour"),
    ("private", "group"),
    ("vip", "standard"),
    ("car", "public transport"),
];

/// A keyword substitution compiled once; matching is case-insensitive.
struct Swap {
    pattern: Regex,
    replacement: &'static str,
}

fn compile_swaps(table: &[(&'static str, &'static str)]) -> Vec<Swap> {
    table
        .iter()
        .map(|&(from, to)| Swap {
            pattern: Regex::new(&format!("(?i){}", regex::escape(from))).unwrap(),
            replacement: to,
        })
        .collect()
}

fn luxury_swaps() -> &'static [Swap] {
    static LOCK: OnceLock<Vec<Swap>> = OnceLock::new();
    LOCK.get_or_init(|| compile_swaps(&LUXURY_SWAPS))
}

fn luxury_food_swaps() -> &'static [Swap] {
    static LOCK: OnceLock<Vec<Swap>> = OnceLock::new();
    LOCK.get_or_init(|| compile_swaps(&LUXURY_FOOD_SWAPS))
}

fn budget_swaps() -> &'static [Swap] {
    static LOCK: OnceLock<Vec<Swap>> = OnceLock::new();
    LOCK.get_or_init(|| compile_swaps(&BUDGET_SWAPS))
}

/// Upgrade one day in place: swap known activity keywords for opulent
/// equivalents, fall back to generic "exclusive experience" phrasing when
/// nothing matches, and prepend a VIP note. Food is only rewritten when a
/// dining keyword is present.
fn upgrade_day_to_luxury(day: &mut Day) {
    for field in [&mut day.morning, &mut day.afternoon, &mut day.evening] {
        let (text, matched) = swap_keywords(field, luxury_swaps());
        *field = if matched {
            text
        } else if text.is_empty() {
            "Exclusive experience arranged by your concierge.".to_string()
        } else {
            format!("Exclusive experience: {}", text)
        };
    }

    let (food, matched) = swap_keywords(&day.food, luxury_food_swaps());
    if matched {
        day.food = food;
    }

    day.notes = format!("VIP concierge service arranged for the day. {}", day.notes);
}

/// Downgrade one day in place. Unlike the luxury transform, food and
/// notes are always overwritten.
fn downgrade_day_to_budget(day: &mut Day) {
    for field in [&mut day.morning, &mut day.afternoon, &mut day.evening] {
        let (text, _) = swap_keywords(field, budget_swaps());
        *field = text;
    }
    day.food =
        "Budget-friendly: local markets, street food stalls, and casual neighborhood spots."
            .to_string();
    day.notes = BUDGET_NOTES.to_string();
}

fn swap_keywords(text: &str, swaps: &[Swap]) -> (String, bool) {
    let mut out = text.to_string();
    let mut matched = false;
    for swap in swaps {
        if swap.pattern.is_match(&out) {
            matched = true;
            out = swap.pattern.replace_all(&out, swap.replacement).into_owned();
        }
    }
    (out, matched)
}
