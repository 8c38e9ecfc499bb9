// The results pipeline: classify -> filter -> sort -> group
//
// Game categories are not carried explicitly by the feed; they are encoded
// as substrings of the game key ("juga3", "pega3", ...). The substring rule
// is the legacy feed's contract, so it is kept byte-for-byte compatible and
// applied once per ingestion to populate an explicit GameKind.

pub mod dates;

use crate::feed::{DrawRecord, ResultMap};
use chrono::NaiveDate;
use dates::parse_draw_date;

/// Game families, in their fixed display order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameKind {
    Juga3,
    Pega3,
    Premia2,
    Diaria,
    Super,
}

/// Display order; also the tie-break rank within a date and slot
pub const GAME_ORDER: [GameKind; 5] = [
    GameKind::Juga3,
    GameKind::Pega3,
    GameKind::Premia2,
    GameKind::Diaria,
    GameKind::Super,
];

impl GameKind {
    /// The substring this family contributes to game keys
    pub fn keyword(self) -> &'static str {
        match self {
            GameKind::Juga3 => "juga3",
            GameKind::Pega3 => "pega3",
            GameKind::Premia2 => "premia2",
            GameKind::Diaria => "diaria",
            GameKind::Super => "super",
        }
    }

    /// First matching family in a game key, if any
    pub fn from_key(key: &str) -> Option<GameKind> {
        let key = key.to_lowercase();
        GAME_ORDER.into_iter().find(|kind| key.contains(kind.keyword()))
    }
}

/// Rank used for ordering within a date/slot. Keys that match no family
/// rank -1 and therefore sort before every known family.
pub fn game_rank(key: &str) -> i32 {
    let key = key.to_lowercase();
    GAME_ORDER
        .iter()
        .position(|kind| key.contains(kind.keyword()))
        .map(|i| i as i32)
        .unwrap_or(-1)
}

/// What the dashboard is showing: one game family, or everything
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Game(GameKind),
    All,
}

/// Page-slug table, scanned in order; first match wins
const PAGE_TABLE: [(&str, GameKind); 11] = [
    ("juga-3", GameKind::Juga3),
    ("juga3", GameKind::Juga3),
    ("pega-3", GameKind::Pega3),
    ("pega3", GameKind::Pega3),
    ("premia-2", GameKind::Premia2),
    ("premia2", GameKind::Premia2),
    ("la-diaria", GameKind::Diaria),
    ("diaria", GameKind::Diaria),
    ("loto-super-premio", GameKind::Super),
    ("super-premio", GameKind::Super),
    ("superpremio", GameKind::Super),
];

/// Map a page path (or slug) to the category it shows. Unknown pages show
/// everything; there is no error path.
pub fn classify(page: &str) -> Category {
    let page = page.to_lowercase();
    for (slug, kind) in PAGE_TABLE {
        if page.contains(slug) {
            return Category::Game(kind);
        }
    }
    Category::All
}

/// Keep the entries belonging to a category. `All` passes the map through.
pub fn filter_results(results: &ResultMap, category: Category) -> ResultMap {
    let kind = match category {
        Category::All => return results.clone(),
        Category::Game(kind) => kind,
    };
    results
        .iter()
        .filter(|(key, _)| key.to_lowercase().contains(kind.keyword()))
        .map(|(key, record)| (key.clone(), record.clone()))
        .collect()
}

/// Rank of a draw-time label within the day. Unknown labels rank 0 and sort
/// before the known slots.
fn slot_rank(draw_time: Option<&str>) -> u8 {
    match draw_time {
        Some("11:00 AM") | Some("10:00 AM") => 1,
        Some("3:00 PM") | Some("2:00 PM") | Some("15:00") => 2,
        Some("9:00 PM") | Some("21:00") => 3,
        _ => 0,
    }
}

/// Flatten a result map into entries with a deterministic base order.
///
/// Hash maps iterate in arbitrary order, which would make full-tie entries
/// shuffle between poll cycles; keying the base order keeps renders stable.
pub fn to_entries(results: ResultMap) -> Vec<(String, DrawRecord)> {
    let mut entries: Vec<_> = results.into_iter().collect();
    entries.sort_by(|a, b| a.0.cmp(&b.0));
    entries
}

/// Sort entries most recent first: resolved year, month, day descending,
/// then slot rank and game rank ascending. The sort is stable, so entries
/// tied on all five keys keep their relative input order.
pub fn sort_entries(entries: &mut [(String, DrawRecord)], today: NaiveDate) {
    entries.sort_by(|(key_a, rec_a), (key_b, rec_b)| {
        let date_a = parse_draw_date(&rec_a.draw_date).descending_key(today);
        let date_b = parse_draw_date(&rec_b.draw_date).descending_key(today);
        date_b
            .cmp(&date_a)
            .then_with(|| {
                slot_rank(rec_a.draw_time.as_deref()).cmp(&slot_rank(rec_b.draw_time.as_deref()))
            })
            .then_with(|| game_rank(key_a).cmp(&game_rank(key_b)))
    });
}

/// Daily draw windows, plus the special bucket for the super game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeSlot {
    Morning,
    Afternoon,
    Evening,
    Special,
}

/// Normalize a draw-time label to its slot. Off-schedule labels that the
/// feed occasionally serves (10:00 AM, 2:00 PM, 24-hour forms) fold into
/// the nearest slot; anything else has no slot.
pub fn normalize_slot(draw_time: &str) -> Option<TimeSlot> {
    match draw_time {
        "11:00 AM" | "10:00 AM" => Some(TimeSlot::Morning),
        "3:00 PM" | "2:00 PM" | "15:00" => Some(TimeSlot::Afternoon),
        "9:00 PM" | "21:00" => Some(TimeSlot::Evening),
        _ => None,
    }
}

/// Sorted entries partitioned by time slot, ready for section rendering
#[derive(Debug, Default)]
pub struct Grouped {
    pub morning: Vec<(String, DrawRecord)>,
    pub afternoon: Vec<(String, DrawRecord)>,
    pub evening: Vec<(String, DrawRecord)>,
    pub special: Vec<(String, DrawRecord)>,
}

impl Grouped {
    /// Buckets in display order
    pub fn slots(&self) -> [(TimeSlot, &[(String, DrawRecord)]); 4] {
        [
            (TimeSlot::Morning, self.morning.as_slice()),
            (TimeSlot::Afternoon, self.afternoon.as_slice()),
            (TimeSlot::Evening, self.evening.as_slice()),
            (TimeSlot::Special, self.special.as_slice()),
        ]
    }

    pub fn is_empty(&self) -> bool {
        self.slots().iter().all(|(_, entries)| entries.is_empty())
    }
}

/// Partition sorted entries into slot buckets.
///
/// Super draws always land in the special bucket regardless of their listed
/// time; entries with an unrecognized time belong to no bucket and are
/// dropped. Each bucket is then re-ordered by game rank alone.
pub fn group_by_slot(entries: Vec<(String, DrawRecord)>) -> Grouped {
    let mut grouped = Grouped::default();

    for (key, record) in entries {
        if key.to_lowercase().contains("super") {
            grouped.special.push((key, record));
            continue;
        }
        let slot = record.draw_time.as_deref().and_then(normalize_slot);
        match slot {
            Some(TimeSlot::Morning) => grouped.morning.push((key, record)),
            Some(TimeSlot::Afternoon) => grouped.afternoon.push((key, record)),
            Some(TimeSlot::Evening) => grouped.evening.push((key, record)),
            // Special only holds super draws, routed above
            Some(TimeSlot::Special) | None => {}
        }
    }

    for bucket in [
        &mut grouped.morning,
        &mut grouped.afternoon,
        &mut grouped.evening,
        &mut grouped.special,
    ] {
        bucket.sort_by_key(|(key, _)| game_rank(key));
    }

    grouped
}
