//! Selection rule engine for in-progress slot picks.
//!
//! An attendee's selection is legal when it resolves to exactly one of three
//! plans: a C session alone, a D session alone, or an A session and a B
//! session together. All transitions are pure functions over an immutable
//! value; persistence and capacity are handled elsewhere.

use serde::{Deserialize, Serialize};

/// Category tag of a session slot, controlling which combinations are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    A,
    B,
    C,
    D,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::A => "A",
            Category::B => "B",
            Category::C => "C",
            Category::D => "D",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        match s {
            "A" => Some(Category::A),
            "B" => Some(Category::B),
            "C" => Some(Category::C),
            "D" => Some(Category::D),
            _ => None,
        }
    }
}

/// The attendee's in-progress selection: at most one slot id per category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Selection {
    pub selected_a: Option<String>,
    pub selected_b: Option<String>,
    pub selected_c: Option<String>,
    pub selected_d: Option<String>,
}

impl Selection {
    /// Applies a pick and returns the resulting selection.
    ///
    /// Picking C or D clears every other category. Picking A or B clears C
    /// and D, sets its own category, and leaves the other of {A, B} alone.
    /// Re-picking within the same category replaces the earlier choice.
    pub fn select(&self, slot_id: &str, category: Category) -> Selection {
        match category {
            Category::C => Selection {
                selected_c: Some(slot_id.to_string()),
                ..Selection::default()
            },
            Category::D => Selection {
                selected_d: Some(slot_id.to_string()),
                ..Selection::default()
            },
            Category::A => Selection {
                selected_a: Some(slot_id.to_string()),
                selected_b: self.selected_b.clone(),
                selected_c: None,
                selected_d: None,
            },
            Category::B => Selection {
                selected_a: self.selected_a.clone(),
                selected_b: Some(slot_id.to_string()),
                selected_c: None,
                selected_d: None,
            },
        }
    }

    /// A selection is valid when exactly one plan holds: C alone, D alone,
    /// or A and B together.
    pub fn is_valid(&self) -> bool {
        self.selected_c.is_some()
            || self.selected_d.is_some()
            || (self.selected_a.is_some() && self.selected_b.is_some())
    }

    /// Whether applying `category` would silently discard picks belonging to
    /// a different plan. Callers must obtain explicit confirmation before
    /// calling `select` when this returns true.
    pub fn conflicts_with(&self, category: Category) -> bool {
        match category {
            Category::C => {
                self.selected_d.is_some()
                    || self.selected_a.is_some()
                    || self.selected_b.is_some()
            }
            Category::D => {
                self.selected_c.is_some()
                    || self.selected_a.is_some()
                    || self.selected_b.is_some()
            }
            Category::A | Category::B => {
                self.selected_c.is_some() || self.selected_d.is_some()
            }
        }
    }

    /// Slot ids to reserve, in booking order: C, D, A, B.
    pub fn slot_ids(&self) -> Vec<String> {
        [
            &self.selected_c,
            &self.selected_d,
            &self.selected_a,
            &self.selected_b,
        ]
        .into_iter()
        .flatten()
        .cloned()
        .collect()
    }
}
