use serde::Serialize;

/// Pitch slot, coordinates normalised to 0..1 with the own goal at y = 1
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FormationSlot {
    pub player_index: usize,
    pub x: f32,
    pub y: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Formation {
    pub name: String,
    pub display_name: String,
    pub slots: Vec<FormationSlot>,
}

impl Formation {
    pub fn new(name: &str, display_name: &str, slots: Vec<FormationSlot>) -> Self {
        Formation {
            name: name.to_string(),
            display_name: display_name.to_string(),
            slots,
        }
    }
}
