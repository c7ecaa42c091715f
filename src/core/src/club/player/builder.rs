use crate::{PlayerPositionGroup, PlayerRecord};

#[derive(Default)]
pub struct PlayerRecordBuilder {
    name: Option<String>,
    position: Option<PlayerPositionGroup>,
    display_position: Option<String>,
    rating: Option<f32>,
    age: Option<u8>,
    shirt_number: Option<u8>,
    club: Option<String>,
    is_candidate: Option<bool>,
    is_flagged: Option<bool>,
}

impl PlayerRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    pub fn position(mut self, position: PlayerPositionGroup) -> Self {
        self.position = Some(position);
        self
    }

    pub fn display_position(mut self, display_position: String) -> Self {
        self.display_position = Some(display_position);
        self
    }

    pub fn rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }

    pub fn age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn shirt_number(mut self, shirt_number: u8) -> Self {
        self.shirt_number = Some(shirt_number);
        self
    }

    pub fn club(mut self, club: String) -> Self {
        self.club = Some(club);
        self
    }

    pub fn candidate(mut self, is_candidate: bool) -> Self {
        self.is_candidate = Some(is_candidate);
        self
    }

    pub fn flagged(mut self, is_flagged: bool) -> Self {
        self.is_flagged = Some(is_flagged);
        self
    }

    pub fn build(self) -> Result<PlayerRecord, String> {
        let position = self.position.ok_or("position is required")?;
        let age = self.age.ok_or("age is required")?;

        if age == 0 {
            return Err("age must be positive".to_string());
        }

        Ok(PlayerRecord {
            name: self.name.ok_or("name is required")?,
            position,
            display_position: self
                .display_position
                .unwrap_or_else(|| position.name().to_string()),
            rating: self.rating.ok_or("rating is required")?,
            age,
            shirt_number: self.shirt_number.unwrap_or(0),
            club: self.club.ok_or("club is required")?,
            is_candidate: self.is_candidate.unwrap_or(false),
            is_flagged: self.is_flagged.unwrap_or(false),
        })
    }
}
