/// The three free-text areas of the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoteField {
    Training,
    Food,
    MealPrep,
}

impl NoteField {
    #[must_use]
    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Training => "Schreibe hier deine Gedanken, Gewichte oder Mahlzeiten auf...",
            Self::Food => "Was hast du heute gegessen? Frühstück, Mittag, Snack, Abendessen...",
            Self::MealPrep => {
                "Plane hier deine 4 Mahlzeiten für die Woche – einfach, proteinreich, schnell."
            }
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Notes {
    training: String,
    food: String,
    meal_prep: String,
}

impl Notes {
    #[must_use]
    pub fn text(&self, field: NoteField) -> &str {
        match field {
            NoteField::Training => &self.training,
            NoteField::Food => &self.food,
            NoteField::MealPrep => &self.meal_prep,
        }
    }

    pub fn set(&mut self, field: NoteField, text: impl Into<String>) {
        let slot = match field {
            NoteField::Training => &mut self.training,
            NoteField::Food => &mut self.food,
            NoteField::MealPrep => &mut self.meal_prep,
        };
        *slot = text.into();
    }
}
