//! Static nutrition and meal-prep guidance shown on the nutrition tabs.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GuidanceList {
    pub title: &'static str,
    pub items: &'static [&'static str],
}

pub const AVOID: GuidanceList = GuidanceList {
    title: "🚫 Vermeide möglichst:",
    items: &[
        "Gezuckerte Getränke & Fruchtsäfte",
        "Weißbrot & Weißmehlprodukte",
        "Fertiggerichte mit vielen Zusatzstoffen",
        "Snacks wie Chips, Schokoriegel, Gummibärchen",
        "Alkohol – hemmt die Fettverbrennung!",
    ],
};

pub const FAT_BURNERS: GuidanceList = GuidanceList {
    title: "✅ Richtig starke Fatburner:",
    items: &[
        "Magerquark, Hüttenkäse, Skyr",
        "Hähnchen, Pute, Fisch",
        "Brokkoli, Spinat, Zucchini",
        "Haferflocken, Vollkornreis, Linsen",
        "Grüner Tee, schwarzer Kaffee",
    ],
};

pub const MEAL_PREP_SUGGESTIONS: [&str; 4] = [
    "Hähnchen mit Brokkoli & Reis",
    "Putenhack mit Zucchini-Nudeln",
    "Linsen-Curry mit Spinat",
    "Thunfisch-Quark mit Haferflocken",
];

#[must_use]
pub fn nutrition_lists() -> [GuidanceList; 2] {
    [AVOID, FAT_BURNERS]
}

/// Suggestions joined into the single line the meal-prep tab shows.
#[must_use]
pub fn meal_prep_line() -> String {
    format!("Vorschläge: {}", MEAL_PREP_SUGGESTIONS.join(" • "))
}
