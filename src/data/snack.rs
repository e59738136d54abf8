/// Dutch snack words used as the default nickname pool.
pub static SNACKS: &[&str] = &[
    "Kroket",
    "Frikandel",
    "Bitterbal",
    "Stroopwafel",
    "Kaassoufflé",
    "Bamischijf",
    "Nasibal",
    "Berenklauw",
    "Kipcorn",
    "Loempia",
    "Patatje Oorlog",
    "Poffertje",
    "Oliebol",
    "Tompouce",
    "Gevulde Koek",
    "Speculaas",
    "Drop",
    "Kibbeling",
    "Haring",
    "Saucijzenbroodje",
    "Ontbijtkoek",
    "Appelflap",
    "Mexicano",
    "Viandel",
    "Pindarotsje",
];

/// The two contenders of a nickname battle.
pub static BATTLE_CHOICES: (&str, &str) = ("Kroket", "Frikandel");
