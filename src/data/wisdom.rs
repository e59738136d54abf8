pub static SUBJECTS: &[&str] = &[
    "Een kroket",
    "De wijze frikandel",
    "Wie zijn bitterbal deelt",
    "Een koude patat",
    "De laatste stroopwafel",
    "Een vergeten oliebol",
    "Wie om middernacht frituurt",
    "De haring die tegen de stroom in zwemt",
    "Een halve kaassoufflé",
    "De snackbarhouder",
];

pub static PREDICATES: &[&str] = &[
    "vindt altijd de weg naar huis",
    "is nooit te laat voor de lunch",
    "brandt het hardst aan de binnenkant",
    "weet meer dan hij laat zien",
    "wordt niet warmer van wachten",
    "kent geen haast, alleen honger",
    "heeft geen mayonaise nodig om te stralen",
    "wordt pas begrepen als hij op is",
    "draagt zijn korst met trots",
    "deelt nooit de laatste hap",
];

pub static CLOSINGS: &[&str] = &[
    "Onthoud dat.",
    "Zo is het.",
    "Dat wist opa al.",
    "Eet smakelijk.",
    "Denk daar maar eens over na.",
    "Met of zonder saus.",
    "Amen.",
];
