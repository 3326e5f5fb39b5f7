use canonical::{canonical_unit, char_ngrams, normalize, normalize_with, tokenize, NormalizeConfig};

fn main() {
    let spoken = [
        "Paint wall - interior, 2 coats",
        "  Façade   répair (stucco) ",
        "Drywall Sheet 4x8",
        "outlet instalation",
    ];

    for raw in spoken {
        let normalized = normalize(raw);
        let tokens = tokenize(&normalized);
        let trigrams: Vec<String> = tokens
            .iter()
            .flat_map(|token| char_ngrams(token, 3))
            .collect();

        println!("raw:        {raw:?}");
        println!("normalized: {normalized:?}");
        println!("tokens:     {tokens:?}");
        println!("trigrams:   {trigrams:?}");
        println!();
    }

    let keep_accents = NormalizeConfig {
        fold_diacritics: false,
        ..Default::default()
    };
    println!(
        "without folding: {:?}",
        normalize_with("Façade Répair", &keep_accents)
    );
    println!();

    for unit in ["Each", "pcs", "Sq. Ft.", "ft²", "hours", "lump sum", "bundle", "  "] {
        println!("unit {unit:?} -> {:?}", canonical_unit(unit));
    }
}
