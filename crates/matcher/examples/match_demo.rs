use matcher::{MatchOptions, MatchQuery, PriceListItem, PriceMatcher};

fn main() {
    let catalog = vec![
        PriceListItem::new("Drywall Sheet 4x8", 35.0).with_unit("ea"),
        PriceListItem::new("Outlet Installation", 45.0).with_unit("ea"),
        PriceListItem::new("Interior Wall Paint", 42.5).with_unit("gal"),
        PriceListItem::new("Exterior Wall Paint", 48.0).with_unit("gal"),
        PriceListItem::new("Labor", 65.0).with_unit("hr"),
    ];

    let matcher = PriceMatcher::default();
    let prepared = matcher.prepare(&catalog);
    let options = MatchOptions {
        explain: true,
        ..MatchOptions::default()
    };

    let quote = [
        MatchQuery::new("paint wall - interior").with_unit("gallon"),
        MatchQuery::new("outlet instalation").with_unit("hr"),
        MatchQuery::new("labour").with_unit("hours"),
        MatchQuery::new("xyz completely unrelated term"),
    ];

    for query in &quote {
        println!("query: {:?} ({:?})", query.name, query.unit);
        let hits = prepared.candidates(query, &options);
        if hits.is_empty() {
            println!("  no candidates");
        }
        for hit in hits {
            println!(
                "  {:<22} {:>7.2} {:<4} score={:.3} {:?}",
                hit.item.name,
                hit.item.price,
                hit.item.unit.as_deref().unwrap_or("-"),
                hit.score,
                hit.breakdown
            );
        }
        println!();
    }
}
