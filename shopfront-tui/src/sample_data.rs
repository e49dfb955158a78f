//! Built-in sample catalog, used when no CSV is given or loading fails.

use shopfront_core::catalog::{Catalog, Product};
use shopfront_core::money::Money;

pub fn sample_catalog() -> Catalog {
    let mk = |id: &str,
              handle: &str,
              title: &str,
              vendor: &str,
              price: i64,
              compare_at: Option<i64>,
              available: bool,
              options: &[&str]| Product {
        id: id.to_string(),
        handle: handle.to_string(),
        title: title.to_string(),
        vendor: vendor.to_string(),
        price: Money(price),
        compare_at_price: compare_at.map(Money),
        available,
        options: options.iter().map(|s| s.to_string()).collect(),
    };

    Catalog::new(vec![
        mk(
            "p01", "stoneware-vase", "Stoneware Vase", "Forma",
            4_200, Some(5_600), true, &["Sand", "Charcoal"],
        ),
        mk(
            "p02", "walnut-serving-bowl", "Walnut Serving Bowl", "Studio Mela",
            1_800, None, true, &["Small", "Large"],
        ),
        mk(
            "p03", "linen-throw", "Washed Linen Throw", "Atelier Nord",
            7_400, None, true, &["Natural", "Rust", "Indigo"],
        ),
        mk(
            "p04", "oak-side-table", "Oak Side Table", "Forma",
            18_900, Some(23_500), true, &["Oiled", "Smoked"],
        ),
        mk(
            "p05", "ribbed-carafe", "Ribbed Glass Carafe", "Kollekt",
            3_200, None, false, &[],
        ),
        mk(
            "p06", "wool-cushion", "Boucle Wool Cushion", "Atelier Nord",
            5_500, None, true, &["Ecru", "Moss"],
        ),
        mk(
            "p07", "ceramic-pour-over", "Ceramic Pour-Over Set", "Studio Mela",
            6_800, Some(8_200), true, &[],
        ),
        mk(
            "p08", "brass-candleholders", "Brass Candleholders, Pair", "Kollekt",
            4_900, None, true, &[],
        ),
        mk(
            "p09", "ash-wall-shelf", "Ash Wall Shelf", "Forma",
            11_200, None, false, &["60 cm", "90 cm"],
        ),
        mk(
            "p10", "stone-trivet", "Soapstone Trivet", "Studio Mela",
            2_400, None, true, &[],
        ),
        mk(
            "p11", "alpaca-blanket", "Alpaca Blanket", "Atelier Nord",
            28_000, None, true, &["Fog", "Camel"],
        ),
        mk(
            "p12", "paper-pendant", "Paper Pendant Lamp", "Kollekt",
            9_600, Some(12_000), true, &["Ø35", "Ø50"],
        ),
    ])
}
