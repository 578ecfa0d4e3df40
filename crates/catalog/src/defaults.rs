//! Bundled catalog shipped with the application.

use hanumantay_core::ProductId;

use crate::product::{Category, Pricing, Product};

/// Format/content version of the bundled catalog.
///
/// Bump this whenever the bundled products change (new images, new lines):
/// persisted snapshots tagged with any other version are discarded and
/// replaced by [`default_products`] on the next start.
pub const DATA_VERSION: &str = "v1.2";

struct Seed {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    category: Category,
    rate: u64,
    unit: &'static str,
    moq: u32,
    image: &'static str,
}

const SEEDS: &[Seed] = &[
    Seed {
        id: "sc-001",
        name: "Pure Silk Printed Scarf",
        description: "Soft mulberry silk scarf with hand-rolled edges and floral block prints.",
        category: Category::Scarves,
        rate: 180_000,
        unit: "dozen",
        moq: 5,
        image: "/images/products/silk-printed-scarf.jpg",
    },
    Seed {
        id: "sc-002",
        name: "Cotton Voile Stole",
        description: "Lightweight breathable cotton stole in pastel shades, ideal for summer retail.",
        category: Category::Scarves,
        rate: 96_000,
        unit: "dozen",
        moq: 10,
        image: "/images/products/cotton-voile-stole.jpg",
    },
    Seed {
        id: "sc-003",
        name: "Woollen Checked Muffler",
        description: "Warm brushed wool muffler with classic check pattern and fringe ends.",
        category: Category::Scarves,
        rate: 144_000,
        unit: "dozen",
        moq: 5,
        image: "/images/products/woollen-checked-muffler.jpg",
    },
    Seed {
        id: "mh-001",
        name: "Classic White Cotton Handkerchief",
        description: "100% cotton gents handkerchief with satin border, bulk packed.",
        category: Category::MenHankies,
        rate: 24_000,
        unit: "dozen",
        moq: 20,
        image: "/images/products/classic-white-hanky.jpg",
    },
    Seed {
        id: "mh-002",
        name: "Checked Colour Handkerchief",
        description: "Yarn-dyed checked handkerchief for men in assorted dark colours.",
        category: Category::MenHankies,
        rate: 27_000,
        unit: "dozen",
        moq: 20,
        image: "/images/products/checked-colour-hanky.jpg",
    },
    Seed {
        id: "mp-001",
        name: "Gift Box Handkerchief Set (3 pcs)",
        description: "Premium gents handkerchiefs packed in a printed gift box, ready for retail shelves.",
        category: Category::MenPackaged,
        rate: 42_000,
        unit: "dozen boxes",
        moq: 10,
        image: "/images/products/gift-box-hanky-set.jpg",
    },
    Seed {
        id: "mp-002",
        name: "Executive Pouch Pack (6 pcs)",
        description: "Six fine cotton handkerchiefs in a zip pouch with hanging header card.",
        category: Category::MenPackaged,
        rate: 66_000,
        unit: "dozen packs",
        moq: 5,
        image: "/images/products/executive-pouch-pack.jpg",
    },
    Seed {
        id: "hb-001",
        name: "Festive Hankies Basket",
        description: "Decorated cane basket holding embroidered handkerchiefs, popular for weddings and gifting.",
        category: Category::HankiesBaskets,
        rate: 120_000,
        unit: "dozen baskets",
        moq: 3,
        image: "/images/products/festive-hankies-basket.jpg",
    },
    Seed {
        id: "wp-001",
        name: "Floral Printed Ladies Hanky",
        description: "Soft cambric ladies handkerchief with floral digital print and lace corner.",
        category: Category::WomenPrinted,
        rate: 18_000,
        unit: "dozen",
        moq: 25,
        image: "/images/products/floral-ladies-hanky.jpg",
    },
    Seed {
        id: "wp-002",
        name: "Embroidered Border Ladies Hanky",
        description: "Pastel cotton hanky with machine embroidered border, assorted designs.",
        category: Category::WomenPrinted,
        rate: 21_000,
        unit: "dozen",
        moq: 25,
        image: "/images/products/embroidered-ladies-hanky.jpg",
    },
];

/// The bundled default catalog, in display order.
pub fn default_products() -> Vec<Product> {
    SEEDS
        .iter()
        .filter_map(|s| {
            let id = ProductId::new(s.id).ok()?;
            Some(
                Product::new(
                    id,
                    s.name,
                    s.description,
                    s.category,
                    Pricing::new(s.rate, "INR", s.unit).with_min_order_qty(s.moq),
                )
                .with_image(s.image),
            )
        })
        .collect()
}
