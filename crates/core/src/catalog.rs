//! Static product catalog used to seed demo backends.
//!
//! Nothing in the client state pipeline reads this; it exists so a fresh
//! backend (or a test double) has something to serve.

use rust_decimal::Decimal;

use crate::types::{Product, ProductId};

/// A seed record with `'static` data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedProduct {
    pub id: i32,
    pub name: &'static str,
    pub image: &'static str,
    pub description: &'static str,
    pub brand: &'static str,
    pub category: &'static str,
    pub price_cents: i64,
    pub count_in_stock: i32,
    /// Rating times ten (45 = 4.5 stars).
    pub rating_tenths: i64,
    pub num_reviews: i32,
}

impl SeedProduct {
    /// Materialize the seed record as a catalog [`Product`] with no reviews.
    #[must_use]
    pub fn to_product(&self) -> Product {
        Product {
            id: ProductId::new(self.id),
            name: self.name.to_string(),
            image: self.image.to_string(),
            description: self.description.to_string(),
            brand: self.brand.to_string(),
            category: self.category.to_string(),
            price: Decimal::new(self.price_cents, 2),
            count_in_stock: self.count_in_stock,
            rating: Decimal::new(self.rating_tenths, 1),
            num_reviews: self.num_reviews,
            reviews: Vec::new(),
        }
    }
}

/// The seed catalog.
pub const CATALOG: &[SeedProduct] = &[
    SeedProduct {
        id: 1,
        name: "Airpods Wireless Bluetooth Headphones",
        image: "/images/airpods.jpg",
        description: "Bluetooth technology lets you connect it with compatible devices wirelessly High-quality AAC audio offers immersive listening experience Built-in microphone allows you to take calls while working",
        brand: "Apple",
        category: "Electronics",
        price_cents: 8999,
        count_in_stock: 10,
        rating_tenths: 45,
        num_reviews: 12,
    },
    SeedProduct {
        id: 2,
        name: "iPhone 11 Pro 256GB Memory",
        image: "/images/phone.jpg",
        description: "Introducing the iPhone 11 Pro. A transformative triple-camera system that adds tons of capability without complexity. An unprecedented leap in battery life",
        brand: "Apple",
        category: "Electronics",
        price_cents: 59999,
        count_in_stock: 7,
        rating_tenths: 40,
        num_reviews: 8,
    },
    SeedProduct {
        id: 3,
        name: "Cannon EOS 80D DSLR Camera",
        image: "/images/camera.jpg",
        description: "Characterized by versatile imaging specs, the Canon EOS 80D further clarifies itself using a pair of robust focusing systems and an intuitive design",
        brand: "Cannon",
        category: "Electronics",
        price_cents: 92999,
        count_in_stock: 5,
        rating_tenths: 30,
        num_reviews: 12,
    },
    SeedProduct {
        id: 4,
        name: "Sony Playstation 4 Pro White Version",
        image: "/images/playstation.jpg",
        description: "The ultimate home entertainment center starts with PlayStation. Whether you are into gaming, HD movies, television, music",
        brand: "Sony",
        category: "Electronics",
        price_cents: 39999,
        count_in_stock: 11,
        rating_tenths: 50,
        num_reviews: 12,
    },
    SeedProduct {
        id: 5,
        name: "Logitech G-Series Gaming Mouse",
        image: "/images/mouse.jpg",
        description: "Get a better handle on your games with this Logitech LIGHTSYNC gaming mouse. The six programmable buttons allow customization for a smooth playing experience",
        brand: "Logitech",
        category: "Electronics",
        price_cents: 4999,
        count_in_stock: 7,
        rating_tenths: 35,
        num_reviews: 10,
    },
    SeedProduct {
        id: 6,
        name: "Amazon Echo Dot 3rd Generation",
        image: "/images/alexa.jpg",
        description: "Meet Echo Dot - Our most popular smart speaker with a fabric design. It is our most compact smart speaker that fits perfectly into small space",
        brand: "Amazon",
        category: "Electronics",
        price_cents: 2999,
        count_in_stock: 0,
        rating_tenths: 40,
        num_reviews: 12,
    },
];

/// The seed catalog as owned products, in catalog order.
#[must_use]
pub fn seed_products() -> Vec<Product> {
    CATALOG.iter().map(SeedProduct::to_product).collect()
}

/// Look up a seed product by ID.
#[must_use]
pub fn find(id: ProductId) -> Option<&'static SeedProduct> {
    CATALOG.iter().find(|seed| seed.id == id.as_i32())
}
