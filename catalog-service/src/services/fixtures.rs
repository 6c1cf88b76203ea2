//! Sample catalog inserted into an empty store at startup.

use mongodb::bson::{doc, Document};

struct Fixture {
    title: &'static str,
    description: &'static str,
    price: f64,
    category: &'static str,
    in_stock: bool,
    image_url: &'static str,
    brand: &'static str,
    rating: f64,
}

const FIXTURES: [Fixture; 8] = [
    Fixture {
        title: "Classic Tee",
        description: "Soft cotton tee with a perfect everyday fit.",
        price: 19.99,
        category: "Apparel",
        in_stock: true,
        image_url: "https://images.unsplash.com/photo-1512436991641-6745cdb1723f?q=80&w=1200&auto=format&fit=crop",
        brand: "BlueWave",
        rating: 4.5,
    },
    Fixture {
        title: "Running Sneakers",
        description: "Lightweight shoes designed for comfort and speed.",
        price: 59.99,
        category: "Footwear",
        in_stock: true,
        image_url: "https://images.unsplash.com/photo-1542291026-7eec264c27ff?q=80&w=1200&auto=format&fit=crop",
        brand: "SwiftStep",
        rating: 4.3,
    },
    Fixture {
        title: "Wireless Headphones",
        description: "Noise-cancelling over-ear headphones with 30h battery.",
        price: 129.0,
        category: "Electronics",
        in_stock: true,
        image_url: "https://images.unsplash.com/photo-1518442031670-681f9a19dbcc?q=80&w=1200&auto=format&fit=crop",
        brand: "SonicX",
        rating: 4.7,
    },
    Fixture {
        title: "Smart Watch",
        description: "Track health, messages, and workouts with ease.",
        price: 149.99,
        category: "Electronics",
        in_stock: true,
        image_url: "https://images.unsplash.com/photo-1511732351157-1865efcb7b7b?q=80&w=1200&auto=format&fit=crop",
        brand: "PulseOne",
        rating: 4.2,
    },
    Fixture {
        title: "Backpack",
        description: "Durable backpack with multiple compartments.",
        price: 39.5,
        category: "Accessories",
        in_stock: true,
        image_url: "https://images.unsplash.com/photo-1511174511562-5f7f18b874f8?q=80&w=1200&auto=format&fit=crop",
        brand: "TrailPro",
        rating: 4.1,
    },
    Fixture {
        title: "Sunglasses",
        description: "UV400 polarized sunglasses with classic style.",
        price: 24.99,
        category: "Accessories",
        in_stock: true,
        image_url: "https://images.unsplash.com/photo-1511499767150-a48a237f0083?q=80&w=1200&auto=format&fit=crop",
        brand: "SunRay",
        rating: 4.0,
    },
    Fixture {
        title: "Water Bottle",
        description: "Insulated stainless steel bottle (1L).",
        price: 18.0,
        category: "Outdoors",
        in_stock: true,
        image_url: "https://images.unsplash.com/photo-1542736667-069246bdbc74?q=80&w=1200&auto=format&fit=crop",
        brand: "HydroFlow",
        rating: 4.6,
    },
    Fixture {
        title: "Desk Lamp",
        description: "Adjustable LED lamp with warm and cool modes.",
        price: 32.0,
        category: "Home",
        in_stock: true,
        image_url: "https://images.unsplash.com/photo-1507473885765-e6ed057f782c?q=80&w=1200&auto=format&fit=crop",
        brand: "GlowLite",
        rating: 4.4,
    },
];

impl Fixture {
    fn to_document(&self) -> Document {
        doc! {
            "title": self.title,
            "description": self.description,
            "price": self.price,
            "category": self.category,
            "in_stock": self.in_stock,
            "image_url": self.image_url,
            "brand": self.brand,
            "rating": self.rating,
        }
    }
}

/// Raw records for the sample catalog, without `_id`s.
pub fn sample_products() -> Vec<Document> {
    FIXTURES.iter().map(Fixture::to_document).collect()
}
