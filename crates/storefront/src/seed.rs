//! First-run seed data.
//!
//! Installs the starter catalogue when the profile has no products yet, and
//! adds the two seed accounts if their emails aren't registered. Existing
//! accounts are never replaced.

use chrono::Utc;

use floralink_core::{Category, Email, EmailError, Price, ProductId, UserId};

use crate::models::{Product, User};
use crate::services::AuthError;
use crate::services::auth::hash_password;
use crate::storage::{StorageService, keys};

/// Seeded admin login.
pub const ADMIN_EMAIL: &str = "admin@floralink.com";
/// Seeded admin password.
pub const ADMIN_PASSWORD: &str = "admin123";
/// Seeded customer login.
pub const TEST_EMAIL: &str = "test@floralink.com";
/// Seeded customer password.
pub const TEST_PASSWORD: &str = "test1234";

/// Errors that can occur while building seed data.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("invalid seed email: {0}")]
    Email(#[from] EmailError),
    #[error("seed password: {0}")]
    Password(#[from] AuthError),
}

struct SeedProduct {
    name: &'static str,
    description: &'static str,
    cents: i64,
    image: &'static str,
    category: Category,
    featured: bool,
}

const CATALOGUE: &[SeedProduct] = &[
    SeedProduct {
        name: "Red Rose Bouquet",
        description: "A classic bouquet of 12 stunning red roses, perfect for expressing your love and passion. Each rose is carefully selected for its beauty and freshness.",
        cents: 4999,
        image: "https://images.unsplash.com/photo-1518895949257-7621c3c786d7?w=500",
        category: Category::Romantic,
        featured: true,
    },
    SeedProduct {
        name: "Pink Peony Romance",
        description: "Delicate pink peonies arranged in a beautiful display. These lush blooms symbolize romance, prosperity, and a happy marriage.",
        cents: 6499,
        image: "https://images.unsplash.com/photo-1563241527-3004b7be0ffd?w=500",
        category: Category::Romantic,
        featured: true,
    },
    SeedProduct {
        name: "Mixed Love Arrangement",
        description: "A romantic mix of roses, lilies, and seasonal flowers in shades of pink and red. Perfect for anniversaries and special romantic occasions.",
        cents: 5499,
        image: "https://images.unsplash.com/photo-1487070183336-b863922373d4?w=500",
        category: Category::Romantic,
        featured: false,
    },
    SeedProduct {
        name: "White Lily Sympathy",
        description: "Elegant white lilies arranged with greenery, offering comfort and peace during difficult times. A traditional choice for expressing condolences.",
        cents: 7999,
        image: "https://images.unsplash.com/photo-1490750967868-88aa4486c946?w=500",
        category: Category::SympathyFuneral,
        featured: true,
    },
    SeedProduct {
        name: "Peaceful White Roses",
        description: "A serene arrangement of pure white roses, symbolizing reverence, humility, and innocence. Perfect for memorial services.",
        cents: 6999,
        image: "https://images.unsplash.com/photo-1455659817273-f96807779a8a?w=500",
        category: Category::SympathyFuneral,
        featured: false,
    },
    SeedProduct {
        name: "Gentle Remembrance",
        description: "Soft pastel flowers including roses, carnations, and chrysanthemums. A gentle tribute to honor cherished memories.",
        cents: 7499,
        image: "https://images.unsplash.com/photo-1561181286-d3fee7d55364?w=500",
        category: Category::SympathyFuneral,
        featured: false,
    },
    SeedProduct {
        name: "Bridal Bouquet Elegance",
        description: "A stunning bridal bouquet featuring white roses, peonies, and delicate baby's breath. Timeless elegance for your special day.",
        cents: 12999,
        image: "https://images.unsplash.com/photo-1519225421980-715cb0215aed?w=500",
        category: Category::WeddingEngagement,
        featured: true,
    },
    SeedProduct {
        name: "Romantic Garden Wedding",
        description: "Lush garden-style arrangement with roses, hydrangeas, and seasonal blooms. Perfect for romantic outdoor weddings.",
        cents: 14999,
        image: "https://images.unsplash.com/photo-1522673607200-164d1b6ce486?w=500",
        category: Category::WeddingEngagement,
        featured: true,
    },
    SeedProduct {
        name: "Engagement Celebration",
        description: "Vibrant mixed bouquet celebrating new beginnings. Features roses, tulips, and seasonal flowers in joyful colors.",
        cents: 8999,
        image: "https://images.unsplash.com/photo-1535398089889-dd807df1dfaa?w=500",
        category: Category::WeddingEngagement,
        featured: false,
    },
    SeedProduct {
        name: "Birthday Bright Blooms",
        description: "Cheerful and colorful arrangement perfect for birthday celebrations. Includes gerbera daisies, roses, and vibrant seasonal flowers.",
        cents: 5999,
        image: "https://images.unsplash.com/photo-1563241527-3004b7be0ffd?w=500",
        category: Category::Celebrations,
        featured: true,
    },
    SeedProduct {
        name: "Congratulations Bouquet",
        description: "Celebrate achievements with this stunning arrangement of sunflowers, roses, and lilies. Perfect for graduations and promotions.",
        cents: 6499,
        image: "https://images.unsplash.com/photo-1508610048659-a06b669e3321?w=500",
        category: Category::Celebrations,
        featured: false,
    },
    SeedProduct {
        name: "New Baby Joy",
        description: "Soft and sweet arrangement in pastel colors, perfect for welcoming a new baby. Features roses, carnations, and delicate accents.",
        cents: 5499,
        image: "https://images.unsplash.com/photo-1487070183336-b863922373d4?w=500",
        category: Category::Celebrations,
        featured: false,
    },
    SeedProduct {
        name: "Spring Garden Mix",
        description: "Fresh spring flowers including tulips, daffodils, and hyacinths. Brings the beauty of spring into any home.",
        cents: 4499,
        image: "https://images.unsplash.com/photo-1490750967868-88aa4486c946?w=500",
        category: Category::SeasonalSpecialDays,
        featured: false,
    },
    SeedProduct {
        name: "Holiday Festive Arrangement",
        description: "Festive arrangement perfect for holiday celebrations. Features red roses, white lilies, and seasonal greenery.",
        cents: 6999,
        image: "https://images.unsplash.com/photo-1455659817273-f96807779a8a?w=500",
        category: Category::SeasonalSpecialDays,
        featured: false,
    },
    SeedProduct {
        name: "Mother's Day Special",
        description: "Show mom how much you care with this beautiful arrangement of her favorite flowers. Includes roses, carnations, and seasonal blooms.",
        cents: 5999,
        image: "https://images.unsplash.com/photo-1561181286-d3fee7d55364?w=500",
        category: Category::SeasonalSpecialDays,
        featured: true,
    },
];

/// Install seed data unless the profile already has products.
///
/// Returns `true` if seed data was written.
///
/// # Errors
///
/// Returns `SeedError` if a seed account can't be built (hashing failure).
pub fn install_if_empty(storage: &StorageService) -> Result<bool, SeedError> {
    let existing: Vec<Product> = storage.get_list(keys::PRODUCTS);
    if !existing.is_empty() {
        tracing::info!(products = existing.len(), "Seed data already exists, skipping");
        return Ok(false);
    }

    tracing::info!("Installing seed data");
    let now = Utc::now();

    let mut users: Vec<User> = storage.get_list(keys::USERS);
    let accounts = [
        ("Admin User", ADMIN_EMAIL, ADMIN_PASSWORD, true),
        ("Test User", TEST_EMAIL, TEST_PASSWORD, false),
    ];
    let mut added = 0_usize;
    for (name, email, password, is_admin) in accounts {
        let email = Email::parse(email)?;
        if users.iter().any(|u| u.email == email) {
            continue;
        }
        users.push(User {
            id: UserId::generate(),
            name: name.to_owned(),
            email,
            password_hash: hash_password(password)?,
            is_admin,
            created_at: now,
        });
        added += 1;
    }

    let products: Vec<Product> = CATALOGUE
        .iter()
        .map(|seed| Product {
            id: ProductId::generate(),
            name: seed.name.to_owned(),
            description: seed.description.to_owned(),
            price: Price::from_cents(seed.cents).unwrap_or_default(),
            image_url: seed.image.to_owned(),
            category: seed.category,
            featured: seed.featured,
            created_at: now,
            updated_at: now,
        })
        .collect();

    if added > 0 {
        storage.set(keys::USERS, &users);
    }
    storage.set(keys::PRODUCTS, &products);
    tracing::info!(users = added, products = products.len(), "Seed data installed");
    Ok(true)
}
