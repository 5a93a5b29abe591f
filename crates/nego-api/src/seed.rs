//! First-run seed fixtures.
//!
//! Ids are fixed so that clients and tests can reference `talent-1` or
//! `content-1` directly after seeding.

use chrono::Utc;

use nego_models::{PrivateContent, Talent};

struct TalentFixture {
    id: &'static str,
    name: &'static str,
    age: u32,
    image: &'static str,
    location: &'static str,
    starting_price: i64,
    tagline: &'static str,
    description: &'static str,
    rating: f64,
}

const TALENTS: &[TalentFixture] = &[
    TalentFixture {
        id: "talent-1",
        name: "Adaeze Nwosu",
        age: 24,
        image: "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?w=400&q=80",
        location: "Lagos",
        starting_price: 120_000,
        tagline: "Event Host",
        description: "Experienced presenter for launches and galas.",
        rating: 4.8,
    },
    TalentFixture {
        id: "talent-2",
        name: "Chidinma Eze",
        age: 27,
        image: "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=400&q=80",
        location: "Abuja",
        starting_price: 180_000,
        tagline: "Brand Ambassador",
        description: "Represents premium brands at high-profile events.",
        rating: 4.9,
    },
    TalentFixture {
        id: "talent-3",
        name: "Folake Adeyemi",
        age: 25,
        image: "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?w=400&q=80",
        location: "Port Harcourt",
        starting_price: 150_000,
        tagline: "Editorial Model",
        description: "Runway and editorial work for fashion houses.",
        rating: 4.7,
    },
    TalentFixture {
        id: "talent-4",
        name: "Grace Okoro",
        age: 23,
        image: "https://images.unsplash.com/photo-1517841905240-472988babdf9?w=400&q=80",
        location: "Lagos",
        starting_price: 100_000,
        tagline: "Social Butterfly",
        description: "Charismatic and engaging for social gatherings.",
        rating: 4.6,
    },
    TalentFixture {
        id: "talent-5",
        name: "Halima Ibrahim",
        age: 26,
        image: "https://images.unsplash.com/photo-1488426862026-3ee34a7d66df?w=400&q=80",
        location: "Kano",
        starting_price: 130_000,
        tagline: "Northern Gem",
        description: "Event hosting and compering across the north.",
        rating: 4.8,
    },
    TalentFixture {
        id: "talent-6",
        name: "Ify Okafor",
        age: 28,
        image: "https://images.unsplash.com/photo-1529626455594-4ff0802cfb7e?w=400&q=80",
        location: "Enugu",
        starting_price: 160_000,
        tagline: "Eastern Belle",
        description: "Polished presence for corporate and social events.",
        rating: 4.9,
    },
    TalentFixture {
        id: "talent-7",
        name: "Jessica Adekunle",
        age: 24,
        image: "https://images.unsplash.com/photo-1502823403499-6ccfcf4fb453?w=400&q=80",
        location: "Lagos",
        starting_price: 140_000,
        tagline: "Lagos Star",
        description: "Vibrant performer for unforgettable experiences.",
        rating: 4.7,
    },
    TalentFixture {
        id: "talent-8",
        name: "Kemi Ogundimu",
        age: 25,
        image: "https://images.unsplash.com/photo-1544005313-94ddf0286df2?w=400&q=80",
        location: "Ibadan",
        starting_price: 110_000,
        tagline: "Ibadan Queen",
        description: "Charming and witty host for any occasion.",
        rating: 4.6,
    },
];

/// The eight seeded talent profiles.
pub fn seed_talents() -> Vec<Talent> {
    let now = Utc::now();
    TALENTS
        .iter()
        .map(|f| Talent {
            id: f.id.to_string(),
            name: f.name.to_string(),
            location: f.location.to_string(),
            image: f.image.to_string(),
            starting_price: f.starting_price,
            age: Some(f.age),
            tagline: Some(f.tagline.to_string()),
            description: Some(f.description.to_string()),
            rating: Some(f.rating),
            verified: true,
            created_at: now,
            updated_at: now,
        })
        .collect()
}

/// The three seeded private content records, all locked.
pub fn seed_content() -> Vec<PrivateContent> {
    let now = Utc::now();
    let fixtures = [
        (
            "content-1",
            "Exclusive Photoshoot",
            "Behind the scenes from an exclusive editorial.",
            "https://images.unsplash.com/photo-1524504388940-b1c1722653e1?w=600&q=80",
            50,
            "talent-3",
        ),
        (
            "content-2",
            "Private Gallery",
            "A curated collection of premium photos.",
            "https://images.unsplash.com/photo-1531746020798-e6953c6e8e04?w=600&q=80",
            75,
            "talent-1",
        ),
        (
            "content-3",
            "VIP Access",
            "Exclusive content for premium members only.",
            "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=600&q=80",
            100,
            "talent-2",
        ),
    ];

    fixtures
        .into_iter()
        .map(
            |(id, title, description, image_url, unlock_price, talent_id)| PrivateContent {
                id: id.to_string(),
                title: title.to_string(),
                description: Some(description.to_string()),
                image_url: image_url.to_string(),
                unlock_price,
                talent_id: Some(talent_id.to_string()),
                is_locked: true,
                created_at: now,
            },
        )
        .collect()
}
