//! Built-in section catalog
//!
//! Every registered example must validate against its own schema; the
//! examples are shown to clients verbatim in validation reports.

use serde_json::json;

use super::registry::SectionSpec;
use super::types::{FieldDef, FieldType, Schema};
use crate::content::SectionType;

/// All built-in specs. `newsletter` is left out on purpose and validates
/// against the generic schema.
pub fn builtin_specs() -> Vec<(SectionType, SectionSpec)> {
    vec![
        (SectionType::Hero, hero()),
        (SectionType::Mission, mission()),
        (SectionType::Team, team()),
        (SectionType::SportsCards, sports_cards()),
        (SectionType::Statistics, statistics()),
        (SectionType::Features, features()),
        (SectionType::Standings, standings()),
        (SectionType::Timeline, timeline()),
        (SectionType::FaqList, faq_list()),
        (SectionType::ContactInfo, contact_info()),
        (SectionType::CallToAction, call_to_action()),
        (SectionType::Testimonials, testimonials()),
        (SectionType::Partners, partners()),
        (SectionType::Steps, steps()),
        (SectionType::RichText, rich_text()),
    ]
}

fn image() -> FieldType {
    FieldType::object(vec![
        FieldDef::required("url", FieldType::url()),
        FieldDef::optional("alt", FieldType::text(150)),
    ])
}

fn button() -> FieldType {
    FieldType::object(vec![
        FieldDef::required("text", FieldType::text(40)),
        FieldDef::required("url", FieldType::url()),
    ])
}

fn title() -> FieldDef {
    FieldDef::required("title", FieldType::text(100))
}

fn hero() -> SectionSpec {
    let schema = Schema::new(vec![
        title(),
        FieldDef::optional("subtitle", FieldType::text(200)),
        FieldDef::required("description", FieldType::text(1000)),
        FieldDef::required("background_image", image()),
        FieldDef::optional("cta_button", button()),
        FieldDef::optional(
            "overlay",
            FieldType::object(vec![
                FieldDef::required("color", FieldType::hex_color()),
                FieldDef::required("opacity", FieldType::opacity()),
            ]),
        ),
    ]);

    SectionSpec::new(
        "Full-width banner at the top of a page with a headline, short text and a background image",
        schema,
    )
    .with_example(json!({
        "title": "Train with the best coaches in the city",
        "subtitle": "Programs for every age and level",
        "description": "Join more than 2,000 athletes who train with us every week.",
        "background_image": {
            "url": "https://cdn.example.com/images/hero-stadium.jpg",
            "alt": "Stadium at night"
        },
        "cta_button": {
            "text": "Join now",
            "url": "https://example.com/join"
        },
        "overlay": {
            "color": "#0B1F3A",
            "opacity": 0.45
        }
    }))
    .describe("title", "Main headline shown over the background image")
    .describe("subtitle", "Secondary line under the headline")
    .describe("description", "Short introductory paragraph")
    .describe("background_image", "Image covering the whole banner")
    .describe("background_image.url", "Absolute URL of the background image")
    .describe("background_image.alt", "Alternative text for screen readers")
    .describe("cta_button", "Optional call-to-action button")
    .describe("overlay.color", "Color laid over the image to keep text readable")
    .describe("overlay.opacity", "Overlay opacity from 0 (transparent) to 1 (opaque)")
    .message(
        "background_image",
        "The hero section needs a background_image object with at least a url",
    )
    .message(
        "background_image.url",
        "The hero section needs a background image URL starting with http:// or https://",
    )
    .message(
        "overlay.color",
        "Overlay color must be a six-digit hex color such as #0B1F3A",
    )
    .message(
        "overlay.opacity",
        "Overlay opacity must be a number from 0 (transparent) to 1 (opaque)",
    )
}

fn mission() -> SectionSpec {
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("description", FieldType::text(2000)),
        FieldDef::required("image", image()),
        FieldDef::required("buttons", FieldType::exactly(2, button())),
    ]);

    SectionSpec::new(
        "Mission statement with an illustration and two call-to-action buttons",
        schema,
    )
    .with_example(json!({
        "title": "Our mission",
        "description": "We make sport accessible to every child in the district, regardless of background.",
        "image": {
            "url": "https://cdn.example.com/images/mission.jpg",
            "alt": "Kids playing football"
        },
        "buttons": [
            { "text": "Become a member", "url": "https://example.com/membership" },
            { "text": "Support us", "url": "https://example.com/donate" }
        ]
    }))
    .describe("description", "Mission statement text")
    .describe("image", "Illustration shown next to the text")
    .describe("buttons", "Exactly two call-to-action buttons")
    .describe("buttons.text", "Button label")
    .describe("buttons.url", "Absolute URL the button links to")
    .message(
        "buttons",
        "The mission section requires exactly 2 call-to-action buttons",
    )
}

fn team() -> SectionSpec {
    let member = FieldType::object(vec![
        FieldDef::required("name", FieldType::text(80)),
        FieldDef::required("role", FieldType::text(80)),
        FieldDef::required("photo", image()),
        FieldDef::optional("bio", FieldType::text(500)),
    ]);
    let schema = Schema::new(vec![
        title(),
        FieldDef::optional("description", FieldType::text(1000)),
        FieldDef::required("members", FieldType::exactly(4, member)),
    ]);

    SectionSpec::new("Team roster showing exactly four people", schema)
        .with_example(json!({
            "title": "Meet the coaches",
            "description": "Certified coaches with international experience.",
            "members": [
                {
                    "name": "Maria Lopez",
                    "role": "Head coach",
                    "photo": { "url": "https://cdn.example.com/team/maria.jpg", "alt": "Maria Lopez" },
                    "bio": "Former national team midfielder."
                },
                {
                    "name": "Tom Becker",
                    "role": "Goalkeeping coach",
                    "photo": { "url": "https://cdn.example.com/team/tom.jpg" }
                },
                {
                    "name": "Aiko Tanaka",
                    "role": "Fitness coach",
                    "photo": { "url": "https://cdn.example.com/team/aiko.jpg" }
                },
                {
                    "name": "Samuel Osei",
                    "role": "Youth coordinator",
                    "photo": { "url": "https://cdn.example.com/team/samuel.jpg" }
                }
            ]
        }))
        .describe("members", "Exactly four team members")
        .describe("members.name", "Full name of the team member")
        .describe("members.role", "Job title or role")
        .describe("members.photo", "Portrait of the team member")
        .describe("members.photo.url", "Absolute URL of the portrait")
        .describe("members.bio", "Optional short biography")
        .message("members", "The team section requires exactly 4 members")
        .message(
            "members.photo.url",
            "Each team member needs a photo URL starting with http:// or https://",
        )
}

fn sports_cards() -> SectionSpec {
    let card = FieldType::object(vec![
        FieldDef::required("title", FieldType::text(60)),
        FieldDef::required("description", FieldType::text(300)),
        FieldDef::required("icon", FieldType::url()),
        FieldDef::optional("link", FieldType::url()),
    ]);
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("cards", FieldType::exactly(4, card)),
    ]);

    SectionSpec::new("Grid of exactly four sport disciplines", schema)
        .with_example(json!({
            "title": "Our sports",
            "cards": [
                {
                    "title": "Football",
                    "description": "Youth and adult squads, five training days a week.",
                    "icon": "https://cdn.example.com/icons/football.svg",
                    "link": "https://example.com/sports/football"
                },
                {
                    "title": "Basketball",
                    "description": "Indoor court with evening sessions.",
                    "icon": "https://cdn.example.com/icons/basketball.svg"
                },
                {
                    "title": "Swimming",
                    "description": "Olympic-size pool and certified instructors.",
                    "icon": "https://cdn.example.com/icons/swimming.svg"
                },
                {
                    "title": "Tennis",
                    "description": "Four clay courts open all year.",
                    "icon": "https://cdn.example.com/icons/tennis.svg"
                }
            ]
        }))
        .describe("cards", "Exactly four sport cards")
        .describe("cards.title", "Name of the sport")
        .describe("cards.description", "One or two sentences about the discipline")
        .describe("cards.icon", "Absolute URL of the card icon")
        .describe("cards.link", "Optional link to the discipline page")
        .message("cards", "The sports cards section requires exactly 4 cards")
}

fn statistics() -> SectionSpec {
    let item = FieldType::object(vec![
        FieldDef::required("label", FieldType::text(60)),
        FieldDef::required("value", FieldType::number(Some(0.0), None)),
        FieldDef::required("percentage", FieldType::percentage()),
    ]);
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("items", FieldType::list(item, 1, Some(8))),
    ]);

    SectionSpec::new("Key figures with a value and a progress percentage", schema)
        .with_example(json!({
            "title": "Club in numbers",
            "items": [
                { "label": "Active members", "value": 2150, "percentage": 86 },
                { "label": "Trophies won", "value": 34, "percentage": 68.5 }
            ]
        }))
        .describe("items", "Between 1 and 8 statistics")
        .describe("items.label", "What the number measures")
        .describe("items.value", "The figure itself")
        .describe("items.percentage", "Progress bar fill from 0 to 100")
        .message(
            "items.percentage",
            "Percentage must be a number from 0 to 100",
        )
}

fn features() -> SectionSpec {
    let item = FieldType::object(vec![
        FieldDef::required("title", FieldType::text(80)),
        FieldDef::required("description", FieldType::text(500)),
        FieldDef::optional("icon", FieldType::url()),
    ]);
    let schema = Schema::new(vec![
        title(),
        FieldDef::optional("description", FieldType::text(1000)),
        FieldDef::required("items", FieldType::list(item, 1, Some(12))),
    ]);

    SectionSpec::new("List of product or service features", schema)
        .with_example(json!({
            "title": "Why train with us",
            "items": [
                {
                    "title": "Modern facilities",
                    "description": "Renovated gym, pool and outdoor pitches.",
                    "icon": "https://cdn.example.com/icons/facility.svg"
                },
                {
                    "title": "Flexible schedule",
                    "description": "Morning, evening and weekend sessions."
                }
            ]
        }))
        .describe("items", "Between 1 and 12 features")
        .describe("items.title", "Feature name")
        .describe("items.description", "Feature explanation")
        .describe("items.icon", "Optional icon URL")
}

fn standings() -> SectionSpec {
    let entry = FieldType::object(vec![
        FieldDef::required("position", FieldType::integer(Some(1), None)),
        FieldDef::required("team", FieldType::text(80)),
        FieldDef::required("played", FieldType::integer(Some(0), None)),
        FieldDef::required("won", FieldType::integer(Some(0), None)),
        FieldDef::required("drawn", FieldType::integer(Some(0), None)),
        FieldDef::required("lost", FieldType::integer(Some(0), None)),
        FieldDef::required("points", FieldType::integer(Some(0), None)),
    ]);
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("season", FieldType::text(20)),
        FieldDef::required("entries", FieldType::list(entry, 1, Some(40))),
        FieldDef::optional("updated_on", FieldType::date()),
    ]);

    SectionSpec::new("League table for one competition and season", schema)
        .with_example(json!({
            "title": "City league, division one",
            "season": "2024/25",
            "entries": [
                { "position": 1, "team": "Riverside FC", "played": 10, "won": 8, "drawn": 1, "lost": 1, "points": 25 },
                { "position": 2, "team": "Northgate United", "played": 10, "won": 7, "drawn": 2, "lost": 1, "points": 23 }
            ],
            "updated_on": "2024-11-03"
        }))
        .describe("season", "Season label such as 2024/25")
        .describe("entries", "Table rows, 1 to 40")
        .describe("entries.position", "Rank in the table, starting at 1")
        .describe("entries.points", "Total points")
        .describe("updated_on", "Date the table was last updated")
        .message(
            "entries.position",
            "Table position must be a whole number starting at 1",
        )
}

fn timeline() -> SectionSpec {
    let event = FieldType::object(vec![
        FieldDef::required("date", FieldType::date()),
        FieldDef::required("title", FieldType::text(120)),
        FieldDef::required("description", FieldType::text(2000)),
        FieldDef::optional("image", image()),
    ]);
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("events", FieldType::list(event, 1, Some(50))),
    ]);

    SectionSpec::new("Chronological list of dated events", schema)
        .with_example(json!({
            "title": "Club history",
            "events": [
                {
                    "date": "1998-05-14",
                    "title": "Club founded",
                    "description": "Twelve friends registered the club with the city council."
                },
                {
                    "date": "2016-09-01",
                    "title": "New stadium",
                    "description": "The 5,000-seat stadium opened its doors.",
                    "image": { "url": "https://cdn.example.com/images/stadium-2016.jpg" }
                }
            ]
        }))
        .describe("events", "Between 1 and 50 events")
        .describe("events.date", "Event date in YYYY-MM-DD form")
        .describe("events.title", "Event headline")
        .describe("events.description", "What happened")
        .message("events.date", "Event dates must use the YYYY-MM-DD form")
}

fn faq_list() -> SectionSpec {
    let item = FieldType::object(vec![
        FieldDef::required("question", FieldType::text(300)),
        FieldDef::required("answer", FieldType::text(5000)),
    ]);
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("items", FieldType::list(item, 1, Some(50))),
    ]);

    SectionSpec::new("Frequently asked questions with answers", schema)
        .with_example(json!({
            "title": "Frequently asked questions",
            "items": [
                {
                    "question": "How old does my child need to be to join?",
                    "answer": "Our youngest group starts at five years old."
                },
                {
                    "question": "Is the first training free?",
                    "answer": "Yes, every new member gets one free trial session."
                }
            ]
        }))
        .describe("items", "Between 1 and 50 questions")
        .describe("items.question", "Question text")
        .describe("items.answer", "Answer text")
}

fn contact_info() -> SectionSpec {
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("email", FieldType::email()),
        FieldDef::optional("phone", FieldType::formatted(super::types::StringFormat::Phone)),
        FieldDef::optional("address", FieldType::text(300)),
        FieldDef::optional("map_url", FieldType::url()),
        FieldDef::optional("working_hours", FieldType::text(200)),
    ]);

    SectionSpec::new("Contact details with email, phone, address and map", schema)
        .with_example(json!({
            "title": "Get in touch",
            "email": "info@example.com",
            "phone": "+1 (555) 010-2030",
            "address": "12 Stadium Road, Springfield",
            "map_url": "https://maps.example.com/?q=12+Stadium+Road",
            "working_hours": "Mon-Fri 09:00-20:00"
        }))
        .describe("email", "Public contact email address")
        .describe("phone", "Public phone number")
        .describe("map_url", "Link to an online map")
        .message("email", "Contact email must be a valid address such as info@example.com")
}

fn call_to_action() -> SectionSpec {
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("description", FieldType::text(500)),
        FieldDef::required("button", button()),
        FieldDef::optional("background_color", FieldType::hex_color()),
    ]);

    SectionSpec::new("Prominent prompt with a single button", schema)
        .with_example(json!({
            "title": "Ready to start?",
            "description": "Book a free trial session this week.",
            "button": { "text": "Book now", "url": "https://example.com/trial" },
            "background_color": "#FF6B00"
        }))
        .describe("button", "The button shown under the text")
        .describe("background_color", "Background color in #RRGGBB form")
        .message(
            "background_color",
            "Background color must be a six-digit hex color such as #FF6B00",
        )
}

fn testimonials() -> SectionSpec {
    let item = FieldType::object(vec![
        FieldDef::required("author", FieldType::text(80)),
        FieldDef::required("quote", FieldType::text(1000)),
        FieldDef::optional("rating", FieldType::integer(Some(1), Some(5))),
        FieldDef::optional("avatar", image()),
    ]);
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("items", FieldType::list(item, 1, Some(10))),
    ]);

    SectionSpec::new("Quotes from members or customers", schema)
        .with_example(json!({
            "title": "What parents say",
            "items": [
                {
                    "author": "Elena P.",
                    "quote": "My son cannot wait for Saturday training.",
                    "rating": 5
                },
                {
                    "author": "David K.",
                    "quote": "Professional coaches and a friendly atmosphere.",
                    "rating": 4,
                    "avatar": { "url": "https://cdn.example.com/avatars/david.jpg" }
                }
            ]
        }))
        .describe("items.author", "Who said it")
        .describe("items.quote", "The testimonial text")
        .describe("items.rating", "Optional rating from 1 to 5")
        .message("items.rating", "Rating must be a whole number from 1 to 5")
}

fn partners() -> SectionSpec {
    let logo = FieldType::object(vec![
        FieldDef::required("name", FieldType::text(80)),
        FieldDef::required("logo", image()),
        FieldDef::optional("website", FieldType::url()),
    ]);
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("logos", FieldType::list(logo, 1, Some(30))),
    ]);

    SectionSpec::new("Strip of partner and sponsor logos", schema)
        .with_example(json!({
            "title": "Our partners",
            "logos": [
                {
                    "name": "Springfield Bank",
                    "logo": { "url": "https://cdn.example.com/partners/bank.png", "alt": "Springfield Bank" },
                    "website": "https://bank.example.com"
                }
            ]
        }))
        .describe("logos", "Between 1 and 30 partners")
        .describe("logos.name", "Partner name")
        .describe("logos.logo", "Partner logo image")
        .describe("logos.website", "Optional partner website")
}

fn steps() -> SectionSpec {
    let step = FieldType::object(vec![
        FieldDef::required("number", FieldType::integer(Some(1), None)),
        FieldDef::required("title", FieldType::text(80)),
        FieldDef::required("description", FieldType::text(500)),
        FieldDef::optional("icon", FieldType::url()),
    ]);
    let schema = Schema::new(vec![
        title(),
        FieldDef::required("steps", FieldType::list(step, 1, Some(10))),
    ]);

    SectionSpec::new("Numbered walkthrough of a process", schema)
        .with_example(json!({
            "title": "How it works",
            "steps": [
                { "number": 1, "title": "Sign up", "description": "Fill in the online form." },
                { "number": 2, "title": "Pick a group", "description": "Choose a sport and a schedule." },
                { "number": 3, "title": "Start training", "description": "Come to your first session." }
            ]
        }))
        .describe("steps", "Between 1 and 10 steps")
        .describe("steps.number", "Step number starting at 1")
        .describe("steps.title", "Step headline")
        .describe("steps.description", "What happens in this step")
}

fn rich_text() -> SectionSpec {
    let schema = Schema::new(vec![
        FieldDef::required("title", FieldType::text(200)),
        FieldDef::required("body", FieldType::text(50000)),
        FieldDef::optional("last_updated", FieldType::date()),
    ]);

    SectionSpec::new("Long-form document such as a policy or terms", schema)
        .with_example(json!({
            "title": "Privacy policy",
            "body": "We only collect the data needed to manage your membership...",
            "last_updated": "2024-01-15"
        }))
        .describe("body", "Document text; HTML is stored as-is")
        .describe("last_updated", "Date of the last revision")
}
