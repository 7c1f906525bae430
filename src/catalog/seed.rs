//! Built-in placeholder records loaded at startup.

use chrono::NaiveDate;

use crate::domain::{
    Booking, BookingId, BookingStatus, Category, Event, EventId, Price, Role, User, UserId,
};

fn day(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn event(
    id: &str,
    title: &str,
    description: &str,
    date: NaiveDate,
    time: &str,
    location: &str,
    category: Category,
    organizer: &str,
    price: u64,
    image_hint: &str,
) -> Event {
    Event {
        id: EventId::from(id),
        title: title.to_string(),
        description: description.to_string(),
        date,
        time: time.to_string(),
        location: location.to_string(),
        category,
        organizer: organizer.to_string(),
        price: Price::from_major(price),
        image_url: "https://placehold.co/600x400.png".to_string(),
        image_hint: image_hint.to_string(),
    }
}

/// Seed events.
#[must_use]
pub fn events() -> Vec<Event> {
    vec![
        event(
            "1",
            "Starlight Music Festival",
            "Three stages of indie, electronic and folk acts under the open sky, with food trucks and a late-night silent disco.",
            day(2024, 8, 15),
            "4:00 PM",
            "Sunset Valley",
            Category::Music,
            "Starlight Events",
            150,
            "music festival",
        ),
        event(
            "2",
            "AI in Tech Summit",
            "Keynotes and hands-on workshops on applied machine learning, developer tooling and responsible AI.",
            day(2024, 9, 10),
            "9:00 AM",
            "Metropolis Convention Center",
            Category::Tech,
            "FutureForward",
            2500,
            "tech conference",
        ),
        event(
            "3",
            "Gourmet Food Fair",
            "Tastings from regional chefs, cooking demonstrations and a farmers' market.",
            day(2024, 8, 24),
            "11:00 AM",
            "Central Park",
            Category::Food,
            "Taste Makers",
            500,
            "food festival",
        ),
        event(
            "4",
            "Modern Art Exhibition",
            "A curated collection of contemporary paintings and installations from emerging artists.",
            day(2024, 9, 1),
            "10:00 AM",
            "City Art Gallery",
            Category::Art,
            "Canvas Collective",
            300,
            "art gallery",
        ),
        event(
            "5",
            "City Marathon",
            "Full and half marathon routes through the historic centre, plus a 5K fun run.",
            day(2024, 10, 20),
            "6:00 AM",
            "Central Park",
            Category::Sports,
            "RunCity",
            1200,
            "marathon runners",
        ),
        event(
            "6",
            "Mindful Yoga Retreat",
            "A weekend of guided yoga, meditation and forest walks.",
            day(2024, 9, 21),
            "7:00 AM",
            "Evergreen National Park",
            Category::Wellness,
            "Inner Peace Studio",
            4000,
            "yoga retreat",
        ),
        event(
            "7",
            "Jazz Under the Stars",
            "An intimate evening of live jazz with a quartet and guest vocalists.",
            day(2024, 8, 31),
            "8:00 PM",
            "Sunset Valley",
            Category::Music,
            "Blue Note Society",
            800,
            "jazz concert",
        ),
        event(
            "8",
            "Python Developers Meetup",
            "Lightning talks and a beginner-friendly workshop on async Python.",
            day(2024, 9, 5),
            "6:30 PM",
            "Metropolis Convention Center",
            Category::Tech,
            "PyCommunity",
            0,
            "developer meetup",
        ),
    ]
}

/// Seed booking history.
#[must_use]
pub fn bookings() -> Vec<Booking> {
    let booking = |id: &str, title: &str, event_date, location: &str, booked, status| Booking {
        id: BookingId::from(id),
        event_title: title.to_string(),
        event_date,
        location: location.to_string(),
        booking_date: booked,
        status,
    };
    vec![
        booking(
            "b1",
            "Starlight Music Festival",
            day(2024, 8, 15),
            "Sunset Valley",
            day(2024, 7, 1),
            BookingStatus::Confirmed,
        ),
        booking(
            "b2",
            "AI in Tech Summit",
            day(2024, 9, 10),
            "Metropolis Convention Center",
            day(2024, 7, 5),
            BookingStatus::Pending,
        ),
        booking(
            "b3",
            "Gourmet Food Fair",
            day(2024, 8, 24),
            "Central Park",
            day(2024, 7, 10),
            BookingStatus::Cancelled,
        ),
        booking(
            "b4",
            "Mindful Yoga Retreat",
            day(2024, 9, 21),
            "Evergreen National Park",
            day(2024, 7, 18),
            BookingStatus::Confirmed,
        ),
    ]
}

/// Seed users.
#[must_use]
pub fn users() -> Vec<User> {
    let user = |id: &str, name: &str, email: &str, role, joined| User {
        id: UserId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        role,
        joined_date: joined,
    };
    vec![
        user("u1", "Aarav Sharma", "aarav@example.com", Role::User, day(2023, 1, 15)),
        user("u2", "Priya Patel", "priya@example.com", Role::Organizer, day(2023, 2, 20)),
        user("u3", "Rohan Mehta", "rohan@example.com", Role::Admin, day(2022, 11, 5)),
        user("u4", "Ananya Iyer", "ananya@example.com", Role::User, day(2023, 6, 2)),
        user("u5", "Vikram Singh", "vikram@example.com", Role::Organizer, day(2023, 9, 12)),
    ]
}
