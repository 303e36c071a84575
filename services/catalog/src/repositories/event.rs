//! Seeded event catalog

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;

use crate::models::Event;

#[allow(clippy::too_many_arguments)]
fn seed(
    id: u32,
    title: &str,
    description: &str,
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
    location: &str,
    price_cents: i64,
    image: &str,
    category: &str,
    (available_tickets, total_tickets): (u32, u32),
) -> Event {
    Event {
        id,
        title: title.to_string(),
        description: description.to_string(),
        date: NaiveDate::from_ymd_opt(year, month, day).expect("Invalid seed event date"),
        time: NaiveTime::from_hms_opt(hour, minute, 0).expect("Invalid seed event time"),
        location: location.to_string(),
        price: Decimal::new(price_cents, 2),
        image: image.to_string(),
        category: category.to_string(),
        available_tickets,
        total_tickets,
    }
}

/// The fixed event list the client ships with
pub fn seeded_events() -> Vec<Event> {
    vec![
        seed(
            1,
            "Festival de Música Eletrônica",
            "Uma noite inesquecível com os melhores DJs do Brasil e internacional",
            (2025, 3, 15),
            (22, 0),
            "Arena SP - São Paulo",
            12000,
            "https://images.unsplash.com/photo-1514525253161-7a46d19cd819?w=400",
            "Música",
            (450, 500),
        ),
        seed(
            2,
            "Stand-up Comedy Show",
            "Noite de muitas risadas com os melhores comediantes da cidade",
            (2025, 3, 20),
            (20, 0),
            "Teatro Municipal - São Paulo",
            8000,
            "https://images.unsplash.com/photo-1516450360452-9312f5e86fc7?w=400",
            "Comédia",
            (180, 200),
        ),
        seed(
            3,
            "Conferência Tech 2025",
            "As últimas tendências em tecnologia e inovação",
            (2025, 3, 25),
            (9, 0),
            "Centro de Convenções - São Paulo",
            20000,
            "https://images.unsplash.com/photo-1540575467063-178a50c2df87?w=400",
            "Tecnologia",
            (280, 300),
        ),
        seed(
            4,
            "Workshop de Culinária",
            "Aprenda pratos incríveis com chefs renomados",
            (2025, 3, 30),
            (14, 0),
            "Instituto Gastronômico - São Paulo",
            15000,
            "https://images.unsplash.com/photo-1556909114-f6e7ad7d3136?w=400",
            "Gastronomia",
            (25, 30),
        ),
    ]
}
